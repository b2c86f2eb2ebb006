//! Push/pop stack for OpenGL and WebGL pipeline state
//!
//! Wrap a region of rendering calls with [`StateStack::push`] and
//! [`StateStack::pop`] and every tracked setting touched in between is put
//! back afterwards, without the caller needing to know which settings the
//! region changed.
//!
//! # Features
//!
//! - **Primitive state**: capabilities, bindings, vectors and scalars, each
//!   restored with the matching setter
//! - **Composite state**: multi-parameter settings such as
//!   `glBlendFuncSeparate` captured and restored as one unit
//! - **Texture units**: 2D and cube map bindings of every texture unit
//! - **Any context**: implement [`StateContext`] for your bindings, or use the
//!   built-in implementation for `glow::Context` (feature `glow`)
//!
//! # Example
//!
//! ```rust,no_run
//! use gl_state_stack::{StateContext, StateId, StateStack};
//!
//! # fn draw_overlay<C: StateContext>(_gl: &C) {}
//! // `gl` is typically a `glow::Context`
//! # fn demo<C: StateContext>(gl: &C) {
//! // Track everything the crate knows how to restore
//! let mut stack = StateStack::new(gl);
//!
//! {
//!     let _scope = stack.scope(gl);
//!     draw_overlay(gl);
//! } // state restored here
//!
//! // Or track a handful of identifiers explicitly
//! let mut small = StateStack::with_variables(gl, [StateId::Blend, StateId::Viewport]);
//! small.push(gl);
//! draw_overlay(gl);
//! small.pop(gl);
//! # }
//! ```

// Re-export glow to make it easier for users to use the correct version.
#[cfg(feature = "glow")]
pub use glow;

#[macro_use]
mod logging;

mod backend;
mod config;
mod context;
mod defaults;
mod error;
mod groups;
mod identifier;
mod restore;
mod stack;
mod value;

#[cfg(feature = "glow")]
pub use backend::{GlBuffer, GlFramebuffer, GlProgram, GlRenderbuffer, GlTexture};
pub use config::*;
pub use context::*;
pub use defaults::*;
pub use error::*;
pub use groups::*;
pub use identifier::*;
pub use logging::{init_tracing, init_tracing_with_filter};
pub use restore::*;
pub use stack::*;
pub use value::*;
