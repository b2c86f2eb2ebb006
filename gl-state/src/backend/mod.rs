//! `StateContext` implementations for concrete GL bindings

#[cfg(feature = "glow")]
mod glow;

#[cfg(feature = "glow")]
pub use self::glow::{GlBuffer, GlFramebuffer, GlProgram, GlRenderbuffer, GlTexture};
