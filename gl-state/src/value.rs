//! Captured state values

use std::fmt;

use crate::context::StateContext;
use crate::identifier::{StateId, ValueShape};

/// Smallest buffer an opaque read gets; fits every fixed-size GL query
const OPAQUE_READ_LEN: usize = 16;

/// Variable-length list queries, paired with the query for their length
const VARIABLE_LENGTH_LISTS: &[(u32, u32)] = &[
    // COMPRESSED_TEXTURE_FORMATS
    (0x86A3, 0x86A2),
    // PROGRAM_BINARY_FORMATS
    (0x87FF, 0x87FE),
    // SHADER_BINARY_FORMATS
    (0x8DF8, 0x8DF9),
];

/// One captured reading, tagged with its shape
pub enum StateValue<C: StateContext + ?Sized> {
    Bool(bool),
    Int(i32),
    Float(f32),
    Float2([f32; 2]),
    Int4([i32; 4]),
    Float4([f32; 4]),
    Bool4([bool; 4]),
    Buffer(Option<C::Buffer>),
    Framebuffer(Option<C::Framebuffer>),
    Renderbuffer(Option<C::Renderbuffer>),
    Program(Option<C::Program>),
    Texture(Option<C::Texture>),
}

impl<C: StateContext + ?Sized> StateValue<C> {
    /// Read the current value of `id` with the query its shape calls for
    pub fn read(gl: &C, id: StateId) -> Self {
        let pname = id.raw();
        match id.shape() {
            ValueShape::Enabled => StateValue::Bool(gl.is_enabled(pname)),
            ValueShape::Bool => StateValue::Bool(gl.get_parameter_bool(pname)),
            ValueShape::Int => StateValue::Int(gl.get_parameter_i32(pname)),
            ValueShape::Float => StateValue::Float(gl.get_parameter_f32(pname)),
            ValueShape::Float2 => {
                let mut v = [0.0f32; 2];
                gl.get_parameter_f32_slice(pname, &mut v);
                StateValue::Float2(v)
            }
            ValueShape::Int4 => {
                let mut v = [0i32; 4];
                gl.get_parameter_i32_slice(pname, &mut v);
                StateValue::Int4(v)
            }
            ValueShape::Float4 => {
                let mut v = [0.0f32; 4];
                gl.get_parameter_f32_slice(pname, &mut v);
                StateValue::Float4(v)
            }
            ValueShape::Bool4 => StateValue::Bool4(gl.get_parameter_bool4(pname)),
            ValueShape::Buffer => StateValue::Buffer(gl.get_parameter_buffer(pname)),
            ValueShape::Framebuffer => {
                StateValue::Framebuffer(gl.get_parameter_framebuffer(pname))
            }
            ValueShape::Renderbuffer => {
                StateValue::Renderbuffer(gl.get_parameter_renderbuffer(pname))
            }
            ValueShape::Program => StateValue::Program(gl.get_parameter_program(pname)),
            ValueShape::Texture => StateValue::Texture(gl.get_parameter_texture(pname)),
            ValueShape::Opaque => StateValue::Int(read_opaque(gl, pname)),
        }
    }

    /// The shape this value was read with. `Enabled` reads report `Bool` and
    /// `Opaque` reads report `Int`.
    pub fn shape(&self) -> ValueShape {
        match self {
            StateValue::Bool(_) => ValueShape::Bool,
            StateValue::Int(_) => ValueShape::Int,
            StateValue::Float(_) => ValueShape::Float,
            StateValue::Float2(_) => ValueShape::Float2,
            StateValue::Int4(_) => ValueShape::Int4,
            StateValue::Float4(_) => ValueShape::Float4,
            StateValue::Bool4(_) => ValueShape::Bool4,
            StateValue::Buffer(_) => ValueShape::Buffer,
            StateValue::Framebuffer(_) => ValueShape::Framebuffer,
            StateValue::Renderbuffer(_) => ValueShape::Renderbuffer,
            StateValue::Program(_) => ValueShape::Program,
            StateValue::Texture(_) => ValueShape::Texture,
        }
    }
}

/// Read a parameter of unknown arity and keep its first element.
///
/// The context may write any number of integers for an unknown name, so the
/// buffer is never a single slot.
fn read_opaque<C: StateContext + ?Sized>(gl: &C, pname: u32) -> i32 {
    let len = VARIABLE_LENGTH_LISTS
        .iter()
        .find(|&&(list, _)| list == pname)
        .map_or(0, |&(_, count)| gl.get_parameter_i32(count).max(0) as usize)
        .max(OPAQUE_READ_LEN);
    let mut values = vec![0i32; len];
    gl.get_parameter_i32_slice(pname, &mut values);
    values[0]
}

// Manual impls: deriving would put the bounds on `C` rather than on its handles.

impl<C: StateContext + ?Sized> Clone for StateValue<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: StateContext + ?Sized> Copy for StateValue<C> {}

impl<C: StateContext + ?Sized> PartialEq for StateValue<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StateValue::Bool(a), StateValue::Bool(b)) => a == b,
            (StateValue::Int(a), StateValue::Int(b)) => a == b,
            (StateValue::Float(a), StateValue::Float(b)) => a == b,
            (StateValue::Float2(a), StateValue::Float2(b)) => a == b,
            (StateValue::Int4(a), StateValue::Int4(b)) => a == b,
            (StateValue::Float4(a), StateValue::Float4(b)) => a == b,
            (StateValue::Bool4(a), StateValue::Bool4(b)) => a == b,
            (StateValue::Buffer(a), StateValue::Buffer(b)) => a == b,
            (StateValue::Framebuffer(a), StateValue::Framebuffer(b)) => a == b,
            (StateValue::Renderbuffer(a), StateValue::Renderbuffer(b)) => a == b,
            (StateValue::Program(a), StateValue::Program(b)) => a == b,
            (StateValue::Texture(a), StateValue::Texture(b)) => a == b,
            _ => false,
        }
    }
}

impl<C: StateContext + ?Sized> fmt::Debug for StateValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            StateValue::Int(v) => f.debug_tuple("Int").field(v).finish(),
            StateValue::Float(v) => f.debug_tuple("Float").field(v).finish(),
            StateValue::Float2(v) => f.debug_tuple("Float2").field(v).finish(),
            StateValue::Int4(v) => f.debug_tuple("Int4").field(v).finish(),
            StateValue::Float4(v) => f.debug_tuple("Float4").field(v).finish(),
            StateValue::Bool4(v) => f.debug_tuple("Bool4").field(v).finish(),
            StateValue::Buffer(v) => f.debug_tuple("Buffer").field(v).finish(),
            StateValue::Framebuffer(v) => f.debug_tuple("Framebuffer").field(v).finish(),
            StateValue::Renderbuffer(v) => f.debug_tuple("Renderbuffer").field(v).finish(),
            StateValue::Program(v) => f.debug_tuple("Program").field(v).finish(),
            StateValue::Texture(v) => f.debug_tuple("Texture").field(v).finish(),
        }
    }
}
