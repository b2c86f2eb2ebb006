//! Identifier to restore-call dispatch

use crate::context::{StateContext, consts};
use crate::identifier::StateId;
use crate::value::StateValue;

/// What happened when a captured primitive was replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The matching setter was called
    Applied,
    /// The identifier has no restore rule of its own
    NoRule,
    /// The captured value does not have the shape the restore rule expects
    ShapeMismatch,
}

/// Replay one captured primitive into the context.
///
/// Composite members, texture targets/bindings and read-only limits have no
/// rule here: composites are restored through their group, texture bindings
/// through the per-unit texture snapshot.
pub fn restore_primitive<C: StateContext + ?Sized>(
    gl: &C,
    id: StateId,
    value: StateValue<C>,
) -> RestoreOutcome {
    use StateValue as V;

    let pname = id.raw();
    match id {
        // Bindings
        StateId::ActiveTexture => match value {
            V::Int(unit) => gl.active_texture(unit as u32),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::ArrayBufferBinding => match value {
            V::Buffer(buffer) => gl.bind_buffer(consts::ARRAY_BUFFER, buffer),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::ElementArrayBufferBinding => match value {
            V::Buffer(buffer) => gl.bind_buffer(consts::ELEMENT_ARRAY_BUFFER, buffer),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::FramebufferBinding => match value {
            V::Framebuffer(framebuffer) => gl.bind_framebuffer(consts::FRAMEBUFFER, framebuffer),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::RenderbufferBinding => match value {
            V::Renderbuffer(renderbuffer) => {
                gl.bind_renderbuffer(consts::RENDERBUFFER, renderbuffer)
            }
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::CurrentProgram => match value {
            V::Program(program) => gl.use_program(program),
            _ => return RestoreOutcome::ShapeMismatch,
        },

        // Multi-component values
        StateId::BlendColor => match value {
            V::Float4([r, g, b, a]) => gl.blend_color(r, g, b, a),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::ColorClearValue => match value {
            V::Float4([r, g, b, a]) => gl.clear_color(r, g, b, a),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::ColorWritemask => match value {
            V::Bool4([r, g, b, a]) => gl.color_mask(r, g, b, a),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::DepthRange => match value {
            V::Float2([near, far]) => gl.depth_range(near, far),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::ScissorBox => match value {
            V::Int4([x, y, w, h]) => gl.scissor(x, y, w, h),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::Viewport => match value {
            V::Int4([x, y, w, h]) => gl.viewport(x, y, w, h),
            _ => return RestoreOutcome::ShapeMismatch,
        },

        // Scalars
        StateId::CullFaceMode => match value {
            V::Int(mode) => gl.cull_face(mode as u32),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::DepthClearValue => match value {
            V::Float(depth) => gl.clear_depth(depth),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::DepthFunc => match value {
            V::Int(func) => gl.depth_func(func as u32),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::DepthWritemask => match value {
            V::Bool(flag) => gl.depth_mask(flag),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::FrontFace => match value {
            V::Int(mode) => gl.front_face(mode as u32),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::LineWidth => match value {
            V::Float(width) => gl.line_width(width),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::StencilWritemask => match value {
            V::Int(mask) => gl.stencil_mask_separate(consts::FRONT, mask as u32),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::StencilBackWritemask => match value {
            V::Int(mask) => gl.stencil_mask_separate(consts::BACK, mask as u32),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::StencilClearValue => match value {
            V::Int(stencil) => gl.clear_stencil(stencil),
            _ => return RestoreOutcome::ShapeMismatch,
        },
        StateId::GenerateMipmapHint => match value {
            V::Int(mode) => gl.hint(pname, mode as u32),
            _ => return RestoreOutcome::ShapeMismatch,
        },

        // Pixel storage
        StateId::PackAlignment
        | StateId::UnpackAlignment
        | StateId::UnpackColorspaceConversionWebgl
        | StateId::UnpackFlipYWebgl
        | StateId::UnpackPremultiplyAlphaWebgl => match value {
            V::Int(param) => gl.pixel_store_i32(pname, param),
            V::Bool(param) => gl.pixel_store_bool(pname, param),
            _ => return RestoreOutcome::ShapeMismatch,
        },

        // Capabilities
        StateId::Blend
        | StateId::CullFace
        | StateId::DepthTest
        | StateId::Dither
        | StateId::PolygonOffsetFill
        | StateId::SampleCoverage
        | StateId::ScissorTest
        | StateId::StencilTest => match value {
            V::Bool(true) => gl.enable(pname),
            V::Bool(false) => gl.disable(pname),
            _ => return RestoreOutcome::ShapeMismatch,
        },

        // Restored elsewhere or not settable
        StateId::Texture
        | StateId::Texture2D
        | StateId::TextureCubeMap
        | StateId::TextureBinding2D
        | StateId::TextureBindingCubeMap
        | StateId::MaxTextureImageUnits
        | StateId::BlendEquationRgb
        | StateId::BlendEquationAlpha
        | StateId::BlendSrcRgb
        | StateId::BlendDstRgb
        | StateId::BlendSrcAlpha
        | StateId::BlendDstAlpha
        | StateId::SampleCoverageValue
        | StateId::SampleCoverageInvert
        | StateId::PolygonOffsetFactor
        | StateId::PolygonOffsetUnits
        | StateId::StencilFunc
        | StateId::StencilRef
        | StateId::StencilValueMask
        | StateId::StencilBackFunc
        | StateId::StencilBackRef
        | StateId::StencilBackValueMask
        | StateId::StencilFail
        | StateId::StencilPassDepthFail
        | StateId::StencilPassDepthPass
        | StateId::StencilBackFail
        | StateId::StencilBackPassDepthFail
        | StateId::StencilBackPassDepthPass
        | StateId::Unknown(_) => return RestoreOutcome::NoRule,
    }
    RestoreOutcome::Applied
}
