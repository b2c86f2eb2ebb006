//! Default tracked identifiers

use crate::context::StateContext;
use crate::groups::CompositeState;
use crate::identifier::StateId;

/// Supplies the identifiers to track when a stack is built without an
/// explicit list
pub trait DefaultVariables<C: StateContext + ?Sized> {
    fn variables(&self, gl: &C) -> Vec<StateId>;
}

impl<C, F> DefaultVariables<C> for F
where
    C: StateContext + ?Sized,
    F: Fn(&C) -> Vec<StateId>,
{
    fn variables(&self, gl: &C) -> Vec<StateId> {
        self(gl)
    }
}

/// Everything the stack knows how to restore.
///
/// The WebGL-only pixel storage parameters are only included on `wasm32`,
/// where the context is a WebGL context; native drivers reject them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardVariables;

const PRIMITIVES: &[StateId] = &[
    StateId::ActiveTexture,
    StateId::ArrayBufferBinding,
    StateId::ElementArrayBufferBinding,
    StateId::FramebufferBinding,
    StateId::RenderbufferBinding,
    StateId::CurrentProgram,
    StateId::BlendColor,
    StateId::ColorClearValue,
    StateId::ColorWritemask,
    StateId::DepthRange,
    StateId::ScissorBox,
    StateId::Viewport,
    StateId::CullFaceMode,
    StateId::DepthClearValue,
    StateId::DepthFunc,
    StateId::DepthWritemask,
    StateId::FrontFace,
    StateId::LineWidth,
    StateId::StencilWritemask,
    StateId::StencilBackWritemask,
    StateId::StencilClearValue,
    StateId::GenerateMipmapHint,
    StateId::PackAlignment,
    StateId::UnpackAlignment,
    StateId::Blend,
    StateId::CullFace,
    StateId::DepthTest,
    StateId::Dither,
    StateId::PolygonOffsetFill,
    StateId::SampleCoverage,
    StateId::ScissorTest,
    StateId::StencilTest,
    StateId::TextureBinding2D,
    StateId::TextureBindingCubeMap,
];

const WEBGL_PIXEL_STORAGE: &[StateId] = &[
    StateId::UnpackFlipYWebgl,
    StateId::UnpackPremultiplyAlphaWebgl,
    StateId::UnpackColorspaceConversionWebgl,
];

impl StandardVariables {
    /// The list for a native (non-WebGL) context
    pub fn native() -> Vec<StateId> {
        let mut ids = PRIMITIVES.to_vec();
        ids.extend(
            CompositeState::ALL
                .iter()
                .flat_map(|group| group.members().iter().copied()),
        );
        ids
    }

    /// The list for a WebGL context
    pub fn webgl() -> Vec<StateId> {
        let mut ids = Self::native();
        ids.extend_from_slice(WEBGL_PIXEL_STORAGE);
        ids
    }
}

impl<C: StateContext + ?Sized> DefaultVariables<C> for StandardVariables {
    fn variables(&self, _gl: &C) -> Vec<StateId> {
        if cfg!(target_arch = "wasm32") {
            Self::webgl()
        } else {
            Self::native()
        }
    }
}
