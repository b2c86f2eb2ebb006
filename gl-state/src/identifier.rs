//! State identifiers
//!
//! Every piece of pipeline state the stack knows how to capture is a variant of
//! [`StateId`]. Identifiers the crate does not know are carried as
//! [`StateId::Unknown`] so they can still be captured, and are skipped on
//! restore.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::StateStackError;

/// How the value behind an identifier is read from the context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    /// Capability toggle, read with `is_enabled`
    Enabled,
    Bool,
    Int,
    Float,
    Float2,
    Int4,
    Float4,
    Bool4,
    Buffer,
    Framebuffer,
    Renderbuffer,
    Program,
    Texture,
    /// Identifier of unknown arity, read through a padded integer slice
    Opaque,
}

macro_rules! state_ids {
    ($(
        $(#[$meta:meta])*
        $variant:ident = $raw:literal, $name:literal, $shape:ident;
    )*) => {
        /// A queryable/settable piece of context state
        ///
        /// Equality, hashing and ordering all go through [`StateId::raw`], so
        /// `StateId::Unknown(0x0BE2)` and `StateId::Blend` are the same slot.
        #[derive(Debug, Clone, Copy)]
        pub enum StateId {
            $(
                $(#[$meta])*
                $variant,
            )*
            /// An identifier without a variant of its own
            Unknown(u32),
        }

        impl StateId {
            /// Every identifier with a variant, in declaration order
            pub const ALL: &'static [StateId] = &[$(StateId::$variant,)*];

            /// The numeric GL enum value
            pub const fn raw(self) -> u32 {
                match self {
                    $(StateId::$variant => $raw,)*
                    StateId::Unknown(raw) => raw,
                }
            }

            /// Map a GL enum value to its identifier
            pub const fn from_raw(raw: u32) -> Self {
                match raw {
                    $($raw => StateId::$variant,)*
                    other => StateId::Unknown(other),
                }
            }

            /// The GL constant name without the `GL_` prefix
            pub const fn name(self) -> Option<&'static str> {
                match self {
                    $(StateId::$variant => Some($name),)*
                    StateId::Unknown(_) => None,
                }
            }

            /// How the value is read from the context
            pub const fn shape(self) -> ValueShape {
                match self {
                    $(StateId::$variant => ValueShape::$shape,)*
                    StateId::Unknown(_) => ValueShape::Opaque,
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(StateId::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

state_ids! {
    // Texture units
    ActiveTexture = 0x84E0, "ACTIVE_TEXTURE", Int;
    Texture = 0x1702, "TEXTURE", Int;
    Texture2D = 0x0DE1, "TEXTURE_2D", Int;
    TextureCubeMap = 0x8513, "TEXTURE_CUBE_MAP", Int;
    TextureBinding2D = 0x8069, "TEXTURE_BINDING_2D", Texture;
    TextureBindingCubeMap = 0x8514, "TEXTURE_BINDING_CUBE_MAP", Texture;
    MaxTextureImageUnits = 0x8872, "MAX_TEXTURE_IMAGE_UNITS", Int;

    // Bindings
    ArrayBufferBinding = 0x8894, "ARRAY_BUFFER_BINDING", Buffer;
    ElementArrayBufferBinding = 0x8895, "ELEMENT_ARRAY_BUFFER_BINDING", Buffer;
    FramebufferBinding = 0x8CA6, "FRAMEBUFFER_BINDING", Framebuffer;
    RenderbufferBinding = 0x8CA7, "RENDERBUFFER_BINDING", Renderbuffer;
    CurrentProgram = 0x8B8D, "CURRENT_PROGRAM", Program;

    // Vector state
    BlendColor = 0x8005, "BLEND_COLOR", Float4;
    ColorClearValue = 0x0C22, "COLOR_CLEAR_VALUE", Float4;
    ColorWritemask = 0x0C23, "COLOR_WRITEMASK", Bool4;
    DepthRange = 0x0B70, "DEPTH_RANGE", Float2;
    ScissorBox = 0x0C10, "SCISSOR_BOX", Int4;
    Viewport = 0x0BA2, "VIEWPORT", Int4;

    // Scalar state
    CullFaceMode = 0x0B45, "CULL_FACE_MODE", Int;
    DepthClearValue = 0x0B73, "DEPTH_CLEAR_VALUE", Float;
    DepthFunc = 0x0B74, "DEPTH_FUNC", Int;
    DepthWritemask = 0x0B72, "DEPTH_WRITEMASK", Bool;
    FrontFace = 0x0B46, "FRONT_FACE", Int;
    LineWidth = 0x0B21, "LINE_WIDTH", Float;
    StencilWritemask = 0x0B98, "STENCIL_WRITEMASK", Int;
    StencilBackWritemask = 0x8CA5, "STENCIL_BACK_WRITEMASK", Int;
    StencilClearValue = 0x0B91, "STENCIL_CLEAR_VALUE", Int;
    GenerateMipmapHint = 0x8192, "GENERATE_MIPMAP_HINT", Int;

    // Pixel storage
    PackAlignment = 0x0D05, "PACK_ALIGNMENT", Int;
    UnpackAlignment = 0x0CF5, "UNPACK_ALIGNMENT", Int;
    UnpackFlipYWebgl = 0x9240, "UNPACK_FLIP_Y_WEBGL", Bool;
    UnpackPremultiplyAlphaWebgl = 0x9241, "UNPACK_PREMULTIPLY_ALPHA_WEBGL", Bool;
    UnpackColorspaceConversionWebgl = 0x9243, "UNPACK_COLORSPACE_CONVERSION_WEBGL", Int;

    // Capabilities
    Blend = 0x0BE2, "BLEND", Enabled;
    CullFace = 0x0B44, "CULL_FACE", Enabled;
    DepthTest = 0x0B71, "DEPTH_TEST", Enabled;
    Dither = 0x0BD0, "DITHER", Enabled;
    PolygonOffsetFill = 0x8037, "POLYGON_OFFSET_FILL", Enabled;
    SampleCoverage = 0x80A0, "SAMPLE_COVERAGE", Enabled;
    ScissorTest = 0x0C11, "SCISSOR_TEST", Enabled;
    StencilTest = 0x0B90, "STENCIL_TEST", Enabled;

    // Composite members
    BlendEquationRgb = 0x8009, "BLEND_EQUATION_RGB", Int;
    BlendEquationAlpha = 0x883D, "BLEND_EQUATION_ALPHA", Int;
    BlendSrcRgb = 0x80C9, "BLEND_SRC_RGB", Int;
    BlendDstRgb = 0x80C8, "BLEND_DST_RGB", Int;
    BlendSrcAlpha = 0x80CB, "BLEND_SRC_ALPHA", Int;
    BlendDstAlpha = 0x80CA, "BLEND_DST_ALPHA", Int;
    SampleCoverageValue = 0x80AA, "SAMPLE_COVERAGE_VALUE", Float;
    SampleCoverageInvert = 0x80AB, "SAMPLE_COVERAGE_INVERT", Bool;
    PolygonOffsetFactor = 0x8038, "POLYGON_OFFSET_FACTOR", Float;
    PolygonOffsetUnits = 0x2A00, "POLYGON_OFFSET_UNITS", Float;
    StencilFunc = 0x0B92, "STENCIL_FUNC", Int;
    StencilRef = 0x0B97, "STENCIL_REF", Int;
    StencilValueMask = 0x0B93, "STENCIL_VALUE_MASK", Int;
    StencilBackFunc = 0x8800, "STENCIL_BACK_FUNC", Int;
    StencilBackRef = 0x8CA3, "STENCIL_BACK_REF", Int;
    StencilBackValueMask = 0x8CA4, "STENCIL_BACK_VALUE_MASK", Int;
    StencilFail = 0x0B94, "STENCIL_FAIL", Int;
    StencilPassDepthFail = 0x0B95, "STENCIL_PASS_DEPTH_FAIL", Int;
    StencilPassDepthPass = 0x0B96, "STENCIL_PASS_DEPTH_PASS", Int;
    StencilBackFail = 0x8801, "STENCIL_BACK_FAIL", Int;
    StencilBackPassDepthFail = 0x8802, "STENCIL_BACK_PASS_DEPTH_FAIL", Int;
    StencilBackPassDepthPass = 0x8803, "STENCIL_BACK_PASS_DEPTH_PASS", Int;
}

impl StateId {
    /// Texture targets and bindings.
    ///
    /// These never go through the per-identifier capture loop: the bindings of
    /// every texture unit are captured as a whole instead.
    pub const fn is_texture_binding(self) -> bool {
        matches!(
            self,
            StateId::Texture
                | StateId::Texture2D
                | StateId::TextureCubeMap
                | StateId::TextureBinding2D
                | StateId::TextureBindingCubeMap
        )
    }

    /// Whether tracking this identifier requires per-unit texture capture
    pub const fn is_texture_family(self) -> bool {
        self.is_texture_binding() || matches!(self, StateId::ActiveTexture)
    }
}

impl PartialEq for StateId {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for StateId {}

impl Hash for StateId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

impl PartialOrd for StateId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StateId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw().cmp(&other.raw())
    }
}

impl From<u32> for StateId {
    fn from(raw: u32) -> Self {
        StateId::from_raw(raw)
    }
}

impl From<StateId> for u32 {
    fn from(id: StateId) -> Self {
        id.raw()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:04X}", self.raw()),
        }
    }
}

impl FromStr for StateId {
    type Err = StateStackError;

    /// Accepts `BLEND`, `GL_BLEND`, `0x0BE2` or `3042`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_prefix("GL_").unwrap_or(trimmed);
        if let Some(id) = StateId::from_name(name) {
            return Ok(id);
        }

        let raw = match name
            .strip_prefix("0x")
            .or_else(|| name.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => name.parse::<u32>(),
        };

        raw.map(StateId::from_raw)
            .map_err(|_| StateStackError::unknown_state_name(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StateId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StateId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
