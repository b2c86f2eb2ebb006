//! The graphics context capability consumed by the stack

use std::fmt::Debug;

/// GL enum values used as call arguments when restoring state
pub mod consts {
    pub const TEXTURE0: u32 = 0x84C0;
    pub const TEXTURE_2D: u32 = 0x0DE1;
    pub const TEXTURE_CUBE_MAP: u32 = 0x8513;
    pub const ARRAY_BUFFER: u32 = 0x8892;
    pub const ELEMENT_ARRAY_BUFFER: u32 = 0x8893;
    pub const FRAMEBUFFER: u32 = 0x8D40;
    pub const RENDERBUFFER: u32 = 0x8D41;
    pub const FRONT: u32 = 0x0404;
    pub const BACK: u32 = 0x0405;
    pub const MAX_TEXTURE_IMAGE_UNITS: u32 = 0x8872;
}

/// Query and mutation operations the stack needs from a graphics context.
///
/// Parameter names are raw GL enum values. Implementations forward straight to
/// the underlying API; invalid arguments are the context's problem and are not
/// reported back.
pub trait StateContext {
    type Buffer: Copy + Debug + PartialEq;
    type Framebuffer: Copy + Debug + PartialEq;
    type Renderbuffer: Copy + Debug + PartialEq;
    type Program: Copy + Debug + PartialEq;
    type Texture: Copy + Debug + PartialEq;

    // Queries

    fn is_enabled(&self, cap: u32) -> bool;
    fn get_parameter_bool(&self, pname: u32) -> bool;
    fn get_parameter_bool4(&self, pname: u32) -> [bool; 4];
    fn get_parameter_i32(&self, pname: u32) -> i32;
    fn get_parameter_f32(&self, pname: u32) -> f32;
    fn get_parameter_i32_slice(&self, pname: u32, out: &mut [i32]);
    fn get_parameter_f32_slice(&self, pname: u32, out: &mut [f32]);
    fn get_parameter_buffer(&self, pname: u32) -> Option<Self::Buffer>;
    fn get_parameter_framebuffer(&self, pname: u32) -> Option<Self::Framebuffer>;
    fn get_parameter_renderbuffer(&self, pname: u32) -> Option<Self::Renderbuffer>;
    fn get_parameter_program(&self, pname: u32) -> Option<Self::Program>;
    fn get_parameter_texture(&self, pname: u32) -> Option<Self::Texture>;

    /// Number of texture image units available to fragment shaders
    fn max_texture_units(&self) -> u32 {
        self.get_parameter_i32(consts::MAX_TEXTURE_IMAGE_UNITS).max(0) as u32
    }

    // Capabilities and bindings

    fn enable(&self, cap: u32);
    fn disable(&self, cap: u32);
    fn active_texture(&self, unit: u32);
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn bind_framebuffer(&self, target: u32, framebuffer: Option<Self::Framebuffer>);
    fn bind_renderbuffer(&self, target: u32, renderbuffer: Option<Self::Renderbuffer>);
    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>);
    fn use_program(&self, program: Option<Self::Program>);

    // Fixed-function setters

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool);
    fn cull_face(&self, mode: u32);
    fn clear_depth(&self, depth: f32);
    fn depth_func(&self, func: u32);
    fn depth_range(&self, near: f32, far: f32);
    fn depth_mask(&self, flag: bool);
    fn front_face(&self, mode: u32);
    fn line_width(&self, width: f32);
    fn scissor(&self, x: i32, y: i32, width: i32, height: i32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn stencil_mask_separate(&self, face: u32, mask: u32);
    fn clear_stencil(&self, stencil: i32);
    fn hint(&self, target: u32, mode: u32);
    fn pixel_store_i32(&self, pname: u32, param: i32);
    fn pixel_store_bool(&self, pname: u32, param: bool);

    // Composite setters

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32);
    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32);
    fn sample_coverage(&self, value: f32, invert: bool);
    fn polygon_offset(&self, factor: f32, units: f32);
    fn stencil_func_separate(&self, face: u32, func: u32, reference: i32, mask: u32);
    fn stencil_op_separate(&self, face: u32, stencil_fail: u32, depth_fail: u32, pass: u32);
}
