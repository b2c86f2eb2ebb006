//! `StateContext` for `glow::Context`

use ::glow::{Context, HasContext};

use crate::context::StateContext;

pub type GlBuffer = <Context as HasContext>::Buffer;
pub type GlFramebuffer = <Context as HasContext>::Framebuffer;
pub type GlRenderbuffer = <Context as HasContext>::Renderbuffer;
pub type GlProgram = <Context as HasContext>::Program;
pub type GlTexture = <Context as HasContext>::Texture;

// The context must be current on the calling thread for every call below.
impl StateContext for Context {
    type Buffer = GlBuffer;
    type Framebuffer = GlFramebuffer;
    type Renderbuffer = GlRenderbuffer;
    type Program = GlProgram;
    type Texture = GlTexture;

    fn is_enabled(&self, cap: u32) -> bool {
        unsafe { HasContext::is_enabled(self, cap) }
    }

    fn get_parameter_bool(&self, pname: u32) -> bool {
        unsafe { HasContext::get_parameter_bool(self, pname) }
    }

    fn get_parameter_bool4(&self, pname: u32) -> [bool; 4] {
        unsafe { HasContext::get_parameter_bool_array::<4>(self, pname) }
    }

    fn get_parameter_i32(&self, pname: u32) -> i32 {
        unsafe { HasContext::get_parameter_i32(self, pname) }
    }

    fn get_parameter_f32(&self, pname: u32) -> f32 {
        unsafe { HasContext::get_parameter_f32(self, pname) }
    }

    fn get_parameter_i32_slice(&self, pname: u32, out: &mut [i32]) {
        unsafe { HasContext::get_parameter_i32_slice(self, pname, out) }
    }

    fn get_parameter_f32_slice(&self, pname: u32, out: &mut [f32]) {
        unsafe { HasContext::get_parameter_f32_slice(self, pname, out) }
    }

    fn get_parameter_buffer(&self, pname: u32) -> Option<GlBuffer> {
        unsafe { HasContext::get_parameter_buffer(self, pname) }
    }

    fn get_parameter_framebuffer(&self, pname: u32) -> Option<GlFramebuffer> {
        unsafe { HasContext::get_parameter_framebuffer(self, pname) }
    }

    fn get_parameter_renderbuffer(&self, pname: u32) -> Option<GlRenderbuffer> {
        unsafe { HasContext::get_parameter_renderbuffer(self, pname) }
    }

    fn get_parameter_program(&self, pname: u32) -> Option<GlProgram> {
        unsafe { HasContext::get_parameter_program(self, pname) }
    }

    fn get_parameter_texture(&self, pname: u32) -> Option<GlTexture> {
        unsafe { HasContext::get_parameter_texture(self, pname) }
    }

    fn enable(&self, cap: u32) {
        unsafe { HasContext::enable(self, cap) }
    }

    fn disable(&self, cap: u32) {
        unsafe { HasContext::disable(self, cap) }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { HasContext::active_texture(self, unit) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<GlBuffer>) {
        unsafe { HasContext::bind_buffer(self, target, buffer) }
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: Option<GlFramebuffer>) {
        unsafe { HasContext::bind_framebuffer(self, target, framebuffer) }
    }

    fn bind_renderbuffer(&self, target: u32, renderbuffer: Option<GlRenderbuffer>) {
        unsafe { HasContext::bind_renderbuffer(self, target, renderbuffer) }
    }

    fn bind_texture(&self, target: u32, texture: Option<GlTexture>) {
        unsafe { HasContext::bind_texture(self, target, texture) }
    }

    fn use_program(&self, program: Option<GlProgram>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { HasContext::blend_color(self, red, green, blue, alpha) }
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { HasContext::clear_color(self, red, green, blue, alpha) }
    }

    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        unsafe { HasContext::color_mask(self, red, green, blue, alpha) }
    }

    fn cull_face(&self, mode: u32) {
        unsafe { HasContext::cull_face(self, mode) }
    }

    fn clear_depth(&self, depth: f32) {
        unsafe { HasContext::clear_depth_f32(self, depth) }
    }

    fn depth_func(&self, func: u32) {
        unsafe { HasContext::depth_func(self, func) }
    }

    fn depth_range(&self, near: f32, far: f32) {
        unsafe { HasContext::depth_range_f32(self, near, far) }
    }

    fn depth_mask(&self, flag: bool) {
        unsafe { HasContext::depth_mask(self, flag) }
    }

    fn front_face(&self, mode: u32) {
        unsafe { HasContext::front_face(self, mode) }
    }

    fn line_width(&self, width: f32) {
        unsafe { HasContext::line_width(self, width) }
    }

    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::scissor(self, x, y, width, height) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn stencil_mask_separate(&self, face: u32, mask: u32) {
        unsafe { HasContext::stencil_mask_separate(self, face, mask) }
    }

    fn clear_stencil(&self, stencil: i32) {
        unsafe { HasContext::clear_stencil(self, stencil) }
    }

    fn hint(&self, target: u32, mode: u32) {
        unsafe { HasContext::hint(self, target, mode) }
    }

    fn pixel_store_i32(&self, pname: u32, param: i32) {
        unsafe { HasContext::pixel_store_i32(self, pname, param) }
    }

    fn pixel_store_bool(&self, pname: u32, param: bool) {
        unsafe { HasContext::pixel_store_bool(self, pname, param) }
    }

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32) {
        unsafe { HasContext::blend_equation_separate(self, mode_rgb, mode_alpha) }
    }

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        unsafe { HasContext::blend_func_separate(self, src_rgb, dst_rgb, src_alpha, dst_alpha) }
    }

    fn sample_coverage(&self, value: f32, invert: bool) {
        unsafe { HasContext::sample_coverage(self, value, invert) }
    }

    fn polygon_offset(&self, factor: f32, units: f32) {
        unsafe { HasContext::polygon_offset(self, factor, units) }
    }

    fn stencil_func_separate(&self, face: u32, func: u32, reference: i32, mask: u32) {
        unsafe { HasContext::stencil_func_separate(self, face, func, reference, mask) }
    }

    fn stencil_op_separate(&self, face: u32, stencil_fail: u32, depth_fail: u32, pass: u32) {
        unsafe { HasContext::stencil_op_separate(self, face, stencil_fail, depth_fail, pass) }
    }
}
