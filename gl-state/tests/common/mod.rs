#![allow(dead_code)]

//! In-memory GL context that records every call

use gl_state_stack::{StateContext, StateId, consts};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Bool(bool),
    Int(i32),
    Float(f32),
    Ints(Vec<i32>),
    Floats(Vec<f32>),
    Bools(Vec<bool>),
}

#[derive(Default)]
struct FakeState {
    params: HashMap<u32, Param>,
    enabled: HashSet<u32>,
    buffers: HashMap<u32, Option<u32>>,
    framebuffer: Option<u32>,
    renderbuffer: Option<u32>,
    program: Option<u32>,
    active_unit: u32,
    units: Vec<(Option<u32>, Option<u32>)>,
    calls: Vec<String>,
    queries: HashMap<u32, usize>,
    slice_reads: Vec<(u32, usize)>,
}

pub struct FakeGl {
    state: RefCell<FakeState>,
    max_units: u32,
}

impl FakeGl {
    pub fn new(max_units: u32) -> Self {
        let state = FakeState {
            units: vec![(None, None); max_units as usize],
            ..FakeState::default()
        };
        Self {
            state: RefCell::new(state),
            max_units,
        }
    }

    pub fn set(&self, id: StateId, param: Param) {
        self.state.borrow_mut().params.insert(id.raw(), param);
    }

    pub fn param(&self, id: StateId) -> Option<Param> {
        self.state.borrow().params.get(&id.raw()).cloned()
    }

    pub fn is_on(&self, id: StateId) -> bool {
        self.state.borrow().enabled.contains(&id.raw())
    }

    pub fn buffer(&self, target: u32) -> Option<u32> {
        self.state.borrow().buffers.get(&target).copied().flatten()
    }

    pub fn program(&self) -> Option<u32> {
        self.state.borrow().program
    }

    pub fn framebuffer(&self) -> Option<u32> {
        self.state.borrow().framebuffer
    }

    pub fn renderbuffer(&self) -> Option<u32> {
        self.state.borrow().renderbuffer
    }

    pub fn active_unit(&self) -> u32 {
        self.state.borrow().active_unit
    }

    pub fn unit_bindings(&self, unit: usize) -> (Option<u32>, Option<u32>) {
        self.state.borrow().units[unit]
    }

    /// Mutation calls made so far, oldest first
    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_log(&self) {
        let mut state = self.state.borrow_mut();
        state.calls.clear();
        state.queries.clear();
        state.slice_reads.clear();
    }

    /// How many times `id` was read
    pub fn query_count(&self, id: StateId) -> usize {
        self.state
            .borrow()
            .queries
            .get(&id.raw())
            .copied()
            .unwrap_or(0)
    }

    /// Output buffer length of every integer slice read of `id`
    pub fn i32_slice_reads(&self, id: StateId) -> Vec<usize> {
        self.state
            .borrow()
            .slice_reads
            .iter()
            .filter(|&&(pname, _)| pname == id.raw())
            .map(|&(_, len)| len)
            .collect()
    }

    pub fn total_queries(&self) -> usize {
        self.state.borrow().queries.values().sum()
    }

    fn count(&self, pname: u32) {
        *self.state.borrow_mut().queries.entry(pname).or_insert(0) += 1;
    }

    fn log(&self, call: String) {
        self.state.borrow_mut().calls.push(call);
    }

    fn store(&self, id: StateId, param: Param) {
        self.state.borrow_mut().params.insert(id.raw(), param);
    }
}

fn name(pname: u32) -> String {
    StateId::from_raw(pname).to_string()
}

impl StateContext for FakeGl {
    type Buffer = u32;
    type Framebuffer = u32;
    type Renderbuffer = u32;
    type Program = u32;
    type Texture = u32;

    fn is_enabled(&self, cap: u32) -> bool {
        self.count(cap);
        self.state.borrow().enabled.contains(&cap)
    }

    fn get_parameter_bool(&self, pname: u32) -> bool {
        self.count(pname);
        matches!(
            self.state.borrow().params.get(&pname),
            Some(Param::Bool(true))
        )
    }

    fn get_parameter_bool4(&self, pname: u32) -> [bool; 4] {
        self.count(pname);
        match self.state.borrow().params.get(&pname) {
            Some(Param::Bools(v)) => std::array::from_fn(|i| v[i]),
            _ => [true; 4],
        }
    }

    fn get_parameter_i32(&self, pname: u32) -> i32 {
        self.count(pname);
        if pname == StateId::ActiveTexture.raw() {
            return (consts::TEXTURE0 + self.state.borrow().active_unit) as i32;
        }
        if pname == consts::MAX_TEXTURE_IMAGE_UNITS {
            return self.max_units as i32;
        }
        match self.state.borrow().params.get(&pname) {
            Some(Param::Int(v)) => *v,
            _ => 0,
        }
    }

    fn get_parameter_f32(&self, pname: u32) -> f32 {
        self.count(pname);
        match self.state.borrow().params.get(&pname) {
            Some(Param::Float(v)) => *v,
            _ => 0.0,
        }
    }

    fn get_parameter_i32_slice(&self, pname: u32, out: &mut [i32]) {
        self.count(pname);
        self.state.borrow_mut().slice_reads.push((pname, out.len()));
        match self.state.borrow().params.get(&pname) {
            Some(Param::Ints(v)) => {
                let n = v.len().min(out.len());
                out[..n].copy_from_slice(&v[..n]);
            }
            Some(Param::Int(v)) => out[0] = *v,
            _ => {}
        }
    }

    fn get_parameter_f32_slice(&self, pname: u32, out: &mut [f32]) {
        self.count(pname);
        if let Some(Param::Floats(v)) = self.state.borrow().params.get(&pname) {
            out.copy_from_slice(&v[..out.len()]);
        }
    }

    fn get_parameter_buffer(&self, pname: u32) -> Option<u32> {
        self.count(pname);
        let target = match StateId::from_raw(pname) {
            StateId::ArrayBufferBinding => consts::ARRAY_BUFFER,
            StateId::ElementArrayBufferBinding => consts::ELEMENT_ARRAY_BUFFER,
            _ => return None,
        };
        self.buffer(target)
    }

    fn get_parameter_framebuffer(&self, pname: u32) -> Option<u32> {
        self.count(pname);
        self.state.borrow().framebuffer
    }

    fn get_parameter_renderbuffer(&self, pname: u32) -> Option<u32> {
        self.count(pname);
        self.state.borrow().renderbuffer
    }

    fn get_parameter_program(&self, pname: u32) -> Option<u32> {
        self.count(pname);
        self.state.borrow().program
    }

    fn get_parameter_texture(&self, pname: u32) -> Option<u32> {
        self.count(pname);
        let state = self.state.borrow();
        let (texture_2d, cube_map) = state.units[state.active_unit as usize];
        match StateId::from_raw(pname) {
            StateId::TextureBinding2D => texture_2d,
            StateId::TextureBindingCubeMap => cube_map,
            _ => None,
        }
    }

    fn enable(&self, cap: u32) {
        self.log(format!("enable({})", name(cap)));
        self.state.borrow_mut().enabled.insert(cap);
    }

    fn disable(&self, cap: u32) {
        self.log(format!("disable({})", name(cap)));
        self.state.borrow_mut().enabled.remove(&cap);
    }

    fn active_texture(&self, unit: u32) {
        self.log(format!("active_texture({})", unit - consts::TEXTURE0));
        self.state.borrow_mut().active_unit = unit - consts::TEXTURE0;
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.log(format!("bind_buffer(0x{target:04X}, {buffer:?})"));
        self.state.borrow_mut().buffers.insert(target, buffer);
    }

    fn bind_framebuffer(&self, _target: u32, framebuffer: Option<u32>) {
        self.log(format!("bind_framebuffer({framebuffer:?})"));
        self.state.borrow_mut().framebuffer = framebuffer;
    }

    fn bind_renderbuffer(&self, _target: u32, renderbuffer: Option<u32>) {
        self.log(format!("bind_renderbuffer({renderbuffer:?})"));
        self.state.borrow_mut().renderbuffer = renderbuffer;
    }

    fn bind_texture(&self, target: u32, texture: Option<u32>) {
        self.log(format!("bind_texture({}, {texture:?})", name(target)));
        let mut state = self.state.borrow_mut();
        let unit = state.active_unit as usize;
        if target == consts::TEXTURE_2D {
            state.units[unit].0 = texture;
        } else if target == consts::TEXTURE_CUBE_MAP {
            state.units[unit].1 = texture;
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.log(format!("use_program({program:?})"));
        self.state.borrow_mut().program = program;
    }

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.log(format!("blend_color({red}, {green}, {blue}, {alpha})"));
        self.store(StateId::BlendColor, Param::Floats(vec![red, green, blue, alpha]));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.log(format!("clear_color({red}, {green}, {blue}, {alpha})"));
        self.store(StateId::ColorClearValue, Param::Floats(vec![red, green, blue, alpha]));
    }

    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.log(format!("color_mask({red}, {green}, {blue}, {alpha})"));
        self.store(StateId::ColorWritemask, Param::Bools(vec![red, green, blue, alpha]));
    }

    fn cull_face(&self, mode: u32) {
        self.log(format!("cull_face(0x{mode:04X})"));
        self.store(StateId::CullFaceMode, Param::Int(mode as i32));
    }

    fn clear_depth(&self, depth: f32) {
        self.log(format!("clear_depth({depth})"));
        self.store(StateId::DepthClearValue, Param::Float(depth));
    }

    fn depth_func(&self, func: u32) {
        self.log(format!("depth_func(0x{func:04X})"));
        self.store(StateId::DepthFunc, Param::Int(func as i32));
    }

    fn depth_range(&self, near: f32, far: f32) {
        self.log(format!("depth_range({near}, {far})"));
        self.store(StateId::DepthRange, Param::Floats(vec![near, far]));
    }

    fn depth_mask(&self, flag: bool) {
        self.log(format!("depth_mask({flag})"));
        self.store(StateId::DepthWritemask, Param::Bool(flag));
    }

    fn front_face(&self, mode: u32) {
        self.log(format!("front_face(0x{mode:04X})"));
        self.store(StateId::FrontFace, Param::Int(mode as i32));
    }

    fn line_width(&self, width: f32) {
        self.log(format!("line_width({width})"));
        self.store(StateId::LineWidth, Param::Float(width));
    }

    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        self.log(format!("scissor({x}, {y}, {width}, {height})"));
        self.store(StateId::ScissorBox, Param::Ints(vec![x, y, width, height]));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.log(format!("viewport({x}, {y}, {width}, {height})"));
        self.store(StateId::Viewport, Param::Ints(vec![x, y, width, height]));
    }

    fn stencil_mask_separate(&self, face: u32, mask: u32) {
        self.log(format!("stencil_mask_separate(0x{face:04X}, {mask})"));
        let id = if face == consts::BACK {
            StateId::StencilBackWritemask
        } else {
            StateId::StencilWritemask
        };
        self.store(id, Param::Int(mask as i32));
    }

    fn clear_stencil(&self, stencil: i32) {
        self.log(format!("clear_stencil({stencil})"));
        self.store(StateId::StencilClearValue, Param::Int(stencil));
    }

    fn hint(&self, target: u32, mode: u32) {
        self.log(format!("hint({}, 0x{mode:04X})", name(target)));
        self.state
            .borrow_mut()
            .params
            .insert(target, Param::Int(mode as i32));
    }

    fn pixel_store_i32(&self, pname: u32, param: i32) {
        self.log(format!("pixel_store_i32({}, {param})", name(pname)));
        self.state.borrow_mut().params.insert(pname, Param::Int(param));
    }

    fn pixel_store_bool(&self, pname: u32, param: bool) {
        self.log(format!("pixel_store_bool({}, {param})", name(pname)));
        self.state.borrow_mut().params.insert(pname, Param::Bool(param));
    }

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32) {
        self.log(format!(
            "blend_equation_separate(0x{mode_rgb:04X}, 0x{mode_alpha:04X})"
        ));
        self.store(StateId::BlendEquationRgb, Param::Int(mode_rgb as i32));
        self.store(StateId::BlendEquationAlpha, Param::Int(mode_alpha as i32));
    }

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        self.log(format!(
            "blend_func_separate({src_rgb}, {dst_rgb}, {src_alpha}, {dst_alpha})"
        ));
        self.store(StateId::BlendSrcRgb, Param::Int(src_rgb as i32));
        self.store(StateId::BlendDstRgb, Param::Int(dst_rgb as i32));
        self.store(StateId::BlendSrcAlpha, Param::Int(src_alpha as i32));
        self.store(StateId::BlendDstAlpha, Param::Int(dst_alpha as i32));
    }

    fn sample_coverage(&self, value: f32, invert: bool) {
        self.log(format!("sample_coverage({value}, {invert})"));
        self.store(StateId::SampleCoverageValue, Param::Float(value));
        self.store(StateId::SampleCoverageInvert, Param::Bool(invert));
    }

    fn polygon_offset(&self, factor: f32, units: f32) {
        self.log(format!("polygon_offset({factor}, {units})"));
        self.store(StateId::PolygonOffsetFactor, Param::Float(factor));
        self.store(StateId::PolygonOffsetUnits, Param::Float(units));
    }

    fn stencil_func_separate(&self, face: u32, func: u32, reference: i32, mask: u32) {
        self.log(format!(
            "stencil_func_separate(0x{face:04X}, 0x{func:04X}, {reference}, {mask})"
        ));
        let ids = if face == consts::BACK {
            [
                StateId::StencilBackFunc,
                StateId::StencilBackRef,
                StateId::StencilBackValueMask,
            ]
        } else {
            [
                StateId::StencilFunc,
                StateId::StencilRef,
                StateId::StencilValueMask,
            ]
        };
        self.store(ids[0], Param::Int(func as i32));
        self.store(ids[1], Param::Int(reference));
        self.store(ids[2], Param::Int(mask as i32));
    }

    fn stencil_op_separate(&self, face: u32, stencil_fail: u32, depth_fail: u32, pass: u32) {
        self.log(format!(
            "stencil_op_separate(0x{face:04X}, 0x{stencil_fail:04X}, 0x{depth_fail:04X}, 0x{pass:04X})"
        ));
        let ids = if face == consts::BACK {
            [
                StateId::StencilBackFail,
                StateId::StencilBackPassDepthFail,
                StateId::StencilBackPassDepthPass,
            ]
        } else {
            [
                StateId::StencilFail,
                StateId::StencilPassDepthFail,
                StateId::StencilPassDepthPass,
            ]
        };
        self.store(ids[0], Param::Int(stencil_fail as i32));
        self.store(ids[1], Param::Int(depth_fail as i32));
        self.store(ids[2], Param::Int(pass as i32));
    }
}
