//! Grouped state
//!
//! Some state can only be set through a call that takes several parameters at
//! once (`glBlendFuncSeparate` sets four). Those parameters are captured
//! together the first time any of them is met during a push and restored with a
//! single call on pop.

use std::fmt;

use crate::context::{StateContext, consts};
use crate::error::{StateStackError, StateStackResult};
use crate::identifier::StateId;
use crate::value::StateValue;

/// Which side of a polygon stencil state applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    Front,
    Back,
}

impl Face {
    pub const fn gl_enum(self) -> u32 {
        match self {
            Face::Front => consts::FRONT,
            Face::Back => consts::BACK,
        }
    }
}

/// A multi-parameter state restored by one composite call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositeState {
    BlendEquationSeparate,
    BlendFuncSeparate,
    SampleCoverage,
    PolygonOffset,
    StencilFuncSeparate(Face),
    StencilOpSeparate(Face),
}

impl CompositeState {
    pub const ALL: [CompositeState; 8] = [
        CompositeState::BlendEquationSeparate,
        CompositeState::BlendFuncSeparate,
        CompositeState::SampleCoverage,
        CompositeState::PolygonOffset,
        CompositeState::StencilFuncSeparate(Face::Front),
        CompositeState::StencilFuncSeparate(Face::Back),
        CompositeState::StencilOpSeparate(Face::Front),
        CompositeState::StencilOpSeparate(Face::Back),
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CompositeState::BlendEquationSeparate => "blend_equation_separate",
            CompositeState::BlendFuncSeparate => "blend_func_separate",
            CompositeState::SampleCoverage => "sample_coverage",
            CompositeState::PolygonOffset => "polygon_offset",
            CompositeState::StencilFuncSeparate(Face::Front) => "stencil_func_separate_front",
            CompositeState::StencilFuncSeparate(Face::Back) => "stencil_func_separate_back",
            CompositeState::StencilOpSeparate(Face::Front) => "stencil_op_separate_front",
            CompositeState::StencilOpSeparate(Face::Back) => "stencil_op_separate_back",
        }
    }

    /// Member identifiers, in the argument order of the composite call
    pub const fn members(self) -> &'static [StateId] {
        match self {
            CompositeState::BlendEquationSeparate => {
                &[StateId::BlendEquationRgb, StateId::BlendEquationAlpha]
            }
            CompositeState::BlendFuncSeparate => &[
                StateId::BlendSrcRgb,
                StateId::BlendDstRgb,
                StateId::BlendSrcAlpha,
                StateId::BlendDstAlpha,
            ],
            CompositeState::SampleCoverage => {
                &[StateId::SampleCoverageValue, StateId::SampleCoverageInvert]
            }
            CompositeState::PolygonOffset => {
                &[StateId::PolygonOffsetFactor, StateId::PolygonOffsetUnits]
            }
            CompositeState::StencilFuncSeparate(Face::Front) => &[
                StateId::StencilFunc,
                StateId::StencilRef,
                StateId::StencilValueMask,
            ],
            CompositeState::StencilFuncSeparate(Face::Back) => &[
                StateId::StencilBackFunc,
                StateId::StencilBackRef,
                StateId::StencilBackValueMask,
            ],
            CompositeState::StencilOpSeparate(Face::Front) => &[
                StateId::StencilFail,
                StateId::StencilPassDepthFail,
                StateId::StencilPassDepthPass,
            ],
            CompositeState::StencilOpSeparate(Face::Back) => &[
                StateId::StencilBackFail,
                StateId::StencilBackPassDepthFail,
                StateId::StencilBackPassDepthPass,
            ],
        }
    }

    pub fn contains(self, id: StateId) -> bool {
        self.members().contains(&id)
    }
}

impl fmt::Display for CompositeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of composites a stack captures
///
/// Registries are plain immutable data; each stack owns its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<CompositeState>", into = "Vec<CompositeState>"))]
pub struct GroupRegistry {
    groups: Vec<CompositeState>,
}

impl GroupRegistry {
    /// Every known composite
    pub fn standard() -> Self {
        Self {
            groups: CompositeState::ALL.to_vec(),
        }
    }

    /// No composites: member identifiers are captured and skipped like any
    /// other identifier without a restore rule
    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    /// Build a registry from a custom set of composites
    pub fn new(groups: impl IntoIterator<Item = CompositeState>) -> StateStackResult<Self> {
        let mut registered: Vec<CompositeState> = Vec::new();
        for group in groups {
            if registered.contains(&group) {
                return Err(StateStackError::duplicate_group(group.name()));
            }
            registered.push(group);
        }
        Ok(Self { groups: registered })
    }

    pub fn groups(&self) -> &[CompositeState] {
        &self.groups
    }

    /// The registered composite `id` belongs to, if any
    pub fn lookup_group(&self, id: StateId) -> Option<CompositeState> {
        self.groups.iter().copied().find(|group| group.contains(id))
    }

    /// One not-yet-captured record per registered composite
    pub fn fresh_captures<C: StateContext + ?Sized>(&self) -> GroupCaptures<C> {
        GroupCaptures {
            captures: self.groups.iter().copied().map(GroupCapture::new).collect(),
        }
    }
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<CompositeState>> for GroupRegistry {
    type Error = StateStackError;

    fn try_from(groups: Vec<CompositeState>) -> StateStackResult<Self> {
        Self::new(groups)
    }
}

impl From<GroupRegistry> for Vec<CompositeState> {
    fn from(registry: GroupRegistry) -> Self {
        registry.groups
    }
}

/// Captured values of one composite within one snapshot
pub struct GroupCapture<C: StateContext + ?Sized> {
    group: CompositeState,
    present: bool,
    values: Vec<StateValue<C>>,
}

impl<C: StateContext + ?Sized> GroupCapture<C> {
    fn new(group: CompositeState) -> Self {
        Self {
            group,
            present: false,
            values: Vec::new(),
        }
    }

    pub fn group(&self) -> CompositeState {
        self.group
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Captured values in member order; empty until captured
    pub fn values(&self) -> &[StateValue<C>] {
        &self.values
    }

    /// Read every member once and mark the composite as captured
    fn capture(&mut self, gl: &C) {
        self.values = self
            .group
            .members()
            .iter()
            .map(|&id| StateValue::read(gl, id))
            .collect();
        self.present = true;
    }

    /// Issue the composite call. Returns `false` if nothing was captured.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn restore(&self, gl: &C) -> bool {
        if !self.present {
            return false;
        }

        use StateValue::{Bool, Float, Int};
        match (self.group, self.values.as_slice()) {
            (CompositeState::BlendEquationSeparate, [Int(rgb), Int(alpha)]) => {
                gl.blend_equation_separate(*rgb as u32, *alpha as u32);
            }
            (
                CompositeState::BlendFuncSeparate,
                [Int(src_rgb), Int(dst_rgb), Int(src_alpha), Int(dst_alpha)],
            ) => {
                gl.blend_func_separate(
                    *src_rgb as u32,
                    *dst_rgb as u32,
                    *src_alpha as u32,
                    *dst_alpha as u32,
                );
            }
            (CompositeState::SampleCoverage, [Float(value), Bool(invert)]) => {
                gl.sample_coverage(*value, *invert);
            }
            (CompositeState::PolygonOffset, [Float(factor), Float(units)]) => {
                gl.polygon_offset(*factor, *units);
            }
            (CompositeState::StencilFuncSeparate(face), [Int(func), Int(reference), Int(mask)]) => {
                gl.stencil_func_separate(face.gl_enum(), *func as u32, *reference, *mask as u32);
            }
            (CompositeState::StencilOpSeparate(face), [Int(fail), Int(depth_fail), Int(pass)]) => {
                gl.stencil_op_separate(
                    face.gl_enum(),
                    *fail as u32,
                    *depth_fail as u32,
                    *pass as u32,
                );
            }
            (group, values) => {
                state_warn!(
                    "Captured values {:?} do not fit composite {}",
                    values,
                    group
                );
                return false;
            }
        }
        true
    }
}

impl<C: StateContext + ?Sized> fmt::Debug for GroupCapture<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupCapture")
            .field("group", &self.group)
            .field("present", &self.present)
            .field("values", &self.values)
            .finish()
    }
}

/// Every composite's capture record for one snapshot
pub struct GroupCaptures<C: StateContext + ?Sized> {
    captures: Vec<GroupCapture<C>>,
}

impl<C: StateContext + ?Sized> GroupCaptures<C> {
    /// Capture `group` unless it was already captured in this snapshot.
    ///
    /// Returns `true` only when this call read the composite. Groups missing
    /// from the registry these captures came from are ignored.
    pub fn touch(&mut self, gl: &C, group: CompositeState) -> bool {
        match self
            .captures
            .iter_mut()
            .find(|capture| capture.group == group)
        {
            Some(capture) if !capture.present => {
                capture.capture(gl);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, group: CompositeState) -> Option<&GroupCapture<C>> {
        self.captures.iter().find(|capture| capture.group == group)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupCapture<C>> {
        self.captures.iter()
    }

    /// Number of composites captured so far
    pub fn present_count(&self) -> usize {
        self.captures.iter().filter(|capture| capture.present).count()
    }

    /// Issue one composite call per captured composite, in registry order
    pub fn restore(&self, gl: &C) -> usize {
        self.captures
            .iter()
            .filter(|capture| capture.restore(gl))
            .count()
    }
}

impl<C: StateContext + ?Sized> fmt::Debug for GroupCaptures<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.captures.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn members_are_disjoint() {
        let mut seen = HashSet::new();
        for group in CompositeState::ALL {
            assert!(group.members().len() >= 2, "{group} is not a composite");
            for &id in group.members() {
                assert!(seen.insert(id), "{id} belongs to more than one composite");
            }
        }
    }

    #[test]
    fn lookup_group_finds_owner() {
        let registry = GroupRegistry::standard();
        assert_eq!(
            registry.lookup_group(StateId::BlendDstAlpha),
            Some(CompositeState::BlendFuncSeparate)
        );
        assert_eq!(
            registry.lookup_group(StateId::StencilBackRef),
            Some(CompositeState::StencilFuncSeparate(Face::Back))
        );
        assert_eq!(registry.lookup_group(StateId::Viewport), None);
        assert_eq!(GroupRegistry::empty().lookup_group(StateId::BlendSrcRgb), None);
    }

    #[test]
    fn custom_registry_rejects_duplicates() {
        let registry = GroupRegistry::new([
            CompositeState::PolygonOffset,
            CompositeState::SampleCoverage,
        ])
        .unwrap();
        assert_eq!(registry.groups().len(), 2);
        assert_eq!(registry.lookup_group(StateId::BlendSrcRgb), None);

        let err = GroupRegistry::new([
            CompositeState::PolygonOffset,
            CompositeState::PolygonOffset,
        ])
        .unwrap_err();
        assert_eq!(
            err,
            StateStackError::DuplicateGroup {
                group: "polygon_offset".into()
            }
        );
    }

    #[test]
    fn face_enums() {
        assert_eq!(Face::Front.gl_enum(), 0x0404);
        assert_eq!(Face::Back.gl_enum(), 0x0405);
    }
}
