//! The push/pop state stack

use std::fmt;

use crate::config::{ActiveUnitRestore, StackConfig};
use crate::context::{StateContext, consts};
use crate::defaults::{DefaultVariables, StandardVariables};
use crate::groups::{GroupCaptures, GroupRegistry};
use crate::identifier::StateId;
use crate::restore::{RestoreOutcome, restore_primitive};
use crate::value::StateValue;

/// Texture bindings of one texture unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureUnitBinding<T> {
    pub texture_2d: Option<T>,
    pub cube_map: Option<T>,
}

/// Bindings of every texture unit plus the unit that was active
struct TextureUnitSnapshot<C: StateContext + ?Sized> {
    active_unit: u32,
    units: Vec<TextureUnitBinding<C::Texture>>,
}

/// One `push()` worth of captured state
struct Snapshot<C: StateContext + ?Sized> {
    /// One value per tracked primitive, in tracked order
    values: Vec<StateValue<C>>,
    groups: GroupCaptures<C>,
    textures: Option<TextureUnitSnapshot<C>>,
}

/// Captures pipeline state on [`push`](Self::push) and puts it back on
/// [`pop`](Self::pop).
///
/// The set of tracked identifiers is fixed at construction: deduplicated and
/// sorted by GL enum value. Texture bindings are not read through the generic
/// loop. When any texture identifier (or the active unit) is tracked, the 2D
/// and cube map bindings of every texture unit are captured instead.
///
/// Restore order on `pop()` is fixed: texture units first, then primitives,
/// then composites. A tracked `ACTIVE_TEXTURE` therefore wins over the unit
/// switching done while rebinding textures.
///
/// # Example
///
/// ```no_run
/// # use gl_state_stack::StateContext;
/// # fn demo<C: StateContext>(gl: &C) {
/// use gl_state_stack::{StateId, StateStack};
///
/// let mut stack = StateStack::with_variables(gl, [StateId::Blend, StateId::Viewport]);
/// stack.push(gl);
/// // ... draw with whatever blend and viewport you like ...
/// stack.pop(gl);
/// # }
/// ```
pub struct StateStack<C: StateContext + ?Sized> {
    tracked: Vec<StateId>,
    registry: GroupRegistry,
    needs_texture_tracking: bool,
    restore_active_unit: bool,
    active_unit_restore: ActiveUnitRestore,
    texture_units: u32,
    snapshots: Vec<Snapshot<C>>,
}

impl<C: StateContext + ?Sized> StateStack<C> {
    /// Track the standard identifier set with the standard composites
    pub fn new(gl: &C) -> Self {
        Self::with_config(gl, StackConfig::default())
    }

    /// Track exactly `ids` (duplicates are ignored)
    pub fn with_variables(gl: &C, ids: impl IntoIterator<Item = StateId>) -> Self {
        Self::with_config(gl, StackConfig::default().variables(ids))
    }

    pub fn with_config(gl: &C, config: StackConfig) -> Self {
        Self::with_provider(gl, config, &StandardVariables)
    }

    /// Build a stack, asking `provider` for the identifiers when the config
    /// does not list any
    pub fn with_provider<P>(gl: &C, config: StackConfig, provider: &P) -> Self
    where
        P: DefaultVariables<C> + ?Sized,
    {
        let StackConfig {
            variables,
            groups,
            active_unit_restore,
        } = config;

        let mut tracked: Vec<StateId> = variables
            .unwrap_or_else(|| provider.variables(gl))
            .into_iter()
            .map(|id| StateId::from_raw(id.raw()))
            .collect();
        tracked.sort();
        tracked.dedup();

        let needs_texture_tracking = tracked.iter().any(|id| id.is_texture_family());
        let restore_active_unit = !tracked.contains(&StateId::ActiveTexture);
        let texture_units = gl.max_texture_units();

        state_debug!(
            tracked = tracked.len(),
            needs_texture_tracking,
            texture_units,
            "Created GL state stack"
        );

        Self {
            tracked,
            registry: groups,
            needs_texture_tracking,
            restore_active_unit,
            active_unit_restore,
            texture_units,
            snapshots: Vec::new(),
        }
    }

    /// Capture every tracked identifier and push the snapshot
    pub fn push(&mut self, gl: &C) {
        let mut groups = self.registry.fresh_captures();

        let textures = if self.needs_texture_tracking {
            Some(self.capture_texture_units(gl))
        } else {
            None
        };

        let mut values = Vec::with_capacity(self.tracked.len());
        for id in self.primitives() {
            // The composite is read in addition to this identifier's own value
            if let Some(group) = self.registry.lookup_group(id) {
                groups.touch(gl, group);
            }
            values.push(StateValue::read(gl, id));
        }

        self.snapshots.push(Snapshot {
            values,
            groups,
            textures,
        });
        state_trace!(depth = self.snapshots.len(), "Pushed GL state");
    }

    /// Restore the most recently pushed snapshot. Does nothing when the
    /// stack is empty.
    pub fn pop(&mut self, gl: &C) {
        let Some(Snapshot {
            mut values,
            groups,
            textures,
        }) = self.snapshots.pop()
        else {
            state_debug!("pop() on an empty GL state stack");
            return;
        };

        if let Some(textures) = &textures {
            self.restore_texture_units(gl, textures);
        }

        // Values were appended in tracked order, so walk the identifiers
        // backwards while taking values off the end.
        for id in self.primitives().rev() {
            let Some(value) = values.pop() else {
                break;
            };
            match restore_primitive(gl, id, value) {
                RestoreOutcome::Applied => {}
                RestoreOutcome::NoRule => {
                    state_trace!("No restore rule for {}, skipped", id);
                }
                RestoreOutcome::ShapeMismatch => {
                    state_warn!("Captured {:?} does not fit {}, skipped", value, id);
                }
            }
        }

        groups.restore(gl);
        state_trace!(depth = self.snapshots.len(), "Popped GL state");
    }

    /// Push now and pop when the returned guard is dropped
    pub fn scope<'a>(&'a mut self, gl: &'a C) -> StateScope<'a, C> {
        self.push(gl);
        StateScope { stack: self, gl }
    }

    /// Number of snapshots waiting to be popped
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The deduplicated, sorted identifiers captured on every push
    pub fn tracked(&self) -> &[StateId] {
        &self.tracked
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.registry
    }

    /// Whether per-unit texture bindings are captured
    pub fn tracks_textures(&self) -> bool {
        self.needs_texture_tracking
    }

    /// Texture unit count queried at construction
    pub fn texture_units(&self) -> u32 {
        self.texture_units
    }

    fn primitives(&self) -> impl DoubleEndedIterator<Item = StateId> + '_ {
        self.tracked
            .iter()
            .copied()
            .filter(|id| !id.is_texture_binding())
    }

    fn capture_texture_units(&self, gl: &C) -> TextureUnitSnapshot<C> {
        let active_unit = gl.get_parameter_i32(StateId::ActiveTexture.raw()) as u32;
        let units = (0..self.texture_units)
            .map(|n| {
                gl.active_texture(consts::TEXTURE0 + n);
                TextureUnitBinding {
                    texture_2d: gl.get_parameter_texture(StateId::TextureBinding2D.raw()),
                    cube_map: gl.get_parameter_texture(StateId::TextureBindingCubeMap.raw()),
                }
            })
            .collect();
        gl.active_texture(active_unit);

        TextureUnitSnapshot { active_unit, units }
    }

    fn restore_texture_units(&self, gl: &C, textures: &TextureUnitSnapshot<C>) {
        // A tracked ACTIVE_TEXTURE is restored by the primitive loop instead
        let return_to = self.restore_active_unit.then(|| match self.active_unit_restore {
            ActiveUnitRestore::PushTime => textures.active_unit,
            ActiveUnitRestore::PopTime => {
                gl.get_parameter_i32(StateId::ActiveTexture.raw()) as u32
            }
        });

        for (n, binding) in (0u32..).zip(&textures.units) {
            gl.active_texture(consts::TEXTURE0 + n);
            gl.bind_texture(consts::TEXTURE_2D, binding.texture_2d);
            gl.bind_texture(consts::TEXTURE_CUBE_MAP, binding.cube_map);
        }

        if let Some(unit) = return_to {
            gl.active_texture(unit);
        }
    }
}

impl<C: StateContext + ?Sized> fmt::Debug for StateStack<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStack")
            .field("tracked", &self.tracked)
            .field("groups", &self.registry)
            .field("needs_texture_tracking", &self.needs_texture_tracking)
            .field("restore_active_unit", &self.restore_active_unit)
            .field("active_unit_restore", &self.active_unit_restore)
            .field("texture_units", &self.texture_units)
            .field("depth", &self.snapshots.len())
            .finish()
    }
}

/// Restores the state captured by [`StateStack::scope`] when dropped
#[must_use = "the state is restored as soon as the scope is dropped"]
pub struct StateScope<'a, C: StateContext + ?Sized> {
    stack: &'a mut StateStack<C>,
    gl: &'a C,
}

impl<'a, C: StateContext + ?Sized> StateScope<'a, C> {
    /// The context the scope restores into
    pub fn context(&self) -> &'a C {
        self.gl
    }

    /// Restore now instead of at the end of the enclosing block
    pub fn pop(self) {
        drop(self)
    }
}

impl<C: StateContext + ?Sized> Drop for StateScope<'_, C> {
    fn drop(&mut self) {
        self.stack.pop(self.gl);
    }
}
