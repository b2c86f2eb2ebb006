//! Stack configuration

use crate::groups::GroupRegistry;
use crate::identifier::StateId;

/// Which active texture unit `pop()` leaves selected when the active unit is
/// not itself tracked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActiveUnitRestore {
    /// The unit that was active when the matching `push()` ran
    #[default]
    PushTime,
    /// The unit that was active when `pop()` started
    PopTime,
}

/// Immutable configuration for a [`StateStack`](crate::StateStack)
///
/// # Example
///
/// ```
/// use gl_state_stack::{ActiveUnitRestore, GroupRegistry, StackConfig, StateId};
///
/// let config = StackConfig::default()
///     .variables([StateId::Blend, StateId::Viewport])
///     .groups(GroupRegistry::empty())
///     .active_unit_restore(ActiveUnitRestore::PopTime);
/// assert_eq!(config.tracked_variables().map(<[_]>::len), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StackConfig {
    /// Identifiers to track; `None` asks the default-variables provider
    pub variables: Option<Vec<StateId>>,
    pub groups: GroupRegistry,
    pub active_unit_restore: ActiveUnitRestore,
}

impl StackConfig {
    pub fn variables(mut self, ids: impl IntoIterator<Item = StateId>) -> Self {
        self.variables = Some(ids.into_iter().collect());
        self
    }

    pub fn groups(mut self, groups: GroupRegistry) -> Self {
        self.groups = groups;
        self
    }

    pub fn active_unit_restore(mut self, mode: ActiveUnitRestore) -> Self {
        self.active_unit_restore = mode;
        self
    }

    pub fn tracked_variables(&self) -> Option<&[StateId]> {
        self.variables.as_deref()
    }
}
