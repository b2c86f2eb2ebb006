//! Error types for the state stack
//!
//! Capture and restore never fail on their own: a faulting context call is the
//! context's business. Errors only come from building configuration.

use thiserror::Error;

/// Result type for configuration operations
pub type StateStackResult<T> = Result<T, StateStackError>;

/// Errors that can occur while configuring a state stack
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateStackError {
    /// A state name could not be parsed into an identifier
    #[error("Unknown state name: {name}")]
    UnknownStateName { name: String },

    /// The same composite state was registered more than once
    #[error("Composite state registered twice: {group}")]
    DuplicateGroup { group: String },
}

impl StateStackError {
    /// Create an unknown state name error
    pub fn unknown_state_name(name: impl Into<String>) -> Self {
        let name = name.into();
        state_debug!("Unknown state name: {}", name);
        Self::UnknownStateName { name }
    }

    /// Create a duplicate group error
    pub fn duplicate_group(group: impl Into<String>) -> Self {
        let group = group.into();
        state_warn!("Composite state registered twice: {}", group);
        Self::DuplicateGroup { group }
    }
}
