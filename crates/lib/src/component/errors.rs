//! Error types for component access.

use thiserror::Error;

/// Structured error types for [`Component`](super::Component) operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// No sub-component exists at the requested 1-based position
    #[error("Sub-component not available at position {position} (component has {count})")]
    SubComponentNotAvailable { position: usize, count: usize },

    /// The sub-component list rejected an insertion
    #[error("Unable to add new sub-component: {reason}")]
    AddSubComponentFailed { reason: String },
}

impl ComponentError {
    /// Check if this error indicates a missing sub-component
    pub fn is_not_found(&self) -> bool {
        matches!(self, ComponentError::SubComponentNotAvailable { .. })
    }

    /// Check if this error is an insertion failure
    pub fn is_add_failure(&self) -> bool {
        matches!(self, ComponentError::AddSubComponentFailed { .. })
    }
}

// Conversion from ComponentError to the main Error type
impl From<ComponentError> for crate::Error {
    fn from(err: ComponentError) -> Self {
        crate::Error::Component(err)
    }
}
