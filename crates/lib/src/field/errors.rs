//! Error types for field access and mutation.

use thiserror::Error;

/// Structured error types for [`Field`](super::Field) operations.
///
/// Decomposition itself never fails; these errors only come from
/// position-based access and component insertion.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// No component exists at the requested 1-based position
    #[error("Component not available at position {position} (field has {count})")]
    ComponentNotAvailable { position: usize, count: usize },

    /// The component list rejected an insertion
    #[error("Unable to add new component: {reason}")]
    AddComponentFailed { reason: String },

    /// The requested 1-based repetition does not exist
    #[error("Repetition {index} out of range (field has {count})")]
    RepetitionOutOfRange { index: usize, count: usize },
}

impl FieldError {
    /// Check if this error indicates a missing component or repetition
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FieldError::ComponentNotAvailable { .. } | FieldError::RepetitionOutOfRange { .. }
        )
    }

    /// Check if this error is an insertion failure
    pub fn is_add_failure(&self) -> bool {
        matches!(self, FieldError::AddComponentFailed { .. })
    }

    /// Get the requested position if this is a lookup error
    pub fn position(&self) -> Option<usize> {
        match self {
            FieldError::ComponentNotAvailable { position, .. } => Some(*position),
            FieldError::RepetitionOutOfRange { index, .. } => Some(*index),
            FieldError::AddComponentFailed { .. } => None,
        }
    }
}

// Conversion from FieldError to the main Error type
impl From<FieldError> for crate::Error {
    fn from(err: FieldError) -> Self {
        crate::Error::Field(err)
    }
}
