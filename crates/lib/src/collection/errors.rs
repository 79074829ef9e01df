//! Error types for positional element lists.

use thiserror::Error;

/// Structured error types for [`ElementList`](super::ElementList) operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Direct replacement addressed a slot past the end of the list
    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Growth would take the list past its element limit
    #[error("Position {index} exceeds the maximum of {max} elements")]
    PositionTooLarge { index: usize, max: usize },
}

impl CollectionError {
    /// Check if this error is a bounds violation on replacement
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, CollectionError::IndexOutOfBounds { .. })
    }

    /// Check if this error is caused by the element limit
    pub fn is_too_large(&self) -> bool {
        matches!(self, CollectionError::PositionTooLarge { .. })
    }

    /// Get the offending index
    pub fn index(&self) -> usize {
        match self {
            CollectionError::IndexOutOfBounds { index, .. }
            | CollectionError::PositionTooLarge { index, .. } => *index,
        }
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
