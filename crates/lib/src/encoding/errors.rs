//! Error types for delimiter set construction.

use thiserror::Error;

/// Errors raised while building an [`Encoding`](super::Encoding) from a declaration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The declaration carries fewer than the four required characters
    #[error("Incomplete encoding characters declaration: {found:?}")]
    IncompleteDeclaration { found: String },

    /// The same character was declared for two different roles
    #[error("Delimiter '{delimiter}' is declared more than once")]
    DuplicateDelimiter { delimiter: char },
}

impl EncodingError {
    /// Check if this error is caused by a short declaration
    pub fn is_incomplete(&self) -> bool {
        matches!(self, EncodingError::IncompleteDeclaration { .. })
    }

    /// Check if this error is caused by a repeated delimiter
    pub fn is_duplicate(&self) -> bool {
        matches!(self, EncodingError::DuplicateDelimiter { .. })
    }
}

// Conversion from EncodingError to the main Error type
impl From<EncodingError> for crate::Error {
    fn from(err: EncodingError) -> Self {
        crate::Error::Encoding(err)
    }
}
