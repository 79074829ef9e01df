//! Delimiter set used to decompose HL7v2 values.
//!
//! An [`Encoding`] is an immutable value object. Every node of a decomposed
//! tree holds the same `Arc<Encoding>`, so all levels agree on the delimiters
//! without copying them around.
//!
//! ```
//! use hl7tree::Encoding;
//!
//! let enc = Encoding::from_declaration('|', "^~\\&").unwrap();
//! assert_eq!(enc.component_delimiter(), '^');
//! assert_eq!(enc.declaration(), "^~\\&");
//! ```

pub mod errors;

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::constants::{
    COMPONENT_DELIMITER, DECLARATION_LEN, ESCAPE_CHARACTER, FIELD_DELIMITER, REPETITION_DELIMITER,
    SUBCOMPONENT_DELIMITER,
};

pub use errors::EncodingError;

/// The five encoding characters of an HL7v2 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Encoding {
    field_delimiter: char,
    component_delimiter: char,
    repetition_delimiter: char,
    escape_character: char,
    subcomponent_delimiter: char,
}

impl Default for Encoding {
    fn default() -> Self {
        Self {
            field_delimiter: FIELD_DELIMITER,
            component_delimiter: COMPONENT_DELIMITER,
            repetition_delimiter: REPETITION_DELIMITER,
            escape_character: ESCAPE_CHARACTER,
            subcomponent_delimiter: SUBCOMPONENT_DELIMITER,
        }
    }
}

impl Encoding {
    /// Creates the standard `|^~\&` delimiter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard delimiter set behind a shared pointer
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Builds a delimiter set from a field separator and an MSH-2 declaration.
    ///
    /// The declaration lists the component, repetition, escape and
    /// sub-component characters in that order. Characters past the fourth
    /// (such as the truncation character introduced in v2.7) are ignored.
    pub fn from_declaration(field_delimiter: char, declaration: &str) -> Result<Self, EncodingError> {
        let chars: Vec<char> = declaration.chars().take(DECLARATION_LEN).collect();
        if chars.len() < DECLARATION_LEN {
            return Err(EncodingError::IncompleteDeclaration {
                found: declaration.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for c in std::iter::once(field_delimiter).chain(chars.iter().copied()) {
            if !seen.insert(c) {
                return Err(EncodingError::DuplicateDelimiter { delimiter: c });
            }
        }

        Ok(Self {
            field_delimiter,
            component_delimiter: chars[0],
            repetition_delimiter: chars[1],
            escape_character: chars[2],
            subcomponent_delimiter: chars[3],
        })
    }

    pub fn field_delimiter(&self) -> char {
        self.field_delimiter
    }

    pub fn component_delimiter(&self) -> char {
        self.component_delimiter
    }

    pub fn repetition_delimiter(&self) -> char {
        self.repetition_delimiter
    }

    pub fn escape_character(&self) -> char {
        self.escape_character
    }

    pub fn subcomponent_delimiter(&self) -> char {
        self.subcomponent_delimiter
    }

    /// Returns the MSH-2 declaration string for this delimiter set
    pub fn declaration(&self) -> String {
        [
            self.component_delimiter,
            self.repetition_delimiter,
            self.escape_character,
            self.subcomponent_delimiter,
        ]
        .iter()
        .collect()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.field_delimiter, self.declaration())
    }
}
