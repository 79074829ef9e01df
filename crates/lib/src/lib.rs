//!
//! hl7tree: structural decomposition of HL7v2 field values.
//! This library turns a single pipe-delimited field value into a tree of nodes that can be
//! read by position and extended in place.
//!
//! ## Core Concepts
//!
//! * **Encoding (`encoding::Encoding`)**: The delimiter set (`|^~\&` by default) shared by every node of a tree.
//! * **Fields (`field::Field`)**: A field value, decomposed eagerly on every assignment into either repetitions or components.
//! * **Repetitions**: Sibling fields produced when a value contains the repetition delimiter. Each one is decomposed on its own.
//! * **Components (`component::Component`)**: The parts of a non-repeating field value, split further into sub-components.
//! * **SubComponents (`subcomponent::SubComponent`)**: Literal leaves.
//! * **ElementList (`collection::ElementList`)**: The positional list behind every level, with absent-on-miss reads and gap-filling insertion.
//!
//! ```
//! use hl7tree::{Encoding, Field};
//!
//! let encoding = Encoding::shared();
//! let name = Field::with_value("SMITH^JOHN^Q", encoding.clone());
//! assert!(name.is_componentized());
//! assert_eq!(name.component(2).unwrap().value(), "JOHN");
//!
//! let msh2 = Field::delimiter_declaration("^~\\&", encoding);
//! assert_eq!(msh2.component_count(), 1);
//! ```

pub mod collection;
pub mod component;
pub mod constants;
pub mod encoding;
pub mod field;
pub mod split;
pub mod subcomponent;

pub use collection::{CollectionError, Element, ElementList};
pub use component::{Component, ComponentError};
pub use encoding::{Encoding, EncodingError};
pub use field::{Decomposition, Field, FieldError, decompose};
pub use split::split_string;
pub use subcomponent::SubComponent;

/// Result type used throughout the hl7tree library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the hl7tree library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured encoding errors from the encoding module
    #[error(transparent)]
    Encoding(encoding::EncodingError),

    /// Structured list errors from the collection module
    #[error(transparent)]
    Collection(collection::CollectionError),

    /// Structured component errors from the component module
    #[error(transparent)]
    Component(component::ComponentError),

    /// Structured field errors from the field module
    #[error(transparent)]
    Field(field::FieldError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Encoding(_) => "encoding",
            Error::Collection(_) => "collection",
            Error::Component(_) => "component",
            Error::Field(_) => "field",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a requested element does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Field(field_err) => field_err.is_not_found(),
            Error::Component(component_err) => component_err.is_not_found(),
            Error::Collection(collection_err) => collection_err.is_out_of_bounds(),
            _ => false,
        }
    }

    /// Check if this error is an insertion failure.
    pub fn is_add_failure(&self) -> bool {
        match self {
            Error::Field(field_err) => field_err.is_add_failure(),
            Error::Component(component_err) => component_err.is_add_failure(),
            Error::Collection(_) => true,
            _ => false,
        }
    }

    /// Check if this error is encoding-related.
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }
}
