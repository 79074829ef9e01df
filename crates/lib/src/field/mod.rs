//! Field decomposition engine.
//!
//! A [`Field`] owns a raw value and the structure derived from it. Every
//! assignment of the value rebuilds that structure through [`decompose`],
//! which checks the delimiters in a fixed order:
//!
//! 1. A delimiter-declaration field (MSH-2) is never split. It holds one
//!    component with one sub-component equal to the whole value.
//! 2. An empty value yields no components.
//! 3. A value containing the repetition delimiter becomes a list of sibling
//!    fields, one per repetition, each decomposed on its own.
//! 4. Anything else is split on the component delimiter.
//!
//! ```
//! use hl7tree::{Encoding, Field};
//!
//! let field = Field::with_value("A^B~C^D^E~F", Encoding::shared());
//! let reps = field.repetitions().unwrap();
//! assert_eq!(reps.len(), 3);
//! assert_eq!(reps[1].component(3).unwrap().value(), "E");
//! ```
//!
//! # Positions
//!
//! Read accessors ([`Field::component`], [`Field::repetition`]) take 1-based
//! positions, as HL7 numbers them. [`Field::add_component_at`] takes a
//! 0-based storage index and passes it to the list unchanged.

pub mod errors;

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::collection::{Element, ElementList};
use crate::component::Component;
use crate::encoding::Encoding;
use crate::split::split_string;

pub use errors::FieldError;

/// Structure derived from a field value.
///
/// Repetitions and components are mutually exclusive: a repeated field keeps
/// its components inside each repetition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Decomposition {
    /// Components of a non-repeating value (possibly none)
    Flat {
        components: ElementList<Component>,
        /// Set from the split of the assigned value, not from later additions
        componentized: bool,
    },
    /// One independently decomposed field per repetition
    Repeated(Vec<Field>),
}

impl Default for Decomposition {
    fn default() -> Self {
        Decomposition::Flat {
            components: ElementList::new(),
            componentized: false,
        }
    }
}

impl Decomposition {
    /// Returns a human-readable name for this variant
    pub fn kind(&self) -> &'static str {
        match self {
            Decomposition::Flat { .. } => "flat",
            Decomposition::Repeated(_) => "repeated",
        }
    }

    /// Number of repetitions; zero for a flat structure
    pub fn repetition_count(&self) -> usize {
        match self {
            Decomposition::Flat { .. } => 0,
            Decomposition::Repeated(reps) => reps.len(),
        }
    }

    /// Number of components; zero for a repeated structure
    pub fn component_count(&self) -> usize {
        match self {
            Decomposition::Flat { components, .. } => components.len(),
            Decomposition::Repeated(_) => 0,
        }
    }
}

/// Decomposes `raw` into repetitions or components.
///
/// This is the pure function behind [`Field::set_value`]. It never fails:
/// malformed or empty input degrades to a flat, possibly empty, structure.
pub fn decompose(raw: &str, encoding: &Arc<Encoding>, is_delimiter_declaration: bool) -> Decomposition {
    let decomposition = if is_delimiter_declaration {
        let literal = Component::literal(raw, Arc::clone(encoding));
        Decomposition::Flat {
            components: std::iter::once(literal).collect(),
            componentized: false,
        }
    } else if raw.is_empty() {
        Decomposition::default()
    } else if raw.contains(encoding.repetition_delimiter()) {
        Decomposition::Repeated(
            split_string(raw, encoding.repetition_delimiter())
                .into_iter()
                .map(|piece| Field::with_value(piece, Arc::clone(encoding)))
                .collect(),
        )
    } else {
        let components: ElementList<Component> = split_string(raw, encoding.component_delimiter())
            .into_iter()
            .map(|piece| Component::with_value(piece, Arc::clone(encoding)))
            .collect();
        let componentized = components.len() > 1;
        Decomposition::Flat {
            components,
            componentized,
        }
    };

    tracing::trace!(
        len = raw.len(),
        kind = decomposition.kind(),
        declaration = is_delimiter_declaration,
        repetitions = decomposition.repetition_count(),
        components = decomposition.component_count(),
        "Decomposed field value"
    );
    decomposition
}

/// One position-addressed value of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    value: String,
    is_delimiter_declaration: bool,
    decomposition: Decomposition,
    #[serde(skip)]
    encoding: Arc<Encoding>,
}

impl Field {
    /// Creates an empty field
    pub fn new(encoding: Arc<Encoding>) -> Self {
        Self {
            value: String::new(),
            is_delimiter_declaration: false,
            decomposition: Decomposition::default(),
            encoding,
        }
    }

    /// Creates a field and decomposes `value` immediately
    pub fn with_value(value: impl Into<String>, encoding: Arc<Encoding>) -> Self {
        let mut field = Self::new(encoding);
        field.set_value(value);
        field
    }

    /// Creates a field carrying the encoding characters themselves (MSH-2).
    ///
    /// Its value is kept verbatim as a single component and sub-component.
    pub fn delimiter_declaration(value: impl Into<String>, encoding: Arc<Encoding>) -> Self {
        let mut field = Self::new(encoding);
        field.is_delimiter_declaration = true;
        field.set_value(value);
        field
    }

    /// Stores `value` and rebuilds the derived structure from scratch
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.decomposition = decompose(&self.value, &self.encoding, self.is_delimiter_declaration);
    }

    /// Marks or unmarks this field as the delimiter declaration and re-decomposes
    pub fn set_delimiter_declaration(&mut self, is_delimiter_declaration: bool) {
        if self.is_delimiter_declaration != is_delimiter_declaration {
            self.is_delimiter_declaration = is_delimiter_declaration;
            self.decomposition = decompose(&self.value, &self.encoding, is_delimiter_declaration);
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn encoding(&self) -> &Arc<Encoding> {
        &self.encoding
    }

    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    pub fn is_delimiter_declaration(&self) -> bool {
        self.is_delimiter_declaration
    }

    pub fn has_repetitions(&self) -> bool {
        matches!(self.decomposition, Decomposition::Repeated(_))
    }

    /// True when the assigned value splits into more than one component.
    ///
    /// Components added afterwards do not change it. Always false for a
    /// repeated field.
    pub fn is_componentized(&self) -> bool {
        match &self.decomposition {
            Decomposition::Flat { componentized, .. } => *componentized,
            Decomposition::Repeated(_) => false,
        }
    }

    /// Number of components; zero for a repeated field
    pub fn component_count(&self) -> usize {
        self.decomposition.component_count()
    }

    /// Number of repetitions; zero when the field does not repeat
    pub fn repetition_count(&self) -> usize {
        self.decomposition.repetition_count()
    }

    /// All components in order; empty for a repeated field
    pub fn components(&self) -> &[Component] {
        match &self.decomposition {
            Decomposition::Flat { components, .. } => components.as_slice(),
            Decomposition::Repeated(_) => &[],
        }
    }

    /// Gets a component by 1-based position
    pub fn component(&self, position: usize) -> Result<&Component, FieldError> {
        position
            .checked_sub(1)
            .and_then(|index| self.components().get(index))
            .ok_or(FieldError::ComponentNotAvailable {
                position,
                count: self.component_count(),
            })
    }

    /// Gets a mutable component by 1-based position
    pub fn component_mut(&mut self, position: usize) -> Result<&mut Component, FieldError> {
        let count = self.component_count();
        let not_available = FieldError::ComponentNotAvailable { position, count };
        let index = position.checked_sub(1).ok_or_else(|| not_available.clone())?;
        match &mut self.decomposition {
            Decomposition::Flat { components, .. } => {
                components.get_mut(index).ok_or(not_available)
            }
            Decomposition::Repeated(_) => Err(not_available),
        }
    }

    /// Appends a component after the last one
    pub fn add_component(&mut self, component: Component) -> Result<(), FieldError> {
        let components = self.flat_components_mut()?;
        components.push(component).map(|_| ()).map_err(|e| {
            tracing::warn!(error = %e, "Component append rejected");
            FieldError::AddComponentFailed {
                reason: e.to_string(),
            }
        })
    }

    /// Places a component at a 0-based storage `index`.
    ///
    /// Unlike the read accessors, `index` is not shifted: index 0 is the
    /// first component. An index inside the current list replaces that
    /// component; an index past the end pads the gap with empty components.
    pub fn add_component_at(&mut self, component: Component, index: usize) -> Result<(), FieldError> {
        let components = self.flat_components_mut()?;
        components.insert_at(component, index).map(|_| ()).map_err(|e| {
            tracing::warn!(index, error = %e, "Positional component insert rejected");
            FieldError::AddComponentFailed {
                reason: e.to_string(),
            }
        })
    }

    fn flat_components_mut(&mut self) -> Result<&mut ElementList<Component>, FieldError> {
        match &mut self.decomposition {
            Decomposition::Flat { components, .. } => Ok(components),
            Decomposition::Repeated(reps) => Err(FieldError::AddComponentFailed {
                reason: format!(
                    "field holds {} repetitions; add components to a repetition instead",
                    reps.len()
                ),
            }),
        }
    }

    /// All repetitions, or `None` when the field does not repeat
    pub fn repetitions(&self) -> Option<&[Field]> {
        match &self.decomposition {
            Decomposition::Repeated(reps) => Some(reps.as_slice()),
            Decomposition::Flat { .. } => None,
        }
    }

    /// Gets a repetition by 1-based index.
    ///
    /// Returns `Ok(None)` for any index when the field does not repeat, and
    /// an error when it repeats but `index` is out of range.
    pub fn repetition(&self, index: usize) -> Result<Option<&Field>, FieldError> {
        let Some(reps) = self.repetitions() else {
            return Ok(None);
        };
        index
            .checked_sub(1)
            .and_then(|i| reps.get(i))
            .map(Some)
            .ok_or(FieldError::RepetitionOutOfRange {
                index,
                count: reps.len(),
            })
    }

    /// Renders the decomposed tree as JSON for inspection
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Element for Field {
    fn placeholder(encoding: &Arc<Encoding>) -> Self {
        Self::new(Arc::clone(encoding))
    }

    fn encoding(&self) -> &Arc<Encoding> {
        &self.encoding
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
