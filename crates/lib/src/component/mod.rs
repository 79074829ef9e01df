//! Components: the parts of a field value between component delimiters.
//!
//! A [`Component`] splits its value on the sub-component delimiter into
//! [`SubComponent`] leaves. Like a field, it re-splits eagerly every time
//! its value is assigned.

pub mod errors;

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::collection::{Element, ElementList};
use crate::encoding::Encoding;
use crate::split::split_string;
use crate::subcomponent::SubComponent;

pub use errors::ComponentError;

/// One component of a field, holding its sub-components in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    value: String,
    subcomponents: ElementList<SubComponent>,
    #[serde(skip)]
    encoding: Arc<Encoding>,
}

impl Component {
    /// Creates an empty component with no sub-components
    pub fn new(encoding: Arc<Encoding>) -> Self {
        Self {
            value: String::new(),
            subcomponents: ElementList::new(),
            encoding,
        }
    }

    /// Creates a component and splits `value` into sub-components
    pub fn with_value(value: impl Into<String>, encoding: Arc<Encoding>) -> Self {
        let mut component = Self::new(encoding);
        component.set_value(value);
        component
    }

    /// Creates a component holding exactly one literal sub-component.
    ///
    /// Used for values that must not be split, such as the encoding
    /// characters declaration.
    pub fn literal(value: impl Into<String>, encoding: Arc<Encoding>) -> Self {
        let value = value.into();
        let subcomponents = std::iter::once(SubComponent::new(value.clone(), Arc::clone(&encoding)))
            .collect();
        Self {
            value,
            subcomponents,
            encoding,
        }
    }

    /// Stores `value` and rebuilds the sub-component list from it.
    ///
    /// An empty value leaves the component with no sub-components.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.subcomponents = if self.value.is_empty() {
            ElementList::new()
        } else {
            split_string(&self.value, self.encoding.subcomponent_delimiter())
                .into_iter()
                .map(|piece| SubComponent::new(piece, Arc::clone(&self.encoding)))
                .collect()
        };
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn encoding(&self) -> &Arc<Encoding> {
        &self.encoding
    }

    /// True when the value holds more than one sub-component
    pub fn is_subcomponentized(&self) -> bool {
        self.subcomponents.len() > 1
    }

    /// Gets a sub-component by 1-based position
    pub fn subcomponent(&self, position: usize) -> Result<&SubComponent, ComponentError> {
        position
            .checked_sub(1)
            .and_then(|index| self.subcomponents.get(index))
            .ok_or(ComponentError::SubComponentNotAvailable {
                position,
                count: self.subcomponents.len(),
            })
    }

    /// All sub-components in order
    pub fn subcomponents(&self) -> &[SubComponent] {
        self.subcomponents.as_slice()
    }

    /// Appends a sub-component
    pub fn add_subcomponent(&mut self, subcomponent: SubComponent) -> Result<(), ComponentError> {
        self.subcomponents
            .push(subcomponent)
            .map(|_| ())
            .map_err(|e| ComponentError::AddSubComponentFailed {
                reason: e.to_string(),
            })
    }
}

impl Element for Component {
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

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
