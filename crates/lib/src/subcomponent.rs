//! Leaf node of the decomposition tree.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::collection::Element;
use crate::encoding::Encoding;

/// A literal sub-component value. Never split further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubComponent {
    value: String,
    #[serde(skip)]
    encoding: Arc<Encoding>,
}

impl SubComponent {
    pub fn new(value: impl Into<String>, encoding: Arc<Encoding>) -> Self {
        Self {
            value: value.into(),
            encoding,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Element for SubComponent {
    fn placeholder(encoding: &Arc<Encoding>) -> Self {
        Self::new(String::new(), Arc::clone(encoding))
    }

    fn encoding(&self) -> &Arc<Encoding> {
        &self.encoding
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SubComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
