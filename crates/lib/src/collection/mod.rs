//! Positional ordered collection backing every level of the tree.
//!
//! [`ElementList`] stores elements in a plain vector addressed by 0-based
//! index. Reads past the end return `None` instead of failing, and
//! [`ElementList::insert_at`] accepts an index beyond the current length by
//! padding the gap with empty placeholder elements first:
//!
//! ```
//! use hl7tree::{Component, ElementList, Encoding};
//!
//! let enc = Encoding::shared();
//! let mut list = ElementList::new();
//! list.push(Component::with_value("A", enc.clone())).unwrap();
//! list.insert_at(Component::with_value("D", enc.clone()), 3).unwrap();
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.get(1).map(|c| c.value()), Some(""));
//! assert_eq!(list.get(3).map(|c| c.value()), Some("D"));
//! assert!(list.get(4).is_none());
//! ```

pub mod errors;

use serde::Serialize;
use std::slice;
use std::sync::Arc;

use crate::constants::MAX_ELEMENTS;
use crate::encoding::Encoding;

pub use errors::CollectionError;

/// A node type that can live in an [`ElementList`].
///
/// Gap-filling needs to create empty elements of the same concrete type that
/// share the caller's delimiter context.
pub trait Element {
    /// Creates an empty element bound to `encoding`
    fn placeholder(encoding: &Arc<Encoding>) -> Self;

    /// The delimiter set this element was built with
    fn encoding(&self) -> &Arc<Encoding>;

    /// The raw text held by this element
    fn value(&self) -> &str;
}

/// Ordered list with absent-on-miss reads and gap-filling positional insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ElementList<T> {
    items: Vec<T>,
}

impl<T> Default for ElementList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElementList<T> {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements, placeholders included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets an element by index (0-based), `None` past the end
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Gets a mutable reference to an element by index (0-based)
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// This never grows the list; use [`insert_at`](Self::insert_at) to
    /// address a slot past the end.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, element)),
            None => Err(CollectionError::IndexOutOfBounds { index, len }),
        }
    }

    /// Appends an element and returns its index
    pub fn push(&mut self, element: T) -> Result<usize, CollectionError> {
        let index = self.items.len();
        if index >= MAX_ELEMENTS {
            return Err(CollectionError::PositionTooLarge {
                index,
                max: MAX_ELEMENTS,
            });
        }
        self.items.push(element);
        Ok(index)
    }

    /// Returns an iterator over the elements in order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements in order
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Views the list as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Element> ElementList<T> {
    /// Pads the list with placeholders until it holds at least `len` elements.
    ///
    /// Returns the number of placeholders added. The list never shrinks.
    pub fn grow_to(&mut self, len: usize, encoding: &Arc<Encoding>) -> Result<usize, CollectionError> {
        if len > MAX_ELEMENTS {
            return Err(CollectionError::PositionTooLarge {
                index: len,
                max: MAX_ELEMENTS,
            });
        }

        let added = len.saturating_sub(self.items.len());
        if added > 0 {
            tracing::debug!(from = self.items.len(), to = len, "Padding list with placeholders");
            self.items.reserve(added);
            self.items
                .extend(std::iter::repeat_with(|| T::placeholder(encoding)).take(added));
        }
        Ok(added)
    }

    /// Places `element` at `index` (0-based).
    ///
    /// Inside the current bounds the existing slot is replaced and returned.
    /// Past the end, the gap is first filled with placeholders bound to the
    /// element's encoding so the element lands at exactly `index`. Existing
    /// elements are never shifted or removed. Only growth is bounded by
    /// [`MAX_ELEMENTS`]; an existing slot can always be replaced.
    pub fn insert_at(&mut self, element: T, index: usize) -> Result<Option<T>, CollectionError> {
        if index < self.items.len() {
            return self.set(index, element).map(Some);
        }

        if index >= MAX_ELEMENTS {
            return Err(CollectionError::PositionTooLarge {
                index,
                max: MAX_ELEMENTS,
            });
        }

        let encoding = Arc::clone(element.encoding());
        self.grow_to(index, &encoding)?;
        self.items.push(element);
        Ok(None)
    }
}

impl<T> FromIterator<T> for ElementList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ElementList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ElementList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
