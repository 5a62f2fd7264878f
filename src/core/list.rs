//! core::list
//!
//! The bounded, kind-tagged list container.
//!
//! # Invariants
//!
//! - Length never exceeds [`CAPACITY`]
//! - Every element is admitted by the list kind (see [`Kind::admits`])
//! - Text elements are at most [`MAX_TEXT_LEN`] characters
//! - Insertion order is preserved by every operation except sort
//!
//! A failed operation leaves the list untouched.
//!
//! # Example
//!
//! ```
//! use typedlist::core::list::List;
//!
//! let mut list = List::texts();
//! list.add(0, "b").unwrap();
//! list.add(0, "a").unwrap();
//! list.add(2, "c").unwrap();
//! list.update(1, "bee").unwrap();
//! list.remove(0).unwrap();
//!
//! assert_eq!(list.render(), "0: bee\n1: c\n");
//! ```

use serde::Serialize;

use super::adapters::{Queue, Stack};
use super::error::ListError;
use super::types::{Element, Kind, CAPACITY, MAX_TEXT_LEN};

/// An ordered sequence of elements of one kind, bounded by [`CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct List {
    kind: Kind,
    items: Vec<Element>,
}

impl List {
    /// Create an empty list that accepts elements of any kind.
    pub fn new() -> Self {
        Self::with_kind(Kind::Unspecified)
    }

    /// Create an empty integer list.
    pub fn integers() -> Self {
        Self::with_kind(Kind::Integer)
    }

    /// Create an empty text list.
    pub fn texts() -> Self {
        Self::with_kind(Kind::Text)
    }

    pub fn with_kind(kind: Kind) -> Self {
        Self {
            kind,
            items: Vec::with_capacity(CAPACITY),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= CAPACITY
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.items
    }

    /// Insert `value` before position `index`.
    ///
    /// `index == len()` appends. Elements at or after `index` shift right.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`ListError::IndexOutOfBounds`] if `index > len()`
    /// - [`ListError::CapacityExceeded`] if the list is full
    /// - [`ListError::InvalidType`] if the value's kind does not match
    /// - [`ListError::LengthExceeded`] if a text value is too long
    /// - [`ListError::MalformedInput`] if a text value contains a line break
    pub fn add(&mut self, index: usize, value: impl Into<Element>) -> Result<(), ListError> {
        if index > self.items.len() {
            return Err(self.out_of_bounds(index));
        }
        if self.is_full() {
            return Err(ListError::CapacityExceeded { capacity: CAPACITY });
        }
        let value = value.into();
        self.check_kind(&value)?;
        check_text(&value)?;

        self.items.insert(index, value);
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<Element, ListError> {
        if index >= self.items.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.items.remove(index))
    }

    /// Replace the element at `index` of a text list.
    ///
    /// # Errors
    ///
    /// - [`ListError::InvalidType`] if this is not a text list
    /// - [`ListError::IndexOutOfBounds`] if `index >= len()`
    /// - [`ListError::LengthExceeded`] if the value is too long
    /// - [`ListError::MalformedInput`] if the value contains a line break
    pub fn update(&mut self, index: usize, value: impl Into<String>) -> Result<(), ListError> {
        if self.kind != Kind::Text {
            return Err(ListError::InvalidType {
                expected: "text",
                found: self.kind,
            });
        }
        if index >= self.items.len() {
            return Err(self.out_of_bounds(index));
        }
        let value = Element::Text(value.into());
        check_text(&value)?;

        self.items[index] = value;
        Ok(())
    }

    /// Positions paired with their elements, in order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Element)> + '_ {
        self.items.iter().enumerate()
    }

    /// One `"<position>: <element>"` line per element.
    pub fn render(&self) -> String {
        self.entries()
            .map(|(i, e)| format!("{}: {}\n", i, e))
            .collect()
    }

    /// Write [`render`](Self::render) to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    /// View this list as a stack. Push inserts at the front; pop takes the
    /// highest index.
    pub fn as_stack(&mut self) -> Stack<'_> {
        Stack::new(self)
    }

    /// View this list as a queue. Enqueue appends; dequeue takes index 0.
    pub fn as_queue(&mut self) -> Queue<'_> {
        Queue::new(self)
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<Element> {
        &mut self.items
    }

    /// Build a list from already-validated elements, keeping at most
    /// `CAPACITY` of them.
    pub(crate) fn from_trusted(kind: Kind, items: impl IntoIterator<Item = Element>) -> Self {
        let mut list = Self::with_kind(kind);
        list.items.extend(items.into_iter().take(CAPACITY));
        list
    }

    pub(crate) fn out_of_bounds(&self, index: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index,
            len: self.items.len(),
        }
    }

    fn check_kind(&self, value: &Element) -> Result<(), ListError> {
        if self.kind.admits(value) {
            Ok(())
        } else {
            Err(ListError::InvalidType {
                expected: match self.kind {
                    Kind::Integer => "integer",
                    Kind::Text => "text",
                    Kind::Unspecified => "any",
                },
                found: value.kind(),
            })
        }
    }
}

/// Text must fit the length bound and stay on one line of the file format.
fn check_text(value: &Element) -> Result<(), ListError> {
    let Some(text) = value.as_text() else {
        return Ok(());
    };
    let len = text.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(ListError::LengthExceeded {
            len,
            max: MAX_TEXT_LEN,
        });
    }
    if text.contains(['\n', '\r']) {
        return Err(ListError::MalformedInput {
            line: None,
            message: "text contains a line break".to_string(),
        });
    }
    Ok(())
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
