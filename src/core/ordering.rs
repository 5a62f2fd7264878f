//! core::ordering
//!
//! Sort, sortedness checks, split and merge.
//!
//! # Ordering Relation
//!
//! Integer lists order numerically and text lists order by code point.
//! Unspecified lists have no ordering relation, so sort and merge reject
//! them. Split only looks at positions and works for every kind.
//!
//! # Example
//!
//! ```
//! use typedlist::core::list::List;
//!
//! let mut list = List::integers();
//! for (i, n) in [3, 1, 2].into_iter().enumerate() {
//!     list.add(i, n).unwrap();
//! }
//! list.sort(true).unwrap();
//! assert!(list.is_sorted(true).unwrap());
//!
//! let (first, second) = list.split(1).unwrap();
//! assert_eq!(first.render(), "0: 1\n");
//! assert_eq!(second.render(), "0: 2\n1: 3\n");
//! ```

use std::cmp::Ordering;

use super::error::{ListError, MergeError};
use super::list::List;
use super::types::{Element, CAPACITY};

impl List {
    /// Sort in place, ascending or descending.
    ///
    /// Ties keep no particular order.
    ///
    /// # Errors
    ///
    /// - [`ListError::Unsortable`] for unspecified lists
    /// - [`ListError::EmptyCollection`] when there is nothing to sort
    pub fn sort(&mut self, ascending: bool) -> Result<(), ListError> {
        let kind = self.kind();
        if !kind.is_ordered() {
            return Err(ListError::Unsortable { kind });
        }
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }

        self.items_mut().sort_unstable_by(|a, b| {
            let ord = order(a, b);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        Ok(())
    }

    /// Whether the list is already monotonic in the requested direction.
    ///
    /// Equal neighbours count as sorted either way. Empty and single
    /// element lists are sorted.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidType`] for unspecified lists.
    pub fn is_sorted(&self, expect_ascending: bool) -> Result<bool, ListError> {
        let kind = self.kind();
        if !kind.is_ordered() {
            return Err(ListError::InvalidType {
                expected: "integer or text",
                found: kind,
            });
        }

        let out_of_order = if expect_ascending {
            Ordering::Greater
        } else {
            Ordering::Less
        };
        Ok(self
            .as_slice()
            .windows(2)
            .all(|pair| order(&pair[0], &pair[1]) != out_of_order))
    }

    /// Split into two independent lists of the same kind.
    ///
    /// Elements before `index` go to the first list and the rest to the
    /// second. Splitting at the last index keeps every element in the first
    /// list and leaves the second empty.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if `index >= len()`.
    pub fn split(&self, index: usize) -> Result<(List, List), ListError> {
        let len = self.len();
        if index >= len {
            return Err(self.out_of_bounds(index));
        }

        let kind = self.kind();
        let items = self.as_slice();
        let at = if index == len - 1 { len } else { index };
        let (head, tail) = items.split_at(at);

        Ok((
            List::from_trusted(kind, head.iter().cloned()),
            List::from_trusted(kind, tail.iter().cloned()),
        ))
    }

    /// Concatenate this list and `other` into a new list.
    ///
    /// # Errors
    ///
    /// - [`ListError::IncompatibleType`] if the kinds differ
    /// - [`ListError::Unsortable`] if both lists are unspecified
    /// - [`ListError::CapacityExceeded`] if the combined length is over
    ///   [`CAPACITY`]. The error still carries the result, truncated to
    ///   the first `CAPACITY` elements in concatenation order.
    pub fn merge(&self, other: &List) -> Result<List, MergeError> {
        let (left, right) = (self.kind(), other.kind());
        if left != right {
            return Err(MergeError::rejected(ListError::IncompatibleType {
                left,
                right,
            }));
        }
        if !left.is_ordered() {
            return Err(MergeError::rejected(ListError::Unsortable { kind: left }));
        }

        let combined = self.iter().chain(other.iter()).cloned();
        let merged = List::from_trusted(left, combined);

        if self.len() + other.len() > CAPACITY {
            return Err(MergeError::truncated(
                ListError::CapacityExceeded { capacity: CAPACITY },
                merged,
            ));
        }
        Ok(merged)
    }
}

/// Kind-aware comparison of two elements from the same ordered list.
fn order(a: &Element, b: &Element) -> Ordering {
    // Lists never mix kinds once ordered; treat a mismatch as a tie.
    a.compare(b).unwrap_or(Ordering::Equal)
}
