//! core::types
//!
//! Strong types for list elements and their kinds.
//!
//! # Types
//!
//! - [`Kind`] - Element kind discriminator carried by every list
//! - [`Element`] - A single stored value (integer or text)
//!
//! # Bounds
//!
//! Every list holds at most [`CAPACITY`] elements, and every text element
//! holds at most [`MAX_TEXT_LEN`] characters. These bounds are enforced on
//! insert, not at element construction, so that an oversized value produces
//! a [`ListError::LengthExceeded`](crate::core::error::ListError) against
//! the list it was offered to.
//!
//! # Examples
//!
//! ```
//! use typedlist::core::types::{Element, Kind};
//!
//! assert_eq!(Kind::from_tag(1), Some(Kind::Integer));
//! assert_eq!(Element::from(2.9), Element::Integer(2));
//! assert_eq!(Kind::Text.parse_element("  hi ").unwrap(), Element::from("hi"));
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use super::error::ListError;

/// Maximum number of elements a list can hold.
pub const CAPACITY: usize = 20;

/// Maximum length of a text element, in characters.
pub const MAX_TEXT_LEN: usize = 250;

/// The element kind a list is tagged with.
///
/// The discriminants are the tags used by the persisted file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Accepts any element; ordering, merge and statistics are disabled.
    #[default]
    Unspecified = 0,
    /// Signed integers.
    Integer = 1,
    /// Bounded-length text.
    Text = 2,
}

impl Kind {
    /// The integer tag written as the first line of a list file.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its persisted tag.
    pub fn from_tag(tag: i64) -> Option<Self> {
        match tag {
            0 => Some(Kind::Unspecified),
            1 => Some(Kind::Integer),
            2 => Some(Kind::Text),
            _ => None,
        }
    }

    /// Whether this kind has an ordering relation.
    pub fn is_ordered(self) -> bool {
        !matches!(self, Kind::Unspecified)
    }

    /// Whether `element` may be stored in a list of this kind.
    pub fn admits(self, element: &Element) -> bool {
        match self {
            Kind::Unspecified => true,
            Kind::Integer => matches!(element, Element::Integer(_)),
            Kind::Text => matches!(element, Element::Text(_)),
        }
    }

    /// Interpret a raw textual value as an element of this kind.
    ///
    /// Integer values are trimmed and parsed; text values are trimmed.
    ///
    /// # Errors
    ///
    /// - [`ListError::MalformedInput`] if an integer value does not parse
    /// - [`ListError::InvalidType`] for `Unspecified`, which has no textual
    ///   form to parse into
    pub fn parse_element(self, raw: &str) -> Result<Element, ListError> {
        let raw = raw.trim();
        match self {
            Kind::Integer => raw
                .parse::<i64>()
                .map(Element::Integer)
                .map_err(|e| ListError::MalformedInput {
                    line: None,
                    message: format!("'{}' is not an integer: {}", raw, e),
                }),
            Kind::Text => Ok(Element::Text(raw.to_string())),
            Kind::Unspecified => Err(ListError::InvalidType {
                expected: "integer or text",
                found: self,
            }),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Unspecified => write!(f, "unspecified"),
            Kind::Integer => write!(f, "integer"),
            Kind::Text => write!(f, "text"),
        }
    }
}

/// A value stored in a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Element {
    Integer(i64),
    Text(String),
}

impl Element {
    /// The kind this element belongs to.
    pub fn kind(&self) -> Kind {
        match self {
            Element::Integer(_) => Kind::Integer,
            Element::Text(_) => Kind::Text,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Element::Integer(n) => Some(*n),
            Element::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Element::Text(s) => Some(s),
            Element::Integer(_) => None,
        }
    }

    /// Length of a text element in characters. Integers have no length.
    pub fn text_len(&self) -> Option<usize> {
        self.as_text().map(|s| s.chars().count())
    }

    /// Compare two elements of the same kind.
    ///
    /// Integers compare numerically, text compares by code point. Returns
    /// `None` when the kinds differ.
    pub fn compare(&self, other: &Element) -> Option<Ordering> {
        match (self, other) {
            (Element::Integer(a), Element::Integer(b)) => Some(a.cmp(b)),
            (Element::Text(a), Element::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Integer(n) => write!(f, "{}", n),
            Element::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Element {
    fn from(n: i64) -> Self {
        Element::Integer(n)
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Element::Integer(i64::from(n))
    }
}

// Real values keep their integer part.
impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Element::Integer(n.trunc() as i64)
    }
}

impl From<f32> for Element {
    fn from(n: f32) -> Self {
        Element::from(f64::from(n))
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Text(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod kind {
        use super::*;

        #[test]
        fn tags_roundtrip() {
            for kind in [Kind::Unspecified, Kind::Integer, Kind::Text] {
                assert_eq!(Kind::from_tag(i64::from(kind.tag())), Some(kind));
            }
        }

        #[test]
        fn unknown_tag_rejected() {
            assert_eq!(Kind::from_tag(3), None);
            assert_eq!(Kind::from_tag(-1), None);
        }

        #[test]
        fn admits_matching_elements() {
            assert!(Kind::Integer.admits(&Element::from(1)));
            assert!(!Kind::Integer.admits(&Element::from("1")));
            assert!(Kind::Text.admits(&Element::from("a")));
            assert!(!Kind::Text.admits(&Element::from(1)));
            assert!(Kind::Unspecified.admits(&Element::from(1)));
            assert!(Kind::Unspecified.admits(&Element::from("a")));
        }

        #[test]
        fn parse_integer_trims() {
            assert_eq!(Kind::Integer.parse_element(" 42\t").unwrap(), Element::from(42));
        }

        #[test]
        fn parse_integer_rejects_garbage() {
            let err = Kind::Integer.parse_element("4x").unwrap_err();
            assert!(matches!(err, ListError::MalformedInput { .. }));
        }

        #[test]
        fn parse_unspecified_fails() {
            let err = Kind::Unspecified.parse_element("a").unwrap_err();
            assert!(matches!(err, ListError::InvalidType { .. }));
        }

        #[test]
        fn serde_lowercase() {
            assert_eq!(serde_json::to_string(&Kind::Text).unwrap(), "\"text\"");
        }
    }

    mod element {
        use super::*;

        #[test]
        fn reals_truncate() {
            assert_eq!(Element::from(2.1), Element::Integer(2));
            assert_eq!(Element::from(3.0_f32), Element::Integer(3));
            assert_eq!(Element::from(-1.7), Element::Integer(-1));
        }

        #[test]
        fn text_len_counts_chars() {
            assert_eq!(Element::from("héllo").text_len(), Some(5));
            assert_eq!(Element::from(7).text_len(), None);
        }

        #[test]
        fn compare_same_kind_only() {
            assert_eq!(
                Element::from(1).compare(&Element::from(2)),
                Some(Ordering::Less)
            );
            assert_eq!(
                Element::from("b").compare(&Element::from("a")),
                Some(Ordering::Greater)
            );
            assert_eq!(Element::from(1).compare(&Element::from("1")), None);
        }

        #[test]
        fn untagged_serde() {
            let json = serde_json::to_string(&vec![Element::from(1), Element::from("a")]).unwrap();
            assert_eq!(json, r#"[1,"a"]"#);
        }
    }
}
