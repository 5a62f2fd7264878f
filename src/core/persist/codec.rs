//! core::persist::codec
//!
//! Text encoding of lists.
//!
//! Decoding inserts through [`List::add`], so a file that would overflow
//! the list, or carries an over-long text line, fails exactly as the
//! equivalent inserts would.
//!
//! # Example
//!
//! ```
//! use typedlist::core::list::List;
//! use typedlist::core::persist::{decode, encode};
//!
//! let mut list = List::integers();
//! for (i, n) in [1, 2, 3].into_iter().enumerate() {
//!     list.add(i, n).unwrap();
//! }
//! let text = encode(&list);
//! assert_eq!(text, "1\n1\n2\n3\n");
//! assert_eq!(decode(&text).unwrap(), list);
//! ```

use crate::core::error::ListError;
use crate::core::list::List;
use crate::core::types::Kind;

/// Render a list in the persisted format.
pub fn encode(list: &List) -> String {
    let mut out = format!("{}\n", list.kind().tag());
    for element in list {
        out.push_str(&element.to_string());
        out.push('\n');
    }
    out
}

/// Parse the persisted format back into a list.
///
/// # Errors
///
/// - [`ListError::MalformedInput`] if the kind tag is missing or invalid,
///   or an integer line does not parse
/// - [`ListError::InvalidType`] if the tag names the unspecified kind
/// - Any error [`List::add`] reports for the decoded elements
pub fn decode(text: &str) -> Result<List, ListError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or_else(|| ListError::MalformedInput {
        line: Some(1),
        message: "missing kind tag".to_string(),
    })?;
    let kind = parse_kind(header)?;

    let mut list = List::with_kind(kind);
    for (offset, line) in lines.enumerate() {
        let element = kind.parse_element(line).map_err(|e| e.at_line(offset + 2))?;
        list.add(list.len(), element)?;
    }
    Ok(list)
}

fn parse_kind(header: &str) -> Result<Kind, ListError> {
    let header = header.trim();
    let tag: i64 = header.parse().map_err(|_| ListError::MalformedInput {
        line: Some(1),
        message: format!("kind tag '{}' is not an integer", header),
    })?;

    match Kind::from_tag(tag) {
        Some(Kind::Unspecified) => Err(ListError::InvalidType {
            expected: "integer or text",
            found: Kind::Unspecified,
        }),
        Some(kind) => Ok(kind),
        None => Err(ListError::MalformedInput {
            line: Some(1),
            message: format!("unknown kind tag {}", tag),
        }),
    }
}
