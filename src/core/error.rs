//! core::error
//!
//! Error types for list operations.
//!
//! # Design
//!
//! Every operation reports failure to its immediate caller; nothing is
//! retried. A returned error means the operation had no effect, with one
//! exception: [`MergeError`] can carry a truncated result alongside the
//! capacity error that produced it.
//!
//! # Example
//!
//! ```
//! use typedlist::core::error::ListError;
//! use typedlist::core::list::List;
//!
//! let mut list = List::integers();
//! let err = list.add(1, 5).unwrap_err();
//! assert!(matches!(err, ListError::IndexOutOfBounds { index: 1, len: 0 }));
//! assert_eq!(err.to_string(), "index out of bounds: 1 (length 0)");
//! ```

use std::path::PathBuf;

use thiserror::Error;

use super::list::List;
use super::stats::Statistic;
use super::types::Kind;

/// Errors from list operations.
#[derive(Debug, Error)]
pub enum ListError {
    /// Index outside the range valid for the operation.
    #[error("index out of bounds: {index} (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The list is already at its element bound.
    #[error("capacity exceeded: max={capacity}")]
    CapacityExceeded { capacity: usize },

    /// Element kind does not match the list kind, or the list kind does
    /// not support the operation.
    #[error("invalid argument type, expected {expected} (list kind: {found})")]
    InvalidType { expected: &'static str, found: Kind },

    /// Text element longer than the allowed maximum.
    #[error("length exceeded: {len} characters, max={max}")]
    LengthExceeded { len: usize, max: usize },

    /// Sort requested on a kind without an ordering relation.
    #[error("cannot perform sort on {kind} list")]
    Unsortable { kind: Kind },

    /// Statistic or sort requested on an empty list.
    #[error("empty")]
    EmptyCollection,

    /// Statistic undefined for the list kind.
    #[error("not supported: {statistic} on {kind} list")]
    NotSupported { statistic: Statistic, kind: Kind },

    /// Merge between lists of different kinds.
    #[error("incompatible list kinds: {left} and {right}")]
    IncompatibleType { left: Kind, right: Kind },

    /// Persisted content could not be interpreted.
    #[error("malformed input{}: {message}", line_suffix(.line))]
    MalformedInput { line: Option<usize>, message: String },

    /// Persistence path does not exist.
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Any other filesystem failure.
    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

impl ListError {
    /// Attach a 1-based line number to a `MalformedInput` error.
    ///
    /// Other variants pass through unchanged.
    pub fn at_line(self, n: usize) -> Self {
        match self {
            ListError::MalformedInput { message, .. } => ListError::MalformedInput {
                line: Some(n),
                message,
            },
            other => other,
        }
    }
}

/// Error from [`List::merge`].
///
/// Kind mismatches produce no result. Capacity overflow still produces a
/// result, truncated to the first [`CAPACITY`](super::types::CAPACITY)
/// elements, which is available through [`MergeError::partial`].
#[derive(Debug, Error)]
#[error("merge failed")]
pub struct MergeError {
    #[source]
    pub source: ListError,
    /// Truncated result, present only for capacity overflow.
    pub partial: Option<List>,
}

impl MergeError {
    pub(crate) fn rejected(source: ListError) -> Self {
        Self {
            source,
            partial: None,
        }
    }

    pub(crate) fn truncated(source: ListError, partial: List) -> Self {
        Self {
            source,
            partial: Some(partial),
        }
    }

    /// Take ownership of the truncated result, if any.
    pub fn into_partial(self) -> Option<List> {
        self.partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_mentions_line() {
        let err = ListError::MalformedInput {
            line: None,
            message: "bad".into(),
        }
        .at_line(3);
        assert_eq!(err.to_string(), "malformed input at line 3: bad");
    }

    #[test]
    fn merge_error_chain_names_cause_once() {
        let err = MergeError::rejected(ListError::CapacityExceeded { capacity: 20 });
        let chain = format!("{:#}", anyhow::Error::new(err).context("Failed to merge lists"));
        assert_eq!(
            chain,
            "Failed to merge lists: merge failed: capacity exceeded: max=20"
        );
    }

    #[test]
    fn at_line_leaves_other_variants() {
        let err = ListError::EmptyCollection.at_line(2);
        assert!(matches!(err, ListError::EmptyCollection));
    }

    #[test]
    fn merge_error_exposes_source() {
        use std::error::Error as _;

        let err = MergeError::rejected(ListError::IncompatibleType {
            left: Kind::Integer,
            right: Kind::Text,
        });
        assert!(err.source().is_some());
        assert!(err.to_string().contains("incompatible"));
        assert!(err.into_partial().is_none());
    }
}
