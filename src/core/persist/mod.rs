//! core::persist
//!
//! Line-oriented file persistence for lists.
//!
//! # Modules
//!
//! - [`codec`] - Pure text encoding and decoding
//! - [`store`] - Whole-file reads and writes at a path
//!
//! # Format
//!
//! ```text
//! <kind tag>
//! <element 1>
//! <element 2>
//! ...
//! ```
//!
//! The kind tag is `1` for integer lists and `2` for text lists. Tag `0`
//! (unspecified) is written but cannot be read back.

pub mod codec;
pub mod store;

pub use codec::{decode, encode};
pub use store::{default_path, ListFile, WriteOutcome, DEFAULT_FILE_NAME};
