//! typedlist - bounded, kind-tagged lists
//!
//! A [`List`](core::list::List) holds up to twenty integers or up to twenty
//! short text values, fixed at construction. On top of it sit sorting,
//! splitting and merging, kind-aware statistics, stack and queue views that
//! share the list's storage, and a line-oriented file format.
//!
//! # Architecture
//!
//! - [`core`] - The container, its operations, persistence and configuration
//! - [`ui`] - Verbosity-aware output shared by library and CLI
//! - [`cli`] - The `tl` command-line interface
//!
//! # Example
//!
//! ```
//! use typedlist::core::list::List;
//!
//! let mut list = List::integers();
//! for (i, n) in [4, 8, 15, 16, 23, 42].into_iter().enumerate() {
//!     list.add(i, n).unwrap();
//! }
//!
//! assert_eq!(list.stats().max().unwrap(), 42);
//! assert_eq!(list.as_stack().pop().unwrap().as_integer(), Some(42));
//! assert_eq!(list.len(), 5);
//! ```

pub mod cli;
pub mod core;
pub mod ui;
