//! core
//!
//! The list container and everything built on it.
//!
//! # Modules
//!
//! - [`types`] - Element kinds, elements and size bounds
//! - [`error`] - Error types shared by every operation
//! - [`list`] - The bounded, kind-tagged [`List`](list::List)
//! - [`ordering`] - Sort, sortedness, split and merge
//! - [`stats`] - Kind-dependent summary statistics
//! - [`adapters`] - Stack and queue views sharing a list
//! - [`persist`] - Line-oriented file format
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - A list's kind is fixed at construction and checked on every insert
//! - Behaviour that depends on kind is selected by matching on [`Kind`](types::Kind)
//! - Failed operations leave the list unchanged

pub mod adapters;
pub mod config;
pub mod error;
pub mod list;
pub mod ordering;
pub mod persist;
pub mod stats;
pub mod types;
