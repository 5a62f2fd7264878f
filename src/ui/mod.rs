//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing and diagnostics
//!
//! # Design
//!
//! Library diagnostics (such as the overwrite notice from the persistence
//! layer) and CLI output both go through this module so `--quiet` and
//! `--debug` apply uniformly.

pub mod output;
