//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Diagnostics and candidate writing
//!
//! # Design
//!
//! Candidates are the only thing written to stdout (or the output file).
//! Diagnostics go to stderr and respect the quiet and debug flags.

pub mod output;
