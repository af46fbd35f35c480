//! core
//!
//! Core domain types and the combinatorial expansion engine.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Slot, SlotSequence, Delimiters
//! - [`parser`] - Template parsing into slot sequences
//! - [`product`] - Mixed-radix odometer shared by every cartesian product
//! - [`expand`] - Slot expansion into concrete strings
//! - [`template`] - A parsed template with its cached expansion
//! - [`arrangement`] - Ordered, non-repeating template selections
//! - [`combine`] - Candidate construction for one arrangement
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Templates are immutable once built
//! - Every enumeration order is deterministic and documented
//! - Malformed input is rejected before any expansion work

pub mod arrangement;
pub mod combine;
pub mod config;
pub mod expand;
pub mod parser;
pub mod product;
pub mod template;
pub mod types;
