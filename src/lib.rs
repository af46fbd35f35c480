//! Guesswork - expand word templates into password-guess dictionaries
//!
//! A template such as `H[iI1]` stands for every string formed by picking one
//! character from each bracketed group (`Hi`, `HI`, `H1`). Given several
//! templates, guesswork emits every ordered concatenation of every non-empty
//! subset of them, each template contributing one of its expansions.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Loads settings, prepares templates, drives generation
//! - [`core`] - Domain types, parser, expander, enumerator, combiner, config
//! - [`ui`] - Diagnostics and candidate output
//!
//! # Correctness Invariants
//!
//! 1. Every template is validated before any candidate is produced
//! 2. Output order is a deterministic function of the input
//! 3. Every concrete string of a template has one character per slot
//! 4. No template appears twice within one candidate
//!
//! # Example
//!
//! ```
//! use guesswork::core::template::Template;
//! use guesswork::core::types::Delimiters;
//! use guesswork::engine::Candidates;
//!
//! let templates = Template::parse_all(["ab", "[xy]"], Delimiters::default()).unwrap();
//! let candidates: Vec<String> = Candidates::new(&templates).collect();
//! assert_eq!(candidates, ["ab", "abx", "aby", "x", "y", "xab", "yab"]);
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
