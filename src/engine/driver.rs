//! engine::driver
//!
//! Flattens every arrangement's candidates into one stream.
//!
//! # Order
//!
//! Candidates come out grouped by arrangement, in arrangement enumeration
//! order, and within an arrangement in combination order. The stream is
//! lazy: only the current arrangement's odometer is held in memory.
//!
//! # Example
//!
//! ```
//! use guesswork::core::template::Template;
//! use guesswork::core::types::Delimiters;
//! use guesswork::engine::driver::generate;
//!
//! let templates = Template::parse_all(["ab", "[xy]"], Delimiters::default()).unwrap();
//! assert_eq!(
//!     generate(&templates),
//!     vec!["ab", "abx", "aby", "x", "y", "xab", "yab"]
//! );
//! ```

use crate::core::arrangement::{arrangement_count, ArrangementBounds, Arrangements};
use crate::core::combine::{candidate_count, Combinations};
use crate::core::template::Template;

/// Lazy stream of every candidate for a template list.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    templates: &'a [Template],
    arrangements: Arrangements,
    current: Option<Combinations<'a>>,
}

impl<'a> Candidates<'a> {
    /// Every candidate, all arrangement lengths.
    pub fn new(templates: &'a [Template]) -> Self {
        Self::with_bounds(templates, ArrangementBounds::default())
    }

    /// Candidates from arrangements whose length lies inside `bounds`.
    pub fn with_bounds(templates: &'a [Template], bounds: ArrangementBounds) -> Self {
        Self {
            templates,
            arrangements: Arrangements::with_bounds(templates.len(), bounds),
            current: None,
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(candidate) = self.current.as_mut().and_then(Iterator::next) {
                return Some(candidate);
            }
            let arrangement = self.arrangements.next()?;
            let templates = self.templates;
            let selected = arrangement.iter().map(|&i| &templates[i]).collect();
            self.current = Some(Combinations::new(selected));
        }
    }
}

/// Every candidate, materialized.
pub fn generate(templates: &[Template]) -> Vec<String> {
    Candidates::new(templates).collect()
}

/// Sizes of a run, computed without generating anything.
///
/// A `None` count does not fit in a `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub arrangements: Option<u128>,
    pub candidates: Option<u128>,
}

/// Count arrangements and candidates for a template list.
pub fn tally(templates: &[Template], bounds: ArrangementBounds) -> Tally {
    let sizes: Vec<u128> = templates
        .iter()
        .map(|t| t.concrete().len() as u128)
        .collect();
    Tally {
        arrangements: arrangement_count(templates.len(), bounds),
        candidates: candidate_count(&sizes, bounds),
    }
}
