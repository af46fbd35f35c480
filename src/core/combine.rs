//! core::combine
//!
//! Candidate construction for a single arrangement.
//!
//! The candidates of an arrangement are the cartesian product of its
//! templates' concrete strings, concatenated in arrangement order. The first
//! template's choice varies slowest, matching slot expansion.

use super::arrangement::ArrangementBounds;
use super::product::Odometer;
use super::template::Template;

/// Iterator over the candidates of one arrangement.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    templates: Vec<&'a Template>,
    odometer: Odometer,
}

impl<'a> Combinations<'a> {
    /// Candidates for the given arrangement of templates.
    pub fn new(templates: Vec<&'a Template>) -> Self {
        let radices = templates.iter().map(|t| t.concrete().len()).collect();
        Self {
            templates,
            odometer: Odometer::new(radices),
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let digits = self.odometer.current()?;
        let len = self
            .templates
            .iter()
            .zip(digits)
            .map(|(t, &d)| t.concrete()[d].len())
            .sum();
        let mut candidate = String::with_capacity(len);
        for (t, &d) in self.templates.iter().zip(digits) {
            candidate.push_str(&t.concrete()[d]);
        }
        self.odometer.advance();
        Some(candidate)
    }
}

/// Every candidate of one arrangement, materialized.
///
/// # Example
///
/// ```
/// use guesswork::core::combine::combine;
/// use guesswork::core::template::Template;
/// use guesswork::core::types::Delimiters;
///
/// let hi = Template::new("h[i1]", Delimiters::default()).unwrap();
/// let you = Template::new("y[o0]u", Delimiters::default()).unwrap();
/// assert_eq!(
///     combine(&[&hi, &you]),
///     vec!["hiyou", "hiy0u", "h1you", "h1y0u"]
/// );
/// ```
pub fn combine(arrangement: &[&Template]) -> Vec<String> {
    Combinations::new(arrangement.to_vec()).collect()
}

/// Total number of candidates over every arrangement within `bounds`.
///
/// `sizes` holds each template's concrete-string count. For each allowed
/// length `k` the arrangements of that length contribute `k!` times the
/// `k`-th elementary symmetric polynomial of `sizes`. Returns `None` on
/// `u128` overflow.
pub fn candidate_count(sizes: &[u128], bounds: ArrangementBounds) -> Option<u128> {
    let (min, max) = bounds.resolve(sizes.len());
    if min > max {
        return Some(0);
    }

    // elementary[k] = sum of products over every k-subset of sizes
    let mut elementary = vec![0u128; max + 1];
    elementary[0] = 1;
    for &size in sizes {
        for k in (1..=max).rev() {
            let term = elementary[k - 1].checked_mul(size)?;
            elementary[k] = elementary[k].checked_add(term)?;
        }
    }

    let mut total: u128 = 0;
    let mut factorial: u128 = 1;
    for (k, &e) in elementary.iter().enumerate().skip(1) {
        factorial = factorial.checked_mul(k as u128)?;
        if k >= min {
            total = total.checked_add(e.checked_mul(factorial)?)?;
        }
    }
    Some(total)
}
