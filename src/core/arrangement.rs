//! core::arrangement
//!
//! Enumeration of every ordered, non-repeating selection of templates.
//!
//! # Order
//!
//! Arrangements are the nodes of a tree visited in pre-order. The root is
//! the empty selection (never yielded); the children of a node extend it by
//! one unused index, tried in ascending index order. For `[A, B, C]`:
//!
//! ```text
//! A, AB, ABC, AC, ACB, B, BA, BAC, BC, BCA, C, CA, CAB, CB, CBA
//! ```
//!
//! Every arrangement starting with index `i` comes out before any starting
//! with `i + 1`.
//!
//! # Bounds
//!
//! [`ArrangementBounds`] restricts which lengths are yielded. The traversal
//! never goes deeper than the maximum, and shorter nodes are walked but
//! not yielded, so filtering keeps the relative order above.
//!
//! # Representation
//!
//! The walk is iterative: one path of indices plus a used mask. Nothing is
//! copied per step except the yielded path itself.

/// Inclusive range of arrangement lengths to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrangementBounds {
    /// Shortest arrangement yielded.
    pub min: usize,
    /// Longest arrangement yielded; `None` means every template.
    pub max: Option<usize>,
}

impl Default for ArrangementBounds {
    fn default() -> Self {
        Self { min: 1, max: None }
    }
}

impl ArrangementBounds {
    /// Effective `(min, max)` for `n` templates.
    ///
    /// The minimum is at least 1 and the maximum at most `n`. The result may
    /// be an empty range (`min > max`).
    pub fn resolve(&self, n: usize) -> (usize, usize) {
        let min = self.min.max(1);
        let max = self.max.map_or(n, |m| m.min(n));
        (min, max)
    }
}

/// Iterator over arrangements, each given as indices into the template list.
#[derive(Debug, Clone)]
pub struct Arrangements {
    n: usize,
    min: usize,
    max: usize,
    path: Vec<usize>,
    used: Vec<bool>,
    done: bool,
}

impl Arrangements {
    /// Every arrangement of `n` items, lengths 1 through `n`.
    pub fn new(n: usize) -> Self {
        Self::with_bounds(n, ArrangementBounds::default())
    }

    /// Arrangements of `n` items with lengths inside `bounds`.
    pub fn with_bounds(n: usize, bounds: ArrangementBounds) -> Self {
        let (min, max) = bounds.resolve(n);
        Self {
            n,
            min,
            max,
            path: Vec::with_capacity(max),
            used: vec![false; n],
            done: min > max,
        }
    }

    fn next_unused(&self, from: usize) -> Option<usize> {
        (from..self.n).find(|&j| !self.used[j])
    }

    fn push(&mut self, index: usize) {
        self.used[index] = true;
        self.path.push(index);
    }

    /// Move to the pre-order successor. Returns false when the walk is over.
    fn step(&mut self) -> bool {
        if self.path.len() < self.max {
            if let Some(j) = self.next_unused(0) {
                self.push(j);
                return true;
            }
        }

        while let Some(last) = self.path.pop() {
            self.used[last] = false;
            if let Some(j) = self.next_unused(last + 1) {
                self.push(j);
                return true;
            }
        }

        false
    }
}

impl Iterator for Arrangements {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if !self.step() {
                self.done = true;
                break;
            }
            if self.path.len() >= self.min {
                return Some(self.path.clone());
            }
        }
        None
    }
}

/// Number of arrangements of `n` items within `bounds`.
///
/// This is the sum over each allowed length `k` of `n! / (n - k)!`.
/// Returns `None` on `u128` overflow.
///
/// # Example
///
/// ```
/// use guesswork::core::arrangement::{arrangement_count, ArrangementBounds};
///
/// // 3 + 6 + 6
/// assert_eq!(arrangement_count(3, ArrangementBounds::default()), Some(15));
/// ```
pub fn arrangement_count(n: usize, bounds: ArrangementBounds) -> Option<u128> {
    let (min, max) = bounds.resolve(n);
    let mut total: u128 = 0;
    let mut falling: u128 = 1;
    for k in 1..=max {
        falling = falling.checked_mul((n - k + 1) as u128)?;
        if k >= min {
            total = total.checked_add(falling)?;
        }
    }
    Some(total)
}
