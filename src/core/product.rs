//! core::product
//!
//! Mixed-radix odometer used for every cartesian product in the crate.
//!
//! # Ordering
//!
//! The first digit varies slowest and the last digit fastest, so tuples come
//! out grouped by the first position's choice, then by the second's, and so
//! on. Both the slot expander and the arrangement combiner rely on this.
//!
//! # Edge Cases
//!
//! - Zero digits: exactly one (empty) tuple.
//! - Any radix of zero: no tuples at all.

/// Iterates every digit tuple of a mixed-radix number, in ascending order.
#[derive(Debug, Clone)]
pub struct Odometer {
    radices: Vec<usize>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl Odometer {
    /// Create an odometer over the given radices, positioned at all zeros.
    pub fn new(radices: Vec<usize>) -> Self {
        let exhausted = radices.iter().any(|&r| r == 0);
        let digits = vec![0; radices.len()];
        Self {
            radices,
            digits,
            exhausted,
        }
    }

    /// The current tuple, or `None` once every tuple has been visited.
    pub fn current(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.digits)
        }
    }

    /// Step to the next tuple.
    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        for pos in (0..self.digits.len()).rev() {
            self.digits[pos] += 1;
            if self.digits[pos] < self.radices[pos] {
                return;
            }
            self.digits[pos] = 0;
        }
        // Every digit rolled over (or there were none).
        self.exhausted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(mut odo: Odometer) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        while let Some(t) = odo.current() {
            out.push(t.to_vec());
            odo.advance();
        }
        out
    }

    #[test]
    fn last_digit_varies_fastest() {
        let tuples = collect(Odometer::new(vec![2, 3]));
        assert_eq!(
            tuples,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2]
            ]
        );
    }

    #[test]
    fn no_digits_yields_one_empty_tuple() {
        assert_eq!(collect(Odometer::new(vec![])), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn zero_radix_yields_nothing() {
        assert!(collect(Odometer::new(vec![3, 0, 2])).is_empty());
    }
}
