//! core::expand
//!
//! Slot expansion: the cartesian product of a slot sequence.
//!
//! The first slot varies slowest. An empty sequence expands to one empty
//! string; a sequence holding an empty slot expands to nothing.

use super::product::Odometer;
use super::types::SlotSequence;

/// Expand a slot sequence into every concrete string it describes.
///
/// # Example
///
/// ```
/// use guesswork::core::expand::expand;
/// use guesswork::core::parser::parse;
/// use guesswork::core::types::Delimiters;
///
/// let slots = parse("H[iI1]", Delimiters::default()).unwrap();
/// assert_eq!(expand(&slots), vec!["Hi", "HI", "H1"]);
/// ```
pub fn expand(slots: &SlotSequence) -> Vec<String> {
    let radices = slots.slots().iter().map(|s| s.len()).collect();
    let mut odometer = Odometer::new(radices);
    let mut out = Vec::new();

    while let Some(digits) = odometer.current() {
        let s: String = slots
            .slots()
            .iter()
            .zip(digits)
            .map(|(slot, &d)| slot.alternatives()[d])
            .collect();
        out.push(s);
        odometer.advance();
    }

    out
}
