//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Slot`] - The alternative characters valid at one template position
//! - [`SlotSequence`] - The ordered slots of one template
//! - [`Delimiters`] - The opener/closer pair that marks an alternative group
//!
//! # Validation
//!
//! [`Delimiters`] enforces validity at construction time: the opener and
//! closer must differ, otherwise a group boundary would be ambiguous.
//!
//! # Examples
//!
//! ```
//! use guesswork::core::types::{Delimiters, Slot};
//!
//! let delims = Delimiters::new('<', '>').unwrap();
//! assert_eq!(delims.opener(), '<');
//!
//! assert!(Delimiters::new('|', '|').is_err());
//!
//! let slot = Slot::new(vec!['i', 'I', '1']);
//! assert_eq!(slot.len(), 3);
//! ```

use std::fmt;

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid delimiters: opener and closer are both '{0}'")]
    IdenticalDelimiters(char),
}

/// The set of alternative characters at one template position.
///
/// A slot built from a plain character holds exactly that character. A slot
/// built from a group holds every character between the delimiters, in
/// order, duplicates included. An empty group produces an empty slot, which
/// makes the whole template expand to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot(Vec<char>);

impl Slot {
    /// Create a slot from its alternatives.
    pub fn new(alternatives: Vec<char>) -> Self {
        Self(alternatives)
    }

    /// Create a single-alternative slot.
    pub fn literal(c: char) -> Self {
        Self(vec![c])
    }

    /// The alternatives, in the order they appeared in the template.
    pub fn alternatives(&self) -> &[char] {
        &self.0
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a slot parsed from an empty group.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The ordered slots of one template.
///
/// Every concrete string expanded from a sequence has exactly one character
/// per slot, so its length in characters equals [`SlotSequence::len`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SlotSequence(Vec<Slot>);

impl SlotSequence {
    /// Create a sequence from slots in positional order.
    pub fn new(slots: Vec<Slot>) -> Self {
        Self(slots)
    }

    /// The slots in positional order.
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the sequence of an empty template.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of concrete strings this sequence expands to.
    ///
    /// Returns `None` if the product does not fit in a `u128`.
    pub fn expansion_size(&self) -> Option<u128> {
        self.0
            .iter()
            .try_fold(1u128, |acc, slot| acc.checked_mul(slot.len() as u128))
    }
}

impl From<Vec<Slot>> for SlotSequence {
    fn from(slots: Vec<Slot>) -> Self {
        Self(slots)
    }
}

/// The opener/closer characters that delimit an alternative group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    opener: char,
    closer: char,
}

impl Delimiters {
    /// Default opener.
    pub const DEFAULT_OPENER: char = '[';
    /// Default closer.
    pub const DEFAULT_CLOSER: char = ']';

    /// Create a validated delimiter pair.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::IdenticalDelimiters` if `opener == closer`.
    pub fn new(opener: char, closer: char) -> Result<Self, TypeError> {
        if opener == closer {
            return Err(TypeError::IdenticalDelimiters(opener));
        }
        Ok(Self { opener, closer })
    }

    /// The character that opens a group.
    pub fn opener(&self) -> char {
        self.opener
    }

    /// The character that closes a group.
    pub fn closer(&self) -> char {
        self.closer
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            opener: Self::DEFAULT_OPENER,
            closer: Self::DEFAULT_CLOSER,
        }
    }
}

impl fmt::Display for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.opener, self.closer)
    }
}
