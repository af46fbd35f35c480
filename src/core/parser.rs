//! core::parser
//!
//! Template parsing into slot sequences.
//!
//! # Syntax
//!
//! A template is scanned left to right. A plain character becomes a
//! single-alternative slot. A group, written `[abc]` with the default
//! delimiters, becomes one slot whose alternatives are the characters
//! strictly between the opener and closer.
//!
//! Groups cannot nest, and every opener needs a closer later in the
//! template. The delimiters themselves are never literal characters.
//!
//! # Example
//!
//! ```
//! use guesswork::core::parser::parse;
//! use guesswork::core::types::Delimiters;
//!
//! let slots = parse("H[iI1]", Delimiters::default()).unwrap();
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots.slots()[1].alternatives(), &['i', 'I', '1']);
//! ```

use thiserror::Error;

use super::types::{Delimiters, Slot, SlotSequence};

/// A malformed template.
///
/// `position` is the zero-based character index of the offending delimiter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("malformed template '{template}': group opened at position {position} is never closed")]
    UnclosedGroup { template: String, position: usize },

    #[error("malformed template '{template}': closer at position {position} has no matching opener")]
    UnexpectedCloser { template: String, position: usize },

    #[error("malformed template '{template}': nested group opened at position {position}")]
    NestedGroup { template: String, position: usize },
}

impl TemplateError {
    /// The template that failed to parse.
    pub fn template(&self) -> &str {
        match self {
            TemplateError::UnclosedGroup { template, .. }
            | TemplateError::UnexpectedCloser { template, .. }
            | TemplateError::NestedGroup { template, .. } => template,
        }
    }

    /// Character index of the offending delimiter.
    pub fn position(&self) -> usize {
        match self {
            TemplateError::UnclosedGroup { position, .. }
            | TemplateError::UnexpectedCloser { position, .. }
            | TemplateError::NestedGroup { position, .. } => *position,
        }
    }
}

/// An open group: where it started and what it holds so far.
struct OpenGroup {
    position: usize,
    alternatives: Vec<char>,
}

/// Parse a raw template into its slot sequence.
///
/// # Errors
///
/// Returns a [`TemplateError`] for an unclosed group, a stray closer, or a
/// nested opener. Nothing is returned for a partially valid template.
pub fn parse(raw: &str, delimiters: Delimiters) -> Result<SlotSequence, TemplateError> {
    let mut slots = Vec::new();
    let mut group: Option<OpenGroup> = None;

    for (position, c) in raw.chars().enumerate() {
        if c == delimiters.opener() {
            if group.is_some() {
                return Err(TemplateError::NestedGroup {
                    template: raw.to_string(),
                    position,
                });
            }
            group = Some(OpenGroup {
                position,
                alternatives: Vec::new(),
            });
        } else if c == delimiters.closer() {
            match group.take() {
                Some(open) => slots.push(Slot::new(open.alternatives)),
                None => {
                    return Err(TemplateError::UnexpectedCloser {
                        template: raw.to_string(),
                        position,
                    })
                }
            }
        } else {
            match group.as_mut() {
                Some(open) => open.alternatives.push(c),
                None => slots.push(Slot::literal(c)),
            }
        }
    }

    if let Some(open) = group {
        return Err(TemplateError::UnclosedGroup {
            template: raw.to_string(),
            position: open.position,
        });
    }

    Ok(SlotSequence::new(slots))
}
