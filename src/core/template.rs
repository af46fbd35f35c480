//! core::template
//!
//! A parsed template together with its cached expansion.
//!
//! # Lifecycle
//!
//! A [`Template`] is built once from a raw string. Parsing and expansion
//! happen eagerly in [`Template::new`]; the result is immutable afterwards,
//! so any number of arrangements can read it at the same time.

use thiserror::Error;

use super::expand::expand;
use super::parser::{parse, TemplateError};
use super::types::{Delimiters, SlotSequence};

/// A malformed template found while parsing a list of templates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid template argument {}", .index + 1)]
pub struct TemplateListError {
    /// Zero-based position of the failing template in the list.
    pub index: usize,
    #[source]
    pub source: TemplateError,
}

/// One input word pattern and every concrete string it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    slots: SlotSequence,
    concrete: Vec<String>,
}

impl Template {
    /// Parse and expand a raw template.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the template is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use guesswork::core::template::Template;
    /// use guesswork::core::types::Delimiters;
    ///
    /// let t = Template::new("y[o0]u", Delimiters::default()).unwrap();
    /// assert_eq!(t.concrete(), &["you", "y0u"]);
    /// assert_eq!(t.raw(), "y[o0]u");
    /// ```
    pub fn new(raw: impl Into<String>, delimiters: Delimiters) -> Result<Self, TemplateError> {
        let raw = raw.into();
        let slots = parse(&raw, delimiters)?;
        let concrete = expand(&slots);
        Ok(Self {
            raw,
            slots,
            concrete,
        })
    }

    /// Parse and expand every template, failing on the first malformed one.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateListError`] naming the failing template's index.
    pub fn parse_all<I, S>(
        raws: I,
        delimiters: Delimiters,
    ) -> Result<Vec<Self>, TemplateListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        raws.into_iter()
            .enumerate()
            .map(|(index, raw)| {
                Self::new(raw, delimiters).map_err(|source| TemplateListError { index, source })
            })
            .collect()
    }

    /// The template as written.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed slots.
    pub fn slots(&self) -> &SlotSequence {
        &self.slots
    }

    /// Every concrete string, first slot varying slowest.
    pub fn concrete(&self) -> &[String] {
        &self.concrete
    }

    /// True if this template yields no concrete strings (it holds an empty group).
    pub fn is_barren(&self) -> bool {
        self.concrete.is_empty()
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_is_cached_at_construction() {
        let t = Template::new("H[iI1]", Delimiters::default()).unwrap();
        assert_eq!(t.concrete(), &["Hi", "HI", "H1"]);
        assert_eq!(t.slots().len(), 2);
        assert!(!t.is_barren());
    }

    #[test]
    fn empty_group_makes_template_barren() {
        let t = Template::new("a[]b", Delimiters::default()).unwrap();
        assert!(t.is_barren());
    }

    #[test]
    fn display_is_raw_string() {
        let t = Template::new("[ab]c", Delimiters::default()).unwrap();
        assert_eq!(t.to_string(), "[ab]c");
    }

    #[test]
    fn parse_all_reports_failing_index() {
        let err =
            Template::parse_all(["ok", "fine[1]", "bro[ken"], Delimiters::default()).unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.source.template(), "bro[ken");
    }

    #[test]
    fn list_error_numbers_arguments_from_one() {
        let err = Template::parse_all(["x]"], Delimiters::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid template argument 1");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source, Some(err.source.to_string()));
    }

    #[test]
    fn parse_all_keeps_input_order() {
        let templates = Template::parse_all(["b", "a"], Delimiters::default()).unwrap();
        let raws: Vec<_> = templates.iter().map(Template::raw).collect();
        assert_eq!(raws, vec!["b", "a"]);
    }
}
