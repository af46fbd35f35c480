//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Example
//!
//! ```toml
//! [syntax]
//! opener = "<"
//! closer = ">"
//!
//! [arrangements]
//! min_words = 1
//! max_words = 3
//! ```
//!
//! # Validation
//!
//! Values are validated after parsing: delimiters must differ and word
//! bounds must describe a non-empty range starting at 1 or more.

use serde::Deserialize;

use super::ConfigError;

/// Contents of a config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Template syntax settings
    pub syntax: Option<SyntaxConfig>,

    /// Arrangement length limits
    pub arrangements: Option<ArrangementsConfig>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(syntax) = &self.syntax {
            syntax.validate()?;
        }
        if let Some(arrangements) = &self.arrangements {
            arrangements.validate()?;
        }
        Ok(())
    }
}

/// Group delimiter settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SyntaxConfig {
    /// Character that opens an alternative group (default `[`)
    pub opener: Option<char>,

    /// Character that closes an alternative group (default `]`)
    pub closer: Option<char>,
}

impl SyntaxConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(opener), Some(closer)) = (self.opener, self.closer) {
            if opener == closer {
                return Err(ConfigError::InvalidValue(format!(
                    "syntax.opener and syntax.closer must differ (both are '{}')",
                    opener
                )));
            }
        }
        Ok(())
    }
}

/// Arrangement length limits.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ArrangementsConfig {
    /// Fewest templates concatenated into one candidate
    pub min_words: Option<usize>,

    /// Most templates concatenated into one candidate
    pub max_words: Option<usize>,
}

impl ArrangementsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_word_bounds(self.min_words, self.max_words)
    }
}

/// Check a pair of word bounds, wherever they came from.
pub(crate) fn validate_word_bounds(
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), ConfigError> {
    if min == Some(0) {
        return Err(ConfigError::InvalidValue(
            "min_words must be at least 1".into(),
        ));
    }
    if max == Some(0) {
        return Err(ConfigError::InvalidValue(
            "max_words must be at least 1".into(),
        ));
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ConfigError::InvalidValue(format!(
                "min_words ({}) is greater than max_words ({})",
                min, max
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_file() {
        let config: FileConfig = toml::from_str(
            r#"
            [syntax]
            opener = "<"
            closer = ">"

            [arrangements]
            min_words = 2
            max_words = 3
            "#,
        )
        .unwrap();

        let syntax = config.syntax.as_ref().unwrap();
        assert_eq!(syntax.opener, Some('<'));
        assert_eq!(syntax.closer, Some('>'));
        let arrangements = config.arrangements.as_ref().unwrap();
        assert_eq!(arrangements.min_words, Some(2));
        assert_eq!(arrangements.max_words, Some(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_empty_file() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[syntax]\nseparator = \"|\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn multi_character_delimiter_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[syntax]\nopener = \"<<\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn identical_delimiters_invalid() {
        let config = FileConfig {
            syntax: Some(SyntaxConfig {
                opener: Some('|'),
                closer: Some('|'),
            }),
            arrangements: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn word_bounds_validation() {
        assert!(validate_word_bounds(None, None).is_ok());
        assert!(validate_word_bounds(Some(1), Some(1)).is_ok());
        assert!(validate_word_bounds(Some(0), None).is_err());
        assert!(validate_word_bounds(None, Some(0)).is_err());
        assert!(validate_word_bounds(Some(3), Some(2)).is_err());
    }
}
