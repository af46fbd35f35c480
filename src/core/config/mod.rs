//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (passed in as [`Overrides`])
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. An explicit path (`--config`), which must exist
//! 2. `$GUESSWORK_CONFIG` if set
//! 3. `<config dir>/guesswork/config.toml` (e.g. `~/.config/guesswork/config.toml`)
//!
//! Missing implicit files are not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use guesswork::core::config::{Config, Overrides};
//!
//! let result = Config::load(None).unwrap();
//! let settings = result.config.resolve(&Overrides::default()).unwrap();
//! println!("Delimiters: {}", settings.delimiters);
//! ```

pub mod schema;

pub use schema::{ArrangementsConfig, FileConfig, SyntaxConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::arrangement::ArrangementBounds;
use crate::core::types::Delimiters;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "GUESSWORK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config file not found: '{0}'")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Values supplied on the command line. `None` defers to the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub opener: Option<char>,
    pub closer: Option<char>,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
}

/// Fully resolved settings for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Group delimiters for parsing
    pub delimiters: Delimiters,
    /// Which arrangement lengths to generate
    pub bounds: ArrangementBounds,
}

/// Loaded configuration file (or defaults).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: FileConfig,
    /// Path the file was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration, preferring `explicit` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit path does not exist, or if a config
    /// file exists but cannot be read, parsed, or validated.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => Self::locate(&mut warnings),
        };

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Config::default(),
        };

        Ok(ConfigLoadResult { config, warnings })
    }

    /// Find an implicit config file.
    fn locate(warnings: &mut Vec<ConfigWarning>) -> Option<PathBuf> {
        // 1. Check $GUESSWORK_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            warnings.push(ConfigWarning {
                message: format!("${} points to a missing file, ignoring it", CONFIG_ENV),
                path,
            });
        }

        // 2. Check <config dir>/guesswork/config.toml
        let path = dirs::config_dir()?.join("guesswork/config.toml");
        path.exists().then_some(path)
    }

    /// Read, parse, and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Path the configuration was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Apply CLI overrides on top of this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the combined values are invalid,
    /// e.g. an override makes the opener equal the configured closer.
    pub fn resolve(&self, overrides: &Overrides) -> Result<Settings, ConfigError> {
        let syntax = self.file.syntax.clone().unwrap_or_default();
        let arrangements = self.file.arrangements.clone().unwrap_or_default();

        let opener = overrides
            .opener
            .or(syntax.opener)
            .unwrap_or(Delimiters::DEFAULT_OPENER);
        let closer = overrides
            .closer
            .or(syntax.closer)
            .unwrap_or(Delimiters::DEFAULT_CLOSER);
        let delimiters =
            Delimiters::new(opener, closer).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let min = overrides.min_words.or(arrangements.min_words);
        let max = overrides.max_words.or(arrangements.max_words);
        schema::validate_word_bounds(min, max)?;

        Ok(Settings {
            delimiters,
            bounds: ArrangementBounds {
                min: min.unwrap_or(1),
                max,
            },
        })
    }
}
