//! engine
//!
//! Run orchestration: Load config → Parse all templates → Generate.
//!
//! # Fail Closed
//!
//! Every template is parsed and expanded before any candidate is produced.
//! One malformed template anywhere in the batch aborts the run with no
//! output.
//!
//! # Modules
//!
//! - [`driver`] - Candidate stream over every arrangement, and counting

pub mod driver;

pub use driver::{generate, tally, Candidates, Tally};

use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::{Config, Overrides, Settings};
use crate::core::template::{Template, TemplateListError};
use crate::ui::output::{self, Verbosity};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit config file path.
    pub config: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity for this run.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Errors from engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A template argument failed to parse.
    #[error(transparent)]
    Template(#[from] TemplateListError),
}

/// Load config and apply CLI overrides.
pub fn load_settings(ctx: &Context, overrides: &Overrides) -> anyhow::Result<Settings> {
    let verbosity = ctx.verbosity();
    let loaded = Config::load(ctx.config.as_deref())?;

    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    match loaded.config.path() {
        Some(path) => output::debug(format!("config: {}", path.display()), verbosity),
        None => output::debug("config: defaults", verbosity),
    }

    let settings = loaded.config.resolve(overrides)?;
    output::debug(
        format!(
            "delimiters: {}, words per candidate: {}..{}",
            settings.delimiters,
            settings.bounds.min,
            settings
                .bounds
                .max
                .map_or_else(|| "all".to_string(), |m| m.to_string())
        ),
        verbosity,
    );
    Ok(settings)
}

/// Parse and expand every template argument.
///
/// # Errors
///
/// Returns `EngineError::Template` for the first malformed template.
pub fn prepare(
    raws: &[String],
    settings: &Settings,
    verbosity: Verbosity,
) -> Result<Vec<Template>, EngineError> {
    let templates = Template::parse_all(raws.iter().cloned(), settings.delimiters)?;

    for (i, template) in templates.iter().enumerate() {
        output::debug(
            format!(
                "template {} '{}': {} slots, {} concrete strings",
                i + 1,
                template,
                template.slots().len(),
                template.concrete().len()
            ),
            verbosity,
        );
        if template.is_barren() {
            output::warn(
                format!(
                    "template {} '{}' has an empty group and yields no candidates",
                    i + 1,
                    template
                ),
                verbosity,
            );
        }
    }

    Ok(templates)
}
