//! generate command - Write every candidate, one per line

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::cli::args::ExpansionArgs;
use crate::engine::{self, Candidates, Context};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Generate candidates to stdout or to `output_path`.
///
/// Nothing is written (and no output file is created) unless every template
/// parses. A reader closing stdout early ends the run successfully.
pub fn generate(ctx: &Context, args: &ExpansionArgs, output_path: Option<&Path>) -> Result<()> {
    let verbosity = ctx.verbosity();
    let settings = engine::load_settings(ctx, &args.overrides())?;
    let templates = engine::prepare(&args.templates, &settings, verbosity)?;
    let candidates = Candidates::with_bounds(&templates, settings.bounds);

    let result = match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
            output::write_lines(BufWriter::new(file), candidates)
        }
        None => output::write_lines(BufWriter::new(io::stdout().lock()), candidates),
    };

    match result {
        Ok(written) => {
            output::debug(format!("wrote {} candidates", written), verbosity);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            output::debug("output closed by reader, stopping", verbosity);
            Ok(())
        }
        Err(e) => Err(e).context("Failed to write candidates"),
    }
}
