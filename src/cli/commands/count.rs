//! count command - Size a dictionary without generating it

use crate::cli::args::ExpansionArgs;
use crate::engine::{self, Context};
use crate::ui::output::format_count;
use anyhow::Result;

/// Print the arrangement and candidate counts for the given templates.
pub fn count(ctx: &Context, args: &ExpansionArgs) -> Result<()> {
    let settings = engine::load_settings(ctx, &args.overrides())?;
    let templates = engine::prepare(&args.templates, &settings, ctx.verbosity())?;
    let tally = engine::tally(&templates, settings.bounds);

    println!("arrangements: {}", format_count(tally.arrangements));
    println!("candidates: {}", format_count(tally.candidates));

    Ok(())
}
