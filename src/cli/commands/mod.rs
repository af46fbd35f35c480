//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves settings through the engine
//! 2. Prepares every template (failing closed on malformed input)
//! 3. Writes its result

mod completion;
mod count;
mod generate;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use count::count;
pub use generate::generate;

use crate::cli::args::Command;
use crate::engine::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Generate { expansion, output } => {
            generate::generate(ctx, &expansion, output.as_deref())
        }
        Command::Count { expansion } => count::count(ctx, &expansion),
        Command::Completion { shell } => completion::completion(shell),
    }
}
