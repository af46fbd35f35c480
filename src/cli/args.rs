//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Suppress warnings

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Overrides;

/// Guesswork - expand word templates into password-guess dictionaries
#[derive(Parser, Debug)]
#[command(name = "guesswork")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read settings from this config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Templates plus the settings that shape their expansion.
#[derive(Args, Debug, Clone, Default)]
pub struct ExpansionArgs {
    /// Word templates; a group such as `[iI1]` stands for any one of its characters
    #[arg(value_name = "TEMPLATE")]
    pub templates: Vec<String>,

    /// Character that opens an alternative group
    #[arg(long, value_name = "CHAR")]
    pub opener: Option<char>,

    /// Character that closes an alternative group
    #[arg(long, value_name = "CHAR")]
    pub closer: Option<char>,

    /// Fewest templates joined into one candidate
    #[arg(long, value_name = "N")]
    pub min_words: Option<usize>,

    /// Most templates joined into one candidate
    #[arg(long, value_name = "N")]
    pub max_words: Option<usize>,
}

impl ExpansionArgs {
    /// The settings given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            opener: self.opener,
            closer: self.closer,
            min_words: self.min_words,
            max_words: self.max_words,
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write every candidate, one per line
    #[command(
        name = "generate",
        visible_alias = "gen",
        long_about = "Write every candidate, one per line.\n\n\
            Each template expands to every string formed by picking one character from \
            each group. Candidates are then built from every ordered selection of \
            templates (each used at most once), concatenating one expansion of each.\n\n\
            All templates are checked before anything is written: a malformed template \
            aborts the run with no output.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Leetspeak variants of a name
    guesswork generate 'H[iI1]'

    # Name and year, in both orders and on their own
    guesswork generate '[aA]lice' '19[89][0-9]'

    # Only pairs, written to a file
    guesswork generate --min-words 2 --max-words 2 -o words.txt alice 1990 '!'

    # Templates starting with a hyphen go after --
    guesswork generate -- -x- '[ab]'

READING THE OUTPUT:
    guesswork generate ab '[xy]'
    ab      <- ab alone
    abx     <- ab then [xy]
    aby
    x       <- [xy] alone
    y
    xab     <- [xy] then ab
    yab"
    )]
    Generate {
        #[command(flatten)]
        expansion: ExpansionArgs,

        /// Write candidates to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Count arrangements and candidates without generating them
    #[command(
        name = "count",
        long_about = "Count arrangements and candidates without generating them.\n\n\
            Useful for sizing a dictionary before writing it: output grows \
            factorially with the number of templates.",
        after_help = "\
WORKFLOW EXAMPLES:
    # How big would this dictionary be?
    guesswork count '[aA]lice' '19[89][0-9]' '[!?]'"
    )]
    Count {
        #[command(flatten)]
        expansion: ExpansionArgs,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for guesswork commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    guesswork completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    guesswork completion zsh >> ~/.zshrc

    # Fish
    guesswork completion fish > ~/.config/fish/completions/guesswork.fish

    # PowerShell
    guesswork completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}
