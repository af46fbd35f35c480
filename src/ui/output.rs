//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Diagnostics respect the quiet flag and always go to stderr, so stdout
//! carries nothing but candidates and can be piped straight into a
//! cracking tool.

use std::fmt::Display;
use std::io::{self, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Write each line followed by a newline, returning how many were written.
///
/// The writer is flushed before returning.
pub fn write_lines<W, I, S>(mut out: W, lines: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut written = 0u64;
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Format a count that may have overflowed.
pub fn format_count(count: Option<u128>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => format!("more than {}", u128::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
    }

    #[test]
    fn write_lines_one_per_line() {
        let mut buf = Vec::new();
        let n = write_lines(&mut buf, ["ab", "", "x"]).unwrap();
        assert_eq!(n, 3);
        assert_eq!(String::from_utf8(buf).unwrap(), "ab\n\nx\n");
    }

    #[test]
    fn write_lines_nothing() {
        let mut buf = Vec::new();
        assert_eq!(write_lines(&mut buf, Vec::<String>::new()).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn format_count_overflow() {
        assert_eq!(format_count(Some(42)), "42");
        assert!(format_count(None).starts_with("more than "));
    }
}
