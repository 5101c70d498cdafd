//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands,
//! including the shared global options, the style argument type, and
//! stdin batch reading.

use crate::error::CliError;
use clap::ValueEnum;
use pathcanon::PathStyle;
use std::io::BufRead;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Path style argument accepted by commands.
///
/// This mirrors [`PathStyle`] so the library stays free of clap
/// dependencies while commands still get value-enum parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StyleArg {
    /// Slash-separated paths with no volume prefix
    Posix,
    /// Backslash-separated paths with an optional volume prefix
    Efi,
}

impl From<StyleArg> for PathStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Posix => PathStyle::Posix,
            StyleArg::Efi => PathStyle::Efi,
        }
    }
}

/// Read one path per line from standard input.
///
/// Line terminators are stripped and blank lines are skipped; pass an
/// empty string as an explicit argument instead to canonicalize it.
pub fn read_stdin_paths() -> Result<Vec<String>, CliError> {
    let stdin = std::io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        paths.push(line);
    }

    Ok(paths)
}
