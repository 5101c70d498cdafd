//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CanonCommand, CompletionsCommand, ExplainCommand, SelfcheckCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for canonicalizing POSIX and EFI path strings.
#[derive(Parser)]
#[command(name = "pathcanon")]
#[command(version, about = "Canonicalize POSIX and EFI path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Canonicalize paths from arguments or stdin
    Canon(CanonCommand),

    /// Show the component-by-component resolution of a path
    Explain(ExplainCommand),

    /// Run the built-in acceptance checks
    Selfcheck(SelfcheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
