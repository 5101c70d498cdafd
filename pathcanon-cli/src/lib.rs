//! Library exports for pathcanon-cli.
//!
//! This module exports the CLI structure for use by integration tests
//! and documentation tooling that introspects the command tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for command tree introspection
pub use cli::Cli;
