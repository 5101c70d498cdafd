//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `canon`: Canonicalize paths from arguments or stdin
//! - `explain`: Show the component-by-component resolution of a path
//! - `selfcheck`: Run the built-in acceptance checks
//! - `completions`: Generate shell completion scripts

pub mod canon;
pub mod completions;
pub mod explain;
pub mod selfcheck;

pub use canon::CanonCommand;
pub use completions::CompletionsCommand;
pub use explain::ExplainCommand;
pub use selfcheck::SelfcheckCommand;
