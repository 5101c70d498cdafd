//! Explain command implementation.
//!
//! This module implements the `explain` command, which prints the
//! intermediate stages of canonicalization for a single path: the
//! volume prefix split, the component table, the surviving components,
//! and the rebuilt canonical form.

use crate::error::CliError;
use crate::utils::{GlobalOptions, StyleArg};
use clap::Args;
use pathcanon::{
    canonicalize, component_table, rebuild_path, resolve_components, split_components,
    split_volume_prefix, PathStyle,
};

/// Show the component-by-component resolution of a path.
#[derive(Args)]
pub struct ExplainCommand {
    /// Path to explain
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Path style to apply
    #[arg(
        long,
        value_enum,
        default_value = "posix",
        env = "PATHCANON_STYLE",
        ignore_case = true
    )]
    pub style: StyleArg,
}

impl ExplainCommand {
    /// Execute the explain command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let style = PathStyle::from(self.style);
        let separator = style.separator();
        let path = &self.path;

        println!("input: {path:?}");
        println!("style: {style}");

        // EFI paths carry an opaque volume prefix that is split off
        // before any resolution happens
        let (prefix, remainder) = if style.supports_volume_prefix() {
            split_volume_prefix(path)
        } else {
            (None, path.as_str())
        };

        if let Some(prefix) = prefix {
            println!("volume prefix: {prefix:?}");
        }

        if remainder.is_empty() {
            // Nothing to resolve; the library decides whether that is a
            // fixpoint or a rejection
            return match canonicalize(path, style) {
                Ok(canonical) => {
                    println!("no components to resolve");
                    println!("canonical: {canonical:?}");
                    Ok(())
                }
                Err(e) => {
                    println!("error: {e}");
                    Err(e.into())
                }
            };
        }

        let absolute = remainder.starts_with(separator);
        println!("absolute: {absolute}");

        let components = split_components(remainder, separator);
        println!("components ({}):", components.len());
        print!("{}", component_table(&components));

        match resolve_components(&components, path) {
            Ok(survivors) => {
                println!("survivors ({}):", survivors.len());
                print!("{}", component_table(&survivors));

                let rebuilt = rebuild_path(&survivors, absolute, separator);
                let canonical = match prefix {
                    Some(prefix) => format!("{prefix}{rebuilt}"),
                    None => rebuilt,
                };
                println!("canonical: {canonical:?}");
                Ok(())
            }
            Err(e) => {
                println!("error: {e}");
                Err(e.into())
            }
        }
    }
}
