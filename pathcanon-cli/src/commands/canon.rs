//! Canon command implementation.
//!
//! This module implements the `canon` command, which canonicalizes one
//! or more paths and prints the results in various formats (plain,
//! JSON, CSV).

use crate::error::CliError;
use crate::utils::{read_stdin_paths, GlobalOptions, StyleArg};
use clap::{Args, ValueEnum};
use pathcanon::{CanonicalPath, Canonicalizer, PathStyle};
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 4] = ["input", "style", "canonical", "error"];

/// Canonicalize paths from arguments or stdin.
#[derive(Args)]
pub struct CanonCommand {
    /// Paths to canonicalize (one per stdin line when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Path style to apply
    #[arg(
        long,
        value_enum,
        default_value = "posix",
        env = "PATHCANON_STYLE",
        ignore_case = true
    )]
    pub style: StyleArg,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "plain",
        env = "PATHCANON_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Log component tables while resolving (shown with --verbose)
    #[arg(long)]
    pub trace: bool,
}

/// Output format for the canon command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One canonical path per line (errors go to stderr)
    Plain,
    /// JSON array with one object per input
    Json,
    /// CSV with one record per input
    Csv,
}

impl CanonCommand {
    /// Execute the canon command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let CanonCommand {
            paths,
            style,
            format,
            trace,
        } = self;

        // 1. Gather inputs: explicit arguments win over stdin
        let inputs = if paths.is_empty() {
            read_stdin_paths()?
        } else {
            paths
        };

        if inputs.is_empty() {
            return Err(CliError::InvalidArguments(
                "no paths given (pass PATH arguments or pipe lines on stdin)".to_string(),
            ));
        }

        // 2. Canonicalize everything before reporting, so one bad path
        //    does not hide the results for the rest of the batch
        let style = PathStyle::from(style);
        let canonicalizer = Canonicalizer::new(style).with_trace(trace);
        let results: Vec<(String, pathcanon::Result<CanonicalPath>)> = inputs
            .into_iter()
            .map(|input| {
                let outcome = canonicalizer.canonicalize(&input);
                (input, outcome)
            })
            .collect();

        // 3. Format and output to stdout
        match format {
            OutputFormat::Plain => format_as_plain(&results)?,
            OutputFormat::Json => format_as_json(&results, style)?,
            OutputFormat::Csv => format_as_csv(&results, style)?,
        }

        // 4. Reflect failures in the exit code
        let failed = results.iter().filter(|(_, r)| r.is_err()).count();
        if failed > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{failed} of {} paths could not be canonicalized",
                results.len()
            )));
        }

        Ok(())
    }
}

/// Format results as plain lines.
fn format_as_plain(results: &[(String, pathcanon::Result<CanonicalPath>)]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for (_, outcome) in results {
        match outcome {
            Ok(canonical) => writeln!(handle, "{canonical}")?,
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}

/// Format results as JSON.
fn format_as_json(
    results: &[(String, pathcanon::Result<CanonicalPath>)],
    style: PathStyle,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Build a JSON array with one object per input
    let json_data: Vec<serde_json::Value> = results
        .iter()
        .map(|(input, outcome)| match outcome {
            Ok(canonical) => serde_json::json!({
                "input": input,
                "style": style,
                "canonical": canonical.as_str(),
                "error": serde_json::Value::Null,
            }),
            Err(e) => serde_json::json!({
                "input": input,
                "style": style,
                "canonical": serde_json::Value::Null,
                "error": e.to_string(),
            }),
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format results as CSV.
fn format_as_csv(
    results: &[(String, pathcanon::Result<CanonicalPath>)],
    style: PathStyle,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    // Write header
    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    // Write each result
    for (input, outcome) in results {
        let (canonical, error) = match outcome {
            Ok(c) => (c.as_str().to_string(), String::new()),
            Err(e) => (String::new(), e.to_string()),
        };

        writer
            .write_record(&[input.clone(), style.to_string(), canonical, error])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
