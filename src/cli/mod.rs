//! CLI support for cqn-filter
//!
//! Provides programmatic access to the command-line operations so they can
//! be embedded in other tools and tested without spawning the binary.

mod query;
mod translate;

pub use query::{QueryOptions, execute_query};
pub use translate::{TranslateOptions, execute_translate};

use std::io;

use crate::translator::Skipped;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Strict translation rejected the filter
    #[error("Translation error: {0}")]
    Translate(#[from] crate::TranslateError),
    /// Input JSON had the wrong shape
    #[error("Invalid input: {0}")]
    Wire(#[from] crate::WireError),
    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No input provided
    #[error("No input provided. Pass JSON as an argument or pipe it to stdin.")]
    NoInput,
}

/// Result of a CLI operation
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// JSON to print on stdout
    pub json: serde_json::Value,
    /// Fragments the translator dropped
    pub skipped: Vec<Skipped>,
}

fn parse_input(input: Option<&str>) -> Result<serde_json::Value, CliError> {
    let text = input.ok_or(CliError::NoInput)?;
    if text.trim().is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(serde_json::from_str(text)?)
}
