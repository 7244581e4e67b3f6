//! Turn a full read query into persistence-call arguments

use super::{CliError, CommandOutput, parse_input};
use crate::ReadRequest;

/// Options for the query command
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// JSON read query (`{"SELECT": {...}}`)
    pub input: Option<String>,
    /// Entity name, overriding `SELECT.from`
    pub entity: Option<String>,
}

/// Execute a query operation
///
/// Output is `{"model": ..., "args": {"where": ...}}`; `model` is `null`
/// when no entity name is known.
pub fn execute_query(options: &QueryOptions) -> Result<CommandOutput, CliError> {
    let query = parse_input(options.input.as_deref())?;
    let request = ReadRequest::from_query(&query, options.entity.as_deref())?;

    let mut out = serde_json::Map::new();
    out.insert(
        "model".to_string(),
        request
            .model
            .clone()
            .map(serde_json::Value::String)
            .unwrap_or(serde_json::Value::Null),
    );
    out.insert("args".to_string(), request.find_many_args());

    let skipped = request
        .translation
        .map(|translation| translation.skipped)
        .unwrap_or_default();

    Ok(CommandOutput {
        json: serde_json::Value::Object(out),
        skipped,
    })
}
