//! Translate a bare where-clause array

use super::{CliError, CommandOutput, parse_input};
use crate::{tokens_from_json, translate_strict, translate_with_diagnostics};

/// Options for the translate command
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// JSON where-clause array
    pub input: Option<String>,
    /// Fail on the first dropped fragment
    pub strict: bool,
}

/// Execute a translate operation
pub fn execute_translate(options: &TranslateOptions) -> Result<CommandOutput, CliError> {
    let clause = parse_input(options.input.as_deref())?;
    let tokens = tokens_from_json(&clause)?;

    if options.strict {
        let filter = translate_strict(&tokens)?;
        return Ok(CommandOutput {
            json: filter.to_json(),
            skipped: Vec::new(),
        });
    }

    let translation = translate_with_diagnostics(&tokens);
    Ok(CommandOutput {
        json: translation.filter.to_json(),
        skipped: translation.skipped,
    })
}
