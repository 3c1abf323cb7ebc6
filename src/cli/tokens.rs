//! Show how a path is split into tokens

use super::CliError;
use crate::{render, tokenize};

/// Options for the tokens command
#[derive(Debug, Clone, Default)]
pub struct TokensOptions {
    /// Path to tokenize
    pub path: String,
    /// Print the canonical path text instead of the token list
    pub canonical: bool,
}

/// Tokenize `options.path`.
///
/// Returns a JSON array like `[{"key":"user"},{"index":1}]`, or the
/// canonical path as a JSON string when `canonical` is set.
pub fn execute_tokens(options: &TokensOptions) -> Result<serde_json::Value, CliError> {
    let tokens = tokenize(&options.path)?;
    if options.canonical {
        return Ok(serde_json::Value::String(render(&tokens)));
    }
    Ok(serde_json::to_value(&tokens)?)
}
