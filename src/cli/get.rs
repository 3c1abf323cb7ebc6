//! Read a node out of a JSON document

use super::{CliError, parse_document};
use crate::{resolve, tokenize};

/// Options for the get command
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Path to read
    pub path: String,
    /// JSON input string
    pub input: Option<String>,
}

/// Look up `options.path` in the input document.
///
/// The path is tokenized up front so a malformed path is reported as such
/// instead of as a missing value.
pub fn execute_get(options: &GetOptions) -> Result<serde_json::Value, CliError> {
    let tokens = tokenize(&options.path)?;
    let document = parse_document(options.input.as_deref())?;

    resolve(&document, &tokens)
        .cloned()
        .ok_or_else(|| CliError::NotFound(options.path.clone()))
}
