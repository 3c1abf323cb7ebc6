//! Write a value into a JSON document

use serde_json::Value as Json;
use tracing::info;

use super::{CliError, parse_document};
use crate::{tokenize, vivify};

/// Options for the set command
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    /// Path to write
    pub path: String,
    /// Value to write, as JSON text unless `string` is set
    pub value: String,
    /// Store `value` as a JSON string instead of parsing it
    pub string: bool,
    /// JSON input string
    pub input: Option<String>,
}

/// Write the value into the input document and return the whole document.
pub fn execute_set(options: &SetOptions) -> Result<Json, CliError> {
    let tokens = tokenize(&options.path)?;
    let value = if options.string {
        Json::String(options.value.clone())
    } else {
        serde_json::from_str(&options.value)?
    };
    let mut document = parse_document(options.input.as_deref())?;

    *vivify(&mut document, &tokens)? = value;
    info!(path = %options.path, segments = tokens.len(), "value written");
    Ok(document)
}
