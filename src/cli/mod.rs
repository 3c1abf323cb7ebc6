//! CLI support for jpath
//!
//! Provides programmatic access to the `jpath` subcommands so they can be
//! embedded in other tools and tested without spawning a process.

mod get;
mod set;
mod tokens;

pub use get::{GetOptions, execute_get};
pub use set::{SetOptions, execute_set};
pub use tokens::{TokensOptions, execute_tokens};

use std::io;

use crate::{SyntaxError, WriteError};

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Syntax(#[from] SyntaxError),

    #[error("{0}")]
    Write(#[from] WriteError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    #[error("No value at path '{0}'")]
    NotFound(String),
}

/// Parses the document text, failing with [`CliError::NoInput`] when there is none.
fn parse_document(input: Option<&str>) -> Result<serde_json::Value, CliError> {
    let text = input.ok_or(CliError::NoInput)?;
    Ok(serde_json::from_str(text)?)
}

/// Serializes a CLI result for stdout.
pub fn to_output(value: &serde_json::Value, pretty: bool) -> Result<String, CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;
    Ok(text)
}
