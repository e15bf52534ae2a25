//! CLI support for sieve-lang
//!
//! Provides programmatic access to the `sieve` commands so other tools can
//! embed them without shelling out.

mod check;
mod docs;

pub use check::{execute_check, execute_tokens, CheckOptions, CheckResult, OutputFormat};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Lexical error: {0}")]
    Lex(#[from] crate::LexError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No expression provided. Pass one as an argument or pipe it to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'sieve docs' to see available categories.")]
    UnknownCategory(String),
}
