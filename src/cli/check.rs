//! Parse or tokenize a filter expression and render the result

use super::CliError;
use crate::{output, tokenize, Parser};
use tracing::info;

/// How `check` renders a successfully parsed expression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The AST as JSON
    #[default]
    Json,
    /// The AST rendered back to canonical source text
    Source,
}

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to parse
    pub expression: String,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Only validate syntax, don't render the tree
    pub syntax_only: bool,
    /// Rendering of the parsed tree
    pub format: OutputFormat,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Rendered AST
    Rendered(String),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expression = options.expression.trim_end_matches(['\r', '\n']);
    let expr = Parser::new().parse(expression)?;
    info!(kind = %expr.kind(), "expression parsed");

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let rendered = match options.format {
        OutputFormat::Source => expr.to_string(),
        OutputFormat::Json if options.pretty => output::to_json_pretty(&expr)?,
        OutputFormat::Json => output::to_json(&expr)?,
    };
    Ok(CheckResult::Rendered(rendered))
}

/// Tokenize an expression and render the token stream as JSON
pub fn execute_tokens(expression: &str, pretty: bool) -> Result<String, CliError> {
    let tokens = tokenize(expression.trim_end_matches(['\r', '\n']))?;
    info!(count = tokens.len(), "expression tokenized");

    let json = if pretty {
        output::tokens_to_json_pretty(&tokens)?
    } else {
        output::tokens_to_json(&tokens)?
    };
    Ok(json)
}
