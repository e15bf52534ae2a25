//! JSON serialization of parse results.
//!
//! AST nodes serialize with a `type` discriminant followed by the variant's
//! fields; tokens serialize as `{"kind", "text", "position"}`. Consumers such
//! as tree visualizers depend on exactly this shape.
//!
//! - **Compact output** via [`to_json()`] and [`tokens_to_json()`]
//! - **Pretty output** via [`to_json_pretty()`] and [`tokens_to_json_pretty()`],
//!   2-space indentation
//!
//! # Examples
//!
//! ```
//! use sieve_lang::{parse, output::to_json};
//!
//! let expr = parse("a == 1").unwrap();
//! assert_eq!(
//!     to_json(&expr).unwrap(),
//!     r#"{"type":"BinaryExpression","operator":"==","left":{"type":"Identifier","name":"a"},"right":{"type":"NumericLiteral","value":1.0}}"#
//! );
//! ```

use crate::ast::{Expr, Token};

/// Converts an AST to a compact JSON string.
pub fn to_json(expr: &Expr) -> serde_json::Result<String> {
    serde_json::to_string(expr)
}

/// Converts an AST to an indented JSON string.
pub fn to_json_pretty(expr: &Expr) -> serde_json::Result<String> {
    serde_json::to_string_pretty(expr)
}

/// Converts a token stream to a compact JSON array.
pub fn tokens_to_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string(tokens)
}

/// Converts a token stream to an indented JSON array.
pub fn tokens_to_json_pretty(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}
