pub mod ast;
pub mod lexer;
pub mod output;
pub mod parser;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{
    ArrayOperator, BinaryOperator, Expr, LogicalOperator, NodeKind, ScalarOperator, Token,
    TokenKind,
};
pub use lexer::{tokenize, LexError, Lexer, Position};
pub use output::{to_json, to_json_pretty, tokens_to_json, tokens_to_json_pretty};
pub use parser::{parse, ParseError, Parser, MAX_NESTING_DEPTH};
