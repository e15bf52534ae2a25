//! # Sieve Filter Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the Abstract Syntax Tree (AST) for the
//! sieve filter language, a small boolean/relational expression language for
//! selecting records by their fields.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, access, operations)
//! - **[operators]** - Typed operator sets for each expression family
//!
//! ## Quick Start
//!
//! ```text
//! status in ["open", "pending"] and owner.name contains "ann"
//! ```
//!
//! ## Precedence
//!
//! From loosest to tightest binding:
//!
//! ```text
//! or
//! and
//! == !=
//! < > <= >=
//! contains
//! has / in / not in
//! .field  [index]
//! literals, identifiers, ( ... ), [ ... ]
//! ```
//!
//! Every binary level folds to the left, so `a == b == c` groups as
//! `(a == b) == c`.
//!
//! ## Shape Rules
//!
//! Some operand misuses are rejected while parsing:
//!
//! - `contains` never takes an array literal on either side
//! - `has` needs an array literal or identifier on the left
//! - `in` / `not in` need an array literal or identifier on the right
//! - `.field` cannot follow a literal (`1.x`, `"s".len`)
//! - array literal elements are literals or identifier access chains
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Expr, NodeKind};
pub use operators::{ArrayOperator, BinaryOperator, LogicalOperator, ScalarOperator};
pub use tokens::{Token, TokenKind};
