use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a lexical token.
///
/// Serialized in `SCREAMING_SNAKE_CASE` (`EQUALITY_OPERATOR`, `NOT_IN`, ...)
/// so token dumps read the same way the grammar reference names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Delimiters
    /// Separator between array literal elements
    Comma,

    /// Non-computed member access
    ///
    /// # Examples
    /// ```text
    /// user.name
    /// ```
    Dot,

    /// Left parenthesis for grouping
    OpenParenthesis,

    /// Right parenthesis
    ClosedParenthesis,

    /// Left bracket for array literals and computed member access
    ///
    /// # Examples
    /// ```text
    /// [1, 2, 3]
    /// items[0]
    /// ```
    OpenSquareBracket,

    /// Right bracket
    ClosedSquareBracket,

    // Comparison
    /// `==` or `!=`
    EqualityOperator,

    /// `<`, `>`, `<=` or `>=`
    RelationalOperator,

    // Logical
    /// Logical AND (word, any case)
    ///
    /// # Examples
    /// ```text
    /// age > 18 and verified == true
    /// ```
    And,

    /// Logical OR (word, any case)
    Or,

    /// Bare `!`; lexed but not accepted anywhere by the grammar
    Not,

    // Membership
    /// Scalar membership (`contains`)
    ///
    /// # Examples
    /// ```text
    /// title contains "draft"
    /// ```
    Contains,

    /// Array membership, scalar on the left (`in`)
    ///
    /// # Examples
    /// ```text
    /// status in ["open", "pending"]
    /// ```
    In,

    /// Negated array membership (`not in`)
    NotIn,

    /// Array membership, array on the left (`has`)
    ///
    /// # Examples
    /// ```text
    /// tags has "urgent"
    /// ```
    Has,

    // Literals
    True,
    False,
    Null,

    /// Integer or decimal number without sign or exponent
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// ```
    NumericLiteral,

    /// Single- or double-quoted string, quotes included in the token text
    StringLiteral,

    /// Field name: a run of letters, digits and underscores
    Identifier,
}

impl TokenKind {
    /// Returns true for tokens that start a literal node.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::NumericLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::OpenParenthesis => "OPEN_PARENTHESIS",
            TokenKind::ClosedParenthesis => "CLOSED_PARENTHESIS",
            TokenKind::OpenSquareBracket => "OPEN_SQUARE_BRACKET",
            TokenKind::ClosedSquareBracket => "CLOSED_SQUARE_BRACKET",
            TokenKind::EqualityOperator => "EQUALITY_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Contains => "CONTAINS",
            TokenKind::In => "IN",
            TokenKind::NotIn => "NOT_IN",
            TokenKind::Has => "HAS",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::NumericLiteral => "NUMERIC_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the lexer.
///
/// `text` is the exact source slice (string literals keep their quotes,
/// keywords keep their original case). `position` is the character offset of
/// the first character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }
}
