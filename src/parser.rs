use crate::{
    ast::{
        ArrayOperator, BinaryOperator, Expr, LogicalOperator, NodeKind, ScalarOperator, Token,
        TokenKind,
    },
    lexer::{LexError, Lexer, Position},
};
use thiserror::Error;
use tracing::debug;

/// How deep parentheses and computed-member keys may nest.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Parse failure. The first error aborts the parse; no partial tree is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Unexpected token \"{found}\" at position {position}, expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
    },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: String },

    #[error("Unexpected token \"{found}\" at position {position} after a complete expression")]
    TrailingInput { found: String, position: Position },

    #[error("Invalid scalar: {found} cannot be used where a scalar is required")]
    InvalidScalar { found: NodeKind },

    #[error("Invalid array expression: {found} cannot be used where an array is required")]
    InvalidArray { found: NodeKind },

    #[error("Invalid member expression: can't access member value of a scalar ({found})")]
    ScalarMemberAccess { found: NodeKind },

    #[error(
        "Invalid array element \"{found}\" at position {position}: elements must be literals or member expressions"
    )]
    InvalidArrayElement { found: String, position: Position },

    #[error("Invalid number literal \"{text}\" at position {position}")]
    InvalidNumber { text: String, position: Position },

    #[error("Maximum nesting depth {max} exceeded at position {position}", max = MAX_NESTING_DEPTH)]
    NestingTooDeep { position: Position },
}

impl ParseError {
    /// True when the text could not be tokenized at all.
    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::Lex(_))
    }

    fn unexpected(token: &Token, expected: impl Into<String>) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: token.text.clone(),
            position: token.position,
        }
    }
}

/// Rejects array literals where a scalar operand is required.
fn check_scalar(node: Expr) -> Result<Expr, ParseError> {
    match node {
        Expr::ArrayLiteralExpression { .. } => Err(ParseError::InvalidScalar { found: node.kind() }),
        _ => Ok(node),
    }
}

/// Accepts array literals, and identifiers whose type is only known at
/// evaluation time. Everything else, member expressions included, is rejected.
fn check_array(node: Expr) -> Result<Expr, ParseError> {
    match node {
        Expr::ArrayLiteralExpression { .. } | Expr::Identifier { .. } => Ok(node),
        _ => Err(ParseError::InvalidArray { found: node.kind() }),
    }
}

/// Recursive-descent parser with one token of lookahead.
///
/// A parser can be reused: every call to [`Parser::parse`] resets the lexer
/// and the lookahead.
#[derive(Default)]
pub struct Parser {
    lexer: Lexer,
    current_token: Option<Token>,
    nesting_depth: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses exactly one expression spanning the whole input.
    pub fn parse(&mut self, input: &str) -> Result<Expr, ParseError> {
        self.lexer.reset(input);
        self.current_token = None;
        self.nesting_depth = 0;

        let result = self.parse_program();
        match &result {
            Ok(expr) => debug!(kind = %expr.kind(), "parsed expression"),
            Err(e) => debug!(error = %e, "parse failed"),
        }
        result
    }

    fn parse_program(&mut self) -> Result<Expr, ParseError> {
        self.advance()?;
        let expr = self.parse_expression()?;

        match self.current_token.take() {
            None => Ok(expr),
            Some(token) => Err(ParseError::TrailingInput {
                found: token.text,
                position: token.position,
            }),
        }
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current_token.as_ref().map(|t| t.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Error for the current lookahead, or for end of input.
    fn unexpected_here(&self, expected: &str) -> ParseError {
        match &self.current_token {
            Some(token) => ParseError::unexpected(token, expected),
            None => ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            },
        }
    }

    /// Consumes the lookahead if it has the expected kind.
    fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        match self.current_token.take() {
            None => Err(ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            }),
            Some(token) if token.kind != expected => {
                Err(ParseError::unexpected(&token, expected.name()))
            }
            Some(token) => {
                self.advance()?;
                Ok(token)
            }
        }
    }

    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    /// Parses an expression one nesting level down, failing before the
    /// recursion can exhaust the stack.
    fn parse_nested_expression(&mut self, position: Position) -> Result<Expr, ParseError> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position });
        }

        self.nesting_depth += 1;
        let expr = self.parse_expression();
        self.nesting_depth -= 1;
        expr
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;

        while self.check(TokenKind::Or) {
            self.advance()?;
            let right = self.parse_and()?;
            left = Expr::logical(LogicalOperator::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.check(TokenKind::And) {
            self.advance()?;
            let right = self.parse_equality()?;
            left = Expr::logical(LogicalOperator::And, left, right);
        }
        Ok(left)
    }

    // Comparison levels fold left like the logical ones: `a == b == c` is
    // `(a == b) == c`.
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational()?;

        while self.check(TokenKind::EqualityOperator) {
            let op = self.binary_operator(TokenKind::EqualityOperator)?;
            let right = self.parse_relational()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_contains()?;

        while self.check(TokenKind::RelationalOperator) {
            let op = self.binary_operator(TokenKind::RelationalOperator)?;
            let right = self.parse_contains()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn binary_operator(&mut self, kind: TokenKind) -> Result<BinaryOperator, ParseError> {
        let token = self.eat(kind)?;
        BinaryOperator::from_symbol(&token.text)
            .ok_or_else(|| ParseError::unexpected(&token, kind.name()))
    }

    /// `left contains right`, at most once per level.
    fn parse_contains(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_membership()?;

        if !self.check(TokenKind::Contains) {
            return Ok(left);
        }
        self.advance()?;
        let right = self.parse_member()?;

        Ok(Expr::scalar(
            ScalarOperator::Contains,
            check_scalar(left)?,
            check_scalar(right)?,
        ))
    }

    /// One optional `has`, then one optional `in` / `not in` applied to the
    /// result. Neither repeats.
    fn parse_membership(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_member()?;

        if self.check(TokenKind::Has) {
            self.advance()?;
            let right = self.parse_member()?;
            left = Expr::array_op(ArrayOperator::Has, check_array(left)?, check_scalar(right)?);
        }

        let op = match self.current_kind() {
            Some(TokenKind::In) => ArrayOperator::In,
            Some(TokenKind::NotIn) => ArrayOperator::NotIn,
            _ => return Ok(left),
        };
        self.advance()?;
        let right = self.parse_member()?;

        Ok(Expr::array_op(op, check_scalar(left)?, check_array(right)?))
    }

    /// Postfix `.identifier` and `[expression]` accessors.
    fn parse_member(&mut self) -> Result<Expr, ParseError> {
        let mut object = self.parse_primary()?;

        loop {
            if self.check(TokenKind::Dot) {
                if object.is_literal() {
                    return Err(ParseError::ScalarMemberAccess {
                        found: object.kind(),
                    });
                }
                self.advance()?; // consume '.'

                let property = self.parse_identifier()?;
                object = Expr::MemberExpression {
                    object: Box::new(object),
                    property: Box::new(property),
                    computed: false,
                    parenthesized: false,
                };
            } else if self.check(TokenKind::OpenSquareBracket) {
                let open = self.eat(TokenKind::OpenSquareBracket)?;

                // Any expression is accepted as the key, no type check.
                let property = self.parse_nested_expression(open.position)?;
                self.eat(TokenKind::ClosedSquareBracket)?;
                object = Expr::computed_member(object, property);
            } else {
                break;
            }
        }
        Ok(object)
    }

    fn parse_identifier(&mut self) -> Result<Expr, ParseError> {
        let token = self.eat(TokenKind::Identifier)?;
        Ok(Expr::identifier(token.text))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            Some(TokenKind::OpenSquareBracket) => self.parse_array_literal(),
            Some(kind) if kind.is_literal() => self.parse_literal(),
            Some(TokenKind::OpenParenthesis) => {
                let open = self.eat(TokenKind::OpenParenthesis)?;
                let expr = self.parse_nested_expression(open.position)?;
                self.eat(TokenKind::ClosedParenthesis)?;
                Ok(expr.parenthesized())
            }
            Some(TokenKind::Identifier) => self.parse_identifier(),
            _ => Err(self.unexpected_here("an expression")),
        }
    }

    fn parse_literal(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            Some(TokenKind::NumericLiteral) => {
                let token = self.eat(TokenKind::NumericLiteral)?;
                // Digit runs past f64 range parse as infinity, which has no
                // JSON or source form.
                match token.text.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(Expr::number(value)),
                    _ => Err(ParseError::InvalidNumber {
                        text: token.text,
                        position: token.position,
                    }),
                }
            }
            Some(TokenKind::StringLiteral) => {
                let token = self.eat(TokenKind::StringLiteral)?;
                // Both quote characters are one byte wide.
                let text = &token.text;
                Ok(Expr::string(&text[1..text.len() - 1]))
            }
            Some(TokenKind::True) => {
                self.eat(TokenKind::True)?;
                Ok(Expr::boolean(true))
            }
            Some(TokenKind::False) => {
                self.eat(TokenKind::False)?;
                Ok(Expr::boolean(false))
            }
            Some(TokenKind::Null) => {
                self.eat(TokenKind::Null)?;
                Ok(Expr::null())
            }
            _ => Err(self.unexpected_here("a literal")),
        }
    }

    fn parse_array_literal(&mut self) -> Result<Expr, ParseError> {
        self.eat(TokenKind::OpenSquareBracket)?;

        let mut elements = vec![];
        if !self.check(TokenKind::ClosedSquareBracket) {
            loop {
                elements.push(self.parse_array_element()?);

                if self.check(TokenKind::Comma) {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }

        self.eat(TokenKind::ClosedSquareBracket)?;
        Ok(Expr::array(elements))
    }

    /// Literals, or access chains rooted at an identifier. Nested array
    /// literals and parenthesized elements are not part of the grammar.
    fn parse_array_element(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            Some(kind) if kind.is_literal() => self.parse_literal(),
            Some(TokenKind::Identifier) => self.parse_member(),
            _ => match &self.current_token {
                Some(token) => Err(ParseError::InvalidArrayElement {
                    found: token.text.clone(),
                    position: token.position,
                }),
                None => Err(ParseError::UnexpectedEnd {
                    expected: "an array element".to_string(),
                }),
            },
        }
    }
}

/// Parses `input` with a fresh parser.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::new().parse(input)
}
