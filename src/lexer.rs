use crate::ast::{Token, TokenKind};
use thiserror::Error;
use tracing::trace;

/// Character offset into the source text.
pub type Position = usize;

/// Lexical failure. Fatal: the lexer does not try to resynchronise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: Position },

    #[error("Unterminated string starting with {quote} at position {position}")]
    UnterminatedString { quote: char, position: Position },
}

impl LexError {
    /// The offending character (the opening quote for unterminated strings).
    pub fn character(&self) -> char {
        match self {
            LexError::UnexpectedCharacter { character, .. } => *character,
            LexError::UnterminatedString { quote, .. } => *quote,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::UnterminatedString { position, .. } => *position,
        }
    }
}

/// Identifiers and keywords are ASCII only; other letters are lexical errors.
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Pull-based tokenizer.
///
/// Words are always read to their full length before being classified, so
/// `contains2` or `index` never split into a keyword and a remainder.
pub struct Lexer {
    input: Vec<char>,
    position: Position,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Replaces the source text and rewinds the cursor to 0.
    pub fn reset(&mut self, input: &str) {
        self.input = input.chars().collect();
        self.position = 0;
    }

    /// True while unread characters remain. Trailing whitespace counts, so
    /// `next_token` may still return `Ok(None)` after this returns true.
    pub fn has_more(&self) -> bool {
        self.position < self.input.len()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn slice(&self, start: Position, end: Position) -> String {
        self.input[start..end].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_word_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char) -> Result<Token, LexError> {
        let start = self.position;
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == quote {
                return Ok(Token::new(
                    TokenKind::StringLiteral,
                    self.slice(start, self.position),
                    start,
                ));
            }
        }

        Err(LexError::UnterminatedString {
            quote,
            position: start,
        })
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        let mut seen_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.'
                && !seen_dot
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        Token::new(
            TokenKind::NumericLiteral,
            self.slice(start, self.position),
            start,
        )
    }

    /// After reading `not`, checks for whitespace followed by the whole word
    /// `in`. Consumes it and returns true on a match, otherwise leaves the
    /// cursor untouched.
    fn try_not_in_suffix(&mut self) -> bool {
        let mut offset = 0;
        while self.peek_char(offset).is_some_and(char::is_whitespace) {
            offset += 1;
        }
        if offset == 0 {
            return false;
        }

        let is_in = self
            .peek_char(offset)
            .is_some_and(|c| c.eq_ignore_ascii_case(&'i'))
            && self
                .peek_char(offset + 1)
                .is_some_and(|c| c.eq_ignore_ascii_case(&'n'))
            && !self.peek_char(offset + 2).is_some_and(is_word_char);

        if is_in {
            self.position += offset + 2;
        }
        is_in
    }

    fn read_word_token(&mut self) -> Token {
        let start = self.position;
        let word = self.read_word();

        let kind = match word.to_ascii_lowercase().as_str() {
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "contains" => TokenKind::Contains,
            "has" => TokenKind::Has,
            "in" => TokenKind::In,
            "not" if self.try_not_in_suffix() => TokenKind::NotIn,
            // Literal keywords are lower-case only; `TRUE` is a field name.
            "true" if word == "true" => TokenKind::True,
            "false" if word == "false" => TokenKind::False,
            "null" if word == "null" => TokenKind::Null,
            _ => TokenKind::Identifier,
        };

        Token::new(kind, self.slice(start, self.position), start)
    }

    fn single(&mut self, kind: TokenKind, width: usize) -> Token {
        let start = self.position;
        self.position += width;
        Token::new(kind, self.slice(start, self.position), start)
    }

    /// Returns the next token, `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let token = match self.current_char() {
            None => return Ok(None),
            Some(',') => self.single(TokenKind::Comma, 1),
            Some('.') => self.single(TokenKind::Dot, 1),
            Some('(') => self.single(TokenKind::OpenParenthesis, 1),
            Some(')') => self.single(TokenKind::ClosedParenthesis, 1),
            Some('[') => self.single(TokenKind::OpenSquareBracket, 1),
            Some(']') => self.single(TokenKind::ClosedSquareBracket, 1),
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.single(TokenKind::EqualityOperator, 2)
                } else {
                    return Err(LexError::UnexpectedCharacter {
                        character: '=',
                        position: self.position,
                    });
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.single(TokenKind::EqualityOperator, 2)
                } else {
                    self.single(TokenKind::Not, 1)
                }
            }
            Some('<') | Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.single(TokenKind::RelationalOperator, 2)
                } else {
                    self.single(TokenKind::RelationalOperator, 1)
                }
            }
            Some(quote @ ('"' | '\'')) => self.read_string(quote)?,
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some(ch) if is_word_char(ch) => self.read_word_token(),
            Some(ch) => {
                return Err(LexError::UnexpectedCharacter {
                    character: ch,
                    position: self.position,
                });
            }
        };

        trace!(kind = %token.kind, text = %token.text, position = token.position, "token");
        Ok(Some(token))
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new("")
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields tokens until end of input. After an error the lexer is
    /// exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.position = self.input.len();
                Some(Err(e))
            }
        }
    }
}

/// Tokenizes the whole input, failing on the first unrecognised character.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).collect()
}

#[test]
fn test_keywords() {
    let kinds: Vec<TokenKind> = tokenize("and or contains has in not in true false null")
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Contains,
            TokenKind::Has,
            TokenKind::In,
            TokenKind::NotIn,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
        ]
    );
}

#[test]
fn test_filter_expression() {
    let mut lexer = Lexer::new("a.b[0] >= 5");
    let mut next = || lexer.next_token().unwrap().unwrap();
    assert_eq!(next(), Token::new(TokenKind::Identifier, "a", 0));
    assert_eq!(next(), Token::new(TokenKind::Dot, ".", 1));
    assert_eq!(next(), Token::new(TokenKind::Identifier, "b", 2));
    assert_eq!(next(), Token::new(TokenKind::OpenSquareBracket, "[", 3));
    assert_eq!(next(), Token::new(TokenKind::NumericLiteral, "0", 4));
    assert_eq!(next(), Token::new(TokenKind::ClosedSquareBracket, "]", 5));
    assert_eq!(next(), Token::new(TokenKind::RelationalOperator, ">=", 7));
    assert_eq!(next(), Token::new(TokenKind::NumericLiteral, "5", 10));
    assert_eq!(lexer.next_token().unwrap(), None);
}
