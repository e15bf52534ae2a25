// tests/lexer_tests.rs

use sieve_lang::ast::{Token, TokenKind};
use sieve_lang::lexer::{tokenize, LexError, Lexer};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn texts(input: &str) -> Vec<String> {
    tokenize(input)
        .unwrap()
        .into_iter()
        .map(|t| t.text)
        .collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("(", TokenKind::OpenParenthesis),
        (")", TokenKind::ClosedParenthesis),
        ("[", TokenKind::OpenSquareBracket),
        ("]", TokenKind::ClosedSquareBracket),
        ("<", TokenKind::RelationalOperator),
        (">", TokenKind::RelationalOperator),
        ("!", TokenKind::Not),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap().unwrap();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.text, input);
        assert_eq!(lexer.next_token().unwrap(), None);
    }
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("==", TokenKind::EqualityOperator),
        ("!=", TokenKind::EqualityOperator),
        ("<=", TokenKind::RelationalOperator),
        (">=", TokenKind::RelationalOperator),
    ];

    for (input, expected) in test_cases {
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens, vec![Token::new(expected, input, 0)], "Failed for input: {}", input);
    }
}

#[test]
fn test_two_char_vs_single_char() {
    assert_eq!(texts("< =="), vec!["<", "=="]);
    assert_eq!(texts("<="), vec!["<="]);
    assert_eq!(texts("< <="), vec!["<", "<="]);
    assert_eq!(texts("a<=b"), vec!["a", "<=", "b"]);
    assert_eq!(texts("!==="), vec!["!=", "=="]);
}

#[test]
fn test_bare_equals_is_invalid() {
    let err = tokenize("a = 1").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            character: '=',
            position: 2
        }
    );
    assert!(err.to_string().contains("Unexpected character '='"));
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keywords() {
    let test_cases = vec![
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("contains", TokenKind::Contains),
        ("has", TokenKind::Has),
        ("in", TokenKind::In),
        ("not in", TokenKind::NotIn),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("null", TokenKind::Null),
    ];

    for (input, expected) in test_cases {
        assert_eq!(kinds(input), vec![expected], "Failed for input: {}", input);
    }
}

#[test]
fn test_operator_keywords_are_case_insensitive() {
    for input in ["AND", "And", "aNd"] {
        assert_eq!(kinds(input), vec![TokenKind::And], "Failed for input: {}", input);
    }
    assert_eq!(kinds("OR"), vec![TokenKind::Or]);
    assert_eq!(kinds("CONTAINS"), vec![TokenKind::Contains]);
    assert_eq!(kinds("Has"), vec![TokenKind::Has]);
    assert_eq!(kinds("IN"), vec![TokenKind::In]);
    assert_eq!(kinds("NOT IN"), vec![TokenKind::NotIn]);
    assert_eq!(kinds("Not In"), vec![TokenKind::NotIn]);
}

#[test]
fn test_keyword_text_keeps_source_case() {
    let tokens = tokenize("a AND b").unwrap();
    assert_eq!(tokens[1], Token::new(TokenKind::And, "AND", 2));
}

#[test]
fn test_literal_keywords_are_lowercase_only() {
    assert_eq!(kinds("TRUE"), vec![TokenKind::Identifier]);
    assert_eq!(kinds("False"), vec![TokenKind::Identifier]);
    assert_eq!(kinds("NULL"), vec![TokenKind::Identifier]);
}

#[test]
fn test_keywords_vs_identifiers() {
    let test_cases = vec![
        "contains2",
        "container",
        "index",
        "inner",
        "hash",
        "android",
        "order",
        "truely",
        "nullable",
        "not",
        "nothing",
        "_in",
    ];

    for input in test_cases {
        let tokens = tokenize(input).unwrap();
        assert_eq!(
            tokens,
            vec![Token::new(TokenKind::Identifier, input, 0)],
            "Failed for input: {}",
            input
        );
    }
}

// ============================================================================
// `not in`
// ============================================================================

#[test]
fn test_not_in_is_one_token() {
    let tokens = tokenize("a not in b").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "a", 0),
            Token::new(TokenKind::NotIn, "not in", 2),
            Token::new(TokenKind::Identifier, "b", 9),
        ]
    );
}

#[test]
fn test_not_in_with_extra_whitespace() {
    let tokens = tokenize("not \t in").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::NotIn, "not \t in", 0)]);
}

#[test]
fn test_not_followed_by_other_words() {
    assert_eq!(
        kinds("not index"),
        vec![TokenKind::Identifier, TokenKind::Identifier]
    );
    assert_eq!(kinds("not"), vec![TokenKind::Identifier]);
    assert_eq!(kinds("notin"), vec![TokenKind::Identifier]);
    assert_eq!(
        kinds("not in_stock"),
        vec![TokenKind::Identifier, TokenKind::Identifier]
    );
}

#[test]
fn test_not_in_before_bracket() {
    assert_eq!(
        kinds("x not in[1]"),
        vec![
            TokenKind::Identifier,
            TokenKind::NotIn,
            TokenKind::OpenSquareBracket,
            TokenKind::NumericLiteral,
            TokenKind::ClosedSquareBracket,
        ]
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    assert_eq!(texts("42"), vec!["42"]);
    assert_eq!(texts("3.14"), vec!["3.14"]);
    assert_eq!(texts("0.5"), vec!["0.5"]);
    assert_eq!(kinds("3.14"), vec![TokenKind::NumericLiteral]);
}

#[test]
fn test_number_dot_without_fraction() {
    assert_eq!(texts("1."), vec!["1", "."]);
    assert_eq!(texts("1.x"), vec!["1", ".", "x"]);
    assert_eq!(texts("1.2.3"), vec!["1.2", ".", "3"]);
}

#[test]
fn test_numbers_have_no_sign_or_exponent() {
    assert!(tokenize("-1").is_err());
    assert_eq!(texts("1e5"), vec!["1", "e5"]);
}

#[test]
fn test_number_followed_by_word() {
    assert_eq!(
        kinds("2abc"),
        vec![TokenKind::NumericLiteral, TokenKind::Identifier]
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_strings_keep_quotes_in_text() {
    let tokens = tokenize(r#""hello" 'world'"#).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::StringLiteral, "\"hello\"", 0),
            Token::new(TokenKind::StringLiteral, "'world'", 8),
        ]
    );
}

#[test]
fn test_strings_mixed_quotes() {
    assert_eq!(texts(r#""it's""#), vec![r#""it's""#]);
    assert_eq!(texts(r#"'say "hi"'"#), vec![r#"'say "hi"'"#]);
}

#[test]
fn test_string_has_no_escapes() {
    assert_eq!(texts(r#""a\" b"#), vec![r#""a\""#, "b"]);
}

#[test]
fn test_empty_string() {
    assert_eq!(texts(r#""""#), vec![r#""""#]);
}

#[test]
fn test_string_keyword_content() {
    assert_eq!(kinds(r#""and""#), vec![TokenKind::StringLiteral]);
}

#[test]
fn test_unterminated_string() {
    let err = tokenize(r#"a == "open"#).unwrap_err();
    assert_eq!(
        err,
        LexError::UnterminatedString {
            quote: '"',
            position: 5
        }
    );
    assert_eq!(err.character(), '"');
    assert_eq!(err.position(), 5);
}

#[test]
fn test_mismatched_quotes_are_unterminated() {
    assert!(matches!(
        tokenize(r#"'open""#),
        Err(LexError::UnterminatedString { quote: '\'', .. })
    ));
}

// ============================================================================
// Whitespace, Positions, Errors
// ============================================================================

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(texts("  a \n\t==\r\n 1  "), vec!["a", "==", "1"]);
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   ").unwrap().is_empty());
}

#[test]
fn test_positions_are_character_offsets() {
    let tokens = tokenize("'é' == 'ü' and x").unwrap();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0, 4, 7, 11, 15]);
}

#[test]
fn test_identifiers_are_ascii_only() {
    let test_cases = vec![("é", 'é', 0), ("name名前", '名', 4), ("a == ٣", '٣', 5)];

    for (input, character, position) in test_cases {
        assert_eq!(
            tokenize(input).unwrap_err(),
            LexError::UnexpectedCharacter {
                character,
                position
            },
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_unexpected_characters() {
    let test_cases = vec![
        ("a & b", '&', 2),
        ("$", '$', 0),
        ("x + 1", '+', 2),
        ("a.b | c", '|', 4),
        ("{}", '{', 0),
    ];

    for (input, character, position) in test_cases {
        let err = tokenize(input).unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character,
                position
            },
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_error_after_valid_tokens() {
    let mut lexer = Lexer::new("a # b");
    assert_eq!(lexer.next_token().unwrap().unwrap().text, "a");
    assert!(lexer.next_token().is_err());
}

// ============================================================================
// Lexer State
// ============================================================================

#[test]
fn test_has_more() {
    let mut lexer = Lexer::new("a ");
    assert!(lexer.has_more());
    lexer.next_token().unwrap();
    assert!(lexer.has_more());
    assert_eq!(lexer.next_token().unwrap(), None);
    assert!(!lexer.has_more());
}

#[test]
fn test_reset_rewinds_cursor() {
    let mut lexer = Lexer::new("first second");
    lexer.next_token().unwrap();
    lexer.reset("other");
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::new(TokenKind::Identifier, "other", 0))
    );
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_iterator_stops_after_error() {
    let mut lexer = Lexer::new("a @ b");
    assert!(matches!(lexer.next(), Some(Ok(_))));
    assert!(matches!(lexer.next(), Some(Err(_))));
    assert!(lexer.next().is_none());
}

#[test]
fn test_full_expression() {
    assert_eq!(
        kinds(r#"(a.b[0] >= 1.5 OR name contains "x") and tags has 'y' not in list"#),
        vec![
            TokenKind::OpenParenthesis,
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::OpenSquareBracket,
            TokenKind::NumericLiteral,
            TokenKind::ClosedSquareBracket,
            TokenKind::RelationalOperator,
            TokenKind::NumericLiteral,
            TokenKind::Or,
            TokenKind::Identifier,
            TokenKind::Contains,
            TokenKind::StringLiteral,
            TokenKind::ClosedParenthesis,
            TokenKind::And,
            TokenKind::Identifier,
            TokenKind::Has,
            TokenKind::StringLiteral,
            TokenKind::NotIn,
            TokenKind::Identifier,
        ]
    );
}
