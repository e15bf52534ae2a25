//! Documentation content for the sieve CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Precedence,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "literals" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "precedence" | "grammar" => Some(Self::Precedence),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SIEVE DOCUMENTATION

Sieve is a small filter-expression language. An expression compares fields,
literals and arrays and combines the results with `and` / `or`. This tool
parses expressions into a typed syntax tree; it does not evaluate them.

DOCUMENTATION CATEGORIES

  syntax            Literals, identifiers, member access, array literals
  operators         Logical, comparison and membership operators
  precedence        Binding order and associativity
  errors            What the parser rejects and why

QUICK REFERENCE

  status == "open"                  Equality
  age >= 18 and verified == true    Logical AND
  title contains "draft"            Scalar membership
  tags has "urgent"                 Array contains a value
  status in ["open", "pending"]     Value is in an array
  owner.name, items[0]              Member access

Run 'sieve doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Precedence) => Ok(PRECEDENCE_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX

LITERALS
  42, 3.14          Numbers: digits with an optional fraction, no sign or exponent
  "text", 'text'    Strings: either quote, no escape sequences
  true, false       Booleans (lower-case only)
  null              Null (lower-case only)

IDENTIFIERS
  A run of ASCII letters, digits and underscores:
    status
    created_at
    field2

MEMBER ACCESS
  object.field      Field access; the field must be an identifier
  object[expr]      Computed access; any expression is accepted as the key

  Accessors chain left to right:
    a.b[0].c

  Field access on a literal is rejected:
    "abc".length    => error
    1.x             => error

ARRAY LITERALS
  []
  [1, 2, 3]
  ["a", user.name, items[0]]

  Elements are literals or access chains starting with an identifier.
  Nested arrays and parenthesized elements are not allowed.

GROUPING
  (a or b) and c

  Parentheses change grouping only; the tree records that a node was
  parenthesized so it can be printed back the same way.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

LOGICAL
  and               Both sides hold
  or                Either side holds

  Keywords are case-insensitive: AND, And and and are the same operator.

COMPARISON
  ==  !=            Equality
  <  >  <=  >=      Relational

SCALAR MEMBERSHIP
  left contains right

  Neither side may be an array literal.
    title contains "draft"        ok
    title contains ["a", "b"]     error

ARRAY MEMBERSHIP
  array has value               The array on the left holds the value
  value in array                The value is one of the array's elements
  value not in array            Negated `in`

  The array side must be an array literal or a bare identifier:
    tags has "urgent"             ok
    [1, 2] has x                  ok
    1 has x                       error
    a in [1, 2, 3]                ok
    a in b.c                      error (member expressions are not accepted)

  One `has` and one `in`/`not in` may be combined:
    tags has "x" in flags

  Keywords are case-insensitive: NOT IN, Not In and not in are the same.
"#;

const PRECEDENCE_DOC: &str = r#"PRECEDENCE

From loosest to tightest:

  1. or
  2. and
  3. ==  !=
  4. <  >  <=  >=
  5. contains
  6. has, in, not in
  7. .field  [key]
  8. literals, identifiers, ( ... ), [ ... ]

ASSOCIATIVITY
  Every binary level groups to the left:

    a or b or c       => (a or b) or c
    a == b == c       => (a == b) == c
    a < b < c         => (a < b) < c

  `contains`, `has` and `in` do not chain. A second occurrence at the same
  level is reported as unexpected input.

EXAMPLES
  a or b and c                    => a or (b and c)
  true and false or null          => (true and false) or null
  x == 1 and y in [1, 2]          => (x == 1) and (y in [1, 2])
"#;

const ERRORS_DOC: &str = r#"ERRORS

Parsing stops at the first error. Nothing is returned on failure.

LEXICAL ERRORS
  An unrecognised character or an unterminated string:

    a = 1         Unexpected character '=' at position 2
    "open         Unterminated string starting with " at position 0

SYNTAX ERRORS
  Unexpected token           a..b, a == ), a.1
  Unexpected end of input    a and, (a
  Trailing input             a b
  Invalid scalar             a contains [1]
  Invalid array expression   1 has x, a in b.c
  Scalar member access       "s".x, (1).y
  Invalid array element      [[1]], [(a)], [1,]
  Invalid number             a digit run too large for a 64-bit float
  Nesting too deep           more than 100 nested ( ... ) or [ ... ]
"#;
