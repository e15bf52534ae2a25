use crate::ast::{ArrayOperator, BinaryOperator, LogicalOperator, ScalarOperator};
use serde::{Deserialize, Serialize};
use std::fmt;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Abstract Syntax Tree node representing a parsed filter expression.
///
/// Serialized with a `type` discriminant naming the variant followed by the
/// variant's fields. `parenthesized` is only written when the source wrapped
/// the node in parentheses; it never changes the shape of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    // References
    /// Bare field name
    ///
    /// # Example
    /// ```text
    /// status
    /// ```
    Identifier {
        name: String,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    // Literals
    /// Number literal, always stored as `f64`
    ///
    /// # Example
    /// ```text
    /// 42
    /// 3.14
    /// ```
    NumericLiteral {
        value: f64,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    /// String literal with quotes stripped and no escape processing
    ///
    /// # Example
    /// ```text
    /// "hello"
    /// 'hello'
    /// ```
    StringLiteral {
        value: String,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    /// Boolean literal
    BooleanLiteral {
        value: bool,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    /// Null literal
    NullLiteral {
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    // Operations
    /// `and` / `or`
    LogicalExpression {
        operator: LogicalOperator,
        left: Box<Expr>,
        right: Box<Expr>,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    /// Equality and relational comparisons
    ///
    /// # Example
    /// ```text
    /// price >= 100
    /// ```
    BinaryExpression {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    /// Field or index access
    ///
    /// `computed` is false for `object.property` (property is always an
    /// `Identifier`) and true for `object[property]`.
    ///
    /// # Examples
    /// ```text
    /// user.name
    /// items[0]
    /// ```
    MemberExpression {
        object: Box<Expr>,
        property: Box<Expr>,
        computed: bool,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    /// Array literal
    ///
    /// # Example
    /// ```text
    /// [1, "two", user.id]
    /// ```
    ArrayLiteralExpression {
        elements: Vec<Expr>,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    /// `contains`; neither operand is an array literal
    ScalarExpression {
        operator: ScalarOperator,
        left: Box<Expr>,
        right: Box<Expr>,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },

    /// `has`, `in` and `not in`
    ///
    /// # Examples
    /// ```text
    /// tags has "urgent"
    /// status not in ["closed", "archived"]
    /// ```
    ArrayExpression {
        operator: ArrayOperator,
        left: Box<Expr>,
        right: Box<Expr>,
        #[serde(default, skip_serializing_if = "is_false")]
        parenthesized: bool,
    },
}

/// Variant names of [`Expr`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Identifier,
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    LogicalExpression,
    BinaryExpression,
    MemberExpression,
    ArrayLiteralExpression,
    ScalarExpression,
    ArrayExpression,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Identifier => "Identifier",
            NodeKind::NumericLiteral => "NumericLiteral",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::BooleanLiteral => "BooleanLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::LogicalExpression => "LogicalExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::ArrayLiteralExpression => "ArrayLiteralExpression",
            NodeKind::ScalarExpression => "ScalarExpression",
            NodeKind::ArrayExpression => "ArrayExpression",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Constructors. All of them build unparenthesized nodes.
impl Expr {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier {
            name: name.into(),
            parenthesized: false,
        }
    }

    pub fn number(value: f64) -> Self {
        Expr::NumericLiteral {
            value,
            parenthesized: false,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLiteral {
            value: value.into(),
            parenthesized: false,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Expr::BooleanLiteral {
            value,
            parenthesized: false,
        }
    }

    pub fn null() -> Self {
        Expr::NullLiteral {
            parenthesized: false,
        }
    }

    pub fn array(elements: Vec<Expr>) -> Self {
        Expr::ArrayLiteralExpression {
            elements,
            parenthesized: false,
        }
    }

    /// `object.property`
    pub fn member(object: Expr, property: impl Into<String>) -> Self {
        Expr::MemberExpression {
            object: Box::new(object),
            property: Box::new(Expr::identifier(property)),
            computed: false,
            parenthesized: false,
        }
    }

    /// `object[property]`
    pub fn computed_member(object: Expr, property: Expr) -> Self {
        Expr::MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed: true,
            parenthesized: false,
        }
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            parenthesized: false,
        }
    }

    pub fn logical(operator: LogicalOperator, left: Expr, right: Expr) -> Self {
        Expr::LogicalExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            parenthesized: false,
        }
    }

    pub fn scalar(operator: ScalarOperator, left: Expr, right: Expr) -> Self {
        Expr::ScalarExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            parenthesized: false,
        }
    }

    pub fn array_op(operator: ArrayOperator, left: Expr, right: Expr) -> Self {
        Expr::ArrayExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            parenthesized: false,
        }
    }
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Identifier { .. } => NodeKind::Identifier,
            Expr::NumericLiteral { .. } => NodeKind::NumericLiteral,
            Expr::StringLiteral { .. } => NodeKind::StringLiteral,
            Expr::BooleanLiteral { .. } => NodeKind::BooleanLiteral,
            Expr::NullLiteral { .. } => NodeKind::NullLiteral,
            Expr::LogicalExpression { .. } => NodeKind::LogicalExpression,
            Expr::BinaryExpression { .. } => NodeKind::BinaryExpression,
            Expr::MemberExpression { .. } => NodeKind::MemberExpression,
            Expr::ArrayLiteralExpression { .. } => NodeKind::ArrayLiteralExpression,
            Expr::ScalarExpression { .. } => NodeKind::ScalarExpression,
            Expr::ArrayExpression { .. } => NodeKind::ArrayExpression,
        }
    }

    /// Number, string, boolean and null literals. Array literals are not
    /// literal nodes.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expr::NumericLiteral { .. }
                | Expr::StringLiteral { .. }
                | Expr::BooleanLiteral { .. }
                | Expr::NullLiteral { .. }
        )
    }

    pub fn is_parenthesized(&self) -> bool {
        *self.parenthesized_flag()
    }

    /// Returns the same node marked as wrapped in parentheses.
    pub fn parenthesized(mut self) -> Self {
        *self.parenthesized_flag_mut() = true;
        self
    }

    fn parenthesized_flag(&self) -> &bool {
        match self {
            Expr::Identifier { parenthesized, .. }
            | Expr::NumericLiteral { parenthesized, .. }
            | Expr::StringLiteral { parenthesized, .. }
            | Expr::BooleanLiteral { parenthesized, .. }
            | Expr::NullLiteral { parenthesized }
            | Expr::LogicalExpression { parenthesized, .. }
            | Expr::BinaryExpression { parenthesized, .. }
            | Expr::MemberExpression { parenthesized, .. }
            | Expr::ArrayLiteralExpression { parenthesized, .. }
            | Expr::ScalarExpression { parenthesized, .. }
            | Expr::ArrayExpression { parenthesized, .. } => parenthesized,
        }
    }

    fn parenthesized_flag_mut(&mut self) -> &mut bool {
        match self {
            Expr::Identifier { parenthesized, .. }
            | Expr::NumericLiteral { parenthesized, .. }
            | Expr::StringLiteral { parenthesized, .. }
            | Expr::BooleanLiteral { parenthesized, .. }
            | Expr::NullLiteral { parenthesized }
            | Expr::LogicalExpression { parenthesized, .. }
            | Expr::BinaryExpression { parenthesized, .. }
            | Expr::MemberExpression { parenthesized, .. }
            | Expr::ArrayLiteralExpression { parenthesized, .. }
            | Expr::ScalarExpression { parenthesized, .. }
            | Expr::ArrayExpression { parenthesized, .. } => parenthesized,
        }
    }
}

/// Renders the expression back to source text.
///
/// Parentheses are emitted exactly where `parenthesized` is set, so a tree
/// produced by the parser renders to text that parses back to the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_parenthesized() {
            f.write_str("(")?;
        }

        match self {
            Expr::Identifier { name, .. } => f.write_str(name)?,
            Expr::NumericLiteral { value, .. } => write!(f, "{}", value)?,
            Expr::StringLiteral { value, .. } => {
                // No escapes in the language, so pick the quote that is absent.
                if value.contains('"') {
                    write!(f, "'{}'", value)?
                } else {
                    write!(f, "\"{}\"", value)?
                }
            }
            Expr::BooleanLiteral { value, .. } => write!(f, "{}", value)?,
            Expr::NullLiteral { .. } => f.write_str("null")?,
            Expr::LogicalExpression {
                operator,
                left,
                right,
                ..
            } => write!(f, "{} {} {}", left, operator, right)?,
            Expr::BinaryExpression {
                operator,
                left,
                right,
                ..
            } => write!(f, "{} {} {}", left, operator, right)?,
            Expr::ScalarExpression {
                operator,
                left,
                right,
                ..
            } => write!(f, "{} {} {}", left, operator, right)?,
            Expr::ArrayExpression {
                operator,
                left,
                right,
                ..
            } => write!(f, "{} {} {}", left, operator, right)?,
            Expr::MemberExpression {
                object,
                property,
                computed,
                ..
            } => {
                if *computed {
                    write!(f, "{}[{}]", object, property)?
                } else {
                    write!(f, "{}.{}", object, property)?
                }
            }
            Expr::ArrayLiteralExpression { elements, .. } => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")?;
            }
        }

        if self.is_parenthesized() {
            f.write_str(")")?;
        }
        Ok(())
    }
}
