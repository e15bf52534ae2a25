use serde::{Deserialize, Serialize};
use std::fmt;

/// Equality and relational operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    // Equality
    /// Equal (`==`)
    #[serde(rename = "==")]
    Equal,
    /// Not equal (`!=`)
    #[serde(rename = "!=")]
    NotEqual,

    // Relational
    /// Less than (`<`)
    #[serde(rename = "<")]
    LessThan,
    /// Greater than (`>`)
    #[serde(rename = ">")]
    GreaterThan,
    /// Less than or equal (`<=`)
    #[serde(rename = "<=")]
    LessEqual,
    /// Greater than or equal (`>=`)
    #[serde(rename = ">=")]
    GreaterEqual,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(BinaryOperator::Equal),
            "!=" => Some(BinaryOperator::NotEqual),
            "<" => Some(BinaryOperator::LessThan),
            ">" => Some(BinaryOperator::GreaterThan),
            "<=" => Some(BinaryOperator::LessEqual),
            ">=" => Some(BinaryOperator::GreaterEqual),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
        }
    }
}

/// Logical connectives (`and`, `or`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }
}

/// Scalar membership operator. `contains` is the only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarOperator {
    Contains,
}

impl ScalarOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarOperator::Contains => "contains",
        }
    }
}

/// Array membership operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrayOperator {
    /// Array on the left, scalar on the right (`has`)
    #[serde(rename = "has")]
    Has,
    /// Scalar on the left, array on the right (`in`)
    #[serde(rename = "in")]
    In,
    /// Negated `in` (`not in`)
    #[serde(rename = "not in")]
    NotIn,
}

impl ArrayOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            ArrayOperator::Has => "has",
            ArrayOperator::In => "in",
            ArrayOperator::NotIn => "not in",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(BinaryOperator, LogicalOperator, ScalarOperator, ArrayOperator);
