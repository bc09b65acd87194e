use std::fmt;

use rust_decimal::Decimal;

use crate::util::num::canonical;

/// Represents a list element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A decimal number.
    Number(Decimal),
    /// A text literal, kept exactly as written.
    Text(String),
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Value {
    /// Returns the number held by `self`, or `None` for text.
    #[must_use]
    pub const fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", canonical(*n)),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}
