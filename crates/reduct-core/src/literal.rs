//! Literal values.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// The kind tag of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// A 64-bit signed integer.
    Integer,
    /// A boolean.
    Boolean,
    /// A UTF-8 string.
    String,
}

impl LiteralKind {
    /// Returns a lowercase name for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LiteralKind::Integer => "integer",
            LiteralKind::Boolean => "boolean",
            LiteralKind::String => "string",
        }
    }
}

/// A literal value of exactly one kind.
///
/// Booleans take part in numeric contexts as 0 and 1, see
/// [`Literal::as_integer`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean.
    Boolean(bool),
    /// A string.
    String(Arc<str>),
}

impl Literal {
    /// Returns the kind of this literal.
    #[must_use]
    pub const fn kind(&self) -> LiteralKind {
        match self {
            Literal::Integer(_) => LiteralKind::Integer,
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::String(_) => LiteralKind::String,
        }
    }

    /// Returns the numeric value, coercing booleans to 0/1.
    ///
    /// Returns `None` for strings.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Literal::Integer(n) => Some(*n),
            Literal::Boolean(b) => Some(i64::from(*b)),
            Literal::String(_) => None,
        }
    }

    /// Returns the boolean value if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string value if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for integers and booleans.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Literal::String(_))
    }
}

/// Literals of the same kind order natively; different kinds are unordered.
impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Literal::Integer(a), Literal::Integer(b)) => Some(a.cmp(b)),
            (Literal::Boolean(a), Literal::Boolean(b)) => Some(a.cmp(b)),
            (Literal::String(a), Literal::String(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{n}"),
            Literal::Boolean(true) => f.write_str("True"),
            Literal::Boolean(false) => f.write_str("False"),
            Literal::String(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(i64::from(value))
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(Arc::from(value))
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(Arc::from(value))
    }
}
