//! Expression types.
//!
//! An [`Expression`] is a symbol, a literal, or a complex expression made of
//! a head and an ordered argument sequence. Complex nodes are shared behind
//! an `Arc`; there are no back-references, so no cycle can be built.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::literal::{Literal, LiteralKind};
use crate::symbol::Symbol;

/// Inline storage for the arguments of a complex expression.
pub type Arguments = SmallVec<[Expression; 4]>;

/// The kind tag of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// A symbol.
    Symbol,
    /// An integer literal.
    Integer,
    /// A boolean literal.
    Boolean,
    /// A string literal.
    String,
    /// A complex expression.
    Complex,
}

/// The universal value type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A named atomic identifier.
    Symbol(Symbol),
    /// An integer, boolean or string.
    Literal(Literal),
    /// A head applied to arguments.
    Complex(Arc<ComplexExpression>),
}

/// A head expression applied to an ordered argument sequence.
///
/// Invariant: immutable once constructed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ComplexExpression {
    head: Expression,
    arguments: Arguments,
}

impl ComplexExpression {
    /// Creates a complex expression from a head and arguments.
    pub fn new<H, I>(head: H, arguments: I) -> Self
    where
        H: Into<Expression>,
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        Self {
            head: head.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a complex expression from already-built parts.
    #[must_use]
    pub fn from_parts(head: Expression, arguments: Arguments) -> Self {
        Self { head, arguments }
    }

    /// Returns the head.
    #[must_use]
    pub fn head(&self) -> &Expression {
        &self.head
    }

    /// Returns the head if it is a symbol.
    #[must_use]
    pub fn head_symbol(&self) -> Option<&Symbol> {
        self.head.as_symbol()
    }

    /// Returns true if the head is the given symbol.
    #[must_use]
    pub fn has_head(&self, symbol: &Symbol) -> bool {
        self.head_symbol() == Some(symbol)
    }

    /// Returns the arguments in order.
    #[must_use]
    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns true if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns a new expression with the same head and different arguments.
    #[must_use]
    pub fn with_arguments(&self, arguments: Arguments) -> Self {
        Self {
            head: self.head.clone(),
            arguments,
        }
    }

    /// Splits the expression into its head and arguments.
    #[must_use]
    pub fn into_parts(self) -> (Expression, Arguments) {
        (self.head, self.arguments)
    }
}

impl Expression {
    /// Creates a symbol expression.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Expression::Symbol(Symbol::new(name))
    }

    /// Creates a complex expression whose head is the named symbol.
    pub fn call<I>(head: &str, arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        ComplexExpression::new(Symbol::new(head), arguments).into()
    }

    /// Returns the kind of this expression.
    #[must_use]
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Symbol(_) => ExpressionKind::Symbol,
            Expression::Literal(literal) => match literal.kind() {
                LiteralKind::Integer => ExpressionKind::Integer,
                LiteralKind::Boolean => ExpressionKind::Boolean,
                LiteralKind::String => ExpressionKind::String,
            },
            Expression::Complex(_) => ExpressionKind::Complex,
        }
    }

    /// Returns true for symbols and literals.
    #[must_use]
    pub fn is_atom(&self) -> bool {
        !matches!(self, Expression::Complex(_))
    }

    /// Returns the symbol if this is one.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Expression::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the literal if this is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the complex expression if this is one.
    #[must_use]
    pub fn as_complex(&self) -> Option<&ComplexExpression> {
        match self {
            Expression::Complex(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the numeric value of an integer or boolean literal.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        self.as_literal().and_then(Literal::as_integer)
    }

    /// Returns the value of a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(Literal::as_str)
    }

    /// Returns the head of a complex expression.
    #[must_use]
    pub fn head(&self) -> Option<&Expression> {
        self.as_complex().map(ComplexExpression::head)
    }

    /// Returns the arguments of a complex expression, or an empty slice.
    #[must_use]
    pub fn arguments(&self) -> &[Expression] {
        match self {
            Expression::Complex(c) => c.arguments(),
            _ => &[],
        }
    }
}

impl From<Symbol> for Expression {
    fn from(symbol: Symbol) -> Self {
        Expression::Symbol(symbol)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}

impl From<ComplexExpression> for Expression {
    fn from(expr: ComplexExpression) -> Self {
        Expression::Complex(Arc::new(expr))
    }
}

impl From<Arc<ComplexExpression>> for Expression {
    fn from(expr: Arc<ComplexExpression>) -> Self {
        Expression::Complex(expr)
    }
}

impl From<&Expression> for Expression {
    fn from(expr: &Expression) -> Self {
        expr.clone()
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Expression::Literal(value.into())
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        Expression::Literal(value.into())
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Expression::Literal(value.into())
    }
}

/// String slices become string literals, never symbols.
impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Expression::Literal(value.into())
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Expression::Literal(value.into())
    }
}

impl fmt::Display for ComplexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.head)?;
        if let Some((first, rest)) = self.arguments.split_first() {
            write!(f, "{first}")?;
            for argument in rest {
                write!(f, ", {argument}")?;
            }
        }
        f.write_str(")")
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Symbol(s) => write!(f, "{s}"),
            Expression::Literal(l) => write!(f, "{l}"),
            Expression::Complex(c) => write!(f, "{c}"),
        }
    }
}

// Debug output mirrors Display so assertion failures stay readable.
impl fmt::Debug for ComplexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
