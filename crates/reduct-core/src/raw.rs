//! Coercion of dynamically typed host values.
//!
//! Bindings hand over untyped values; these are represented as
//! `serde_json::Value`. Integers, booleans and strings become literals,
//! everything else is rejected with [`ExprError::InvalidLiteralKind`].

use serde_json::Value;

use crate::error::{ExprError, Result};
use crate::expr::{ComplexExpression, Expression};
use crate::literal::Literal;
use crate::symbol::Symbol;

impl Literal {
    /// Converts a raw host value into a literal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLiteralKind` for null, floats, integers outside the
    /// signed 64-bit range, arrays and objects.
    pub fn from_raw(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(Literal::Boolean(*b)),
            Value::String(s) => Ok(Literal::from(s.as_str())),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Literal::Integer(i)),
                None if n.is_u64() => Err(ExprError::invalid_literal(format!(
                    "integer {n} outside the 64-bit signed range"
                ))),
                None => Err(ExprError::invalid_literal(format!("float {n}"))),
            },
            Value::Null => Err(ExprError::invalid_literal("null")),
            Value::Array(_) => Err(ExprError::invalid_literal("array")),
            Value::Object(_) => Err(ExprError::invalid_literal("object")),
        }
    }
}

impl TryFrom<&Value> for Literal {
    type Error = ExprError;

    fn try_from(value: &Value) -> Result<Self> {
        Literal::from_raw(value)
    }
}

impl Expression {
    /// Converts a raw host value into a literal expression.
    ///
    /// # Errors
    ///
    /// See [`Literal::from_raw`].
    pub fn from_raw(value: &Value) -> Result<Self> {
        Literal::from_raw(value).map(Expression::Literal)
    }

    /// Builds `head(args...)` from raw host values.
    ///
    /// The first invalid argument aborts construction.
    ///
    /// # Errors
    ///
    /// See [`Literal::from_raw`].
    pub fn call_raw(head: &str, arguments: &[Value]) -> Result<Self> {
        let arguments = arguments
            .iter()
            .map(Expression::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Ok(ComplexExpression::new(Symbol::new(head), arguments).into())
    }
}
