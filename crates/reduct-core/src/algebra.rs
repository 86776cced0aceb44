//! Structural composition of expressions.
//!
//! Combining two expressions under an operator never evaluates anything.
//! Operands already headed by the same operator are spliced into the result
//! so that associative chains stay flat:
//!
//! ```
//! use reduct_core::{plus, Expression};
//!
//! let a = Expression::symbol("A");
//! let b = Expression::symbol("B");
//! let c = Expression::symbol("C");
//!
//! let left = plus(plus(a.clone(), b.clone()), c.clone());
//! let right = plus(a, plus(b, c));
//! assert_eq!(left, right);
//! assert_eq!(left.to_string(), "Plus(A, B, C)");
//! ```

use std::ops::{Add, Mul};
use std::sync::Arc;

use crate::expr::{Arguments, ComplexExpression, Expression};
use crate::symbol::{names, Symbol};

/// Combines two operands into `op(lhs, rhs)`, flattening same-operator operands.
#[must_use]
pub fn combine(op: &Symbol, lhs: Expression, rhs: Expression) -> Expression {
    let mut arguments = Arguments::new();
    splice(op, lhs, &mut arguments);
    splice(op, rhs, &mut arguments);
    ComplexExpression::from_parts(Expression::Symbol(op.clone()), arguments).into()
}

/// `Plus(lhs, rhs)` with flattening.
#[must_use]
pub fn plus(lhs: Expression, rhs: Expression) -> Expression {
    combine(&Symbol::new(names::PLUS), lhs, rhs)
}

/// `Times(lhs, rhs)` with flattening.
#[must_use]
pub fn times(lhs: Expression, rhs: Expression) -> Expression {
    combine(&Symbol::new(names::TIMES), lhs, rhs)
}

fn splice(op: &Symbol, operand: Expression, out: &mut Arguments) {
    match operand {
        Expression::Complex(complex) if complex.has_head(op) => {
            // Reuse the argument buffer when nobody else holds the node.
            match Arc::try_unwrap(complex) {
                Ok(owned) => out.extend(owned.into_parts().1),
                Err(shared) => out.extend(shared.arguments().iter().cloned()),
            }
        }
        other => out.push(other),
    }
}

impl Add for Expression {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        plus(self, rhs)
    }
}

impl Mul for Expression {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        times(self, rhs)
    }
}
