//! Element-by-element monoid folds.
//!
//! These are the reference semantics for every fold head. The bulk engine
//! computes the same values with batched kernels and must agree with this
//! module on every input.
//!
//! Common steps for a fold node:
//! 1. No arguments: the identity.
//! 2. One argument: that argument, unwrapped and unchanged.
//! 3. Numeric folds coerce boolean arguments to the integers 0/1.
//! 4. Fold; any argument of the wrong kind, or a result that does not fit
//!    in an `i64`, leaves the node with its (coerced) arguments.

use reduct_core::{Arguments, ComplexExpression, Expression, Literal};

/// A monoid fold over the arguments of an associative head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FoldKind {
    /// Integer addition, identity 0.
    Sum,
    /// Integer multiplication, identity 1.
    Product,
    /// String concatenation, identity "".
    Concat,
}

impl FoldKind {
    /// Returns the identity element.
    #[must_use]
    pub fn identity(self) -> Literal {
        match self {
            FoldKind::Sum => Literal::Integer(0),
            FoldKind::Product => Literal::Integer(1),
            FoldKind::Concat => Literal::from(""),
        }
    }

    /// Returns true for folds over integers.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, FoldKind::Sum | FoldKind::Product)
    }

    /// Returns true if argument order does not matter.
    #[must_use]
    pub const fn is_commutative(self) -> bool {
        self.is_numeric()
    }

    /// Reduces an evaluated node element by element.
    #[must_use]
    pub fn reduce(self, node: ComplexExpression) -> Expression {
        let (head, mut arguments) = node.into_parts();
        match arguments.len() {
            0 => return self.identity().into(),
            1 => return arguments.swap_remove(0),
            _ => {}
        }

        let arguments = if self.is_numeric() {
            coerce_booleans(arguments)
        } else {
            arguments
        };

        let folded = match self {
            FoldKind::Sum => sum(&arguments),
            FoldKind::Product => product(&arguments),
            FoldKind::Concat => concat(&arguments),
        };

        folded.unwrap_or_else(|| ComplexExpression::from_parts(head, arguments).into())
    }
}

/// Rewrites boolean literals as integer literals.
pub(crate) fn coerce_booleans(arguments: Arguments) -> Arguments {
    if !arguments.iter().any(is_boolean) {
        return arguments;
    }

    arguments
        .into_iter()
        .map(|argument| match argument {
            Expression::Literal(Literal::Boolean(b)) => Expression::from(i64::from(b)),
            other => other,
        })
        .collect()
}

fn is_boolean(argument: &Expression) -> bool {
    matches!(argument, Expression::Literal(Literal::Boolean(_)))
}

fn integer(argument: &Expression) -> Option<i64> {
    match argument {
        Expression::Literal(Literal::Integer(n)) => Some(*n),
        _ => None,
    }
}

fn sum(arguments: &[Expression]) -> Option<Expression> {
    let mut total: i128 = 0;
    for argument in arguments {
        total += i128::from(integer(argument)?);
    }
    i64::try_from(total).ok().map(Expression::from)
}

fn product(arguments: &[Expression]) -> Option<Expression> {
    let mut total = Some(1i128);
    let mut saw_zero = false;
    for argument in arguments {
        let n = integer(argument)?;
        if n == 0 {
            saw_zero = true;
        } else {
            // Once it overflows, the exact product is out of range anyway.
            total = total.and_then(|t| t.checked_mul(i128::from(n)));
        }
    }

    if saw_zero {
        return Some(Expression::from(0));
    }
    total
        .and_then(|t| i64::try_from(t).ok())
        .map(Expression::from)
}

fn concat(arguments: &[Expression]) -> Option<Expression> {
    let mut out = String::new();
    for argument in arguments {
        out.push_str(argument.as_str()?);
    }
    Some(Expression::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reduct_core::{call, Symbol};

    fn reduce(kind: FoldKind, e: &Expression) -> Expression {
        kind.reduce(e.as_complex().unwrap().clone())
    }

    #[test]
    fn test_sum() {
        assert_eq!(reduce(FoldKind::Sum, &call!("Plus", 1, 2)), Expression::from(3));
        assert_eq!(
            reduce(FoldKind::Sum, &call!("Plus", 1, 2, 3, 4, 5, 6, 7, 8, 9, 10)),
            Expression::from(55)
        );
        assert_eq!(reduce(FoldKind::Sum, &call!("Plus", true, true, 5)), Expression::from(7));
    }

    #[test]
    fn test_identity_and_single_argument() {
        assert_eq!(reduce(FoldKind::Sum, &call!("Plus")), Expression::from(0));
        assert_eq!(reduce(FoldKind::Product, &call!("Times")), Expression::from(1));
        assert_eq!(reduce(FoldKind::Concat, &call!("StringJoin")), Expression::from(""));

        assert_eq!(reduce(FoldKind::Sum, &call!("Plus", 9)), Expression::from(9));
        assert_eq!(
            reduce(FoldKind::Sum, &call!("Plus", Symbol::new("A"))),
            Expression::symbol("A")
        );
        assert_eq!(reduce(FoldKind::Sum, &call!("Plus", true)), Expression::from(true));
        assert_eq!(reduce(FoldKind::Product, &call!("Times", false)), Expression::from(false));
        assert_eq!(reduce(FoldKind::Concat, &call!("StringJoin", 3)), Expression::from(3));
    }

    #[test]
    fn test_single_boolean_is_not_coerced() {
        let engine = crate::DefaultEngine::new();
        assert_eq!(
            crate::Engine::evaluate(&engine, &call!("Plus", true)).unwrap(),
            Expression::from(true)
        );
        assert_eq!(
            crate::Engine::evaluate(&engine, &call!("Plus", call!("Plus", false))).unwrap(),
            Expression::from(false)
        );
        assert_eq!(
            crate::Engine::evaluate(&engine, &call!("Plus", true, true)).unwrap(),
            Expression::from(2)
        );
    }

    #[test]
    fn test_string_disqualifies_numeric_fold() {
        let result = reduce(FoldKind::Sum, &call!("Plus", 1, true, "x"));
        assert_eq!(result, call!("Plus", 1, 1, "x"));
    }

    #[test]
    fn test_symbol_disqualifies_numeric_fold() {
        let result = reduce(FoldKind::Sum, &call!("Plus", Symbol::new("A"), 55));
        assert_eq!(result, call!("Plus", Symbol::new("A"), 55));
    }

    #[test]
    fn test_sum_overflow_leaves_node() {
        let e = call!("Plus", i64::MAX, 1);
        assert_eq!(reduce(FoldKind::Sum, &e), e);

        // Intermediate overflow that cancels out still folds.
        let e = call!("Plus", i64::MAX, 1, -1);
        assert_eq!(reduce(FoldKind::Sum, &e), Expression::from(i64::MAX));
    }

    #[test]
    fn test_product() {
        assert_eq!(reduce(FoldKind::Product, &call!("Times", 2, 3, 7)), Expression::from(42));
        assert_eq!(reduce(FoldKind::Product, &call!("Times", 5, false)), Expression::from(0));
        assert_eq!(
            reduce(FoldKind::Product, &call!("Times", i64::MAX, i64::MAX, i64::MAX, 0)),
            Expression::from(0)
        );

        let e = call!("Times", i64::MAX, 2);
        assert_eq!(reduce(FoldKind::Product, &e), e);

        let e = call!("Times", 0, "x");
        assert_eq!(reduce(FoldKind::Product, &e), e);
    }

    #[test]
    fn test_concat() {
        assert_eq!(
            reduce(FoldKind::Concat, &call!("StringJoin", "howdie", " ", "world")),
            Expression::from("howdie world")
        );

        // No boolean coercion for strings.
        let e = call!("StringJoin", "a", true);
        assert_eq!(reduce(FoldKind::Concat, &e), e);
    }
}
