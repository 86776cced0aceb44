//! Property-based tests for the expression model and algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{plus, times, Expression, Literal, Symbol};

    // Strategy for generating atoms
    fn atom() -> impl Strategy<Value = Expression> {
        prop_oneof![
            (-1000i64..1000i64).prop_map(Expression::from),
            any::<bool>().prop_map(Expression::from),
            "[a-z]{0,6}".prop_map(Expression::from),
            "[A-Z][a-z]{0,4}".prop_map(|name| Expression::symbol(&name)),
        ]
    }

    // Strategy for small trees mixing Plus chains with other heads
    fn expr() -> impl Strategy<Value = Expression> {
        atom().prop_recursive(3, 24, 4, |inner| {
            (
                prop_oneof![Just("Plus"), Just("Times"), Just("f")],
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|(head, args)| Expression::call(head, args))
        })
    }

    proptest! {
        #[test]
        fn plus_flattening_is_associative(a in expr(), b in expr(), c in expr()) {
            let left = plus(plus(a.clone(), b.clone()), c.clone());
            let right = plus(a, plus(b, c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn times_flattening_is_associative(a in expr(), b in expr(), c in expr()) {
            let left = times(times(a.clone(), b.clone()), c.clone());
            let right = times(a, times(b, c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn plus_of_non_plus_operands_is_binary(a in atom(), b in atom()) {
            let sum = plus(a.clone(), b.clone());
            prop_assert_eq!(sum.arguments(), &[a, b][..]);
        }

        #[test]
        fn symbol_equality_follows_names(x in "[a-z]{1,4}", y in "[a-z]{1,4}") {
            prop_assert_eq!(Symbol::new(&x) == Symbol::new(&y), x == y);
        }

        #[test]
        fn integer_ordering_is_native(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(
                Literal::from(a).partial_cmp(&Literal::from(b)),
                Some(a.cmp(&b))
            );
        }

        #[test]
        fn structural_equality_is_reflexive_across_clones(e in expr()) {
            let copy = e.clone();
            prop_assert_eq!(&e, &copy);
            prop_assert_eq!(e.to_string(), copy.to_string());
        }
    }
}
