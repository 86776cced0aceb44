//! Property-based tests for engine equivalence.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use reduct_core::Expression;

    use crate::{BulkConfig, BulkEngine, DefaultEngine, Engine};

    // Atoms skewed toward small values so products rarely overflow, with
    // the extremes mixed in so some do.
    fn atom() -> impl Strategy<Value = Expression> {
        prop_oneof![
            4 => (-20i64..20i64).prop_map(Expression::from),
            1 => prop_oneof![Just(i64::MAX), Just(i64::MIN), Just(0)].prop_map(Expression::from),
            3 => any::<bool>().prop_map(Expression::from),
            2 => "[a-c]{0,3}".prop_map(Expression::from),
            1 => "[A-C]".prop_map(|name| Expression::symbol(&name)),
        ]
    }

    fn fold_head() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("Plus"), Just("Times"), Just("StringJoin")]
    }

    // Homogeneous runs, so the batched path is actually taken.
    fn run() -> impl Strategy<Value = Expression> {
        prop_oneof![
            (fold_head(), prop::collection::vec(-50i64..50i64, 0..40))
                .prop_map(|(h, v)| Expression::call(h, v.into_iter().map(Expression::from))),
            (fold_head(), prop::collection::vec(any::<bool>(), 0..200))
                .prop_map(|(h, v)| Expression::call(h, v.into_iter().map(Expression::from))),
            (fold_head(), prop::collection::vec("[a-z]{0,3}", 0..40))
                .prop_map(|(h, v)| Expression::call(h, v.into_iter().map(Expression::from))),
        ]
    }

    fn expr() -> impl Strategy<Value = Expression> {
        prop_oneof![atom(), run()].prop_recursive(3, 48, 12, |inner| {
            (
                prop_oneof![Just("Plus"), Just("Times"), Just("StringJoin"), Just("f")],
                prop::collection::vec(inner, 0..12),
            )
                .prop_map(|(head, args)| Expression::call(head, args))
        })
    }

    fn eager_bulk() -> BulkEngine {
        BulkEngine::with_config(BulkConfig {
            min_run: 2,
            parallel_threshold: 1,
            chunk_size: 64,
        })
    }

    proptest! {
        #[test]
        fn bulk_matches_default(e in expr()) {
            let expected = DefaultEngine::new().evaluate(&e).unwrap();
            prop_assert_eq!(BulkEngine::new().evaluate(&e).unwrap(), expected.clone());
            prop_assert_eq!(eager_bulk().evaluate(&e).unwrap(), expected);
        }

        #[test]
        fn evaluation_is_deterministic(e in expr()) {
            let engine = eager_bulk();
            prop_assert_eq!(engine.evaluate(&e).unwrap(), engine.evaluate(&e).unwrap());
        }

        #[test]
        fn terminals_evaluate_to_themselves(e in atom()) {
            prop_assert_eq!(DefaultEngine::new().evaluate(&e).unwrap(), e.clone());
            prop_assert_eq!(eager_bulk().evaluate(&e).unwrap(), e);
        }

        #[test]
        fn evaluation_reaches_a_fixed_point(e in expr()) {
            let engine = DefaultEngine::new();
            let once = engine.evaluate(&e).unwrap();
            prop_assert_eq!(engine.evaluate(&once).unwrap(), once);
        }
    }
}
