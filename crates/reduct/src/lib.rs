//! # reduct
//!
//! Symbolic expressions with a swappable evaluation engine.
//!
//! This crate ties the expression model of `reduct-core` to the engines of
//! `reduct-engine` and adds a process-wide engine registry behind the free
//! functions [`evaluate`] and [`set_engine`].
//!
//! ```
//! use reduct::prelude::*;
//!
//! let e = call!("Plus", Symbol::new("A"), call!("Plus", 1, 2, 3));
//! assert_eq!(reduct::evaluate(&e).unwrap(), call!("Plus", Symbol::new("A"), 6));
//! ```
//!
//! The process-wide engine is chosen once, on first use, from the
//! `REDUCT_ENGINE` environment variable (`default` or `bulk`). Code that
//! needs isolation should build its own [`EngineRegistry`] instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::sync::OnceLock;

pub use reduct_core::{
    call, combine, plus, times, Arguments, ComplexExpression, ExprError, Expression,
    ExpressionKind, Literal, LiteralKind, Symbol, SymbolTable,
};
pub use reduct_engine::{
    Backend, BackendError, BulkConfig, BulkEngine, DefaultEngine, Engine, EngineError,
    EngineHandle, EngineKind, EngineRegistry, ExternalEngine, FoldKind, Rule, RuleTable,
    ENGINE_ENV_VAR,
};

/// Commonly used items.
pub mod prelude {
    pub use reduct_core::{call, plus, times, ComplexExpression, Expression, Literal, Symbol};
    pub use reduct_engine::{BulkEngine, DefaultEngine, Engine, EngineHandle, EngineRegistry};
}

/// Returns the process-wide registry, creating it on first use.
#[must_use]
pub fn global() -> &'static EngineRegistry {
    static GLOBAL: OnceLock<EngineRegistry> = OnceLock::new();
    GLOBAL.get_or_init(|| {
        let registry = EngineRegistry::from_env();
        tracing::debug!(engine = %registry.active().kind(), "process-wide registry initialized");
        registry
    })
}

/// Evaluates an expression with the process-wide active engine.
///
/// # Errors
///
/// Returns the active engine's error, such as an unknown delegate named by
/// `EvaluateInEngine` or a failing external backend.
pub fn evaluate(expr: &Expression) -> Result<Expression, EngineError> {
    global().evaluate(expr)
}

/// Replaces the process-wide active engine and returns the previous one.
pub fn set_engine(engine: EngineHandle) -> EngineHandle {
    global().set_engine(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals() {
        for e in [
            Expression::from(7),
            Expression::from(false),
            Expression::from("Test!"),
            Expression::symbol("A"),
        ] {
            assert_eq!(evaluate(&e).unwrap(), e);
        }
    }

    #[test]
    fn test_numeric_folds() {
        assert_eq!(evaluate(&call!("Plus", 1, 2)).unwrap(), Expression::from(3));
        assert_eq!(
            evaluate(&call!("Plus", 1, true, "x")).unwrap(),
            call!("Plus", 1, 1, "x")
        );
        assert_eq!(
            evaluate(&call!("Plus", 1, 2, 3, 4, 5, 6, 7, 8, 9, 10)).unwrap(),
            Expression::from(55)
        );
        assert_eq!(evaluate(&call!("Times", 6, 7)).unwrap(), Expression::from(42));
    }

    #[test]
    fn test_partial_evaluation() {
        let e = call!("Unknown", 1, 2);
        assert_eq!(evaluate(&e).unwrap(), e);

        let e = call!("Plus", Symbol::new("A"), call!("Plus", 1, 2, 3, 4, 5, 6, 7, 8, 9, 10));
        assert_eq!(evaluate(&e).unwrap(), call!("Plus", Symbol::new("A"), 55));
    }

    #[test]
    fn test_algebra_then_evaluate() {
        let a = Expression::symbol("A");
        let e = (a.clone() + Expression::from(2)) + Expression::from(3);
        assert_eq!(e, call!("Plus", a.clone(), 2, 3));
        assert_eq!(evaluate(&e).unwrap(), call!("Plus", a, 2, 3));
    }

    #[test]
    fn test_raw_values() {
        let e = Expression::call_raw(
            "Plus",
            &[serde_json::json!(1), serde_json::json!(true), serde_json::json!(40)],
        )
        .unwrap();
        assert_eq!(evaluate(&e).unwrap(), Expression::from(42));
        assert!(Expression::call_raw("Plus", &[serde_json::json!(1.5)]).is_err());
    }

    // The only test that touches the process-wide slot, so the other tests
    // see the same results whichever engine is active.
    #[test]
    fn test_global_swap() {
        let e = call!("Plus", 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);

        let previous = set_engine(EngineHandle::bulk());
        assert_eq!(global().active().kind(), EngineKind::Bulk);
        assert_eq!(evaluate(&e).unwrap(), Expression::from(55));

        let bulk = set_engine(previous);
        assert_eq!(bulk.kind(), EngineKind::Bulk);
        assert_eq!(evaluate(&e).unwrap(), Expression::from(55));
    }
}
