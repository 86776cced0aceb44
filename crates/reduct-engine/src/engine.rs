//! The engine contract and the tagged engine handle.

use std::fmt;
use std::sync::Arc;

use reduct_core::Expression;

use crate::bulk::BulkEngine;
use crate::config::EngineKind;
use crate::default::DefaultEngine;
use crate::error::Result;

/// A pluggable evaluator.
///
/// Implementations must be deterministic: the same input evaluated by the
/// same engine always gives the same output. They must not retain
/// references into their input or mutate it.
pub trait Engine: Send + Sync {
    /// A short name for diagnostics.
    fn name(&self) -> &str;

    /// Evaluates an expression.
    ///
    /// # Errors
    ///
    /// Returns an error only when the engine itself fails; non-reducible
    /// input yields a partial result instead. The built-in engines fail
    /// with `DepthExceeded` on input nested deeper than
    /// [`MAX_DEPTH`](crate::MAX_DEPTH).
    fn evaluate(&self, expr: &Expression) -> Result<Expression>;
}

impl<E: Engine + ?Sized> Engine for Arc<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&self, expr: &Expression) -> Result<Expression> {
        (**self).evaluate(expr)
    }
}

/// A cheaply clonable handle to one of the engine variants.
#[derive(Clone)]
pub enum EngineHandle {
    /// The element-by-element term rewriter.
    Default(Arc<DefaultEngine>),
    /// The batched-fold engine.
    Bulk(Arc<BulkEngine>),
    /// Any other conforming engine, typically an external adapter.
    External(Arc<dyn Engine>),
}

impl EngineHandle {
    /// A default engine with the standard rules.
    #[must_use]
    pub fn default_engine() -> Self {
        EngineHandle::Default(Arc::new(DefaultEngine::new()))
    }

    /// A bulk engine with the standard rules and default configuration.
    #[must_use]
    pub fn bulk() -> Self {
        EngineHandle::Bulk(Arc::new(BulkEngine::new()))
    }

    /// Wraps any engine as an external handle.
    pub fn external(engine: impl Engine + 'static) -> Self {
        EngineHandle::External(Arc::new(engine))
    }

    /// Creates a fresh built-in engine of the given kind.
    ///
    /// Returns `None` for [`EngineKind::External`], which has no built-in
    /// implementation.
    #[must_use]
    pub fn from_kind(kind: EngineKind) -> Option<Self> {
        match kind {
            EngineKind::Default => Some(Self::default_engine()),
            EngineKind::Bulk => Some(Self::bulk()),
            EngineKind::External => None,
        }
    }

    /// Returns the variant tag.
    #[must_use]
    pub fn kind(&self) -> EngineKind {
        match self {
            EngineHandle::Default(_) => EngineKind::Default,
            EngineHandle::Bulk(_) => EngineKind::Bulk,
            EngineHandle::External(_) => EngineKind::External,
        }
    }

    /// Returns true if both handles point at the same engine instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EngineHandle::Default(a), EngineHandle::Default(b)) => Arc::ptr_eq(a, b),
            (EngineHandle::Bulk(a), EngineHandle::Bulk(b)) => Arc::ptr_eq(a, b),
            (EngineHandle::External(a), EngineHandle::External(b)) => {
                Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
            }
            _ => false,
        }
    }
}

impl Default for EngineHandle {
    fn default() -> Self {
        Self::default_engine()
    }
}

impl From<DefaultEngine> for EngineHandle {
    fn from(engine: DefaultEngine) -> Self {
        EngineHandle::Default(Arc::new(engine))
    }
}

impl From<BulkEngine> for EngineHandle {
    fn from(engine: BulkEngine) -> Self {
        EngineHandle::Bulk(Arc::new(engine))
    }
}

impl Engine for EngineHandle {
    fn name(&self) -> &str {
        match self {
            EngineHandle::Default(engine) => engine.name(),
            EngineHandle::Bulk(engine) => engine.name(),
            EngineHandle::External(engine) => engine.name(),
        }
    }

    fn evaluate(&self, expr: &Expression) -> Result<Expression> {
        match self {
            EngineHandle::Default(engine) => engine.evaluate(expr),
            EngineHandle::Bulk(engine) => engine.evaluate(expr),
            EngineHandle::External(engine) => engine.evaluate(expr),
        }
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EngineHandle::{:?}({})", self.kind(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reduct_core::call;

    struct Echo;

    impl Engine for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn evaluate(&self, expr: &Expression) -> Result<Expression> {
            Ok(expr.clone())
        }
    }

    #[test]
    fn test_kinds_and_names() {
        assert_eq!(EngineHandle::default_engine().kind(), EngineKind::Default);
        assert_eq!(EngineHandle::bulk().kind(), EngineKind::Bulk);
        assert_eq!(EngineHandle::external(Echo).kind(), EngineKind::External);

        assert_eq!(EngineHandle::default_engine().name(), "default");
        assert_eq!(EngineHandle::bulk().name(), "bulk");
        assert_eq!(EngineHandle::external(Echo).name(), "echo");
    }

    #[test]
    fn test_from_kind() {
        assert_eq!(
            EngineHandle::from_kind(EngineKind::Bulk).map(|h| h.kind()),
            Some(EngineKind::Bulk)
        );
        assert!(EngineHandle::from_kind(EngineKind::External).is_none());
    }

    #[test]
    fn test_handle_dispatch() {
        let e = call!("Plus", 1, 2);

        assert_eq!(EngineHandle::default_engine().evaluate(&e).unwrap(), Expression::from(3));
        assert_eq!(EngineHandle::bulk().evaluate(&e).unwrap(), Expression::from(3));
        assert_eq!(EngineHandle::external(Echo).evaluate(&e).unwrap(), e);
    }

    #[test]
    fn test_ptr_eq() {
        let a = EngineHandle::bulk();
        let b = a.clone();

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&EngineHandle::bulk()));
        assert!(!a.ptr_eq(&EngineHandle::default_engine()));
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", EngineHandle::bulk()),
            "EngineHandle::Bulk(bulk)"
        );
    }
}
