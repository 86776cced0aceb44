//! Engine selection.
//!
//! An [`EngineRegistry`] holds the active engine. Evaluations read the
//! active handle once, clone it, and release the lock before evaluating, so
//! a swap never blocks on or interrupts an evaluation already in flight:
//! that evaluation finishes on the engine it started with.
//!
//! Registries are ordinary values. Tests and embedders create their own;
//! the facade crate keeps one process-wide instance.

use parking_lot::RwLock;
use reduct_core::Expression;

use crate::config::{EngineKind, ENGINE_ENV_VAR};
use crate::engine::{Engine, EngineHandle};
use crate::error::Result;

/// Holds the engine used by [`EngineRegistry::evaluate`].
#[derive(Debug, Default)]
pub struct EngineRegistry {
    active: RwLock<EngineHandle>,
}

impl EngineRegistry {
    /// Creates a registry using the default engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry using the given engine.
    #[must_use]
    pub fn with_engine(engine: EngineHandle) -> Self {
        Self {
            active: RwLock::new(engine),
        }
    }

    /// Creates a registry whose engine is chosen by [`ENGINE_ENV_VAR`].
    ///
    /// An unset variable selects the default engine. An unrecognized value
    /// is logged and also selects the default engine.
    #[must_use]
    pub fn from_env() -> Self {
        let kind = match EngineKind::from_env() {
            Ok(kind) => kind.unwrap_or(EngineKind::Default),
            Err(err) => {
                tracing::warn!(var = ENGINE_ENV_VAR, error = %err, "falling back to the default engine");
                EngineKind::Default
            }
        };
        Self::with_engine(EngineHandle::from_kind(kind).unwrap_or_default())
    }

    /// Returns a handle to the active engine.
    #[must_use]
    pub fn active(&self) -> EngineHandle {
        self.active.read().clone()
    }

    /// Makes `engine` the active engine and returns the one it replaces.
    ///
    /// Evaluations that already hold the previous engine finish on it.
    pub fn set_engine(&self, engine: EngineHandle) -> EngineHandle {
        let kind = engine.kind();
        let previous = std::mem::replace(&mut *self.active.write(), engine);
        tracing::debug!(from = %previous.kind(), to = %kind, "engine swapped");
        previous
    }

    /// Evaluates an expression with the active engine.
    ///
    /// # Errors
    ///
    /// Propagates the active engine's error unchanged.
    pub fn evaluate(&self, expr: &Expression) -> Result<Expression> {
        let engine = self.active();
        engine.evaluate(expr)
    }
}
