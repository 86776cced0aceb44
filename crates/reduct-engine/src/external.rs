//! Adapter for engines that live outside the process.
//!
//! A [`Backend`] ships an expression to some external system and reads an
//! expression back. [`ExternalEngine`] turns any backend into an [`Engine`]:
//! transport failures become [`EngineError::Backend`], and the `True` and
//! `False` symbols such systems return are read back as boolean literals.

use std::error::Error;
use std::sync::Arc;

use reduct_core::symbol::names;
use reduct_core::{ComplexExpression, Expression, Literal};

use crate::engine::Engine;
use crate::error::{EngineError, Result};

/// Error type returned by backends.
pub type BackendError = Box<dyn Error + Send + Sync>;

/// A transport to an external evaluator.
pub trait Backend: Send + Sync {
    /// A short name for diagnostics.
    fn name(&self) -> &str;

    /// Submits an expression and waits for the evaluated result.
    ///
    /// # Errors
    ///
    /// Returns whatever error the transport or the remote system reports.
    fn submit(&self, expr: &Expression) -> std::result::Result<Expression, BackendError>;
}

/// An [`Engine`] backed by a [`Backend`].
#[derive(Clone, Debug, Default)]
pub struct ExternalEngine<B> {
    backend: B,
}

impl<B: Backend> ExternalEngine<B> {
    /// Wraps a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend> Engine for ExternalEngine<B> {
    fn name(&self) -> &str {
        self.backend.name()
    }

    fn evaluate(&self, expr: &Expression) -> Result<Expression> {
        let result = self.backend.submit(expr).map_err(|err| {
            tracing::debug!(backend = self.backend.name(), error = %err, "backend failed");
            EngineError::Backend {
                backend: self.backend.name().to_string(),
                message: err.to_string(),
            }
        })?;
        Ok(normalize(result))
    }
}

/// Rewrites `True`/`False` symbols anywhere in the tree as boolean literals.
fn normalize(expr: Expression) -> Expression {
    match expr {
        Expression::Symbol(symbol) => match symbol.name() {
            names::TRUE => Literal::Boolean(true).into(),
            names::FALSE => Literal::Boolean(false).into(),
            _ => Expression::Symbol(symbol),
        },
        Expression::Literal(_) => expr,
        Expression::Complex(node) => {
            let (head, arguments) = match Arc::try_unwrap(node) {
                Ok(node) => node.into_parts(),
                Err(shared) => (shared.head().clone(), shared.arguments().iter().cloned().collect()),
            };
            let arguments = arguments.into_iter().map(normalize).collect();
            ComplexExpression::from_parts(normalize(head), arguments).into()
        }
    }
}
