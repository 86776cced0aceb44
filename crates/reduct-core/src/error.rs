//! Construction errors.

use thiserror::Error;

/// Errors raised while building expressions.
///
/// Construction rejects bad input immediately instead of deferring the
/// failure into evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExprError {
    /// A raw value is not an integer, boolean or string.
    #[error("invalid literal kind: expected integer, boolean or string, found {found}")]
    InvalidLiteralKind {
        /// Description of the rejected value.
        found: String,
    },
}

impl ExprError {
    pub(crate) fn invalid_literal(found: impl Into<String>) -> Self {
        ExprError::InvalidLiteralKind {
            found: found.into(),
        }
    }
}

/// Result type for expression construction.
pub type Result<T> = std::result::Result<T, ExprError>;
