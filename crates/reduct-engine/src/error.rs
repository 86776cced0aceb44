//! Evaluation errors.
//!
//! Non-reducibility is never an error: unknown heads and type-incompatible
//! folds produce partial results. Only failures that would otherwise hide a
//! bug end up here, and the framework never swallows them.

use thiserror::Error;

/// Errors surfaced to the caller of `evaluate`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `EvaluateInEngine` named an engine that was never registered.
    #[error("no engine registered under \"{0}\"")]
    UnknownEngine(String),

    /// An external backend failed while evaluating.
    #[error("backend {backend} failed: {message}")]
    Backend {
        /// Name of the failing backend.
        backend: String,
        /// The backend's error message.
        message: String,
    },

    /// The input nests complex expressions deeper than the engine recurses.
    #[error("expression nesting exceeds the depth limit of {limit}")]
    DepthExceeded {
        /// The limit that was hit.
        limit: usize,
    },

    /// An engine kind could not be parsed.
    #[error("unknown engine kind \"{0}\", expected \"default\" or \"bulk\"")]
    UnknownEngineKind(String),
}

/// Result type for evaluation.
pub type Result<T> = std::result::Result<T, EngineError>;
