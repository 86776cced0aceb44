//! Engine configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Environment variable consulted when the process-wide registry starts.
pub const ENGINE_ENV_VAR: &str = "REDUCT_ENGINE";

/// Configuration for the bulk engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkConfig {
    /// Minimum number of arguments before the batched path is tried.
    ///
    /// Values below 2 are treated as 2: empty and single-argument folds
    /// never go through a kernel.
    pub min_run: usize,
    /// Minimum buffer length to split the fold across the rayon pool.
    pub parallel_threshold: usize,
    /// Elements per parallel chunk.
    pub chunk_size: usize,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            min_run: 8,
            parallel_threshold: 1 << 14,
            chunk_size: 1 << 12,
        }
    }
}

impl BulkConfig {
    /// Returns a copy with out-of-range values clamped.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            min_run: self.min_run.max(2),
            parallel_threshold: self.parallel_threshold.max(1),
            chunk_size: self.chunk_size.max(64),
        }
    }
}

/// The built-in engine variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// The element-by-element term rewriter.
    Default,
    /// The batched-fold engine.
    Bulk,
    /// Any other engine, typically an adapter to an external system.
    External,
}

impl EngineKind {
    /// Reads the kind from [`ENGINE_ENV_VAR`].
    ///
    /// Returns `None` when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEngineKind` when the variable holds an unknown value.
    pub fn from_env() -> Result<Option<Self>, EngineError> {
        match std::env::var(ENGINE_ENV_VAR) {
            Ok(value) => value.parse().map(Some),
            Err(_) => Ok(None),
        }
    }
}

impl FromStr for EngineKind {
    type Err = EngineError;

    /// Parses `default` or `bulk`, ignoring case and surrounding whitespace.
    /// External engines cannot be named, only constructed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(EngineKind::Default),
            "bulk" => Ok(EngineKind::Bulk),
            _ => Err(EngineError::UnknownEngineKind(s.to_string())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EngineKind::Default => "default",
            EngineKind::Bulk => "bulk",
            EngineKind::External => "external",
        })
    }
}
