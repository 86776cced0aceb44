//! # reduct-engine
//!
//! Pluggable evaluation engines for Reduct expressions.
//!
//! This crate provides:
//! - The [`Engine`] contract and the tagged [`EngineHandle`]
//! - [`DefaultEngine`]: a bottom-up term rewriter with partial evaluation
//! - [`BulkEngine`]: the same semantics, with long homogeneous folds reduced
//!   by batched, optionally parallel kernels
//! - [`ExternalEngine`]: an adapter for out-of-process backends
//! - [`EngineRegistry`]: swappable engine selection
//!
//! ## Design Principles
//!
//! - **Partial evaluation**: what cannot be reduced is returned rebuilt from
//!   its evaluated parts, never reported as an error.
//! - **One semantics**: the built-in engines share a rule table and agree on
//!   every input; engine choice is a performance decision only.
//! - **Immutable input**: engines read expressions and build new ones.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bulk;
pub mod config;
pub mod default;
pub mod engine;
pub mod error;
pub mod external;
pub mod kernels;
pub mod registry;
pub mod rules;

pub use bulk::BulkEngine;
pub use config::{BulkConfig, EngineKind, ENGINE_ENV_VAR};
pub use default::{DefaultEngine, MAX_DEPTH};
pub use engine::{Engine, EngineHandle};
pub use error::{EngineError, Result};
pub use external::{Backend, BackendError, ExternalEngine};
pub use registry::EngineRegistry;
pub use rules::{Attributes, FoldKind, Reduce, Rule, RuleTable};

#[cfg(test)]
mod proptests;
