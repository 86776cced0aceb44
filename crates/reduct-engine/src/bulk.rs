//! The bulk engine.
//!
//! Same contract and results as [`DefaultEngine`]; only the execution
//! strategy for long, type-homogeneous folds differs. When a node's head is
//! an associative fold and its evaluated arguments are at least
//! [`BulkConfig::min_run`] long and all of one kind, the arguments are
//! copied into a contiguous buffer and reduced by a single kernel call from
//! [`crate::kernels`]. Everything else, including any case where the kernel
//! cannot produce a value, falls through to the default reduction.

use reduct_core::{ComplexExpression, Expression, Literal};

use crate::config::BulkConfig;
use crate::default::{evaluate_with, DefaultEngine, Reducer};
use crate::engine::Engine;
use crate::error::Result;
use crate::kernels::{self, PackedBools};
use crate::rules::{FoldKind, RuleTable};

/// A contiguous, single-kind copy of a node's arguments.
enum Buffer<'a> {
    Integers(Vec<i64>),
    Booleans(PackedBools),
    Strings(Vec<&'a str>),
}

impl<'a> Buffer<'a> {
    /// Copies the arguments into a buffer, or `None` if their kinds differ
    /// or any of them is not a literal.
    fn collect(arguments: &'a [Expression]) -> Option<Self> {
        let first = arguments.first()?.as_literal()?;
        match first {
            Literal::Integer(_) => {
                let mut values = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    match argument.as_literal()? {
                        Literal::Integer(n) => values.push(*n),
                        _ => return None,
                    }
                }
                Some(Buffer::Integers(values))
            }
            Literal::Boolean(_) => {
                let mut values = PackedBools::with_capacity(arguments.len());
                for argument in arguments {
                    values.push(argument.as_literal()?.as_bool()?);
                }
                Some(Buffer::Booleans(values))
            }
            Literal::String(_) => {
                let mut values = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    values.push(argument.as_str()?);
                }
                Some(Buffer::Strings(values))
            }
        }
    }
}

/// The batched-fold engine.
#[derive(Clone, Default)]
pub struct BulkEngine {
    inner: DefaultEngine,
    config: BulkConfig,
}

impl BulkEngine {
    /// Creates an engine with the standard rules and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BulkConfig::default())
    }

    /// Creates an engine with a custom configuration.
    #[must_use]
    pub fn with_config(config: BulkConfig) -> Self {
        Self {
            inner: DefaultEngine::new(),
            config: config.normalized(),
        }
    }

    /// Replaces the rule table, keeping the registered delegates.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.inner.set_rules(rules);
        self
    }

    /// Registers an engine reachable through `EvaluateInEngine("name", ...)`.
    #[must_use]
    pub fn with_delegate(mut self, name: &str, engine: impl Engine + 'static) -> Self {
        self.inner = self.inner.with_delegate(name, engine);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BulkConfig {
        &self.config
    }

    /// Returns the rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        self.inner.rules()
    }

    /// Attempts a batched fold of an evaluated node.
    ///
    /// Returns `None` when the node is not eligible or the kernel cannot
    /// produce a value; the caller then takes the default path.
    fn try_batched(&self, kind: FoldKind, node: &ComplexExpression) -> Option<Expression> {
        if node.len() < self.config.min_run {
            return None;
        }

        let folded = match (kind, Buffer::collect(node.arguments())?) {
            (FoldKind::Sum, Buffer::Integers(values)) => {
                let total = kernels::par_sum_i64(&values, &self.config);
                Expression::from(i64::try_from(total).ok()?)
            }
            (FoldKind::Product, Buffer::Integers(values)) => {
                let total = kernels::par_product_i64(&values, &self.config)?;
                Expression::from(i64::try_from(total).ok()?)
            }
            (FoldKind::Sum, Buffer::Booleans(values)) => {
                Expression::from(i64::try_from(values.count_ones(&self.config)).ok()?)
            }
            (FoldKind::Product, Buffer::Booleans(values)) => Expression::from(i64::from(values.all())),
            (FoldKind::Concat, Buffer::Strings(values)) => {
                Expression::from(kernels::par_concat(&values, &self.config))
            }
            _ => return None,
        };

        tracing::trace!(?kind, arguments = node.len(), "batched fold");
        Some(folded)
    }
}

impl Reducer for BulkEngine {
    fn reduce_node(&self, node: ComplexExpression) -> Result<Expression> {
        let batchable = self
            .inner
            .rules()
            .rule_for(&node)
            .and_then(|rule| rule.batchable_fold());

        if let Some(kind) = batchable {
            if let Some(folded) = self.try_batched(kind, &node) {
                return Ok(folded);
            }
        }
        self.inner.reduce_node(node)
    }
}

impl Engine for BulkEngine {
    fn name(&self) -> &str {
        "bulk"
    }

    fn evaluate(&self, expr: &Expression) -> Result<Expression> {
        evaluate_with(self, expr)
    }
}
