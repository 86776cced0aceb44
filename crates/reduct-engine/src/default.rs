//! The default term-rewriting engine.
//!
//! Evaluation is a single bottom-up pass:
//! 1. Symbols and literals evaluate to themselves.
//! 2. A complex expression evaluates its head, then its arguments left to
//!    right, each to normal form.
//! 3. If the evaluated head is a symbol with a rule, the rule runs on the
//!    evaluated node.
//! 4. Otherwise the evaluated node is returned as is. A missing rule is not
//!    a failure.

use std::sync::Arc;

use reduct_core::{Arguments, ComplexExpression, Expression};
use rustc_hash::FxHashMap;

use crate::engine::Engine;
use crate::error::{EngineError, Result};
use crate::rules::{Reduce, RuleTable};

/// Maximum nesting of complex expressions an engine descends into.
pub const MAX_DEPTH: usize = 1024;

/// Reduces one node whose head and arguments are already evaluated.
pub(crate) trait Reducer {
    fn reduce_node(&self, node: ComplexExpression) -> Result<Expression>;
}

/// Evaluates bottom-up, handing every rebuilt node to the reducer.
pub(crate) fn evaluate_with<R: Reducer + ?Sized>(
    reducer: &R,
    expr: &Expression,
) -> Result<Expression> {
    evaluate_at(reducer, expr, 0)
}

fn evaluate_at<R: Reducer + ?Sized>(
    reducer: &R,
    expr: &Expression,
    depth: usize,
) -> Result<Expression> {
    match expr {
        Expression::Symbol(_) | Expression::Literal(_) => Ok(expr.clone()),
        Expression::Complex(node) => {
            if depth >= MAX_DEPTH {
                return Err(EngineError::DepthExceeded { limit: MAX_DEPTH });
            }
            let head = evaluate_at(reducer, node.head(), depth + 1)?;
            let arguments = node
                .arguments()
                .iter()
                .map(|argument| evaluate_at(reducer, argument, depth + 1))
                .collect::<Result<Arguments>>()?;
            reducer.reduce_node(ComplexExpression::from_parts(head, arguments))
        }
    }
}

/// The generic recursive term rewriter.
#[derive(Clone)]
pub struct DefaultEngine {
    rules: Arc<RuleTable>,
    delegates: FxHashMap<String, Arc<dyn Engine>>,
}

impl Default for DefaultEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultEngine {
    /// Creates an engine with the standard rules and no delegates.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(RuleTable::standard())
    }

    /// Creates an engine with a custom rule table.
    #[must_use]
    pub fn with_rules(rules: RuleTable) -> Self {
        Self {
            rules: Arc::new(rules),
            delegates: FxHashMap::default(),
        }
    }

    /// Registers an engine reachable through `EvaluateInEngine("name", ...)`.
    #[must_use]
    pub fn with_delegate(mut self, name: &str, engine: impl Engine + 'static) -> Self {
        self.delegates.insert(name.to_string(), Arc::new(engine));
        self
    }

    /// Replaces the rule table, keeping the registered delegates.
    pub(crate) fn set_rules(&mut self, rules: RuleTable) {
        self.rules = Arc::new(rules);
    }

    /// Returns the rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Returns the names of the registered delegates, sorted.
    #[must_use]
    pub fn delegate_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.delegates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `EvaluateInEngine("name", e1, ..., en)`: evaluates every payload
    /// expression in the named engine and returns the last result.
    fn delegate(&self, node: ComplexExpression) -> Result<Expression> {
        let Some((target, payload)) = node.arguments().split_first() else {
            return Ok(node.into());
        };
        let (Some(name), Some((last, rest))) = (target.as_str(), payload.split_last()) else {
            return Ok(node.into());
        };

        let engine = self
            .delegates
            .get(name)
            .ok_or_else(|| EngineError::UnknownEngine(name.to_string()))?;

        tracing::trace!(delegate = name, payload = payload.len(), "evaluating in delegate");
        for expr in rest {
            engine.evaluate(expr)?;
        }
        engine.evaluate(last)
    }
}

impl Reducer for DefaultEngine {
    fn reduce_node(&self, node: ComplexExpression) -> Result<Expression> {
        let Some(rule) = self.rules.rule_for(&node) else {
            return Ok(node.into());
        };

        match rule.reduce {
            Reduce::Fold(kind) => Ok(kind.reduce(node)),
            Reduce::Rewrite(rewrite) => Ok(rewrite(node)),
            Reduce::Delegate => self.delegate(node),
        }
    }
}

impl Engine for DefaultEngine {
    fn name(&self) -> &str {
        "default"
    }

    fn evaluate(&self, expr: &Expression) -> Result<Expression> {
        evaluate_with(self, expr)
    }
}
