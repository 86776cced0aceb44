//! Reduction rules keyed by head symbol.
//!
//! A rule pairs attributes with a reduction strategy. Heads without a rule
//! are left unevaluated; that branch lives in the engines and is total.

pub mod fold;

use reduct_core::symbol::names;
use reduct_core::{ComplexExpression, Expression, Symbol};
use rustc_hash::FxHashMap;

pub use fold::FoldKind;

/// Algebraic attributes of an operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    /// `f(a, f(b, c)) == f(a, b, c)`.
    pub associative: bool,
    /// Argument order does not affect the result.
    pub commutative: bool,
}

/// How a rule reduces an evaluated node.
#[derive(Clone, Copy, Debug)]
pub enum Reduce {
    /// A monoid fold over the arguments; eligible for batched reduction.
    Fold(FoldKind),
    /// An arbitrary rewrite of the node. Must return the node itself when
    /// its precondition fails.
    Rewrite(fn(ComplexExpression) -> Expression),
    /// Evaluates the payload in a delegate engine named by the first argument.
    Delegate,
}

/// A reduction rule.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Operator attributes.
    pub attributes: Attributes,
    /// The reduction strategy.
    pub reduce: Reduce,
}

impl Rule {
    /// A fold rule; folds are always associative.
    #[must_use]
    pub fn fold(kind: FoldKind) -> Self {
        Self {
            attributes: Attributes {
                associative: true,
                commutative: kind.is_commutative(),
            },
            reduce: Reduce::Fold(kind),
        }
    }

    /// A rewrite rule with no special attributes.
    #[must_use]
    pub fn rewrite(f: fn(ComplexExpression) -> Expression) -> Self {
        Self {
            attributes: Attributes::default(),
            reduce: Reduce::Rewrite(f),
        }
    }

    /// The delegation rule.
    #[must_use]
    pub fn delegate() -> Self {
        Self {
            attributes: Attributes::default(),
            reduce: Reduce::Delegate,
        }
    }

    /// Returns the fold kind if this rule may be batched.
    #[must_use]
    pub fn batchable_fold(&self) -> Option<FoldKind> {
        match self.reduce {
            Reduce::Fold(kind) if self.attributes.associative => Some(kind),
            _ => None,
        }
    }
}

/// Maps head symbols to rules.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: FxHashMap<Symbol, Rule>,
}

impl RuleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table of built-in operators:
    /// `Plus`, `Times`, `StringJoin` and `EvaluateInEngine`.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register(names::PLUS, Rule::fold(FoldKind::Sum));
        table.register(names::TIMES, Rule::fold(FoldKind::Product));
        table.register(names::STRING_JOIN, Rule::fold(FoldKind::Concat));
        table.register(names::EVALUATE_IN_ENGINE, Rule::delegate());
        table
    }

    /// Registers a rule, replacing any previous rule for the same head.
    pub fn register(&mut self, head: &str, rule: Rule) -> Option<Rule> {
        self.rules.insert(Symbol::new(head), rule)
    }

    /// Looks up the rule for a head.
    #[must_use]
    pub fn get(&self, head: &Symbol) -> Option<&Rule> {
        self.rules.get(head)
    }

    /// Looks up the rule for a node's head, if the head is a symbol.
    #[must_use]
    pub fn rule_for(&self, node: &ComplexExpression) -> Option<&Rule> {
        node.head_symbol().and_then(|head| self.get(head))
    }

    /// Returns true if the head has a rule.
    #[must_use]
    pub fn contains(&self, head: &str) -> bool {
        self.rules.contains_key(&Symbol::new(head))
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
