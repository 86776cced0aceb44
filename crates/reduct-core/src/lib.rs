//! # reduct-core
//!
//! Expression model for the Reduct evaluation system.
//!
//! This crate provides:
//! - Interned, value-compared symbols
//! - Integer, boolean and string literals with 0/1 boolean coercion
//! - Immutable, reference-counted complex expressions (head + arguments)
//! - Structural algebra with flattening of associative chains
//! - Coercion of raw host values into expressions
//!
//! ## Design Principles
//!
//! - **Values, not places**: every expression is immutable; "modifying"
//!   operations return new trees and share untouched subtrees.
//! - **Cheap clones**: complex nodes live behind an `Arc`, so handing an
//!   expression to an engine on another thread never deep-copies it.
//! - **No evaluation here**: construction and algebra are purely structural.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod error;
pub mod expr;
pub mod literal;
pub mod raw;
pub mod symbol;

pub use algebra::{combine, plus, times};
pub use error::{ExprError, Result};
pub use expr::{Arguments, ComplexExpression, Expression, ExpressionKind};
pub use literal::{Literal, LiteralKind};
pub use symbol::{Symbol, SymbolTable};

/// Builds a complex expression from a head name and heterogeneous arguments.
///
/// Every argument is converted with `Expression::from`, so integers, booleans,
/// string slices, symbols and expressions can be mixed freely.
///
/// ```
/// use reduct_core::{call, Symbol};
///
/// let e = call!("Plus", 1, true, "x", Symbol::new("A"));
/// assert_eq!(e.to_string(), "Plus(1, True, \"x\", A)");
/// ```
#[macro_export]
macro_rules! call {
    ($head:expr $(, $arg:expr)* $(,)?) => {{
        let arguments: ::std::vec::Vec<$crate::Expression> =
            ::std::vec![$($crate::Expression::from($arg)),*];
        $crate::Expression::call($head, arguments)
    }};
}

#[cfg(test)]
mod proptests;
