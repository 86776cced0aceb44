//! Interned symbols.
//!
//! Symbol names are stored once in a process-wide table so that repeated
//! symbols share a single allocation. Equality is still by name, so symbols
//! created through different tables compare equal whenever their names do.

use std::fmt;
use std::sync::{Arc, OnceLock};

use hashbrown::HashSet;
use parking_lot::Mutex;

/// Names of the operators the built-in engines know how to reduce.
pub mod names {
    /// Associative, commutative addition.
    pub const PLUS: &str = "Plus";
    /// Associative, commutative multiplication.
    pub const TIMES: &str = "Times";
    /// Associative string concatenation.
    pub const STRING_JOIN: &str = "StringJoin";
    /// Routes its payload to a named delegate engine.
    pub const EVALUATE_IN_ENGINE: &str = "EvaluateInEngine";
    /// Symbol read back from external systems as boolean true.
    pub const TRUE: &str = "True";
    /// Symbol read back from external systems as boolean false.
    pub const FALSE: &str = "False";
}

/// A named atomic identifier.
///
/// Two symbols are equal if and only if their names are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol, interning its name in the process-wide table.
    #[must_use]
    pub fn new(name: &str) -> Self {
        global_table().intern(name)
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true if both symbols share the same interned allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An interning table for symbol names.
///
/// Interning is thread-safe; the table only grows.
#[derive(Debug, Default)]
pub struct SymbolTable {
    names: Mutex<HashSet<Arc<str>>>,
}

impl SymbolTable {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name, returning a symbol that shares the stored allocation.
    pub fn intern(&self, name: &str) -> Symbol {
        let mut names = self.names.lock();
        if let Some(existing) = names.get(name) {
            return Symbol(Arc::clone(existing));
        }

        let name: Arc<str> = Arc::from(name);
        names.insert(Arc::clone(&name));
        Symbol(name)
    }

    /// Returns true if the name has been interned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.lock().contains(name)
    }

    /// Returns the number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.lock().len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.lock().is_empty()
    }
}

fn global_table() -> &'static SymbolTable {
    static TABLE: OnceLock<SymbolTable> = OnceLock::new();
    TABLE.get_or_init(SymbolTable::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_equality() {
        let a1 = Symbol::new("A");
        let a2 = Symbol::new("A");
        let b = Symbol::new("B");

        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(a1.name(), "A");
    }

    #[test]
    fn test_interning_shares_allocation() {
        let table = SymbolTable::new();

        let x1 = table.intern("x");
        let x2 = table.intern("x");
        let y = table.intern("y");

        assert!(x1.ptr_eq(&x2));
        assert!(!x1.ptr_eq(&y));
        assert_eq!(table.len(), 2);
        assert!(table.contains("x"));
        assert!(!table.contains("z"));
    }

    #[test]
    fn test_equality_across_tables() {
        let local = SymbolTable::new().intern("bla");
        assert_eq!(local, Symbol::new("bla"));
        assert!(!local.ptr_eq(&Symbol::new("bla")));
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::new("bla").to_string(), "bla");
        assert_eq!(format!("{:?}", Symbol::new("bla")), "Symbol(bla)");
    }
}
