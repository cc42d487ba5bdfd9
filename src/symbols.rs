//! Symbol and type model for a future semantic pass
//!
//! The parser does not populate or consult these tables; they define the
//! vocabulary a semantic analyzer would attach to the AST. [`Scope`] keeps
//! symbols in insertion order and enforces name uniqueness within one
//! scope; [`SymbolTable`] stacks scopes and tracks the nesting depth.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Base type of a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeBase {
    Int,
    Double,
    Char,
    Struct(String), // struct tag name
    Void,
}

/// Array arity of a symbol's type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Scalar,
    UnsizedArray,
    Array(usize), // fixed element count
}

/// A symbol's full type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolType {
    pub base: TypeBase,
    pub arity: Arity,
}

impl SymbolType {
    pub fn scalar(base: TypeBase) -> Self {
        Self {
            base,
            arity: Arity::Scalar,
        }
    }
}

/// What kind of entity a symbol names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    Variable,
    Function,
    ExternalFunction,
    StructTag,
}

/// Where a variable lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Global,
    Argument,
    Local,
}

/// One declared name.
///
/// A symbol owns a nested scope only when it is a function (its argument
/// list) or a struct tag (its member list).
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub class: SymbolClass,
    pub storage: Storage,
    pub ty: SymbolType,
    /// 0 = global; grows by one per function/block nesting level
    pub depth: usize,
    pub members: Option<Scope>,
}

/// Symbol table error type
#[derive(Debug, Clone, Error)]
pub enum SymbolError {
    #[error("symbol '{0}' is already defined in this scope")]
    Duplicate(String),
}

/// An insertion-ordered collection of symbols with unique names.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    symbols: Vec<Symbol>,
    index: FxHashMap<String, usize>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Add a symbol, rejecting duplicates within this scope.
    pub fn add(&mut self, symbol: Symbol) -> Result<(), SymbolError> {
        if self.index.contains_key(&symbol.name) {
            return Err(SymbolError::Duplicate(symbol.name));
        }
        self.index.insert(symbol.name.clone(), self.symbols.len());
        self.symbols.push(symbol);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&i| &self.symbols[i])
    }

    /// Symbols in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// A stack of scopes, innermost last.
///
/// Depth 0 is the global scope; entering a function or block pushes a
/// scope and leaving pops it, so depth strictly increases inward.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
        }
    }

    /// Current nesting depth (0 = global)
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the innermost scope; the global scope is never popped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declare a symbol in the innermost scope.
    pub fn declare(&mut self, mut symbol: Symbol) -> Result<(), SymbolError> {
        symbol.depth = self.depth();
        let innermost = self.scopes.len() - 1;
        self.scopes[innermost].add(symbol)
    }

    /// Look a name up, innermost scope first.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|s| s.find(name))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str, base: TypeBase) -> Symbol {
        Symbol {
            name: name.to_string(),
            class: SymbolClass::Variable,
            storage: Storage::Global,
            ty: SymbolType::scalar(base),
            depth: 0,
            members: None,
        }
    }

    #[test]
    fn test_scope_preserves_insertion_order() {
        let mut scope = Scope::new();
        scope.add(var("a", TypeBase::Int)).unwrap();
        scope.add(var("b", TypeBase::Double)).unwrap();
        scope.add(var("c", TypeBase::Char)).unwrap();

        let names: Vec<_> = scope.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut scope = Scope::new();
        scope.add(var("x", TypeBase::Int)).unwrap();
        let err = scope.add(var("x", TypeBase::Double)).unwrap_err();
        assert!(matches!(err, SymbolError::Duplicate(ref n) if n == "x"));
    }

    #[test]
    fn test_lookup_finds_innermost_shadow() {
        let mut table = SymbolTable::new();
        table.declare(var("x", TypeBase::Int)).unwrap();
        assert_eq!(table.depth(), 0);

        table.enter_scope();
        assert_eq!(table.depth(), 1);
        table.declare(var("x", TypeBase::Double)).unwrap();

        let found = table.lookup("x").unwrap();
        assert_eq!(found.ty.base, TypeBase::Double);
        assert_eq!(found.depth, 1);

        table.exit_scope();
        let found = table.lookup("x").unwrap();
        assert_eq!(found.ty.base, TypeBase::Int);
    }

    #[test]
    fn test_function_symbol_owns_args() {
        let mut args = Scope::new();
        let mut a = var("a", TypeBase::Int);
        a.storage = Storage::Argument;
        a.depth = 1;
        args.add(a).unwrap();

        let f = Symbol {
            name: "f".to_string(),
            class: SymbolClass::Function,
            storage: Storage::Global,
            ty: SymbolType::scalar(TypeBase::Int),
            depth: 0,
            members: Some(args),
        };

        let members = f.members.as_ref().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members.find("a").unwrap().storage, Storage::Argument);
    }
}
