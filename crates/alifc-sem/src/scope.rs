//! Scope tree for name resolution.
//!
//! Scopes live in an arena indexed by [`ScopeId`]; each scope holds its
//! bindings and a parent link. Resolution walks from the innermost
//! scope outward. Definition touches only the innermost scope, so a
//! name may shadow an outer binding but not collide with a sibling in
//! the same scope.

use rustc_hash::FxHashMap;

/// Index of a scope in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

impl ScopeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a name denotes. The language has a single value type, so this
/// is currently just the integer-variable marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    IntVar,
}

/// A single scope: bindings plus a parent link.
#[derive(Debug)]
pub struct Scope {
    /// Bindings in this scope.
    pub bindings: FxHashMap<String, SymbolKind>,
    /// Parent scope, `None` for the root.
    pub parent: Option<ScopeId>,
}

/// Arena of scopes with a current-scope pointer.
pub struct ScopeTree {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl ScopeTree {
    /// Creates a tree containing only an empty root scope.
    pub fn new() -> Self {
        let root = Scope {
            bindings: FxHashMap::default(),
            parent: None,
        };
        Self {
            scopes: vec![root],
            current: ScopeId(0),
        }
    }

    /// Opens a child of the current scope and makes it current.
    pub fn enter_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.current),
        });
        self.current = id;
        id
    }

    /// Returns to the parent of the current scope. No-op at the root.
    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current.index()].parent {
            self.current = parent;
        }
    }

    /// Defines a name in the current scope.
    ///
    /// Returns false if the name already exists in the current scope;
    /// outer scopes are not consulted.
    #[must_use]
    pub fn define(&mut self, name: &str, kind: SymbolKind) -> bool {
        let scope = &mut self.scopes[self.current.index()];
        if scope.bindings.contains_key(name) {
            return false;
        }
        scope.bindings.insert(name.to_string(), kind);
        true
    }

    /// Resolves a name, searching from the current scope outward.
    pub fn lookup(&self, name: &str) -> Option<SymbolKind> {
        let mut id = self.current;
        loop {
            let scope = &self.scopes[id.index()];
            if let Some(&kind) = scope.bindings.get(name) {
                return Some(kind);
            }
            match scope.parent {
                Some(parent) => id = parent,
                None => return None,
            }
        }
    }

    /// Returns true if the name resolves in any reachable scope.
    pub fn is_defined(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}
