//! alifc-sem - Semantic analysis for the alif language.
//!
//! Validates a parsed [`Program`](alifc_par::Program) without
//! transforming it: every name must resolve, and duplicates are
//! rejected. Analysis runs in two passes:
//!
//! 1. Global collection: register every function by name (and arity).
//! 2. Per-function analysis: walk each body with a fresh scope chain.
//!
//! Blocks inside `اذا`/`بينما` do not open scopes; all declarations in
//! a function share the function scope. Analysis is fail-fast: the
//! first violation aborts with a [`SemanticError`].

mod analysis;
pub mod scope;

pub use analysis::SemanticAnalyzer;
pub use scope::{Scope, ScopeId, ScopeTree, SymbolKind};

use thiserror::Error;

/// Semantic violation. Carries only a message; positions are a lexing
/// and parsing concern.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SemanticError {
    pub message: String,
}

impl SemanticError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Analyze a program: convenience wrapper over [`SemanticAnalyzer`].
pub fn analyze(program: &alifc_par::Program) -> Result<(), SemanticError> {
    SemanticAnalyzer::new().analyze(program)
}
