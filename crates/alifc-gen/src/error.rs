//! Error types for code generation.

use thiserror::Error;

/// Error type for assembly generation.
///
/// Analyzed input cannot produce these; they guard against feeding the
/// generator an unvalidated AST.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodeGenError {
    /// A variable reference with no allocated stack slot.
    #[error("Variable '{0}' has no stack slot")]
    UnresolvedLocal(String),
}

/// Result type alias for code generation operations.
pub type Result<T> = std::result::Result<T, CodeGenError>;
