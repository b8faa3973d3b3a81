//! alifc-util - Shared utilities for the alifc compiler.
//!
//! Currently this crate provides source location tracking ([`Span`]),
//! which every pipeline stage uses for diagnostics.

pub mod span;

pub use span::Span;
