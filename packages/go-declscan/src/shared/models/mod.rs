//! Shared domain models

mod span;

pub use span::Span;

// Re-export the crate error so features import everything from one place
pub use crate::errors::{DeclscanError, Result};
