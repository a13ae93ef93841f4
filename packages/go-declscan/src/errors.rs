//! Error types for go-declscan
//!
//! Every failure surfaces to the user as a single `error <description>` line,
//! so the `Display` strings here are the user-facing messages.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for declaration scanning
#[derive(Debug, Error)]
pub enum DeclscanError {
    /// Source file could not be read
    #[error("open {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source parsed, but the tree contains a syntax error
    #[error("{path}:{line}:{column}: {message}")]
    Syntax {
        path: String,
        line: u32,
        column: u32,
        message: String,
    },

    /// Grammar could not be loaded into the parser (ABI mismatch)
    #[error("Language error: {0}")]
    Language(String),

    /// Parser produced no tree
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DeclscanError {
    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeclscanError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a syntax error at a 1-indexed line and column
    pub fn syntax(
        path: impl Into<String>,
        line: u32,
        column: u32,
        message: impl Into<String>,
    ) -> Self {
        DeclscanError::Syntax {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        DeclscanError::Parse(msg.into())
    }

    /// Whether the failure happened before parsing started
    pub fn is_read_error(&self) -> bool {
        matches!(self, DeclscanError::Read { .. })
    }
}

/// Result type alias for declscan operations
pub type Result<T> = std::result::Result<T, DeclscanError>;
