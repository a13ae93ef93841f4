//! Parsed file representation

use super::declaration::Declaration;

/// A successfully parsed Go file
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// File path (for messages)
    pub path: String,

    /// Package name from the package clause
    pub package: String,

    /// Top-level declarations in source order
    pub decls: Vec<Declaration>,
}

impl ParsedFile {
    pub fn new(path: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            package: package.into(),
            decls: Vec::new(),
        }
    }

    pub fn with_decls(mut self, decls: Vec<Declaration>) -> Self {
        self.decls = decls;
        self
    }

    /// True when the file has no top-level declarations
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
