//! Parser port (interface)
//!
//! Defines the contract for turning source text into top-level declarations.

use crate::features::parsing::domain::ParsedFile;
use crate::shared::models::Result;

/// Parser trait - abstraction over parsing implementation
pub trait Parser {
    /// Parse source code into a ParsedFile
    ///
    /// Fails on any syntax error; a partial declaration list is never returned.
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedFile>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
