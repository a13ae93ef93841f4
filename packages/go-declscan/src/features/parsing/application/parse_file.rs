//! Parse file use case

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::features::parsing::domain::ParsedFile;
use crate::features::parsing::ports::Parser;
use crate::shared::models::{DeclscanError, Result};

/// Parse file use case: read one file from disk, then parse it
pub struct ParseFileUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ParseFileUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Execute the parse operation
    pub fn execute(&self, path: &Path) -> Result<ParsedFile> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !self.parser.supports_extension(ext) {
            warn!(
                "{} does not look like a {} file; parsing anyway",
                path.display(),
                self.parser.language_name()
            );
        }

        let bytes = fs::read(path).map_err(|e| DeclscanError::read(path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let file_path = path.to_string_lossy();
        let source = decode_source(bytes, &file_path)?;
        self.execute_source(&source, &file_path)
    }

    /// Parse already-loaded source text
    pub fn execute_source(&self, source: &str, file_path: &str) -> Result<ParsedFile> {
        self.parser.parse(source, file_path)
    }
}

/// Decode UTF-8 source; an invalid sequence is a syntax error at its position
fn decode_source(bytes: Vec<u8>, file_path: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() as u32 + 1;
        let line_start = valid.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
        let column = (valid.len() - line_start) as u32 + 1;
        DeclscanError::syntax(file_path, line, column, "illegal UTF-8 encoding")
    })
}
