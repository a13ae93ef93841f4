//! Tree-sitter based parser implementation

mod parser;

pub use parser::TreeSitterGoParser;

use crate::shared::models::Span;

/// Span conversion for tree-sitter nodes (1-indexed lines)
pub trait SpanExt {
    fn to_span(&self) -> Span;
}

impl SpanExt for ::tree_sitter::Node<'_> {
    fn to_span(&self) -> Span {
        let start = self.start_position();
        let end = self.end_position();
        Span::new(
            start.row as u32 + 1,
            start.column as u32,
            end.row as u32 + 1,
            end.column as u32,
        )
    }
}
