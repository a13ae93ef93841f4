//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Node, Parser as TSParser, Tree};
use tracing::debug;

use crate::features::parsing::domain::{
    Declaration, FuncDecl, GenDecl, GenToken, ParsedFile, Spec,
};
use crate::features::parsing::ports::Parser;
use crate::shared::models::{DeclscanError, Result, Span};

use super::SpanExt;

/// Longest token excerpt quoted in a syntax error
const MAX_TOKEN_EXCERPT: usize = 24;

/// Tree-sitter based Go parser
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSitterGoParser;

impl TreeSitterGoParser {
    pub fn new() -> Self {
        Self
    }

    fn ts_language() -> tree_sitter::Language {
        tree_sitter_go::language()
    }

    /// Convert the tree into our domain model, rejecting trees with errors
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str) -> Result<ParsedFile> {
        let root = tree.root_node();

        if let Some(err) = self.first_error(&root, source, file_path) {
            return Err(err);
        }

        let mut cursor = root.walk();
        let top_level: Vec<Node> = root.named_children(&mut cursor).collect();

        let package = self.package_name(&top_level, source, file_path)?;

        let mut decls = Vec::new();
        let mut doc_lines: Vec<(Span, &str)> = Vec::new();
        let mut last_end_line: Option<u32> = None;
        let mut seen_package = false;
        let mut seen_non_import = false;

        for node in &top_level {
            let span = node.to_span();

            if node.kind() == "comment" {
                // Trailing comment on the previous node's last line
                if last_end_line == Some(span.start_line) {
                    doc_lines.clear();
                    continue;
                }
                let contiguous = doc_lines
                    .last()
                    .map_or(true, |(prev, _)| prev.is_directly_above(&span));
                if !contiguous {
                    doc_lines.clear();
                }
                doc_lines.push((span, node_text(node, source)));
                continue;
            }

            let doc = match doc_lines.last() {
                Some((prev, _)) if prev.is_directly_above(&span) => Some(
                    doc_lines
                        .iter()
                        .map(|(_, text)| *text)
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
                _ => None,
            };
            doc_lines.clear();
            last_end_line = Some(span.end_line);

            match node.kind() {
                "package_clause" if !seen_package => {
                    seen_package = true;
                    continue;
                }
                "import_declaration" if seen_non_import => {
                    return Err(syntax_error_at(
                        node,
                        file_path,
                        "imports must appear before other declarations",
                    ));
                }
                "import_declaration" => {}
                _ => seen_non_import = true,
            }

            decls.push(self.convert_decl(node, source, file_path, doc)?);
        }

        debug!(
            "Parsed {}: package {}, {} top-level declarations",
            file_path,
            package,
            decls.len()
        );

        Ok(ParsedFile::new(file_path, package).with_decls(decls))
    }

    /// Map one top-level node to a Declaration
    ///
    /// Statements and repeated package clauses are accepted by the grammar at
    /// file level but are not declarations.
    fn convert_decl(
        &self,
        node: &Node,
        source: &str,
        file_path: &str,
        doc: Option<String>,
    ) -> Result<Declaration> {
        if let Some(tok) = GenToken::from_node_kind(node.kind()) {
            return Ok(Declaration::General(
                self.convert_gen_decl(node, source, tok, doc),
            ));
        }

        match node.kind() {
            "function_declaration" | "method_declaration" => {
                Ok(Declaration::Func(self.convert_func_decl(node, source, doc)))
            }
            other => {
                debug!("Rejected top-level node: {}", other);
                Err(syntax_error_at(
                    node,
                    file_path,
                    format!("expected declaration, found '{}'", first_token(node, source)),
                ))
            }
        }
    }

    fn convert_gen_decl(
        &self,
        node: &Node,
        source: &str,
        tok: GenToken,
        doc: Option<String>,
    ) -> GenDecl {
        let mut grouped = false;
        let mut specs = Vec::new();

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            let kind = child.kind();
            if kind == "(" {
                grouped = true;
            } else if kind.ends_with("_spec_list") {
                // import_spec_list (and var_spec_list in newer grammars)
                grouped = true;
                let mut list_cursor = child.walk();
                for spec in child.named_children(&mut list_cursor) {
                    if is_spec_kind(spec.kind()) {
                        specs.push(self.convert_spec(&spec, source));
                    }
                }
            } else if is_spec_kind(kind) {
                specs.push(self.convert_spec(&child, source));
            }
        }

        GenDecl {
            doc,
            tok,
            grouped,
            specs,
            span: node.to_span(),
        }
    }

    /// Names declared by a spec; import specs contribute alias and path
    fn convert_spec(&self, node: &Node, source: &str) -> Spec {
        let mut cursor = node.walk();
        let mut names: Vec<String> = node
            .children_by_field_name("name", &mut cursor)
            .map(|n| node_text(&n, source).to_string())
            .collect();

        if node.kind() == "import_spec" {
            if let Some(path) = node.child_by_field_name("path") {
                names.push(node_text(&path, source).to_string());
            }
        }

        Spec {
            names,
            span: node.to_span(),
        }
    }

    fn convert_func_decl(&self, node: &Node, source: &str, doc: Option<String>) -> FuncDecl {
        let field = |name: &str| {
            node.child_by_field_name(name)
                .map(|n| node_text(&n, source).to_string())
        };

        FuncDecl {
            doc,
            recv: field("receiver"),
            name: field("name").unwrap_or_default(),
            type_params: field("type_parameters"),
            params: field("parameters").unwrap_or_default(),
            results: field("result"),
            has_body: node.child_by_field_name("body").is_some(),
            span: node.to_span(),
        }
    }

    /// The package clause must come first (comments aside)
    fn package_name(&self, top_level: &[Node], source: &str, file_path: &str) -> Result<String> {
        let first = top_level.iter().find(|n| n.kind() != "comment");

        match first {
            Some(node) if node.kind() == "package_clause" => {
                let mut cursor = node.walk();
                let name = node
                    .named_children(&mut cursor)
                    .find(|c| c.kind() == "package_identifier")
                    .map(|c| node_text(&c, source).to_string())
                    .unwrap_or_default();
                Ok(name)
            }
            Some(node) => Err(syntax_error_at(
                node,
                file_path,
                format!("expected 'package', found '{}'", first_token(node, source)),
            )),
            None => {
                let (line, column) = end_position(source);
                Err(DeclscanError::syntax(
                    file_path,
                    line,
                    column,
                    "expected 'package', found 'EOF'",
                ))
            }
        }
    }

    /// First ERROR or MISSING node in source order, as a syntax error
    fn first_error(&self, root: &Node, source: &str, file_path: &str) -> Option<DeclscanError> {
        if !root.has_error() {
            return None;
        }

        let mut stack = vec![*root];
        while let Some(node) = stack.pop() {
            if node.is_error() || node.is_missing() {
                let message = if node.is_missing() {
                    format!("syntax error: missing '{}'", node.kind())
                } else {
                    format!("syntax error: unexpected '{}'", first_token(&node, source))
                };
                return Some(syntax_error_at(&node, file_path, message));
            }

            if !node.has_error() {
                continue;
            }
            for i in (0..node.child_count()).rev() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }

        // has_error() was set but no node carried it
        Some(syntax_error_at(root, file_path, "syntax error"))
    }
}

impl Parser for TreeSitterGoParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedFile> {
        let mut parser = TSParser::new();
        parser
            .set_language(&Self::ts_language())
            .map_err(|e| DeclscanError::Language(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| DeclscanError::parse("Failed to parse source code"))?;

        self.convert_tree(&tree, source, file_path)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext == "go"
    }

    fn language_name(&self) -> &'static str {
        "go"
    }
}

/// Syntax error at the start of `node` (1-indexed column)
fn syntax_error_at(node: &Node, file_path: &str, message: impl Into<String>) -> DeclscanError {
    let span = node.to_span();
    DeclscanError::syntax(file_path, span.start_line, span.start_col + 1, message)
}

fn is_spec_kind(kind: &str) -> bool {
    matches!(
        kind,
        "import_spec" | "const_spec" | "var_spec" | "type_spec" | "type_alias"
    )
}

#[inline]
fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Text of the first leaf under `node`, cut to one short line
fn first_token<'a>(node: &Node, source: &'a str) -> &'a str {
    let mut leaf = *node;
    while let Some(child) = leaf.child(0) {
        leaf = child;
    }
    let text = node_text(&leaf, source);
    let text = if text.is_empty() { node_text(node, source) } else { text };
    let line = text.lines().next().unwrap_or("");
    match line.char_indices().nth(MAX_TOKEN_EXCERPT) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// 1-indexed line and column just past the end of `source`
fn end_position(source: &str) -> (u32, u32) {
    let line = source.matches('\n').count() as u32 + 1;
    let column = source.rsplit('\n').next().map_or(0, str::len) as u32 + 1;
    (line, column)
}
