//! Top-level declaration model
//!
//! Mirrors the shape of a Go file's top-level declarations: general
//! declarations (`import`, `const`, `var`, `type`), function declarations
//! (including methods), and a fallback for any other kind a parser reports.
//! The tree-sitter parser rejects non-declarations at file level, so it never
//! produces the fallback.

use crate::shared::models::Span;

/// Declaration kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    General,
    Func,
    Other,
}

/// Keyword that introduces a general declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenToken {
    Import,
    Const,
    Var,
    Type,
}

impl GenToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenToken::Import => "import",
            GenToken::Const => "const",
            GenToken::Var => "var",
            GenToken::Type => "type",
        }
    }

    /// Map a tree-sitter-go declaration node kind
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "import_declaration" => Some(GenToken::Import),
            "const_declaration" => Some(GenToken::Const),
            "var_declaration" => Some(GenToken::Var),
            "type_declaration" => Some(GenToken::Type),
            _ => None,
        }
    }
}

/// One spec inside a general declaration
///
/// `names` holds the declared identifiers; for imports it holds the optional
/// alias followed by the quoted import path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spec {
    pub names: Vec<String>,
    pub span: Span,
}

/// `import`, `const`, `var` or `type` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenDecl {
    pub doc: Option<String>,
    pub tok: GenToken,
    /// Parenthesised form: `var ( ... )`
    pub grouped: bool,
    pub specs: Vec<Spec>,
    pub span: Span,
}

/// Function or method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub doc: Option<String>,
    /// Receiver list text for methods, e.g. `(s *Server)`
    pub recv: Option<String>,
    pub name: String,
    pub type_params: Option<String>,
    pub params: String,
    pub results: Option<String>,
    /// False for external (body-less) declarations
    pub has_body: bool,
    pub span: Span,
}

/// Any other top-level node kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherDecl {
    /// tree-sitter node kind
    pub raw_kind: String,
    pub span: Span,
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    General(GenDecl),
    Func(FuncDecl),
    Other(OtherDecl),
}

impl Declaration {
    pub fn kind(&self) -> DeclKind {
        match self {
            Declaration::General(_) => DeclKind::General,
            Declaration::Func(_) => DeclKind::Func,
            Declaration::Other(_) => DeclKind::Other,
        }
    }
}
