//! Declaration labels

use std::fmt;

use crate::features::parsing::domain::{DeclKind, Declaration};

/// Label printed in front of each declaration line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclLabel {
    General,
    Func,
    /// Fallback for any other kind
    Def,
}

impl DeclLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclLabel::General => "general",
            DeclLabel::Func => "func",
            DeclLabel::Def => "def",
        }
    }
}

impl From<DeclKind> for DeclLabel {
    fn from(kind: DeclKind) -> Self {
        match kind {
            DeclKind::General => DeclLabel::General,
            DeclKind::Func => DeclLabel::Func,
            DeclKind::Other => DeclLabel::Def,
        }
    }
}

impl fmt::Display for DeclLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(decl: &Declaration) -> DeclLabel {
    decl.kind().into()
}

/// A declaration paired with its label
///
/// Displays as `<label> <Debug of the declaration node>` on a single line.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedDecl<'a> {
    pub label: DeclLabel,
    pub decl: &'a Declaration,
}

impl<'a> ClassifiedDecl<'a> {
    pub fn new(decl: &'a Declaration) -> Self {
        Self {
            label: classify(decl),
            decl,
        }
    }
}

impl fmt::Display for ClassifiedDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decl {
            Declaration::General(d) => write!(f, "{} {:?}", self.label, d),
            Declaration::Func(d) => write!(f, "{} {:?}", self.label, d),
            Declaration::Other(d) => write!(f, "{} {:?}", self.label, d),
        }
    }
}
