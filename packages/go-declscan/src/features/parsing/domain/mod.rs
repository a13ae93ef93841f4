//! Parsing domain models

mod declaration;
mod parsed_file;

pub use declaration::{DeclKind, Declaration, FuncDecl, GenDecl, GenToken, OtherDecl, Spec};
pub use parsed_file::ParsedFile;
