//! Parsing Feature
//!
//! Turns one Go source file into its top-level declarations.
//!
//! ## Structure
//! - `domain/` - Declaration, ParsedFile models
//! - `ports/` - Parser trait
//! - `application/` - ParseFileUseCase
//! - `infrastructure/` - TreeSitterGoParser

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::ParseFileUseCase;
pub use domain::{DeclKind, Declaration, FuncDecl, GenDecl, GenToken, OtherDecl, ParsedFile, Spec};
pub use infrastructure::TreeSitterGoParser;
pub use ports::Parser;
