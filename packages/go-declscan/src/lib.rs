/*
 * go-declscan - Top-level declaration classifier for Go sources
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Span, error re-exports)
 * - features/    : Vertical slices (parsing → classify)
 * - config/      : Driver configuration (missing-path policy)
 * - cli          : Argument parsing and the driver shared by both binaries
 *
 * Parsing is delegated to tree-sitter with the tree-sitter-go grammar.
 */

pub mod cli;
pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

pub use config::{DriverConfig, MissingPathPolicy, DEFAULT_SOURCE_FILE};
pub use errors::{DeclscanError, Result};
pub use features::classify::{
    classify, ClassifiedDecl, ClassifyFileUseCase, ClassifyOutcome, DeclLabel, LabelCounts,
};
pub use features::parsing::{
    DeclKind, Declaration, ParseFileUseCase, ParsedFile, Parser, TreeSitterGoParser,
};
