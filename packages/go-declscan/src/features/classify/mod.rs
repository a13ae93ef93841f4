//! Classify Feature
//!
//! Labels each top-level declaration `general`, `func` or `def` and writes
//! one line per declaration.

mod classify_file;
mod label;

pub use classify_file::{ClassifyFileUseCase, ClassifyOutcome, LabelCounts};
pub use label::{classify, ClassifiedDecl, DeclLabel};
