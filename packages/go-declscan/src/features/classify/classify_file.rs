//! Classify file use case

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::label::{ClassifiedDecl, DeclLabel};
use crate::features::parsing::{ParseFileUseCase, Parser};
use crate::shared::models::DeclscanError;

/// Per-label line counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub general: usize,
    pub func: usize,
    pub def: usize,
}

impl LabelCounts {
    fn record(&mut self, label: DeclLabel) {
        match label {
            DeclLabel::General => self.general += 1,
            DeclLabel::Func => self.func += 1,
            DeclLabel::Def => self.def += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.general + self.func + self.def
    }
}

/// What a classify run printed
#[derive(Debug)]
pub enum ClassifyOutcome {
    Classified(LabelCounts),
    /// Read or parse failure; exactly one `error` line was written
    Failed(DeclscanError),
}

/// Classify file use case
pub struct ClassifyFileUseCase<P: Parser> {
    parse: ParseFileUseCase<P>,
}

impl<P: Parser> ClassifyFileUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parse: ParseFileUseCase::new(parser),
        }
    }

    /// Parse `path` and write one labelled line per top-level declaration
    ///
    /// On failure a single `error <description>` line is written and no
    /// declaration is visited. Only write failures on `out` are returned as
    /// errors.
    pub fn execute<W: Write>(&self, path: &Path, out: &mut W) -> io::Result<ClassifyOutcome> {
        let parsed = match self.parse.execute(path) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("Failed to parse {}: {}", path.display(), err);
                writeln!(out, "error {}", err)?;
                return Ok(ClassifyOutcome::Failed(err));
            }
        };

        let mut counts = LabelCounts::default();
        for decl in &parsed.decls {
            let classified = ClassifiedDecl::new(decl);
            counts.record(classified.label);
            writeln!(out, "{}", classified)?;
        }

        debug!(
            "Classified {} declarations in {}: {} general, {} func, {} def",
            counts.total(),
            parsed.path,
            counts.general,
            counts.func,
            counts.def
        );

        Ok(ClassifyOutcome::Classified(counts))
    }
}
