//! Command-line driver shared by the `declscan` binaries

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DriverConfig;
use crate::features::classify::{ClassifyFileUseCase, ClassifyOutcome};
use crate::features::parsing::TreeSitterGoParser;

/// Printed by the strict variant when no path is given
pub const FILE_REQUIRED: &str = "File required";

#[derive(ClapParser, Debug, Clone)]
#[command(version)]
#[command(about = "Print a coarse classification of each top-level declaration in a Go file", long_about = None)]
pub struct Args {
    /// Go source file to scan
    pub file: Option<PathBuf>,
}

/// Result of one driver run
#[derive(Debug)]
pub enum Outcome {
    /// No path given and none configured
    FileRequired,
    Ran(ClassifyOutcome),
}

/// Run the driver, writing all user-facing output to `out`
pub fn run<W: Write>(args: &Args, config: &DriverConfig, out: &mut W) -> io::Result<Outcome> {
    let Some(path) = config.resolve_path(args.file.as_deref()) else {
        writeln!(out, "{}", FILE_REQUIRED)?;
        return Ok(Outcome::FileRequired);
    };

    info!("Scanning {}", path.display());
    let outcome = ClassifyFileUseCase::new(TreeSitterGoParser::new()).execute(path, out)?;
    Ok(Outcome::Ran(outcome))
}

/// Install the stderr log subscriber (`RUST_LOG`, default `warn`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_optional_file() {
        let args = Args::try_parse_from(["declscan"]).unwrap();
        assert_eq!(args.file, None);

        let args = Args::try_parse_from(["declscan", "x.go"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("x.go")));
    }

    #[test]
    fn test_args_reject_second_file() {
        assert!(Args::try_parse_from(["declscan", "a.go", "b.go"]).is_err());
    }

    #[test]
    fn test_strict_without_file() {
        let mut out = Vec::new();
        let outcome = run(&Args { file: None }, &DriverConfig::strict(), &mut out).unwrap();

        assert!(matches!(outcome, Outcome::FileRequired));
        assert_eq!(String::from_utf8(out).unwrap(), "File required\n");
    }
}
