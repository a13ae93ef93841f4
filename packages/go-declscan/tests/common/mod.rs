//! Common test utilities

#![allow(dead_code)]

pub mod fixtures;

use std::path::{Path, PathBuf};

use go_declscan::cli::{self, Args, Outcome};
use go_declscan::DriverConfig;
use tempfile::TempDir;

/// A Go source written into its own temp directory
pub struct GoFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl GoFile {
    pub fn new(source: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("main.go");
        std::fs::write(&path, source).expect("write fixture");
        Self { _dir: dir, path }
    }
}

/// Run the driver and capture stdout
pub fn run_driver(file: Option<&Path>, config: &DriverConfig) -> (String, Outcome) {
    let args = Args {
        file: file.map(Path::to_path_buf),
    };
    let mut out = Vec::new();
    let outcome = cli::run(&args, config, &mut out).expect("in-memory write");
    (String::from_utf8(out).expect("utf-8 output"), outcome)
}

/// Run the strict driver on `source` and capture stdout
pub fn scan_source(source: &str) -> String {
    let file = GoFile::new(source);
    run_driver(Some(&file.path), &DriverConfig::strict()).0
}

/// First word of every output line
pub fn labels(output: &str) -> Vec<&str> {
    output
        .lines()
        .map(|line| line.split_once(' ').map_or(line, |(label, _)| label))
        .collect()
}
