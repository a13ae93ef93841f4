//! declscan: classify the top-level declarations of one Go file
//!
//! # Usage
//!
//! ```bash
//! declscan path/to/file.go
//! ```
//!
//! Without an argument it prints `File required` and exits.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use go_declscan::cli::{self, Args};
use go_declscan::DriverConfig;

fn main() -> ExitCode {
    cli::init_tracing();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli::run(&args, &DriverConfig::strict(), &mut out).and_then(|_| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}
