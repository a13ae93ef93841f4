//! declscan-default: like `declscan`, but scans `./main.go` when no path is given

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
    match cli::run(&args, &DriverConfig::with_default_path(), &mut out).and_then(|_| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}
