//! # locs
//!
//! A lines-of-code counter for C-family sources.
//!
//! Scans the given files, directories and glob patterns for files with a
//! fixed extension (`.java`), classifies every line as blank, comment or
//! source, and prints aggregate counts with percentages and throughput.
//! With `-extract`, every source line is also concatenated into
//! `./all_src.txt`.
//!
//! ## Usage
//!
//! ```bash
//! # Count one directory tree
//! locs -recurse ./Projects
//!
//! # Multiple roots, flags may be abbreviated to any unambiguous prefix
//! locs -rec -ext ./Projects ./Projects2
//!
//! # Per-file and per-directory subtotals while scanning
//! locs -r -v ./src
//! ```
//!
//! An interrupt (ctrl-c) stops the scan early but still prints the report
//! for whatever was counted, and still closes the extraction file.

use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::Ordering;

use anyhow::Result;
use locslib::{ScanConfig, Walker};

mod args;

use args::{parse, usage, Invocation};

fn program_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| argv0.to_string())
}

/// Run the scan over all roots and render the report. A caught interrupt
/// breaks out of the root loop; partial totals still make it into the
/// report, and the sink is flushed either way.
fn run(config: ScanConfig, roots: Vec<String>) -> Result<String> {
    let mut walker = Walker::new(config)?;

    let cancel = walker.cancel_flag();
    ctrlc::set_handler(move || cancel.store(true, Ordering::SeqCst))?;

    for root in &roots {
        if walker.cancelled() {
            break;
        }
        walker.process_root(root)?;
    }
    walker.finish()?;

    Ok(walker.report())
}

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().collect();
    let program = argv
        .first()
        .map(|s| program_name(s))
        .unwrap_or_else(|| "locs".to_string());

    match parse(&argv[1..]) {
        Ok(Invocation::Help) => {
            println!("{}", usage(&program));
            ExitCode::SUCCESS
        }
        Ok(Invocation::Scan { config, roots }) => match run(config, roots) {
            Ok(report) => {
                println!("{}", report);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{}: {}", program, err);
                ExitCode::FAILURE
            }
        },
        Err(token) => {
            println!("{}: invalid option: {}", program, token);
            ExitCode::FAILURE
        }
    }
}
