//! Argument parsing: a flat, single-dash flag set matched by prefix.
//!
//! Flags are resolved against a fixed option table: any token starting with
//! `-` must be an unambiguous prefix of exactly one full flag name (`-r`,
//! `-rec` and `-recurse` all mean recurse). A token matching zero names, or
//! more than one (`-` alone matches all four), is a usage error. `--` is a
//! tolerated no-op. Everything else is a scan root, order preserved.

use locslib::ScanConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Help,
    Recurse,
    Extract,
    Verbose,
}

const OPTIONS: [(&str, Flag); 4] = [
    ("-help", Flag::Help),
    ("-recurse", Flag::Recurse),
    ("-extract", Flag::Extract),
    ("-verbose", Flag::Verbose),
];

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// `-help` was given; print usage and stop
    Help,
    /// Run a scan with the resolved configuration over the given roots
    Scan {
        config: ScanConfig,
        roots: Vec<String>,
    },
}

/// Usage string printed for `-help`.
pub fn usage(program: &str) -> String {
    format!(
        "usage: {} [-help] [-recurse] [-verbose] [-extract] <file_or_dir_name> ...",
        program
    )
}

/// Parse the arguments after the program name.
///
/// All flags are resolved before any scanning happens, so the configuration
/// is fixed up front regardless of where flags sit relative to the roots.
/// On error, returns the offending token.
pub fn parse(args: &[String]) -> Result<Invocation, String> {
    let mut config = ScanConfig::new();
    let mut roots = Vec::new();

    for arg in args {
        if !arg.starts_with('-') {
            roots.push(arg.clone());
            continue;
        }
        if arg == "--" {
            continue;
        }
        match resolve(arg) {
            Some(Flag::Help) => return Ok(Invocation::Help),
            Some(Flag::Recurse) => config.recurse = true,
            Some(Flag::Extract) => config.extract = true,
            Some(Flag::Verbose) => config.verbose = true,
            None => return Err(arg.clone()),
        }
    }

    Ok(Invocation::Scan { config, roots })
}

/// Resolve a `-token` to a flag: exactly one table entry must have it as a
/// prefix.
fn resolve(token: &str) -> Option<Flag> {
    let mut hits = OPTIONS.iter().filter(|(name, _)| name.starts_with(token));
    match (hits.next(), hits.next()) {
        (Some(&(_, flag)), None) => Some(flag),
        _ => None,
    }
}
