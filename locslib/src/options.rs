//! Scan configuration.

use std::path::{Path, PathBuf};

/// Configuration for one scan run. Immutable once the walker is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Required file-name suffix; files not ending with it are ignored
    pub extension: String,
    /// Descend into directories (off: directory arguments are skipped)
    pub recurse: bool,
    /// Print per-file and per-directory subtotal lines during the scan
    pub verbose: bool,
    /// Append every source line to the extraction output file
    pub extract: bool,
    /// Where the extraction output goes
    pub extract_path: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: ".java".to_string(),
            recurse: false,
            verbose: false,
            extract: false,
            extract_path: PathBuf::from("./all_src.txt"),
        }
    }
}

impl ScanConfig {
    /// Create the default configuration (`.java`, no recursion, quiet,
    /// no extraction).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file-name suffix to match.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }

    /// Enable or disable directory descent.
    pub fn recurse(mut self, yes: bool) -> Self {
        self.recurse = yes;
        self
    }

    /// Enable or disable per-file progress lines.
    pub fn verbose(mut self, yes: bool) -> Self {
        self.verbose = yes;
        self
    }

    /// Enable or disable source extraction.
    pub fn extract(mut self, yes: bool) -> Self {
        self.extract = yes;
        self
    }

    /// Set the extraction output path.
    pub fn extract_to(mut self, path: impl AsRef<Path>) -> Self {
        self.extract_path = path.as_ref().to_path_buf();
        self
    }
}
