//! # locslib
//!
//! A lines-of-code counter library for C-family sources. Classifies every
//! line of every matching file as blank, comment, or source, and aggregates
//! counts across files and directories.
//!
//! ## Overview
//!
//! The core is a small per-line state machine ([`classify`]) that carries a
//! single "inside a block comment" flag between lines. Around it sits the
//! [`Walker`], which expands wildcard scan roots, recurses into directories,
//! streams file bytes through the classifier, and renders the final report.
//! Optionally, every source line is copied into one concatenated output file
//! (the [`ExtractSink`]).
//!
//! The classifier is a deliberate single-pass heuristic rather than a lexer;
//! see the [`classify`] module for the limitations it keeps.
//!
//! ## Example
//!
//! ```rust
//! use locslib::{ScanConfig, Walker};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("Main.java"), "// entry\nclass Main {}\n").unwrap();
//!
//! let mut walker = Walker::new(ScanConfig::new().recurse(true)).unwrap();
//! walker.process_root(dir.path().to_str().unwrap()).unwrap();
//! walker.finish().unwrap();
//!
//! assert_eq!(walker.totals().files, 1);
//! assert_eq!(walker.totals().comment, 1);
//! assert_eq!(walker.totals().source, 1);
//! ```

pub mod classify;
pub mod error;
pub mod options;
pub mod scan;
pub mod sink;
pub mod stats;

pub use classify::{classify, LineKind};
pub use error::LocsError;
pub use options::ScanConfig;
pub use scan::Walker;
pub use sink::ExtractSink;
pub use stats::{FileTally, Totals};

/// Result type for locslib operations
pub type Result<T> = std::result::Result<T, LocsError>;
