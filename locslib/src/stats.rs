//! Core data structures for line tallies.

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

use crate::classify::LineKind;

/// Line counts for one file (or one directory subtree, as a delta).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTally {
    /// Whitespace-only lines
    pub blank: u64,
    /// Comment lines, line and block
    pub comment: u64,
    /// Source code lines
    pub source: u64,
}

impl FileTally {
    /// Create a new tally with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified line.
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Source => self.source += 1,
        }
    }

    /// Total lines in this tally.
    pub fn lines(&self) -> u64 {
        self.blank + self.comment + self.source
    }

    /// Render the counts line shared by verbose output and the final report:
    /// `N blank (p%), N comment (p%), N source (p%), N source+comment (p%),
    /// N total lines`. Percentages are out of the total line count at one
    /// decimal place, and omitted entirely when the tally is empty.
    pub fn summary(&self) -> String {
        let n = self.lines();
        let mut parts: Vec<String> = [
            ("blank", self.blank),
            ("comment", self.comment),
            ("source", self.source),
            ("source+comment", self.source + self.comment),
        ]
        .iter()
        .map(|(label, v)| {
            if n > 0 {
                format!("{} {} ({:.1}%)", v, label, (*v as f64 * 100.0) / n as f64)
            } else {
                format!("{} {}", v, label)
            }
        })
        .collect();
        parts.push(format!("{} total lines", n));
        parts.join(", ")
    }
}

impl Add for FileTally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            blank: self.blank + other.blank,
            comment: self.comment + other.comment,
            source: self.source + other.source,
        }
    }
}

impl AddAssign for FileTally {
    fn add_assign(&mut self, other: Self) {
        self.blank += other.blank;
        self.comment += other.comment;
        self.source += other.source;
    }
}

impl Sub for FileTally {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            blank: self.blank.saturating_sub(other.blank),
            comment: self.comment.saturating_sub(other.comment),
            source: self.source.saturating_sub(other.source),
        }
    }
}

/// Run-wide accumulated totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Whitespace-only lines
    pub blank: u64,
    /// Comment lines, line and block
    pub comment: u64,
    /// Source code lines
    pub source: u64,
    /// Files matched and scanned
    pub files: u64,
}

impl Totals {
    /// Create new zeroed totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one finished file: add its line counts and bump `files` by one.
    /// Empty files still count as a file.
    pub fn absorb(&mut self, tally: &FileTally) {
        self.blank += tally.blank;
        self.comment += tally.comment;
        self.source += tally.source;
        self.files += 1;
    }

    /// Project the line counters back to a tally, for deltas and formatting.
    pub fn tally(&self) -> FileTally {
        FileTally {
            blank: self.blank,
            comment: self.comment,
            source: self.source,
        }
    }

    /// Total lines across all scanned files.
    pub fn lines(&self) -> u64 {
        self.blank + self.comment + self.source
    }

    /// Counts line for the final report.
    pub fn summary(&self) -> String {
        self.tally().summary()
    }
}
