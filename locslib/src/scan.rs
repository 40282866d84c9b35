//! The walker: expands scan roots, recurses into directories, and streams
//! every matching file through the classifier.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use glob::MatchOptions;

use crate::classify::{classify, LineKind};
use crate::error::LocsError;
use crate::options::ScanConfig;
use crate::sink::ExtractSink;
use crate::stats::{FileTally, Totals};
use crate::Result;

/// One concrete result of wildcard expansion or directory enumeration.
enum Entry {
    File(PathBuf),
    Directory(PathBuf),
}

impl Entry {
    fn from_path(path: PathBuf) -> Self {
        if path.is_dir() {
            Entry::Directory(path)
        } else {
            Entry::File(path)
        }
    }
}

/// Stateful scanner for one run.
///
/// Owns the running totals, the list of scan roots (verbatim, for the report
/// header), the optional extraction sink, and a shared cancellation flag.
/// Strictly sequential: one file at a time, one line at a time.
pub struct Walker {
    config: ScanConfig,
    totals: Totals,
    roots: Vec<String>,
    sink: Option<ExtractSink>,
    cancel: Arc<AtomicBool>,
    started: Instant,
}

impl Walker {
    /// Build a walker for `config`, opening the extraction sink up front if
    /// extraction is enabled.
    pub fn new(config: ScanConfig) -> Result<Self> {
        let sink = if config.extract {
            Some(ExtractSink::create(&config.extract_path)?)
        } else {
            None
        };
        Ok(Self {
            config,
            totals: Totals::new(),
            roots: Vec::new(),
            sink,
            cancel: Arc::new(AtomicBool::new(false)),
            started: Instant::now(),
        })
    }

    /// Shared flag that stops the scan when set (e.g. from a signal handler).
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Whether the scan has been asked to stop.
    pub fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Totals accumulated so far.
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Process one positional argument: record it for the report header and
    /// expand it as a glob pattern. Each match is dispatched as a file or a
    /// directory; a pattern with zero matches contributes nothing.
    pub fn process_root(&mut self, pattern: &str) -> Result<()> {
        self.roots.push(pattern.to_string());

        // Like unix globbing, `*` must not match a leading dot.
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let paths =
            glob::glob_with(pattern, options).map_err(|e| LocsError::InvalidGlob {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

        for entry in paths {
            if self.cancelled() {
                break;
            }
            let path = entry.map_err(|e| LocsError::Io(e.into_error()))?;
            self.process_entry(Entry::from_path(path))?;
        }
        Ok(())
    }

    fn process_entry(&mut self, entry: Entry) -> Result<()> {
        match entry {
            Entry::Directory(path) => self.process_dir(&path),
            Entry::File(path) => self.scan_file(&path),
        }
    }

    /// Descend into a directory, or skip it silently when recursion is off.
    /// With verbose on, the subtotal accumulated underneath is printed as a
    /// delta of the running totals.
    fn process_dir(&mut self, dir: &Path) -> Result<()> {
        if !self.config.recurse {
            return Ok(());
        }
        if self.config.verbose {
            println!(" dir {}: ...", dir.display());
            let before = self.totals.tally();
            self.walk_children(dir)?;
            let delta = self.totals.tally() - before;
            println!(" dir {}: {}", dir.display(), delta.summary());
            Ok(())
        } else {
            self.walk_children(dir)
        }
    }

    fn walk_children(&mut self, dir: &Path) -> Result<()> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Hidden entries stay out of the scan
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            children.push(entry.path());
        }
        children.sort();

        for child in children {
            if self.cancelled() {
                break;
            }
            self.process_entry(Entry::from_path(child))?;
        }
        Ok(())
    }

    /// Scan one file if its name carries the configured extension.
    ///
    /// Lines are read as raw bytes; the block-comment state is fresh per file
    /// and discarded at EOF. Source lines go to the sink when extraction is
    /// on. A file that vanished between match and open is skipped silently;
    /// any other read failure aborts the run.
    fn scan_file(&mut self, path: &Path) -> Result<()> {
        // Suffix match on raw bytes; paths are opaque data like line contents
        if !path
            .as_os_str()
            .as_encoded_bytes()
            .ends_with(self.config.extension.as_bytes())
        {
            return Ok(());
        }
        if !path.exists() {
            return Ok(());
        }

        let file = File::open(path).map_err(|source| LocsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);

        let mut tally = FileTally::new();
        let mut in_comment = false;
        let mut line: Vec<u8> = Vec::new();

        loop {
            if self.cancelled() {
                break;
            }
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|source| LocsError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            while matches!(line.last(), Some(b'\n') | Some(b'\r')) {
                line.pop();
            }

            let (kind, next) = classify(&line, in_comment);
            in_comment = next;
            tally.record(kind);

            if kind == LineKind::Source {
                if let Some(sink) = self.sink.as_mut() {
                    sink.append(line.trim_ascii_end())?;
                }
            }
        }

        self.totals.absorb(&tally);
        if self.config.verbose {
            println!(
                "file {} {}: {}",
                self.totals.files,
                path.display(),
                tally.summary()
            );
        }
        Ok(())
    }

    /// Flush the extraction sink, if open. Call once at run end; the caught
    /// interrupt path goes through here too.
    pub fn finish(&mut self) -> Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Render the final report: header with file count, extension and scan
    /// roots; the counts line with percentages; elapsed time and throughput.
    /// The lines/sec figure is shown only when the elapsed time is positive
    /// and the line count exceeds it, `-` otherwise.
    pub fn report(&self) -> String {
        let secs = self.started.elapsed().as_secs_f64();
        let lines = self.totals.lines();
        let rate = if secs > 0.0 && lines as f64 > secs {
            ((lines as f64 / secs) as u64).to_string()
        } else {
            "-".to_string()
        };

        let mut out = format!(
            "{} *{} files in: {:?}\n{}\n({:.3} secs, {} lines/sec)",
            self.totals.files,
            self.config.extension,
            self.roots,
            self.totals.summary(),
            secs,
            rate
        );
        if let Some(sink) = &self.sink {
            if sink.lines() > 0 {
                out.push_str(&format!("\nExtract all src into {}", sink.path().display()));
            }
        }
        out
    }
}
