//! The extraction sink: one output file collecting every source line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::LocsError;
use crate::Result;

/// Append-only sink for extracted source lines.
///
/// Created (truncating any previous file) once at walker construction when
/// extraction is enabled. Lines from all scanned files land here in scan
/// order, one per line, with no file-boundary markers. The underlying file
/// handle is released on drop, so an aborted or interrupted run still closes
/// it; whatever was flushed by then stays on disk.
#[derive(Debug)]
pub struct ExtractSink {
    writer: BufWriter<File>,
    path: PathBuf,
    lines: u64,
}

impl ExtractSink {
    /// Create or truncate the output file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| LocsError::SinkWrite {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
            lines: 0,
        })
    }

    /// Append one source line followed by a single `\n`.
    pub fn append(&mut self, line: &[u8]) -> Result<()> {
        self.write(line)?;
        self.write(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|source| LocsError::SinkWrite {
                path: self.path.clone(),
                source,
            })
    }

    /// Flush buffered output to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|source| LocsError::SinkWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Number of lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Path of the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
