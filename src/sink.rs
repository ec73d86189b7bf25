use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SearchError;

/// Append-only, newline-delimited log of matched paths.
///
/// The file is opened with `create + append` and never truncated, so repeated
/// runs accumulate. Each record is written as one `write_all` of
/// `path + "\n"`; with the default `LineWriter` that reaches the file before
/// `append` returns, so a failure is reported on the record that caused it.
///
/// Records are not escaped. A path containing `\n` reads back as more than
/// one line.
///
/// Call [`close`](Self::close) to flush and observe any final error. If the
/// sink is dropped instead (an early return, a panic), the writer still
/// flushes best-effort and the handle is released.
pub struct ResultSink<W: Write = LineWriter<File>> {
    writer: W,
    path: PathBuf,
}

impl ResultSink {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SearchError::SinkOpen {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "opened result file");

        Ok(Self {
            writer: LineWriter::new(file),
            path,
        })
    }
}

impl<W: Write> ResultSink<W> {
    /// Wrap an arbitrary writer. `label` is only used in error reports.
    pub fn from_writer(writer: W, label: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: label.into(),
        }
    }

    /// Where records go.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.
    pub fn append(&mut self, line: &str) -> Result<(), SearchError> {
        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');

        self.writer
            .write_all(record.as_bytes())
            .map_err(|source| SearchError::SinkWrite {
                path: self.path.clone(),
                source,
            })
    }

    /// Flush pending output and release the handle.
    pub fn close(mut self) -> Result<(), SearchError> {
        self.writer.flush().map_err(|source| SearchError::SinkWrite {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "closed result file");
        Ok(())
    }
}
