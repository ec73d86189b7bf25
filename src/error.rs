use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    // Config
    #[error("no output file configured")]
    MissingOutput,

    // Sink
    #[error("cannot open result file {}", .path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write to result file {}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Source loading
    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("path not found")]
    NotFound(PathBuf),

    #[error("source error: {0}")]
    Source(String),
}

impl SearchError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::SinkOpen { path: p, .. }
            | Self::SinkWrite { path: p, .. } => Some(p),
            Self::MissingOutput | Self::Source(_) => None,
        }
    }

    /// Whether loading a tree can continue past this error.
    ///
    /// Only unreadable entries are skipped. Sink failures are always fatal:
    /// a broken write aborts the whole search.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}
