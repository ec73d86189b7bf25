use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::node::{DirNode, FileNode, Node};
use crate::traits::Source;

// ---------------------------------------------------------------------------
// DirectorySource
// ---------------------------------------------------------------------------

/// Reads a directory from disk into a [`Node`] tree.
///
/// Every entry is included: no ignore files, no hidden-file filtering, and
/// symlinks are not followed (a link is recorded as a file). Siblings are
/// sorted by file name so repeated loads produce the same traversal order.
///
/// Unreadable entries are logged and skipped. Any other walk error aborts
/// the load.
pub struct DirectorySource {
    root:      PathBuf,
    max_depth: Option<usize>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:      root.into(),
            max_depth: None,
        }
    }

    /// Limit how deep the load descends. `0` loads the root only.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Source for DirectorySource {
    fn load(&self) -> Result<Node, SearchError> {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .hidden(false)
            .ignore(false)
            .parents(false)
            .follow_links(false)
            .max_depth(self.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        // Open directories from the root down to the current entry's parent.
        // The walk is pre-order, so an entry at depth `d` belongs to stack[d - 1].
        let mut open: Vec<DirNode> = Vec::new();
        let mut entries = 0usize;

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(e) => {
                    let err = map_ignore_error(e);
                    if err.is_recoverable() {
                        warn!(error = %err, path = ?err.path(), "skipping unreadable entry");
                        continue;
                    }
                    return Err(err);
                }
            };
            entries += 1;

            let depth = entry.depth();
            fold_to(&mut open, depth);

            let name = entry_name(&entry);
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());

            if is_dir {
                open.push(DirNode::new(name));
            } else if depth == 0 {
                debug!(root = %self.root.display(), "loaded single file");
                return Ok(Node::File(FileNode::new(name)));
            } else if let Some(parent) = open.last_mut() {
                parent.add_child(FileNode::new(name));
            }
        }

        fold_to(&mut open, 1);
        let root = open
            .pop()
            .ok_or_else(|| SearchError::NotFound(self.root.clone()))?;

        debug!(root = %self.root.display(), entries, "loaded directory tree");
        Ok(Node::Dir(root))
    }
}

/// Close directories until only `depth` remain open, attaching each closed
/// directory to the one above it.
fn fold_to(open: &mut Vec<DirNode>, depth: usize) {
    while open.len() > depth.max(1) {
        if let Some(done) = open.pop() {
            if let Some(parent) = open.last_mut() {
                parent.add_child(done);
            }
        }
    }
}

/// Last path component, or the whole path for roots like `/` or `.`.
fn entry_name(entry: &DirEntry) -> String {
    match entry.path().file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => entry.path().to_string_lossy().into_owned(),
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to SearchError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> SearchError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => match io_err.kind() {
                std::io::ErrorKind::PermissionDenied => SearchError::PermissionDenied(path),
                std::io::ErrorKind::NotFound => SearchError::NotFound(path),
                _ => SearchError::Source(format!("{}: {}", path.display(), io_err)),
            },
            other => SearchError::Source(format!("{}: {}", path.display(), other)),
        },
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err),
        ignore::Error::Loop { child, .. } => {
            SearchError::Source(format!("symlink loop at {}", child.display()))
        }
        other => SearchError::Source(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn io_error(kind: io::ErrorKind, path: &str, depth: usize) -> ignore::Error {
        ignore::Error::WithDepth {
            depth,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from(path),
                err: Box::new(ignore::Error::Io(io::Error::from(kind))),
            }),
        }
    }

    #[test]
    fn permission_denied_is_recoverable() {
        let err = map_ignore_error(io_error(io::ErrorKind::PermissionDenied, "locked", 2));

        assert!(matches!(err, SearchError::PermissionDenied(_)));
        assert_eq!(err.path(), Some(&PathBuf::from("locked")));
        assert!(err.is_recoverable());
    }

    #[test]
    fn not_found_is_fatal() {
        let err = map_ignore_error(io_error(io::ErrorKind::NotFound, "gone", 0));

        assert!(matches!(err, SearchError::NotFound(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn other_io_errors_are_fatal() {
        let err = map_ignore_error(io_error(io::ErrorKind::Other, "odd", 1));

        assert!(matches!(err, SearchError::Source(ref msg) if msg.starts_with("odd")));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn fold_attaches_closed_dirs_to_parents() {
        let mut open = vec![DirNode::new("root"), DirNode::new("a"), DirNode::new("b")];
        fold_to(&mut open, 1);

        assert_eq!(open.len(), 1);
        let a = &open[0].children()[0];
        assert_eq!(a.name(), "a");
        assert_eq!(a.children()[0].name(), "b");
    }
}
