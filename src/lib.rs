//! # filesearch
//!
//! Depth-first suffix search over a tree of files and directories.
//!
//! A [`Searcher`] walks a [`Node`] tree, and for every file whose name ends
//! with the configured extension it calls a notify callback with the file's
//! full path, then appends that path to a result file. The result file is
//! opened in append mode and never truncated, so it accumulates across runs.
//!
//! Trees are built in memory with [`Node`] and [`DirNode`], or read from disk
//! with [`DirectorySource`].
//!
//! # Quick Start
//!
//! ```rust
//! use filesearch::{DirNode, FileNode, Node};
//!
//! let tree: Node = DirNode::new("Documents")
//!     .with_child(FileNode::new("notes.txt"))
//!     .with_child(FileNode::new("todo.txt"))
//!     .with_child(
//!         DirNode::new("subfolder")
//!             .with_child(FileNode::new("shopping_list.txt"))
//!             .with_child(FileNode::new("image.png")),
//!     )
//!     .into();
//!
//! let dir = tempfile::tempdir().unwrap();
//! let output = dir.path().join("search_results.txt");
//!
//! let mut found = Vec::new();
//! let mut searcher = filesearch::searcher()
//!     .notify(|path| found.push(path.to_string()))
//!     .extension(".txt")
//!     .separator('\\')
//!     .output(&output)
//!     .open()
//!     .unwrap();
//!
//! let results = searcher.search(&tree, r"C:\Users\Test").unwrap();
//! searcher.close().unwrap();
//!
//! assert_eq!(results.matches, 3);
//! assert_eq!(found, [
//!     r"C:\Users\Test\Documents\notes.txt",
//!     r"C:\Users\Test\Documents\todo.txt",
//!     r"C:\Users\Test\Documents\subfolder\shopping_list.txt",
//! ]);
//! assert_eq!(std::fs::read_to_string(&output).unwrap().lines().count(), 3);
//! ```
//!
//! # Failure
//!
//! Opening the result file is the only fallible step of construction. During
//! a search, the first failed append aborts the walk with
//! [`SearchError::SinkWrite`]; matches already reported stay reported.

#![forbid(unsafe_code)]

mod builder;
mod error;
mod node;
mod results;
mod searcher;
mod sink;
mod source;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{AllMatcher, SearcherBuilder, Suffix};
pub use error::SearchError;
pub use node::{DirNode, FileNode, Node};
pub use results::{Results, ScanStats};
pub use searcher::Searcher;
pub use sink::ResultSink;
pub use source::DirectorySource;
pub use traits::{Matcher, Source};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearcherBuilder`].
///
/// # Example
///
/// ```rust
/// use filesearch::Node;
///
/// let mut out = Vec::new();
/// let mut searcher = filesearch::searcher()
///     .extension(".rs")
///     .separator('/')
///     .with_writer(&mut out);
///
/// let results = searcher.search(&Node::file("main.rs"), "src").unwrap();
/// searcher.close().unwrap();
///
/// assert_eq!(results.matches, 1);
/// assert_eq!(out, b"src/main.rs\n");
/// ```
pub fn searcher<'a>() -> SearcherBuilder<'a> {
    SearcherBuilder::default()
}
