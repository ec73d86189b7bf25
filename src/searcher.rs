use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::{Path, MAIN_SEPARATOR};
use std::time::Instant;

use tracing::{info, trace};

use crate::builder::Suffix;
use crate::error::SearchError;
use crate::node::Node;
use crate::results::{Results, ScanStats};
use crate::sink::ResultSink;
use crate::traits::Matcher;

/// Walks a [`Node`] tree depth-first, reporting every matching file to a
/// notify callback and appending its path to a [`ResultSink`].
///
/// Matches are reported in pre-order: a directory's children are visited in
/// their stored order, recursing into subdirectories as they come. For each
/// match the callback fires first, then the record is written. A failed write
/// stops the walk immediately; nothing after it is notified or written, and
/// nothing before it is undone.
///
/// Build one with [`filesearch::searcher()`](crate::searcher) or
/// [`Searcher::new`]. Finish with [`close`](Searcher::close).
pub struct Searcher<'a, W: Write = LineWriter<File>> {
    notify:    Box<dyn FnMut(&str) + 'a>,
    matcher:   Box<dyn Matcher + 'a>,
    separator: char,
    sink:      ResultSink<W>,
}

/// Per-run counters.
#[derive(Default)]
struct Tally {
    matches: usize,
    files:   usize,
    dirs:    usize,
}

impl<'a> Searcher<'a> {
    /// Bind `notify` and an extension, and open `output` for appending.
    ///
    /// # Errors
    ///
    /// [`SearchError::SinkOpen`] if `output` cannot be opened.
    pub fn new(
        notify: impl FnMut(&str) + 'a,
        extension: impl Into<String>,
        output: impl AsRef<Path>,
    ) -> Result<Self, SearchError> {
        let sink = ResultSink::open(output)?;
        Ok(Self::from_parts(
            Box::new(notify),
            Box::new(Suffix::new(extension)),
            MAIN_SEPARATOR,
            sink,
        ))
    }
}

impl<'a, W: Write> Searcher<'a, W> {
    pub(crate) fn from_parts(
        notify: Box<dyn FnMut(&str) + 'a>,
        matcher: Box<dyn Matcher + 'a>,
        separator: char,
        sink: ResultSink<W>,
    ) -> Self {
        Self {
            notify,
            matcher,
            separator,
            sink,
        }
    }

    /// The result file (or writer label) matches are appended to.
    pub fn output(&self) -> &Path {
        self.sink.path()
    }

    /// Search the subtree rooted at `node`.
    ///
    /// `base` is the location of `node`'s parent; it does not include
    /// `node`'s own name. Every reported path is `base`, then each name from
    /// `node` down to the file, joined with the configured separator.
    ///
    /// May be called more than once; each run appends to the same sink.
    ///
    /// # Errors
    ///
    /// [`SearchError::SinkWrite`] on the first failed append. The traversal
    /// is abandoned at that point.
    pub fn search(&mut self, node: &Node, base: &str) -> Result<Results, SearchError> {
        let start = Instant::now();
        let mut tally = Tally::default();

        self.visit(node, base, &mut tally)?;

        let duration = start.elapsed();
        info!(
            matches = tally.matches,
            files = tally.files,
            dirs = tally.dirs,
            ?duration,
            "search completed"
        );

        Ok(Results {
            matches: tally.matches,
            stats: ScanStats::compute(tally.files, tally.dirs, duration),
        })
    }

    /// Flush and release the result file.
    ///
    /// # Errors
    ///
    /// [`SearchError::SinkWrite`] if the final flush fails.
    pub fn close(self) -> Result<(), SearchError> {
        self.sink.close()
    }

    fn visit(&mut self, node: &Node, base: &str, tally: &mut Tally) -> Result<(), SearchError> {
        match node {
            Node::Dir(dir) => {
                tally.dirs += 1;
                let path = join(base, dir.name(), self.separator);
                for child in dir.children() {
                    self.visit(child, &path, tally)?;
                }
            }
            Node::File(file) => {
                tally.files += 1;
                if !self.matcher.is_match(file.name()) {
                    return Ok(());
                }

                let path = join(base, file.name(), self.separator);
                trace!(%path, "match");

                // Notify before persisting: a later write failure must not
                // leave this match unreported.
                (self.notify)(&path);
                self.sink.append(&path)?;
                tally.matches += 1;
            }
        }
        Ok(())
    }
}

/// `base` + separator + `name`, without a leading separator for an empty
/// base and without doubling one `base` already ends with.
pub(crate) fn join(base: &str, name: &str, separator: char) -> String {
    if base.is_empty() {
        return name.to_owned();
    }

    let mut path = String::with_capacity(base.len() + 1 + name.len());
    path.push_str(base);
    if !base.ends_with(separator) {
        path.push(separator);
    }
    path.push_str(name);
    path
}
