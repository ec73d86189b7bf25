use std::io::Write;
use std::path::{PathBuf, MAIN_SEPARATOR};

use crate::error::SearchError;
use crate::searcher::Searcher;
use crate::sink::ResultSink;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// SearcherBuilder
// ---------------------------------------------------------------------------

/// Configures a [`Searcher`].
///
/// Created via [`filesearch::searcher()`](crate::searcher). Chain the
/// settings, then [`open`](SearcherBuilder::open) the result file.
///
/// # Example
///
/// ```rust,ignore
/// let mut searcher = filesearch::searcher()
///     .notify(|path| println!("File found: {path}"))
///     .extension(".txt")
///     .separator('\\')
///     .output("search_results.txt")
///     .open()?;
/// ```
pub struct SearcherBuilder<'a> {
    notify:    Option<Box<dyn FnMut(&str) + 'a>>,
    matcher:   Option<Box<dyn Matcher + 'a>>,
    separator: char,
    output:    Option<PathBuf>,
}

impl Default for SearcherBuilder<'_> {
    fn default() -> Self {
        Self {
            notify:    None,
            matcher:   None,
            separator: MAIN_SEPARATOR,
            output:    None,
        }
    }
}

impl<'a> SearcherBuilder<'a> {
    // ── Observer ──────────────────────────────────────────────────────────

    /// Called once per match with the match's full path, before the path is
    /// written to the result file. The default does nothing.
    pub fn notify(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.notify = Some(Box::new(f));
        self
    }

    // ── Matcher ───────────────────────────────────────────────────────────

    /// Match files whose name ends with `extension`.
    ///
    /// Compared verbatim and case-sensitively, leading dot included if given.
    /// An empty extension matches every file.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.matcher = Some(Box::new(Suffix::new(extension)));
        self
    }

    /// Use a custom matcher instead of a suffix.
    pub fn with_matcher(mut self, m: impl Matcher + 'a) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    // ── Paths ─────────────────────────────────────────────────────────────

    /// Separator used to join path segments. Defaults to the platform's.
    pub fn separator(mut self, sep: char) -> Self {
        self.separator = sep;
        self
    }

    /// File that matched paths are appended to. Required by [`open`](Self::open).
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Open the output file and return a ready searcher.
    ///
    /// With no matcher configured, every file matches.
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingOutput`] if [`output`](Self::output) was never
    /// set; [`SearchError::SinkOpen`] if the file cannot be opened for appending.
    pub fn open(self) -> Result<Searcher<'a>, SearchError> {
        let path = self.output.as_ref().ok_or(SearchError::MissingOutput)?;
        let sink = ResultSink::open(path)?;
        Ok(self.finish(sink))
    }

    /// Send records to `writer` instead of a file. Any configured
    /// [`output`](Self::output) is used only as the label in error reports.
    pub fn with_writer<W: Write>(self, writer: W) -> Searcher<'a, W> {
        let label = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from("<writer>"));
        let sink = ResultSink::from_writer(writer, label);
        self.finish(sink)
    }

    fn finish<W: Write>(self, sink: ResultSink<W>) -> Searcher<'a, W> {
        let notify = self.notify.unwrap_or_else(|| Box::new(|_: &str| {}));
        let matcher = self.matcher.unwrap_or_else(|| Box::new(AllMatcher));
        Searcher::from_parts(notify, matcher, self.separator, sink)
    }
}

// ---------------------------------------------------------------------------
// Built-in matchers
// ---------------------------------------------------------------------------

/// Matches names ending with a fixed suffix (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix(String);

impl Suffix {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self(suffix.into())
    }
}

impl Matcher for Suffix {
    fn is_match(&self, name: &str) -> bool {
        name.ends_with(self.0.as_str())
    }
}

/// Matches every file. Used when no matcher is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllMatcher;

impl Matcher for AllMatcher {
    fn is_match(&self, _name: &str) -> bool {
        true
    }
}
