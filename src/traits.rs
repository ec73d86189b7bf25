use crate::error::SearchError;
use crate::node::Node;

/// Decides whether a file name is a match.
///
/// Directories are never offered to a matcher; only file names are.
/// Any `Fn(&str) -> bool` closure is a `Matcher`.
///
/// # Example
///
/// ```rust
/// use filesearch::Matcher;
///
/// struct CaseInsensitiveSuffix(String);
///
/// impl Matcher for CaseInsensitiveSuffix {
///     fn is_match(&self, name: &str) -> bool {
///         name.to_lowercase().ends_with(&self.0)
///     }
/// }
///
/// assert!(CaseInsensitiveSuffix(".txt".into()).is_match("README.TXT"));
/// ```
pub trait Matcher {
    /// Returns `true` if a file with this name should be reported.
    fn is_match(&self, name: &str) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&str) -> bool,
{
    fn is_match(&self, name: &str) -> bool {
        self(name)
    }
}

/// Something that can produce a tree to search.
///
/// Implement this to search anything shaped like a directory hierarchy.
/// [`DirectorySource`](crate::DirectorySource) reads one from disk; a
/// [`Node`] is its own source.
pub trait Source {
    /// Build the tree. Called once per search.
    fn load(&self) -> Result<Node, SearchError>;
}

impl Source for Node {
    fn load(&self) -> Result<Node, SearchError> {
        Ok(self.clone())
    }
}
