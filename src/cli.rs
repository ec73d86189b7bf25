use clap::{ArgAction, Parser};
use std::path::{PathBuf, MAIN_SEPARATOR};

/// Search a file tree for names ending with an extension.
///
/// Without --root, a small built-in `Documents` tree is searched.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Base path the tree's root lives under. Prompted for if omitted.
    #[arg(short, long)]
    pub path: Option<String>,

    /// Extension (suffix) to search for, e.g. `.txt`. Prompted for if omitted.
    #[arg(short, long)]
    pub ext: Option<String>,

    /// Load the tree from this directory instead of the built-in one.
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Limit how deep --root is read.
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// File matched paths are appended to.
    #[arg(short, long, default_value = "search_results.txt")]
    pub output: PathBuf,

    /// Path separator used when joining names.
    #[arg(short, long, default_value_t = MAIN_SEPARATOR)]
    pub separator: char,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
