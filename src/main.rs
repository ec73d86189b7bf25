mod cli;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use filesearch::{DirNode, DirectorySource, FileNode, Node, Source};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let (source, root_parent): (Box<dyn Source>, Option<String>) = match &args.root {
        Some(dir) => {
            let mut source = DirectorySource::new(dir);
            if let Some(depth) = args.max_depth {
                source = source.max_depth(depth);
            }
            let parent = parent_of(source.root());
            (Box::new(source), Some(parent))
        }
        None => (Box::new(documents_tree()), None),
    };
    let tree = source.load().context("Failed to load search tree")?;

    let base = match (&args.path, root_parent) {
        (Some(path), _) => path.clone(),
        (None, Some(parent)) => parent,
        (None, None) => prompt("Enter directory path: ")?,
    };
    let extension = match &args.ext {
        Some(ext) => ext.clone(),
        None => prompt("Enter file extension to search for: ")?,
    };

    let mut searcher = filesearch::searcher()
        .notify(|path| println!("File found: {path}"))
        .extension(extension)
        .separator(args.separator)
        .output(&args.output)
        .open()
        .context("Failed to open result file")?;

    println!("Searching...");
    let output = searcher.output().to_path_buf();
    let outcome = searcher.search(&tree, &base);
    let closed = searcher.close();

    outcome.context("Search aborted")?;
    closed.context("Failed to close result file")?;

    println!("Search completed. Results saved to {}.", output.display());
    Ok(())
}

/// The tree searched when no --root is given.
fn documents_tree() -> Node {
    DirNode::new("Documents")
        .with_child(FileNode::new("notes.txt"))
        .with_child(FileNode::new("todo.txt"))
        .with_child(
            DirNode::new("subfolder")
                .with_child(FileNode::new("shopping_list.txt"))
                .with_child(FileNode::new("image.png")),
        )
        .into()
}

/// Base path for a loaded directory: the directory's parent, or empty.
fn parent_of(dir: &Path) -> String {
    dir.parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn prompt(message: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("No input for {:?}", message.trim_end_matches(": "));
    }

    // Only the line terminator is stripped; the value is otherwise verbatim.
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
