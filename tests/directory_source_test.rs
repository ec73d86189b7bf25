use std::fs;
use std::io;
use std::path::Path;

use filesearch::{searcher, DirectorySource, Node, SearchError, Source};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a temporary directory tree for testing.
///
/// Structure:
/// ```text
/// tmp/
///   b_report.txt
///   a_notes.txt
///   image.png
///   .hidden.txt
///   subdir/
///     shopping_list.txt
///     deeper/
///       old.txt
/// ```
fn setup_test_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("b_report.txt"), "quarterly report").unwrap();
    fs::write(root.join("a_notes.txt"), "notes").unwrap();
    fs::write(root.join("image.png"), [0u8; 4]).unwrap();
    fs::write(root.join(".hidden.txt"), "hidden").unwrap();

    let sub = root.join("subdir");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("shopping_list.txt"), "milk").unwrap();

    let deeper = sub.join("deeper");
    fs::create_dir(&deeper).unwrap();
    fs::write(deeper.join("old.txt"), "old").unwrap();

    dir
}

fn count_files(node: &Node) -> usize {
    if node.is_dir() {
        node.children().iter().map(count_files).sum()
    } else {
        1
    }
}

fn names(node: &Node) -> Vec<&str> {
    node.children().iter().map(Node::name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn loads_every_entry_sorted_by_name() {
    let dir = setup_test_dir();
    let tree = DirectorySource::new(dir.path()).load().unwrap();

    let root_name = dir.path().file_name().unwrap().to_string_lossy();
    assert!(tree.is_dir());
    assert_eq!(tree.name(), root_name);
    assert_eq!(
        names(&tree),
        [".hidden.txt", "a_notes.txt", "b_report.txt", "image.png", "subdir"]
    );

    let subdir = &tree.children()[4];
    assert!(subdir.is_dir());
    assert_eq!(names(subdir), ["deeper", "shopping_list.txt"]);
    assert_eq!(names(&subdir.children()[0]), ["old.txt"]);
}

#[test]
fn file_count_agrees_with_walkdir() {
    let dir = setup_test_dir();
    let tree = DirectorySource::new(dir.path()).load().unwrap();

    let expected = walkdir::WalkDir::new(dir.path())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count();

    assert_eq!(count_files(&tree), expected);
}

#[test]
fn max_depth_limits_the_load() {
    let dir = setup_test_dir();
    let tree = DirectorySource::new(dir.path()).max_depth(1).load().unwrap();

    let subdir = &tree.children()[4];
    assert_eq!(subdir.name(), "subdir");
    assert!(subdir.is_dir());
    assert!(subdir.children().is_empty());
}

#[test]
fn single_file_root_loads_as_file() {
    let dir = setup_test_dir();
    let tree = DirectorySource::new(dir.path().join("image.png"))
        .load()
        .unwrap();

    assert_eq!(tree, Node::file("image.png"));
}

#[test]
fn root_is_kept_as_given() {
    let dir = setup_test_dir();
    let source = DirectorySource::new(dir.path()).max_depth(0);

    assert_eq!(source.root(), dir.path());
    let tree = source.load().unwrap();
    assert!(tree.is_dir());
    assert!(tree.children().is_empty());
}

#[cfg(unix)]
#[test]
fn unreadable_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let dir = setup_test_dir();
    let locked = dir.path().join("subdir").join("deeper");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits don't apply to root.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let loaded = DirectorySource::new(dir.path()).load();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let tree = loaded.unwrap();

    let subdir = &tree.children()[4];
    assert_eq!(names(subdir), ["deeper", "shopping_list.txt"]);
    let deeper = &subdir.children()[0];
    assert!(deeper.is_dir());
    assert!(deeper.children().is_empty());
}

#[test]
fn missing_root_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = DirectorySource::new(&missing).load().unwrap_err();
    assert!(matches!(err, SearchError::NotFound(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn search_over_loaded_tree_reports_real_paths() {
    let dir = setup_test_dir();
    let tree = DirectorySource::new(dir.path()).load().unwrap();
    let parent = dir.path().parent().unwrap();

    let mut found = Vec::new();
    let mut s = searcher()
        .notify(|path| found.push(path.to_owned()))
        .extension(".txt")
        .with_writer(io::sink());
    s.search(&tree, &parent.to_string_lossy()).unwrap();
    s.close().unwrap();

    let expected: Vec<String> = [
        ".hidden.txt",
        "a_notes.txt",
        "b_report.txt",
        "subdir/deeper/old.txt",
        "subdir/shopping_list.txt",
    ]
    .iter()
    .map(|rel| dir.path().join(rel).to_string_lossy().into_owned())
    .collect();

    assert_eq!(found, expected);
    assert!(found.iter().all(|p| Path::new(p).is_file()));
}
