/// A single entry in the tree being searched: a file or a directory.
///
/// Only [`DirNode`] can own children, so attaching a child to a file is not
/// something the API can express. Trees are built once, up front, and are
/// only ever borrowed by a [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf entry.
    File(FileNode),

    /// A directory and its ordered children.
    Dir(DirNode),
}

/// A file. Holds nothing but its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    name: String,
}

/// A directory. Children are visited in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    name: String,
    children: Vec<Node>,
}

impl Node {
    /// A file node named `name`.
    pub fn file(name: impl Into<String>) -> Self {
        Self::File(FileNode::new(name))
    }

    /// A directory node named `name` with no children yet.
    pub fn dir(name: impl Into<String>) -> Self {
        Self::Dir(DirNode::new(name))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File(f) => &f.name,
            Self::Dir(d) => &d.name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Dir(_))
    }

    /// Children in traversal order. Always empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::File(_) => &[],
            Self::Dir(d) => &d.children,
        }
    }

    /// Mutable access to the directory behind this node, if it is one.
    pub fn as_dir_mut(&mut self) -> Option<&mut DirNode> {
        match self {
            Self::File(_) => None,
            Self::Dir(d) => Some(d),
        }
    }
}

impl FileNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl DirNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append `child` after any existing children.
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Builder form of [`add_child`](Self::add_child).
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add_child(child);
        self
    }
}

impl From<FileNode> for Node {
    fn from(f: FileNode) -> Self {
        Self::File(f)
    }
}

impl From<DirNode> for Node {
    fn from(d: DirNode) -> Self {
        Self::Dir(d)
    }
}
