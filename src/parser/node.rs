/// A single directory or file entry of a parsed tree.
///
/// Children are kept in the order they appeared in the input, which is also
/// the order they get created in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub is_dir: bool,
    /// Distance from the root, the root itself being 0
    pub level: usize,
    pub children: Vec<Node>,
}

impl Node {
    pub fn dir(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            level,
            children: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            level,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn find_child(&self, name: impl AsRef<str>) -> Option<&Node> {
        self.children.iter().find(|child| child.name == name.as_ref())
    }

    /// Number of nodes in this subtree, including `self`
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
