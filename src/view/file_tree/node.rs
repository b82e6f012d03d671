use crate::model::filesystem::DirEntry;
use std::fmt;

/// Unique identifier for a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Represents a node in the file tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    /// Filesystem entry information
    pub entry: DirEntry,
    /// Parent node ID (None for root)
    pub parent: Option<NodeId>,
    /// Child node IDs (for expanded directories)
    pub children: Vec<NodeId>,
    pub state: NodeState,
}

impl TreeNode {
    pub fn new(id: NodeId, entry: DirEntry, parent: Option<NodeId>) -> Self {
        let state = if entry.is_dir() {
            NodeState::Collapsed
        } else {
            NodeState::Leaf
        };

        Self {
            id,
            entry,
            parent,
            children: Vec::new(),
            state,
        }
    }

    /// Placeholder row standing in for a directory that could not be listed
    pub fn error(id: NodeId, entry: DirEntry, parent: NodeId, message: String) -> Self {
        Self {
            id,
            entry,
            parent: Some(parent),
            children: Vec::new(),
            state: NodeState::Error(message),
        }
    }

    pub fn is_dir(&self) -> bool {
        !self.is_error() && self.entry.is_dir()
    }

    pub fn is_file(&self) -> bool {
        !self.is_error() && self.entry.is_file()
    }

    pub fn is_expanded(&self) -> bool {
        self.state == NodeState::Expanded
    }

    pub fn is_collapsed(&self) -> bool {
        self.state == NodeState::Collapsed
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, NodeState::Error(_))
    }

    /// Text shown for the node, without icon or indentation
    pub fn label(&self) -> &str {
        match &self.state {
            NodeState::Error(message) => message,
            _ => &self.entry.name,
        }
    }
}

/// State of a tree node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeState {
    /// Directory not yet expanded
    Collapsed,
    /// Directory expanded, children loaded
    Expanded,
    /// Synthetic entry reporting a listing failure
    Error(String),
    /// File (leaf node, cannot be expanded)
    Leaf,
}
