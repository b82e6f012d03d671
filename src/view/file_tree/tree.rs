use super::lister::{list_children, listing_error_message};
use super::node::{NodeId, NodeState, TreeNode};
use crate::model::filesystem::{DirEntry, EntryType, FileSystem};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File tree with lazy loading
///
/// The tree starts with just the root node. Directories are only read when
/// explicitly expanded via `expand_node()`, and collapsing a directory drops
/// its whole subtree.
///
/// The root itself is never displayed: `get_visible_nodes` starts at its
/// children.
pub struct FileTree {
    root_path: PathBuf,
    /// All nodes indexed by ID
    nodes: HashMap<NodeId, TreeNode>,
    root_id: NodeId,
    next_id: usize,
    fs: Arc<dyn FileSystem>,
    show_hidden: bool,
}

impl std::fmt::Debug for FileTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileTree")
            .field("root_path", &self.root_path)
            .field("nodes", &self.nodes.len())
            .field("show_hidden", &self.show_hidden)
            .finish()
    }
}

impl FileTree {
    /// Create a new file tree rooted at the given path
    ///
    /// # Errors
    ///
    /// Returns an error if the root path doesn't exist or isn't a directory.
    pub fn new(root_path: PathBuf, fs: Arc<dyn FileSystem>, show_hidden: bool) -> io::Result<Self> {
        if !fs.exists(&root_path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Path does not exist: {:?}", root_path),
            ));
        }

        if !fs.is_dir(&root_path)? {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Path is not a directory: {:?}", root_path),
            ));
        }

        let name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root_path.display().to_string());
        let root_entry = DirEntry::new(root_path.clone(), name, EntryType::Directory);

        let root_id = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(root_id, TreeNode::new(root_id, root_entry, None));

        Ok(Self {
            root_path,
            nodes,
            root_id,
            next_id: 1,
            fs,
            show_hidden,
        })
    }

    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    fn get_node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(&id)
    }

    /// Expand a directory node (load its children)
    ///
    /// A directory that cannot be listed still ends up expanded, with a
    /// single error row as its only child.
    ///
    /// # Errors
    ///
    /// Returns an error only if the node is unknown or not a directory.
    pub fn expand_node(&mut self, id: NodeId) -> io::Result<()> {
        let node = self
            .get_node(id)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Node not found"))?;

        if !node.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Cannot expand a file node",
            ));
        }

        if node.is_expanded() {
            return Ok(());
        }

        let path = node.entry.path.clone();
        let child_ids = match list_children(self.fs.as_ref(), &path, self.show_hidden) {
            Ok(entries) => entries
                .into_iter()
                .map(|entry| self.add_node(entry, id))
                .collect(),
            Err(e) => {
                tracing::warn!("Failed to list {}: {}", path.display(), e);
                vec![self.add_error_node(id, &path, listing_error_message(&e))]
            }
        };

        if let Some(node) = self.get_node_mut(id) {
            node.children = child_ids;
            node.state = NodeState::Expanded;
        }

        Ok(())
    }

    /// Collapse a directory node, dropping its subtree from memory
    pub fn collapse_node(&mut self, id: NodeId) {
        let Some(node) = self.get_node(id) else {
            return;
        };
        if !node.is_dir() {
            return;
        }

        for child_id in node.children.clone() {
            self.remove_node_recursive(child_id);
        }

        if let Some(node) = self.get_node_mut(id) {
            node.children.clear();
            node.state = NodeState::Collapsed;
        }
    }

    /// Expand if collapsed, collapse if expanded. Files are ignored.
    pub fn toggle_node(&mut self, id: NodeId) -> io::Result<()> {
        let node = self
            .get_node(id)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Node not found"))?;

        if !node.is_dir() {
            return Ok(());
        }

        if node.is_expanded() {
            self.collapse_node(id);
            Ok(())
        } else {
            self.expand_node(id)
        }
    }

    /// All displayed nodes in tree order, root excluded
    pub fn get_visible_nodes(&self) -> Vec<NodeId> {
        let mut visible = Vec::new();
        if let Some(root) = self.get_node(self.root_id) {
            for &child_id in &root.children {
                self.collect_visible_recursive(child_id, &mut visible);
            }
        }
        visible
    }

    fn collect_visible_recursive(&self, id: NodeId, visible: &mut Vec<NodeId>) {
        visible.push(id);

        if let Some(node) = self.get_node(id) {
            if node.is_expanded() {
                for &child_id in &node.children {
                    self.collect_visible_recursive(child_id, visible);
                }
            }
        }
    }

    /// Get the parent chain for a node (from root to node)
    pub fn get_ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            ancestors.push(node_id);
            current = self.get_node(node_id).and_then(|n| n.parent);
        }

        ancestors.reverse();
        ancestors
    }

    /// Get the depth of a node (root is 0)
    pub fn get_depth(&self, id: NodeId) -> usize {
        self.get_ancestors(id).len().saturating_sub(1)
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn add_node(&mut self, entry: DirEntry, parent: NodeId) -> NodeId {
        let id = self.allocate_id();
        self.nodes.insert(id, TreeNode::new(id, entry, Some(parent)));
        id
    }

    fn add_error_node(&mut self, parent: NodeId, dir: &Path, message: String) -> NodeId {
        let id = self.allocate_id();
        let entry = DirEntry::new(dir.to_path_buf(), message.clone(), EntryType::File);
        self.nodes
            .insert(id, TreeNode::error(id, entry, parent, message));
        id
    }

    /// Remove a node and all its descendants
    fn remove_node_recursive(&mut self, id: NodeId) {
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };

        for &child_id in &node.children {
            self.remove_node_recursive(child_id);
        }
    }

    /// Number of nodes currently in memory, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
