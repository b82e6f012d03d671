use super::node::NodeId;
use super::tree::FileTree;
use std::path::PathBuf;

/// Event emitted by the explorer when the user activates an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileExplorerEvent {
    /// A file was chosen and should be opened in a tab
    FileSelected(PathBuf),
}

/// View state for file tree navigation
#[derive(Debug)]
pub struct FileTreeView {
    tree: FileTree,
    selected_node: Option<NodeId>,
    /// Scroll offset (index into visible nodes)
    scroll_offset: usize,
    /// Last known viewport height (for scrolling calculations)
    pub(crate) viewport_height: usize,
}

impl FileTreeView {
    /// Create a view over `tree`, with the root expanded and the first entry selected
    pub fn new(mut tree: FileTree) -> Self {
        let root_id = tree.root_id();
        if let Err(e) = tree.expand_node(root_id) {
            tracing::warn!("Failed to expand explorer root: {}", e);
        }
        let selected_node = tree.get_visible_nodes().first().copied();

        Self {
            tree,
            selected_node,
            scroll_offset: 0,
            viewport_height: 10, // updated during rendering
        }
    }

    /// Set the viewport height (called during rendering)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    /// Visible nodes with their indent level (children of the root are at 0)
    pub fn get_display_nodes(&self) -> Vec<(NodeId, usize)> {
        self.tree
            .get_visible_nodes()
            .into_iter()
            .map(|id| (id, self.tree.get_depth(id).saturating_sub(1)))
            .collect()
    }

    pub fn get_selected(&self) -> Option<NodeId> {
        self.selected_node
    }

    /// Move the selection by `delta` visible rows, clamped to the list
    fn move_selection(&mut self, delta: isize) {
        let visible = self.tree.get_visible_nodes();
        if visible.is_empty() {
            self.selected_node = None;
            return;
        }

        let pos = self
            .selected_node
            .and_then(|current| visible.iter().position(|&id| id == current));

        let new_pos = match pos {
            Some(pos) => pos
                .saturating_add_signed(delta)
                .min(visible.len() - 1),
            None => 0,
        };
        self.selected_node = Some(visible[new_pos]);
        self.update_scroll_for_selection();
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    /// Move selection up by a page (viewport height)
    pub fn select_page_up(&mut self) {
        let page = self.viewport_height.max(1) as isize;
        self.move_selection(-page);
    }

    /// Move selection down by a page (viewport height)
    pub fn select_page_down(&mut self) {
        let page = self.viewport_height.max(1) as isize;
        self.move_selection(page);
    }

    pub fn select_first(&mut self) {
        self.selected_node = self.tree.get_visible_nodes().first().copied();
        self.update_scroll_for_selection();
    }

    pub fn select_last(&mut self) {
        self.selected_node = self.tree.get_visible_nodes().last().copied();
        self.update_scroll_for_selection();
    }

    /// Select the parent of the current node, unless the parent is the hidden root
    pub fn select_parent(&mut self) {
        let root_id = self.tree.root_id();
        let parent = self
            .selected_node
            .and_then(|id| self.tree.get_node(id))
            .and_then(|node| node.parent);

        if let Some(parent_id) = parent.filter(|&p| p != root_id) {
            self.selected_node = Some(parent_id);
            self.update_scroll_for_selection();
        }
    }

    /// Select the row at `index` of the visible list (mouse clicks)
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.tree.get_visible_nodes().get(index) {
            Some(&id) => {
                self.selected_node = Some(id);
                self.update_scroll_for_selection();
                true
            }
            None => false,
        }
    }

    /// Keep the selection inside the viewport, scrolling only past the edges
    pub fn update_scroll_for_selection(&mut self) {
        if self.viewport_height == 0 {
            return;
        }

        if let Some(pos) = self.get_selected_index() {
            if pos < self.scroll_offset {
                self.scroll_offset = pos;
            } else if pos >= self.scroll_offset + self.viewport_height {
                self.scroll_offset = pos - self.viewport_height + 1;
            }
        }
    }

    pub fn get_scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Get the index of the selected node in the visible list
    pub fn get_selected_index(&self) -> Option<usize> {
        let selected = self.selected_node?;
        self.tree
            .get_visible_nodes()
            .iter()
            .position(|&id| id == selected)
    }

    pub fn visible_count(&self) -> usize {
        self.tree.get_visible_nodes().len()
    }

    /// Expand the selected directory, or step into it when already expanded
    pub fn expand_selected(&mut self) {
        let Some(id) = self.selected_node else {
            return;
        };
        let Some(node) = self.tree.get_node(id) else {
            return;
        };
        if !node.is_dir() {
            return;
        }

        if node.is_expanded() {
            self.select_next();
        } else if let Err(e) = self.tree.expand_node(id) {
            tracing::warn!("Failed to expand {}: {}", id, e);
        }
    }

    /// Collapse the selected directory, or move to the parent directory
    pub fn collapse_selected(&mut self) {
        let Some(id) = self.selected_node else {
            return;
        };
        let expanded_dir = self
            .tree
            .get_node(id)
            .is_some_and(|node| node.is_dir() && node.is_expanded());

        if expanded_dir {
            self.tree.collapse_node(id);
            self.update_scroll_for_selection();
        } else {
            self.select_parent();
        }
    }

    /// Activate the selected entry
    ///
    /// Directories toggle in place, files produce `FileSelected`, error rows
    /// do nothing.
    pub fn activate_selected(&mut self) -> Option<FileExplorerEvent> {
        let id = self.selected_node?;
        let node = self.tree.get_node(id)?;

        if node.is_file() {
            let path = node.entry.path.clone();
            tracing::debug!("Explorer selected {}", path.display());
            return Some(FileExplorerEvent::FileSelected(path));
        }

        if node.is_dir() {
            if let Err(e) = self.tree.toggle_node(id) {
                tracing::warn!("Failed to toggle {}: {}", id, e);
            }
            self.clamp_scroll();
        }
        None
    }

    fn clamp_scroll(&mut self) {
        let max_offset = self.visible_count().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max_offset);
        self.update_scroll_for_selection();
    }
}
