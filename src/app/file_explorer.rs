use super::*;
use crate::view::file_tree::FileExplorerEvent;
use std::path::Path;

impl Editor {
    pub(super) fn handle_explorer_action(&mut self, action: Action) {
        match action {
            Action::ExplorerActivate => self.file_explorer_activate(),
            Action::ExplorerExpand => {
                let is_file = self
                    .explorer
                    .get_selected()
                    .and_then(|id| self.explorer.tree().get_node(id))
                    .is_some_and(|node| node.is_file());
                if is_file {
                    self.file_explorer_activate();
                } else {
                    self.explorer.expand_selected();
                }
            }
            Action::ExplorerCollapse => self.explorer.collapse_selected(),
            _ => self.file_explorer_navigate(action),
        }
    }

    pub(super) fn file_explorer_navigate(&mut self, action: Action) {
        match action {
            Action::ExplorerUp => self.explorer.select_prev(),
            Action::ExplorerDown => self.explorer.select_next(),
            Action::ExplorerPageUp => self.explorer.select_page_up(),
            Action::ExplorerPageDown => self.explorer.select_page_down(),
            Action::ExplorerFirst => self.explorer.select_first(),
            Action::ExplorerLast => self.explorer.select_last(),
            _ => {}
        }
    }

    /// Open the selected file or toggle the selected directory
    pub fn file_explorer_activate(&mut self) {
        if let Some(FileExplorerEvent::FileSelected(path)) = self.explorer.activate_selected() {
            self.open_file(&path);
        }
    }

    /// Select and activate the row under a click
    pub(super) fn file_explorer_click(&mut self, position: Position) {
        self.set_focus(Focus::FileExplorer);

        let area = self.layout.explorer;
        // First and last rows are the border
        if position.y <= area.y || position.y + 1 >= area.y + area.height {
            return;
        }
        let row = (position.y - area.y - 1) as usize;
        let index = self.explorer.get_scroll_offset() + row;
        if self.explorer.select_index(index) {
            self.file_explorer_activate();
        }
    }

    /// Open `path` in a tab and focus the editor
    ///
    /// Failures leave tabs untouched and show an error notice.
    pub fn open_file(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match self.tabs.open_tab(path) {
            Ok(id) => {
                tracing::info!("Opened {} as {}", path.display(), id);
                self.notify(format!("Opening file: {}", name), Severity::Info);
                self.set_focus(Focus::Editor);
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                self.notify(format!("Error opening file: {}", e), Severity::Error);
            }
        }
    }
}
