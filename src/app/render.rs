use super::*;
use crate::view::ui::{FileExplorerRenderer, MenuBarRenderer, StatusBarRenderer, TabBarRenderer};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

impl Editor {
    /// Draw the whole screen and remember the regions used for mouse clicks
    ///
    /// ```text
    /// | File  Edit                        Text Editor |
    /// | explorer      | Welcome | a.rs * | +         |
    /// |               | surface                      |
    /// | a.rs | notice              Ln 1, Col 1 | .rs |
    /// ```
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.editor_bg)),
            size,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);
        let (menu_area, main_area, status_area) = (rows[0], rows[1], rows[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(self.config.file_explorer.width),
                Constraint::Min(0),
            ])
            .split(main_area);
        let (explorer_area, editor_area) = (columns[0], columns[1]);

        let editor_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(editor_area);
        let (tab_area, surface_area) = (editor_rows[0], editor_rows[1]);

        FileExplorerRenderer::render(
            &mut self.explorer,
            frame,
            explorer_area,
            self.focus == Focus::FileExplorer,
            self.config.file_explorer.show_icons,
            &self.keybindings,
            &self.theme,
        );

        let tab_layout = TabBarRenderer::render(frame, tab_area, &self.tabs.labels(), &self.theme);
        frame.render_widget(self.tabs.surface().widget(), surface_area);

        StatusBarRenderer::render(
            frame,
            status_area,
            &self.status,
            self.notification.as_ref(),
            &self.theme,
        );

        // Drawn last so the dropdown sits on top of the panes
        let menu_layout = MenuBarRenderer::render(frame, menu_area, &self.menu, &self.theme);
        let edit_dropdown = if self.menu.is_open() {
            MenuBarRenderer::render_dropdown(
                frame,
                menu_layout.edit,
                &self.menu,
                &self.keybindings,
                &self.theme,
            )
        } else {
            Rect::default()
        };

        self.layout = LayoutCache {
            file_menu: menu_layout.file,
            edit_menu: menu_layout.edit,
            edit_dropdown,
            explorer: explorer_area,
            editor: surface_area,
            tabs: tab_layout.tabs,
            new_tab_button: tab_layout.new_tab_button,
        };
    }
}
