use crate::input::keybindings::{Action, KeybindingResolver};
use crate::view::file_tree::icons::{file_icon, DIRECTORY_ICON, ERROR_ICON};
use crate::view::file_tree::{FileTreeView, NodeId};
use crate::view::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct FileExplorerRenderer;

impl FileExplorerRenderer {
    /// Render the file explorer in the given frame area
    pub fn render(
        view: &mut FileTreeView,
        frame: &mut Frame,
        area: Rect,
        is_focused: bool,
        show_icons: bool,
        keybindings: &KeybindingResolver,
        theme: &Theme,
    ) {
        // Account for borders (top + bottom = 2)
        let viewport_height = area.height.saturating_sub(2) as usize;
        view.set_viewport_height(viewport_height);
        view.update_scroll_for_selection();

        let display_nodes = view.get_display_nodes();
        let selected_index = view.get_selected_index();
        let scroll_offset = view.get_scroll_offset().min(display_nodes.len());

        // Only render the visible subset so the List widget does not scroll on its own
        let visible_end = (scroll_offset + viewport_height).min(display_nodes.len());
        let items: Vec<ListItem> = display_nodes[scroll_offset..visible_end]
            .iter()
            .filter_map(|&(node_id, indent)| {
                Self::render_node(view, node_id, indent, show_icons, theme)
            })
            .collect();

        let title = match keybindings.get_keybinding_for_action(Action::ToggleFocus) {
            Some(key) => format!(" Explorer ({}) ", key),
            None => " Explorer ".to_string(),
        };

        let (title_style, border_style) = if is_focused {
            (
                Style::default()
                    .fg(theme.editor_bg)
                    .bg(theme.editor_fg)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(theme.cursor),
            )
        } else {
            (
                Style::default().fg(theme.line_number_fg),
                Style::default().fg(theme.split_separator_fg),
            )
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(title_style)
                    .border_style(border_style)
                    .style(Style::default().bg(theme.editor_bg)),
            )
            .highlight_style(if is_focused {
                Style::default().bg(theme.selection_bg).fg(theme.editor_fg)
            } else {
                Style::default().bg(theme.current_line_bg)
            });

        // Selection is relative to the rendered slice
        let mut list_state = ListState::default();
        if let Some(selected) = selected_index {
            if selected >= scroll_offset && selected < visible_end {
                list_state.select(Some(selected - scroll_offset));
            }
        }

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_node(
        view: &FileTreeView,
        node_id: NodeId,
        indent: usize,
        show_icons: bool,
        theme: &Theme,
    ) -> Option<ListItem<'static>> {
        let node = view.tree().get_node(node_id)?;
        let mut spans = Vec::new();

        if indent > 0 {
            spans.push(Span::raw("  ".repeat(indent)));
        }

        let indicator = if node.is_expanded() {
            "▼ "
        } else if node.is_collapsed() {
            "> "
        } else {
            "  "
        };
        spans.push(Span::styled(
            indicator,
            Style::default().fg(theme.diagnostic_warning_fg),
        ));

        if show_icons {
            let icon = if node.is_error() {
                ERROR_ICON
            } else if node.is_dir() {
                DIRECTORY_ICON
            } else {
                file_icon(&node.entry.path)
            };
            spans.push(Span::raw(format!("{} ", icon)));
        }

        let name_style = if node.is_error() {
            Style::default().fg(theme.diagnostic_error_fg)
        } else if node.entry.is_hidden() {
            Style::default().fg(theme.line_number_fg)
        } else if node.is_dir() {
            Style::default().fg(theme.directory_fg)
        } else {
            Style::default().fg(theme.editor_fg)
        };
        spans.push(Span::styled(node.label().to_string(), name_style));

        Some(ListItem::new(Line::from(spans)).style(Style::default().bg(theme.editor_bg)))
    }
}
