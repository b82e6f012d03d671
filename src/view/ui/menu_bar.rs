//! Menu bar and the Edit dropdown

use crate::app::menu::{MenuState, APP_TITLE, EDIT_MENU_ITEMS};
use crate::input::keybindings::KeybindingResolver;
use crate::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const FILE_LABEL: &str = " File ";
const EDIT_LABEL: &str = " Edit ";

/// Screen positions of the menu titles, for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuBarLayout {
    pub file: Rect,
    pub edit: Rect,
}

pub struct MenuBarRenderer;

impl MenuBarRenderer {
    /// Render the one-row menu bar
    pub fn render(frame: &mut Frame, area: Rect, menu: &MenuState, theme: &Theme) -> MenuBarLayout {
        let base = Style::default().fg(theme.menu_fg).bg(theme.menu_bg);
        let active = Style::default()
            .fg(theme.menu_active_fg)
            .bg(theme.menu_active_bg);

        let file_width = FILE_LABEL.width() as u16;
        let edit_width = EDIT_LABEL.width() as u16;
        let used = file_width + edit_width;

        let mut spans = vec![
            Span::styled(FILE_LABEL, base),
            Span::styled(EDIT_LABEL, if menu.is_open() { active } else { base }),
        ];

        let title = format!("{} ", APP_TITLE);
        let title_width = title.width() as u16;
        if area.width >= used + title_width {
            let gap = area.width - used - title_width;
            spans.push(Span::styled(" ".repeat(gap as usize), base));
            spans.push(Span::styled(title, base.add_modifier(Modifier::BOLD)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);

        MenuBarLayout {
            file: Rect::new(area.x, area.y, file_width.min(area.width), 1),
            edit: Rect::new(
                area.x + file_width,
                area.y,
                edit_width.min(area.width.saturating_sub(file_width)),
                1,
            ),
        }
    }

    /// Render the Edit dropdown below `anchor`. Returns the area it covers.
    pub fn render_dropdown(
        frame: &mut Frame,
        anchor: Rect,
        menu: &MenuState,
        keybindings: &KeybindingResolver,
        theme: &Theme,
    ) -> Rect {
        let rows: Vec<(&str, String)> = EDIT_MENU_ITEMS
            .iter()
            .map(|action| {
                (
                    action.label(),
                    keybindings
                        .get_keybinding_for_action(*action)
                        .unwrap_or_default(),
                )
            })
            .collect();

        let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
        let key_width = rows.iter().map(|(_, k)| k.width()).max().unwrap_or(0);
        // " label   key " plus borders
        let inner_width = label_width + key_width + 5;

        let screen = frame.area();
        let width = ((inner_width + 2) as u16).min(screen.width.saturating_sub(anchor.x));
        let height = ((rows.len() + 2) as u16).min(screen.height.saturating_sub(anchor.y + 1));
        let area = Rect::new(anchor.x, anchor.y + 1, width, height);

        let items: Vec<ListItem> = rows
            .into_iter()
            .map(|(label, key)| {
                let padding = inner_width.saturating_sub(label.width() + key.width() + 2);
                ListItem::new(Line::from(vec![
                    Span::raw(" "),
                    Span::raw(label),
                    Span::raw(" ".repeat(padding)),
                    Span::styled(key, Style::default().fg(theme.line_number_fg)),
                    Span::raw(" "),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.menu_border_fg))
                    .style(
                        Style::default()
                            .fg(theme.menu_dropdown_fg)
                            .bg(theme.menu_dropdown_bg),
                    ),
            )
            .highlight_style(
                Style::default()
                    .fg(theme.menu_highlight_fg)
                    .bg(theme.menu_highlight_bg),
            );

        let mut state = ListState::default();
        state.select(menu.highlighted());

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);
        area
    }
}
