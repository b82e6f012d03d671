//! Tab bar rendering
//!
//! One entry per element of the navigation order, Welcome first, followed by
//! a `+` button. When the tabs do not fit, leading tabs are dropped until the
//! active one is visible.

use crate::app::TabLabel;
use crate::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const NEW_TAB_BUTTON: &str = " + ";

/// Hit areas from the last tab bar render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabBarLayout {
    /// Area of each visible tab with its index in the navigation order
    pub tabs: Vec<(Rect, usize)>,
    pub new_tab_button: Rect,
}

pub struct TabBarRenderer;

impl TabBarRenderer {
    pub fn render(frame: &mut Frame, area: Rect, labels: &[TabLabel], theme: &Theme) -> TabBarLayout {
        let texts: Vec<String> = labels.iter().map(|l| format!(" {} ", l.text())).collect();
        let widths: Vec<u16> = texts.iter().map(|t| t.width() as u16).collect();
        let button_width = NEW_TAB_BUTTON.width() as u16;
        let available = area.width.saturating_sub(button_width);

        let first = Self::first_visible(&widths, labels, available);

        let separator = Style::default().bg(theme.tab_separator_bg);
        let mut spans = Vec::new();
        let mut layout = TabBarLayout::default();
        let mut x = area.x;

        for (index, (text, label)) in texts.iter().zip(labels).enumerate().skip(first) {
            let width = widths[index];
            if x + width > area.x + available {
                break;
            }

            let style = if label.active {
                Style::default()
                    .fg(theme.tab_active_fg)
                    .bg(theme.tab_active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(theme.tab_inactive_fg)
                    .bg(theme.tab_inactive_bg)
            };
            spans.push(Span::styled(text.clone(), style));
            layout.tabs.push((Rect::new(x, area.y, width, 1), index));
            x += width;

            if x < area.x + available {
                spans.push(Span::styled(" ", separator));
                x += 1;
            }
        }

        if x + button_width <= area.x + area.width {
            spans.push(Span::styled(
                NEW_TAB_BUTTON,
                Style::default()
                    .fg(theme.tab_inactive_fg)
                    .bg(theme.tab_inactive_bg),
            ));
            layout.new_tab_button = Rect::new(x, area.y, button_width, 1);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(separator), area);
        layout
    }

    /// Index of the first tab to draw so the active tab fits in `available`
    fn first_visible(widths: &[u16], labels: &[TabLabel], available: u16) -> usize {
        let Some(active) = labels.iter().position(|l| l.active) else {
            return 0;
        };

        let mut first = 0;
        // Each tab takes its width plus one separator column
        let span = |from: usize| -> u32 {
            widths[from..=active].iter().map(|w| u32::from(*w) + 1).sum()
        };
        while first < active && span(first) > u32::from(available) {
            first += 1;
        }
        first
    }
}
