//! Status bar rendering

use crate::app::{Notification, Severity};
use crate::view::status::StatusLine;
use crate::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub struct StatusBarRenderer;

impl StatusBarRenderer {
    /// Render `file | notice` on the left and `position | type` on the right
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        status: &StatusLine,
        notification: Option<&Notification>,
        theme: &Theme,
    ) {
        let base = Style::default()
            .fg(theme.status_bar_fg)
            .bg(theme.status_bar_bg);

        let right = format!("{} | {} ", status.position, status.file_type);
        let right_width = right.width();
        let available = area.width as usize;

        let mut spans = vec![Span::styled(format!(" {}", status.file_name), base)];
        let mut used = status.file_name.width() + 1;

        if let Some(notice) = notification {
            let color = match notice.severity {
                Severity::Info => theme.diagnostic_info_fg,
                Severity::Warning => theme.diagnostic_warning_fg,
                Severity::Error => theme.diagnostic_error_fg,
            };
            let text = format!(" | {}", notice.message);
            let room = available.saturating_sub(used + right_width + 1);
            let text = truncate_to_width(&text, room);
            used += text.width();
            spans.push(Span::styled(text, base.fg(color)));
        }

        if used + right_width < available {
            spans.push(Span::styled(
                " ".repeat(available - used - right_width),
                base,
            ));
            spans.push(Span::styled(right, base));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }
}

/// Cut `text` to at most `max` display columns
fn truncate_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
