//! The single shared editing surface
//!
//! Wraps a `tui_textarea::TextArea`, which owns the cursor, selection, yank
//! buffer and undo history. Every tab shows its buffer through this one
//! widget; the tab controller swaps the text in and out on each switch.
//!
//! Text round-trips exactly: `set_text(s)` followed by `text()` returns `s`,
//! trailing newline and `\r` characters included.

use crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, TextArea};

/// Visual options applied to every fresh text area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub line_numbers: bool,
    pub line_number_style: Style,
    pub cursor_line_style: Style,
    pub selection_style: Style,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            line_numbers: true,
            line_number_style: Style::default(),
            cursor_line_style: Style::default(),
            selection_style: Style::default(),
        }
    }
}

pub struct EditingSurface {
    textarea: TextArea<'static>,
    style: SurfaceStyle,
}

impl std::fmt::Debug for EditingSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditingSurface")
            .field("lines", &self.textarea.lines().len())
            .field("cursor", &self.textarea.cursor())
            .finish()
    }
}

impl Default for EditingSurface {
    fn default() -> Self {
        Self::new(SurfaceStyle::default())
    }
}

impl EditingSurface {
    pub fn new(style: SurfaceStyle) -> Self {
        let mut surface = Self {
            textarea: TextArea::default(),
            style,
        };
        surface.apply_style();
        surface
    }

    fn apply_style(&mut self) {
        if self.style.line_numbers {
            self.textarea
                .set_line_number_style(self.style.line_number_style);
        } else {
            self.textarea.remove_line_number();
        }
        self.textarea
            .set_cursor_line_style(self.style.cursor_line_style);
        self.textarea.set_selection_style(self.style.selection_style);
    }

    /// Full text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the whole content, resetting cursor, selection and undo history
    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        self.textarea = TextArea::new(lines);
        self.apply_style();
    }

    /// Cursor as zero-based (row, col), col counted in characters
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Move the cursor, clamped to the content
    pub fn set_cursor(&mut self, (row, col): (usize, usize)) {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        self.textarea.move_cursor(CursorMove::Jump(row, col));
    }

    /// Feed a key to the widget. Returns true if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(Input::from(key))
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        self.textarea.insert_str(text)
    }

    pub fn undo(&mut self) -> bool {
        self.textarea.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.textarea.redo()
    }

    pub fn select_all(&mut self) {
        self.textarea.select_all();
    }

    pub fn has_selection(&self) -> bool {
        self.textarea.selection_range().is_some()
    }

    /// Text of the current selection, if any. The selection is left intact.
    pub fn selected_text(&self) -> Option<String> {
        let ((start_row, start_col), (end_row, end_col)) = self.textarea.selection_range()?;
        let lines = self.textarea.lines();

        let mut text = String::new();
        for row in start_row..=end_row.min(lines.len().saturating_sub(1)) {
            let line = &lines[row];
            let from = if row == start_row { start_col } else { 0 };
            let to = if row == end_row {
                end_col
            } else {
                line.chars().count()
            };
            if row > start_row {
                text.push('\n');
            }
            text.extend(line.chars().skip(from).take(to.saturating_sub(from)));
        }
        Some(text)
    }

    /// Delete the current selection. Returns the removed text.
    pub fn cut_selection(&mut self) -> Option<String> {
        self.textarea.selection_range()?;
        if !self.textarea.cut() {
            return None;
        }
        Some(self.textarea.yank_text())
    }

    /// Text of the line under the cursor
    pub fn current_line(&self) -> &str {
        let (row, _) = self.textarea.cursor();
        self.textarea
            .lines()
            .get(row)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn widget(&self) -> &TextArea<'static> {
        &self.textarea
    }
}
