//! Clipboard operations on the Editor
//!
//! Copy and cut work on the surface selection. With nothing selected, copy
//! takes the whole line under the cursor. Clipboard failures never touch the
//! text; they only produce a warning notice.

use super::*;
use crate::services::clipboard::ClipboardError;

impl Editor {
    /// Copy the selection, or the current line when nothing is selected
    pub fn copy_selection(&mut self) {
        let surface = self.tabs.surface_mut();
        let (text, message) = match surface.selected_text() {
            Some(text) => (text, "Copied to clipboard"),
            None => (
                surface.current_line().to_string(),
                "Copied line to clipboard",
            ),
        };

        match self.clipboard.set_text(&text) {
            Ok(()) => self.notify(message, Severity::Info),
            Err(e) => self.clipboard_failed(e),
        }
    }

    /// Cut the selection
    ///
    /// The selection is only removed once the clipboard accepted it. Without a
    /// selection the current line is copied but left in place.
    pub fn cut_selection(&mut self) {
        let surface = self.tabs.surface_mut();
        let Some(text) = surface.selected_text() else {
            let line = surface.current_line().to_string();
            match self.clipboard.set_text(&line) {
                Ok(()) => self.notify(
                    "Line copied to clipboard (line cut not fully supported)",
                    Severity::Info,
                ),
                Err(e) => self.clipboard_failed(e),
            }
            return;
        };

        if let Err(e) = self.clipboard.set_text(&text) {
            self.clipboard_failed(e);
            return;
        }
        self.tabs.surface_mut().cut_selection();
        self.notify("Cut to clipboard", Severity::Info);
    }

    /// Insert the clipboard text at the cursor
    pub fn paste(&mut self) {
        match self.clipboard.get_text() {
            Ok(text) if text.is_empty() => self.notify("Clipboard is empty", Severity::Warning),
            Ok(text) => {
                self.tabs.surface_mut().insert_str(&text);
                self.notify("Pasted from clipboard", Severity::Info);
            }
            Err(e) => self.clipboard_failed(e),
        }
    }

    pub fn select_all(&mut self) {
        self.tabs.surface_mut().select_all();
        self.notify("Selected all text", Severity::Info);
    }

    fn clipboard_failed(&mut self, error: ClipboardError) {
        tracing::warn!("Clipboard operation failed: {}", error);
        self.notify(
            format!("Failed to access clipboard: {}", error),
            Severity::Warning,
        );
    }
}
