//! Status line projection
//!
//! A pure function of the active buffer and the surface cursor. The editor
//! calls it after every input event and again on a fixed tick, so the shown
//! position is never older than one tick interval.

use crate::model::buffer_store::{Buffer, FileKind};

/// Label shown when no file tab is active
pub const WELCOME_LABEL: &str = "Welcome";

/// The three status fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub file_name: String,
    /// `Ln r, Col c`, both 1-indexed
    pub position: String,
    pub file_type: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        project(None, (0, 0))
    }
}

/// Project the status fields from the active buffer and a zero-based cursor
pub fn project(active: Option<&Buffer>, (row, col): (usize, usize)) -> StatusLine {
    let (file_name, file_type) = match active {
        Some(buffer) => (
            buffer.display_name().to_string(),
            buffer.file_kind().label().to_string(),
        ),
        None => (
            WELCOME_LABEL.to_string(),
            FileKind::PlainText.label().to_string(),
        ),
    };

    StatusLine {
        file_name,
        position: format!("Ln {}, Col {}", row + 1, col + 1),
        file_type,
    }
}
