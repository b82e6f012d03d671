use crate::common::harness::EditorTestHarness;
use tabshell::app::Severity;
use tabshell::services::clipboard::{ClipboardError, ClipboardProvider};

/// Clipboard whose helper tools are never available
struct BrokenClipboard;

impl ClipboardProvider for BrokenClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unsupported)
    }

    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

fn scratch_tab(text: &str) -> EditorTestHarness {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.ctrl('n').unwrap();
    harness.type_text(text).unwrap();
    harness
}

#[test]
fn test_copy_selection() {
    let mut harness = scratch_tab("hello");

    harness.ctrl('a').unwrap();
    assert_eq!(harness.notice().as_deref(), Some("Selected all text"));
    harness.ctrl('c').unwrap();

    assert_eq!(harness.clipboard().contents(), "hello");
    assert_eq!(harness.notice().as_deref(), Some("Copied to clipboard"));
    assert_eq!(harness.get_buffer_content(), "hello");
}

#[test]
fn test_copy_without_selection_copies_line() {
    let mut harness = scratch_tab("first\nsecond");

    harness.ctrl('c').unwrap();

    assert_eq!(harness.clipboard().contents(), "second");
    assert_eq!(harness.notice().as_deref(), Some("Copied line to clipboard"));
}

#[test]
fn test_cut_selection() {
    let mut harness = scratch_tab("one\ntwo");

    harness.ctrl('a').unwrap();
    harness.ctrl('x').unwrap();

    assert_eq!(harness.clipboard().contents(), "one\ntwo");
    assert_eq!(harness.get_buffer_content(), "");
    assert_eq!(harness.notice().as_deref(), Some("Cut to clipboard"));
}

#[test]
fn test_cut_without_selection_keeps_line() {
    let mut harness = scratch_tab("keep me");

    harness.ctrl('x').unwrap();

    assert_eq!(harness.clipboard().contents(), "keep me");
    assert_eq!(harness.get_buffer_content(), "keep me");
    assert_eq!(
        harness.notice().as_deref(),
        Some("Line copied to clipboard (line cut not fully supported)")
    );
}

#[test]
fn test_copy_then_paste_into_other_tab() {
    let mut harness = scratch_tab("shared");
    harness.ctrl('a').unwrap();
    harness.ctrl('c').unwrap();

    harness.ctrl('n').unwrap();
    harness.ctrl('v').unwrap();

    assert_eq!(harness.get_buffer_content(), "shared");
    assert_eq!(harness.notice().as_deref(), Some("Pasted from clipboard"));
}

#[test]
fn test_paste_empty_clipboard_warns() {
    let mut harness = scratch_tab("text");

    harness.ctrl('v').unwrap();

    let notice = harness.editor().notification().expect("notice");
    assert_eq!(notice.message, "Clipboard is empty");
    assert_eq!(notice.severity, Severity::Warning);
    assert_eq!(harness.get_buffer_content(), "text");
}

#[test]
fn test_clipboard_failure_is_a_warning() {
    let mut harness = EditorTestHarness::with_clipboard(80, 24, Box::new(BrokenClipboard)).unwrap();
    harness.ctrl('n').unwrap();
    harness.type_text("safe").unwrap();
    harness.ctrl('a').unwrap();

    harness.ctrl('x').unwrap();
    assert_eq!(harness.get_buffer_content(), "safe");
    let notice = harness.editor().notification().expect("notice");
    assert_eq!(notice.severity, Severity::Warning);
    assert!(notice.message.starts_with("Failed to access clipboard:"));

    harness.ctrl('v').unwrap();
    assert_eq!(harness.get_buffer_content(), "safe");
}

#[test]
fn test_bracketed_paste_inserts_text() {
    let mut harness = scratch_tab("a");

    harness.editor_mut().handle_paste("bc");

    assert_eq!(harness.get_buffer_content(), "abc");
}
