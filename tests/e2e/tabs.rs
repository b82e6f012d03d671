use crate::common::harness::{layout, EditorTestHarness};
use tabshell::app::{Focus, WELCOME_INDEX};
use tabshell::config::DEFAULT_WELCOME_TEXT;

/// The editor starts on the Welcome tab with the placeholder text
#[test]
fn test_starts_on_welcome_tab() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    assert_eq!(harness.editor().tabs().active_index(), WELCOME_INDEX);
    assert_eq!(harness.get_buffer_content(), DEFAULT_WELCOME_TEXT);
    assert!(harness.get_tab_bar().contains("Welcome"));
    harness.assert_screen_contains("Welcome to Text Editor!");
}

/// Typed text survives switching away and back
#[test]
fn test_content_survives_tab_switch() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness.ctrl('n').unwrap();
    harness.type_text("hello").unwrap();
    harness.ctrl('n').unwrap();
    harness.type_text("world").unwrap();

    // Ctrl+J goes back one tab
    harness.ctrl('j').unwrap();
    assert_eq!(harness.get_buffer_content(), "hello");
    assert_eq!(harness.editor().tabs().active_index(), 1);

    // Ctrl+L goes forward again
    harness.ctrl('l').unwrap();
    assert_eq!(harness.get_buffer_content(), "world");
}

#[test]
fn test_navigation_wraps_through_welcome() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.ctrl('n').unwrap();
    harness.ctrl('n').unwrap();
    assert_eq!(harness.editor().tabs().active_index(), 2);

    harness.ctrl('l').unwrap();
    assert_eq!(harness.editor().tabs().active_index(), WELCOME_INDEX);
    assert_eq!(harness.get_buffer_content(), DEFAULT_WELCOME_TEXT);

    harness.ctrl('j').unwrap();
    assert_eq!(harness.editor().tabs().active_index(), 2);
}

#[test]
fn test_new_tab_focuses_editor_and_shows_dirty_marker() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    assert_eq!(harness.editor().focus(), Focus::FileExplorer);

    harness.ctrl('n').unwrap();
    harness.render().unwrap();

    assert_eq!(harness.editor().focus(), Focus::Editor);
    assert!(
        harness.get_tab_bar().contains("Untitled-1 *"),
        "Tab bar: {}",
        harness.get_tab_bar()
    );
}

#[test]
fn test_close_tab_returns_to_welcome() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.ctrl('n').unwrap();
    harness.type_text("scratch").unwrap();

    harness.ctrl('w').unwrap();

    assert_eq!(harness.editor().tabs().tab_count(), 0);
    assert_eq!(harness.editor().tabs().active_index(), WELCOME_INDEX);
    assert_eq!(harness.get_buffer_content(), DEFAULT_WELCOME_TEXT);
    assert_eq!(harness.notice().as_deref(), Some("Closed Untitled-1"));

    harness.render().unwrap();
    harness.assert_screen_not_contains("Untitled-1");
}

#[test]
fn test_close_welcome_resets_placeholder() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    // Ctrl+B moves focus to the editor so keys reach the surface
    harness.ctrl('b').unwrap();
    harness.type_text("scribble ").unwrap();
    assert_ne!(harness.get_buffer_content(), DEFAULT_WELCOME_TEXT);

    harness.ctrl('w').unwrap();

    assert_eq!(harness.get_buffer_content(), DEFAULT_WELCOME_TEXT);
    assert_eq!(harness.notice().as_deref(), Some("Welcome tab cleared"));
}

#[test]
fn test_click_plus_creates_tab() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    let (x, y) = harness.find_text(" + ").expect("new tab button");
    assert_eq!(y, layout::TAB_BAR_ROW);
    harness.click(x + 1, y).unwrap();

    assert_eq!(harness.editor().tabs().tab_count(), 1);
    assert_eq!(harness.editor().tabs().active_index(), 1);
}

#[test]
fn test_click_tab_switches() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.ctrl('n').unwrap();
    harness.type_text("first").unwrap();
    harness.ctrl('n').unwrap();
    harness.render().unwrap();

    let (x, y) = harness.find_text("Untitled-1").expect("first tab");
    harness.click(x, y).unwrap();

    assert_eq!(harness.editor().tabs().active_index(), 1);
    assert_eq!(harness.get_buffer_content(), "first");

    harness.render().unwrap();
    let (x, y) = harness.find_text("Welcome").expect("welcome tab");
    harness.click(x, y).unwrap();
    assert_eq!(harness.editor().tabs().active_index(), WELCOME_INDEX);
}
