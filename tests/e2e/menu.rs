use crate::common::harness::{layout, EditorTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_menu_bar_visible() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    let menu_bar = harness.get_menu_bar();
    assert!(
        menu_bar.contains("File") && menu_bar.contains("Edit"),
        "Menu bar row {}: {}",
        layout::MENU_BAR_ROW,
        menu_bar
    );
    assert!(menu_bar.contains("Text Editor"));
}

#[test]
fn test_edit_menu_lists_actions_with_shortcuts() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::F(10), KeyModifiers::NONE).unwrap();
    harness.render().unwrap();

    assert!(harness.editor().menu().is_open());
    for label in ["Undo", "Redo", "Cut", "Copy", "Paste", "Select All"] {
        harness.assert_screen_contains(label);
    }
    harness.assert_screen_contains("Ctrl+Z");
    harness.assert_screen_contains("Ctrl+A");
}

#[test]
fn test_edit_menu_keyboard_selection() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.ctrl('n').unwrap();
    harness.type_text("abc").unwrap();

    harness.send_key(KeyCode::Char('e'), KeyModifiers::ALT).unwrap();
    // Up wraps from Undo to Select All
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert!(!harness.editor().menu().is_open());
    assert_eq!(harness.notice().as_deref(), Some("Selected all text"));
    assert_eq!(harness.get_buffer_content(), "abc");
}

#[test]
fn test_other_key_dismisses_menu() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.ctrl('n').unwrap();
    harness.send_key(KeyCode::F(10), KeyModifiers::NONE).unwrap();

    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert!(!harness.editor().menu().is_open());

    // The dismissing key is not typed
    harness.send_key(KeyCode::F(10), KeyModifiers::NONE).unwrap();
    harness.type_text("x").unwrap();
    assert!(!harness.editor().menu().is_open());
    assert_eq!(harness.get_buffer_content(), "");
}

#[test]
fn test_click_edit_menu_item() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    let (x, y) = harness.find_text("Edit").expect("Edit menu");
    harness.click(x, y).unwrap();
    assert!(harness.editor().menu().is_open());

    harness.render().unwrap();
    let (x, y) = harness.find_text("Undo").expect("Undo item");
    harness.click(x, y).unwrap();

    assert!(!harness.editor().menu().is_open());
    assert_eq!(harness.notice().as_deref(), Some("Nothing to undo"));
}

#[test]
fn test_file_menu_placeholder() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    let (x, y) = harness.find_text("File").expect("File menu");
    harness.click(x, y).unwrap();
    assert_eq!(harness.notice().as_deref(), Some("File menu - coming soon!"));

    harness.send_key(KeyCode::Char('f'), KeyModifiers::ALT).unwrap();
    assert_eq!(harness.notice().as_deref(), Some("File menu - coming soon!"));
}

#[test]
fn test_undo_and_redo() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.ctrl('n').unwrap();
    harness.ctrl('z').unwrap();
    assert_eq!(harness.notice().as_deref(), Some("Nothing to undo"));

    harness.type_text("ab").unwrap();
    harness.ctrl('z').unwrap();
    assert_ne!(harness.get_buffer_content(), "ab");
    harness.ctrl('u').unwrap();
    assert_eq!(harness.get_buffer_content(), "ab");

    harness.ctrl('u').unwrap();
    assert_eq!(harness.notice().as_deref(), Some("Nothing to redo"));
}

#[test]
fn test_quit() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    assert!(!harness.should_quit());
    harness.ctrl('q').unwrap();
    assert!(harness.should_quit());
}
