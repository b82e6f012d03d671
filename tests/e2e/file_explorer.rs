use crate::common::harness::{layout, EditorTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};
use std::fs;
use tabshell::app::{Focus, Severity};
use tabshell::config::Config;

fn project() -> EditorTestHarness {
    EditorTestHarness::with_files(
        80,
        24,
        &[
            ("b.txt", "bee"),
            ("A/inner.rs", "fn main() {}"),
            (".hidden", "secret"),
        ],
    )
    .unwrap()
}

fn key(harness: &mut EditorTestHarness, code: KeyCode) {
    harness.send_key(code, KeyModifiers::NONE).unwrap();
}

/// Directories first, then files; dotfiles hidden by default
#[test]
fn test_tree_lists_directories_first() {
    let mut harness = project();
    harness.render().unwrap();

    let (_, dir_row) = harness.find_text("A").expect("directory row");
    let (_, file_row) = harness.find_text("b.txt").expect("file row");
    assert!(dir_row < file_row);
    assert_eq!(dir_row, layout::FIRST_TREE_ROW);
    harness.assert_screen_not_contains(".hidden");
}

#[test]
fn test_hidden_files_shown_when_configured() {
    let mut config = Config::default();
    config.file_explorer.show_hidden = true;
    let mut harness =
        EditorTestHarness::with_config(80, 24, &[("b.txt", ""), (".hidden", "")], config).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains(".hidden");
}

#[test]
fn test_enter_opens_file() {
    let mut harness = project();

    key(&mut harness, KeyCode::Down);
    key(&mut harness, KeyCode::Enter);

    assert_eq!(harness.editor().tabs().tab_count(), 1);
    assert_eq!(harness.get_buffer_content(), "bee");
    assert_eq!(harness.editor().focus(), Focus::Editor);
    assert_eq!(harness.notice().as_deref(), Some("Opening file: b.txt"));

    harness.render().unwrap();
    assert!(harness.get_tab_bar().contains("b.txt"));
}

#[test]
fn test_opening_same_file_twice_reuses_tab() {
    let mut harness = project();

    key(&mut harness, KeyCode::Down);
    key(&mut harness, KeyCode::Enter);
    harness.type_text("busy ").unwrap();

    // Back to the explorer, open it again from a new tab
    harness.ctrl('n').unwrap();
    harness.ctrl('b').unwrap();
    key(&mut harness, KeyCode::Enter);

    assert_eq!(harness.editor().tabs().tab_count(), 2);
    assert_eq!(harness.editor().tabs().active_index(), 1);
    assert_eq!(harness.get_buffer_content(), "busy bee");
}

#[test]
fn test_expand_and_collapse_directory() {
    let mut harness = project();
    harness.render().unwrap();
    harness.assert_screen_not_contains("inner.rs");

    key(&mut harness, KeyCode::Right);
    harness.render().unwrap();
    harness.assert_screen_contains("inner.rs");

    key(&mut harness, KeyCode::Left);
    harness.render().unwrap();
    harness.assert_screen_not_contains("inner.rs");
}

#[test]
fn test_enter_toggles_directory_without_opening() {
    let mut harness = project();

    key(&mut harness, KeyCode::Enter);
    key(&mut harness, KeyCode::Down);
    key(&mut harness, KeyCode::Enter);

    assert_eq!(harness.get_buffer_content(), "fn main() {}");
    assert_eq!(harness.editor().status().file_type, ".rs");
}

/// A file deleted after listing yields an error notice and no tab
#[test]
fn test_open_deleted_file_shows_error() {
    let mut harness = EditorTestHarness::with_files(80, 24, &[("readme.md", "# hi")]).unwrap();
    fs::remove_file(harness.path("readme.md")).unwrap();

    key(&mut harness, KeyCode::Enter);

    let notice = harness.editor().notification().expect("notice");
    assert_eq!(notice.severity, Severity::Error);
    assert!(
        notice.message.starts_with("Error opening file:"),
        "Got: {}",
        notice.message
    );
    assert_eq!(harness.editor().tabs().tab_count(), 0);
    assert_eq!(harness.editor().focus(), Focus::FileExplorer);
}

#[test]
fn test_click_row_opens_file() {
    let mut harness = project();
    harness.render().unwrap();

    let (x, y) = harness.find_text("b.txt").expect("file row");
    harness.click(x, y).unwrap();

    assert_eq!(harness.editor().tabs().tab_count(), 1);
    assert_eq!(harness.get_buffer_content(), "bee");
}

#[test]
fn test_explorer_keys_do_not_edit() {
    let mut harness = project();
    harness.type_text("xyz").unwrap();

    assert_eq!(harness.editor().tabs().tab_count(), 0);
    assert!(!harness.get_buffer_content().contains("xyz"));
}
