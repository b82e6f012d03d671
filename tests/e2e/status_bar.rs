use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

#[test]
fn test_status_on_welcome() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    let status = harness.editor().status();
    assert_eq!(status.file_name, "Welcome");
    assert_eq!(status.position, "Ln 1, Col 1");
    assert_eq!(status.file_type, "Plain Text");

    let bar = harness.get_status_bar();
    assert!(bar.contains("Welcome"), "Status bar: {}", bar);
    assert!(bar.contains("Ln 1, Col 1"), "Status bar: {}", bar);
}

#[test]
fn test_position_follows_typing() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.ctrl('n').unwrap();
    harness.type_text("ab\ncd").unwrap();
    harness.render().unwrap();

    assert_eq!(harness.editor().status().file_name, "Untitled-1");
    assert_eq!(harness.editor().status().position, "Ln 2, Col 3");
    assert!(harness.get_status_bar().contains("Ln 2, Col 3"));

    harness
        .send_key(KeyCode::Left, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.editor().status().position, "Ln 2, Col 2");
}

#[test]
fn test_file_type_from_extension() {
    let mut harness =
        EditorTestHarness::with_files(80, 24, &[("main.rs", "fn main() {}")]).unwrap();
    harness
        .send_key(KeyCode::Enter, KeyModifiers::NONE)
        .unwrap();
    harness.render().unwrap();

    assert_eq!(harness.editor().status().file_name, "main.rs");
    assert_eq!(harness.editor().status().file_type, ".rs");
    assert!(harness.get_status_bar().contains(".rs"));
}

#[test]
fn test_notice_shown_then_expires() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.ctrl('s').unwrap();
    harness.render().unwrap();
    assert!(harness
        .get_status_bar()
        .contains("Save functionality coming soon!"));

    let created = harness.editor().notification().expect("notice").created;
    let lifetime = Duration::from_millis(harness.editor().config().notifications.duration_ms);

    harness
        .editor_mut()
        .tick_at(created + lifetime - Duration::from_millis(1));
    assert!(harness.editor().notification().is_some());

    harness.editor_mut().tick_at(created + lifetime);
    assert!(harness.editor().notification().is_none());
    harness.render().unwrap();
    assert!(!harness.get_status_bar().contains("coming soon"));
}
