//! Live position stack tests

use jsurf_core::path::{CurrentPosition, FrameKind, PositionFrame};

#[test]
fn test_canonical_path_rendering() {
    let mut position = CurrentPosition::new();
    position.push_root();
    assert_eq!(position.json_path(), "$");

    position.step_into_entry("a");
    position.step_into_entry("b");
    position.step_into_array();
    position.accumulate_array_index();
    assert_eq!(position.json_path(), "$.a.b[0]");

    position.accumulate_array_index();
    position.accumulate_array_index();
    position.accumulate_array_index();
    position.step_into_entry("c");
    assert_eq!(position.json_path(), "$.a.b[3].c");
}

#[test]
fn test_array_index_starts_before_first_element() {
    let mut position = CurrentPosition::new();
    position.push_root();
    position.step_into_array();
    assert_eq!(
        position.peek(),
        Some(&PositionFrame::Array { index: -1 })
    );
    position.accumulate_array_index();
    assert_eq!(position.peek(), Some(&PositionFrame::Array { index: 0 }));
}

#[test]
fn test_key_answers_innermost_entry_only() {
    let mut position = CurrentPosition::new();
    position.push_root();
    assert_eq!(position.key(), None);
    position.step_into_entry("outer");
    assert_eq!(position.key(), Some("outer"));
    position.step_into_array();
    assert_eq!(position.key(), None);
    position.step_out();
    assert_eq!(position.key(), Some("outer"));
}

#[test]
fn test_peek_kind_tracks_innermost_frame() {
    let mut position = CurrentPosition::new();
    assert_eq!(position.peek_kind(), None);
    position.push_root();
    assert_eq!(position.peek_kind(), Some(FrameKind::Root));
    position.step_into_entry("a");
    assert_eq!(position.peek_kind(), Some(FrameKind::Object));
    position.step_into_array();
    assert_eq!(position.peek_kind(), Some(FrameKind::Array));
}

#[test]
fn test_clear_releases_every_frame() {
    let mut position = CurrentPosition::new();
    position.push_root();
    position.step_into_entry("a");
    position.step_into_array();
    assert_eq!(position.depth(), 3);
    position.clear();
    assert!(position.is_empty());
    assert_eq!(position.json_path(), "$");
}
