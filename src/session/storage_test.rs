use super::*;

// Each test runs on its own thread, so the thread-local fallback store
// starts empty per test.

#[test]
fn read_token_empty_by_default() {
    assert_eq!(read_token(), None);
}

#[test]
fn write_then_read_round_trips() {
    write_token("tok-abc");
    assert_eq!(read_token(), Some("tok-abc".to_owned()));
}

#[test]
fn write_replaces_previous_value() {
    write_token("tok-old");
    write_token("tok-new");
    assert_eq!(read_token(), Some("tok-new".to_owned()));
}

#[test]
fn clear_removes_value_and_is_idempotent() {
    write_token("tok-abc");
    clear_token();
    assert_eq!(read_token(), None);
    clear_token();
    assert_eq!(read_token(), None);
}
