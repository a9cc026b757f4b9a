use super::*;

#[test]
fn parse_role_accepts_known_roles() {
    assert_eq!(parse_role("student"), Some(Role::Student));
    assert_eq!(parse_role("instructor"), Some(Role::Instructor));
    assert_eq!(parse_role("admin"), Some(Role::Admin));
}

#[test]
fn parse_role_rejects_unknown_values() {
    assert_eq!(parse_role(""), None);
    assert_eq!(parse_role("Admin"), None);
    assert_eq!(parse_role("superuser"), None);
}
