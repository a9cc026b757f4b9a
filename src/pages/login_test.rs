use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ada@example.com  ", "hunter2"),
        Ok(("ada@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter your email and password.")
    );
    assert_eq!(
        validate_login_input("ada@example.com", ""),
        Err("Enter your email and password.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords may legitimately start or end with spaces.
    assert_eq!(
        validate_login_input("ada@example.com", " spaced "),
        Ok(("ada@example.com".to_owned(), " spaced ".to_owned()))
    );
}
