use super::*;

#[test]
fn validate_registration_accepts_complete_input() {
    let input =
        validate_registration_input(" ada@example.com ", "hunter22", "hunter22", " Ada Lovelace ")
            .unwrap();
    assert_eq!(input.email, "ada@example.com");
    assert_eq!(input.full_name, "Ada Lovelace");
    assert_eq!(input.password, "hunter22");
}

#[test]
fn validate_registration_requires_every_field() {
    assert_eq!(
        validate_registration_input("", "hunter22", "hunter22", "Ada").unwrap_err(),
        "Fill in every field."
    );
    assert_eq!(
        validate_registration_input("a@b.com", "hunter22", "hunter22", "  ").unwrap_err(),
        "Fill in every field."
    );
}

#[test]
fn validate_registration_enforces_minimum_password_length() {
    assert_eq!(
        validate_registration_input("a@b.com", "short", "short", "Ada").unwrap_err(),
        "Password must be at least 6 characters."
    );
}

#[test]
fn validate_registration_requires_matching_confirmation() {
    assert_eq!(
        validate_registration_input("a@b.com", "hunter22", "hunter23", "Ada").unwrap_err(),
        "Passwords do not match."
    );
}
