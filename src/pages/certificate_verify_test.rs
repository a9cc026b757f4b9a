use super::*;

#[test]
fn verify_path_trims_input() {
    assert_eq!(
        verify_path("  RTC-2026-0001  "),
        Some("/certificates/verify/RTC-2026-0001".to_owned())
    );
}

#[test]
fn verify_path_rejects_blank_input() {
    assert_eq!(verify_path(""), None);
    assert_eq!(verify_path("   "), None);
}
