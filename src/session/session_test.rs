use super::*;

fn sample_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        role,
        created_at: "2026-01-02T03:04:05Z".to_owned(),
        profile_image: None,
    }
}

fn auth_response(token: &str, role: Role) -> TokenResponse {
    TokenResponse {
        access_token: token.to_owned(),
        token_type: "bearer".to_owned(),
        user: sample_user(role),
    }
}

// =============================================================
// Startup
// =============================================================

#[test]
fn new_session_without_stored_token_is_unauthenticated() {
    let session = Session::new();
    let state = session.snapshot();
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert!(!state.loading);
}

#[test]
fn new_session_with_stored_token_starts_loading() {
    storage::write_token("tok-stored");
    let session = Session::new();
    let state = session.snapshot();
    assert_eq!(state.token, Some("tok-stored".to_owned()));
    assert_eq!(state.user, None);
    assert!(state.loading);
}

#[test]
fn bootstrap_without_token_ends_loading_without_network() {
    let session = Session::new();
    assert_eq!(session.take_bootstrap_token(), None);
    assert!(!session.snapshot().loading);
}

// =============================================================
// Bootstrap validation outcomes
// =============================================================

#[test]
fn bootstrap_success_sets_user_and_clears_loading() {
    storage::write_token("tok-stored");
    let session = Session::new();

    session.resolve_bootstrap(Ok(sample_user(Role::Student)));

    let state = session.snapshot();
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.token, Some("tok-stored".to_owned()));
    assert_eq!(state.user.unwrap().email, "ada@example.com");
}

#[test]
fn bootstrap_rejection_forces_local_logout() {
    storage::write_token("tok-expired");
    let session = Session::new();

    session.resolve_bootstrap(Err(ApiError::Status {
        status: 401,
        message: "Invalid token".to_owned(),
    }));

    let state = session.snapshot();
    assert!(!state.loading);
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert_eq!(storage::read_token(), None);
}

#[test]
fn bootstrap_transport_failure_treated_like_rejection() {
    storage::write_token("tok-stored");
    let session = Session::new();

    session.resolve_bootstrap(Err(ApiError::Transport("connection refused".to_owned())));

    assert_eq!(session.snapshot().token, None);
    assert_eq!(storage::read_token(), None);
}

#[test]
fn stray_second_bootstrap_resolution_is_inert() {
    storage::write_token("tok-stored");
    let session = Session::new();
    session.resolve_bootstrap(Ok(sample_user(Role::Student)));

    // A live session must not be torn down by a late duplicate outcome.
    session.resolve_bootstrap(Err(ApiError::Unavailable));

    let state = session.snapshot();
    assert!(state.is_authenticated());
    assert_eq!(storage::read_token(), Some("tok-stored".to_owned()));
}

#[test]
fn login_during_bootstrap_survives_late_rejection() {
    storage::write_token("tok-stale");
    let session = Session::new();
    assert!(session.snapshot().loading);

    // Login completes while the bootstrap request is still in flight; the
    // old token's rejection arrives afterwards.
    session.apply_auth(auth_response("tok-fresh", Role::Student));
    session.resolve_bootstrap(Err(ApiError::Status {
        status: 401,
        message: "Invalid token".to_owned(),
    }));

    let state = session.snapshot();
    assert!(state.is_authenticated());
    assert_eq!(state.token, Some("tok-fresh".to_owned()));
    assert_eq!(storage::read_token(), Some("tok-fresh".to_owned()));
}

// =============================================================
// Login / logout lifecycle
// =============================================================

#[test]
fn successful_login_sets_token_and_user_together() {
    let session = Session::new();
    let user = session.apply_auth(auth_response("tok-fresh", Role::Student));

    assert_eq!(user.email, "ada@example.com");
    let state = session.snapshot();
    assert!(state.is_authenticated());
    assert_eq!(state.token, Some("tok-fresh".to_owned()));
    assert_eq!(state.user.unwrap().email, "ada@example.com");
    assert_eq!(storage::read_token(), Some("tok-fresh".to_owned()));
}

#[test]
fn login_then_logout_leaves_no_trace() {
    let session = Session::new();
    session.apply_auth(auth_response("tok-fresh", Role::Student));
    session.logout();

    let state = session.snapshot();
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert_eq!(storage::read_token(), None);
}

#[test]
fn logout_is_idempotent() {
    let session = Session::new();
    session.apply_auth(auth_response("tok-fresh", Role::Student));
    session.logout();
    let once = session.snapshot();
    session.logout();
    assert_eq!(session.snapshot(), once);
}

// =============================================================
// Derived role flags
// =============================================================

#[test]
fn role_flags_absent_without_user() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
    assert!(!state.is_instructor());
}

#[test]
fn student_is_neither_admin_nor_instructor() {
    let session = Session::new();
    session.apply_auth(auth_response("t", Role::Student));
    let state = session.snapshot();
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
    assert!(!state.is_instructor());
}

#[test]
fn instructor_flag_covers_instructor_only() {
    let session = Session::new();
    session.apply_auth(auth_response("t", Role::Instructor));
    let state = session.snapshot();
    assert!(!state.is_admin());
    assert!(state.is_instructor());
}

#[test]
fn admin_implies_instructor() {
    let session = Session::new();
    session.apply_auth(auth_response("t", Role::Admin));
    let state = session.snapshot();
    assert!(state.is_admin());
    assert!(state.is_instructor());
}
