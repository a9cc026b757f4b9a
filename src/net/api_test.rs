use super::*;
use crate::net::types::{Role, TokenResponse, User};
use crate::session::Session;

fn login_as(session: &Session, token: &str) {
    session.apply_auth(TokenResponse {
        access_token: token.to_owned(),
        token_type: "bearer".to_owned(),
        user: User {
            id: "u-1".to_owned(),
            email: "ada@example.com".to_owned(),
            full_name: "Ada Lovelace".to_owned(),
            role: Role::Student,
            created_at: "2026-01-02T03:04:05Z".to_owned(),
            profile_image: None,
        },
    });
}

#[test]
fn api_url_prefixes_root() {
    assert_eq!(api_url("/courses"), "/api/courses");
    assert_eq!(api_url("/auth/me"), "/api/auth/me");
}

// =============================================================
// Per-request token injection
// =============================================================

#[test]
fn plan_without_token_has_no_authorization_header() {
    let session = Session::new();
    let plan = session.api().get("/courses");
    assert_eq!(plan.authorization, None);
}

#[test]
fn plan_after_login_carries_bearer_header() {
    let session = Session::new();
    login_as(&session, "tok-1");
    let plan = session.api().get("/enrollments");
    assert_eq!(plan.authorization, Some("Bearer tok-1".to_owned()));
}

#[test]
fn client_built_before_login_still_sees_fresh_token() {
    let session = Session::new();
    let api = session.api();
    assert_eq!(api.get("/courses").authorization, None);

    login_as(&session, "tok-late");

    // Same client value, new token: header must reflect dispatch-time state.
    let plan = api.get("/courses");
    assert_eq!(plan.authorization, Some("Bearer tok-late".to_owned()));
}

#[test]
fn plan_after_logout_carries_no_header() {
    let session = Session::new();
    let api = session.api();
    login_as(&session, "tok-1");
    session.logout();
    assert_eq!(api.get("/courses").authorization, None);
}

#[test]
fn token_change_between_plans_is_observed() {
    let session = Session::new();
    let api = session.api();
    login_as(&session, "tok-old");
    let before = api.get("/courses");
    login_as(&session, "tok-new");
    let after = api.get("/courses");
    assert_eq!(before.authorization, Some("Bearer tok-old".to_owned()));
    assert_eq!(after.authorization, Some("Bearer tok-new".to_owned()));
}

// =============================================================
// Plan construction
// =============================================================

#[test]
fn plans_use_expected_methods_and_urls() {
    let session = Session::new();
    let api = session.api();
    assert_eq!(api.get("/courses").method, Method::Get);
    assert_eq!(api.post("/auth/login").method, Method::Post);
    assert_eq!(api.put("/users/u-1/role").method, Method::Put);
    assert_eq!(api.put("/users/u-1/role").url, "/api/users/u-1/role");
}

#[test]
fn json_attaches_body() {
    let session = Session::new();
    let plan = session
        .api()
        .post("/ai/chat")
        .json(&serde_json::json!({"content": "hi"}))
        .unwrap();
    assert!(plan.has_body());
    assert!(!session.api().get("/courses").has_body());
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn status_error_prefers_backend_detail() {
    let err = status_error(400, r#"{"detail": "Already enrolled in this course"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: "Already enrolled in this course".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "Already enrolled in this course");
}

#[test]
fn status_error_falls_back_on_undecodable_body() {
    let err = status_error(502, "<html>bad gateway</html>");
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "request failed with status 502");
}

#[test]
fn status_error_falls_back_on_structured_detail() {
    // FastAPI validation errors carry a list under `detail`.
    let err = status_error(422, r#"{"detail": [{"msg": "field required"}]}"#);
    assert_eq!(err.to_string(), "request failed with status 422");
}
