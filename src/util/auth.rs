//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages should apply identical redirect behavior: wait for the
//! session bootstrap to settle, then send unauthenticated visitors to
//! `/login` and under-privileged users to `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::session::{Session, SessionState};

/// Whether a settled session has no user and the page must redirect.
pub fn needs_login(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// Whether a settled, authenticated session lacks `required` (admins pass
/// every check).
pub fn lacks_role(state: &SessionState, required: Role) -> bool {
    if state.loading {
        return false;
    }
    state
        .user
        .as_ref()
        .is_some_and(|u| u.role != required && u.role != Role::Admin)
}

/// Redirect to `/login` whenever the session has settled with no user.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if needs_login(&session.read()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` whenever an authenticated user lacks `required`.
/// Pair with [`install_unauth_redirect`] for fully protected pages.
pub fn install_role_redirect<F>(session: Session, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if lacks_role(&session.read(), required) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });
}
