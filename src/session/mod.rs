//! Session context: the single source of truth for authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` component creates one [`Session`] per application load and
//! provides it through Leptos context. Pages read auth state from it and
//! issue every backend call through [`Session::api`], which decorates each
//! request with the token current at dispatch time.
//!
//! ERROR HANDLING
//! ==============
//! Bootstrap validation failures are absorbed: the session force-logs-out
//! locally and callers only ever observe an unauthenticated state. Login and
//! registration failures propagate unchanged so forms can display them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub mod storage;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{LoginRequest, RegisterRequest, Role, TokenResponse, User};

/// Authentication state for the current browser user.
///
/// Invariant: `user` is only ever set alongside a token, and only from a
/// backend response — never inferred locally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Opaque bearer credential, present iff logged in from this client's
    /// point of view.
    pub token: Option<String>,
    /// Validated profile; absent until the token has been confirmed by the
    /// backend at least once since it last changed.
    pub user: Option<User>,
    /// True only while the initial bootstrap validation is in flight.
    pub loading: bool,
}

impl SessionState {
    fn from_storage() -> Self {
        let token = storage::read_token();
        Self {
            loading: token.is_some(),
            token,
            user: None,
        }
    }

    /// Whether a validated user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the current user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Whether the current user can act as an instructor (admins included).
    pub fn is_instructor(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| matches!(u.role, Role::Instructor | Role::Admin))
    }
}

/// Copyable handle over the process-wide session state.
///
/// Created once by `App`, injected everywhere else via context.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create the session from any persisted token. `loading` starts true
    /// iff a token exists and still needs validation.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::from_storage()),
        }
    }

    /// Reactive read of the full state; tracks inside Leptos closures.
    pub fn read(&self) -> SessionState {
        self.state.get()
    }

    /// Non-reactive snapshot of the full state.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Client for issuing API requests with this session's credentials.
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.state)
    }

    /// Validate any persisted token against the backend. Called exactly once
    /// per application load; a later call is inert because `loading` has
    /// already cleared.
    pub async fn bootstrap(&self) {
        if self.take_bootstrap_token().is_none() {
            return;
        }
        let outcome = self.api().get_json::<User>("/auth/me").await;
        self.resolve_bootstrap(outcome);
    }

    /// Authenticate with credentials.
    ///
    /// On success the token is persisted and token+user are set in a single
    /// state update; the profile is returned for immediate use.
    ///
    /// # Errors
    ///
    /// Propagates the backend's rejection (or transport failure) unchanged,
    /// leaving session state untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp: TokenResponse = self.api().post_json("/auth/login", &request).await?;
        Ok(self.apply_auth(resp))
    }

    /// Create an account and authenticate in one step.
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::login`].
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: Role,
    ) -> Result<User, ApiError> {
        let request = RegisterRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            full_name: full_name.to_owned(),
            role,
        };
        let resp: TokenResponse = self.api().post_json("/auth/register", &request).await?;
        Ok(self.apply_auth(resp))
    }

    /// Drop the session locally: clears storage and both in-memory fields.
    /// No network call; idempotent.
    pub fn logout(&self) {
        storage::clear_token();
        self.state.update(|s| {
            s.token = None;
            s.user = None;
        });
    }

    /// Adopt a successful authentication response as the current session.
    /// Also ends any in-flight bootstrap: the fresh credentials win, and a
    /// late bootstrap outcome for the old token must not tear them down.
    pub(crate) fn apply_auth(&self, resp: TokenResponse) -> User {
        storage::write_token(&resp.access_token);
        let user = resp.user.clone();
        self.state.update(|s| {
            s.token = Some(resp.access_token);
            s.user = Some(resp.user);
            s.loading = false;
        });
        user
    }

    /// Apply the outcome of the bootstrap "who am I" call. Failures of any
    /// kind force a local logout; nothing is surfaced to the caller.
    pub(crate) fn resolve_bootstrap(&self, outcome: Result<User, ApiError>) {
        if !self.state.with_untracked(|s| s.loading) {
            return;
        }
        match outcome {
            Ok(user) => self.state.update(|s| {
                s.user = Some(user);
                s.loading = false;
            }),
            Err(_err) => {
                #[cfg(feature = "hydrate")]
                log::warn!("stored session rejected, logging out: {_err}");
                storage::clear_token();
                self.state.update(|s| {
                    s.token = None;
                    s.user = None;
                    s.loading = false;
                });
            }
        }
    }

    /// Token to validate, or `None` (which also ends the loading phase —
    /// there is nothing to check).
    pub(crate) fn take_bootstrap_token(&self) -> Option<String> {
        let token = self.state.with_untracked(|s| s.token.clone());
        if token.is_none() {
            self.state.update(|s| s.loading = false);
        }
        token
    }
}
