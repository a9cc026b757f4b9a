//! Authenticated HTTP client for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! backend is only reachable from the browser.
//!
//! DESIGN
//! ======
//! The client handle is long-lived but the bearer token is not: login and
//! logout change it at any point during the handle's lifetime. Every request
//! therefore re-reads the token from session state when its [`RequestPlan`]
//! is built, never from a header map captured at construction time.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session::SessionState;

/// Path prefix of every backend endpoint.
pub const API_ROOT: &str = "/api";

/// Build a full request URL for an endpoint path like `/courses`.
pub fn api_url(path: &str) -> String {
    format!("{API_ROOT}{path}")
}

/// Failure of a backend call, as seen by pages and the session context.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Backend `detail` message when present, else a generic line.
        message: String,
    },
    /// The response body could not be decoded as the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Network calls are only possible in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status code, when the backend produced a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP methods used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Handle for issuing API requests with the session's current credentials.
///
/// Copyable and cheap; it only carries the session signal. Obtain one via
/// [`crate::session::Session::api`].
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: RwSignal<SessionState>,
}

impl ApiClient {
    pub(crate) fn new(session: RwSignal<SessionState>) -> Self {
        Self { session }
    }

    /// Start a GET request plan for `path`.
    pub fn get(&self, path: &str) -> RequestPlan {
        self.plan(Method::Get, path)
    }

    /// Start a POST request plan for `path`.
    pub fn post(&self, path: &str) -> RequestPlan {
        self.plan(Method::Post, path)
    }

    /// Start a PUT request plan for `path`.
    pub fn put(&self, path: &str) -> RequestPlan {
        self.plan(Method::Put, path)
    }

    /// GET `path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from dispatch or decoding.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get(path).send_json().await
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from serialization, dispatch or decoding.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.post(path).json(body)?.send_json().await
    }

    /// PUT `body` as JSON to `path`, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from serialization or dispatch.
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.put(path).json(body)?.send_ok().await
    }

    // The one concurrency-sensitive step in the client: the Authorization
    // value is computed here, when the plan is built, from whatever token
    // the session holds at that moment.
    fn plan(&self, method: Method, path: &str) -> RequestPlan {
        let authorization = self
            .session
            .with_untracked(|s| s.token.as_ref().map(|t| format!("Bearer {t}")));
        RequestPlan {
            method,
            url: api_url(path),
            authorization,
            body: None,
        }
    }
}

/// A fully described request, ready to dispatch.
///
/// Header decoration has already happened by the time a plan exists, which
/// keeps the auth behavior observable in native tests without a browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestPlan {
    /// HTTP method.
    pub method: Method,
    /// Absolute request path including [`API_ROOT`].
    pub url: String,
    /// `Bearer <token>` header value, when a session token was present.
    pub authorization: Option<String>,
    body: Option<String>,
}

impl RequestPlan {
    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body fails to serialize.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(raw);
        Ok(self)
    }

    /// Whether a JSON body is attached.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Dispatch the request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unavailable`] outside the browser, otherwise any
    /// transport, status or decode failure.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.dispatch().await?;
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Dispatch the request, discarding the response body.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RequestPlan::send_json`].
    pub async fn send_ok(self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.dispatch().await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch(self) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match self.method {
            Method::Get => Request::get(&self.url),
            Method::Post => Request::post(&self.url),
            Method::Put => Request::put(&self.url),
        };
        if let Some(auth) = &self.authorization {
            builder = builder.header("Authorization", auth);
        }

        let request = match self.body {
            Some(raw) => builder
                .header("Content-Type", "application/json")
                .body(raw)
                .map_err(|e| ApiError::Transport(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?,
        };

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(resp.status(), &body));
        }
        Ok(resp)
    }
}

/// Turn a non-success response into an [`ApiError::Status`], preferring the
/// backend's `{"detail": "..."}` message when the body carries one.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }
    let message = serde_json::from_str::<Detail>(body)
        .map_or_else(|_| format!("request failed with status {status}"), |d| d.detail);
    ApiError::Status { status, message }
}
