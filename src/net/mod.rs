//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and dispatches authenticated requests, `types` defines the
//! JSON schema shared with the backend.

pub mod api;
pub mod types;
