//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, guards, form state)
//! and delegates rendering details to `components`. Pure decision helpers are
//! extracted per page so they stay testable on the native target.

pub mod about;
pub mod admin;
pub mod ai_tutor;
pub mod certificate_verify;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod payment_success;
pub mod programs;
pub mod register;
