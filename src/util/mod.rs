//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate route-guard and formatting concerns from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod format;
