//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and catalog items while reading shared
//! session state from the Leptos context provider.

pub mod course_card;
pub mod footer;
pub mod header;
