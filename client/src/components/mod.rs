//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and form inputs while reading/writing
//! shared state from Leptos context providers.

pub mod app_bar;
pub mod form_field;
pub mod goals_panel;
pub mod messages_panel;
pub mod metrics_panel;
pub mod profile_panel;
pub mod sidebar;
pub mod snackbar;
