//! Shared wellness domain model, validation rules, and wire DTOs.
//!
//! This crate owns the field rules and JSON shapes used by both `server` and
//! `client`. Keeping them here means the browser validates a keystroke with
//! exactly the same rule the server applies when the form is submitted.

pub mod login;
pub mod metrics;
pub mod registration;

pub use login::{Credentials, LoginErrors, LoginRequest, LoginResponse};
pub use metrics::{HEALTH_TIPS, Metrics};
pub use registration::{RegistrationField, RegistrationProfile, ValidationErrors, validate_field, validate_profile};
