//! Reactive state types. Each is plain data wrapped in an `RwSignal` by the
//! component that owns it, or provided app-wide through context.

pub mod dashboard;
pub mod login;
pub mod notification;
pub mod registration;
pub mod session;
