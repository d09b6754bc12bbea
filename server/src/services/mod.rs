//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own account, session and metrics logic so route handlers
//! can stay focused on HTTP translation and bearer-token plumbing.

pub mod accounts;
pub mod metrics;
pub mod session;
