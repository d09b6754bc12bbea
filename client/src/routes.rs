//! Client route paths.

pub const LOGIN: &str = "/";
pub const DASHBOARD: &str = "/health-dashboard";
pub const REGISTER: &str = "/register";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
