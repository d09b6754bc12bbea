//! Session Gate credential rules and login wire types.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("login email regex is valid")
});

/// Returns `true` when `email` is a well-formed address for login.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns `true` when `password` meets the minimum length.
#[must_use]
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Email/password pair captured by the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Both fields present and both pass their format rules.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate_email(&self.email) && validate_password(&self.password)
    }
}

/// Inline errors for the two login fields. Empty string means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: String,
    pub password: String,
}

impl LoginErrors {
    /// Recompute only the email error.
    pub fn check_email(&mut self, email: &str) {
        self.email = if validate_email(email) { String::new() } else { INVALID_EMAIL_FORMAT.to_owned() };
    }

    /// Recompute only the password error.
    pub fn check_password(&mut self, password: &str) {
        self.password = if validate_password(password) { String::new() } else { PASSWORD_TOO_SHORT.to_owned() };
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// `POST /api/auth/login` request body.
pub type LoginRequest = Credentials;

/// `POST /api/auth/login` response body.
///
/// Rejections carry `success: false` and a message; only accepted logins
/// carry a token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl LoginResponse {
    #[must_use]
    pub fn accepted(message: impl Into<String>, token: impl Into<String>) -> Self {
        Self { success: true, message: message.into(), token: Some(token.into()) }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), token: None }
    }
}
