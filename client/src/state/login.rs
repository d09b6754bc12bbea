//! Session Gate form state and login outcome handling.
//!
//! DESIGN
//! ======
//! The component owns an `RwSignal<LoginForm>`. Keystrokes go through
//! `set_email`/`set_password`, which recompute only their own error. Submit is
//! split so the signal is never borrowed across an await:
//! `begin_submit` gates and marks the form pending, `authenticate` runs the
//! network call, and `finish` clears the pending flag.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;

use wellness::{Credentials, LoginErrors, LoginResponse};

use crate::routes;
use crate::state::notification::Notification;

/// Delay between a successful login and the dashboard redirect.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

/// Shown when the server gives no message or the request never completed.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please try again.";

const LOGIN_SUCCESS_FALLBACK: &str = "Login Successful!";

/// External authenticate operation.
///
/// `Err` means the request never produced a login response (transport or
/// decode failure); a rejected login is `Ok` with `success == false`.
pub trait Authenticator {
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<LoginResponse, String>>;
}

/// Login form inputs, inline errors, and in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub errors: LoginErrors,
    pub pending: bool,
}

impl LoginForm {
    pub fn set_email(&mut self, value: String) {
        self.errors.check_email(&value);
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.errors.check_password(&value);
        self.password = value;
    }

    /// Both fields filled, no inline errors, nothing in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.email.is_empty() && !self.password.is_empty() && self.errors.is_clear()
    }

    /// Gate a submit. Returns the credentials to send, or `None` for a no-op.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if !self.can_submit() {
            return None;
        }
        self.pending = true;
        Some(Credentials::new(self.email.clone(), self.password.clone()))
    }

    pub fn finish(&mut self) {
        self.pending = false;
    }
}

/// What the Session Gate does after the authenticate call settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub notification: Notification,
    /// Token to establish the session with, on success.
    pub token: Option<String>,
    pub success: bool,
}

impl LoginOutcome {
    #[must_use]
    pub fn from_result(result: Result<LoginResponse, String>) -> Self {
        match result {
            Ok(resp) if resp.success && has_token(resp.token.as_deref()) => Self {
                notification: Notification::success(non_empty_or(resp.message, LOGIN_SUCCESS_FALLBACK)),
                token: resp.token,
                success: true,
            },
            Ok(resp) if resp.success => Self {
                notification: Notification::error(LOGIN_FALLBACK_MESSAGE),
                token: None,
                success: false,
            },
            Ok(resp) => Self {
                notification: Notification::error(non_empty_or(resp.message, LOGIN_FALLBACK_MESSAGE)),
                token: None,
                success: false,
            },
            Err(_) => Self { notification: Notification::error(LOGIN_FALLBACK_MESSAGE), token: None, success: false },
        }
    }

    /// Route and delay for the post-login redirect, on success only.
    #[must_use]
    pub fn redirect(&self) -> Option<(&'static str, u32)> {
        self.success.then_some((routes::DASHBOARD, REDIRECT_DELAY_MS))
    }
}

/// A success without a usable token cannot start a session.
fn has_token(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.trim().is_empty())
}

pub(crate) fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}

/// Run the authenticate call and map it to an outcome.
pub async fn authenticate<A: Authenticator>(auth: &A, credentials: &Credentials) -> LoginOutcome {
    LoginOutcome::from_result(auth.login(credentials).await)
}
