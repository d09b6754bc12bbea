//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<SessionState>`. Login creates the
//! session, logout destroys it, and route guards read it. Browser storage is
//! only the persistence backing (see `util::auth`).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{CurrentUser, UserLookup};

const FALLBACK_NAME: &str = "User";

/// Authentication state: bearer token plus the resolved user, if fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<CurrentUser>,
    /// `true` once any persisted token has been read back on startup.
    pub restored: bool,
}

impl SessionState {
    /// Adopt a token read from storage at startup. Blank tokens are ignored.
    pub fn restore(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.trim().is_empty());
        self.restored = true;
    }

    /// Start a session from a freshly issued token.
    pub fn establish(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
        self.restored = true;
    }

    /// Destroy the session, returning the token that was live.
    pub fn end(&mut self) -> Option<String> {
        self.user = None;
        self.token.take()
    }

    /// Apply a `/api/auth/me` answer fetched with `bearer`.
    ///
    /// Answers for a bearer that is no longer live are dropped. A rejection
    /// ends the session and returns the token that died.
    pub fn apply_user_lookup(&mut self, bearer: &str, lookup: UserLookup) -> Option<String> {
        if self.bearer().as_deref() != Some(bearer) {
            return None;
        }
        match lookup {
            UserLookup::Found(user) => {
                self.user = Some(user);
                None
            }
            UserLookup::Rejected => self.end(),
            UserLookup::Unavailable => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` header value for API calls.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Name for greetings; falls back until the user has been fetched.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or(FALLBACK_NAME, |u| u.name.as_str())
    }
}
