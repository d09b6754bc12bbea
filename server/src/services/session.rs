//! Bearer-token session management.
//!
//! ARCHITECTURE
//! ============
//! Tokens are opaque 32-byte hex strings handed to the browser on login. The
//! browser keeps them in `localStorage` and sends them back as
//! `Authorization: Bearer <token>`. Sessions live in memory only and never
//! expire; ending one is explicit via logout.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;

use super::accounts::UserSummary;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
#[must_use]
pub fn parse_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Live sessions keyed by token.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, UserSummary>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for `user`, returning the new token.
    pub async fn create(&self, user: UserSummary) -> String {
        let token = generate_token();
        self.inner.write().await.insert(token.clone(), user);
        token
    }

    /// Resolve a token to its user.
    pub async fn validate(&self, token: &str) -> Option<UserSummary> {
        self.inner.read().await.get(token).cloned()
    }

    /// End a session. Returns `true` if the token was live.
    pub async fn delete(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
