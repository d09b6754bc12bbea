//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the in-memory account registry and the live session table; both are
//! `Arc`-backed so cloning the state per request is cheap.

use crate::services::accounts::AccountStore;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    pub accounts: AccountStore,
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::accounts::UserSummary;

    pub const TEST_EMAIL: &str = "user@example.com";
    pub const TEST_PASSWORD: &str = "secret1";

    /// App state with one seeded account (`user@example.com` / `secret1`).
    pub async fn seeded_state() -> AppState {
        let state = AppState::new();
        state.accounts.seed("Test User", TEST_EMAIL, TEST_PASSWORD).await;
        state
    }

    /// Seeded state plus a live session token for the seeded account.
    pub async fn signed_in_state() -> (AppState, String) {
        let state = seeded_state().await;
        let token = state
            .sessions
            .create(UserSummary { name: "Test User".to_owned(), email: TEST_EMAIL.to_owned() })
            .await;
        (state, token)
    }
}
