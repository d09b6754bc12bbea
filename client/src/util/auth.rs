//! Session lifecycle helpers shared by routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login creates the session, logout destroys it, and guarded routes apply
//! identical redirect behavior. Storage writes happen here and nowhere else.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api;
use crate::net::types::UserLookup;
use crate::routes;
use crate::state::session::SessionState;
use crate::util::storage;

/// Redirect only after the persisted token has been read back.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.restored && !state.is_authenticated()
}

/// Redirect to the Session Gate whenever the session is restored and empty.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });
}

/// Adopt any token left in browser storage by a previous page load.
pub fn restore_session(session: RwSignal<SessionState>) {
    let token = storage::load_token();
    session.update(|s| s.restore(token));
}

/// Start a session with a freshly issued token and persist it.
pub fn sign_in(session: RwSignal<SessionState>, token: String) {
    storage::save_token(&token);
    session.update(|s| s.establish(token));
}

/// End the session locally and tell the server, best effort.
pub fn sign_out(session: RwSignal<SessionState>) {
    storage::clear_token();
    let Some(token) = session.try_update(SessionState::end).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        api::logout(&format!("Bearer {token}")).await;
    });
}

/// Apply a user lookup. A token the server rejected is dropped from storage
/// too, which sends guarded routes back to the Session Gate.
pub fn resolve_user(session: RwSignal<SessionState>, bearer: &str, lookup: UserLookup) {
    let expired = session.try_update(|s| s.apply_user_lookup(bearer, lookup)).flatten();
    if expired.is_some() {
        leptos::logging::warn!("session token rejected");
        storage::clear_token();
    }
}
