//! "My Profile" section: who is signed in.

#[cfg(test)]
#[path = "profile_panel_test.rs"]
mod profile_panel_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

const UNKNOWN: &str = "\u{2014}";

fn profile_rows(session: &SessionState) -> [(&'static str, String); 2] {
    let email = session.user.as_ref().map_or_else(|| UNKNOWN.to_owned(), |u| u.email.clone());
    [("Name", session.display_name().to_owned()), ("Email", email)]
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="panel">
            <h2 class="panel__title">"My Profile"</h2>
            <dl class="profile">
                {move || {
                    session
                        .with(profile_rows)
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()
                }}
            </dl>
        </section>
    }
}
