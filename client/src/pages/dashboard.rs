//! Dashboard Shell: app bar, section drawer, and the selected panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route. Redirects to the Session Gate once the session is
//! restored without a token, so logout and a rejected token only have to
//! end the session.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::app_bar::AppBar;
use crate::components::goals_panel::GoalsPanel;
use crate::components::messages_panel::MessagesPanel;
use crate::components::metrics_panel::MetricsPanel;
use crate::components::profile_panel::ProfilePanel;
use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::state::dashboard::{DashboardState, Panel};
use crate::state::session::SessionState;
use crate::util::auth;

/// Bearer to resolve the user with, when signed in and not yet resolved.
fn pending_user_lookup(session: &SessionState) -> Option<String> {
    if session.user.is_some() { None } else { session.bearer() }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dashboard = RwSignal::new(DashboardState::default());

    auth::install_unauth_redirect(session, use_navigate());

    Effect::new(move || {
        let Some(bearer) = session.with(pending_user_lookup) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let lookup = api::fetch_current_user(&bearer).await;
            auth::resolve_user(session, &bearer, lookup);
        });
    });

    let on_menu = Callback::new(move |()| dashboard.update(|d| d.set_sidebar(true)));
    let on_logout = Callback::new(move |()| {
        leptos::logging::log!("logout");
        auth::sign_out(session);
    });
    let user_name = Signal::derive(move || session.with(|s| s.display_name().to_owned()));

    view! {
        <Show
            when=move || session.with(SessionState::is_authenticated)
            fallback=|| view! { <div class="dashboard"><p class="panel__status">"Loading..."</p></div> }
        >
            <div class="dashboard">
                <AppBar on_menu=on_menu on_logout=on_logout/>
                <Sidebar dashboard=dashboard user_name=user_name/>
                <main class="dashboard__content">
                    {move || match dashboard.with(DashboardState::panel) {
                        Panel::Metrics => view! { <MetricsPanel/> }.into_any(),
                        Panel::Profile => view! { <ProfilePanel/> }.into_any(),
                        Panel::Goals => view! { <GoalsPanel/> }.into_any(),
                        Panel::Messages => view! { <MessagesPanel/> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
