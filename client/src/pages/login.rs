//! Session Gate: email + password login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Root route. Validates per keystroke, authenticates through the login
//! endpoint, establishes the session on success, and hands off to the
//! dashboard after a short delay so the success notification is visible.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::TextField;
use crate::components::snackbar::notify;
use crate::net::api::HttpAuthenticator;
use crate::routes;
use crate::state::login::{LoginForm, LoginOutcome, authenticate};
use crate::state::notification::NotificationState;
use crate::state::session::SessionState;
use crate::util::{auth, timer};

fn submit_label(pending: bool) -> &'static str {
    if pending { "Signing in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = authenticate(&HttpAuthenticator, &credentials).await;
            form.update(LoginForm::finish);

            let redirect = outcome.redirect();
            let LoginOutcome { notification, token, success } = outcome;
            if success {
                leptos::logging::log!("login succeeded");
            } else {
                leptos::logging::warn!("login failed: {}", notification.message);
            }
            if let Some(token) = token {
                auth::sign_in(session, token);
            }
            notify(notifications, notification);
            if let Some((path, delay)) = redirect {
                timer::after(delay, move || navigate(path, NavigateOptions::default()));
            }
        });
    };

    let pending = move || form.with(|f| f.pending);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Login"</h1>
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <TextField
                        label="Email"
                        name="email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        error=Signal::derive(move || form.with(|f| f.errors.email.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.set_email(v)))
                    />
                    <TextField
                        label="Password"
                        name="password"
                        input_type="password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        error=Signal::derive(move || form.with(|f| f.errors.password.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.set_password(v)))
                    />
                    <button class="auth-form__submit" type="submit" disabled=pending>
                        {move || submit_label(pending())}
                    </button>
                </form>
                <div class="auth-card__links">
                    <a href=routes::FORGOT_PASSWORD>"Forgot Password?"</a>
                    <p>
                        "Don't have an account? "
                        <a href=routes::REGISTER>"Sign Up"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
