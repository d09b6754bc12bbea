//! Registration Form page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Each input feeds `RegistrationForm::change`; submit
//! validates everything locally before posting to the register endpoint.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wellness::RegistrationField as F;
use wellness::registration::{GENDERS, ROLES, STATUSES};

use crate::components::form_field::{SelectField, TextField};
use crate::components::snackbar::notify;
use crate::net::api;
use crate::routes;
use crate::state::notification::NotificationState;
use crate::state::registration::RegistrationForm;
use crate::util::timer;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let form = RwSignal::new(RegistrationForm::default());
    let navigate = use_navigate();

    let value = move |field: F| Signal::derive(move || form.with(|f| f.value(field).to_owned()));
    let error = move |field: F| Signal::derive(move || form.with(|f| f.error(field).to_owned()));
    let on_change = move |field: F| Callback::new(move |v: String| form.update(|f| f.change(field, v)));

    let text = move |field: F, input_type: &'static str| {
        view! {
            <TextField
                label=field.label()
                name=field.name()
                input_type=input_type
                value=value(field)
                error=error(field)
                on_input=on_change(field)
            />
        }
    };
    let select = move |field: F, options: &'static [&'static str]| {
        view! {
            <SelectField
                label=field.label()
                name=field.name()
                options=options
                value=value(field)
                error=error(field)
                on_change=on_change(field)
            />
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(profile) = form.try_update(RegistrationForm::submit).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let reply = api::register(&profile).await;
            if let Err(e) = &reply {
                leptos::logging::warn!("registration failed: {e}");
            }
            let Some(outcome) = form.try_update(|f| f.finish(reply)) else {
                return;
            };
            if let Some(notification) = outcome.notification {
                notify(notifications, notification);
            }
            if let Some((path, delay)) = outcome.redirect {
                timer::after(delay, move || navigate(path, NavigateOptions::default()));
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1 class="auth-card__title">"User Registration"</h1>
                <form class="auth-form auth-form--grid" novalidate=true on:submit=on_submit>
                    {text(F::FirstName, "text")}
                    {text(F::LastName, "text")}
                    {text(F::Email, "email")}
                    {text(F::Password, "password")}
                    {text(F::DateOfBirth, "date")}
                    {text(F::Phone, "tel")}
                    {select(F::Gender, &GENDERS)}
                    {select(F::Status, &STATUSES)}
                    {select(F::Role, &ROLES)}
                    {text(F::City, "text")}
                    {text(F::State, "text")}
                    {text(F::ZipCode, "text")}
                    <button
                        class="auth-form__submit"
                        type="submit"
                        disabled=move || form.with(|f| f.pending)
                    >
                        "Register"
                    </button>
                </form>
                <div class="auth-card__links">
                    <p>
                        "Already have an account? "
                        <a href=routes::LOGIN>"Login"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
