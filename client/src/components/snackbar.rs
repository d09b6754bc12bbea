//! Top-right notification with manual close and timed auto-dismiss.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`; pages raise notifications through `notify` against
//! the shared `RwSignal<NotificationState>` context.

#[cfg(test)]
#[path = "snackbar_test.rs"]
mod snackbar_test;

use leptos::prelude::*;

use crate::state::notification::{NOTIFICATION_DURATION_MS, Notification, NotificationState};
use crate::util::timer;

/// Show `notification` and schedule its auto-dismiss.
pub fn notify(notifications: RwSignal<NotificationState>, notification: Notification) {
    let Some(seq) = notifications.try_update(|n| n.show(notification)) else {
        return;
    };
    timer::after(NOTIFICATION_DURATION_MS, move || {
        notifications.update(|n| {
            n.dismiss_if(seq);
        });
    });
}

fn snackbar_class(notification: &Notification) -> String {
    format!("snackbar {}", notification.severity.css_modifier())
}

/// Class and message text for one rendered notification.
fn snackbar_parts(notification: Notification) -> (String, String) {
    (snackbar_class(&notification), notification.message)
}

#[component]
pub fn Snackbar() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    move || {
        notifications.with(|n| n.current.clone()).map(|n| {
            let (class, message) = snackbar_parts(n);
            view! {
                <div class=class role="alert">
                    <span class="snackbar__message">{message}</span>
                    <button
                        class="snackbar__close"
                        aria-label="Close"
                        on:click=move |_| notifications.update(NotificationState::dismiss)
                    >
                        "\u{00d7}"
                    </button>
                </div>
            }
        })
    }
}
