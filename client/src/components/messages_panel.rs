//! "Messages" section. Static content.

use leptos::prelude::*;

const MESSAGES: [(&str, &str); 3] = [
    ("Dr. Patel", "Your lab results are in. Everything looks good."),
    ("Care Team", "Reminder: annual check-up is due next month."),
    ("Wellness Coach", "Great job on your step streak this week!"),
];

#[component]
pub fn MessagesPanel() -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Messages"</h2>
            <ul class="messages">
                {MESSAGES
                    .iter()
                    .map(|(from, body)| {
                        view! {
                            <li class="messages__item">
                                <span class="messages__from">{*from}</span>
                                <p class="messages__body">{*body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
