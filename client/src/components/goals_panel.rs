//! "Wellness Goals" section. Static content.

use leptos::prelude::*;

const GOALS: [(&str, &str); 4] = [
    ("Daily Steps", "Walk 10,000 steps every day."),
    ("Sleep", "Get 7 to 8 hours of sleep each night."),
    ("Hydration", "Drink at least 8 glasses of water daily."),
    ("Active Time", "Exercise for 30 minutes, 5 days a week."),
];

#[component]
pub fn GoalsPanel() -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Wellness Goals"</h2>
            <ul class="goals">
                {GOALS
                    .iter()
                    .map(|(title, detail)| {
                        view! {
                            <li class="goals__item">
                                <strong>{*title}</strong>
                                <span>{*detail}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
