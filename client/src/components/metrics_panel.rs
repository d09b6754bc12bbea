//! Dashboard section: today's steps, sleep, active time and a health tip.
//!
//! DESIGN
//! ======
//! `MetricsPanel` owns the fetch through a `MetricsSource`; `MetricsCards` is
//! a pure render of the `Metrics` it is given. The fetch tracks a memo of the
//! bearer only, so other session writes never refetch.

#[cfg(test)]
#[path = "metrics_panel_test.rs"]
mod metrics_panel_test;

use leptos::prelude::*;

use crate::net::api::{HttpMetricsSource, MetricsSource};
use crate::net::types::Metrics;
use crate::state::session::SessionState;

/// `8500` -> `"8,500"`.
fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn steps_line(metrics: &Metrics) -> String {
    format!("{} / {} steps", format_count(metrics.steps), format_count(metrics.step_goal))
}

fn sleep_line(metrics: &Metrics) -> String {
    format!("{:.1} hours", metrics.sleep_hours)
}

fn active_line(metrics: &Metrics) -> String {
    format!("{} minutes", metrics.active_minutes)
}

fn progress_style(metrics: &Metrics) -> String {
    format!("width: {}%", metrics.step_progress_percent())
}

/// What the metrics fetch depends on. Resolving the user leaves it unchanged.
fn metrics_key(session: &SessionState) -> Option<String> {
    session.bearer()
}

#[component]
pub fn MetricsPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let bearer = Memo::new(move |_| session.with(metrics_key));

    let metrics = LocalResource::new(move || {
        let bearer = bearer.get();
        async move {
            match bearer {
                Some(bearer) => Some(HttpMetricsSource { bearer }.fetch_metrics().await),
                None => None,
            }
        }
    });

    move || match metrics.get() {
        None => view! { <p class="panel__status">"Loading metrics..."</p> }.into_any(),
        Some(None) => ().into_any(),
        Some(Some(Ok(m))) => view! { <MetricsCards metrics=m/> }.into_any(),
        Some(Some(Err(e))) => {
            leptos::logging::warn!("metrics fetch failed: {e}");
            view! { <p class="panel__status panel__status--error">"Unable to load metrics."</p> }.into_any()
        }
    }
}

#[component]
pub fn MetricsCards(metrics: Metrics) -> impl IntoView {
    view! {
        <section class="metrics">
            <div class="metrics__card">
                <h3>"\u{1f6b6} Steps"</h3>
                <p class="metrics__value">{steps_line(&metrics)}</p>
                <div class="metrics__progress">
                    <div class="metrics__progress-bar" style=progress_style(&metrics)></div>
                </div>
            </div>
            <div class="metrics__card">
                <h3>"\u{1f6cf} Sleep"</h3>
                <p class="metrics__value">{sleep_line(&metrics)}</p>
            </div>
            <div class="metrics__card">
                <h3>"\u{23f1} Active Time"</h3>
                <p class="metrics__value">{active_line(&metrics)}</p>
            </div>
            <div class="metrics__card metrics__card--tip">
                <h3>"Health Tip"</h3>
                <p>{metrics.tip.clone()}</p>
            </div>
        </section>
    }
}
