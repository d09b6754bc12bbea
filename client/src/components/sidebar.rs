//! Left drawer listing the dashboard sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes only to the page-owned `DashboardState`: picking an entry selects
//! its section (which also closes the drawer); the backdrop just closes it.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::dashboard::{DashboardState, Section};

fn greeting(name: &str) -> String {
    format!("Welcome, {name}!")
}

fn item_class(selected: bool) -> &'static str {
    if selected { "sidebar__item sidebar__item--selected" } else { "sidebar__item" }
}

fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Dashboard => "\u{1f4ca}",
        Section::MyProfile => "\u{1f464}",
        Section::WellnessGoals => "\u{1f3cb}",
        Section::Messages => "\u{2709}",
    }
}

#[component]
pub fn Sidebar(dashboard: RwSignal<DashboardState>, #[prop(into)] user_name: Signal<String>) -> impl IntoView {
    let is_open = move || dashboard.with(|d| d.sidebar_open);
    let on_close = move |_| dashboard.update(|d| d.set_sidebar(false));

    view! {
        <Show when=is_open>
            <div class="sidebar__backdrop" on:click=on_close></div>
            <nav class="sidebar" role="presentation">
                <div class="sidebar__header">
                    <h2>{move || user_name.with(|n| greeting(n))}</h2>
                </div>
                <ul class="sidebar__list">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li
                                    class=move || item_class(dashboard.with(|d| d.selected == section))
                                    on:click=move |_| dashboard.update(|d| d.select(section))
                                >
                                    <span class="sidebar__icon">{section_icon(section)}</span>
                                    <span class="sidebar__label">{section.label()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </Show>
    }
}
