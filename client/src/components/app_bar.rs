//! Dashboard top bar: menu button, title, logout.

use leptos::prelude::*;

#[component]
pub fn AppBar(on_menu: Callback<()>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-bar">
            <button class="app-bar__menu" aria-label="menu" on:click=move |_| on_menu.run(())>
                "\u{2630}"
            </button>
            <h1 class="app-bar__title">"Health & Wellness Dashboard"</h1>
            <button class="app-bar__logout" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </header>
    }
}
