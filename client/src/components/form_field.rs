//! Labeled text and select inputs with an inline error line.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

fn field_id(name: &str) -> String {
    format!("field-{name}")
}

fn field_class(has_error: bool) -> &'static str {
    if has_error { "form-field form-field--error" } else { "form-field" }
}

/// Display text for a select option value (`"male"` -> `"Male"`).
fn option_label(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let id = field_id(name);

    view! {
        <div class=move || field_class(error.with(|e| !e.is_empty()))>
            <label class="form-field__label" for=id.clone()>
                {label}
            </label>
            <input
                class="form-field__input"
                id=id
                name=name
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.with(|e| !e.is_empty())>
                <p class="form-field__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    options: &'static [&'static str],
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let id = field_id(name);

    view! {
        <div class=move || field_class(error.with(|e| !e.is_empty()))>
            <label class="form-field__label" for=id.clone()>
                {label}
            </label>
            <select
                class="form-field__input"
                id=id
                name=name
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.with(String::is_empty)>
                    {format!("Select {label}")}
                </option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt>{option_label(opt)}</option> })
                    .collect_view()}
            </select>
            <Show when=move || error.with(|e| !e.is_empty())>
                <p class="form-field__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
