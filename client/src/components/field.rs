//! Labelled form inputs with an inline error line.

use leptos::prelude::*;

fn field_class(has_error: bool) -> &'static str {
    if has_error { "pixel-input pixel-input--error" } else { "pixel-input" }
}

/// Single-line text input.
#[component]
pub fn Input(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                type=input_type
                name=name
                placeholder=placeholder
                class=move || field_class(error.with(Option::is_some))
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="field__error">{msg}</p> })}
        </label>
    }
}

/// Multi-line text input.
#[component]
pub fn Textarea(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 5)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                name=name
                rows=rows
                placeholder=placeholder
                class=move || field_class(error.with(Option::is_some))
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="field__error">{msg}</p> })}
        </label>
    }
}
