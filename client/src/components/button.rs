//! Pixel-styled button.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "pixel-button--primary",
            Self::Secondary => "pixel-button--secondary",
            Self::Success => "pixel-button--success",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "pixel-button--sm",
            Self::Md => "pixel-button--md",
            Self::Lg => "pixel-button--lg",
        }
    }
}

/// Compose the class list for a button.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize, disabled: bool, extra: &str) -> String {
    let mut class = format!("pixel-button {} {}", variant.class(), size.class());
    if disabled {
        class.push_str(" pixel-button--disabled");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=move || button_class(variant, size, disabled.get(), &class)
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
