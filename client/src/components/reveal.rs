//! Wrapper that fades its children in the first time they scroll into view.

use leptos::prelude::*;

use crate::state::reveal::RevealOptions;
use crate::util::viewport::{reveal_class, use_scroll_reveal};

#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    /// Visible fraction that triggers the reveal.
    #[prop(optional)]
    threshold: Option<f64>,
    #[prop(optional, into)] root_margin: Option<String>,
) -> impl IntoView {
    let mut options = RevealOptions::new();
    if let Some(threshold) = threshold {
        options = options.with_threshold(threshold);
    }
    if let Some(margin) = root_margin {
        options = options.with_root_margin(margin);
    }
    let (node_ref, visible) = use_scroll_reveal(options);

    view! {
        <div node_ref=node_ref class=move || reveal_class(&class, visible.get())>
            {children()}
        </div>
    }
}
