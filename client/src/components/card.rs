//! Pixel-styled card container.

use leptos::prelude::*;

#[must_use]
pub fn card_class(hover: bool, extra: &str) -> String {
    let base = if hover { "pixel-card pixel-card--hover" } else { "pixel-card" };
    let extra = extra.trim();
    if extra.is_empty() { base.to_owned() } else { format!("{base} {extra}") }
}

#[component]
pub fn Card(
    children: Children,
    /// Lift the card on hover.
    #[prop(optional)]
    hover: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <div class=card_class(hover, &class)>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_class_plain_and_hover() {
        assert_eq!(card_class(false, ""), "pixel-card");
        assert_eq!(card_class(true, ""), "pixel-card pixel-card--hover");
    }

    #[test]
    fn card_class_appends_extra() {
        assert_eq!(card_class(false, " text-center "), "pixel-card text-center");
    }
}
