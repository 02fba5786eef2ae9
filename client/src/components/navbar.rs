//! Fixed top navigation with section anchors and the theme toggle.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::state::theme::{ThemeMode, use_theme};

/// Icon shown on the toggle: the mode a click switches to.
#[must_use]
pub fn theme_toggle_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "🌙",
        ThemeMode::Dark => "☀️",
    }
}

#[must_use]
pub fn theme_toggle_label(mode: ThemeMode) -> String {
    format!("Switch to {} mode", mode.toggled())
}

fn links_class(open: bool) -> &'static str {
    if open { "navbar__links navbar__links--open" } else { "navbar__links" }
}

/// Must render inside a `ThemeProvider`.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme().unwrap_or_else(|err| panic!("Navbar: {err}"));
    let menu_open = RwSignal::new(false);

    let icon_theme = theme.clone();
    let label_theme = theme.clone();
    let on_toggle = move |_| {
        let next = theme.toggle();
        log::debug!("theme toggled to {next}");
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="#home">"<SM/>"</a>
            <ul class=move || links_class(menu_open.get())>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <li>
                                <a href=*href on:click=move |_| menu_open.set(false)>
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="navbar__actions">
                <button
                    type="button"
                    class="theme-toggle"
                    aria-label=move || theme_toggle_label(label_theme.mode())
                    on:click=on_toggle
                >
                    {move || theme_toggle_icon(icon_theme.mode())}
                </button>
                <button
                    type="button"
                    class="navbar__menu"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>
    }
}
