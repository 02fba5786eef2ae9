//! Context provider for the light/dark preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the browser-backed `ThemeStore`, shares it with the subtree, and
//! reads the persisted preference once the page is live. The read happens in
//! an effect, so server-rendered markup is always light and hydration starts
//! from the same state.

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::theme::{ThemeStore, provide_theme};
use crate::util::dark_mode::{DocumentRoot, LocalStorage};

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let store = Arc::new(ThemeStore::new(Arc::new(LocalStorage), Arc::new(DocumentRoot)));
    let ctx = provide_theme(store);

    Effect::new(move || {
        ctx.store().initialize();
    });

    children()
}
