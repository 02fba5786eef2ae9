//! Browser backing for the theme preference.
//!
//! `LocalStorage` persists the preference in `window.localStorage` and
//! `DocumentRoot` toggles the `dark` class on the `<html>` element. Both
//! require a browser environment and no-op in SSR builds. Tests swap in
//! `test_helpers::MemoryStore`.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior: a missing or
//! throwing `localStorage` reads as "no preference" and writes are dropped.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{PreferenceStore, RootMarker, ThemeMode};

/// Class applied to `<html>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("theme: localStorage unavailable, preference not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("theme: failed to persist {key}={value}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// The `<html>` element's class list.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl RootMarker for DocumentRoot {
    fn apply(&self, mode: ThemeMode) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = doc.document_element() {
                    let class_list = el.class_list();
                    let _ = if mode.is_dark() {
                        class_list.add_1(DARK_CLASS)
                    } else {
                        class_list.remove_1(DARK_CLASS)
                    };
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
