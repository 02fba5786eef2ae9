//! `IntersectionObserver` glue for scroll-reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `use_scroll_reveal` is the component-facing hook. It owns one
//! `ScrollReveal` per call site, binds it once the node mounts, and detaches
//! on owner cleanup. SSR never binds, so server markup always renders hidden.

use leptos::prelude::*;

use crate::state::reveal::RevealOptions;
#[cfg(feature = "hydrate")]
use crate::state::reveal::{IntersectionEntry, ScrollReveal, ViewportObserver, ViewportUnavailable};

/// Browser `IntersectionObserver`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

/// Observer plus the JS callback it references. Disconnects on drop.
#[cfg(feature = "hydrate")]
pub struct BrowserObservation {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl Drop for BrowserObservation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
impl ViewportObserver for BrowserViewport {
    type Target = web_sys::Element;
    type Observation = BrowserObservation;

    fn observe(
        &self,
        target: &web_sys::Element,
        options: &RevealOptions,
        mut on_entry: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Result<BrowserObservation, ViewportUnavailable> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                on_entry(IntersectionEntry {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold()));
        if let Some(margin) = options.root_margin() {
            init.set_root_margin(margin);
        }

        // Throws (and lands here) when the constructor does not exist.
        let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|_| ViewportUnavailable)?;
        observer.observe(target);

        Ok(BrowserObservation { observer, _callback: callback })
    }
}

/// Returns a node ref to attach to the animated element and a signal that
/// flips to `true` the first time the element scrolls into view.
pub fn use_scroll_reveal(options: RevealOptions) -> (NodeRef<leptos::html::Div>, Signal<bool>) {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let reveal = StoredValue::new_local(ScrollReveal::attach(BrowserViewport, options));

        Effect::new(move || {
            let Some(el) = node_ref.get() else {
                return;
            };
            let el: &web_sys::Element = &el;
            reveal.update_value(|r| r.bind(el, move || visible.set(true)));
        });

        on_cleanup(move || {
            reveal.update_value(|r| r.detach());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = options;
    }

    (node_ref, visible.into())
}

/// Class list for a reveal wrapper.
#[must_use]
pub fn reveal_class(base: &str, visible: bool) -> String {
    let base = base.trim();
    let state = if visible { "reveal reveal--visible" } else { "reveal" };
    if base.is_empty() { state.to_owned() } else { format!("{base} {state}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_class_hidden_and_visible() {
        assert_eq!(reveal_class("", false), "reveal");
        assert_eq!(reveal_class("", true), "reveal reveal--visible");
    }

    #[test]
    fn reveal_class_keeps_base_classes() {
        assert_eq!(reveal_class(" pixel-card ", true), "pixel-card reveal reveal--visible");
    }

    #[test]
    fn hook_starts_hidden_outside_browser() {
        let owner = Owner::new();
        owner.with(|| {
            let (_node, visible) = use_scroll_reveal(RevealOptions::default());
            assert!(!visible.get_untracked());
        });
    }
}
