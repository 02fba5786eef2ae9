//! Full-screen "insert coin" overlay shown before the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A 40 ms timer walks the bar to 100% in about two seconds. The
//! `PRESS START` prompt appears once the bar is full and the minimum display
//! time has passed; a click or any key then fires `on_complete` after a short
//! press animation.

#[cfg(test)]
#[path = "loading_screen_test.rs"]
mod loading_screen_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::content::LOADING_FACTS;

pub const TICK_MS: u32 = 40;
pub const PROGRESS_STEP: u8 = 2;
pub const MIN_LOADING_MS: f64 = 2_000.0;
pub const PRESS_DELAY_MS: u32 = 300;

/// Progress bar and start-prompt state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingProgress {
    percent: u8,
    ready: bool,
    pressed: bool,
}

impl LoadingProgress {
    #[must_use]
    pub fn percent(self) -> u8 {
        self.percent
    }

    /// The start prompt is showing.
    #[must_use]
    pub fn is_ready(self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_pressed(self) -> bool {
        self.pressed
    }

    /// Advances one timer tick, `elapsed_ms` after mount. The prompt waits
    /// for a full bar and the minimum display time.
    pub fn tick(&mut self, elapsed_ms: f64) {
        if self.percent < 100 {
            self.percent = self.percent.saturating_add(PROGRESS_STEP).min(100);
        } else if elapsed_ms >= MIN_LOADING_MS {
            self.ready = true;
        }
    }

    /// True only for the first press after the prompt appears.
    pub fn press(&mut self) -> bool {
        if !self.ready || self.pressed {
            return false;
        }
        self.pressed = true;
        true
    }
}

#[must_use]
pub fn progress_style(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

#[component]
pub fn LoadingScreen(on_complete: Callback<()>) -> impl IntoView {
    let progress = RwSignal::new(LoadingProgress::default());
    let fact = RwSignal::new(LOADING_FACTS[0]);

    let start = move || {
        let mut pressed = false;
        progress.update(|p| pressed = p.press());
        if !pressed {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(PRESS_DELAY_MS).await;
            on_complete.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        on_complete.run(());
    };

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        // Picked after hydration so server and client markup agree.
        Effect::new(move || fact.set(crate::content::loading_fact(js_sys::Math::random())));

        let started_ms = js_sys::Date::now();
        let timer = StoredValue::new_local(Some(Interval::new(TICK_MS, move || {
            let elapsed_ms = js_sys::Date::now() - started_ms;
            progress.update(|p| p.tick(elapsed_ms));
        })));
        Effect::new(move || {
            if progress.with(|p| p.is_ready()) {
                timer.set_value(None);
            }
        });

        let keys = window_event_listener(leptos::ev::keydown, move |_| start());
        on_cleanup(move || {
            keys.remove();
            timer.set_value(None);
        });
    }

    let on_click = Callback::new(move |_: leptos::ev::MouseEvent| start());

    view! {
        <div class="loading-screen">
            <div class="loading-screen__inner">
                <h1 class="loading-screen__title glitch">"<LOADING/>"</h1>
                <p class="loading-screen__fact muted">{move || fact.get()}</p>
                <div class="loading-screen__bar">
                    <div class="loading-screen__fill" style=move || progress_style(progress.get().percent())></div>
                    <span class="loading-screen__percent">{move || format!("{}%", progress.get().percent())}</span>
                </div>
                <Show when=move || progress.get().is_ready()>
                    <div class=move || {
                        if progress.get().is_pressed() { "loading-screen__prompt is-pressed" } else { "loading-screen__prompt" }
                    }>
                        <Button size=ButtonSize::Lg class="loading-screen__start" on_click=on_click>
                            "> PRESS START <"
                        </Button>
                        <p class="loading-screen__hint muted">"Press any key or click to continue..."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
