//! Star-rating dialog with the `BRINGITON` cheat code.
//!
//! Typing the code (any case) maxes the rating and flashes the stars in
//! police colours for a few seconds. Picking a star by hand clears the
//! cheat banner. The parent mounts the dialog only while it is open, so each
//! opening starts from a blank draft.

#[cfg(test)]
#[path = "rating_modal_test.rs"]
mod rating_modal_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::util::contact_form::MAX_RATING;

pub const CHEAT_CODE: &str = "BRINGITON";
#[cfg(feature = "hydrate")]
const POLICE_LIGHTS_MS: u32 = 3_000;

/// Rating being composed inside the dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatingDraft {
    rating: u8,
    hover: u8,
    cheat_input: String,
    cheat_activated: bool,
    police_lights: bool,
}

impl RatingDraft {
    #[must_use]
    pub fn rating(&self) -> u8 {
        self.rating
    }

    #[must_use]
    pub fn cheat_input(&self) -> &str {
        &self.cheat_input
    }

    #[must_use]
    pub fn cheat_activated(&self) -> bool {
        self.cheat_activated
    }

    #[must_use]
    pub fn police_lights(&self) -> bool {
        self.police_lights
    }

    pub fn click_star(&mut self, star: u8) {
        self.rating = star.min(MAX_RATING);
        self.cheat_activated = false;
    }

    /// `0` clears the hover preview.
    pub fn hover(&mut self, star: u8) {
        self.hover = star.min(MAX_RATING);
    }

    /// Stores the cheat field. Returns `true` when this input activates the
    /// cheat, so the caller can schedule `lights_out`.
    pub fn type_cheat(&mut self, input: String) -> bool {
        let matched = input.eq_ignore_ascii_case(CHEAT_CODE);
        self.cheat_input = input;
        if !matched {
            return false;
        }
        self.cheat_activated = true;
        self.rating = MAX_RATING;
        self.police_lights = true;
        true
    }

    pub fn lights_out(&mut self) {
        self.police_lights = false;
    }

    /// Takes the rating and resets the draft. `None` while nothing is picked.
    pub fn submit(&mut self) -> Option<u8> {
        if self.rating == 0 {
            return None;
        }
        let rating = self.rating;
        *self = Self::default();
        Some(rating)
    }

    #[must_use]
    pub fn submit_label(&self) -> String {
        if self.rating > 0 {
            format!("SUBMIT {}★", self.rating)
        } else {
            "SELECT RATING".to_owned()
        }
    }

    /// Hover preview wins over the picked rating.
    #[must_use]
    pub fn star_class(&self, star: u8) -> String {
        let shown = if self.hover > 0 { self.hover } else { self.rating };
        let mut class = String::from("rating-modal__star");
        if star <= shown {
            class.push_str(" rating-modal__star--on");
        }
        if self.police_lights {
            class.push_str(if star % 2 == 0 { " rating-modal__star--red" } else { " rating-modal__star--blue" });
        }
        class
    }
}

#[component]
pub fn RatingModal(on_close: Callback<()>, on_rate: Callback<u8>) -> impl IntoView {
    let draft = RwSignal::new(RatingDraft::default());

    let on_backdrop = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let on_cheat = move |ev: leptos::ev::Event| {
        let mut activated = false;
        draft.update(|d| activated = d.type_cheat(event_target_value(&ev)));
        if activated {
            log::info!("rating cheat code activated");
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(POLICE_LIGHTS_MS).await;
                let _ = draft.try_update(RatingDraft::lights_out);
            });
        }
    };

    let on_submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let mut rating = None;
        draft.update(|d| rating = d.submit());
        if let Some(rating) = rating {
            on_rate.run(rating);
            on_close.run(());
        }
    });
    let on_cancel = Callback::new(move |_: leptos::ev::MouseEvent| on_close.run(()));
    let nothing_picked = Signal::derive(move || draft.with(|d| d.rating() == 0));

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog rating-modal"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <h3 class="rating-modal__title">"> RATE_PORTFOLIO"</h3>
                <p class="muted">"How would you rate this portfolio?"</p>

                <div class="rating-modal__stars">
                    {(1..=MAX_RATING)
                        .map(|star| {
                            view! {
                                <button
                                    type="button"
                                    class=move || draft.with(|d| d.star_class(star))
                                    aria-label=format!("Rate {star} stars")
                                    on:click=move |_| draft.update(|d| d.click_star(star))
                                    on:mouseenter=move |_| draft.update(|d| d.hover(star))
                                    on:mouseleave=move |_| draft.update(|d| d.hover(0))
                                >
                                    "⭐"
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show
                    when=move || draft.with(RatingDraft::cheat_activated)
                    fallback=move || {
                        view! {
                            <div class="rating-modal__cheat">
                                <label for="cheat-code" class="rating-modal__cheat-label">
                                    "🎮 GTA SAN ANDREAS CHEAT CODE 🎮"
                                </label>
                                <input
                                    id="cheat-code"
                                    type="text"
                                    class="pixel-input rating-modal__cheat-input"
                                    placeholder="Type the cheat code here..."
                                    autocomplete="off"
                                    prop:value=move || draft.with(|d| d.cheat_input().to_owned())
                                    on:input=on_cheat
                                />
                                <p class="muted">"💡 Hint: Remember the GTA cheat for 6-star wanted level?"</p>
                                <p class="muted">"(It starts with \"BRING\" and ends with \"ON\"...)"</p>
                            </div>
                        }
                    }
                >
                    <div class="rating-modal__banner">
                        <p>"🚓 CHEAT ACTIVATED! 🚓"</p>
                        <p>"GTA San Andreas style!"</p>
                    </div>
                </Show>

                <div class="dialog__actions">
                    <Button variant=ButtonVariant::Secondary on_click=on_cancel>
                        "CANCEL"
                    </Button>
                    <Button disabled=nothing_picked on_click=on_submit>
                        {move || draft.with(RatingDraft::submit_label)}
                    </Button>
                </div>
            </div>
        </div>
    }
}
