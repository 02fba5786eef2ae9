//! Landing hero with the call-to-action buttons.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::content::{HERO_BLURB, HERO_TAGLINE, PROFILE_NAME};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container hero__inner">
                <h1 class="hero__title">{PROFILE_NAME}</h1>
                <p class="hero__tagline">{HERO_TAGLINE}</p>
                <p class="hero__blurb">{HERO_BLURB}</p>
                <div class="hero__actions">
                    <a href="#projects">
                        <Button size=ButtonSize::Lg>"⚔️ View Quests"</Button>
                    </a>
                    <a href="#contact">
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Lg>
                            "📜 Send Message"
                        </Button>
                    </a>
                </div>
            </div>
        </section>
    }
}
