//! Profile card and trait grid.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::reveal::Reveal;
use crate::content::{PROFILE_FACTS, PROFILE_NAME, PROFILE_ROLE, TRAITS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container">
                <Reveal class="section__header">
                    <h2 class="section__title">"ABOUT ME"</h2>
                </Reveal>
                <div class="about__grid">
                    <Reveal>
                        <Card class="about__profile">
                            <div class="about__avatar">"👨‍💻"</div>
                            <h3>{PROFILE_NAME}</h3>
                            <p class="about__role">{PROFILE_ROLE}</p>
                            <ul class="about__facts">
                                {PROFILE_FACTS
                                    .iter()
                                    .map(|(icon, primary, secondary)| {
                                        view! {
                                            <li>
                                                <span>{*icon}</span>
                                                <div>
                                                    <p>{*primary}</p>
                                                    <p class="muted">{*secondary}</p>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Card>
                    </Reveal>
                    <div class="about__traits">
                        {TRAITS
                            .iter()
                            .map(|t| {
                                view! {
                                    <Reveal threshold=0.2>
                                        <Card hover=true>
                                            <span class="about__trait-icon">{t.icon}</span>
                                            <h4>{t.label}</h4>
                                            <p class="muted">{t.description}</p>
                                        </Card>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
