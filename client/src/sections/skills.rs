//! Skill bars grouped by category; one category is expanded at a time.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::reveal::Reveal;
use crate::content::{SKILL_CATEGORIES, SkillCategory, skill_bar_style};

/// Clicking the open category closes it; clicking another switches to it.
#[must_use]
pub fn next_expanded(current: Option<&'static str>, clicked: &'static str) -> Option<&'static str> {
    if current == Some(clicked) { None } else { Some(clicked) }
}

#[component]
pub fn Skills() -> impl IntoView {
    let expanded = RwSignal::new(SKILL_CATEGORIES.first().map(|c| c.id));

    view! {
        <section id="skills" class="section">
            <div class="container">
                <Reveal class="section__header">
                    <h2 class="section__title">"SKILL TREE"</h2>
                </Reveal>
                <div class="skills__grid">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <SkillPanel category=*category expanded=expanded/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillPanel(category: SkillCategory, expanded: RwSignal<Option<&'static str>>) -> impl IntoView {
    let id = category.id;
    let is_open = move || expanded.get() == Some(id);

    view! {
        <Reveal>
            <Card class="skills__panel">
                <button
                    type="button"
                    class="skills__header"
                    on:click=move |_| expanded.update(|cur| *cur = next_expanded(*cur, id))
                >
                    <span class="skills__icon">{category.icon}</span>
                    <h3>{category.name}</h3>
                    <span class="skills__chevron">{move || if is_open() { "▾" } else { "▸" }}</span>
                </button>
                <Show when=is_open>
                    <ul class="skills__list">
                        {category
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <li class="skill">
                                        <div class="skill__row">
                                            <span>{skill.name}</span>
                                            <span class="muted">{format!("{}% · {}", skill.level, skill.experience)}</span>
                                        </div>
                                        <div class="skill__track">
                                            <div class="skill__bar" style=skill_bar_style(skill.level)></div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </Card>
        </Reveal>
    }
}
