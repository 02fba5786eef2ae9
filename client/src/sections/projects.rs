//! Project grid with category filter chips.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::reveal::Reveal;
use crate::content::{PROJECT_FILTERS, Project, ProjectFilter, projects_matching};

fn chip_class(active: bool) -> &'static str {
    if active { "filter-chip filter-chip--active" } else { "filter-chip" }
}

#[component]
pub fn Projects() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::All);

    view! {
        <section id="projects" class="section section--alt">
            <div class="container">
                <Reveal class="section__header">
                    <h2 class="section__title">"QUEST LOG"</h2>
                </Reveal>
                <div class="filter-chips">
                    {PROJECT_FILTERS
                        .iter()
                        .map(|(chip, label, icon)| {
                            let chip = *chip;
                            view! {
                                <button
                                    type="button"
                                    class=move || chip_class(filter.get() == chip)
                                    on:click=move |_| filter.set(chip)
                                >
                                    <span>{*icon}</span>
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="projects__grid">
                    {move || {
                        projects_matching(filter.get())
                            .map(|project| view! { <ProjectCard project=*project/> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let demo = project.demo_url.map(|url| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer">
                <Button size=ButtonSize::Sm>"🎮 Demo"</Button>
            </a>
        }
    });
    let code = project.github_url.map(|url| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer">
                <Button size=ButtonSize::Sm variant=ButtonVariant::Secondary>"💻 Code"</Button>
            </a>
        }
    });

    view! {
        <Reveal>
            <Card hover=true class="project-card">
                <div class="project-card__preview">{project.icon()}</div>
                <div class="project-card__meta">
                    <span class="project-card__badge">{project.quest_label()}</span>
                    <span class="project-card__stars">{project.difficulty_stars()}</span>
                </div>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <ul class="project-card__features">
                    {project
                        .headline_features()
                        .iter()
                        .map(|feature| view! { <li>"▸ "{*feature}</li> })
                        .collect_view()}
                </ul>
                <div class="project-card__stack">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                        .collect_view()}
                </div>
                <div class="project-card__actions">{demo}{code}</div>
            </Card>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_class_marks_active_filter() {
        assert_eq!(chip_class(false), "filter-chip");
        assert_eq!(chip_class(true), "filter-chip filter-chip--active");
    }
}
