use super::*;

#[test]
fn all_filter_lists_every_project() {
    assert_eq!(projects_matching(ProjectFilter::All).count(), PROJECTS.len());
}

#[test]
fn category_filter_keeps_table_order() {
    let titles: Vec<&str> = projects_matching(ProjectFilter::Only(ProjectCategory::Mobile))
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["MultiGame Platform", "iTeamHub"]);
}

#[test]
fn every_filter_chip_matches_at_least_one_project() {
    for (filter, label, _) in PROJECT_FILTERS {
        assert!(projects_matching(*filter).next().is_some(), "empty filter {label}");
    }
}

#[test]
fn quest_label_splits_at_difficulty_three() {
    let mut project = PROJECTS[0];
    project.difficulty = 3;
    assert_eq!(project.quest_label(), "SIDE QUEST");
    project.difficulty = 4;
    assert_eq!(project.quest_label(), "MAIN QUEST");
}

#[test]
fn difficulty_stars_repeat_per_level() {
    let mut project = PROJECTS[0];
    project.difficulty = 2;
    assert_eq!(project.difficulty_stars(), "⭐⭐");
}

#[test]
fn headline_features_caps_at_three() {
    let project = PROJECTS[0];
    assert_eq!(project.features.len(), 4);
    assert_eq!(project.headline_features().len(), 3);
}

#[test]
fn project_icon_uses_primary_category() {
    assert_eq!(PROJECTS[0].icon(), "🎮");
    let mut project = PROJECTS[0];
    project.categories = &[];
    assert_eq!(project.icon(), "💻");
}

#[test]
fn skill_tier_boundaries() {
    assert_eq!(SkillTier::for_level(100), SkillTier::Strong);
    assert_eq!(SkillTier::for_level(80), SkillTier::Strong);
    assert_eq!(SkillTier::for_level(79), SkillTier::Solid);
    assert_eq!(SkillTier::for_level(70), SkillTier::Solid);
    assert_eq!(SkillTier::for_level(69), SkillTier::Learning);
}

#[test]
fn skill_bar_style_caps_width() {
    assert_eq!(skill_bar_style(75), "width: 75%; background-color: var(--accent);");
    assert!(skill_bar_style(150).starts_with("width: 100%;"));
}

#[test]
fn skill_levels_are_percentages() {
    for category in SKILL_CATEGORIES {
        for skill in category.skills {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
    }
}

#[test]
fn nav_links_point_at_anchors() {
    assert!(NAV_LINKS.iter().all(|(_, href)| href.starts_with('#')));
}

#[test]
fn loading_fact_covers_the_table_and_clamps() {
    assert_eq!(loading_fact(0.0), LOADING_FACTS[0]);
    assert_eq!(loading_fact(0.999), LOADING_FACTS[LOADING_FACTS.len() - 1]);
    assert_eq!(loading_fact(1.0), LOADING_FACTS[LOADING_FACTS.len() - 1]);
    assert_eq!(loading_fact(-3.0), LOADING_FACTS[0]);
    assert_eq!(loading_fact(f64::NAN), LOADING_FACTS[0]);
}
