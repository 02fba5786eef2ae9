//! Static portfolio content rendered by the page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has no backing store; every section reads these tables. Small
//! pure helpers (filters, star strings, skill tiers) live here so the
//! sections stay declarative and the logic is testable without a DOM.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Gaming,
    Enterprise,
    Ai,
    Mobile,
    Web,
}

impl ProjectCategory {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Gaming => "🎮",
            Self::Enterprise => "💼",
            Self::Ai => "🤖",
            Self::Mobile => "📱",
            Self::Web => "🌐",
        }
    }
}

/// Filter chips above the project grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.categories.contains(&category),
        }
    }
}

pub const PROJECT_FILTERS: &[(ProjectFilter, &str, &str)] = &[
    (ProjectFilter::All, "All Quests", "⚔️"),
    (ProjectFilter::Only(ProjectCategory::Mobile), "Mobile", "📱"),
    (ProjectFilter::Only(ProjectCategory::Web), "Web", "🌐"),
    (ProjectFilter::Only(ProjectCategory::Gaming), "Gaming", "🎮"),
    (ProjectFilter::Only(ProjectCategory::Enterprise), "Enterprise", "💼"),
    (ProjectFilter::Only(ProjectCategory::Ai), "AI/ML", "🤖"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub categories: &'static [ProjectCategory],
    pub difficulty: u8,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

impl Project {
    /// Icon of the primary category, shown as the card preview.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.categories.first().map_or("💻", |c| c.icon())
    }

    #[must_use]
    pub fn quest_label(&self) -> &'static str {
        if self.difficulty <= 3 { "SIDE QUEST" } else { "MAIN QUEST" }
    }

    #[must_use]
    pub fn difficulty_stars(&self) -> String {
        "⭐".repeat(usize::from(self.difficulty))
    }

    /// Cards show at most three feature bullets.
    #[must_use]
    pub fn headline_features(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(3)]
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "MultiGame Platform",
        categories: &[ProjectCategory::Gaming, ProjectCategory::Mobile],
        difficulty: 5,
        description: "Flutter-based gaming platform featuring multiple mini-games with leaderboards, \
                      achievements, and social features. Built mobile-first with smooth animations \
                      and offline support.",
        features: &["Multiple mini-games", "Global leaderboards", "Achievement system", "Offline play"],
        tech_stack: &["Flutter", "Dart", "Firebase", "Provider"],
        demo_url: None,
        github_url: None,
    },
    Project {
        title: "HelpDesk Pro",
        categories: &[ProjectCategory::Enterprise, ProjectCategory::Web],
        difficulty: 4,
        description: "Enterprise ticketing system with Keycloak authentication, role-based access \
                      control, and real-time notifications. Handles workflow automation and SLA \
                      management.",
        features: &["Keycloak SSO", "Role-based access", "Real-time notifications", "SLA tracking"],
        tech_stack: &["React", "Node.js", "MongoDB", "Keycloak", "Socket.io"],
        demo_url: None,
        github_url: None,
    },
    Project {
        title: "MediGuide AI",
        categories: &[ProjectCategory::Ai, ProjectCategory::Web],
        difficulty: 4,
        description: "AI-powered medical assistant chatbot for symptom analysis and health guidance \
                      with context-aware conversations and a medical knowledge base.",
        features: &["Symptom analysis", "Context-aware chat", "Medical knowledge base"],
        tech_stack: &["Python", "Flask", "Grok API", "React", "NLP"],
        demo_url: None,
        github_url: None,
    },
    Project {
        title: "iTeamHub",
        categories: &[ProjectCategory::Mobile],
        difficulty: 3,
        description: "Social networking app for university students to connect, share resources, \
                      and collaborate on projects, with event management and study groups.",
        features: &["Student profiles", "Resource sharing", "Event management", "Study groups"],
        tech_stack: &["Flutter", "Firebase", "Node.js", "MongoDB"],
        demo_url: None,
        github_url: None,
    },
    Project {
        title: "Co-op Platform",
        categories: &[ProjectCategory::Web],
        difficulty: 2,
        description: "Brand collaboration platform connecting businesses with influencers and \
                      content creators. Streamlines campaign management and performance tracking.",
        features: &["Campaign management", "Creator matching", "Performance tracking"],
        tech_stack: &["React", "Node.js", "Express", "MySQL"],
        demo_url: None,
        github_url: None,
    },
];

/// Projects visible under `filter`, in table order.
pub fn projects_matching(filter: ProjectFilter) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| filter.matches(p))
}

// =============================================================================
// SKILLS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100.
    pub level: u8,
    pub experience: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

/// Bar colour bucket for a skill level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillTier {
    Strong,
    Solid,
    Learning,
}

impl SkillTier {
    #[must_use]
    pub fn for_level(level: u8) -> Self {
        match level {
            80..=u8::MAX => Self::Strong,
            70..=79 => Self::Solid,
            _ => Self::Learning,
        }
    }

    #[must_use]
    pub fn css_var(self) -> &'static str {
        match self {
            Self::Strong => "var(--success)",
            Self::Solid => "var(--accent)",
            Self::Learning => "var(--text-secondary)",
        }
    }
}

/// Inline style for a skill bar; levels above 100 are capped.
#[must_use]
pub fn skill_bar_style(level: u8) -> String {
    let width = level.min(100);
    format!("width: {width}%; background-color: {};", SkillTier::for_level(level).css_var())
}

const fn skill(name: &'static str, level: u8, experience: &'static str) -> Skill {
    Skill { name, level, experience }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "frontend",
        name: "FRONTEND",
        icon: "🎨",
        skills: &[
            skill("React", 90, "5 years"),
            skill("Flutter", 85, "3 years"),
            skill("Tailwind CSS", 85, "1.5 years"),
            skill("HTML/CSS", 100, "8 years"),
            skill("JavaScript", 85, "5 years"),
        ],
    },
    SkillCategory {
        id: "backend",
        name: "BACKEND",
        icon: "⚙️",
        skills: &[
            skill("Node.js", 80, "4 years"),
            skill("Express", 90, "4 years"),
            skill("Python", 75, "1.5 years"),
            skill("Flask", 70, "1.5 years"),
            skill("REST APIs", 85, "5 years"),
        ],
    },
    SkillCategory {
        id: "database",
        name: "DATABASE",
        icon: "🗄️",
        skills: &[
            skill("MongoDB", 80, "4 years"),
            skill("MySQL", 75, "5 years"),
            skill("Firebase", 80, "2 years"),
            skill("PostgreSQL", 70, "1 year"),
        ],
    },
    SkillCategory {
        id: "devops",
        name: "DEVOPS & TOOLS",
        icon: "🚀",
        skills: &[
            skill("Git", 85, "3 years"),
            skill("Docker", 70, "1 year"),
            skill("CI/CD", 70, "1 year"),
            skill("Linux", 75, "2 years"),
            skill("GitHub Actions", 70, "1 year"),
        ],
    },
    SkillCategory {
        id: "security",
        name: "SECURITY",
        icon: "🔐",
        skills: &[
            skill("Keycloak", 75, "1 year"),
            skill("JWT", 80, "4 years"),
            skill("OAuth 2.0", 70, "3 years"),
            skill("RBAC", 75, "4 years"),
        ],
    },
];

// =============================================================================
// ABOUT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trait {
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const TRAITS: &[Trait] = &[
    Trait { icon: "🐛", label: "Bug Hunter", description: "Obsessed with clean code and squashing bugs" },
    Trait { icon: "☕", label: "2am Coder", description: "Peak productivity happens at 2am with espresso" },
    Trait { icon: "🥔", label: "Potato Tester", description: "Tests on low-end hardware for maximum compatibility" },
    Trait { icon: "🎮", label: "Gaming Roots", description: "Gaming since Windows XP, problem-solving in DNA" },
    Trait { icon: "💻", label: "Serial Committer", description: "Commits more often than blinking" },
    Trait { icon: "🚀", label: "Full-Stack", description: "Database to UI, nothing left behind" },
];

pub const PROFILE_NAME: &str = "SALIM MTIRI";
pub const PROFILE_ROLE: &str = "Full-Stack Developer";
pub const PROFILE_FACTS: &[(&str, &str, &str)] = &[
    ("📍", "Tunisia", "Remote Available"),
    ("🎓", "ITEAM University", "Software Engineering"),
    ("💼", "Seeking Internship", "6 months | Feb-Jul 2026"),
];

pub const HERO_TAGLINE: &str = "Full-Stack Developer | Pixel-Perfect Problem Solver";
pub const HERO_BLURB: &str = "Gaming since Windows XP, coding since Pascal. Building complete applications \
                              from database to UI.";

// =============================================================================
// NAVIGATION
// =============================================================================

/// `(label, anchor)` for each page section, in scroll order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Contact", "#contact"),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/"),
    ("LinkedIn", "https://www.linkedin.com/"),
];

// =============================================================================
// LOADING SCREEN
// =============================================================================

/// One is picked at random each time the loading screen mounts.
pub const LOADING_FACTS: &[&str] = &[
    "Fact: Salim tests on potato laptops for maximum compatibility! 🥔",
    "Fact: Peak productivity happens at 2am with espresso ☕",
    "Fact: Bug hunting addict since Pascal days 🐛",
    "Fact: Commits more often than blinking 💻",
    "Fact: Gaming since Windows XP era 🎮",
    "Fact: If it runs on a potato, it runs anywhere!",
    "Fact: Clean code is the only code shipped ✨",
];

/// Maps a uniform sample in `[0, 1)` onto a fact. Out-of-range samples clamp.
#[must_use]
pub fn loading_fact(sample: f64) -> &'static str {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let index = (sample.clamp(0.0, 1.0) * LOADING_FACTS.len() as f64) as usize;
    LOADING_FACTS[index.min(LOADING_FACTS.len() - 1)]
}
