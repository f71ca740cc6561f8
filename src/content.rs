pub const OWNER_NAME: &str = "Alex Chen";
pub const OWNER_TITLE: &str = "Full Stack Developer & UI/UX Designer";
pub const HERO_PITCH: &str =
    "I create beautiful, functional, and user-centered digital experiences that make a difference.";
pub const TYPING_BASE_TEXT: &str = "I'm a";
pub const TYPING_SUFFIX: &str = "engineer";
pub const HERO_ROLES: [&str; 4] = ["full stack", "frontend", "data", "machine learning"];
pub const PROFILE_IMAGE_ALT: &str = "Portrait of Alex Chen";
pub const CONTACT_EMAIL: &str = "hello@alexchen.dev";

pub const SKILL_BAR_STAGGER_MS: u32 = 200;
pub const SPARKLE_FLASH_MS: u32 = 1_200;
pub const SPARKLE_COUNT: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub target: u32,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        target: 50,
        label: "Projects Completed",
    },
    Stat {
        target: 5,
        label: "Years Experience",
    },
    Stat {
        target: 30,
        label: "Happy Clients",
    },
    Stat {
        target: 100,
        label: "Cups of Coffee",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_url: &'static str,
    pub code_url: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with React, Node.js, and Stripe integration.",
        icon: "fas fa-shopping-cart",
        gradient: "linear-gradient(135deg, #60a5fa, #9333ea)",
        technologies: &["React", "Node.js", "MongoDB"],
        demo_url: "#",
        code_url: "#",
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management tool with real-time updates and team features.",
        icon: "fas fa-check-square",
        gradient: "linear-gradient(135deg, #4ade80, #3b82f6)",
        technologies: &["Vue.js", "Firebase", "Tailwind"],
        demo_url: "#",
        code_url: "#",
    },
    Project {
        title: "Analytics Dashboard",
        description: "A comprehensive analytics dashboard with interactive charts and real-time data.",
        icon: "fas fa-chart-bar",
        gradient: "linear-gradient(135deg, #c084fc, #ec4899)",
        technologies: &["React", "D3.js", "Python"],
        demo_url: "#",
        code_url: "#",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
}

pub const SKILLS: [Skill; 5] = [
    Skill {
        name: "Data Science & Analysis",
        percentage: 92,
    },
    Skill {
        name: "Python / Machine Learning",
        percentage: 90,
    },
    Skill {
        name: "SQL / Database Management",
        percentage: 88,
    },
    Skill {
        name: "Web Development",
        percentage: 85,
    },
    Skill {
        name: "Power BI / Data Visualization",
        percentage: 80,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const TECHNOLOGIES: [Technology; 8] = [
    Technology {
        name: "Python",
        icon: "fab fa-python",
        color: "#2563eb",
    },
    Technology {
        name: "Database",
        icon: "fas fa-database",
        color: "#3b82f6",
    },
    Technology {
        name: "Power BI / Tableau",
        icon: "fas fa-chart-bar",
        color: "#eab308",
    },
    Technology {
        name: "Machine Learning",
        icon: "fas fa-brain",
        color: "#9333ea",
    },
    Technology {
        name: "Data Analysis",
        icon: "fas fa-chart-line",
        color: "#22c55e",
    },
    Technology {
        name: "AI/ML",
        icon: "fas fa-robot",
        color: "#ef4444",
    },
    Technology {
        name: "Web Development",
        icon: "fas fa-code",
        color: "#f97316",
    },
    Technology {
        name: "Data Science",
        icon: "fas fa-microscope",
        color: "#4f46e5",
    },
];

pub fn skill_bar_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(SKILL_BAR_STAGGER_MS)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SparkleVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Purple,
    Orange,
    Blue,
    Plain,
}

impl SparkleVariant {
    pub fn gradient(self) -> Option<&'static str> {
        match self {
            Self::Primary => Some("linear-gradient(45deg, #ff6b6b, #feca57, #48dbfb, #ff9ff3)"),
            Self::Secondary => Some("linear-gradient(45deg, #667eea, #764ba2, #667eea)"),
            Self::Success => Some("linear-gradient(45deg, #56ab2f, #a8e6cf, #4ecdc4)"),
            Self::Purple => Some("linear-gradient(45deg, #8360c3, #2ebf91, #8360c3)"),
            Self::Orange => Some("linear-gradient(45deg, #ff9a9e, #fecfef, #fecfef)"),
            Self::Blue => Some("linear-gradient(45deg, #a8edea, #fed6e3, #a8edea)"),
            Self::Plain => None,
        }
    }

    pub fn sparkle_count(self) -> usize {
        match self {
            Self::Plain => 0,
            _ => SPARKLE_COUNT,
        }
    }
}
