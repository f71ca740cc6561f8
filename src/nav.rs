use crate::geometry::Bounds;

pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Viewport line a section must cross to count as active.
pub const ACTIVE_LINE_Y: f64 = 100.0;
pub const DEFAULT_SECTION: &str = "home";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        href: "#home",
        label: "Home",
    },
    NavItem {
        href: "#about",
        label: "About",
    },
    NavItem {
        href: "#portfolio",
        label: "Portfolio",
    },
    NavItem {
        href: "#skills",
        label: "Skills",
    },
    NavItem {
        href: "#contact",
        label: "Contact",
    },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

pub fn active_section<'a, I>(sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Bounds)>,
{
    sections
        .into_iter()
        .find(|(_, bounds)| bounds.spans_y(ACTIVE_LINE_Y))
        .map(|(id, _)| id)
}

pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Scrolled {
        scrolled: bool,
        active: Option<String>,
    },
    ToggleMenu,
    Navigated(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active: String,
    pub scrolled: bool,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION.to_string(),
            scrolled: false,
            menu_open: false,
        }
    }
}

impl NavState {
    pub fn apply(&self, action: NavAction) -> Self {
        let mut next = self.clone();
        match action {
            NavAction::Scrolled { scrolled, active } => {
                next.scrolled = scrolled;
                if let Some(active) = active {
                    next.active = active;
                }
            }
            NavAction::ToggleMenu => next.menu_open = !next.menu_open,
            NavAction::Navigated(_) => next.menu_open = false,
        }
        next
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        self.active == item.section_id()
    }
}
