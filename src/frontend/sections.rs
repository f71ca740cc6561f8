use super::dom::{
    document_height, scroll_to_anchor, scroll_y, section_bounds, viewport_height, WindowInput,
};
use super::profile::InteractiveProfile;
use super::widgets::{Reveal, SkillBar, SparkleButton, StatCard, TypingAnimation};
use crate::config::SiteConfig;
use crate::content::{
    SparkleVariant, CONTACT_EMAIL, HERO_PITCH, HERO_ROLES, OWNER_NAME, OWNER_TITLE, PROJECTS,
    SKILLS, STATS, TECHNOLOGIES, TYPING_BASE_TEXT, TYPING_SUFFIX,
};
use crate::input::{InputEvent, InputKind, InputSource};
use crate::nav::{
    active_section, is_scrolled, scroll_progress, NavAction, NavItem, NavState, NAV_ITEMS,
};
use crate::theme::Theme;
use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn read_scroll_state() -> NavAction {
    let bounds: Vec<(&str, _)> = NAV_ITEMS
        .iter()
        .filter_map(|item| {
            let id = item.section_id();
            section_bounds(id).map(|bounds| (id, bounds))
        })
        .collect();

    NavAction::Scrolled {
        scrolled: is_scrolled(scroll_y()),
        active: active_section(bounds).map(str::to_string),
    }
}

fn nav_link_click(item: NavItem, nav: UseReducerDispatcher<NavState>) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        scroll_to_anchor(item.href);
        nav.dispatch(NavAction::Navigated(item.section_id().to_string()));
    })
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let nav = use_reducer(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(read_scroll_state());
            let subscription = WindowInput.listen(
                InputKind::Scroll,
                Rc::new(move |_: InputEvent| dispatcher.dispatch(read_scroll_state())),
            );
            move || drop(subscription)
        });
    }

    let on_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let on_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let active = nav.is_active(item);
            html! {
                <li>
                    <a
                        href={item.href}
                        class={classes!("nav-link", active.then_some("is-active"))}
                        aria-current={active.then_some("page")}
                        onclick={nav_link_click(*item, nav.dispatcher())}
                    >
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <nav
            class={classes!("site-nav", nav.scrolled.then_some("is-scrolled"))}
            aria-label="Primary"
        >
            <div class="nav-inner">
                <a
                    class="nav-brand"
                    href="#home"
                    onclick={nav_link_click(NAV_ITEMS[0], nav.dispatcher())}
                >
                    {OWNER_NAME}
                </a>
                <ul class={classes!("nav-links", nav.menu_open.then_some("is-open"))}>
                    {links}
                </ul>
                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.pressed().to_string()}
                        onclick={on_theme}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label="Toggle menu"
                        aria-expanded={nav.menu_open.to_string()}
                        onclick={on_menu}
                    >
                        <span aria-hidden="true">{if nav.menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
            </div>
        </nav>
    }
}

fn read_scroll_progress() -> f64 {
    scroll_progress(scroll_y(), document_height(), viewport_height())
}

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            progress.set(read_scroll_progress());
            let update = Rc::new(move |_: InputEvent| progress.set(read_scroll_progress()));
            let subscriptions = [
                WindowInput.listen(InputKind::Scroll, update.clone()),
                WindowInput.listen(InputKind::Resize, update),
            ];
            move || drop(subscriptions)
        });
    }

    let percent = *progress * 100.0;

    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-label="Page scroll progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{percent:.0}")}
        >
            <div class="scroll-progress-fill" style={format!("width: {percent:.2}%;")}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let config = &props.config;
    let roles: Vec<AttrValue> = HERO_ROLES.iter().copied().map(AttrValue::Static).collect();
    let image_url = config.profile.image_url.clone().map(AttrValue::from);

    html! {
        <section id="home" class="hero">
            <div class="hero-inner">
                <InteractiveProfile
                    image_url={image_url}
                    size={config.profile.size_px}
                    tilt={config.tilt}
                    tilt_spring={config.tilt_spring}
                    glow_spring={config.glow_spring}
                    class={classes!("hero-avatar")}
                />
                <h1 class="hero-name">{OWNER_NAME}</h1>
                <p class="hero-title">{OWNER_TITLE}</p>
                <p class="hero-typing">
                    <TypingAnimation
                        base_text={TYPING_BASE_TEXT}
                        roles={roles}
                        suffix={TYPING_SUFFIX}
                        config={config.typing}
                    />
                </p>
                <p class="hero-pitch">{HERO_PITCH}</p>
                <div class="hero-actions">
                    <SparkleButton variant={SparkleVariant::Primary} href="#portfolio">
                        {"View My Work"}
                    </SparkleButton>
                    <SparkleButton variant={SparkleVariant::Secondary} href="#contact">
                        {"Get In Touch"}
                    </SparkleButton>
                </div>
            </div>
            <a
                class="scroll-indicator"
                href="#about"
                aria-label="Scroll to About"
                onclick={Callback::from(|event: MouseEvent| {
                    event.prevent_default();
                    scroll_to_anchor("#about");
                })}
            >
                <span aria-hidden="true">{"↓"}</span>
            </a>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub counter_duration_ms: f64,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let stats = STATS
        .iter()
        .map(|stat| {
            html! {
                <StatCard
                    target={stat.target}
                    label={stat.label}
                    duration_ms={props.counter_duration_ms}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section id="about" class="section-block" aria-labelledby="about-heading">
            <Reveal>
                <h2 id="about-heading">{"About Me"}</h2>
                <p>
                    {"I build data-driven products end to end: from the pipelines and models underneath to the interfaces people actually touch."}
                </p>
                <p class="muted">
                    {"Most days that means Python and SQL on the back end, a modern web stack on the front, and a habit of measuring before optimizing."}
                </p>
            </Reveal>
            <div class="stats-grid">{stats}</div>
        </section>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let cards = PROJECTS
        .iter()
        .map(|project| {
            let tags = project
                .technologies
                .iter()
                .map(|tech| html! { <li class="tech-tag">{*tech}</li> })
                .collect::<Html>();

            html! {
                <Reveal class={classes!("portfolio-card")}>
                    <div
                        class="portfolio-card-media"
                        style={format!("background: {};", project.gradient)}
                        aria-hidden="true"
                    >
                        <i class={project.icon}></i>
                    </div>
                    <div class="portfolio-card-body">
                        <h3>{project.title}</h3>
                        <p class="muted">{project.description}</p>
                        <ul class="tech-tags">{tags}</ul>
                        <div class="portfolio-card-links">
                            <a class="link" href={project.demo_url} target="_blank" rel="noopener noreferrer">
                                {"Live Demo"}
                                <span class="sr-only">{format!(" of {} (opens in a new tab)", project.title)}</span>
                            </a>
                            <a class="link" href={project.code_url} target="_blank" rel="noopener noreferrer">
                                {"Code"}
                                <span class="sr-only">{format!(" for {} (opens in a new tab)", project.title)}</span>
                            </a>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect::<Html>();

    html! {
        <section id="portfolio" class="section-block" aria-labelledby="portfolio-heading">
            <Reveal>
                <h2 id="portfolio-heading">{"Portfolio"}</h2>
                <p class="muted">{"A few things I have built recently."}</p>
            </Reveal>
            <div class="portfolio-grid">{cards}</div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let bars = SKILLS
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            html! { <SkillBar name={skill.name} percentage={skill.percentage} index={index} /> }
        })
        .collect::<Html>();

    let tiles = TECHNOLOGIES
        .iter()
        .map(|tech| {
            html! {
                <li class="tech-tile">
                    <i class={tech.icon} style={format!("color: {};", tech.color)} aria-hidden="true"></i>
                    <span>{tech.name}</span>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <section id="skills" class="section-block" aria-labelledby="skills-heading">
            <Reveal>
                <h2 id="skills-heading">{"Skills"}</h2>
            </Reveal>
            <div class="skills-layout">
                <div class="skill-bars">{bars}</div>
                <Reveal>
                    <ul class="tech-grid">{tiles}</ul>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="section-block" aria-labelledby="contact-heading">
            <Reveal class={classes!("contact-card")}>
                <h2 id="contact-heading">{"Let's Work Together"}</h2>
                <p class="muted">
                    {"Have a project in mind or just want to say hello? My inbox is open."}
                </p>
                <div class="contact-actions">
                    <SparkleButton variant={SparkleVariant::Success} href={format!("mailto:{CONTACT_EMAIL}")}>
                        {"Say Hello"}
                    </SparkleButton>
                    <SparkleButton variant={SparkleVariant::Plain} href="#home">
                        {"Back to Top"}
                    </SparkleButton>
                </div>
                <p class="contact-email">
                    <a class="link" href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                </p>
            </Reveal>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let href = item.href;
            html! {
                <li>
                    <a
                        class="link"
                        href={href}
                        onclick={Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            scroll_to_anchor(href);
                        })}
                    >
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <footer class="site-footer">
            <ul class="footer-links">{links}</ul>
            <p class="muted">{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
        </footer>
    }
}
