mod dom;
mod profile;
mod sections;
mod widgets;

pub use profile::InteractiveProfile;

use crate::config::{SiteConfig, EMBEDDED_SITE_CONFIG};
use crate::logging::{self, log_event};
use crate::theme::{Theme, THEME_KEY};
use dom::{document, local_storage, media_matches, prefers_reduced_motion};
use js_sys::{Function, Reflect};
use log::Level;
use sections::{About, Contact, Footer, Hero, Navigation, Portfolio, ScrollProgress, Skills};
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use yew::prelude::*;

fn read_stored_theme() -> Option<String> {
    local_storage()?.get_item(THEME_KEY).ok().flatten()
}

fn resolve_theme() -> Theme {
    Theme::resolve(
        read_stored_theme().as_deref(),
        media_matches("(prefers-color-scheme: dark)"),
    )
}

fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let theme = use_state(resolve_theme);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme_with_transition(next);
            log_event(Level::Debug, "theme_changed", json!({ "theme": next.as_str() }));
            theme.set(next);
        })
    };

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <ScrollProgress />
            <Navigation theme={*theme} on_toggle_theme={on_toggle_theme} />
            <main id="content">
                <Hero config={props.config.clone()} />
                <About counter_duration_ms={props.config.counter_duration_ms} />
                <Portfolio />
                <Skills />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

pub fn run() {
    let (config, parse_error) = match SiteConfig::from_json(EMBEDDED_SITE_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err.to_string())),
    };

    logging::init(config.log_level);

    if let Some(error) = parse_error {
        log_event(
            Level::Warn,
            "site_config_invalid",
            json!({ "error": error, "fallback": "defaults" }),
        );
    }

    log_event(
        Level::Info,
        "site_starting",
        json!({
            "logLevel": config.log_level.to_string(),
            "maxDistance": config.tilt.max_distance,
            "maxRotation": config.tilt.max_rotation,
            "resetOnLeave": config.tilt.reset_on_leave,
            "reducedMotion": prefers_reduced_motion(),
        }),
    );

    let root = document()
        .and_then(|doc| doc.get_element_by_id("app"))
        .expect("missing #app mount point");

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
