use super::dom::{element_center, prefers_reduced_motion, AnimationFrames, WindowInput};
use crate::animation::SpringAnimator;
use crate::content::PROFILE_IMAGE_ALT;
use crate::logging::log_event;
use crate::profile::{
    avatar_style, tilt_channels, tilt_from_channels, tilt_targets, track, AvatarFace, GlowStyle,
    TrackingSession, DEFAULT_AVATAR_SIZE_PX,
};
use crate::spring::SpringConfig;
use crate::tilt::{TiltConfig, TiltVector};
use log::Level;
use serde_json::json;
use std::rc::Rc;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InteractiveProfileProps {
    #[prop_or_default]
    pub image_url: Option<AttrValue>,
    #[prop_or(DEFAULT_AVATAR_SIZE_PX)]
    pub size: u32,
    #[prop_or(AttrValue::Static(PROFILE_IMAGE_ALT))]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub tilt: TiltConfig,
    #[prop_or(SpringConfig::TILT)]
    pub tilt_spring: SpringConfig,
    #[prop_or(SpringConfig::GLOW)]
    pub glow_spring: SpringConfig,
}

struct ProfileMotion {
    _session: TrackingSession,
    _tilt: Rc<SpringAnimator<AnimationFrames>>,
    _glow: Rc<SpringAnimator<AnimationFrames>>,
}

fn start_motion(
    container: NodeRef,
    layer: NodeRef,
    glow: NodeRef,
    tilt: TiltConfig,
    tilt_spring: SpringConfig,
    glow_spring: SpringConfig,
) -> ProfileMotion {
    let tilt_animator = Rc::new(SpringAnimator::new(
        AnimationFrames,
        &tilt_channels(tilt_spring),
        move |values: &[f64]| {
            if let Some(layer) = layer.cast::<HtmlElement>() {
                let transform = tilt_from_channels(values, 1.0).css_transform();
                let _ = layer.style().set_property("transform", &transform);
            }
        },
    ));

    let glow_animator = Rc::new(SpringAnimator::new(
        AnimationFrames,
        &GlowStyle::channels(glow_spring),
        move |values: &[f64]| {
            if let Some(glow) = glow.cast::<Element>() {
                let _ = glow.set_attribute("style", &GlowStyle::css(values));
            }
        },
    ));

    let measure = move || {
        container
            .cast::<Element>()
            .and_then(|element| element_center(&element))
    };

    let session = track(&WindowInput, measure, tilt, {
        let tilt_animator = tilt_animator.clone();
        let glow_animator = glow_animator.clone();
        move |vector: TiltVector| {
            tilt_animator.retarget(&tilt_targets(&vector));
            glow_animator.retarget(&GlowStyle::for_intensity(vector.intensity).targets());
        }
    });

    ProfileMotion {
        _session: session,
        _tilt: tilt_animator,
        _glow: glow_animator,
    }
}

#[function_component(InteractiveProfile)]
pub fn interactive_profile(props: &InteractiveProfileProps) -> Html {
    let container = use_node_ref();
    let layer = use_node_ref();
    let glow = use_node_ref();
    let image_failed = use_state(|| false);

    {
        let container = container.clone();
        let layer = layer.clone();
        let glow = glow.clone();
        use_effect_with(
            (props.tilt, props.tilt_spring, props.glow_spring),
            move |(tilt, tilt_spring, glow_spring)| {
                let motion = (!prefers_reduced_motion()).then(|| {
                    start_motion(container, layer, glow, *tilt, *tilt_spring, *glow_spring)
                });
                move || drop(motion)
            },
        );
    }

    {
        let image_failed = image_failed.clone();
        use_effect_with(props.image_url.clone(), move |_| {
            image_failed.set(false);
            || ()
        });
    }

    let onerror = {
        let image_failed = image_failed.clone();
        let src = props.image_url.clone();
        Callback::from(move |_event: Event| {
            log_event(
                Level::Warn,
                "avatar_image_failed",
                json!({ "src": src.as_deref() }),
            );
            image_failed.set(true);
        })
    };

    let face = match AvatarFace::resolve(props.image_url.as_deref(), *image_failed) {
        AvatarFace::Image(src) => html! {
            <img
                class="profile-image"
                src={src}
                alt={props.alt.clone()}
                draggable="false"
                onerror={onerror}
            />
        },
        AvatarFace::Placeholder => html! {
            <div class="profile-placeholder" role="img" aria-label={props.alt.clone()}>
                <svg viewBox="0 0 24 24" aria-hidden="true">
                    <circle cx="12" cy="8" r="4" />
                    <path d="M4 21c0-4.4 3.6-8 8-8s8 3.6 8 8" />
                </svg>
            </div>
        },
    };

    html! {
        <div
            ref={container}
            class={classes!("interactive-profile", props.class.clone())}
            style={avatar_style(props.size)}
        >
            <div ref={glow} class="profile-glow" aria-hidden="true"></div>
            <div ref={layer} class="profile-tilt">
                <div class="profile-disc">
                    {face}
                </div>
                <div class="profile-ring" aria-hidden="true"></div>
            </div>
        </div>
    }
}
