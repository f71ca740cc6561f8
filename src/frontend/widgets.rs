use super::dom::{observe_reveal, prefers_reduced_motion, scroll_to_anchor};
use crate::content::{skill_bar_delay_ms, SparkleVariant, SPARKLE_FLASH_MS};
use crate::counter::CountUp;
use crate::typing::{Typewriter, TypingConfig};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let observer = node.cast::<Element>().and_then(|element| {
                let on_visible = {
                    let visible = visible.clone();
                    move || visible.set(true)
                };
                let observer = observe_reveal(&element, on_visible);
                if observer.is_none() {
                    visible.set(true);
                }
                observer
            });
            move || drop(observer)
        });
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("is-visible"), props.class.clone())}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TypingAnimationProps {
    pub base_text: AttrValue,
    pub roles: Vec<AttrValue>,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub config: TypingConfig,
}

type TimeoutSlot = RefCell<Option<Timeout>>;

fn schedule_typing(
    delay: u32,
    writer: Rc<RefCell<Typewriter>>,
    slot: Weak<TimeoutSlot>,
    text: UseStateHandle<String>,
) {
    let Some(owner) = slot.upgrade() else {
        return;
    };

    let timeout = Timeout::new(delay, move || {
        let next = writer.borrow_mut().advance();
        text.set(writer.borrow().text().to_string());
        if let Some(delay) = next {
            schedule_typing(delay, writer, slot, text);
        }
    });
    *owner.borrow_mut() = Some(timeout);
}

#[function_component(TypingAnimation)]
pub fn typing_animation(props: &TypingAnimationProps) -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with((props.roles.clone(), props.config), move |(roles, config)| {
            let roles = roles.iter().map(|role| role.as_str().to_string()).collect();
            let writer = Typewriter::new(roles, *config);
            let slot: Rc<TimeoutSlot> = Rc::new(RefCell::new(None));

            text.set(writer.text().to_string());
            if let Some(delay) = writer.initial_delay() {
                schedule_typing(
                    delay,
                    Rc::new(RefCell::new(writer)),
                    Rc::downgrade(&slot),
                    text,
                );
            }

            move || drop(slot)
        });
    }

    if props.roles.is_empty() {
        return html! { <span class="typing">{props.base_text.clone()}</span> };
    }

    html! {
        <span class="typing">
            {props.base_text.clone()}{" "}
            <span class="typing-role">{(*text).clone()}</span>
            <span class="typing-cursor" aria-hidden="true">{"|"}</span>
            {" "}{props.suffix.clone()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub target: u32,
    pub label: AttrValue,
    pub duration_ms: f64,
}

type FrameSlot = RefCell<Option<AnimationFrame>>;

fn schedule_count(count: Rc<RefCell<CountUp>>, slot: Weak<FrameSlot>, value: UseStateHandle<u32>) {
    let Some(owner) = slot.upgrade() else {
        return;
    };

    let frame = request_animation_frame(move |timestamp| {
        let sample = count.borrow_mut().sample(timestamp);
        value.set(sample.value);
        if !sample.finished {
            schedule_count(count, slot, value);
        }
    });
    *owner.borrow_mut() = Some(frame);
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let value = use_state(|| 0_u32);

    {
        let value = value.clone();
        use_effect_with(
            (visible, props.target, props.duration_ms.to_bits()),
            move |(visible, target, duration_bits)| {
                let slot: Rc<FrameSlot> = Rc::new(RefCell::new(None));
                if *visible {
                    if prefers_reduced_motion() {
                        value.set(*target);
                    } else {
                        let count = CountUp::new(*target, f64::from_bits(*duration_bits));
                        schedule_count(Rc::new(RefCell::new(count)), Rc::downgrade(&slot), value);
                    }
                }
                move || drop(slot)
            },
        );
    }

    html! {
        <div ref={node} class={classes!("stat-card", visible.then_some("is-visible"))}>
            <span class="stat-value">{format!("{}+", *value)}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillBarProps {
    pub name: AttrValue,
    pub percentage: u8,
    pub index: usize,
}

#[function_component(SkillBar)]
pub fn skill_bar(props: &SkillBarProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let filled = use_state(|| false);

    {
        let filled = filled.clone();
        use_effect_with((visible, props.index), move |(visible, index)| {
            let timeout = visible.then(|| {
                Timeout::new(skill_bar_delay_ms(*index), move || filled.set(true))
            });
            move || drop(timeout)
        });
    }

    let width = if *filled { props.percentage.min(100) } else { 0 };

    html! {
        <div ref={node} class="skill-bar">
            <div class="skill-bar-header">
                <span>{props.name.clone()}</span>
                <span class="muted">{format!("{}%", props.percentage)}</span>
            </div>
            <div
                class="skill-bar-track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={props.percentage.to_string()}
            >
                <div class="skill-bar-fill" style={format!("width: {width}%;")}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SparkleButtonProps {
    #[prop_or_default]
    pub variant: SparkleVariant,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SparkleButton)]
pub fn sparkle_button(props: &SparkleButtonProps) -> Html {
    let clicked = use_state(|| false);
    let flash = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let clicked = clicked.clone();
        let flash = flash.clone();
        let href = props.href.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(anchor) = href.as_deref().filter(|href| href.starts_with('#')) {
                event.prevent_default();
                scroll_to_anchor(anchor);
            }

            clicked.set(true);
            let reset = {
                let clicked = clicked.clone();
                Timeout::new(SPARKLE_FLASH_MS, move || clicked.set(false))
            };
            *flash.borrow_mut() = Some(reset);

            onclick.emit(event);
        })
    };

    let style = props
        .variant
        .gradient()
        .map(|gradient| format!("--sparkle-gradient: {gradient};"));
    let class = classes!(
        "sparkle-button",
        props.variant.gradient().is_none().then_some("is-plain"),
        clicked.then_some("clicked"),
        props.class.clone()
    );
    let sparkles = (0..props.variant.sparkle_count())
        .map(|index| {
            html! {
                <span
                    class="sparkle"
                    style={format!("--sparkle-index: {index};")}
                    aria-hidden="true"
                ></span>
            }
        })
        .collect::<Html>();
    let label = html! { <span class="sparkle-label">{props.children.clone()}</span> };

    match props.href.clone() {
        Some(href) => html! {
            <a class={class} style={style} href={href} onclick={onclick}>
                {label}
                {sparkles}
            </a>
        },
        None => html! {
            <button class={class} style={style} type="button" onclick={onclick}>
                {label}
                {sparkles}
            </button>
        },
    }
}
