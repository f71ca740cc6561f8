use crate::animation::FrameScheduler;
use crate::geometry::{Bounds, Point};
use crate::input::{InputEvent, InputHandler, InputKind, InputSource, Subscription};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, Storage,
};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "-50px 0px";
const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

/// Window-level input: `mousemove`, `scroll`, `resize`, and for pointer-leave
/// both `mouseleave` on the root element and window `blur`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowInput;

impl InputSource for WindowInput {
    fn listen(&self, kind: InputKind, handler: InputHandler) -> Subscription {
        let Some(win) = window() else {
            return Subscription::empty();
        };

        match kind {
            InputKind::PointerMove => Subscription::holding(EventListener::new(
                &win,
                "mousemove",
                move |event: &Event| {
                    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                        handler(InputEvent::PointerMove(Point::new(
                            f64::from(mouse.client_x()),
                            f64::from(mouse.client_y()),
                        )));
                    }
                },
            )),
            InputKind::Scroll => Subscription::holding(EventListener::new(
                &win,
                "scroll",
                move |_event: &Event| handler(InputEvent::Scroll),
            )),
            InputKind::Resize => Subscription::holding(EventListener::new(
                &win,
                "resize",
                move |_event: &Event| handler(InputEvent::Resize),
            )),
            InputKind::PointerLeave => {
                let on_blur = {
                    let handler = handler.clone();
                    EventListener::new(&win, "blur", move |_event: &Event| {
                        handler(InputEvent::PointerLeave)
                    })
                };
                let on_leave = document()
                    .and_then(|doc| doc.document_element())
                    .map(|root| {
                        EventListener::new(&root, "mouseleave", move |_event: &Event| {
                            handler(InputEvent::PointerLeave)
                        })
                    });
                Subscription::holding((on_blur, on_leave))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    type Handle = AnimationFrame;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

pub fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn element_center(element: &Element) -> Option<Point> {
    let bounds = bounds_of(element);
    if bounds.width <= 0.0 && bounds.height <= 0.0 {
        return None;
    }
    Some(bounds.center())
}

pub fn section_bounds(id: &str) -> Option<Bounds> {
    let element = document()?.get_element_by_id(id)?;
    Some(bounds_of(&element))
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
}

pub fn document_height() -> f64 {
    document()
        .and_then(|doc| doc.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

pub fn scroll_to_anchor(href: &str) {
    let Some(target) = document().and_then(|doc| doc.query_selector(href).ok().flatten()) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_reveal(element: &Element, on_visible: impl Fn() + 'static) -> Option<RevealObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });

            if visible {
                observer.disconnect();
                on_visible();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}
