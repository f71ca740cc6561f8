use crate::geometry::Point;
use crate::input::{InputEvent, InputKind, InputSource, Subscription};
use crate::spring::SpringConfig;
use crate::tilt::{compute_tilt, TiltConfig, TiltVector};
use std::cell::Cell;
use std::rc::Rc;

pub const DEFAULT_AVATAR_SIZE_PX: u32 = 128;
pub const GLOW_SCALE_GAIN: f64 = 0.1;
pub const GLOW_BASE_OPACITY: f64 = 0.6;
pub const GLOW_OPACITY_GAIN: f64 = 0.4;
pub const HOVER_SCALE: f64 = 1.05;

pub const TILT_CHANNELS: usize = 4;

struct TrackerState {
    config: TiltConfig,
    pointer: Cell<Option<Point>>,
    anchor: Cell<Option<Point>>,
    measure: Box<dyn Fn() -> Option<Point>>,
    sink: Box<dyn Fn(TiltVector)>,
}

impl TrackerState {
    fn remeasure(&self) {
        // Keep the last good anchor if the element is briefly unmeasurable.
        if let Some(anchor) = (self.measure)().filter(|point| point.is_finite()) {
            self.anchor.set(Some(anchor));
        }
    }

    fn handle(&self, event: InputEvent) {
        match event {
            InputEvent::PointerMove(point) => self.pointer.set(Some(point)),
            InputEvent::Scroll | InputEvent::Resize => self.remeasure(),
            InputEvent::PointerLeave => {
                if self.config.reset_on_leave {
                    self.pointer.set(None);
                }
            }
        }
        self.emit();
    }

    fn current(&self) -> TiltVector {
        compute_tilt(self.pointer.get(), self.anchor.get(), &self.config)
    }

    fn emit(&self) {
        (self.sink)(self.current());
    }
}

pub struct TrackingSession {
    state: Rc<TrackerState>,
    _subscriptions: Vec<Subscription>,
}

impl TrackingSession {
    pub fn current(&self) -> TiltVector {
        self.state.current()
    }

    pub fn anchor(&self) -> Option<Point> {
        self.state.anchor.get()
    }

    pub fn pointer(&self) -> Option<Point> {
        self.state.pointer.get()
    }
}

pub fn track<I>(
    source: &I,
    measure: impl Fn() -> Option<Point> + 'static,
    config: TiltConfig,
    sink: impl Fn(TiltVector) + 'static,
) -> TrackingSession
where
    I: InputSource + ?Sized,
{
    let state = Rc::new(TrackerState {
        config,
        pointer: Cell::new(None),
        anchor: Cell::new(None),
        measure: Box::new(measure),
        sink: Box::new(sink),
    });

    state.remeasure();

    let subscriptions = InputKind::ALL
        .iter()
        .map(|kind| {
            let weak = Rc::downgrade(&state);
            source.listen(
                *kind,
                Rc::new(move |event| {
                    if let Some(state) = weak.upgrade() {
                        state.handle(event);
                    }
                }),
            )
        })
        .collect();

    state.emit();

    TrackingSession {
        state,
        _subscriptions: subscriptions,
    }
}

pub fn tilt_channels(spring: SpringConfig) -> [(SpringConfig, f64); TILT_CHANNELS] {
    [(spring, 0.0), (spring, 0.0), (spring, 0.0), (spring, 0.0)]
}

pub fn tilt_targets(tilt: &TiltVector) -> [f64; TILT_CHANNELS] {
    [tilt.rotate_x, tilt.rotate_y, tilt.translate_x, tilt.translate_y]
}

pub fn tilt_from_channels(values: &[f64], intensity: f64) -> TiltVector {
    let channel = |index: usize| values.get(index).copied().unwrap_or(0.0);
    TiltVector {
        rotate_x: channel(0),
        rotate_y: channel(1),
        intensity,
        translate_x: channel(2),
        translate_y: channel(3),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowStyle {
    pub scale: f64,
    pub opacity: f64,
}

impl GlowStyle {
    pub fn for_intensity(intensity: f64) -> Self {
        let intensity = intensity.clamp(0.0, 1.0);
        Self {
            scale: 1.0 + intensity * GLOW_SCALE_GAIN,
            opacity: GLOW_BASE_OPACITY + intensity * GLOW_OPACITY_GAIN,
        }
    }

    pub fn channels(spring: SpringConfig) -> [(SpringConfig, f64); 2] {
        let resting = Self::for_intensity(1.0);
        [(spring, resting.scale), (spring, resting.opacity)]
    }

    pub fn targets(&self) -> [f64; 2] {
        [self.scale, self.opacity]
    }

    pub fn css(values: &[f64]) -> String {
        let scale = values.first().copied().unwrap_or(1.0);
        let opacity = values.get(1).copied().unwrap_or(1.0);
        format!("transform: scale({scale:.4}); opacity: {opacity:.4};")
    }
}

/// Inline style for the avatar container. The hover scale is read by the
/// disc, not the tilting layer, so it never competes with the springs.
pub fn avatar_style(size_px: u32) -> String {
    format!("width: {size_px}px; height: {size_px}px; --profile-hover-scale: {HOVER_SCALE};")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarFace {
    Image(String),
    Placeholder,
}

impl AvatarFace {
    pub fn resolve(image_url: Option<&str>, load_failed: bool) -> Self {
        match image_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) if !load_failed => Self::Image(url.to_string()),
            _ => Self::Placeholder,
        }
    }
}
