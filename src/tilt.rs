use crate::geometry::Point;

pub const DEFAULT_MAX_DISTANCE: f64 = 400.0;
pub const DEFAULT_MAX_ROTATION_DEG: f64 = 25.0;
pub const DEFAULT_FALLOFF: f64 = 0.8;
pub const DEFAULT_INTENSITY_FLOOR: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_distance: f64,
    pub max_rotation: f64,
    pub falloff: f64,
    pub intensity_floor: f64,
    /// Translation cap in px. `None` disables translation.
    pub max_movement: Option<f64>,
    pub reset_on_leave: bool,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_rotation: DEFAULT_MAX_ROTATION_DEG,
            falloff: DEFAULT_FALLOFF,
            intensity_floor: DEFAULT_INTENSITY_FLOOR,
            max_movement: None,
            reset_on_leave: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltVector {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub intensity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl TiltVector {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        intensity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotateX({:.3}deg) rotateY({:.3}deg)",
            self.translate_x, self.translate_y, self.rotate_x, self.rotate_y
        )
    }
}

fn clamp_symmetric(value: f64, limit: f64) -> f64 {
    value.clamp(-limit, limit)
}

/// Either position being unknown (pointer never moved, element not yet
/// measured) yields [`TiltVector::NEUTRAL`].
pub fn compute_tilt(pointer: Option<Point>, anchor: Option<Point>, config: &TiltConfig) -> TiltVector {
    let (Some(pointer), Some(anchor)) = (pointer, anchor) else {
        return TiltVector::NEUTRAL;
    };

    let delta = pointer.delta_from(anchor);
    if !delta.is_finite() || config.max_distance <= 0.0 {
        return TiltVector::NEUTRAL;
    }

    let distance = delta.length();
    let normalized_distance = (distance / config.max_distance).min(1.0);
    let intensity = (1.0 - normalized_distance * config.falloff)
        .max(config.intensity_floor)
        .min(1.0);

    // Offsets are kept on the unit disc so a pointer past max_distance
    // cannot grow the rotation any further.
    let scale = distance.max(config.max_distance);
    let nx = delta.x / scale;
    let ny = delta.y / scale;

    let rotate_y = clamp_symmetric(nx * config.max_rotation * intensity, config.max_rotation);
    let rotate_x = clamp_symmetric(-ny * config.max_rotation * intensity, config.max_rotation);

    let (translate_x, translate_y) = match config.max_movement {
        Some(limit) if limit > 0.0 => (
            clamp_symmetric(nx * limit * intensity, limit),
            clamp_symmetric(ny * limit * intensity, limit),
        ),
        _ => (0.0, 0.0),
    };

    TiltVector {
        rotate_x,
        rotate_y,
        intensity,
        translate_x,
        translate_y,
    }
}
