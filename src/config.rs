use crate::counter::DEFAULT_COUNT_DURATION_MS;
use crate::spring::SpringConfig;
use crate::tilt::TiltConfig;
use crate::typing::TypingConfig;
use log::LevelFilter;
use serde::Deserialize;

pub const EMBEDDED_SITE_CONFIG: &str = include_str!("../config/site.json");

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const DEFAULT_PROFILE_IMAGE_URL: &str = "/profile-avatar.svg";
const DEFAULT_HERO_AVATAR_SIZE_PX: u32 = 200;

const MAX_DISTANCE_BOUNDS: (f64, f64) = (50.0, 2_000.0);
const MAX_ROTATION_BOUNDS: (f64, f64) = (1.0, 45.0);
const FALLOFF_BOUNDS: (f64, f64) = (0.0, 4.0);
const INTENSITY_FLOOR_BOUNDS: (f64, f64) = (0.01, 1.0);
const MAX_MOVEMENT_BOUNDS: (f64, f64) = (0.5, 100.0);
const STIFFNESS_BOUNDS: (f64, f64) = (1.0, 1_000.0);
const DAMPING_BOUNDS: (f64, f64) = (0.5, 200.0);
const MASS_BOUNDS: (f64, f64) = (0.1, 20.0);
const TYPE_MS_BOUNDS: (u32, u32) = (10, 2_000);
const DELETE_MS_BOUNDS: (u32, u32) = (10, 2_000);
const HOLD_MS_BOUNDS: (u32, u32) = (0, 20_000);
const NEXT_ROLE_MS_BOUNDS: (u32, u32) = (0, 20_000);
const COUNTER_DURATION_MS_BOUNDS: (f64, f64) = (0.0, 30_000.0);
const AVATAR_SIZE_PX_BOUNDS: (u32, u32) = (32, 1_024);

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SiteConfigFile {
    log_level: Option<String>,
    tilt: TiltSection,
    tilt_spring: SpringSection,
    glow_spring: SpringSection,
    typing: TypingSection,
    counter_duration_ms: Option<f64>,
    profile: ProfileSection,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TiltSection {
    max_distance: Option<f64>,
    max_rotation: Option<f64>,
    falloff: Option<f64>,
    intensity_floor: Option<f64>,
    max_movement: Option<f64>,
    reset_on_leave: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SpringSection {
    stiffness: Option<f64>,
    damping: Option<f64>,
    mass: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TypingSection {
    type_ms: Option<u32>,
    delete_ms: Option<u32>,
    hold_ms: Option<u32>,
    next_role_ms: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProfileSection {
    image_url: Option<String>,
    size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileConfig {
    pub image_url: Option<String>,
    pub size_px: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            image_url: Some(DEFAULT_PROFILE_IMAGE_URL.to_string()),
            size_px: DEFAULT_HERO_AVATAR_SIZE_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub log_level: LevelFilter,
    pub tilt: TiltConfig,
    pub tilt_spring: SpringConfig,
    pub glow_spring: SpringConfig,
    pub typing: TypingConfig,
    pub counter_duration_ms: f64,
    pub profile: ProfileConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            tilt: TiltConfig::default(),
            tilt_spring: SpringConfig::TILT,
            glow_spring: SpringConfig::GLOW,
            typing: TypingConfig::default(),
            counter_duration_ms: DEFAULT_COUNT_DURATION_MS,
            profile: ProfileConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let file: SiteConfigFile = serde_json::from_str(raw)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: SiteConfigFile) -> Self {
        let defaults = Self::default();
        let tilt = TiltConfig {
            max_distance: f64_with_bounds(
                file.tilt.max_distance,
                defaults.tilt.max_distance,
                MAX_DISTANCE_BOUNDS,
            ),
            max_rotation: f64_with_bounds(
                file.tilt.max_rotation,
                defaults.tilt.max_rotation,
                MAX_ROTATION_BOUNDS,
            ),
            falloff: f64_with_bounds(file.tilt.falloff, defaults.tilt.falloff, FALLOFF_BOUNDS),
            intensity_floor: f64_with_bounds(
                file.tilt.intensity_floor,
                defaults.tilt.intensity_floor,
                INTENSITY_FLOOR_BOUNDS,
            ),
            max_movement: file
                .tilt
                .max_movement
                .filter(|value| in_bounds(*value, MAX_MOVEMENT_BOUNDS))
                .or(defaults.tilt.max_movement),
            reset_on_leave: file
                .tilt
                .reset_on_leave
                .unwrap_or(defaults.tilt.reset_on_leave),
        };

        let typing = TypingConfig {
            type_ms: u32_with_bounds(file.typing.type_ms, defaults.typing.type_ms, TYPE_MS_BOUNDS),
            delete_ms: u32_with_bounds(
                file.typing.delete_ms,
                defaults.typing.delete_ms,
                DELETE_MS_BOUNDS,
            ),
            hold_ms: u32_with_bounds(file.typing.hold_ms, defaults.typing.hold_ms, HOLD_MS_BOUNDS),
            next_role_ms: u32_with_bounds(
                file.typing.next_role_ms,
                defaults.typing.next_role_ms,
                NEXT_ROLE_MS_BOUNDS,
            ),
        };

        let profile = ProfileConfig {
            image_url: match file.profile.image_url {
                Some(url) if url.trim().is_empty() => None,
                Some(url) => Some(url.trim().to_string()),
                None => defaults.profile.image_url,
            },
            size_px: u32_with_bounds(
                file.profile.size,
                defaults.profile.size_px,
                AVATAR_SIZE_PX_BOUNDS,
            ),
        };

        Self {
            log_level: parse_log_level(file.log_level.as_deref(), defaults.log_level),
            tilt,
            tilt_spring: spring_from_section(&file.tilt_spring, defaults.tilt_spring),
            glow_spring: spring_from_section(&file.glow_spring, defaults.glow_spring),
            typing,
            counter_duration_ms: f64_with_bounds(
                file.counter_duration_ms,
                defaults.counter_duration_ms,
                COUNTER_DURATION_MS_BOUNDS,
            ),
            profile,
        }
    }
}

/// Each key is bounded on its own; a combination the integrator cannot
/// step stably falls back to the whole default spring.
fn spring_from_section(section: &SpringSection, default: SpringConfig) -> SpringConfig {
    let spring = SpringConfig {
        stiffness: f64_with_bounds(section.stiffness, default.stiffness, STIFFNESS_BOUNDS),
        damping: f64_with_bounds(section.damping, default.damping, DAMPING_BOUNDS),
        mass: f64_with_bounds(section.mass, default.mass, MASS_BOUNDS),
        ..default
    };

    if spring.is_stable() {
        spring
    } else {
        default
    }
}

fn in_bounds(value: f64, bounds: (f64, f64)) -> bool {
    value.is_finite() && (bounds.0..=bounds.1).contains(&value)
}

fn f64_with_bounds(value: Option<f64>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .filter(|value| in_bounds(*value, bounds))
        .unwrap_or(default)
}

fn u32_with_bounds(value: Option<u32>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::from_json(EMBEDDED_SITE_CONFIG).expect("embedded config is valid");

        assert!(config.tilt.intensity_floor > 0.0);
        assert!(config.tilt.max_rotation > 0.0);
        assert!(config.profile.size_px >= AVATAR_SIZE_PX_BOUNDS.0);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_json("{}").expect("empty object is valid");

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn values_within_bounds_are_used() {
        let config = SiteConfig::from_json(
            r#"{
                "logLevel": "DEBUG",
                "tilt": { "maxDistance": 300, "maxRotation": 8, "maxMovement": 15, "resetOnLeave": false },
                "tiltSpring": { "stiffness": 200 },
                "typing": { "typeMs": 80 },
                "counterDurationMs": 1500,
                "profile": { "imageUrl": " /me.png ", "size": 160 }
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.tilt.max_distance, 300.0);
        assert_eq!(config.tilt.max_rotation, 8.0);
        assert_eq!(config.tilt.max_movement, Some(15.0));
        assert!(!config.tilt.reset_on_leave);
        assert_eq!(config.tilt_spring.stiffness, 200.0);
        assert_eq!(config.tilt_spring.damping, SpringConfig::TILT.damping);
        assert_eq!(config.typing.type_ms, 80);
        assert_eq!(config.counter_duration_ms, 1_500.0);
        assert_eq!(config.profile.image_url.as_deref(), Some("/me.png"));
        assert_eq!(config.profile.size_px, 160);
    }

    #[test]
    fn out_of_bounds_values_fall_back_to_defaults() {
        let config = SiteConfig::from_json(
            r#"{
                "logLevel": "loud",
                "tilt": { "maxDistance": 0, "maxRotation": 90, "intensityFloor": 0, "maxMovement": -3 },
                "glowSpring": { "damping": 0 },
                "typing": { "deleteMs": 1 },
                "profile": { "size": 4 }
            }"#,
        )
        .expect("valid config");
        let defaults = SiteConfig::default();

        assert_eq!(config.log_level, defaults.log_level);
        assert_eq!(config.tilt, defaults.tilt);
        assert_eq!(config.glow_spring, defaults.glow_spring);
        assert_eq!(config.typing, defaults.typing);
        assert_eq!(config.profile.size_px, defaults.profile.size_px);
    }

    #[test]
    fn unstable_spring_combination_falls_back_to_default() {
        let config = SiteConfig::from_json(
            r#"{
                "tiltSpring": { "stiffness": 150, "damping": 200, "mass": 0.1 },
                "glowSpring": { "damping": 30, "mass": 2 }
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.tilt_spring, SpringConfig::TILT);
        assert_eq!(config.glow_spring.damping, 30.0);
        assert_eq!(config.glow_spring.mass, 2.0);
        assert!(config.glow_spring.is_stable());
    }

    #[test]
    fn blank_image_url_selects_placeholder() {
        let config =
            SiteConfig::from_json(r#"{ "profile": { "imageUrl": "" } }"#).expect("valid config");

        assert_eq!(config.profile.image_url, None);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(SiteConfig::from_json("{ tilt: ").is_err());
        assert!(SiteConfig::from_json(r#"{ "tilt": { "maxRotation": "steep" } }"#).is_err());
    }
}
