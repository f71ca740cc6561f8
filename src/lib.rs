pub mod animation;
pub mod config;
pub mod content;
pub mod counter;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod nav;
pub mod profile;
pub mod spring;
pub mod theme;
pub mod tilt;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
