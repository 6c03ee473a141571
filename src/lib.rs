//! Webcat - a toy-chasing reflex minigame
//!
//! Core modules:
//! - `sim`: Session state machine, toy physics and hit testing
//! - `renderer`: Drawing-surface abstraction and the glow/crisp toy painter
//! - `platform`: Periodic task scheduling (browser intervals or a virtual clock)
//! - `audio`: Gameplay cues
//! - `settings`: Data-driven tunables
//! - `ui`: Screen ids and HUD text

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Length of one play session in seconds
    pub const SESSION_SECONDS: u32 = 30;
    /// Physics/render tick period (~60 Hz)
    pub const FRAME_INTERVAL_MS: u32 = 16;
    /// Countdown tick period
    pub const COUNTDOWN_INTERVAL_MS: u32 = 1000;

    /// Toy glyph edge length in canvas pixels
    pub const TOY_SIZE: f32 = 48.0;
    /// Maximum absolute velocity component of a freshly spawned toy (px/tick)
    pub const MAX_TOY_SPEED: f32 = 3.0;

    /// Glow pass shadow
    pub const GLOW_COLOR: &str = "rgba(255,255,0,0.7)";
    pub const GLOW_BLUR: f32 = 25.0;

    /// Canvas is a square of side min(viewport * fraction, max)
    pub const CANVAS_MAX_SIDE: f32 = 400.0;
    pub const CANVAS_VIEWPORT_FRACTION: f32 = 0.9;
}

/// Side length of the square play canvas for a given viewport width.
///
/// Whole pixels only, since the canvas backing store is sized in integers.
#[inline]
pub fn canvas_side(viewport_width: f32, fraction: f32, max_side: f32) -> f32 {
    (viewport_width * fraction).min(max_side).max(0.0).floor()
}
