//! Game settings
//!
//! Every tunable has a compiled-in default. The browser build can override any
//! subset of them with a JSON document in LocalStorage; the game itself never
//! writes storage.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::Glow;

/// Tunables for sessions, rendering and audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Session ===
    /// Countdown start value in seconds
    pub session_seconds: u32,
    /// Physics/render tick period
    pub frame_interval_ms: u32,
    /// Countdown tick period
    pub countdown_interval_ms: u32,

    // === Toy ===
    /// Edge length of the toy square (also its font size)
    pub toy_size: f32,
    /// Max absolute spawn velocity per axis, px per tick
    pub max_toy_speed: f32,

    // === Visuals ===
    pub glow_color: String,
    pub glow_blur: f32,
    /// Upper bound for the canvas side
    pub canvas_max_side: f32,
    /// Share of the viewport width the canvas may take
    pub canvas_viewport_fraction: f32,

    // === Audio ===
    pub hit_cue_url: String,
    pub end_cue_url: String,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session_seconds: SESSION_SECONDS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,

            toy_size: TOY_SIZE,
            max_toy_speed: MAX_TOY_SPEED,

            glow_color: GLOW_COLOR.to_string(),
            glow_blur: GLOW_BLUR,
            canvas_max_side: CANVAS_MAX_SIDE,
            canvas_viewport_fraction: CANVAS_VIEWPORT_FRACTION,

            hit_cue_url: "https://cdn.pixabay.com/audio/2022/07/26/audio_124bfae5b2.mp3"
                .to_string(),
            end_cue_url: "https://cdn.pixabay.com/audio/2022/03/15/audio_115b9b7b7e.mp3"
                .to_string(),
            master_volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "webcat_settings";

    /// Parse a (possibly partial) JSON document; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Clamp every value into a usable range
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.session_seconds = self.session_seconds.max(1);
        self.frame_interval_ms = self.frame_interval_ms.max(1);
        self.countdown_interval_ms = self.countdown_interval_ms.max(1);
        if !(self.toy_size.is_finite() && self.toy_size > 0.0) {
            self.toy_size = defaults.toy_size;
        }
        if !self.max_toy_speed.is_finite() {
            self.max_toy_speed = defaults.max_toy_speed;
        }
        self.max_toy_speed = self.max_toy_speed.abs();
        if !(self.glow_blur.is_finite() && self.glow_blur >= 0.0) {
            self.glow_blur = defaults.glow_blur;
        }
        if !(self.canvas_max_side.is_finite() && self.canvas_max_side > 0.0) {
            self.canvas_max_side = defaults.canvas_max_side;
        }
        if !(self.canvas_viewport_fraction > 0.0 && self.canvas_viewport_fraction <= 1.0) {
            self.canvas_viewport_fraction = defaults.canvas_viewport_fraction;
        }
        self.master_volume = if self.master_volume.is_finite() {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            defaults.master_volume
        };
        self
    }

    pub fn glow(&self) -> Glow {
        Glow::new(self.glow_color.clone(), self.glow_blur)
    }

    /// Canvas side for a viewport of the given width
    pub fn canvas_side(&self, viewport_width: f32) -> f32 {
        crate::canvas_side(
            viewport_width,
            self.canvas_viewport_fraction,
            self.canvas_max_side,
        )
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "session_seconds": 10, "muted": true }"#)
            .expect("valid json");
        assert_eq!(settings.session_seconds, 10);
        assert!(settings.muted);
        assert_eq!(settings.toy_size, TOY_SIZE);
        assert_eq!(settings.frame_interval_ms, FRAME_INTERVAL_MS);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ session_seconds: ").is_err());
    }

    #[test]
    fn test_sanitized_clamps_nonsense() {
        let settings = Settings::from_json(
            r#"{
                "session_seconds": 0,
                "frame_interval_ms": 0,
                "toy_size": -5.0,
                "max_toy_speed": -4.0,
                "canvas_viewport_fraction": 3.0,
                "master_volume": 7.5
            }"#,
        )
        .expect("valid json");
        assert_eq!(settings.session_seconds, 1);
        assert_eq!(settings.frame_interval_ms, 1);
        assert_eq!(settings.toy_size, TOY_SIZE);
        assert_eq!(settings.max_toy_speed, 4.0);
        assert_eq!(settings.canvas_viewport_fraction, CANVAS_VIEWPORT_FRACTION);
        assert_eq!(settings.master_volume, 1.0);
    }

    #[test]
    fn test_default_glow() {
        assert_eq!(Settings::default().glow(), Glow::default());
    }

    #[test]
    fn test_canvas_side_matches_backing_store() {
        let settings = Settings::default();
        assert_eq!(settings.canvas_side(361.0), 324.0);
        assert_eq!(settings.canvas_side(2000.0), 400.0);
        assert_eq!(settings.canvas_side(361.0) as u32 as f32, settings.canvas_side(361.0));
    }
}
