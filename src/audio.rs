//! Gameplay audio cues
//!
//! Cues are fire-and-forget. Browsers may refuse playback (autoplay policy,
//! missing file); that is swallowed and never reaches gameplay.

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Toy tapped
    Hit,
    /// Countdown reached zero
    SessionEnd,
}

impl Cue {
    pub const ALL: [Cue; 2] = [Cue::Hit, Cue::SessionEnd];
}

/// Something that can play cues
pub trait CuePlayer {
    /// One-time unlock on the first user gesture, for platforms that block
    /// audio until then. Plays and immediately pauses every cue.
    fn unlock(&mut self);

    /// Play a cue from the beginning
    fn play(&mut self, cue: Cue);
}

/// Records cues instead of playing them
#[derive(Debug, Default)]
pub struct CueLog {
    pub unlocks: u32,
    pub played: Vec<Cue>,
}

impl CueLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: Cue) -> usize {
        self.played.iter().filter(|c| **c == cue).count()
    }
}

impl CuePlayer for CueLog {
    fn unlock(&mut self) {
        self.unlocks += 1;
        log::debug!("Audio unlocked");
    }

    fn play(&mut self, cue: Cue) {
        log::debug!("Cue: {:?}", cue);
        self.played.push(cue);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::HtmlAudioElement;

    use super::{Cue, CuePlayer};
    use crate::settings::Settings;

    /// Plays cues through `<audio>` elements
    pub struct AudioManager {
        hit: Option<HtmlAudioElement>,
        session_end: Option<HtmlAudioElement>,
        master_volume: f32,
        muted: bool,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            let mut manager = Self {
                hit: load(&settings.hit_cue_url),
                session_end: load(&settings.end_cue_url),
                master_volume: 0.8,
                muted: false,
            };
            manager.set_master_volume(settings.master_volume);
            manager.set_muted(settings.muted);
            manager
        }

        /// Set master volume (0.0 - 1.0)
        pub fn set_master_volume(&mut self, vol: f32) {
            self.master_volume = vol.clamp(0.0, 1.0);
            for el in self.elements() {
                el.set_volume(self.master_volume as f64);
            }
        }

        /// Mute/unmute all audio
        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn element(&self, cue: Cue) -> Option<&HtmlAudioElement> {
            match cue {
                Cue::Hit => self.hit.as_ref(),
                Cue::SessionEnd => self.session_end.as_ref(),
            }
        }

        fn elements(&self) -> impl Iterator<Item = &HtmlAudioElement> {
            Cue::ALL.into_iter().filter_map(|cue| self.element(cue))
        }
    }

    impl CuePlayer for AudioManager {
        fn unlock(&mut self) {
            for el in self.elements() {
                let Ok(promise) = el.play() else { continue };
                let el = el.clone();
                spawn_local(async move {
                    if JsFuture::from(promise).await.is_ok() {
                        let _ = el.pause();
                        el.set_current_time(0.0);
                    }
                });
            }
            log::debug!("Audio unlock requested");
        }

        fn play(&mut self, cue: Cue) {
            if self.muted || self.master_volume <= 0.0 {
                return;
            }
            let Some(el) = self.element(cue) else { return };

            el.set_current_time(0.0);
            if let Ok(promise) = el.play() {
                // Await only to swallow a rejected play()
                spawn_local(async move {
                    let _ = JsFuture::from(promise).await;
                });
            }
        }
    }

    fn load(url: &str) -> Option<HtmlAudioElement> {
        let el = HtmlAudioElement::new_with_src(url).ok();
        if el.is_none() {
            log::warn!("Failed to create audio element for {} - cue disabled", url);
        }
        el
    }
}
