//! Session controller
//!
//! Owns the phase machine, the active `GameSession` and the handles of the two
//! periodic tasks. Every platform callback (timer, pointer, button) funnels
//! into one of its methods, along with whatever collaborator that event
//! needs, so the whole game runs headlessly under a `VirtualClock`.
//!
//! ```text
//! Idle --start--> Selecting --pick--> Playing --time up--> Ended
//!                     ^                                      |
//!                     +---------------- restart -------------+
//! ```

use glam::Vec2;
use rand_pcg::Pcg32;

use super::input::PointerMapping;
use super::physics::advance;
use super::state::{GameSession, Phase, Screen, Toy, ToyKind, seeded_rng};
use crate::audio::{Cue, CuePlayer};
use crate::platform::{Scheduler, Task, TimerHandle};
use crate::renderer::{Glow, Surface, draw_toy};
use crate::settings::Settings;
use crate::ui::Hud;

/// What a pointer-down did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// No running session, or its time is up
    Ignored,
    Miss,
    Hit,
}

pub struct SessionController {
    settings: Settings,
    glow: Glow,
    rng: Pcg32,
    /// Canvas backing-store size
    bounds: Vec2,
    phase: Phase,
    session: Option<GameSession>,
    frame_timer: Option<TimerHandle>,
    countdown_timer: Option<TimerHandle>,
    audio_unlocked: bool,
}

impl SessionController {
    pub fn new(settings: Settings, seed: u64, canvas_side: f32) -> Self {
        Self {
            glow: settings.glow(),
            settings,
            rng: seeded_rng(seed),
            bounds: Vec2::splat(canvas_side.max(0.0)),
            phase: Phase::Idle,
            session: None,
            frame_timer: None,
            countdown_timer: None,
            audio_unlocked: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn screen(&self) -> Screen {
        self.phase.screen()
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn restart_visible(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Current HUD values; before the first session they read as a fresh one
    pub fn hud(&self) -> Hud {
        let (score, time_remaining) = match &self.session {
            Some(s) => (s.score, s.time_remaining),
            None => (0, self.settings.session_seconds),
        };
        Hud {
            score,
            time_remaining,
            restart_visible: self.restart_visible(),
        }
    }

    /// New canvas size. The toy keeps its coordinates and bounces back in on
    /// its own if it ends up outside.
    pub fn resize(&mut self, side: f32) {
        self.bounds = Vec2::splat(side.max(0.0));
        log::info!("Canvas resized to {}", side);
    }

    /// Logo -> toy selection
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return false;
        }
        self.phase = Phase::Selecting;
        log::info!("Toy selection");
        true
    }

    /// Toy selection -> playing: fresh session, first toy, both timers
    pub fn pick<S: Scheduler + ?Sized>(&mut self, kind: ToyKind, scheduler: &mut S) -> bool {
        if self.phase != Phase::Selecting {
            log::debug!("pick({:?}) ignored in {:?}", kind, self.phase);
            return false;
        }
        self.stop_timers(scheduler);

        let toy = Toy::spawn(
            &mut self.rng,
            self.bounds,
            self.settings.toy_size,
            self.settings.max_toy_speed,
        );
        self.session = Some(GameSession::new(kind, self.settings.session_seconds, toy));
        self.frame_timer =
            Some(scheduler.start_repeating(Task::Frame, self.settings.frame_interval_ms));
        self.countdown_timer =
            Some(scheduler.start_repeating(Task::Countdown, self.settings.countdown_interval_ms));
        self.phase = Phase::Playing;

        log::info!(
            "Session started with {} ({}s)",
            kind.as_str(),
            self.settings.session_seconds
        );
        true
    }

    /// Back to toy selection from anywhere. Timers still running are stopped.
    pub fn restart<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.stop_timers(scheduler);
        self.phase = Phase::Selecting;
        log::info!("Restart: toy selection");
    }

    /// Route a periodic task firing
    pub fn dispatch<S, D, C>(&mut self, task: Task, scheduler: &mut S, surface: &mut D, cues: &mut C)
    where
        S: Scheduler + ?Sized,
        D: Surface + ?Sized,
        C: CuePlayer + ?Sized,
    {
        match task {
            Task::Frame => self.frame(surface),
            Task::Countdown => self.countdown(scheduler, cues),
        }
    }

    /// One frame tick: physics, then render
    pub fn frame<D: Surface + ?Sized>(&mut self, surface: &mut D) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        advance(&mut session.toy, self.bounds);
        draw_toy(surface, &session.toy, session.toy_kind.glyph(), &self.glow);
    }

    /// One countdown tick; ends the session when time runs out
    pub fn countdown<S, C>(&mut self, scheduler: &mut S, cues: &mut C)
    where
        S: Scheduler + ?Sized,
        C: CuePlayer + ?Sized,
    {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.time_remaining = session.time_remaining.saturating_sub(1);
        if session.is_over() {
            self.end_session(scheduler, cues);
        }
    }

    /// Pointer pressed at `client` (viewport coordinates)
    pub fn pointer_down<M, C>(&mut self, client: Vec2, mapping: &M, cues: &mut C) -> PointerOutcome
    where
        M: PointerMapping + ?Sized,
        C: CuePlayer + ?Sized,
    {
        if !self.audio_unlocked {
            cues.unlock();
            self.audio_unlocked = true;
        }

        if self.phase != Phase::Playing {
            return PointerOutcome::Ignored;
        }
        let Some(session) = self.session.as_mut() else {
            return PointerOutcome::Ignored;
        };
        if session.is_over() {
            return PointerOutcome::Ignored;
        }

        let point = mapping.to_canvas(client);
        if !session.toy.contains(point) {
            return PointerOutcome::Miss;
        }

        session.score += 1;
        session.toy = Toy::spawn(
            &mut self.rng,
            self.bounds,
            self.settings.toy_size,
            self.settings.max_toy_speed,
        );
        cues.play(Cue::Hit);
        log::debug!("Hit at ({:.0}, {:.0}), score {}", point.x, point.y, session.score);
        PointerOutcome::Hit
    }

    fn end_session<S, C>(&mut self, scheduler: &mut S, cues: &mut C)
    where
        S: Scheduler + ?Sized,
        C: CuePlayer + ?Sized,
    {
        self.stop_timers(scheduler);
        self.phase = Phase::Ended;
        cues.play(Cue::SessionEnd);
        if let Some(session) = &self.session {
            log::info!(
                "Session over: {} taps on the {}",
                session.score,
                session.toy_kind.as_str()
            );
        }
    }

    /// Cancel whichever timers are live. Handles are taken, so repeated calls
    /// cancel nothing twice.
    fn stop_timers<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        for handle in [self.frame_timer.take(), self.countdown_timer.take()]
            .into_iter()
            .flatten()
        {
            let task = handle.task();
            if !scheduler.cancel(handle) {
                log::warn!("{:?} timer was already stopped", task);
            }
        }
    }
}
