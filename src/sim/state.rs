//! Session and toy state
//!
//! Everything a single play session mutates lives in `GameSession`, which is
//! owned by the `SessionController`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Which toy the player chases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToyKind {
    #[default]
    Fish,
    Ball,
    Mouse,
}

impl ToyKind {
    pub const ALL: [ToyKind; 3] = [ToyKind::Fish, ToyKind::Ball, ToyKind::Mouse];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToyKind::Fish => "fish",
            ToyKind::Ball => "ball",
            ToyKind::Mouse => "mouse",
        }
    }

    /// Parse the `data-toy` attribute of a toy button
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fish" => Some(ToyKind::Fish),
            "ball" => Some(ToyKind::Ball),
            "mouse" => Some(ToyKind::Mouse),
            _ => None,
        }
    }

    /// Emoji painted on the canvas
    pub fn glyph(&self) -> &'static str {
        match self {
            ToyKind::Fish => "🐟",
            ToyKind::Ball => "⚽",
            ToyKind::Mouse => "🐭",
        }
    }
}

/// The single moving toy. `pos` is the top-left corner of its square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Toy {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Spawn a toy at a uniformly random position inside `bounds` with a
    /// random velocity in [-max_speed, max_speed) per axis.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, size: f32, max_speed: f32) -> Self {
        let span = (bounds - Vec2::splat(size)).max(Vec2::ZERO);
        let pos = Vec2::new(
            rng.random::<f32>() * span.x,
            rng.random::<f32>() * span.y,
        );
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * 2.0 * max_speed,
            (rng.random::<f32>() - 0.5) * 2.0 * max_speed,
        );
        Self { pos, vel, size }
    }

    /// Inclusive axis-aligned bounding box test
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size
    }

    /// Largest top-left coordinate that keeps the toy inside `bounds`
    #[inline]
    pub fn max_pos(&self, bounds: Vec2) -> Vec2 {
        bounds - Vec2::splat(self.size)
    }
}

/// One timed play episode
#[derive(Debug, Clone)]
pub struct GameSession {
    pub score: u32,
    /// Whole seconds left; never goes below zero
    pub time_remaining: u32,
    pub toy_kind: ToyKind,
    pub toy: Toy,
}

impl GameSession {
    pub fn new(toy_kind: ToyKind, time_remaining: u32, toy: Toy) -> Self {
        Self {
            score: 0,
            time_remaining,
            toy_kind,
            toy,
        }
    }

    pub fn is_over(&self) -> bool {
        self.time_remaining == 0
    }
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Logo screen, waiting for start
    Idle,
    /// Toy selection screen
    Selecting,
    /// Session running, both periodic tasks active
    Playing,
    /// Session finished; game screen frozen with the restart control shown
    Ended,
}

/// Top-level screens. Exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Logo,
    ToySelect,
    Game,
}

impl Phase {
    pub fn screen(&self) -> Screen {
        match self {
            Phase::Idle => Screen::Logo,
            Phase::Selecting => Screen::ToySelect,
            Phase::Playing | Phase::Ended => Screen::Game,
        }
    }
}

/// Seeded RNG used for every toy spawn
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
