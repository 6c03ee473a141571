//! Gameplay simulation
//!
//! Nothing in here touches the DOM:
//! - Toy motion is one fixed step per frame tick
//! - Randomness comes from a seeded RNG
//! - Time, drawing and sound are reached through traits

pub mod input;
pub mod physics;
pub mod session;
pub mod state;

pub use input::{CanvasRect, PointerMapping};
pub use physics::advance;
pub use session::{PointerOutcome, SessionController};
pub use state::{GameSession, Phase, Screen, Toy, ToyKind, seeded_rng};
