//! Platform abstraction layer
//!
//! Periodic tasks are started and cancelled through the `Scheduler` trait:
//! - `VirtualClock` drives them from simulated time (native builds, tests)
//! - `IntervalScheduler` maps them onto `setInterval` in the browser

pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::VirtualClock;
#[cfg(target_arch = "wasm32")]
pub use web::IntervalScheduler;

/// The two periodic tasks of a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Physics step followed by a render
    Frame,
    /// One-second countdown
    Countdown,
}

/// Handle to a running periodic task.
///
/// Not `Clone`: cancelling consumes the handle, so each one is cancelled at
/// most once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    id: u32,
    task: Task,
}

impl TimerHandle {
    pub fn new(id: u32, task: Task) -> Self {
        Self { id, task }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn task(&self) -> Task {
        self.task
    }
}

/// Starts and stops periodic tasks
pub trait Scheduler {
    /// Start firing `task` every `period_ms` milliseconds
    fn start_repeating(&mut self, task: Task, period_ms: u32) -> TimerHandle;

    /// Stop a task. Returns false if it was not running.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Number of running instances of `task`
    fn active_count(&self, task: Task) -> usize;
}
