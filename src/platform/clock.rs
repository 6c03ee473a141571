//! Simulated time for driving periodic tasks without a browser

use super::{Scheduler, Task, TimerHandle};

#[derive(Debug)]
struct Scheduled {
    id: u32,
    task: Task,
    period_ms: u64,
    next_due_ms: u64,
}

/// A scheduler whose time only moves when told to.
///
/// Tasks due at the same instant fire in the order they were started.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ms: u64,
    next_id: u32,
    scheduled: Vec<Scheduled>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move time forward by `ms`, firing every task that comes due.
    ///
    /// `fire` may start or cancel tasks; a cancelled task never fires again,
    /// even if it was due later in the same window.
    pub fn advance<F>(&mut self, ms: u64, mut fire: F)
    where
        F: FnMut(Task, &mut Self),
    {
        let deadline = self.now_ms + ms;
        while let Some(task) = self.pop_due(deadline) {
            fire(task, self);
        }
        self.now_ms = deadline;
    }

    /// Fire the earliest task due at or before `deadline`
    fn pop_due(&mut self, deadline: u64) -> Option<Task> {
        let next = self
            .scheduled
            .iter_mut()
            .filter(|s| s.next_due_ms <= deadline)
            .min_by_key(|s| (s.next_due_ms, s.id))?;

        self.now_ms = next.next_due_ms;
        next.next_due_ms += next.period_ms;
        Some(next.task)
    }
}

impl Scheduler for VirtualClock {
    fn start_repeating(&mut self, task: Task, period_ms: u32) -> TimerHandle {
        self.next_id += 1;
        let id = self.next_id;
        let period_ms = u64::from(period_ms.max(1));
        self.scheduled.push(Scheduled {
            id,
            task,
            period_ms,
            next_due_ms: self.now_ms + period_ms,
        });
        TimerHandle::new(id, task)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.scheduled.len();
        self.scheduled.retain(|s| s.id != handle.id());
        self.scheduled.len() != before
    }

    fn active_count(&self, task: Task) -> usize {
        self.scheduled.iter().filter(|s| s.task == task).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_period() {
        let mut clock = VirtualClock::new();
        let _frame = clock.start_repeating(Task::Frame, 16);
        let mut fired = 0;
        clock.advance(160, |task, _| {
            assert_eq!(task, Task::Frame);
            fired += 1;
        });
        assert_eq!(fired, 10);
        assert_eq!(clock.now_ms(), 160);
    }

    #[test]
    fn test_interleaves_tasks_in_time_order() {
        let mut clock = VirtualClock::new();
        let _countdown = clock.start_repeating(Task::Countdown, 1000);
        let _frame = clock.start_repeating(Task::Frame, 400);
        let mut order = Vec::new();
        clock.advance(1200, |task, c| order.push((task, c.now_ms())));
        assert_eq!(
            order,
            vec![
                (Task::Frame, 400),
                (Task::Frame, 800),
                (Task::Countdown, 1000),
                (Task::Frame, 1200),
            ]
        );
    }

    #[test]
    fn test_cancel_inside_callback_stops_later_firings() {
        let mut clock = VirtualClock::new();
        let mut handle = Some(clock.start_repeating(Task::Countdown, 100));
        let mut fired = 0;
        clock.advance(1000, |_, c| {
            fired += 1;
            if fired == 3 {
                if let Some(h) = handle.take() {
                    assert!(c.cancel(h));
                }
            }
        });
        assert_eq!(fired, 3);
        assert_eq!(clock.active_count(Task::Countdown), 0);
    }

    #[test]
    fn test_cancel_unknown_handle_is_noop() {
        let mut clock = VirtualClock::new();
        let h = clock.start_repeating(Task::Frame, 16);
        let stale = TimerHandle::new(h.id(), Task::Frame);
        assert!(clock.cancel(h));
        assert!(!clock.cancel(stale));
    }
}
