//! `setInterval`-backed scheduler for the browser

use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::{Scheduler, Task, TimerHandle};

struct Interval {
    task: Task,
    js_id: i32,
    closure: Closure<dyn FnMut()>,
}

/// Runs periodic tasks with `window.setInterval`, routing each firing to
/// `dispatch`.
pub struct IntervalScheduler {
    window: web_sys::Window,
    dispatch: Rc<dyn Fn(Task)>,
    next_id: u32,
    active: HashMap<u32, Interval>,
    /// Closures of cancelled intervals. A task usually cancels itself from
    /// inside its own callback, so its closure must outlive that call; they
    /// are released on the next `start_repeating`.
    retired: Vec<Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new(window: web_sys::Window, dispatch: Rc<dyn Fn(Task)>) -> Self {
        Self {
            window,
            dispatch,
            next_id: 0,
            active: HashMap::new(),
            retired: Vec::new(),
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn start_repeating(&mut self, task: Task, period_ms: u32) -> TimerHandle {
        self.retired.clear();
        self.next_id += 1;
        let id = self.next_id;

        let dispatch = self.dispatch.clone();
        let closure = Closure::<dyn FnMut()>::new(move || dispatch(task));
        let period = i32::try_from(period_ms.max(1)).unwrap_or(i32::MAX);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period,
            ) {
            Ok(js_id) => {
                self.active.insert(id, Interval { task, js_id, closure });
            }
            Err(e) => log::warn!("setInterval failed for {:?}: {:?}", task, e),
        }
        TimerHandle::new(id, task)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.active.remove(&handle.id()) {
            Some(interval) => {
                self.window.clear_interval_with_handle(interval.js_id);
                self.retired.push(interval.closure);
                true
            }
            None => false,
        }
    }

    fn active_count(&self, task: Task) -> usize {
        self.active.values().filter(|i| i.task == task).count()
    }
}
