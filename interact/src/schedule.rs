//! Chained one-shot timers with cooperative cancellation.
//!
//! Animations here are not fixed-rate: each step decides how long to wait
//! before the next one. [`spawn_chain`] expresses that as a sequence of
//! one-shot timers, each scheduled by the previous callback, and stops as soon
//! as the step returns `None` or the [`CancelToken`] is cancelled.
//!
//! The host supplies the clock through [`Timers`]. In the browser that is a
//! `setTimeout` wrapper; in tests it is [`ManualTimers`], a virtual clock that
//! only moves when told to.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Callback run once when a timer fires.
pub type Task = Box<dyn FnOnce()>;

/// Source of one-shot timers.
pub trait Timers {
    /// Run `task` once, `delay_ms` milliseconds from now.
    fn after(&self, delay_ms: u32, task: Task);
}

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop every chain holding a clone of this token. Takes effect before
    /// the next step runs.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Run `step` after `first_delay_ms`, then again after whatever delay each
/// call returns, until it returns `None` or `token` is cancelled.
pub fn spawn_chain<T, F>(timers: T, token: CancelToken, first_delay_ms: u32, step: F)
where
    T: Timers + Clone + 'static,
    F: FnMut() -> Option<u32> + 'static,
{
    schedule_step(timers, token, first_delay_ms, Rc::new(RefCell::new(step)));
}

fn schedule_step<T, F>(timers: T, token: CancelToken, delay_ms: u32, step: Rc<RefCell<F>>)
where
    T: Timers + Clone + 'static,
    F: FnMut() -> Option<u32> + 'static,
{
    let next_timers = timers.clone();
    timers.after(
        delay_ms,
        Box::new(move || {
            if token.is_cancelled() {
                return;
            }
            let next = (*step.borrow_mut())();
            if let Some(delay_ms) = next {
                schedule_step(next_timers, token, delay_ms, step);
            }
        }),
    );
}

/// Deterministic virtual-time [`Timers`].
///
/// Timers due at the same instant fire in scheduling order. Tasks scheduled
/// while [`ManualTimers::advance`] runs fire in the same call if they fall
/// inside the advanced window.
#[derive(Clone, Default)]
pub struct ManualTimers {
    queue: Rc<RefCell<ManualQueue>>,
}

#[derive(Default)]
struct ManualQueue {
    now_ms: u64,
    seq: u64,
    due: BTreeMap<(u64, u64), Task>,
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Number of timers scheduled but not yet fired.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().due.len()
    }

    /// Move the clock forward by `ms`, firing every timer that comes due.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let task = {
                let mut queue = self.queue.borrow_mut();
                let next_at = queue.due.first_key_value().map(|(&(at, _), _)| at);
                match next_at {
                    Some(at) if at <= target => {
                        queue.now_ms = at;
                        queue.due.pop_first().map(|(_, task)| task)
                    }
                    _ => None,
                }
            };
            let Some(task) = task else {
                break;
            };
            task();
        }
        self.queue.borrow_mut().now_ms = target;
    }
}

impl Timers for ManualTimers {
    fn after(&self, delay_ms: u32, task: Task) {
        let mut queue = self.queue.borrow_mut();
        let at = queue.now_ms + u64::from(delay_ms);
        let seq = queue.seq;
        queue.seq += 1;
        queue.due.insert((at, seq), task);
    }
}
