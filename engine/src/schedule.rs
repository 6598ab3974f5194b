//! Cancellable delayed tasks on a screen-local clock.
//!
//! A `Schedule` keeps its own notion of "now", advanced only by frame ticks.
//! Tasks fire strictly in deadline order (ties in scheduling order), and the
//! clock is moved to each task's deadline while it fires, so a task that
//! schedules a follow-up is timed from when it was due rather than from the
//! end of a long frame. Dropping the schedule drops every pending task.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Scheduled<T> {
    id: TaskId,
    due: Duration,
    task: T,
}

#[derive(Debug)]
pub struct Schedule<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Schedule<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Time elapsed on this schedule's clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn after(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due: self.now.saturating_add(delay),
            task,
        });
        id
    }

    /// Returns `false` if the task already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|scheduled| scheduled.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The clock reading `delta` from now; pass it to [`Self::pop_due`] and
    /// [`Self::settle`] to run one frame.
    #[must_use]
    pub fn horizon(&self, delta: Duration) -> Duration {
        self.now.saturating_add(delta)
    }

    /// Remove and return the earliest task due at or before `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due <= until)
            .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.id.0))
            .map(|(index, _)| index)?;
        let scheduled = self.pending.swap_remove(index);
        self.now = self.now.max(scheduled.due);
        Some(scheduled.task)
    }

    /// Move the clock to `until` once every due task has been popped.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
