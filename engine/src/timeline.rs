//! Cooperative single-threaded scheduler.
//!
//! The timeline owns a virtual clock that only moves when the caller advances it.
//! Tasks fire in deadline order, ties in scheduling order, one at a time. A task
//! that schedules follow-up work does so relative to its own deadline, so a large
//! advance replays the same sequence a series of small ones would.

use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug)]
struct Entry<T> {
    at: Duration,
    task: T,
}

#[derive(Debug)]
pub(crate) struct Timeline<T> {
    now: Duration,
    queue: VecDeque<Entry<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            queue: VecDeque::new(),
        }
    }
}

impl<T> Timeline<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn now(&self) -> Duration {
        self.now
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    /// Schedule `task` to fire `after` the current clock.
    pub(crate) fn schedule(&mut self, after: Duration, task: T) {
        let at = self.now.saturating_add(after);
        // Insert after every entry due at or before `at` to keep FIFO on ties.
        let pos = self
            .queue
            .iter()
            .position(|entry| entry.at > at)
            .unwrap_or(self.queue.len());
        self.queue.insert(pos, Entry { at, task });
    }

    /// Pop the next task due at or before `deadline`, moving the clock to its
    /// deadline.
    pub(crate) fn pop_due(&mut self, deadline: Duration) -> Option<T> {
        if self.queue.front().is_none_or(|entry| entry.at > deadline) {
            return None;
        }
        let entry = self.queue.pop_front()?;
        self.now = self.now.max(entry.at);
        Some(entry.task)
    }

    /// Move the clock forward to `deadline` once every due task has fired.
    pub(crate) fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}
