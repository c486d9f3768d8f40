// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget delayed actions.
//!
//! Tasks are queued with a due time and run on the first `Tick` at or after
//! it. There is no cancellation: scheduling the same kind of task twice
//! runs it twice.

use std::time::{Duration, Instant};

/// Actions that run after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Empty the live region.
    ClearAnnouncement,
    /// Drop the success styling from the add-to-cart control.
    EndSuccessFlash,
}

#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    pending: Vec<(Instant, Deferred)>,
}

impl DeferredQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, task: Deferred) {
        self.pending.push((now + delay, task));
    }

    /// Removes and returns every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Deferred> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(at, _)| *at <= now);
        self.pending = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, task)| task).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest due time, so a host can sleep until then.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|(at, _)| *at).min()
    }
}
