// SPDX-License-Identifier: MPL-2.0
//! Clock adapters.

use crate::application::port::Clock;
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Wall-clock time from [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Used by hosts that replay recorded input and by tests that need to
/// step past feedback timers deterministically.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    /// Moves time forward and returns the new instant.
    pub fn advance(&self, by: Duration) -> Instant {
        let next = self.now.get() + by;
        self.now.set(next);
        next
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
