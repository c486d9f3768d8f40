// SPDX-License-Identifier: MPL-2.0
//! Clock port definition.

use std::time::Instant;

/// Monotonic time source used to schedule deferred feedback resets.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}
