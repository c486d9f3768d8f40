// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DESKTOP_BREAKPOINT_PX, DEFAULT_FEEDBACK_DELAY_MS, DEFAULT_SWIPE_THRESHOLD_PX,
    MAX_DESKTOP_BREAKPOINT_PX, MAX_FEEDBACK_DELAY_MS, MAX_SWIPE_THRESHOLD_PX,
    MIN_DESKTOP_BREAKPOINT_PX, MIN_FEEDBACK_DELAY_MS, MIN_SWIPE_THRESHOLD_PX,
};
use std::time::Duration;

// =============================================================================
// Breakpoint
// =============================================================================

/// Viewport width (logical pixels) at which the desktop layout starts.
///
/// Below it the lightbox never opens; at or above it the mobile menu
/// is closed automatically.
///
/// # Example
///
/// ```
/// use product_page::domain::ui::Breakpoint;
///
/// let breakpoint = Breakpoint::default();
/// assert!(breakpoint.is_desktop(768));
/// assert!(!breakpoint.is_desktop(500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint(u32);

impl Breakpoint {
    /// Creates a breakpoint, clamping to the valid range.
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(MIN_DESKTOP_BREAKPOINT_PX, MAX_DESKTOP_BREAKPOINT_PX))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true when `viewport_width` uses the desktop layout.
    #[must_use]
    pub fn is_desktop(self, viewport_width: u32) -> bool {
        viewport_width >= self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DEFAULT_DESKTOP_BREAKPOINT_PX)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel, in pixels, for a touch to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to the valid range.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX) as f32)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when `distance` strictly exceeds the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, distance: f32) -> bool {
        distance.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

// =============================================================================
// FeedbackDelay
// =============================================================================

/// Lifetime of transient feedback (announcements, success flash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackDelay(u64);

impl FeedbackDelay {
    /// Creates a delay in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(MIN_FEEDBACK_DELAY_MS, MAX_FEEDBACK_DELAY_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FeedbackDelay {
    fn default() -> Self {
        Self(DEFAULT_FEEDBACK_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_clamps_and_compares() {
        assert_eq!(Breakpoint::new(0).value(), MIN_DESKTOP_BREAKPOINT_PX);
        assert_eq!(Breakpoint::new(100_000).value(), MAX_DESKTOP_BREAKPOINT_PX);
        let breakpoint = Breakpoint::default();
        assert_eq!(breakpoint.value(), 768);
        assert!(breakpoint.is_desktop(768));
        assert!(!breakpoint.is_desktop(767));
    }

    #[test]
    fn swipe_threshold_is_strict() {
        let threshold = SwipeThreshold::default();
        assert!(!threshold.is_exceeded_by(50.0));
        assert!(threshold.is_exceeded_by(50.5));
        assert!(threshold.is_exceeded_by(-80.0));
    }

    #[test]
    fn feedback_delay_clamps() {
        assert_eq!(FeedbackDelay::from_millis(1).as_millis(), MIN_FEEDBACK_DELAY_MS);
        assert_eq!(
            FeedbackDelay::from_millis(u64::MAX).as_millis(),
            MAX_FEEDBACK_DELAY_MS
        );
        assert_eq!(
            FeedbackDelay::default().as_duration(),
            Duration::from_millis(1000)
        );
    }
}
