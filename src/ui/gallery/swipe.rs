// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection on the inline gallery surface.

use crate::domain::ui::SwipeThreshold;

/// Direction a completed swipe navigates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next image.
    Next,
    /// Finger moved right: show the previous image.
    Previous,
}

/// Remembers where a touch started until it ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    threshold: SwipeThreshold,
    start_x: Option<f32>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finishes the gesture at `x`.
    ///
    /// Returns `None` when no touch was started or the displacement does not
    /// exceed the threshold.
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let difference = start - x;
        if !self.threshold.is_exceeded_by(difference) {
            return None;
        }
        Some(if difference > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SwipeTracker {
        SwipeTracker::new(SwipeThreshold::new(50))
    }

    #[test]
    fn swipe_left_goes_next() {
        let mut swipe = tracker();
        swipe.begin(300.0);
        assert_eq!(swipe.end(200.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn swipe_right_goes_previous() {
        let mut swipe = tracker();
        swipe.begin(100.0);
        assert_eq!(swipe.end(180.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn displacement_at_threshold_is_ignored() {
        let mut swipe = tracker();
        swipe.begin(100.0);
        assert_eq!(swipe.end(50.0), None);
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut swipe = tracker();
        assert_eq!(swipe.end(0.0), None);

        swipe.begin(400.0);
        assert!(swipe.end(0.0).is_some());
        // The start point is consumed by the first end.
        assert_eq!(swipe.end(0.0), None);
    }
}
