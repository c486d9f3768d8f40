// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation over a fixed image list.
//!
//! [`GalleryNavigator`] is the single cursor shared by the inline gallery
//! and the lightbox. Navigation wraps in both directions.

/// Navigation state information for UI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationInfo {
    /// Current position in the list (0-indexed).
    pub current_index: usize,
    /// Total number of images.
    pub total_count: usize,
    /// Whether the cursor is on the first image.
    pub at_first: bool,
    /// Whether the cursor is on the last image.
    pub at_last: bool,
}

impl NavigationInfo {
    /// 1-based position, as announced to the user.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current_index + 1
    }
}

/// Circular cursor into an image list of fixed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    /// Number of images; at least one.
    count: usize,
    current: usize,
}

impl GalleryNavigator {
    /// Creates a navigator over `count` images, starting at the first.
    ///
    /// A zero count is treated as a single image so the cursor is always valid.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count: count.max(1),
            current: 0,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index `next()` would move to, without moving.
    #[must_use]
    pub fn peek_next(&self) -> usize {
        if self.current + 1 >= self.count {
            0
        } else {
            self.current + 1
        }
    }

    /// Index `previous()` would move to, without moving.
    #[must_use]
    pub fn peek_previous(&self) -> usize {
        if self.current == 0 {
            self.count - 1
        } else {
            self.current - 1
        }
    }

    /// Advances one image, wrapping from last to first.
    pub fn navigate_next(&mut self) -> usize {
        self.current = self.peek_next();
        self.current
    }

    /// Steps back one image, wrapping from first to last.
    pub fn navigate_previous(&mut self) -> usize {
        self.current = self.peek_previous();
        self.current
    }

    /// Jumps to `index`. Returns `None` and leaves the cursor untouched when
    /// the index is out of range.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.count {
            return None;
        }
        self.current = index;
        Some(index)
    }

    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.current + 1 == self.count
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            current_index: self.current,
            total_count: self.count,
            at_first: self.is_at_first(),
            at_last: self.is_at_last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_navigator_starts_at_first() {
        let nav = GalleryNavigator::new(4);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.len(), 4);
        assert!(nav.is_at_first());
        assert!(!nav.is_at_last());
    }

    #[test]
    fn navigate_previous_wraps_to_last() {
        let mut nav = GalleryNavigator::new(4);
        assert_eq!(nav.navigate_previous(), 3);
        assert!(nav.is_at_last());
    }

    #[test]
    fn navigate_next_wraps_to_first() {
        let mut nav = GalleryNavigator::new(4);
        nav.select(3).expect("in range");
        assert_eq!(nav.navigate_next(), 0);
    }

    #[test]
    fn next_then_previous_is_identity_for_every_start() {
        for count in 1..=6 {
            for start in 0..count {
                let mut nav = GalleryNavigator::new(count);
                nav.select(start).expect("in range");

                nav.navigate_next();
                nav.navigate_previous();
                assert_eq!(nav.current_index(), start, "next/prev count={count}");

                nav.navigate_previous();
                nav.navigate_next();
                assert_eq!(nav.current_index(), start, "prev/next count={count}");
            }
        }
    }

    #[test]
    fn peek_does_not_move() {
        let nav = GalleryNavigator::new(3);
        assert_eq!(nav.peek_next(), 1);
        assert_eq!(nav.peek_previous(), 2);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut nav = GalleryNavigator::new(4);
        nav.select(2).expect("in range");
        assert_eq!(nav.select(4), None);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn single_image_wraps_onto_itself() {
        let mut nav = GalleryNavigator::new(1);
        assert_eq!(nav.navigate_next(), 0);
        assert_eq!(nav.navigate_previous(), 0);
        assert!(nav.is_at_first() && nav.is_at_last());
    }

    #[test]
    fn navigation_info_reports_position() {
        let mut nav = GalleryNavigator::new(4);
        nav.select(1).expect("in range");
        let info = nav.navigation_info();
        assert_eq!(info.position(), 2);
        assert_eq!(info.total_count, 4);
        assert!(!info.at_first);
        assert!(!info.at_last);
    }
}
