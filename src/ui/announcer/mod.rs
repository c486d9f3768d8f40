// SPDX-License-Identifier: MPL-2.0
//! Accessibility announcer.
//!
//! Announcements are written into a dedicated live region and cleared again
//! after a short delay, so that repeating the same message is read out
//! again by assistive technology. The clear is scheduled by the caller and
//! is never cancelled: a later announcement can be wiped by an earlier
//! announcement's timer. Both timers reset to the same empty state, so the
//! live region always ends up idle.

mod announcement;

pub use announcement::Announcement;

use crate::application::port::{Attribute, Node, ViewBinder};
use crate::domain::ui::FeedbackDelay;
use crate::i18n::I18n;
use std::time::Duration;

/// Writes announcements into the live region.
#[derive(Debug, Clone, Copy, Default)]
pub struct Announcer {
    clear_after: FeedbackDelay,
}

impl Announcer {
    #[must_use]
    pub fn new(clear_after: FeedbackDelay) -> Self {
        Self { clear_after }
    }

    /// Pushes the resolved text to the live region and returns how long
    /// until it should be cleared.
    pub fn announce<V: ViewBinder + ?Sized>(
        &self,
        view: &mut V,
        i18n: &I18n,
        announcement: &Announcement,
    ) -> Duration {
        let text = announcement.resolve(i18n);
        log::debug!("announce: {text}");
        view.set_text(Node::Announcements, &text);
        self.clear_after.as_duration()
    }

    /// Empties the live region.
    pub fn clear<V: ViewBinder + ?Sized>(&self, view: &mut V) {
        view.set_text(Node::Announcements, "");
    }

    /// Moves document focus to the main content region once.
    ///
    /// The region is made focusable only for the duration of the call so
    /// it does not stay in the tab order.
    pub fn set_initial_focus<V: ViewBinder + ?Sized>(&self, view: &mut V) {
        view.set_attribute(Node::MainContent, Attribute::TabIndex, "-1");
        view.focus(Node::MainContent);
        view.remove_attribute(Node::MainContent, Attribute::TabIndex);
    }
}
