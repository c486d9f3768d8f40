// SPDX-License-Identifier: MPL-2.0
//! Modal image viewer visibility.

use crate::application::port::{Attribute, Node, ViewBinder};
use crate::domain::ui::Breakpoint;

pub const ACTIVE_CLASS: &str = "lightbox--active";

/// Open/closed state of the lightbox. Opening is refused on narrow
/// viewports.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lightbox {
    breakpoint: Breakpoint,
    open: bool,
}

impl Lightbox {
    #[must_use]
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            open: false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Shows the modal, locks scrolling and focuses the close control.
    ///
    /// Returns `false` without touching the view when the viewport is
    /// narrower than the breakpoint. The caller refreshes the modal content.
    pub fn open<V: ViewBinder + ?Sized>(&mut self, view: &mut V) -> bool {
        let width = view.viewport_width();
        if !self.breakpoint.is_desktop(width) {
            log::debug!("lightbox: refused at viewport width {width}");
            return false;
        }

        self.open = true;
        view.set_class(Node::Lightbox, ACTIVE_CLASS, true);
        view.set_attribute(Node::Lightbox, Attribute::AriaHidden, "false");
        view.set_scroll_locked(true);
        view.focus(Node::LightboxCloseButton);
        log::debug!("lightbox: opened");
        true
    }

    /// Hides the modal and returns focus to the inline gallery.
    pub fn close<V: ViewBinder + ?Sized>(&mut self, view: &mut V) {
        self.open = false;
        view.set_class(Node::Lightbox, ACTIVE_CLASS, false);
        view.set_attribute(Node::Lightbox, Attribute::AriaHidden, "true");
        view.set_scroll_locked(false);
        view.focus(Node::GalleryMain);
        log::debug!("lightbox: closed");
    }
}
