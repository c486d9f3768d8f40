// SPDX-License-Identifier: MPL-2.0
//! Mobile menu and cart dropdown visibility.

use crate::application::port::{Attribute, Node, ViewBinder};

pub const MOBILE_MENU_ACTIVE_CLASS: &str = "nav__mobile-menu--active";
pub const MOBILE_OVERLAY_ACTIVE_CLASS: &str = "nav__mobile-overlay--active";
pub const CART_DROPDOWN_ACTIVE_CLASS: &str = "cart-dropdown--active";

/// Where a document click landed, as far as the dropdown cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the cart dropdown panel.
    CartDropdown,
    /// On the cart toggle button.
    CartButton,
    Elsewhere,
}

/// Open flags of the two navigation overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    mobile_menu_open: bool,
    cart_dropdown_open: bool,
}

impl State {
    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    #[must_use]
    pub fn is_cart_dropdown_open(&self) -> bool {
        self.cart_dropdown_open
    }

    pub fn toggle_mobile_menu<V: ViewBinder + ?Sized>(&mut self, view: &mut V) {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.sync_mobile_menu(view);
    }

    pub fn close_mobile_menu<V: ViewBinder + ?Sized>(&mut self, view: &mut V) {
        self.mobile_menu_open = false;
        self.sync_mobile_menu(view);
    }

    pub fn toggle_cart_dropdown<V: ViewBinder + ?Sized>(&mut self, view: &mut V) {
        self.cart_dropdown_open = !self.cart_dropdown_open;
        self.sync_cart_dropdown(view);
    }

    pub fn close_cart_dropdown<V: ViewBinder + ?Sized>(&mut self, view: &mut V) {
        self.cart_dropdown_open = false;
        self.sync_cart_dropdown(view);
    }

    /// Closes the dropdown when a click lands outside it and its toggle.
    pub fn handle_document_click<V: ViewBinder + ?Sized>(&mut self, view: &mut V, target: ClickTarget) {
        if self.cart_dropdown_open && target == ClickTarget::Elsewhere {
            self.close_cart_dropdown(view);
        }
    }

    fn sync_mobile_menu<V: ViewBinder + ?Sized>(&self, view: &mut V) {
        let open = self.mobile_menu_open;
        view.set_class(Node::MobileMenu, MOBILE_MENU_ACTIVE_CLASS, open);
        view.set_class(Node::MobileOverlay, MOBILE_OVERLAY_ACTIVE_CLASS, open);
        view.set_attribute(Node::MobileMenuButton, Attribute::AriaExpanded, bool_attr(open));
        view.set_attribute(Node::MobileMenu, Attribute::AriaHidden, bool_attr(!open));
        view.set_scroll_locked(open);
        if open {
            view.focus(Node::MobileMenuFirstLink);
        } else {
            view.focus(Node::MobileMenuButton);
        }
        log::debug!("mobile menu: open={open}");
    }

    fn sync_cart_dropdown<V: ViewBinder + ?Sized>(&self, view: &mut V) {
        let open = self.cart_dropdown_open;
        view.set_class(Node::CartDropdown, CART_DROPDOWN_ACTIVE_CLASS, open);
        view.set_attribute(Node::CartDropdown, Attribute::AriaHidden, bool_attr(!open));
        log::debug!("cart dropdown: open={open}");
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
