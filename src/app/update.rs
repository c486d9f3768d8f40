// SPDX-License-Identifier: MPL-2.0
//! Message dispatch for the page controller.

use super::deferred::Deferred;
use super::message::{Key, Message, Propagation};
use super::{persisted_cart, PageController};
use crate::application::port::{Clock, KeyValueStore, Node, ViewBinder};
use crate::domain::cart::Quantity;
use crate::domain::product::ProductId;
use crate::ui::announcer::Announcement;
use crate::ui::gallery::{GalleryView, ViewContext};
use crate::ui::{cart, quantity};
use std::time::Instant;

/// Styling hook set on the add-to-cart control after a successful add.
pub const SUCCESS_CLASS: &str = "btn--success";

impl<V: ViewBinder, S: KeyValueStore, C: Clock> PageController<V, S, C> {
    /// Applies one event and reports whether the host should suppress the
    /// browser's default action for it.
    pub fn update(&mut self, message: Message) -> Propagation {
        match message {
            Message::ToggleMobileMenu => self.menus.toggle_mobile_menu(&mut self.view),
            Message::CloseMobileMenu => self.menus.close_mobile_menu(&mut self.view),
            Message::ToggleCartDropdown => self.menus.toggle_cart_dropdown(&mut self.view),
            Message::DocumentClick(target) => {
                self.menus.handle_document_click(&mut self.view, target);
            }
            Message::SelectImage { index, view } => self.select_image(index, view),
            Message::PreviousImage(view) => self.previous_image(view),
            Message::NextImage(view) => self.next_image(view),
            Message::ThumbnailKey { index, key } => return self.handle_thumbnail_key(index, key),
            Message::OpenLightbox => self.open_lightbox(),
            Message::CloseLightbox => self.gallery.close_lightbox(&mut self.view),
            Message::DecreaseQuantity => quantity::decrease(&mut self.view, &self.i18n),
            Message::IncreaseQuantity => quantity::increase(&mut self.view, &self.i18n),
            Message::QuantityInput(raw) => {
                self.view.set_value(Node::QuantityInput, &raw);
                quantity::validate(&mut self.view, &self.i18n);
            }
            Message::QuantityBlur => quantity::validate(&mut self.view, &self.i18n),
            Message::AddToCart => self.add_to_cart(),
            Message::RemoveFromCart(id) => self.remove_from_cart(id),
            Message::Checkout => self.checkout(),
            Message::KeyDown(key) => return self.handle_key(key),
            Message::TouchStart(x) => self.gallery.touch_start(x),
            Message::TouchEnd(x) => {
                let ctx = ViewContext {
                    product: &self.product,
                    i18n: &self.i18n,
                };
                if let Some(announcement) = self.gallery.touch_end(&mut self.view, ctx, x) {
                    self.announce(&announcement);
                }
            }
            Message::Resize => self.handle_resize(),
            Message::Tick(now) => self.run_deferred(now),
        }
        Propagation::Continue
    }

    fn select_image(&mut self, index: usize, target: GalleryView) {
        let ctx = ViewContext {
            product: &self.product,
            i18n: &self.i18n,
        };
        if let Some(announcement) = self.gallery.select(&mut self.view, ctx, index, target) {
            self.announce(&announcement);
        }
    }

    fn previous_image(&mut self, target: GalleryView) {
        let ctx = ViewContext {
            product: &self.product,
            i18n: &self.i18n,
        };
        let announcement = self.gallery.previous(&mut self.view, ctx, target);
        self.announce(&announcement);
    }

    fn next_image(&mut self, target: GalleryView) {
        let ctx = ViewContext {
            product: &self.product,
            i18n: &self.i18n,
        };
        let announcement = self.gallery.next(&mut self.view, ctx, target);
        self.announce(&announcement);
    }

    fn open_lightbox(&mut self) {
        let ctx = ViewContext {
            product: &self.product,
            i18n: &self.i18n,
        };
        self.gallery.open_lightbox(&mut self.view, ctx);
    }

    fn handle_thumbnail_key(&mut self, index: usize, key: Key) -> Propagation {
        match key {
            Key::Enter | Key::Space => {
                self.select_image(index, GalleryView::Inline);
                Propagation::PreventDefault
            }
            _ => Propagation::Continue,
        }
    }

    /// Escape closes the topmost overlay; arrows page the open lightbox.
    fn handle_key(&mut self, key: Key) -> Propagation {
        if key == Key::Escape {
            if self.gallery.is_lightbox_open() {
                self.gallery.close_lightbox(&mut self.view);
            } else if self.menus.is_cart_dropdown_open() {
                self.menus.close_cart_dropdown(&mut self.view);
            } else if self.menus.is_mobile_menu_open() {
                self.menus.close_mobile_menu(&mut self.view);
            }
            return Propagation::Continue;
        }

        if !self.gallery.is_lightbox_open() {
            return Propagation::Continue;
        }
        match key {
            Key::ArrowLeft => {
                self.previous_image(GalleryView::Lightbox);
                Propagation::PreventDefault
            }
            Key::ArrowRight => {
                self.next_image(GalleryView::Lightbox);
                Propagation::PreventDefault
            }
            _ => Propagation::Continue,
        }
    }

    fn handle_resize(&mut self) {
        let desktop = self.gallery.breakpoint().is_desktop(self.view.viewport_width());
        if desktop && self.menus.is_mobile_menu_open() {
            self.menus.close_mobile_menu(&mut self.view);
        }
        if !desktop && self.gallery.is_lightbox_open() {
            self.gallery.close_lightbox(&mut self.view);
        }
    }

    fn add_to_cart(&mut self) {
        let requested = quantity::requested(&self.view);
        let requested = u32::try_from(requested.max(0)).unwrap_or(u32::MAX);
        let Some(amount) = Quantity::new(requested) else {
            quantity::show_error(&mut self.view, &self.i18n.tr("cart-error-zero-quantity"));
            self.view.focus(Node::QuantityInput);
            return;
        };

        let line = self.cart.add(&self.product, amount);
        log::debug!(
            "cart: added {} x {} (line now {})",
            amount.get(),
            self.product.id(),
            line.quantity().get()
        );
        let persisted = self.persist();
        cart::render(&mut self.view, &self.cart, &self.i18n);
        self.view.set_value(Node::QuantityInput, "0");

        if !persisted {
            self.announce(&Announcement::new("page-error"));
            return;
        }
        self.announce(
            &Announcement::new("cart-added")
                .with_arg("quantity", amount.get())
                .with_arg("name", self.product.name()),
        );
        self.view.set_class(Node::AddToCartButton, SUCCESS_CLASS, true);
        let now = self.clock.now();
        self.deferred
            .schedule(now, self.success_flash.as_duration(), Deferred::EndSuccessFlash);
    }

    fn remove_from_cart(&mut self, id: ProductId) {
        let Some(removed) = self.cart.remove(id) else {
            log::debug!("cart: nothing to remove for product {id}");
            return;
        };
        log::debug!("cart: removed product {id}");

        let persisted = self.persist();
        cart::render(&mut self.view, &self.cart, &self.i18n);
        let announcement = if persisted {
            Announcement::new("cart-removed").with_arg("name", removed.name())
        } else {
            Announcement::new("page-error")
        };
        self.announce(&announcement);
    }

    fn checkout(&mut self) {
        self.announce(&Announcement::new("cart-checkout-announce"));
        let message = self.i18n.tr("cart-checkout-alert");
        self.view.alert(&message);
    }

    /// Writes the cart to storage. Returns `false` after logging a failure.
    fn persist(&mut self) -> bool {
        match persisted_cart::save_cart(&mut self.storage, &self.cart_key, &self.cart) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("cart: failed to persist: {err}");
                false
            }
        }
    }

    fn announce(&mut self, announcement: &Announcement) {
        let delay = self.announcer.announce(&mut self.view, &self.i18n, announcement);
        let now = self.clock.now();
        self.deferred.schedule(now, delay, Deferred::ClearAnnouncement);
    }

    fn run_deferred(&mut self, now: Instant) {
        for task in self.deferred.take_due(now) {
            match task {
                Deferred::ClearAnnouncement => self.announcer.clear(&mut self.view),
                Deferred::EndSuccessFlash => {
                    self.view.set_class(Node::AddToCartButton, SUCCESS_CLASS, false);
                }
            }
        }
    }
}
