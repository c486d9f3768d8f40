// SPDX-License-Identifier: MPL-2.0
//! Page controller state and startup.
//!
//! [`PageController`] owns every piece of page state (cart, gallery cursor,
//! overlay flags, pending timers) and reaches the outside world only
//! through the injected view, storage and clock. Events come in as
//! [`Message`]s through [`PageController::update`].

mod deferred;
mod message;
pub mod paths;
pub mod persisted_cart;
mod update;

pub use deferred::{Deferred, DeferredQueue};
pub use message::{Key, Message, Propagation};

use crate::application::port::{Clock, KeyValueStore, ViewBinder};
use crate::config::Config;
use crate::domain::cart::Cart;
use crate::domain::product::Product;
use crate::domain::ui::FeedbackDelay;
use crate::error::Result;
use crate::i18n::I18n;
use crate::ui::announcer::Announcer;
use crate::ui::{cart, gallery, menus};
use std::time::Instant;

/// Single-page controller generic over its view, storage and clock.
pub struct PageController<V, S, C> {
    product: Product,
    i18n: I18n,
    view: V,
    storage: S,
    clock: C,
    cart: Cart,
    cart_key: String,
    gallery: gallery::State,
    menus: menus::State,
    announcer: Announcer,
    success_flash: FeedbackDelay,
    deferred: DeferredQueue,
}

impl<V: ViewBinder, S: KeyValueStore, C: Clock> PageController<V, S, C> {
    /// Builds the controller, restores the stored cart and renders it, then
    /// moves focus to the main content.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read at all. Missing or
    /// malformed cart data is not an error.
    pub fn mount(
        product: Product,
        config: &Config,
        i18n: I18n,
        mut view: V,
        storage: S,
        clock: C,
    ) -> Result<Self> {
        let cart_key = config.storage.cart_key.clone();
        let cart = persisted_cart::load_cart(&storage, &cart_key)?;

        let announcer = Announcer::new(config.announcement_delay());
        cart::render(&mut view, &cart, &i18n);
        announcer.set_initial_focus(&mut view);

        log::info!(
            "page mounted: {} image(s), {} cart line(s), locale {}",
            product.image_count(),
            cart.len(),
            i18n.current_locale()
        );

        Ok(Self {
            gallery: gallery::State::new(
                product.image_count(),
                config.breakpoint(),
                config.swipe_threshold(),
            ),
            product,
            i18n,
            view,
            storage,
            clock,
            cart,
            cart_key,
            menus: menus::State::default(),
            announcer,
            success_flash: config.success_flash_delay(),
            deferred: DeferredQueue::new(),
        })
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable view access for hosts that update viewport metrics.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn current_image_index(&self) -> usize {
        self.gallery.current_index()
    }

    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.menus.is_mobile_menu_open()
    }

    #[must_use]
    pub fn is_cart_dropdown_open(&self) -> bool {
        self.menus.is_cart_dropdown_open()
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.gallery.is_lightbox_open()
    }

    /// When the host should next send a `Tick`, if anything is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deferred.next_due()
    }
}

/// Mounts the page, logging a failure instead of propagating it.
///
/// Returns `None` when mounting failed; the page then stays inert.
pub fn start<V: ViewBinder, S: KeyValueStore, C: Clock>(
    product: Product,
    config: &Config,
    i18n: I18n,
    view: V,
    storage: S,
    clock: C,
) -> Option<PageController<V, S, C>> {
    match PageController::mount(product, config, i18n, view, storage, clock) {
        Ok(controller) => Some(controller),
        Err(err) => {
            log::error!("failed to initialize product page: {err}");
            None
        }
    }
}
