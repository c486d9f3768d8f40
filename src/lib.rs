// SPDX-License-Identifier: MPL-2.0
//! `product_page` is the controller behind a single product page: an image
//! gallery with a desktop lightbox, a bounded quantity stepper, a cart
//! persisted to local key-value storage, a mobile slide-out menu and
//! screen-reader announcements.
//!
//! The controller never touches a rendering surface directly. Hosts supply
//! a [`ViewBinder`](application::port::ViewBinder), a
//! [`KeyValueStore`](application::port::KeyValueStore) and a
//! [`Clock`](application::port::Clock), then feed user input in as
//! [`app::Message`] values.
//!
//! ```
//! use product_page::app::{self, Message};
//! use product_page::config::Config;
//! use product_page::domain::product;
//! use product_page::i18n::I18n;
//! use product_page::infrastructure::{MemoryStore, RetainedView, SystemClock};
//!
//! let config = Config::default();
//! let product = product::featured();
//! let view = RetainedView::product_page(product.image_count());
//! let i18n = I18n::new(Some("en-US".to_string()), &config);
//!
//! let mut page = app::start(product, &config, i18n, view, MemoryStore::new(), SystemClock)
//!     .expect("page mounts");
//! page.update(Message::IncreaseQuantity);
//! page.update(Message::AddToCart);
//! assert_eq!(page.cart().total_quantity(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/product_page/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
