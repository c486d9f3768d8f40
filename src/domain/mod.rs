// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core business types.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Nothing here knows about views, storage or timers.
//!
//! # Modules
//!
//! - [`cart`]: Cart aggregate ([`Cart`](cart::Cart), [`CartLine`](cart::CartLine),
//!   [`Quantity`](cart::Quantity))
//! - [`error`]: Domain error types ([`ProductError`](error::ProductError))
//! - [`product`]: Product types ([`Product`](product::Product), [`Price`](product::Price))
//! - [`ui`]: UI value objects ([`Breakpoint`](ui::Breakpoint),
//!   [`SwipeThreshold`](ui::SwipeThreshold), [`FeedbackDelay`](ui::FeedbackDelay))

pub mod cart;
pub mod error;
pub mod product;
pub mod ui;
