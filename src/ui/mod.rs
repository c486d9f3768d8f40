// SPDX-License-Identifier: MPL-2.0
//! Page components.
//!
//! Each component keeps its own small piece of state and writes through a
//! [`ViewBinder`](crate::application::port::ViewBinder); none of them holds
//! element references.
//!
//! # Components
//!
//! - [`gallery`] - Inline gallery, lightbox and swipe tracking over one image cursor
//! - [`quantity`] - Bounded quantity stepper with inline validation
//! - [`cart`] - Cart badge and dropdown panel rendering
//! - [`menus`] - Mobile menu and cart dropdown visibility
//! - [`announcer`] - Screen-reader live region and initial focus

pub mod announcer;
pub mod cart;
pub mod gallery;
pub mod menus;
pub mod quantity;
