// SPDX-License-Identifier: MPL-2.0
//! Product domain types.
//!
//! The page presents exactly one product for the whole session. Its image
//! lists are fixed at construction and shared by the inline gallery and
//! the lightbox.

mod catalog;
mod types;

pub use catalog::featured;
pub use types::{Price, Product, ProductId};
