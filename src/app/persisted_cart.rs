// SPDX-License-Identifier: MPL-2.0
//! Cart persistence in JSON format.
//!
//! The whole cart is written as one JSON array under a single storage key,
//! overwritten on every mutation:
//!
//! ```json
//! [{"id":1,"name":"Fall Limited Edition Sneakers","price":125.0,"image":"images/image-product-1-thumbnail.jpg","quantity":2}]
//! ```
//!
//! A missing key yields an empty cart and malformed data is logged and
//! discarded. Only an unreadable storage is reported as an error.

use crate::application::port::KeyValueStore;
use crate::domain::cart::{Cart, CartLine, Quantity};
use crate::domain::product::{Price, ProductId};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One cart line as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLine {
    pub id: u32,
    pub name: String,
    /// Unit price in currency units, e.g. `125.0`.
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl From<&CartLine> for StoredLine {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product_id().value(),
            name: line.name().to_string(),
            price: line.unit_price().as_decimal(),
            image: line.image().to_string(),
            quantity: line.quantity().get(),
        }
    }
}

impl StoredLine {
    /// Converts back into a cart line. Lines stored with a zero quantity
    /// have no valid representation and yield `None`.
    #[must_use]
    pub fn into_line(self) -> Option<CartLine> {
        let quantity = Quantity::new(self.quantity)?;
        Some(CartLine::new(
            ProductId::new(self.id),
            self.name,
            Price::from_decimal(self.price),
            self.image,
            quantity,
        ))
    }
}

/// Serializes the cart to its stored JSON form.
pub fn encode(cart: &Cart) -> Result<String> {
    let lines: Vec<StoredLine> = cart.lines().iter().map(StoredLine::from).collect();
    Ok(serde_json::to_string(&lines)?)
}

/// Parses stored JSON back into a cart.
pub fn decode(raw: &str) -> Result<Cart> {
    let stored: Vec<StoredLine> = serde_json::from_str(raw)?;
    let skipped = stored.iter().filter(|line| line.quantity == 0).count();
    if skipped > 0 {
        log::warn!("persisted cart: dropping {skipped} line(s) with zero quantity");
    }
    Ok(Cart::from_lines(stored.into_iter().filter_map(StoredLine::into_line)))
}

/// Loads the cart stored under `key`.
///
/// Returns an empty cart when nothing is stored or when the stored value is
/// malformed.
///
/// # Errors
///
/// Returns an error if the storage itself cannot be read.
pub fn load_cart<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> Result<Cart> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(Cart::new());
    };

    Ok(decode(&raw).unwrap_or_else(|err| {
        log::warn!("persisted cart: discarding malformed data: {err}");
        Cart::new()
    }))
}

/// Overwrites the stored cart under `key`.
///
/// # Errors
///
/// Returns an error if serialization or the storage write fails.
pub fn save_cart<S: KeyValueStore + ?Sized>(storage: &mut S, key: &str, cart: &Cart) -> Result<()> {
    let raw = encode(cart)?;
    storage.set_item(key, &raw)?;
    Ok(())
}
