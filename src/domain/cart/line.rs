// SPDX-License-Identifier: MPL-2.0
//! Cart line and quantity value types.

use crate::domain::product::{Price, Product, ProductId};
use std::num::NonZeroU32;

/// Positive item count. Zero is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Returns `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.get()))
    }
}

/// One aggregated product entry in the cart.
///
/// Name, price and image are snapshots taken when the line was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product_id: ProductId,
    name: String,
    unit_price: Price,
    image: String,
    quantity: Quantity,
}

impl CartLine {
    #[must_use]
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Price,
        image: impl Into<String>,
        quantity: Quantity,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            unit_price,
            image: image.into(),
            quantity,
        }
    }

    /// Captures the product's current name, price and cover thumbnail.
    #[must_use]
    pub fn snapshot(product: &Product, quantity: Quantity) -> Self {
        Self::new(
            product.id(),
            product.name(),
            product.price(),
            product.cover_thumbnail(),
            quantity,
        )
    }

    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity.get())
    }

    pub(super) fn add_quantity(&mut self, amount: Quantity) {
        self.quantity = self.quantity.saturating_add(amount);
    }
}
