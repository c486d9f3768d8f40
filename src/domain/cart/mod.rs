// SPDX-License-Identifier: MPL-2.0
//! Cart aggregate.
//!
//! The cart is an insertion-ordered list of [`CartLine`]s with at most one
//! line per product. Quantities are always positive: a line is removed
//! rather than stored at zero.

mod line;

pub use line::{CartLine, Quantity};

use crate::domain::product::{Product, ProductId};

/// Ordered collection of cart lines keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from previously stored lines.
    ///
    /// Lines sharing a product id are folded into the first occurrence so
    /// the one-line-per-product invariant holds even for hand-edited data.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            match cart.position(line.product_id()) {
                Some(index) => cart.lines[index].add_quantity(line.quantity()),
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Adds `quantity` units of `product`.
    ///
    /// An existing line for the product accumulates; otherwise a new line
    /// snapshots the product's current name, price and cover thumbnail.
    pub fn add(&mut self, product: &Product, quantity: Quantity) -> &CartLine {
        let index = match self.position(product.id()) {
            Some(index) => {
                self.lines[index].add_quantity(quantity);
                index
            }
            None => {
                self.lines.push(CartLine::snapshot(product, quantity));
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    /// Removes the line for `product_id`, returning it if present.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.position(product_id)?;
        Some(self.lines.remove(index))
    }

    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product_id)
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity().get()))
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id() == product_id)
    }
}
