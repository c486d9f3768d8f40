// SPDX-License-Identifier: MPL-2.0
//! Core product value types.

use crate::domain::error::ProductError;
use std::fmt;

/// Stable identifier of a product, used as the cart line key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary amount in integer cents.
///
/// Keeping cents avoids float drift when multiplying by a quantity; the
/// two-decimal rendering is exact by construction.
///
/// # Example
///
/// ```
/// use product_page::domain::product::Price;
///
/// let price = Price::from_cents(12_500);
/// assert_eq!(price.to_string(), "$125.00");
/// assert_eq!(price.times(3).to_string(), "$375.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(u64);

impl Price {
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Converts a decimal amount, rounding to the nearest cent.
    ///
    /// Negative and non-finite amounts collapse to zero.
    #[must_use]
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            return Self(0);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cents = (amount * 100.0).round() as u64;
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// The single product shown on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    /// Thumbnail-resolution references, used by the inline gallery.
    thumbnails: Vec<String>,
    /// Full-resolution references, used by the lightbox. Same order as `thumbnails`.
    full_size: Vec<String>,
}

impl Product {
    /// Builds a product, checking that both image lists line up.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] when the name is blank, there are no
    /// images, or the two image lists differ in length.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        thumbnails: Vec<String>,
        full_size: Vec<String>,
    ) -> Result<Self, ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        if thumbnails.is_empty() {
            return Err(ProductError::NoImages);
        }
        if thumbnails.len() != full_size.len() {
            return Err(ProductError::ImageCountMismatch {
                thumbnails: thumbnails.len(),
                full_size: full_size.len(),
            });
        }
        Ok(Self {
            id,
            name,
            price,
            thumbnails,
            full_size,
        })
    }

    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Number of images; always at least one.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.thumbnails.len()
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[String] {
        &self.thumbnails
    }

    #[must_use]
    pub fn full_size_images(&self) -> &[String] {
        &self.full_size
    }

    /// Thumbnail snapshotted into new cart lines.
    #[must_use]
    pub fn cover_thumbnail(&self) -> &str {
        &self.thumbnails[0]
    }
}
