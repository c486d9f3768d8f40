// SPDX-License-Identifier: MPL-2.0
//! The product featured on the review page.

use super::types::{Price, Product, ProductId};

const IMAGE_COUNT: usize = 4;

/// Returns the featured sneaker product with its four-image gallery.
#[must_use]
pub fn featured() -> Product {
    let thumbnails = (1..=IMAGE_COUNT)
        .map(|n| format!("images/image-product-{n}-thumbnail.jpg"))
        .collect();
    let full_size = (1..=IMAGE_COUNT)
        .map(|n| format!("images/image-product-{n}.jpg"))
        .collect();

    match Product::new(
        ProductId::new(1),
        "Fall Limited Edition Sneakers",
        Price::from_cents(12_500),
        thumbnails,
        full_size,
    ) {
        Ok(product) => product,
        // Both lists are built from IMAGE_COUNT above.
        Err(err) => unreachable!("featured product is malformed: {err}"),
    }
}
