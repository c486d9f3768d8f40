// SPDX-License-Identifier: MPL-2.0
//! Product definition errors.

use std::fmt;

/// Reasons a product definition cannot back a gallery page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product has no images at all.
    NoImages,

    /// Thumbnail and full-size lists differ in length.
    ImageCountMismatch {
        /// Number of thumbnail references.
        thumbnails: usize,
        /// Number of full-size references.
        full_size: usize,
    },

    /// The product name is blank.
    EmptyName,
}

impl fmt::Display for ProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductError::NoImages => write!(f, "product has no images"),
            ProductError::ImageCountMismatch {
                thumbnails,
                full_size,
            } => write!(
                f,
                "thumbnail count ({thumbnails}) does not match full-size count ({full_size})"
            ),
            ProductError::EmptyName => write!(f, "product name is empty"),
        }
    }
}

impl std::error::Error for ProductError {}
