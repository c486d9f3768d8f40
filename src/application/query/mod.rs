// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! # Available Services
//!
//! - [`navigation`]: Gallery image cursor (`GalleryNavigator`)

pub mod navigation;

// Re-export main types
pub use navigation::{GalleryNavigator, NavigationInfo};
