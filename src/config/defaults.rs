// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the page. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Desktop breakpoint and swipe threshold
//! - **Timing**: Announcement and success-flash lifetimes
//! - **Quantity**: Stepper bounds used when the input declares none
//! - **Storage**: Cart storage key

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Viewport width at which the desktop layout (and the lightbox) starts.
pub const DEFAULT_DESKTOP_BREAKPOINT_PX: u32 = 768;

/// Smallest accepted desktop breakpoint.
pub const MIN_DESKTOP_BREAKPOINT_PX: u32 = 320;

/// Largest accepted desktop breakpoint.
pub const MAX_DESKTOP_BREAKPOINT_PX: u32 = 4096;

/// Horizontal travel a touch must exceed to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: u32 = 50;

/// Smallest accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: u32 = 10;

/// Largest accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: u32 = 400;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long announcements and the add-to-cart flash stay up (ms).
pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 1000;

/// Shortest accepted feedback lifetime (ms).
pub const MIN_FEEDBACK_DELAY_MS: u64 = 100;

/// Longest accepted feedback lifetime (ms).
pub const MAX_FEEDBACK_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Quantity Defaults
// ==========================================================================

/// Lower bound when the quantity input has no parseable `min`.
pub const DEFAULT_QUANTITY_MIN: i64 = 0;

/// Upper bound when the quantity input has no parseable `max`.
pub const DEFAULT_QUANTITY_MAX: i64 = 10;

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Key under which the serialized cart is stored.
pub const DEFAULT_CART_KEY: &str = "cart";
