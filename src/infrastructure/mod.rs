// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`clock`]: [`SystemClock`] and the hand-driven [`ManualClock`]
//! - [`storage`]: [`FileStore`] (one JSON file per key) and [`MemoryStore`]
//! - [`view`]: [`RetainedView`], an in-memory element model of the page

pub mod clock;
pub mod storage;
pub mod view;

// Re-export main types for convenience
pub use clock::{ManualClock, SystemClock};
pub use storage::{FileStore, MemoryStore};
pub use view::{ElementState, RetainedView};
