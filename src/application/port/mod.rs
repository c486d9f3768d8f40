// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The page controller talks to the outside world only through these
//! traits, so its logic runs the same against a browser shim, a headless
//! view, or a test double.
//!
//! # Available Ports
//!
//! - [`clock`]: Monotonic time source for deferred feedback
//! - [`storage`]: Durable key-value storage (local storage stand-in)
//! - [`view`]: View binder over the rendered page elements
//!
//! # Design Notes
//!
//! - Calls addressing an element the view does not have are silent no-ops
//! - Storage is synchronous; a write completes before the next render
//! - No `async fn`: every handler runs to completion on the event thread

pub mod clock;
pub mod storage;
pub mod view;

pub use clock::Clock;
pub use storage::{KeyValueStore, StorageError};
pub use view::{Attribute, CartCommand, CartRow, CheckoutControl, Node, ViewBinder};
