// SPDX-License-Identifier: MPL-2.0
//! Page events and their outcome for the host.

use crate::application::port::CartCommand;
use crate::domain::product::ProductId;
use crate::ui::gallery::GalleryView;
use crate::ui::menus::ClickTarget;
use std::time::Instant;

/// Keys the page reacts to; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Enter" => Key::Enter,
            " " => Key::Space,
            _ => Key::Other,
        }
    }
}

/// Messages consumed by `PageController::update`. The host translates raw
/// input into one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ToggleMobileMenu,
    /// Mobile menu close button or overlay.
    CloseMobileMenu,
    ToggleCartDropdown,
    /// Any click on the document, after the target's own handler.
    DocumentClick(ClickTarget),
    SelectImage {
        index: usize,
        view: GalleryView,
    },
    PreviousImage(GalleryView),
    NextImage(GalleryView),
    /// Key pressed while an inline thumbnail has focus.
    ThumbnailKey {
        index: usize,
        key: Key,
    },
    OpenLightbox,
    /// Lightbox close button or overlay.
    CloseLightbox,
    DecreaseQuantity,
    IncreaseQuantity,
    /// The quantity input was edited; carries the new raw value.
    QuantityInput(String),
    QuantityBlur,
    AddToCart,
    RemoveFromCart(ProductId),
    Checkout,
    /// Document-level key press.
    KeyDown(Key),
    /// Horizontal touch position on the gallery surface.
    TouchStart(f32),
    TouchEnd(f32),
    /// The viewport was resized; the new width is read from the view.
    Resize,
    Tick(Instant), // Drives deferred resets
}

impl From<CartCommand> for Message {
    fn from(command: CartCommand) -> Self {
        match command {
            CartCommand::Remove(id) => Message::RemoveFromCart(id),
            CartCommand::Checkout => Message::Checkout,
        }
    }
}

/// Whether the host should let the browser's default action run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    PreventDefault,
}
