// SPDX-License-Identifier: MPL-2.0
//! View binder port definition.
//!
//! [`ViewBinder`] is the controller's only handle on the rendered page. It
//! exposes the handful of element operations the page needs (text, value,
//! classes, attributes, focus) addressed by [`Node`] rather than by
//! selector, so the controller never holds element references itself.
//!
//! Cart rows are handed over as plain data. Each row carries the
//! [`CartCommand`] its removal control must emit; the view turns a click
//! into that command and the host feeds it back as a message.

use crate::domain::product::ProductId;

/// Addressable page elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// Main content region, focused once at startup.
    MainContent,
    /// Polite live region used for screen-reader announcements.
    Announcements,

    MobileMenuButton,
    MobileMenu,
    MobileOverlay,
    /// First link inside the mobile menu.
    MobileMenuFirstLink,

    CartButton,
    /// Item-count badge on the cart button.
    CartCount,
    CartDropdown,
    /// Placeholder shown when the cart has no lines.
    CartEmpty,
    /// Container the cart rows are rendered into.
    CartItems,

    /// Clickable inline gallery surface (lightbox trigger, swipe area).
    GalleryMain,
    GalleryImage,
    GalleryThumbnail(usize),

    QuantityInput,
    AddToCartButton,
    /// Inline quantity error text.
    ErrorMessage,

    Lightbox,
    LightboxImage,
    LightboxCloseButton,
    LightboxThumbnail(usize),
}

/// Element attributes the controller reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    AriaExpanded,
    AriaHidden,
    AriaSelected,
    AriaLabel,
    AriaLive,
    TabIndex,
    Min,
    Max,
}

impl Attribute {
    /// Markup name of the attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Attribute::AriaExpanded => "aria-expanded",
            Attribute::AriaHidden => "aria-hidden",
            Attribute::AriaSelected => "aria-selected",
            Attribute::AriaLabel => "aria-label",
            Attribute::AriaLive => "aria-live",
            Attribute::TabIndex => "tabindex",
            Attribute::Min => "min",
            Attribute::Max => "max",
        }
    }
}

/// Action a rendered cart control emits when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartCommand {
    /// Remove the line for this product.
    Remove(ProductId),
    /// Proceed to checkout.
    Checkout,
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub image: String,
    pub name: String,
    /// Unit price and quantity, e.g. `$125.00 x 3`.
    pub pricing: String,
    /// Line total, e.g. `$375.00`.
    pub total: String,
    /// Accessible label of the removal control.
    pub remove_label: String,
    /// Command the removal control emits.
    pub remove: CartCommand,
}

/// Trailing checkout control appended after the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutControl {
    pub label: String,
    pub command: CartCommand,
}

/// Element-level access to the rendered page.
///
/// Operations on elements the page does not contain are no-ops and reads
/// return `None`.
pub trait ViewBinder {
    /// Current value of a form control.
    fn value(&self, node: Node) -> Option<String>;

    fn set_value(&mut self, node: Node, value: &str);

    fn attribute(&self, node: Node, attribute: Attribute) -> Option<String>;

    fn set_attribute(&mut self, node: Node, attribute: Attribute, value: &str);

    fn remove_attribute(&mut self, node: Node, attribute: Attribute);

    fn set_text(&mut self, node: Node, text: &str);

    /// Points an image element at `src` with the given alt text.
    fn set_image(&mut self, node: Node, src: &str, alt: &str);

    /// Adds (`enabled`) or removes a styling class.
    fn set_class(&mut self, node: Node, class: &str, enabled: bool);

    /// Shows or hides an element from layout.
    fn set_displayed(&mut self, node: Node, displayed: bool);

    fn focus(&mut self, node: Node);

    /// Locks or restores page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Replaces the cart item list. An empty slice with no checkout clears it.
    fn render_cart_items(&mut self, rows: &[CartRow], checkout: Option<&CheckoutControl>);

    /// Presents a blocking acknowledgement to the user.
    fn alert(&mut self, message: &str);

    /// Current viewport width in logical pixels.
    fn viewport_width(&self) -> u32;
}
