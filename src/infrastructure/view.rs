// SPDX-License-Identifier: MPL-2.0
//! Retained in-memory view.
//!
//! [`RetainedView`] keeps the state every page element would have after the
//! controller's writes: text, value, classes, attributes, visibility,
//! focus. Hosts without a rendering surface use it directly; renderers can
//! read it to paint a frame.

use crate::application::port::{Attribute, CartCommand, CartRow, CheckoutControl, Node, ViewBinder};
use std::collections::{BTreeMap, BTreeSet};

/// Width reported until a host says otherwise (a desktop window).
const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Recorded state of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub value: String,
    pub src: String,
    pub alt: String,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<Attribute, String>,
    pub displayed: bool,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            text: String::new(),
            value: String::new(),
            src: String::new(),
            alt: String::new(),
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            displayed: true,
        }
    }
}

/// In-memory element tree of the product page.
#[derive(Debug, Clone)]
pub struct RetainedView {
    elements: BTreeMap<Node, ElementState>,
    focused: Option<Node>,
    scroll_locked: bool,
    cart_rows: Vec<CartRow>,
    checkout: Option<CheckoutControl>,
    alerts: Vec<String>,
    viewport_width: u32,
}

impl RetainedView {
    /// Creates a view with no elements at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: BTreeMap::new(),
            focused: None,
            scroll_locked: false,
            cart_rows: Vec::new(),
            checkout: None,
            alerts: Vec::new(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }

    /// Creates the full page markup with `image_count` thumbnails in both
    /// the inline gallery and the lightbox.
    ///
    /// The quantity input starts at `0` with bounds `0..=10`; overlays start
    /// hidden.
    #[must_use]
    pub fn product_page(image_count: usize) -> Self {
        let mut view = Self::empty();
        let fixed = [
            Node::MainContent,
            Node::Announcements,
            Node::MobileMenuButton,
            Node::MobileMenu,
            Node::MobileOverlay,
            Node::MobileMenuFirstLink,
            Node::CartButton,
            Node::CartCount,
            Node::CartDropdown,
            Node::CartEmpty,
            Node::CartItems,
            Node::GalleryMain,
            Node::GalleryImage,
            Node::QuantityInput,
            Node::AddToCartButton,
            Node::ErrorMessage,
            Node::Lightbox,
            Node::LightboxImage,
            Node::LightboxCloseButton,
        ];
        for node in fixed {
            view.insert(node);
        }
        for index in 0..image_count {
            view.insert(Node::GalleryThumbnail(index));
            view.insert(Node::LightboxThumbnail(index));
        }

        view.set_value(Node::QuantityInput, "0");
        view.set_attribute(Node::QuantityInput, Attribute::Min, "0");
        view.set_attribute(Node::QuantityInput, Attribute::Max, "10");
        view.set_attribute(Node::MobileMenuButton, Attribute::AriaExpanded, "false");
        view.set_attribute(Node::MobileMenu, Attribute::AriaHidden, "true");
        view.set_attribute(Node::CartDropdown, Attribute::AriaHidden, "true");
        view.set_attribute(Node::Lightbox, Attribute::AriaHidden, "true");
        view.set_attribute(Node::ErrorMessage, Attribute::AriaLive, "polite");
        view
    }

    /// Adds an element in its default state.
    pub fn insert(&mut self, node: Node) {
        self.elements.entry(node).or_default();
    }

    /// Removes an element; later writes to it become no-ops.
    pub fn remove(&mut self, node: Node) {
        self.elements.remove(&node);
        if self.focused == Some(node) {
            self.focused = None;
        }
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    #[must_use]
    pub fn element(&self, node: Node) -> Option<&ElementState> {
        self.elements.get(&node)
    }

    /// Text content, empty for missing elements.
    #[must_use]
    pub fn text(&self, node: Node) -> &str {
        self.element(node).map_or("", |e| e.text.as_str())
    }

    #[must_use]
    pub fn has_class(&self, node: Node, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.classes.contains(class))
    }

    #[must_use]
    pub fn is_displayed(&self, node: Node) -> bool {
        self.element(node).is_some_and(|e| e.displayed)
    }

    /// `(src, alt)` of an image element.
    #[must_use]
    pub fn image(&self, node: Node) -> Option<(&str, &str)> {
        self.element(node).map(|e| (e.src.as_str(), e.alt.as_str()))
    }

    #[must_use]
    pub fn focused(&self) -> Option<Node> {
        self.focused
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn cart_rows(&self) -> &[CartRow] {
        &self.cart_rows
    }

    #[must_use]
    pub fn checkout(&self) -> Option<&CheckoutControl> {
        self.checkout.as_ref()
    }

    /// Messages shown via [`ViewBinder::alert`], oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Command emitted by activating the removal control of row `index`.
    #[must_use]
    pub fn remove_command(&self, index: usize) -> Option<CartCommand> {
        self.cart_rows.get(index).map(|row| row.remove)
    }
}

impl Default for RetainedView {
    fn default() -> Self {
        Self::empty()
    }
}

impl ViewBinder for RetainedView {
    fn value(&self, node: Node) -> Option<String> {
        self.element(node).map(|e| e.value.clone())
    }

    fn set_value(&mut self, node: Node, value: &str) {
        if let Some(element) = self.elements.get_mut(&node) {
            element.value = value.to_string();
        }
    }

    fn attribute(&self, node: Node, attribute: Attribute) -> Option<String> {
        self.element(node)
            .and_then(|e| e.attributes.get(&attribute))
            .cloned()
    }

    fn set_attribute(&mut self, node: Node, attribute: Attribute, value: &str) {
        if let Some(element) = self.elements.get_mut(&node) {
            element.attributes.insert(attribute, value.to_string());
        }
    }

    fn remove_attribute(&mut self, node: Node, attribute: Attribute) {
        if let Some(element) = self.elements.get_mut(&node) {
            element.attributes.remove(&attribute);
        }
    }

    fn set_text(&mut self, node: Node, text: &str) {
        if let Some(element) = self.elements.get_mut(&node) {
            element.text = text.to_string();
        }
    }

    fn set_image(&mut self, node: Node, src: &str, alt: &str) {
        if let Some(element) = self.elements.get_mut(&node) {
            element.src = src.to_string();
            element.alt = alt.to_string();
        }
    }

    fn set_class(&mut self, node: Node, class: &str, enabled: bool) {
        if let Some(element) = self.elements.get_mut(&node) {
            if enabled {
                element.classes.insert(class.to_string());
            } else {
                element.classes.remove(class);
            }
        }
    }

    fn set_displayed(&mut self, node: Node, displayed: bool) {
        if let Some(element) = self.elements.get_mut(&node) {
            element.displayed = displayed;
        }
    }

    fn focus(&mut self, node: Node) {
        if self.elements.contains_key(&node) {
            self.focused = Some(node);
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn render_cart_items(&mut self, rows: &[CartRow], checkout: Option<&CheckoutControl>) {
        if !self.elements.contains_key(&Node::CartItems) {
            return;
        }
        self.cart_rows = rows.to_vec();
        self.checkout = checkout.cloned();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }
}
