// SPDX-License-Identifier: MPL-2.0
//! Product image gallery.
//!
//! One cursor drives two views: the inline gallery (thumbnail-resolution
//! images) and the lightbox (full-resolution images). Navigating refreshes
//! only the view it was issued from; opening the lightbox refreshes the
//! modal to the shared cursor.

pub mod lightbox;
pub mod swipe;

pub use lightbox::Lightbox;
pub use swipe::{SwipeDirection, SwipeTracker};

use crate::application::port::{Attribute, Node, ViewBinder};
use crate::application::query::{GalleryNavigator, NavigationInfo};
use crate::domain::product::Product;
use crate::domain::ui::{Breakpoint, SwipeThreshold};
use crate::i18n::I18n;
use crate::ui::announcer::Announcement;

/// Which of the two image viewers a navigation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryView {
    #[default]
    Inline,
    Lightbox,
}

impl GalleryView {
    fn image_node(self) -> Node {
        match self {
            GalleryView::Inline => Node::GalleryImage,
            GalleryView::Lightbox => Node::LightboxImage,
        }
    }

    fn thumbnail_node(self, index: usize) -> Node {
        match self {
            GalleryView::Inline => Node::GalleryThumbnail(index),
            GalleryView::Lightbox => Node::LightboxThumbnail(index),
        }
    }

    fn active_class(self) -> &'static str {
        match self {
            GalleryView::Inline => "gallery__thumbnail--active",
            GalleryView::Lightbox => "lightbox__thumbnail--active",
        }
    }

    fn images(self, product: &Product) -> &[String] {
        match self {
            GalleryView::Inline => product.thumbnails(),
            GalleryView::Lightbox => product.full_size_images(),
        }
    }
}

/// Data needed to render gallery content.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub product: &'a Product,
    pub i18n: &'a I18n,
}

/// Gallery cursor plus the lightbox and swipe sub-states.
#[derive(Debug, Clone)]
pub struct State {
    navigator: GalleryNavigator,
    lightbox: Lightbox,
    swipe: SwipeTracker,
}

impl State {
    #[must_use]
    pub fn new(image_count: usize, breakpoint: Breakpoint, swipe_threshold: SwipeThreshold) -> Self {
        Self {
            navigator: GalleryNavigator::new(image_count),
            lightbox: Lightbox::new(breakpoint),
            swipe: SwipeTracker::new(swipe_threshold),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        self.navigator.navigation_info()
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_open()
    }

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.lightbox.breakpoint()
    }

    /// Jumps to `index`. Out-of-range indices are ignored and produce no
    /// announcement.
    pub fn select<V: ViewBinder + ?Sized>(
        &mut self,
        view: &mut V,
        ctx: ViewContext<'_>,
        index: usize,
        target: GalleryView,
    ) -> Option<Announcement> {
        if self.navigator.select(index).is_none() {
            log::debug!("gallery: ignoring out-of-range index {index}");
            return None;
        }
        Some(self.refresh(view, ctx, target))
    }

    pub fn previous<V: ViewBinder + ?Sized>(
        &mut self,
        view: &mut V,
        ctx: ViewContext<'_>,
        target: GalleryView,
    ) -> Announcement {
        self.navigator.navigate_previous();
        self.refresh(view, ctx, target)
    }

    pub fn next<V: ViewBinder + ?Sized>(
        &mut self,
        view: &mut V,
        ctx: ViewContext<'_>,
        target: GalleryView,
    ) -> Announcement {
        self.navigator.navigate_next();
        self.refresh(view, ctx, target)
    }

    /// Points the addressed view's main image at the cursor and moves the
    /// thumbnail highlight.
    pub fn render<V: ViewBinder + ?Sized>(
        &self,
        view: &mut V,
        ctx: ViewContext<'_>,
        target: GalleryView,
    ) {
        let current = self.navigator.current_index();
        let position = (current + 1).to_string();
        let alt = ctx.i18n.tr_with_args(
            "gallery-image-alt",
            &[("name", ctx.product.name()), ("index", position.as_str())],
        );
        if let Some(src) = target.images(ctx.product).get(current) {
            view.set_image(target.image_node(), src, &alt);
        }

        for index in 0..self.navigator.len() {
            let active = index == current;
            let node = target.thumbnail_node(index);
            view.set_class(node, target.active_class(), active);
            view.set_attribute(node, Attribute::AriaSelected, if active { "true" } else { "false" });
        }
    }

    /// Opens the lightbox on the current image. Returns whether it opened.
    pub fn open_lightbox<V: ViewBinder + ?Sized>(&mut self, view: &mut V, ctx: ViewContext<'_>) -> bool {
        if !self.lightbox.open(view) {
            return false;
        }
        self.render(view, ctx, GalleryView::Lightbox);
        true
    }

    pub fn close_lightbox<V: ViewBinder + ?Sized>(&mut self, view: &mut V) {
        self.lightbox.close(view);
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Completes a touch on the inline gallery, navigating it when the
    /// gesture counts as a swipe.
    pub fn touch_end<V: ViewBinder + ?Sized>(
        &mut self,
        view: &mut V,
        ctx: ViewContext<'_>,
        x: f32,
    ) -> Option<Announcement> {
        match self.swipe.end(x)? {
            SwipeDirection::Next => Some(self.next(view, ctx, GalleryView::Inline)),
            SwipeDirection::Previous => Some(self.previous(view, ctx, GalleryView::Inline)),
        }
    }

    fn refresh<V: ViewBinder + ?Sized>(
        &self,
        view: &mut V,
        ctx: ViewContext<'_>,
        target: GalleryView,
    ) -> Announcement {
        self.render(view, ctx, target);
        let info = self.navigator.navigation_info();
        log::debug!("gallery: image {} of {} ({target:?})", info.position(), info.total_count);
        Announcement::new("gallery-image-selected")
            .with_arg("index", info.position())
            .with_arg("count", info.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::product;
    use crate::infrastructure::RetainedView;

    fn fixture() -> (State, RetainedView, Product, I18n) {
        let product = product::featured();
        let view = RetainedView::product_page(product.image_count());
        let state = State::new(product.image_count(), Breakpoint::default(), SwipeThreshold::default());
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        (state, view, product, i18n)
    }

    #[test]
    fn select_updates_inline_image_and_thumbnails() {
        let (mut state, mut view, product, i18n) = fixture();
        let ctx = ViewContext { product: &product, i18n: &i18n };

        let announcement = state.select(&mut view, ctx, 2, GalleryView::Inline);
        assert_eq!(
            announcement.map(|a| a.resolve(&i18n)).as_deref(),
            Some("Image 3 of 4 selected")
        );
        assert_eq!(
            view.image(Node::GalleryImage),
            Some((
                "images/image-product-3-thumbnail.jpg",
                "Fall Limited Edition Sneakers - View 3"
            ))
        );
        assert!(view.has_class(Node::GalleryThumbnail(2), "gallery__thumbnail--active"));
        assert!(!view.has_class(Node::GalleryThumbnail(0), "gallery__thumbnail--active"));
        assert_eq!(
            view.attribute(Node::GalleryThumbnail(0), Attribute::AriaSelected).as_deref(),
            Some("false")
        );
        // The lightbox is untouched by an inline navigation.
        assert_eq!(view.image(Node::LightboxImage), Some(("", "")));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let (mut state, mut view, product, i18n) = fixture();
        let ctx = ViewContext { product: &product, i18n: &i18n };
        assert!(state.select(&mut view, ctx, 9, GalleryView::Inline).is_none());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn lightbox_navigation_uses_full_size_images() {
        let (mut state, mut view, product, i18n) = fixture();
        let ctx = ViewContext { product: &product, i18n: &i18n };

        state.previous(&mut view, ctx, GalleryView::Lightbox);
        assert_eq!(state.current_index(), 3);
        assert_eq!(
            view.image(Node::LightboxImage).map(|(src, _)| src),
            Some("images/image-product-4.jpg")
        );
        assert!(view.has_class(Node::LightboxThumbnail(3), "lightbox__thumbnail--active"));
    }

    #[test]
    fn opening_lightbox_renders_current_image() {
        let (mut state, mut view, product, i18n) = fixture();
        let ctx = ViewContext { product: &product, i18n: &i18n };
        state.next(&mut view, ctx, GalleryView::Inline);

        assert!(state.open_lightbox(&mut view, ctx));
        assert_eq!(
            view.image(Node::LightboxImage).map(|(src, _)| src),
            Some("images/image-product-2.jpg")
        );
    }

    #[test]
    fn swipe_navigates_inline_gallery() {
        let (mut state, mut view, product, i18n) = fixture();
        let ctx = ViewContext { product: &product, i18n: &i18n };

        state.touch_start(200.0);
        assert!(state.touch_end(&mut view, ctx, 100.0).is_some());
        assert_eq!(state.current_index(), 1);

        state.touch_start(200.0);
        assert!(state.touch_end(&mut view, ctx, 230.0).is_none());
        assert_eq!(state.current_index(), 1);

        state.touch_start(100.0);
        state.touch_end(&mut view, ctx, 300.0);
        assert_eq!(state.current_index(), 0);
    }
}
