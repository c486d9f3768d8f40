// SPDX-License-Identifier: MPL-2.0
use product_page::app::{self, Key, Message, PageController, Propagation};
use product_page::application::port::{Attribute, Node, ViewBinder};
use product_page::config::{self, Config};
use product_page::domain::product::{self, ProductId};
use product_page::i18n::I18n;
use product_page::infrastructure::{FileStore, ManualClock, MemoryStore, RetainedView};
use product_page::ui::gallery::GalleryView;
use product_page::ui::menus::ClickTarget;
use std::time::Duration;
use tempfile::tempdir;

type Page = PageController<RetainedView, MemoryStore, ManualClock>;

fn en_us() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

fn mount_with(storage: MemoryStore) -> Page {
    let product = product::featured();
    let view = RetainedView::product_page(product.image_count());
    PageController::mount(product, &Config::default(), en_us(), view, storage, ManualClock::new())
        .expect("page mounts")
}

fn mount() -> Page {
    mount_with(MemoryStore::new())
}

fn set_quantity(page: &mut Page, raw: &str) {
    page.update(Message::QuantityInput(raw.to_string()));
}

fn tick(page: &mut Page, by: Duration) {
    let now = page.clock().advance(by);
    page.update(Message::Tick(now));
}

fn stored_lines(page: &Page) -> Vec<serde_json::Value> {
    let raw = page.storage().item("cart").expect("cart was written");
    serde_json::from_str(raw).expect("stored cart is JSON")
}

#[test]
fn adding_two_to_empty_cart_shows_badge_and_persists_one_line() {
    let mut page = mount();
    page.update(Message::IncreaseQuantity);
    page.update(Message::IncreaseQuantity);
    assert_eq!(page.view().value(Node::QuantityInput).as_deref(), Some("2"));

    page.update(Message::AddToCart);

    assert_eq!(page.cart().len(), 1);
    assert_eq!(page.cart().lines()[0].quantity().get(), 2);
    assert_eq!(page.view().text(Node::CartCount), "2");
    assert!(page.view().has_class(Node::CartCount, "nav__cart-count--visible"));
    assert_eq!(
        page.view().attribute(Node::CartCount, Attribute::AriaLabel).as_deref(),
        Some("2 items in cart")
    );

    let lines = stored_lines(&page);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 2);

    assert_eq!(page.view().value(Node::QuantityInput).as_deref(), Some("0"));
    assert_eq!(
        page.view().text(Node::Announcements),
        "2 Fall Limited Edition Sneakers added to cart"
    );
    assert!(page.view().has_class(Node::AddToCartButton, "btn--success"));
}

#[test]
fn adding_same_product_again_accumulates_into_one_line() {
    let mut page = mount();
    set_quantity(&mut page, "2");
    page.update(Message::AddToCart);
    set_quantity(&mut page, "3");
    page.update(Message::AddToCart);

    assert_eq!(page.cart().len(), 1);
    assert_eq!(page.cart().lines()[0].quantity().get(), 5);
    assert_eq!(page.view().text(Node::CartCount), "5");
    assert_eq!(stored_lines(&page).len(), 1);
    assert_eq!(page.view().cart_rows()[0].pricing, "$125.00 x 5");
    assert_eq!(page.view().cart_rows()[0].total, "$625.00");
}

#[test]
fn zero_quantity_add_is_rejected_without_touching_storage() {
    let mut page = mount();
    page.update(Message::AddToCart);

    assert!(page.cart().is_empty());
    assert_eq!(page.storage().write_count(), 0);
    assert_eq!(
        page.view().text(Node::ErrorMessage),
        "Please select a quantity greater than 0"
    );
    assert!(page.view().has_class(Node::ErrorMessage, "error-message--visible"));
    assert_eq!(page.view().focused(), Some(Node::QuantityInput));
}

#[test]
fn unparseable_quantity_add_is_rejected() {
    let mut page = mount();
    page.view_mut().set_value(Node::QuantityInput, "lots");
    page.update(Message::AddToCart);

    assert!(page.cart().is_empty());
    assert_eq!(page.storage().write_count(), 0);
}

#[test]
fn removing_missing_product_changes_nothing() {
    let mut page = mount();
    set_quantity(&mut page, "1");
    page.update(Message::AddToCart);
    let writes = page.storage().write_count();
    let before = page.cart().clone();

    page.update(Message::RemoveFromCart(ProductId::new(99)));

    assert_eq!(page.cart(), &before);
    assert_eq!(page.storage().write_count(), writes);
}

#[test]
fn rendered_remove_command_empties_cart() {
    let mut page = mount();
    set_quantity(&mut page, "3");
    page.update(Message::AddToCart);

    let command = page.view().remove_command(0).expect("one rendered row");
    page.update(command.into());

    assert!(page.cart().is_empty());
    assert_eq!(stored_lines(&page).len(), 0);
    assert!(!page.view().has_class(Node::CartCount, "nav__cart-count--visible"));
    assert_eq!(page.view().attribute(Node::CartCount, Attribute::AriaLabel), None);
    assert!(page.view().is_displayed(Node::CartEmpty));
    assert!(!page.view().is_displayed(Node::CartItems));
    assert!(page.view().cart_rows().is_empty());
    assert_eq!(
        page.view().text(Node::Announcements),
        "Fall Limited Edition Sneakers removed from cart"
    );
}

#[test]
fn checkout_control_announces_and_alerts() {
    let mut page = mount();
    set_quantity(&mut page, "1");
    page.update(Message::AddToCart);

    let command = page.view().checkout().expect("checkout rendered").command;
    page.update(command.into());

    assert_eq!(page.view().text(Node::Announcements), "Proceeding to checkout");
    assert_eq!(
        page.view().alerts(),
        ["Checkout functionality would be implemented here".to_string()]
    );
}

#[test]
fn storage_write_failure_keeps_ui_in_sync_and_reports() {
    let mut page = mount();
    page.storage_mut().reject_writes(true);
    set_quantity(&mut page, "2");
    page.update(Message::AddToCart);

    assert_eq!(page.cart().total_quantity(), 2);
    assert_eq!(page.view().text(Node::CartCount), "2");
    assert_eq!(
        page.view().text(Node::Announcements),
        "An error occurred. Please try again."
    );
    assert!(!page.view().has_class(Node::AddToCartButton, "btn--success"));
}

#[test]
fn cart_survives_reload() {
    let mut page = mount();
    set_quantity(&mut page, "4");
    page.update(Message::AddToCart);
    let storage = page.storage().clone();
    let before = page.cart().clone();

    let reloaded = mount_with(storage);
    assert_eq!(reloaded.cart(), &before);
    assert_eq!(reloaded.view().text(Node::CartCount), "4");
    assert_eq!(reloaded.view().cart_rows().len(), 1);
}

#[test]
fn malformed_storage_starts_with_empty_cart() {
    let page = mount_with(MemoryStore::with_item("cart", "[{\"id\":"));
    assert!(page.cart().is_empty());
    assert_eq!(page.view().text(Node::CartCount), "0");
}

#[test]
fn gallery_wraps_at_both_ends() {
    let mut page = mount();
    page.update(Message::PreviousImage(GalleryView::Inline));
    assert_eq!(page.current_image_index(), 3);
    assert_eq!(page.view().text(Node::Announcements), "Image 4 of 4 selected");

    page.update(Message::NextImage(GalleryView::Inline));
    assert_eq!(page.current_image_index(), 0);
    assert_eq!(
        page.view().image(Node::GalleryImage),
        Some((
            "images/image-product-1-thumbnail.jpg",
            "Fall Limited Edition Sneakers - View 1"
        ))
    );
}

#[test]
fn thumbnail_enter_selects_and_prevents_default() {
    let mut page = mount();
    let propagation = page.update(Message::ThumbnailKey {
        index: 2,
        key: Key::Enter,
    });
    assert_eq!(propagation, Propagation::PreventDefault);
    assert_eq!(page.current_image_index(), 2);

    let propagation = page.update(Message::ThumbnailKey {
        index: 1,
        key: Key::Other,
    });
    assert_eq!(propagation, Propagation::Continue);
    assert_eq!(page.current_image_index(), 2);
}

#[test]
fn lightbox_stays_closed_on_narrow_viewport() {
    let mut page = mount();
    page.view_mut().set_viewport_width(500);
    page.update(Message::OpenLightbox);

    assert!(!page.is_lightbox_open());
    assert!(!page.view().has_class(Node::Lightbox, "lightbox--active"));
    assert!(!page.view().scroll_locked());
}

#[test]
fn arrow_keys_only_navigate_open_lightbox() {
    let mut page = mount();
    assert_eq!(page.update(Message::KeyDown(Key::ArrowRight)), Propagation::Continue);
    assert_eq!(page.current_image_index(), 0);

    page.update(Message::OpenLightbox);
    assert!(page.is_lightbox_open());
    assert_eq!(page.view().focused(), Some(Node::LightboxCloseButton));

    assert_eq!(
        page.update(Message::KeyDown(Key::ArrowRight)),
        Propagation::PreventDefault
    );
    assert_eq!(page.current_image_index(), 1);
    assert_eq!(
        page.view().image(Node::LightboxImage).map(|(src, _)| src),
        Some("images/image-product-2.jpg")
    );
    assert_eq!(
        page.update(Message::KeyDown(Key::ArrowLeft)),
        Propagation::PreventDefault
    );
    assert_eq!(page.current_image_index(), 0);
}

#[test]
fn escape_closes_one_overlay_in_priority_order() {
    let mut page = mount();
    page.update(Message::ToggleMobileMenu);
    page.update(Message::ToggleCartDropdown);
    page.update(Message::OpenLightbox);

    page.update(Message::KeyDown(Key::Escape));
    assert!(!page.is_lightbox_open());
    assert!(page.is_cart_dropdown_open());
    assert!(page.is_mobile_menu_open());

    page.update(Message::KeyDown(Key::Escape));
    assert!(!page.is_cart_dropdown_open());
    assert!(page.is_mobile_menu_open());

    page.update(Message::KeyDown(Key::Escape));
    assert!(!page.is_mobile_menu_open());
    assert_eq!(page.view().focused(), Some(Node::MobileMenuButton));
}

#[test]
fn outside_click_closes_cart_dropdown() {
    let mut page = mount();
    page.update(Message::ToggleCartDropdown);
    page.update(Message::DocumentClick(ClickTarget::CartButton));
    assert!(page.is_cart_dropdown_open());

    page.update(Message::DocumentClick(ClickTarget::Elsewhere));
    assert!(!page.is_cart_dropdown_open());
    assert_eq!(
        page.view().attribute(Node::CartDropdown, Attribute::AriaHidden).as_deref(),
        Some("true")
    );
}

#[test]
fn resize_closes_overlays_that_do_not_fit() {
    let mut page = mount();
    page.view_mut().set_viewport_width(400);
    page.update(Message::ToggleMobileMenu);
    page.update(Message::Resize);
    assert!(page.is_mobile_menu_open());

    page.view_mut().set_viewport_width(1024);
    page.update(Message::Resize);
    assert!(!page.is_mobile_menu_open());

    page.update(Message::OpenLightbox);
    assert!(page.is_lightbox_open());
    page.view_mut().set_viewport_width(767);
    page.update(Message::Resize);
    assert!(!page.is_lightbox_open());
    assert_eq!(page.view().focused(), Some(Node::GalleryMain));
}

#[test]
fn swipe_navigates_inline_gallery() {
    let mut page = mount();
    page.update(Message::TouchStart(300.0));
    page.update(Message::TouchEnd(200.0));
    assert_eq!(page.current_image_index(), 1);

    page.update(Message::TouchStart(300.0));
    page.update(Message::TouchEnd(280.0));
    assert_eq!(page.current_image_index(), 1);
}

#[test]
fn announcement_and_success_flash_clear_after_delay() {
    let mut page = mount();
    set_quantity(&mut page, "1");
    page.update(Message::AddToCart);
    assert!(page.next_deadline().is_some());

    tick(&mut page, Duration::from_millis(999));
    assert_ne!(page.view().text(Node::Announcements), "");
    assert!(page.view().has_class(Node::AddToCartButton, "btn--success"));

    tick(&mut page, Duration::from_millis(1));
    assert_eq!(page.view().text(Node::Announcements), "");
    assert!(!page.view().has_class(Node::AddToCartButton, "btn--success"));
    assert!(page.next_deadline().is_none());
}

#[test]
fn earlier_announcement_timer_clears_later_message() {
    let mut page = mount();
    page.update(Message::NextImage(GalleryView::Inline));
    tick(&mut page, Duration::from_millis(600));
    page.update(Message::NextImage(GalleryView::Inline));
    assert_eq!(page.view().text(Node::Announcements), "Image 3 of 4 selected");

    // The first timer fires 400 ms into the second message's lifetime.
    tick(&mut page, Duration::from_millis(400));
    assert_eq!(page.view().text(Node::Announcements), "");
}

#[test]
fn quantity_typing_is_validated() {
    let mut page = mount();
    set_quantity(&mut page, "42");
    assert_eq!(page.view().value(Node::QuantityInput).as_deref(), Some("10"));
    assert_eq!(page.view().text(Node::ErrorMessage), "Quantity cannot exceed 10");

    set_quantity(&mut page, "7");
    page.update(Message::QuantityBlur);
    assert!(!page.view().has_class(Node::ErrorMessage, "error-message--visible"));
}

#[test]
fn file_backed_page_uses_configured_key_and_language() {
    let config_dir = tempdir().expect("failed to create temp dir");
    let data_dir = tempdir().expect("failed to create temp dir");
    let config_path = config_dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.language = Some("fr".to_string());
    saved.storage.cart_key = "basket".to_string();
    config::save_to_path(&saved, &config_path).expect("save config");
    let config = config::load_from_path(&config_path).expect("load config");

    let product = product::featured();
    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let mut page = app::start(
        product.clone(),
        &config,
        i18n,
        RetainedView::product_page(product.image_count()),
        FileStore::new(data_dir.path()),
        ManualClock::new(),
    )
    .expect("page mounts");
    page.update(Message::QuantityInput("2".to_string()));
    page.update(Message::AddToCart);
    assert!(data_dir.path().join("basket.json").exists());

    let reloaded = app::start(
        product.clone(),
        &config,
        I18n::new(None, &config),
        RetainedView::product_page(product.image_count()),
        FileStore::new(data_dir.path()),
        ManualClock::new(),
    )
    .expect("page mounts");
    assert_eq!(reloaded.cart().total_quantity(), 2);
}
