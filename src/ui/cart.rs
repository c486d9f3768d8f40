// SPDX-License-Identifier: MPL-2.0
//! Cart badge and dropdown panel rendering.

use crate::application::port::{Attribute, CartCommand, CartRow, CheckoutControl, Node, ViewBinder};
use crate::domain::cart::{Cart, CartLine};
use crate::i18n::I18n;

pub const BADGE_VISIBLE_CLASS: &str = "nav__cart-count--visible";

/// Builds the display row for one cart line.
#[must_use]
pub fn row(line: &CartLine, i18n: &I18n) -> CartRow {
    let price = line.unit_price().to_string();
    let quantity = line.quantity().get().to_string();
    CartRow {
        image: line.image().to_string(),
        name: line.name().to_string(),
        pricing: i18n.tr_with_args(
            "cart-line-pricing",
            &[("price", price.as_str()), ("quantity", quantity.as_str())],
        ),
        total: line.line_total().to_string(),
        remove_label: i18n.tr_with_args("cart-remove-label", &[("name", line.name())]),
        remove: CartCommand::Remove(line.product_id()),
    }
}

#[must_use]
pub fn rows(cart: &Cart, i18n: &I18n) -> Vec<CartRow> {
    cart.lines().iter().map(|line| row(line, i18n)).collect()
}

#[must_use]
pub fn checkout_control(i18n: &I18n) -> CheckoutControl {
    CheckoutControl {
        label: i18n.tr("cart-checkout"),
        command: CartCommand::Checkout,
    }
}

/// Synchronizes the badge and the dropdown panel with `cart`.
pub fn render<V: ViewBinder + ?Sized>(view: &mut V, cart: &Cart, i18n: &I18n) {
    let total = cart.total_quantity();
    view.set_text(Node::CartCount, &total.to_string());
    if total > 0 {
        view.set_class(Node::CartCount, BADGE_VISIBLE_CLASS, true);
        let count = total.to_string();
        view.set_attribute(
            Node::CartCount,
            Attribute::AriaLabel,
            &i18n.tr_with_args("cart-badge-label", &[("count", count.as_str())]),
        );
    } else {
        view.set_class(Node::CartCount, BADGE_VISIBLE_CLASS, false);
        view.remove_attribute(Node::CartCount, Attribute::AriaLabel);
    }

    let empty = cart.is_empty();
    view.set_displayed(Node::CartEmpty, empty);
    view.set_displayed(Node::CartItems, !empty);
    if empty {
        view.render_cart_items(&[], None);
    } else {
        view.render_cart_items(&rows(cart, i18n), Some(&checkout_control(i18n)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::cart::Quantity;
    use crate::domain::product;
    use crate::infrastructure::RetainedView;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn row_formats_money_and_labels() {
        let product = product::featured();
        let line = CartLine::snapshot(&product, Quantity::new(3).unwrap());
        let row = row(&line, &i18n());

        assert_eq!(row.pricing, "$125.00 x 3");
        assert_eq!(row.total, "$375.00");
        assert_eq!(row.remove_label, "Remove Fall Limited Edition Sneakers from cart");
        assert_eq!(row.image, "images/image-product-1-thumbnail.jpg");
        assert_eq!(row.remove, CartCommand::Remove(product.id()));
    }

    #[test]
    fn empty_cart_hides_badge_and_rows() {
        let mut view = RetainedView::product_page(4);
        render(&mut view, &Cart::new(), &i18n());

        assert_eq!(view.text(Node::CartCount), "0");
        assert!(!view.has_class(Node::CartCount, BADGE_VISIBLE_CLASS));
        assert_eq!(view.attribute(Node::CartCount, Attribute::AriaLabel), None);
        assert!(view.is_displayed(Node::CartEmpty));
        assert!(!view.is_displayed(Node::CartItems));
        assert!(view.cart_rows().is_empty());
        assert!(view.checkout().is_none());
    }

    #[test]
    fn filled_cart_shows_badge_rows_and_checkout() {
        let i18n = i18n();
        let product = product::featured();
        let mut cart = Cart::new();
        cart.add(&product, Quantity::new(2).unwrap());

        let mut view = RetainedView::product_page(4);
        render(&mut view, &cart, &i18n);

        assert_eq!(view.text(Node::CartCount), "2");
        assert!(view.has_class(Node::CartCount, BADGE_VISIBLE_CLASS));
        assert_eq!(
            view.attribute(Node::CartCount, Attribute::AriaLabel).as_deref(),
            Some("2 items in cart")
        );
        assert!(!view.is_displayed(Node::CartEmpty));
        assert!(view.is_displayed(Node::CartItems));
        assert_eq!(view.cart_rows().len(), 1);
        assert_eq!(
            view.checkout().map(|c| (c.label.as_str(), c.command)),
            Some(("Checkout", CartCommand::Checkout))
        );
    }
}
