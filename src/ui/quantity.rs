// SPDX-License-Identifier: MPL-2.0
//! Quantity stepper and its inline validation message.
//!
//! The input element is the source of truth: every operation reads the
//! displayed value and the declared `min`/`max` back from the view, so a
//! value typed by the user is validated the same way as one produced by the
//! stepper buttons.

use crate::application::port::{Attribute, Node, ViewBinder};
use crate::config::defaults::{DEFAULT_QUANTITY_MAX, DEFAULT_QUANTITY_MIN};
use crate::i18n::I18n;

pub const ERROR_VISIBLE_CLASS: &str = "error-message--visible";

/// Declared limits of the quantity input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_QUANTITY_MIN,
            max: DEFAULT_QUANTITY_MAX,
        }
    }
}

impl Bounds {
    /// Reads `min`/`max` from the input. Absent, unparseable or zero values
    /// fall back to the defaults.
    pub fn read<V: ViewBinder + ?Sized>(view: &V) -> Self {
        let declared = |attribute: Attribute, fallback: i64| {
            view.attribute(Node::QuantityInput, attribute)
                .and_then(|raw| parse_leading_int(&raw))
                .filter(|value| *value != 0)
                .unwrap_or(fallback)
        };
        Self {
            min: declared(Attribute::Min, DEFAULT_QUANTITY_MIN),
            max: declared(Attribute::Max, DEFAULT_QUANTITY_MAX),
        }
    }
}

/// Why a quantity was clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// Not a number, or below the minimum.
    BelowMin(i64),
    AboveMax(i64),
}

impl QuantityError {
    /// Localized message shown under the input.
    #[must_use]
    pub fn message(self, i18n: &I18n) -> String {
        match self {
            QuantityError::BelowMin(min) => {
                i18n.tr_with_args("quantity-error-min", &[("min", min.to_string().as_str())])
            }
            QuantityError::AboveMax(max) => {
                i18n.tr_with_args("quantity-error-max", &[("max", max.to_string().as_str())])
            }
        }
    }
}

/// Parses a leading integer the way browsers parse `parseInt(s, 10)`:
/// leading whitespace and one sign are skipped, digits are read up to the
/// first non-digit. Returns `None` when no digit is found.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0_i64, |acc, digit| acc.saturating_mul(10).saturating_add(digit));
    Some(if negative { -magnitude } else { magnitude })
}

/// Clamps `raw` into `bounds`.
///
/// Returns the value the input should display and the error to surface, if
/// any. Unparseable input clamps to the minimum.
#[must_use]
pub fn check(raw: &str, bounds: Bounds) -> (i64, Option<QuantityError>) {
    match parse_leading_int(raw) {
        Some(value) if value < bounds.min => (bounds.min, Some(QuantityError::BelowMin(bounds.min))),
        None => (bounds.min, Some(QuantityError::BelowMin(bounds.min))),
        Some(value) if value > bounds.max => (bounds.max, Some(QuantityError::AboveMax(bounds.max))),
        Some(value) => (value, None),
    }
}

/// Current value with empty input counted as zero. `None` when the input
/// holds something that is not a number.
pub fn current_value<V: ViewBinder + ?Sized>(view: &V) -> Option<i64> {
    let raw = view.value(Node::QuantityInput).unwrap_or_default();
    if raw.is_empty() {
        return Some(0);
    }
    parse_leading_int(&raw)
}

/// Quantity requested by the add-to-cart action; anything unparseable
/// counts as zero.
pub fn requested<V: ViewBinder + ?Sized>(view: &V) -> i64 {
    current_value(view).unwrap_or(0)
}

/// Steps the value down by one. No-op at or below zero.
pub fn decrease<V: ViewBinder + ?Sized>(view: &mut V, i18n: &I18n) {
    match current_value(view) {
        Some(value) if value > 0 => {
            view.set_value(Node::QuantityInput, &(value - 1).to_string());
            validate(view, i18n);
        }
        _ => {}
    }
}

/// Steps the value up by one. No-op at or above the maximum.
pub fn increase<V: ViewBinder + ?Sized>(view: &mut V, i18n: &I18n) {
    let max = Bounds::read(view).max;
    match current_value(view) {
        Some(value) if value < max => {
            view.set_value(Node::QuantityInput, &(value + 1).to_string());
            validate(view, i18n);
        }
        _ => {}
    }
}

/// Clamps the displayed value and shows or clears the error message.
///
/// Does nothing when the page has no quantity input.
pub fn validate<V: ViewBinder + ?Sized>(view: &mut V, i18n: &I18n) {
    let Some(raw) = view.value(Node::QuantityInput) else {
        return;
    };

    let (value, error) = check(&raw, Bounds::read(view));
    match error {
        Some(error) => {
            view.set_value(Node::QuantityInput, &value.to_string());
            show_error(view, &error.message(i18n));
        }
        None => hide_error(view),
    }
}

/// Shows `message` under the input and makes the region assertive.
pub fn show_error<V: ViewBinder + ?Sized>(view: &mut V, message: &str) {
    view.set_text(Node::ErrorMessage, message);
    view.set_class(Node::ErrorMessage, ERROR_VISIBLE_CLASS, true);
    view.set_attribute(Node::ErrorMessage, Attribute::AriaLive, "assertive");
}

pub fn hide_error<V: ViewBinder + ?Sized>(view: &mut V) {
    view.set_class(Node::ErrorMessage, ERROR_VISIBLE_CLASS, false);
    view.set_attribute(Node::ErrorMessage, Attribute::AriaLive, "polite");
}
