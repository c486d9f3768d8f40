// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the page.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Every user-visible string (announcements, labels, inline errors) is a Fluent
//! message looked up by key.
//!
//! # Features
//!
//! - Locale detection from an explicit language, config, or system settings
//! - Translation files embedded at build time
//! - Runtime language switching
//! - Fallback to default locale when translations are missing

pub mod fluent;

pub use fluent::I18n;
