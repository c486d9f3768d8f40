// SPDX-License-Identifier: MPL-2.0
//! Screen-reader announcement data.

use crate::i18n::I18n;

/// A message destined for the live region, resolved at announce time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// The i18n key for the message.
    message_key: String,
    /// Arguments for message interpolation.
    message_args: Vec<(String, String)>,
}

impl Announcement {
    pub fn new(message_key: impl Into<String>) -> Self {
        Self {
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    /// Adds an interpolation argument.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.message_args.push((name.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Resolves the text in the active locale.
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> String {
        let args: Vec<(&str, &str)> = self
            .message_args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.message_key, &args)
    }
}
