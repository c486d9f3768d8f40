// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the active locale.
    ///
    /// Resolution order: `lang`, then `config.general.language`, then the
    /// OS locale, then `en-US`.
    #[must_use]
    pub fn new(lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                log::warn!("skipping translation file with invalid locale: {filename}");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    log::warn!("{filename}: {} parse error(s), keeping valid entries", errors.len());
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Announcements are compared verbatim; no bidi isolation marks.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{filename}: {} duplicate message(s)", errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(|locale| locale.to_string());

        let current_locale = resolve_locale(lang, config, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Switches locale; unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Translates a message without arguments.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.tr_with_args(key, &[])
    }

    /// Translates a message, substituting `args` as `{ $name }` placeables.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut fluent_args = FluentArgs::new();
                for (name, value) in args {
                    fluent_args.set(*name, FluentValue::from(*value));
                }
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, Some(&fluent_args), &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn resolve_locale(
    lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |candidate: &str| {
        candidate
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Explicit request
    if let Some(found) = lang.as_deref().and_then(pick) {
        return Some(found);
    }

    // 2. Config file
    if let Some(found) = config.general.language.as_deref().and_then(pick) {
        return Some(found);
    }

    // 3. OS locale
    if let Some(found) = sys_locale::get_locale().as_deref().and_then(pick) {
        return Some(found);
    }

    pick(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;

    fn locales() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_explicit_language() {
        let lang = resolve_locale(Some("fr".to_string()), &Config::default(), &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            ..Config::default()
        };
        let lang = resolve_locale(None, &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_language() {
        let lang = resolve_locale(Some("de".to_string()), &Config::default(), &locales());
        // Falls through to OS locale or en-US, both of which are available here.
        if let Some(l) = lang {
            assert!(locales().contains(&l));
        }
    }

    #[test]
    fn default_locale_is_en_us() {
        assert_eq!(default_locale().to_string(), "en-US");
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let names: Vec<String> = i18n.available_locales().iter().map(ToString::to_string).collect();
        assert!(names.contains(&"en-US".to_string()));
        assert!(names.contains(&"fr".to_string()));
    }

    #[test]
    fn tr_with_args_substitutes_without_isolation_marks() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = i18n.tr_with_args("gallery-image-selected", &[("index", "2"), ("count", "4")]);
        assert_eq!(text, "Image 2 of 4 selected");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn set_locale_switches_bundle() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert_eq!(i18n.tr("cart-checkout"), "Commander");

        i18n.set_locale("de".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }
}
