// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::domain::banner::TextSource;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Key of the default reply input placeholder.
pub const REPLY_HINT_KEY: &str = "banner-reply-hint";
/// Key of the default reply button label.
pub const REPLY_SEND_KEY: &str = "banner-reply-send";
/// Key of the close button's accessible label.
pub const CLOSE_KEY: &str = "banner-close";

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations and picks a locale: `lang` first,
    /// then the config, then the OS, then `en-US`.
    pub fn new(lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|name| name.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(file = filename, errors = errors.len(), "translation file has errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, errors = errors.len(), "duplicate translation keys");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let current_locale = resolve_locale(lang, config, &available_locales)
            .unwrap_or_else(|| DEFAULT_LOCALE.parse().unwrap_or_default());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {key}")
    }

    /// Resolves literal text as-is and keys through the bundle.
    #[must_use]
    pub fn text(&self, source: &TextSource) -> String {
        match source {
            TextSource::Literal(text) => text.clone(),
            TextSource::Key(key) => self.tr(key),
        }
    }

    /// Resolves `source`, or the `default_key` message when unset.
    #[must_use]
    pub fn text_or(&self, source: Option<&TextSource>, default_key: &str) -> String {
        source.map_or_else(|| self.tr(default_key), |source| self.text(source))
    }
}

fn parse_available(lang: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    lang.parse::<LanguageIdentifier>()
        .ok()
        .filter(|lang| available.contains(lang))
}

fn resolve_locale(
    lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Explicit choice
    if let Some(lang) = lang.as_deref().and_then(|l| parse_available(l, available)) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|l| parse_available(l, available))
    {
        return Some(lang);
    }

    // 3. OS locale
    sys_locale::get_locale().and_then(|l| parse_available(&l, available))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langid(tag: &str) -> LanguageIdentifier {
        tag.parse().unwrap()
    }

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid("en-US"), langid("fr")]
    }

    #[test]
    fn explicit_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some(langid("fr")));
    }

    #[test]
    fn config_language_is_used() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some(langid("fr")));
    }

    #[test]
    fn unknown_language_falls_through() {
        let lang = resolve_locale(Some("xx-YY".to_string()), &Config::default(), &available());
        // OS dependent; only an available locale may come back.
        if let Some(lang) = lang {
            assert!(available().contains(&lang));
        }
    }

    #[test]
    fn translations_are_embedded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr(REPLY_SEND_KEY), "Send");

        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(i18n.tr(REPLY_SEND_KEY), "Envoyer");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn default_key_is_used_when_unset() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.text_or(None, REPLY_HINT_KEY), "Reply…");
        assert_eq!(
            i18n.text_or(Some(&TextSource::Literal("Answer".into())), REPLY_HINT_KEY),
            "Answer"
        );
    }
}
