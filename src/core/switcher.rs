//! Language switcher model.
//!
//! What a page's language dropdown shows (one option per locale, with the
//! translated `href`) and the first-visit redirect based on the browser's
//! preferred languages.

use serde::Serialize;

use super::{Locale, Translator, UrlPath};

/// Key under which the UI persists the visitor's chosen locale.
pub const STORAGE_KEY: &str = "innoledge_preferred_language";

/// One entry of the language dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub locale: Locale,
    /// Value for the `hreflang` attribute.
    pub hreflang: &'static str,
    pub href: String,
    /// Short label (`EN`, `FR`, `中文`).
    pub label: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    /// Whether this option is the page's own language.
    pub current: bool,
}

impl Translator {
    /// Dropdown options for the page at `path`, in [`Locale::ALL`] order.
    pub fn language_options(&self, path: &str) -> Vec<LanguageOption> {
        let path = UrlPath::from_page(path);
        let current = path.locale();

        Locale::ALL
            .into_iter()
            .map(|locale| LanguageOption {
                locale,
                hreflang: locale.code(),
                href: self.resolve(&path, locale).0.into(),
                label: locale.display(),
                name: locale.name(),
                flag: locale.flag(),
                current: locale == current,
            })
            .collect()
    }

    /// Value for the page's `<html lang>` attribute.
    pub fn html_lang(&self, path: &str) -> &'static str {
        UrlPath::from_page(path).locale().code()
    }

    /// Where a first-time visitor should be sent, if anywhere.
    ///
    /// Applies only to the English home page and only when no preference
    /// has been stored. The first browser language decides; English
    /// visitors stay put.
    pub fn auto_redirect<S: AsRef<str>>(
        &self,
        path: &str,
        browser_languages: &[S],
        stored_preference: Option<Locale>,
    ) -> Option<String> {
        if !UrlPath::from_page(path).is_root() || stored_preference.is_some() {
            return None;
        }

        let target = browser_languages
            .first()
            .map(|tag| Locale::from_browser_language(tag.as_ref()))
            .unwrap_or(Locale::DEFAULT);
        if target == Locale::DEFAULT {
            return None;
        }

        let url = self.translate("/", target);
        (url != "/").then_some(url)
    }
}
