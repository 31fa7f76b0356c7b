//! Site locales.
//!
//! The site is published in exactly three languages. Every URL path belongs
//! to one of them, decided by its first path segment:
//!
//! | path prefix | locale |
//! |-------------|--------|
//! | `/fr/`      | `fr`   |
//! | `/zh/`      | `zh`   |
//! | anything    | `en`   |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported site language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (site default, served from `/` and `/en/...`).
    En,
    /// French (`/fr/...`).
    Fr,
    /// Chinese (`/zh/...`).
    Zh,
}

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale `{0}` (expected one of: en, fr, zh)")]
pub struct LocaleError(pub String);

impl Locale {
    /// All locales, in switcher display order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Zh];

    /// The site default.
    pub const DEFAULT: Locale = Locale::En;

    /// Two-letter code, also used as the `hreflang` / `lang` attribute.
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Zh => "zh",
        }
    }

    /// Path prefix without the trailing slash (`/en`, `/fr`, `/zh`).
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::En => "/en",
            Self::Fr => "/fr",
            Self::Zh => "/zh",
        }
    }

    /// Native language name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Zh => "中文",
        }
    }

    /// Short label shown on the switcher toggle.
    pub const fn display(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Fr => "FR",
            Self::Zh => "中文",
        }
    }

    /// Flag icon URL.
    pub const fn flag(self) -> &'static str {
        match self {
            Self::En => "/assets/images/flags/en.svg",
            Self::Fr => "/assets/images/flags/fr.svg",
            Self::Zh => "/assets/images/flags/zh.svg",
        }
    }

    /// Detect the locale a path belongs to.
    ///
    /// Only `/fr/` and `/zh/` are recognized; every other path, including
    /// `/`, `/en/...` and unprefixed paths, is English. The path is expected
    /// to be normalized already (`/fr` without a slash is English).
    pub fn from_path(path: &str) -> Self {
        if path.starts_with("/fr/") {
            Self::Fr
        } else if path.starts_with("/zh/") {
            Self::Zh
        } else {
            Self::En
        }
    }

    /// Pick a locale from a browser language tag (`fr-FR`, `zh-Hant-TW`, ...).
    ///
    /// Any tag starting with `fr` or `zh` matches, ignoring case; everything
    /// else falls back to English.
    pub fn from_browser_language(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.starts_with("fr") {
            Self::Fr
        } else if tag.starts_with("zh") {
            Self::Zh
        } else {
            Self::En
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "zh" => Ok(Self::Zh),
            _ => Err(LocaleError(s.to_string())),
        }
    }
}
