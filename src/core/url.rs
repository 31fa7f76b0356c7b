//! URL path type for normalized page paths.
//!
//! - Internal representation: percent-encoded, as in `location.pathname`
//! - Always absolute and trailing-slash terminated

use std::borrow::Borrow;
use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Locale;

/// Characters a browser escapes in a URL path. `%` is not listed, so
/// existing escapes pass through unchanged.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Normalized page path.
///
/// Invariants:
/// - Always encoded; existing `%XX` escapes are never decoded
/// - Always starts with `/`
/// - Always ends with `/`
/// - Never carries a query string or fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// The site root, `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Normalize a page path.
    ///
    /// Empty or non-absolute input is the root. A trailing slash is added
    /// when missing, repeated leading slashes are collapsed, and query
    /// strings and fragments are stripped. Raw spaces and non-ASCII
    /// characters are percent-encoded; escapes already present are kept.
    pub fn from_page(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.starts_with('/') {
            return Self::root();
        }

        let path = Self::strip_query_fragment(trimmed).trim_start_matches('/');
        if path.is_empty() {
            return Self::root();
        }

        let encoded = utf8_percent_encode(path, PATH);
        let normalized = if path.ends_with('/') {
            format!("/{encoded}")
        } else {
            format!("/{encoded}/")
        };

        Self(Arc::from(normalized))
    }

    /// Accept either a bare path or a full `http(s)` URL.
    ///
    /// For URLs only the path component is kept, so
    /// `https://example.com/fr/portfolio?x=1` becomes `/fr/portfolio/`.
    pub fn from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        match url::Url::parse(trimmed) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                Self::from_page(parsed.path())
            }
            _ => Self::from_page(trimmed),
        }
    }

    /// Drop everything from the first `?` or `#`.
    ///
    /// Encoded `%3F` / `%23` are part of the path and survive.
    fn strip_query_fragment(path: &str) -> &str {
        path.split(['?', '#']).next().unwrap_or(path)
    }

    /// Get the encoded path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the site root `/`.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// The locale this path belongs to.
    #[inline]
    pub fn locale(&self) -> Locale {
        Locale::from_path(&self.0)
    }

    /// Path with the leading locale segment removed.
    ///
    /// Only `/en/`, `/fr/` and `/zh/` are stripped; the remainder keeps its
    /// leading slash, so `/fr/portfolio/` gives `/portfolio/` and `/fr/`
    /// gives `/`. Unprefixed paths are returned unchanged.
    pub fn base(&self) -> &str {
        Locale::ALL
            .iter()
            .find_map(|locale| {
                self.0
                    .strip_prefix(locale.prefix())
                    .filter(|rest| rest.starts_with('/'))
            })
            .unwrap_or(self.as_str())
    }

    /// Place this path's [`base`](UrlPath::base) under `locale`.
    ///
    /// English sub-pages live under `/en/`, but the English home is `/`.
    /// The base is already normalized, so it is joined as is.
    pub fn localized(&self, locale: Locale) -> Self {
        let base = self.base();
        match locale {
            Locale::En if base == "/" => Self::root(),
            _ => Self(Arc::from(format!("{}{}", locale.prefix(), base))),
        }
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::from_page(&s)
    }
}

impl From<UrlPath> for String {
    fn from(path: UrlPath) -> Self {
        path.0.to_string()
    }
}

impl Serialize for UrlPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_page(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page_adds_slashes() {
        assert_eq!(UrlPath::from_page("/fr/portfolio").as_str(), "/fr/portfolio/");
        assert_eq!(UrlPath::from_page("/fr/portfolio/").as_str(), "/fr/portfolio/");
        assert_eq!(UrlPath::from_page("/fr").as_str(), "/fr/");
    }

    #[test]
    fn test_from_page_root() {
        assert_eq!(UrlPath::from_page("").as_str(), "/");
        assert_eq!(UrlPath::from_page("   ").as_str(), "/");
        assert_eq!(UrlPath::from_page("/").as_str(), "/");
        assert_eq!(UrlPath::from_page("/?lang=fr").as_str(), "/");
        assert!(UrlPath::from_page("/#top").is_root());
    }

    #[test]
    fn test_from_page_relative_is_root() {
        assert!(UrlPath::from_page("fr/portfolio").is_root());
        assert!(UrlPath::from_page("?lang=fr").is_root());
        assert!(UrlPath::from_page("portfolio/").is_root());
    }

    #[test]
    fn test_from_page_strips_query_and_fragment() {
        assert_eq!(UrlPath::from_page("/en/about/?ref=nav").as_str(), "/en/about/");
        assert_eq!(UrlPath::from_page("/en/about#team").as_str(), "/en/about/");
        assert_eq!(UrlPath::from_page("//fr/contactez-nous").as_str(), "/fr/contactez-nous/");
    }

    #[test]
    fn test_from_page_keeps_escapes() {
        assert_eq!(UrlPath::from_page("/fr/faq%3F/").as_str(), "/fr/faq%3F/");
        assert_eq!(UrlPath::from_page("/fr/c%23d").as_str(), "/fr/c%23d/");
        assert_eq!(UrlPath::from_page("/fr/a%2520b/").as_str(), "/fr/a%2520b/");
        assert_eq!(UrlPath::from_page("/fr/a%20b/").as_str(), "/fr/a%20b/");
        // An escaped prefix is not a locale prefix
        assert_eq!(UrlPath::from_page("/%66r/x/").locale(), Locale::En);
    }

    #[test]
    fn test_from_page_encodes_raw_characters() {
        assert_eq!(UrlPath::from_page("/fr/a b/").as_str(), "/fr/a%20b/");
        assert_eq!(
            UrlPath::from_page("/zh/关于").as_str(),
            "/zh/%E5%85%B3%E4%BA%8E/"
        );
        // Encoding is idempotent
        let once = UrlPath::from_page("/zh/关于 x/");
        assert_eq!(UrlPath::from_page(once.as_str()), once);
    }

    #[test]
    fn test_from_input_accepts_urls() {
        assert_eq!(
            UrlPath::from_input("https://example.com/fr/portfolio?x=1").as_str(),
            "/fr/portfolio/"
        );
        assert_eq!(
            UrlPath::from_input("https://example.com/fr/faq%3F").as_str(),
            "/fr/faq%3F/"
        );
        assert_eq!(UrlPath::from_input("http://localhost:8080").as_str(), "/");
        assert_eq!(UrlPath::from_input("/zh/about").as_str(), "/zh/about/");
    }

    #[test]
    fn test_base() {
        assert_eq!(UrlPath::from_page("/fr/portfolio/").base(), "/portfolio/");
        assert_eq!(UrlPath::from_page("/zh/").base(), "/");
        assert_eq!(UrlPath::from_page("/en/services/x/").base(), "/services/x/");
        assert_eq!(UrlPath::from_page("/services/").base(), "/services/");
        assert_eq!(UrlPath::from_page("/french/").base(), "/french/");
        assert_eq!(UrlPath::root().base(), "/");
    }

    #[test]
    fn test_localized() {
        assert_eq!(UrlPath::from_page("/fr/").localized(Locale::En).as_str(), "/");
        assert_eq!(UrlPath::root().localized(Locale::Fr).as_str(), "/fr/");
        assert_eq!(
            UrlPath::from_page("/fr/about/").localized(Locale::En).as_str(),
            "/en/about/"
        );
        assert_eq!(
            UrlPath::from_page("/about/").localized(Locale::Zh).as_str(),
            "/zh/about/"
        );
        assert_eq!(
            UrlPath::from_page("/fr/a%2520b/").localized(Locale::En).as_str(),
            "/en/a%2520b/"
        );
    }

    #[test]
    fn test_locale() {
        assert_eq!(UrlPath::from_page("/fr").locale(), Locale::Fr);
        assert_eq!(UrlPath::from_page("/zh/about").locale(), Locale::Zh);
        assert_eq!(UrlPath::from_page("/en/about").locale(), Locale::En);
    }

    #[test]
    fn test_serde_normalizes() {
        let path: UrlPath = serde_json::from_str("\"/fr/portfolio\"").unwrap();
        assert_eq!(path.as_str(), "/fr/portfolio/");
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"/fr/portfolio/\"");
    }
}
