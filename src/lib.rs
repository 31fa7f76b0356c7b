//! hreflang - cross-language path translation for a multilingual static site.
//!
//! The site is published in English, French and Chinese. Given the path of
//! the page a visitor is on, [`core::Translator`] returns the same page in
//! another language, from an explicit mapping table when one exists and by
//! swapping the locale prefix otherwise.
//!
//! ```
//! use hreflang::core::{Locale, Translator};
//!
//! let translator = Translator::default();
//! assert_eq!(translator.translate("/zh/about/", Locale::Fr), "/fr/qui-sommes-nous/");
//! assert_eq!(translator.translate("/en/newpage", Locale::Fr), "/fr/newpage/");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
