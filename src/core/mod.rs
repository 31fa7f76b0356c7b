//! Core types - locales, paths and the translation table.

mod check;
mod locale;
mod switcher;
mod table;
mod translate;
mod url;

pub use check::{CheckReport, Issue, IssueKind, check};
pub use locale::{Locale, LocaleError};
pub use switcher::{LanguageOption, STORAGE_KEY};
pub use table::{MappingTable, MappingTableBuilder, PathMapping};
pub use translate::{Resolution, Translator};
pub use url::UrlPath;
