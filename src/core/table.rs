//! Cross-language mapping table.
//!
//! The table is an ordered list of directed `(source → destination)` entries.
//! Lookups are keyed by `(source path, target locale)`, where the target is
//! the detected locale of the destination. When several entries share a key
//! the first one wins; later ones are shadowed (see `check`).
//!
//! # Example
//!
//! ```ignore
//! let table = MappingTable::builder()
//!     .page(&[
//!         (Locale::En, "/en/about/"),
//!         (Locale::Fr, "/fr/qui-sommes-nous/"),
//!         (Locale::Zh, "/zh/about/"),
//!     ])
//!     .pair("/en/legal/", "/fr/mentions-legales/")
//!     .build();
//! ```

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::{Locale, UrlPath};

/// One directed entry of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathMapping {
    pub source: UrlPath,
    pub destination: UrlPath,
}

impl PathMapping {
    pub fn new(source: impl Into<UrlPath>, destination: impl Into<UrlPath>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    #[inline]
    pub fn source_locale(&self) -> Locale {
        self.source.locale()
    }

    /// Locale this entry translates into.
    #[inline]
    pub fn target_locale(&self) -> Locale {
        self.destination.locale()
    }
}

/// Immutable mapping table with a `(source, target)` index.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<PathMapping>,
    /// Index of the first entry for each key.
    index: FxHashMap<(UrlPath, Locale), usize>,
}

impl MappingTable {
    pub fn builder() -> MappingTableBuilder {
        MappingTableBuilder::default()
    }

    /// The site's own pages in all three languages.
    pub fn builtin() -> Self {
        BUILTIN_PAGES
            .iter()
            .fold(Self::builder(), |builder, [en, fr, zh]| {
                builder.page(&[(Locale::En, *en), (Locale::Fr, *fr), (Locale::Zh, *zh)])
            })
            .build()
    }

    fn from_entries(entries: Vec<PathMapping>) -> Self {
        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            index
                .entry((entry.source.clone(), entry.target_locale()))
                .or_insert(i);
        }
        Self { entries, index }
    }

    /// Find the destination for `source` in `target`, if the table has one.
    pub fn lookup(&self, source: &UrlPath, target: Locale) -> Option<&UrlPath> {
        self.index
            .get(&(source.clone(), target))
            .map(|&i| &self.entries[i].destination)
    }

    /// Entries in table order.
    #[inline]
    pub fn entries(&self) -> &[PathMapping] {
        &self.entries
    }

    /// Whether the entry at `i` is the one `lookup` returns for its key.
    pub fn is_effective(&self, i: usize) -> bool {
        self.entries.get(i).is_some_and(|entry| {
            self.index.get(&(entry.source.clone(), entry.target_locale())) == Some(&i)
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`MappingTable`]. Entries keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct MappingTableBuilder {
    entries: Vec<PathMapping>,
}

impl MappingTableBuilder {
    /// Add one directed entry.
    pub fn pair(mut self, source: impl Into<UrlPath>, destination: impl Into<UrlPath>) -> Self {
        self.entries.push(PathMapping::new(source, destination));
        self
    }

    /// Add a row of equivalent pages.
    ///
    /// Expands into one entry per ordered pair of distinct locales, grouped
    /// by source in row order.
    pub fn page(mut self, row: &[(Locale, &str)]) -> Self {
        for (from, source) in row {
            for (to, destination) in row {
                if from != to {
                    self.entries.push(PathMapping::new(*source, *destination));
                }
            }
        }
        self
    }

    /// Append all entries of an existing table.
    pub fn extend(mut self, table: &MappingTable) -> Self {
        self.entries.extend(table.entries().iter().cloned());
        self
    }

    pub fn build(self) -> MappingTable {
        MappingTable::from_entries(self.entries)
    }
}

/// en / fr / zh paths of every page on the site.
const BUILTIN_PAGES: &[[&str; 3]] = &[
    ["/", "/fr/", "/zh/"],
    ["/en/services/", "/fr/services/", "/zh/services/"],
    [
        "/en/services/marketing/",
        "/fr/services/france-marketing/",
        "/zh/services/marketing/",
    ],
    [
        "/en/services/sourcing/",
        "/fr/services/sourcing-2/",
        "/zh/services/sourcing/",
    ],
    [
        "/en/services/investment/",
        "/fr/services/investissement/",
        "/zh/services/investment/",
    ],
    [
        "/en/services/regulatory-affairs/",
        "/fr/services/affaires-reglementaires/",
        "/zh/services/regulatory-affairs/",
    ],
    [
        "/en/services/business-consultancy/",
        "/fr/services/business-consultant/",
        "/zh/services/business-consultancy/",
    ],
    [
        "/en/services/distribution/",
        "/fr/services/distribution-2/",
        "/zh/services/distribution/",
    ],
    ["/en/portfolio/", "/fr/portfolio/", "/zh/portfolio/"],
    ["/en/about/", "/fr/qui-sommes-nous/", "/zh/about/"],
    ["/en/contact/", "/fr/contactez-nous/", "/zh/contact/"],
];
