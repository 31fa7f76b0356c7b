//! `[table]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [table]
//! builtin = true              # start from the site's own pages
//!
//! [[table.pages]]             # equivalent pages, expanded to every direction
//! en = "/en/careers/"
//! fr = "/fr/carrieres/"
//! zh = "/zh/careers/"
//!
//! [[table.pairs]]             # a single directed entry
//! from = "/en/legal/"
//! to = "/fr/mentions-legales/"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, DiagnosticKind, FieldPath};
use crate::core::{Locale, MappingTable, UrlPath};

/// Mapping table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Include the built-in site table before configured entries.
    pub builtin: bool,

    /// Rows of equivalent pages.
    pub pages: Vec<PageConfig>,

    /// Directed entries.
    pub pairs: Vec<PairConfig>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            pages: Vec::new(),
            pairs: Vec::new(),
        }
    }
}

/// One page in up to three languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub en: Option<String>,
    pub fr: Option<String>,
    pub zh: Option<String>,
}

impl PageConfig {
    /// Configured `(locale, path)` cells in locale order.
    pub fn cells(&self) -> Vec<(Locale, &str)> {
        [
            (Locale::En, &self.en),
            (Locale::Fr, &self.fr),
            (Locale::Zh, &self.zh),
        ]
        .into_iter()
        .filter_map(|(locale, path)| path.as_deref().map(|p| (locale, p)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    pub from: String,
    pub to: String,
}

impl TableConfig {
    const FIELD: &'static str = "table";

    /// Validate configured rows and pairs.
    ///
    /// # Checks
    /// - every cell must be an absolute path
    /// - every page cell must belong to its column's locale
    /// - a page row with fewer than two cells produces no entries (warning)
    /// - a pair must cross locales
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let pages_field = FieldPath::new(Self::FIELD).child("pages");
        for (i, page) in self.pages.iter().enumerate() {
            let row_field = pages_field.index(i);
            let cells = page.cells();

            for (locale, raw) in &cells {
                let field = row_field.child(locale.code());
                if !is_absolute(raw) {
                    diag.report(field, DiagnosticKind::NotAbsolute { raw: raw.to_string() });
                    continue;
                }
                let path = UrlPath::from_page(raw);
                if path.locale() != *locale {
                    diag.report(
                        field,
                        DiagnosticKind::WrongColumn {
                            path,
                            expected: *locale,
                        },
                    );
                }
            }

            if cells.len() < 2 {
                diag.report(row_field, DiagnosticKind::SparseRow { cells: cells.len() });
            }
        }

        let pairs_field = FieldPath::new(Self::FIELD).child("pairs");
        for (i, pair) in self.pairs.iter().enumerate() {
            let field = pairs_field.index(i);
            let mut absolute = true;
            for (side, raw) in [("from", &pair.from), ("to", &pair.to)] {
                if !is_absolute(raw) {
                    diag.report(field.child(side), DiagnosticKind::NotAbsolute { raw: raw.clone() });
                    absolute = false;
                }
            }

            let from = UrlPath::from_page(&pair.from);
            let to = UrlPath::from_page(&pair.to);
            if absolute && from.locale() == to.locale() {
                diag.report(field, DiagnosticKind::SameLocale { from, to });
            }
        }
    }

    /// Build the effective mapping table.
    ///
    /// Built-in entries come first, then page rows, then pairs. Lookups
    /// take the first match, so earlier entries win on conflicts.
    pub fn to_table(&self) -> MappingTable {
        let mut builder = MappingTable::builder();
        if self.builtin {
            builder = builder.extend(&MappingTable::builtin());
        }
        for page in &self.pages {
            builder = builder.page(&page.cells());
        }
        for pair in &self.pairs {
            builder = builder.pair(pair.from.as_str(), pair.to.as_str());
        }
        builder.build()
    }
}

fn is_absolute(raw: &str) -> bool {
    raw.trim().starts_with('/')
}
