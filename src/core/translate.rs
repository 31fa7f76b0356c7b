//! Path translation between site locales.
//!
//! Resolution order for `translate(path, target)`:
//!
//! 1. same locale: the normalized path itself
//! 2. direct mapping: the table entry for `(path, target)`
//! 3. structural fallback: swap the locale prefix
//!
//! ```text
//! /zh/about/          --fr-->  /fr/qui-sommes-nous/   (table)
//! /en/newpage/        --fr-->  /fr/newpage/           (fallback)
//! /fr/                --en-->  /                      (table)
//! ```

use super::{Locale, MappingTable, UrlPath};

/// How a translated path was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Target equals the current locale.
    Identity,
    /// Found in the mapping table.
    Table,
    /// Built by swapping the locale prefix.
    Fallback,
}

impl Resolution {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Table => "table",
            Self::Fallback => "fallback",
        }
    }
}

/// Translates page paths using an injected mapping table.
#[derive(Debug, Clone)]
pub struct Translator {
    table: MappingTable,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(MappingTable::builtin())
    }
}

impl Translator {
    pub const fn new(table: MappingTable) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Equivalent of `current_path` in `target`.
    ///
    /// Total: any input yields an absolute, trailing-slash path.
    pub fn translate(&self, current_path: &str, target: Locale) -> String {
        self.resolve(&UrlPath::from_page(current_path), target).0.into()
    }

    /// Translate an already normalized path, reporting how it was resolved.
    pub fn resolve(&self, path: &UrlPath, target: Locale) -> (UrlPath, Resolution) {
        if path.locale() == target {
            return (path.clone(), Resolution::Identity);
        }

        if let Some(destination) = self.table.lookup(path, target) {
            crate::debug!("translate"; "{} -> {} (table)", path, destination);
            return (destination.clone(), Resolution::Table);
        }

        let fallback = path.localized(target);
        crate::debug!("translate"; "{} -> {} (fallback)", path, fallback);
        (fallback, Resolution::Fallback)
    }
}
