//! Mapping table consistency checks.

use serde::Serialize;

use super::{MappingTable, PathMapping};

/// Problem found in a single table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// An earlier entry has the same `(source, target)` key and a different
    /// destination, so this one is never used.
    Shadowed,
    /// Source and destination are in the same locale; translation returns
    /// the path itself before consulting the table.
    SameLocale,
    /// No entry leads back from the destination to the source.
    OneWay,
}

impl IssueKind {
    pub const fn is_error(self) -> bool {
        !matches!(self, Self::OneWay)
    }

    pub const fn describe(self) -> &'static str {
        match self {
            Self::Shadowed => "shadowed by an earlier entry",
            Self::SameLocale => "source and destination share a locale",
            Self::OneWay => "no entry maps back",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Position of the entry in the table.
    pub index: usize,
    pub kind: IssueKind,
    pub entry: PathMapping,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub entries: usize,
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.kind.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.kind.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Inspect every entry of `table`.
///
/// Exact duplicates (same source and destination) are not reported; they
/// are harmless because the first copy already yields the same result.
pub fn check(table: &MappingTable) -> CheckReport {
    let entries = table.entries();
    let mut issues = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let kind = if entry.source_locale() == entry.target_locale() {
            Some(IssueKind::SameLocale)
        } else if !table.is_effective(index)
            && table.lookup(&entry.source, entry.target_locale()) != Some(&entry.destination)
        {
            Some(IssueKind::Shadowed)
        } else if !entries
            .iter()
            .any(|other| other.source == entry.destination && other.destination == entry.source)
        {
            Some(IssueKind::OneWay)
        } else {
            None
        };

        if let Some(kind) = kind {
            issues.push(Issue {
                index,
                kind,
                entry: entry.clone(),
            });
        }
    }

    CheckReport {
        entries: entries.len(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_clean() {
        let report = check(&MappingTable::builtin());
        assert_eq!(report.entries, 66);
        assert!(report.issues.is_empty(), "{:?}", report.issues);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_detects_shadowed_entry() {
        let table = MappingTable::builder()
            .extend(&MappingTable::builtin())
            .pair("/en/about/", "/fr/a-propos/")
            .build();
        let report = check(&table);

        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, IssueKind::Shadowed);
        assert_eq!(errors[0].index, 66);
        assert!(report.has_errors());
    }

    #[test]
    fn test_exact_duplicate_is_not_shadowed() {
        let table = MappingTable::builder()
            .pair("/en/a/", "/fr/a/")
            .pair("/fr/a/", "/en/a/")
            .pair("/en/a/", "/fr/a/")
            .build();
        assert!(check(&table).issues.is_empty());
    }

    #[test]
    fn test_detects_same_locale_entry() {
        let table = MappingTable::builder().pair("/fr/a/", "/fr/b/").build();
        let report = check(&table);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::SameLocale);
        assert!(report.has_errors());
    }

    #[test]
    fn test_one_way_is_a_warning() {
        let table = MappingTable::builder().pair("/en/legal/", "/fr/mentions/").build();
        let report = check(&table);
        assert!(!report.has_errors());
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, IssueKind::OneWay);
        assert_eq!(warnings[0].kind.describe(), "no entry maps back");
    }
}
