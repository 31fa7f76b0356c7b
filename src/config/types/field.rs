//! Config field path used in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a config field, e.g. `table.pages[2].fr`.
///
/// # Example
///
/// ```ignore
/// let field = FieldPath::new("table.pages").index(2).child("fr");
/// diag.report(field, DiagnosticKind::SparseRow { cells: 1 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Nested field (`table` + `pages` -> `table.pages`).
    pub fn child(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    /// Array element (`table.pages` + 2 -> `table.pages[2]`).
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{}]", self.0, i))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths() {
        let pages = FieldPath::new("table.pages");
        assert_eq!(pages.index(2).child("fr").as_str(), "table.pages[2].fr");
        assert_eq!(pages.as_str(), "table.pages");
    }
}
