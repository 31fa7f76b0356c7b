//! Configuration error types.

use super::FieldPath;
use crate::core::{Locale, UrlPath};
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// DiagnosticKind
// ============================================================================

/// What is wrong with a configured table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A cell that does not start with `/`.
    NotAbsolute { raw: String },
    /// A page cell whose path belongs to another locale's column.
    WrongColumn { path: UrlPath, expected: Locale },
    /// A pair whose ends share a locale; translation never reaches it.
    SameLocale { from: UrlPath, to: UrlPath },
    /// A page row with fewer than two cells; it yields no entries.
    SparseRow { cells: usize },
}

impl DiagnosticKind {
    /// Errors fail the load; everything else is printed and ignored.
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::SparseRow { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Self::NotAbsolute { raw } => format!("`{raw}` is not an absolute path"),
            Self::WrongColumn { path, expected } => {
                format!("`{path}` is not a {expected} path")
            }
            Self::SameLocale { from, to } => format!(
                "`{from}` and `{to}` are both {} paths, the entry would never be used",
                from.locale()
            ),
            Self::SparseRow { cells } => {
                format!("row has {cells} language(s), needs at least two; ignored")
            }
        }
    }

    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotAbsolute { .. } => Some("page paths start with /".to_string()),
            Self::WrongColumn { expected, .. } => Some(locale_hint(*expected)),
            Self::SameLocale { to, .. } => Some(format!(
                "point `to` at a page outside the {} locale",
                to.locale()
            )),
            Self::SparseRow { .. } => None,
        }
    }
}

fn locale_hint(locale: Locale) -> String {
    match locale {
        Locale::En => "en paths are `/` or anything outside /fr/ and /zh/".to_string(),
        other => format!("{other} paths start with {}/", other.prefix()),
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "table.pages[0].fr")
    pub field: FieldPath,
    pub kind: DiagnosticKind,
}

impl ConfigDiagnostic {
    #[inline]
    pub fn message(&self) -> String {
        self.kind.message()
    }

    #[inline]
    pub fn hint(&self) -> Option<String> {
        self.kind.hint()
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message())?;
        if let Some(hint) = self.hint() {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings, printed as a batch.
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic as an error or a warning, per its kind.
    pub fn report(&mut self, field: FieldPath, kind: DiagnosticKind) {
        let diagnostic = ConfigDiagnostic { field, kind };
        if diagnostic.kind.is_error() {
            self.errors.push(diagnostic);
        } else {
            self.warnings.push(diagnostic);
        }
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "config has {} warning(s):", self.warnings.len());
        for warning in &self.warnings {
            eprintln!("- {}: {}", warning.field.as_str(), warning.message());
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("hreflang.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("hreflang.toml"));
    }

    #[test]
    fn test_report_sorts_by_severity() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.report(
            FieldPath::new("table.pairs[0]"),
            DiagnosticKind::SameLocale {
                from: UrlPath::from_page("/fr/a/"),
                to: UrlPath::from_page("/fr/b/"),
            },
        );
        diag.report(
            FieldPath::new("table.pages[1].zh"),
            DiagnosticKind::WrongColumn {
                path: UrlPath::from_page("/x/"),
                expected: Locale::Zh,
            },
        );
        diag.report(
            FieldPath::new("table.pages[2]"),
            DiagnosticKind::SparseRow { cells: 1 },
        );

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(
            diag.errors()[1].hint().as_deref(),
            Some("zh paths start with /zh/")
        );

        let display = diag.to_string();
        assert!(display.contains("table.pages[1].zh"));
        assert!(display.contains("`/x/` is not a zh path"));
        assert!(display.contains("both fr paths"));
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_messages_name_the_offending_path() {
        let kind = DiagnosticKind::NotAbsolute {
            raw: "fr/about".to_string(),
        };
        assert_eq!(kind.message(), "`fr/about` is not an absolute path");
        assert!(kind.is_error());

        let kind = DiagnosticKind::WrongColumn {
            path: UrlPath::from_page("/fr/x/"),
            expected: Locale::En,
        };
        assert_eq!(
            kind.hint().as_deref(),
            Some("en paths are `/` or anything outside /fr/ and /zh/")
        );
        assert!(!DiagnosticKind::SparseRow { cells: 0 }.is_error());
    }

    #[test]
    fn test_empty_diagnostics_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
