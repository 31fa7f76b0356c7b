//! Configuration management for `hreflang.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── table      # [table]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # HreflangConfig (this file)
//! ```
//!
//! The config file is optional: without one the built-in site table is used.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::TableConfig;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind, FieldPath};

use crate::{cli::Cli, core::MappingTable, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing hreflang.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HreflangConfig {
    /// Path of the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Mapping table settings
    pub table: TableConfig,
}

impl HreflangConfig {
    /// Load configuration for the CLI.
    ///
    /// Searches upward from cwd for the config file. A missing file is not
    /// an error; the defaults (built-in table) apply.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(path) = find_config_file(&cwd, &cli.config) else {
            debug!("config"; "{} not found, using built-in table", cli.config.display());
            return Ok(Self::default());
        };

        debug!("config"; "loading {}", path.display());
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, _) = Self::parse_with_ignored(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate all sections.
    ///
    /// Collects all validation errors and returns them at once; warnings
    /// are printed but do not fail.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.table.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// The mapping table described by this configuration.
    pub fn mapping_table(&self) -> MappingTable {
        self.table.to_table()
    }
}

// ============================================================================
// tests
// ============================================================================
