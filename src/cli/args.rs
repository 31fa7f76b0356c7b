//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::Locale;

/// Cross-language path translation for multilingual sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "hreflang.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Translate a page path into another language
    #[command(visible_alias = "t")]
    Translate {
        /// Page path or full URL (e.g. /en/about/ or https://example.com/fr/)
        path: String,

        /// Target language
        #[arg(short, long, value_enum)]
        to: Locale,

        /// Also print how the path was resolved (identity, table, fallback)
        #[arg(short, long)]
        explain: bool,
    },

    /// Show the language switcher options for a page
    #[command(visible_alias = "l")]
    Links {
        /// Page path or full URL
        path: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decide the first-visit redirect from browser languages
    #[command(visible_alias = "r")]
    Redirect {
        /// Requested page path
        #[arg(default_value = "/")]
        path: String,

        /// Browser languages in preference order (e.g. fr-FR,en)
        #[arg(short, long = "language", value_delimiter = ',')]
        languages: Vec<String>,

        /// Locale already stored as the visitor's preference
        #[arg(short, long, value_enum)]
        preferred: Option<Locale>,
    },

    /// List the effective mapping table
    Table {
        /// Only entries whose source is in this language
        #[arg(long, value_enum)]
        from: Option<Locale>,

        /// Only entries translating into this language
        #[arg(long, value_enum)]
        to: Option<Locale>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check the mapping table for shadowed and one-way entries
    #[command(visible_alias = "c")]
    Check {
        /// Treat errors as warnings (exit successfully)
        #[arg(long, short = 'w')]
        warn_only: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Shared output arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}

impl OutputArgs {
    /// Serialize `value` as requested.
    pub fn to_json<T: serde::Serialize>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}
