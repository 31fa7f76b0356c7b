//! `table` command.

use std::io::Write;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};

use super::OutputArgs;
use crate::core::{Locale, MappingTable, PathMapping};

/// Print the effective mapping table, optionally filtered by direction.
pub fn run_table(
    table: &MappingTable,
    from: Option<Locale>,
    to: Option<Locale>,
    output: &OutputArgs,
    out: &mut impl Write,
) -> Result<()> {
    let entries: Vec<&PathMapping> = table
        .entries()
        .iter()
        .filter(|e| from.is_none_or(|l| e.source_locale() == l))
        .filter(|e| to.is_none_or(|l| e.target_locale() == l))
        .collect();

    if output.json {
        writeln!(out, "{}", output.to_json(&entries)?)?;
        return Ok(());
    }

    let width = entries
        .iter()
        .map(|e| e.source.as_str().chars().count())
        .max()
        .unwrap_or_default();
    for entry in &entries {
        writeln!(
            out,
            "{:<width$} {} {}",
            entry.source.as_str(),
            "→".if_supports_color(Stdout, |t| t.dimmed()),
            entry.destination
        )?;
    }
    Ok(())
}
