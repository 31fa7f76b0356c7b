//! `check` command.

use std::io::Write;

use anyhow::{Result, bail};
use owo_colors::{OwoColorize, Stream::Stdout, Style};

use super::OutputArgs;
use crate::core::{CheckReport, Issue, MappingTable, check};
use crate::log;

/// Check the mapping table and print a report.
///
/// Fails when errors are found, unless `warn_only` is set.
pub fn run_check(
    table: &MappingTable,
    warn_only: bool,
    output: &OutputArgs,
    out: &mut impl Write,
) -> Result<()> {
    let report = check(table);

    if output.json {
        writeln!(out, "{}", output.to_json(&report)?)?;
    } else {
        print_report(&report, out)?;
    }

    let errors = report.errors().count();
    if errors > 0 && !warn_only {
        bail!("mapping table check failed with {}", plural_count(errors, "error"));
    }
    log!("check"; "{} checked", plural_count(report.entries, "entry"));
    Ok(())
}

fn print_report(report: &CheckReport, out: &mut impl Write) -> Result<()> {
    print_section("errors", report.errors(), out)?;
    print_section("warnings", report.warnings(), out)?;

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    if errors + warnings == 0 {
        writeln!(out, "{}", "all checks passed".if_supports_color(Stdout, |t| t.green()))?;
    } else {
        writeln!(
            out,
            "{} {}, {}",
            "found".if_supports_color(Stdout, |t| t.dimmed()),
            plural_count(errors, "error")
                .if_supports_color(Stdout, |t| t.style(Style::new().red().bold())),
            plural_count(warnings, "warning").if_supports_color(Stdout, |t| t.yellow())
        )?;
    }
    Ok(())
}

fn print_section<'a>(
    name: &str,
    issues: impl Iterator<Item = &'a Issue>,
    out: &mut impl Write,
) -> Result<()> {
    let mut issues = issues.peekable();
    if issues.peek().is_none() {
        return Ok(());
    }

    writeln!(out, "{}", name.if_supports_color(Stdout, |t| t.bold()))?;
    for issue in issues {
        writeln!(
            out,
            "{}{}{} {} {} {} {}",
            "[".if_supports_color(Stdout, |t| t.dimmed()),
            issue.index.if_supports_color(Stdout, |t| t.cyan()),
            "]".if_supports_color(Stdout, |t| t.dimmed()),
            issue.entry.source,
            "→".if_supports_color(Stdout, |t| t.red()),
            issue.entry.destination,
            issue.kind.describe().if_supports_color(Stdout, |t| t.dimmed())
        )?;
    }
    Ok(())
}

fn plural_count(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "entry") => format!("{count} entries"),
        _ => format!("{count} {noun}s"),
    }
}
