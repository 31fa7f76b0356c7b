//! hreflang command-line entry point.

use std::io::{Write, stdout};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use hreflang::{
    cli::{self, Cli, Commands},
    config::HreflangConfig,
    core::Translator,
    log, logger,
};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = HreflangConfig::load(&cli)?;
    let translator = Translator::new(config.mapping_table());

    let mut out = stdout().lock();
    match &cli.command {
        Commands::Translate { path, to, explain } => {
            cli::translate::run_translate(&translator, path, *to, *explain, &mut out)
        }
        Commands::Links { path, output } => {
            cli::links::run_links(&translator, path, output, &mut out)
        }
        Commands::Redirect {
            path,
            languages,
            preferred,
        } => cli::redirect::run_redirect(&translator, path, languages, *preferred, &mut out),
        Commands::Table { from, to, output } => {
            cli::table::run_table(translator.table(), *from, *to, output, &mut out)
        }
        Commands::Check { warn_only, output } => {
            cli::check::run_check(translator.table(), *warn_only, output, &mut out)
        }
    }?;
    out.flush()?;
    Ok(())
}
