//! `links` command.

use std::io::Write;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};

use super::OutputArgs;
use crate::core::{Translator, UrlPath};

/// Print the language switcher options for the page at `input`.
pub fn run_links(
    translator: &Translator,
    input: &str,
    output: &OutputArgs,
    out: &mut impl Write,
) -> Result<()> {
    let path = UrlPath::from_input(input);
    let options = translator.language_options(path.as_str());

    if output.json {
        writeln!(out, "{}", output.to_json(&options)?)?;
        return Ok(());
    }

    for option in &options {
        let marker = if option.current { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:<4} {}  {}",
            option.hreflang,
            option.href,
            option.name.if_supports_color(Stdout, |t| t.dimmed())
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        run_links(
            &Translator::default(),
            "/fr/qui-sommes-nous",
            &OutputArgs::default(),
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  en   /en/about/"));
        assert!(lines[1].starts_with("* fr   /fr/qui-sommes-nous/"));
        assert!(lines[2].starts_with("  zh   /zh/about/"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        let output = OutputArgs {
            json: true,
            pretty: false,
        };
        run_links(&Translator::default(), "/", &output, &mut out).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        let hrefs: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["href"].as_str().unwrap())
            .collect();
        assert_eq!(hrefs, ["/", "/fr/", "/zh/"]);
        assert_eq!(value[0]["current"], true);
        assert_eq!(value[2]["label"], "中文");
    }
}
