//! `translate` command.

use std::io::Write;

use anyhow::Result;

use crate::core::{Locale, Translator, UrlPath};

/// Print the translation of `input` (path or URL) into `target`.
pub fn run_translate(
    translator: &Translator,
    input: &str,
    target: Locale,
    explain: bool,
    out: &mut impl Write,
) -> Result<()> {
    let path = UrlPath::from_input(input);
    let (translated, resolution) = translator.resolve(&path, target);

    if explain {
        writeln!(out, "{translated}\t{}", resolution.as_str())?;
    } else {
        writeln!(out, "{translated}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, target: Locale, explain: bool) -> String {
        let mut out = Vec::new();
        run_translate(&Translator::default(), input, target, explain, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_translated_path() {
        assert_eq!(run("/zh/about", Locale::Fr, false), "/fr/qui-sommes-nous/\n");
        assert_eq!(
            run("https://example.com/fr/services/distribution-2/", Locale::En, false),
            "/en/services/distribution/\n"
        );
    }

    #[test]
    fn test_explain() {
        assert_eq!(run("/fr/", Locale::En, true), "/\ttable\n");
        assert_eq!(run("/en/newpage/", Locale::Fr, true), "/fr/newpage/\tfallback\n");
        assert_eq!(run("/zh/x/", Locale::Zh, true), "/zh/x/\tidentity\n");
    }
}
