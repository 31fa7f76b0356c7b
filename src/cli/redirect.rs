//! `redirect` command.

use std::io::Write;

use anyhow::Result;

use crate::core::{Locale, STORAGE_KEY, Translator, UrlPath};
use crate::debug;

/// Print the first-visit redirect target, or nothing when the visitor stays.
pub fn run_redirect(
    translator: &Translator,
    input: &str,
    languages: &[String],
    preferred: Option<Locale>,
    out: &mut impl Write,
) -> Result<()> {
    let path = UrlPath::from_input(input);
    if let Some(locale) = preferred {
        debug!("redirect"; "{} = {}, not redirecting", STORAGE_KEY, locale);
    }

    match translator.auto_redirect(path.as_str(), languages, preferred) {
        Some(target) => writeln!(out, "{target}")?,
        None => debug!("redirect"; "{} stays on {}", languages.join(","), path),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, languages: &[&str], preferred: Option<Locale>) -> String {
        let languages: Vec<String> = languages.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        run_redirect(&Translator::default(), input, &languages, preferred, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_redirects_french_browser() {
        assert_eq!(run("/", &["fr-FR", "en"], None), "/fr/\n");
        assert_eq!(run("https://example.com/", &["zh-CN"], None), "/zh/\n");
    }

    #[test]
    fn test_stays() {
        assert_eq!(run("/", &["en-GB"], None), "");
        assert_eq!(run("/", &["fr"], Some(Locale::En)), "");
        assert_eq!(run("/en/about/", &["fr"], None), "");
        assert_eq!(run("/", &[], None), "");
    }
}
