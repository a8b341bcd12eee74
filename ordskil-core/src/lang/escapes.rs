//! Named and numeric HTML escapes, as they occur in Icelandic web corpora.

use std::sync::LazyLock;

use regex::Regex;

/// Named escapes and their replacements. All space variants map to a plain
/// space; the soft hyphen maps to nothing.
pub const NAMED_ESCAPES: &[(&str, &str)] = &[
    // Icelandic letters
    ("aacute", "á"),
    ("eth", "ð"),
    ("eacute", "é"),
    ("iacute", "í"),
    ("oacute", "ó"),
    ("uacute", "ú"),
    ("yacute", "ý"),
    ("thorn", "þ"),
    ("aelig", "æ"),
    ("ouml", "ö"),
    ("Aacute", "Á"),
    ("ETH", "Ð"),
    ("Eacute", "É"),
    ("Iacute", "Í"),
    ("Oacute", "Ó"),
    ("Uacute", "Ú"),
    ("Yacute", "Ý"),
    ("THORN", "Þ"),
    ("AElig", "Æ"),
    ("Ouml", "Ö"),
    // Punctuation
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("quot", "\""),
    ("apos", "'"),
    ("bdquo", "„"),
    ("ldquo", "“"),
    ("rdquo", "”"),
    ("lsquo", "‘"),
    ("acute", "´"),
    ("lcub", "{"),
    ("rcub", "}"),
    ("darr", "↓"),
    ("uarr", "↑"),
    ("ring", "˚"),
    ("deg", "°"),
    ("diam", "⋄"),
    ("ordm", "º"),
    ("ogon", "˛"),
    ("hellip", "…"),
    ("copy", "©"),
    ("reg", "®"),
    ("trade", "™"),
    // Spaces
    ("nbsp", " "),
    ("ensp", " "),
    ("emsp", " "),
    ("thinsp", " "),
    // Dashes and hyphens
    ("ndash", "–"),
    ("mdash", "—"),
    ("shy", ""),
    // Other non-ASCII letters
    ("uuml", "ü"),
    ("Uuml", "Ü"),
    ("zcaron", "ž"),
    ("Zcaron", "Ž"),
    ("lstrok", "ł"),
    ("Lstrok", "Ł"),
    ("ntilde", "ñ"),
    ("inodot", "ı"),
    // Ligatures
    ("filig", "fi"),
    ("fllig", "fl"),
];

/// Matches `&name;`, `&#xHEX;` and `&#DECIMAL;`.
pub static HTML_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<&str> = NAMED_ESCAPES.iter().map(|&(n, _)| n).collect();
    let pattern = format!(
        r"&((#x[0-9a-fA-F]{{1,8}})|(#\d{{1,10}})|({}));",
        names.join("|")
    );
    Regex::new(&pattern).expect("HTML escape pattern is valid")
});

/// Replacement for a matched escape body (the part between '&' and ';').
pub fn expansion(body: &str) -> Option<String> {
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        let cp = u32::from_str_radix(hex, 16).ok()?;
        return char::from_u32(cp).map(|c| c.to_string());
    }
    if let Some(dec) = body.strip_prefix('#') {
        let cp: u32 = dec.parse().ok()?;
        return char::from_u32(cp).map(|c| c.to_string());
    }
    NAMED_ESCAPES
        .iter()
        .find(|&&(n, _)| n == body)
        .map(|&(_, r)| r.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named() {
        assert_eq!(expansion("aacute").as_deref(), Some("á"));
        assert_eq!(expansion("filig").as_deref(), Some("fi"));
        assert_eq!(expansion("shy").as_deref(), Some(""));
        assert_eq!(expansion("nosuch"), None);
    }

    #[test]
    fn numeric() {
        assert_eq!(expansion("#225").as_deref(), Some("á"));
        assert_eq!(expansion("#xE1").as_deref(), Some("á"));
    }

    #[test]
    fn regex_matches() {
        assert!(HTML_ESCAPE.is_match("&aacute;"));
        assert!(HTML_ESCAPE.is_match("&#225;"));
        assert!(HTML_ESCAPE.is_match("&#xE1;"));
        assert!(!HTML_ESCAPE.is_match("&nosuchthing;"));
    }
}
