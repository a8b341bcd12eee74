//! URLs, domains, e-mail addresses and social-media handles.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::punct;

/// URL schemes. www-prefixed names without a scheme are DOMAIN tokens.
pub const URL_PREFIXES: &[&str] = &[
    "http://", "https://", "file://", "ftp://", "ssh://", "sftp://", "smb://",
];

pub fn has_url_prefix(s: &str) -> bool {
    URL_PREFIXES.iter().any(|p| s.starts_with(p))
}

/// Shortest credible domain, e.g. "t.co".
pub const MIN_DOMAIN_LENGTH: usize = 4;

const TOP_LEVEL_DOMAINS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "arpa", "eu", "biz", "info", "xyz", "online",
    "site", "tech", "top", "space", "news", "pro", "club", "loan", "win", "vip", "icu", "app",
    "blog", "shop", "work", "ltd", "mobi", "live", "store", "gdn", "art", "events",
    // ccTLDs. "kr" is omitted: it clashes with the currency abbreviation
    // (e.g. "þús.kr" would read as a domain).
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw",
    "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br",
    "bs", "bt", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm",
    "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz",
    "ec", "ee", "eg", "er", "es", "et", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gd", "ge",
    "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy",
    "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq", "ir", "is",
    "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp", "kw", "ky", "kz",
    "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma", "mc", "md", "me",
    "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw",
    "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np", "nr", "nu", "nz",
    "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr", "ps", "pt", "pw", "py",
    "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg", "sh", "si", "sk",
    "sl", "sm", "sn", "so", "sr", "ss", "st", "sv", "sx", "sy", "sz", "tc", "td", "tf", "tg",
    "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv", "tw", "tz", "ua", "ug", "uk",
    "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf", "ws", "ye", "yt", "za",
    "zm", "zw",
];

static TLD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TOP_LEVEL_DOMAINS.iter().copied().collect());

pub fn is_tld(s: &str) -> bool {
    TLD_SET.contains(s)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// If `s` starts a domain name (after stripping trailing punctuation),
/// return the char length of the domain part.
pub fn domain_prefix_len(s: &str) -> Option<usize> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < MIN_DOMAIN_LENGTH || !chars[0].is_alphanumeric() {
        return None;
    }
    // Cheap filter: the TLD is at least two chars, so an interior dot must
    // exist before the last two positions
    if !chars[1..chars.len().saturating_sub(2)].contains(&'.') {
        return None;
    }
    let mut end = chars.len();
    while end > 0 && punct::is_punct_char(chars[end - 1]) {
        end -= 1;
    }
    if end < MIN_DOMAIN_LENGTH {
        return None;
    }
    let last_dot = chars[..end].iter().rposition(|&c| c == '.')?;
    if last_dot == 0 || !is_word_char(chars[last_dot - 1]) {
        return None;
    }
    let tld: String = chars[last_dot + 1..end].iter().collect();
    if !is_tld(&tld.to_lowercase()) {
        return None;
    }
    Some(end)
}

/// local@host, where the host looks like a domain. Double quotes are not
/// accepted even though the RFCs technically allow them.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^@\s]+@[^@\s]+(\.[^@\s.,/:;"()%#!?”]+)+"#).expect("e-mail pattern is valid")
});

/// Social-media handle: letters, digits, underscores and embedded
/// (non-consecutive) periods.
pub static USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@[0-9a-zA-Z_]+(\.[0-9a-zA-Z_]+)*").expect("username pattern is valid")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains() {
        assert!(domain_prefix_len("mbl.is").is_some());
        assert!(domain_prefix_len("www.greynir.is").is_some());
        assert!(domain_prefix_len("RÚV.is").is_some());
        assert!(domain_prefix_len("9gag.com").is_some());
        assert!(domain_prefix_len("4chan.org!").map(|n| n == 9).unwrap_or(false));
        assert!(domain_prefix_len("t.co").is_some());
        assert!(domain_prefix_len("a.b").is_none());
        assert!(domain_prefix_len("orð.").is_none());
        // "kr" is deliberately not a TLD
        assert!(domain_prefix_len("þús.kr").is_none());
    }

    #[test]
    fn emails() {
        assert!(EMAIL.is_match("fake@news.is"));
        assert!(EMAIL.is_match("jon.jonsson.99@netfang.is"));
        assert!(!EMAIL.is_match("@handle"));
        assert!(!EMAIL.is_match("no at sign"));
    }

    #[test]
    fn usernames() {
        assert_eq!(USERNAME.find("@user_123.next").map(|m| m.as_str()), Some("@user_123.next"));
        assert!(USERNAME.find("@@").is_none());
    }
}
