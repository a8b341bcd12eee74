//! Stage 2 helper: classification of a raw token that starts with a digit
//! (or a sign followed by a digit).
//!
//! The patterns form an ordered cascade; the first match wins and the
//! token is split at the match boundary, handing the remainder back to the
//! mixed-token loop. The matchers are hand-rolled scanners rather than
//! regexes: the original patterns lean on trailing-context assertions
//! ("not followed by a digit") and exact three-digit separator groups,
//! which are expressed here as explicit run-length checks.

use crate::lang::{currency, months, numbers, ssn, units};
use crate::token::{Token, TokenKind};

/// Classify the front of `tok` and split it off. The second token of the
/// pair is the unclassified remainder (possibly empty).
pub fn parse_digits(tok: Token, convert_numbers: bool) -> (Token, Token) {
    let chars: Vec<char> = tok.txt.chars().collect();
    let c = &chars[..];

    // 24-hour clock, with or without seconds, optionally with trailing
    // milliseconds (H:MM:SS,mm) which are dropped
    if let Some((len, h, m, s)) = match_time(c) {
        if h < 24 && m < 60 && s < 60 {
            let (t, rest) = tok.split(len);
            return (t.into_time(h, m, s), rest);
        }
    }

    // ISO date: YYYY-MM-DD or YYYY/MM/DD
    if let Some((len, y, m, d)) = match_iso_date(c) {
        if months::is_valid_date(y, m, d) {
            let (t, rest) = tok.split(len);
            return (t.into_date(TokenKind::Date, y, m, d), rest);
        }
    }

    // Day, month and year: DD.MM.YYYY, DD/MM/YYYY or DD-MM-YYYY
    if let Some((len, d, m, y)) = match_dmy_date(c) {
        let y = if y <= 99 {
            if y > 50 {
                y + 1900
            } else {
                y + 2000
            }
        } else {
            y
        };
        let (m, d) = if m > 12 && d <= 12 { (d, m) } else { (m, d) };
        if months::is_valid_date(y, m, d) {
            let (t, rest) = tok.split(len);
            return (t.into_date(TokenKind::Date, y, m, d), rest);
        }
    }

    // Day and month: DD.MM (slashes would collide with sports scores)
    if let Some((len, d, m)) = match_day_month(c) {
        if (1..=12).contains(&m) && d >= 1 && d <= months::days_in_month(m) {
            let (t, rest) = tok.split(len);
            return (t.into_date(TokenKind::DateRel, 0, m, d), rest);
        }
    }

    // Month and year: MM.YYYY or MM-YYYY
    if let Some((len, m, y)) = match_month_year(c) {
        if (1776..=2100).contains(&y) && (1..=12).contains(&m) {
            let (t, rest) = tok.split(len);
            return (t.into_date(TokenKind::DateRel, y, m, 0), rest);
        }
    }

    // Number with a single trailing letter (house numbers: "4B"), unless
    // the letter is a measurement unit
    if let Some((len, n, letter)) = match_num_letter(c) {
        if !units::is_unit(&letter.to_string()) {
            let (t, rest) = tok.split(len);
            return (t.into_numletter(n, letter), rest);
        }
    }

    // Number immediately followed by a unit or currency symbol, in
    // Icelandic, English or vulgar-fraction notation
    if let Some(result) = match_number_with_unit(tok.clone(), c, convert_numbers) {
        return result;
    }

    // Digits followed by a vulgar fraction char ("2½")
    if let Some((len, value)) = match_digit_fraction(c) {
        let (t, rest) = tok.split(len);
        return (t.into_number(value), rest);
    }

    // Icelandic real number: decimal comma, optional dot-grouped thousands
    if let Some((len, value)) = match_ice_real(c) {
        let (t, rest) = tok.split(len);
        return (t.into_number(value), rest);
    }

    // Integer with dot-grouped thousands ("30.000")
    if let Some((len, value)) = match_ice_grouped_int(c) {
        let (t, rest) = tok.split(len);
        return (t.into_number(value), rest);
    }

    // D/M: a fraction for small numerators and denominators, otherwise a
    // day/month date
    if let Some((len, d, m)) = match_slash_date(c) {
        let slash = digit_run(c, 0);
        let is_fraction = c[0] != '0'
            && !at_is(c, slash + 1, '0')
            && ((d <= 5 && m <= 6) || (d == 1 && m <= 10));
        if is_fraction {
            let (t, rest) = tok.split(len);
            return (t.into_number(d as f64 / m as f64), rest);
        }
        let (m, d) = if m > 12 && d <= 12 { (d, m) } else { (m, d) };
        if (1..=12).contains(&m) && d >= 1 && d <= months::days_in_month(m) {
            let (t, rest) = tok.split(len);
            return (t.into_date(TokenKind::DateRel, 0, m, d), rest);
        }
    }

    // Bare year
    if digit_run(c, 0) == 4 {
        if let Ok(y) = collect(c, 0, 4).parse::<i32>() {
            if (1776..=2100).contains(&y) {
                let (t, rest) = tok.split(4);
                return (t.into_year(y), rest);
            }
        }
    }

    // Social security number with a valid checksum
    if let Some(len) = match_ssn(c) {
        let (t, rest) = tok.split(len);
        return (t.into_ssn(), rest);
    }

    // DDD-DDDD: a telephone number when the prefix is plausible,
    // otherwise a serial number
    if digit_run(c, 0) == 3 && at_is(c, 3, '-') && digit_run(c, 4) == 4 && !digit_at(c, 8) {
        let (t, rest) = tok.split(8);
        if numbers::is_telno_prefix(c[0]) {
            let telno = t.txt.clone();
            return (t.into_telno(telno, "354"), rest);
        }
        return (t.into_kind(TokenKind::SerialNumber), rest);
    }

    // Multi-component serial number ("394-8362-12")
    if let Some(len) = match_multi_serial(c) {
        let (t, rest) = tok.split(len);
        return (t.into_kind(TokenKind::SerialNumber), rest);
    }

    // Seven-digit telephone number without a hyphen
    if digit_run(c, 0) == 7 && numbers::is_telno_prefix(c[0]) {
        let (t, rest) = tok.split(7);
        let telno = format!("{}-{}", collect(c, 0, 3), collect(c, 3, 7));
        return (t.into_telno(telno, "354"), rest);
    }

    // Chapter ordinal ("2.5.1")
    if let Some((len, n)) = match_chapter(c) {
        let (t, rest) = tok.split(len);
        return (t.into_ordinal(n), rest);
    }

    // English real number: decimal point, optional comma-grouped thousands
    if let Some((len, value)) = match_en_real(c) {
        let (mut t, rest) = tok.split(len);
        if convert_numbers {
            convert_to_icelandic(&mut t);
        }
        return (t.into_number(value), rest);
    }

    // Integer, possibly with comma-grouped thousands
    if let Some((len, value)) = match_en_int(c) {
        let (mut t, rest) = tok.split(len);
        if convert_numbers {
            t.substitute_all(",", ".");
        }
        return (t.into_number(value), rest);
    }

    // Nothing matched: the whole token is opaque
    let len = tok.len_chars();
    let (t, rest) = tok.split(len);
    (t.into_kind(TokenKind::Unknown), rest)
}

/// Rewrite English number punctuation to Icelandic within a token surface.
pub fn convert_to_icelandic(t: &mut Token) {
    t.substitute_all(",", "\u{1}");
    t.substitute_all(".", ",");
    t.substitute_all("\u{1}", ".");
}

// Scanner helpers. All positions are char indices.

fn digit_run(c: &[char], from: usize) -> usize {
    c.get(from..)
        .map(|s| s.iter().take_while(|c| c.is_ascii_digit()).count())
        .unwrap_or(0)
}

fn digit_at(c: &[char], i: usize) -> bool {
    c.get(i).is_some_and(char::is_ascii_digit)
}

fn at_is(c: &[char], i: usize, ch: char) -> bool {
    c.get(i) == Some(&ch)
}

fn word_char_at(c: &[char], i: usize) -> bool {
    c.get(i).is_some_and(|&c| c.is_alphanumeric() || c == '_')
}

fn collect(c: &[char], from: usize, to: usize) -> String {
    c[from..to].iter().collect()
}

fn parse_u32(c: &[char], from: usize, to: usize) -> Option<u32> {
    collect(c, from, to).parse().ok()
}

/// H:MM[:SS][,mm] with exact two-digit fields.
fn match_time(c: &[char]) -> Option<(usize, u32, u32, u32)> {
    let r1 = digit_run(c, 0);
    if r1 == 0 || r1 > 2 || !at_is(c, r1, ':') {
        return None;
    }
    if digit_run(c, r1 + 1) != 2 {
        return None;
    }
    let h = parse_u32(c, 0, r1)?;
    let m = parse_u32(c, r1 + 1, r1 + 3)?;
    let mut end = r1 + 3;
    let mut s = 0;
    if at_is(c, end, ':') && digit_run(c, end + 1) == 2 {
        s = parse_u32(c, end + 1, end + 3)?;
        end += 3;
        // Milliseconds are recognized but dropped
        if at_is(c, end, ',') && digit_run(c, end + 1) == 2 {
            end += 3;
        }
    }
    Some((end, h, m, s))
}

/// YYYY-MM-DD / YYYY/MM/DD with a consistent separator.
fn match_iso_date(c: &[char]) -> Option<(usize, i32, u32, u32)> {
    if digit_run(c, 0) != 4 {
        return None;
    }
    let sep = *c.get(4)?;
    if sep != '-' && sep != '/' {
        return None;
    }
    if digit_run(c, 5) != 2 || !at_is(c, 7, sep) || digit_run(c, 8) != 2 || digit_at(c, 10) {
        return None;
    }
    let y = collect(c, 0, 4).parse::<i32>().ok()?;
    let m = parse_u32(c, 5, 7)?;
    let d = parse_u32(c, 8, 10)?;
    Some((10, y, m, d))
}

/// D.M.YY(YY) with '.', '/' or '-' as a consistent separator.
fn match_dmy_date(c: &[char]) -> Option<(usize, u32, u32, i32)> {
    let r1 = digit_run(c, 0);
    if r1 == 0 || r1 > 2 {
        return None;
    }
    let sep = *c.get(r1)?;
    if sep != '.' && sep != '/' && sep != '-' {
        return None;
    }
    let r2 = digit_run(c, r1 + 1);
    if r2 == 0 || r2 > 2 || !at_is(c, r1 + 1 + r2, sep) {
        return None;
    }
    let y_start = r1 + r2 + 2;
    let r3 = digit_run(c, y_start);
    if !(2..=4).contains(&r3) || digit_at(c, y_start + r3) {
        return None;
    }
    let d = parse_u32(c, 0, r1)?;
    let m = parse_u32(c, r1 + 1, r1 + 1 + r2)?;
    let y = collect(c, y_start, y_start + r3).parse::<i32>().ok()?;
    Some((y_start + r3, d, m, y))
}

/// DD.MM with exact two-digit fields.
fn match_day_month(c: &[char]) -> Option<(usize, u32, u32)> {
    if digit_run(c, 0) != 2 || !at_is(c, 2, '.') || digit_run(c, 3) != 2 || digit_at(c, 5) {
        return None;
    }
    Some((5, parse_u32(c, 0, 2)?, parse_u32(c, 3, 5)?))
}

/// MM.YYYY or MM-YYYY.
fn match_month_year(c: &[char]) -> Option<(usize, u32, i32)> {
    if digit_run(c, 0) != 2 {
        return None;
    }
    let sep = *c.get(2)?;
    if sep != '.' && sep != '-' {
        return None;
    }
    if digit_run(c, 3) != 4 || digit_at(c, 7) {
        return None;
    }
    let m = parse_u32(c, 0, 2)?;
    let y = collect(c, 3, 7).parse::<i32>().ok()?;
    Some((7, m, y))
}

/// Digits followed by a single ASCII letter and a word boundary.
fn match_num_letter(c: &[char]) -> Option<(usize, i64, char)> {
    let r = digit_run(c, 0);
    if r == 0 {
        return None;
    }
    let letter = *c.get(r)?;
    if !letter.is_ascii_alphabetic() || word_char_at(c, r + 1) {
        return None;
    }
    let n = collect(c, 0, r).parse::<i64>().ok()?;
    Some((r + 1, n, letter))
}

/// Sign and integer part with exact-three-digit separator groups, plus an
/// optional decimal part. Returns (end of grouped integer, group count,
/// end including the decimal part if present).
fn scan_grouped(c: &[char], group_sep: char, decimal_sep: char) -> Option<(usize, usize, Option<usize>)> {
    let mut i = 0;
    if matches!(c.first(), Some('+') | Some('-')) && digit_at(c, 1) {
        i = 1;
    }
    let r = digit_run(c, i);
    if r == 0 {
        return None;
    }
    i += r;
    let mut groups = 0;
    while at_is(c, i, group_sep) && digit_run(c, i + 1) == 3 {
        i += 4;
        groups += 1;
    }
    let decimal_end = if at_is(c, i, decimal_sep) {
        let d = digit_run(c, i + 1);
        (d > 0).then_some(i + 1 + d)
    } else {
        None
    };
    Some((i, groups, decimal_end))
}

fn numeric_value(c: &[char], end: usize, group_sep: char, decimal_sep: char) -> Option<f64> {
    let mut s = String::with_capacity(end);
    for &ch in &c[..end] {
        if ch == group_sep {
            continue;
        }
        s.push(if ch == decimal_sep { '.' } else { ch });
    }
    s.parse().ok()
}

enum UnitMatch {
    Measurement { base: &'static str, value: f64 },
    Percent(f64),
    Amount { iso: &'static str, value: f64 },
}

/// Number (Icelandic, English or digit+fraction form) immediately followed
/// by a measurement unit, percent/promille sign or currency symbol.
fn match_number_with_unit(
    tok: Token,
    c: &[char],
    convert_numbers: bool,
) -> Option<(Token, Token)> {
    // Icelandic form first, then English, then digits + vulgar fraction
    let mut attempts: Vec<(usize, f64, bool)> = Vec::with_capacity(3);
    if let Some((i, _, dec)) = scan_grouped(c, '.', ',') {
        let end = dec.unwrap_or(i);
        if let Some(v) = numeric_value(c, end, '.', ',') {
            attempts.push((end, v, false));
        }
    }
    if let Some((i, _, dec)) = scan_grouped(c, ',', '.') {
        let end = dec.unwrap_or(i);
        if let Some(v) = numeric_value(c, end, ',', '.') {
            attempts.push((end, v, true));
        }
    }
    if let Some((end, v)) = match_digit_fraction(c) {
        attempts.push((end, v, false));
    }

    let mut matched: Option<(usize, bool, UnitMatch)> = None;
    for &(num_end, value, english) in &attempts {
        let rest: String = c[num_end..].iter().collect();
        if let Some(unit) = units::unit_prefix(&rest) {
            let end = num_end + unit.chars().count();
            if let Some((base, converted)) = units::convert(unit, value) {
                let m = if base == "%" || base == "‰" {
                    UnitMatch::Percent(converted)
                } else {
                    UnitMatch::Measurement {
                        base,
                        value: converted,
                    }
                };
                matched = Some((end, english, m));
                break;
            }
        }
        let symbol: Option<(char, &'static str)> = rest
            .chars()
            .next()
            .and_then(|ch| currency::symbol_iso(&ch.to_string()).map(|iso| (ch, iso)));
        if let Some((_, iso)) = symbol {
            matched = Some((num_end + 1, english, UnitMatch::Amount { iso, value }));
            break;
        }
    }

    let (end, english, m) = matched?;
    let (mut t, remainder) = tok.split(end);
    if english && convert_numbers {
        convert_to_icelandic(&mut t);
    }
    let t = match m {
        UnitMatch::Measurement { base, value } => t.into_measurement(base, value),
        UnitMatch::Percent(v) => t.into_percent(v),
        UnitMatch::Amount { iso, value } => t.into_amount(value, iso),
    };
    Some((t, remainder))
}

/// Digits followed by a single vulgar fraction char.
fn match_digit_fraction(c: &[char]) -> Option<(usize, f64)> {
    let r = digit_run(c, 0);
    if r == 0 {
        return None;
    }
    let frac = numbers::fraction_value(*c.get(r)?)?;
    let int: f64 = collect(c, 0, r).parse().ok()?;
    Some((r + 1, int + frac))
}

/// Icelandic real: decimal comma required. Rejected when the remainder
/// betrays an English-style number ("1,234.56" or "1,234,567").
fn match_ice_real(c: &[char]) -> Option<(usize, f64)> {
    let (_, _, decimal) = scan_grouped(c, '.', ',')?;
    let end = decimal?;
    if at_is(c, end, '.') && digit_at(c, end + 1) {
        return None;
    }
    if at_is(c, end, ',') && digit_at(c, end + 1) {
        return None;
    }
    Some((end, numeric_value(c, end, '.', ',')?))
}

/// Integer with at least one dot-separated thousands group.
fn match_ice_grouped_int(c: &[char]) -> Option<(usize, f64)> {
    let (end, groups, _) = scan_grouped(c, '.', ',')?;
    if groups == 0 || digit_at(c, end) {
        return None;
    }
    Some((end, numeric_value(c, end, '.', ',')?))
}

/// D/M with at most two digits on each side.
fn match_slash_date(c: &[char]) -> Option<(usize, u32, u32)> {
    let r1 = digit_run(c, 0);
    if r1 == 0 || r1 > 2 || !at_is(c, r1, '/') {
        return None;
    }
    let r2 = digit_run(c, r1 + 1);
    if r2 == 0 || r2 > 2 {
        return None;
    }
    let d = parse_u32(c, 0, r1)?;
    let m = parse_u32(c, r1 + 1, r1 + 1 + r2)?;
    Some((r1 + 1 + r2, d, m))
}

/// DDMMYY-NNNN with a valid checksum.
fn match_ssn(c: &[char]) -> Option<usize> {
    if digit_run(c, 0) != 6 || !at_is(c, 6, '-') || digit_run(c, 7) != 4 || digit_at(c, 11) {
        return None;
    }
    let s = collect(c, 0, 11);
    ssn::valid_ssn(&s).then_some(11)
}

/// Three or more dash-separated digit groups.
fn match_multi_serial(c: &[char]) -> Option<usize> {
    let mut i = digit_run(c, 0);
    if i == 0 {
        return None;
    }
    let mut parts = 1;
    while at_is(c, i, '-') && digit_run(c, i + 1) > 0 {
        i += 1 + digit_run(c, i + 1);
        parts += 1;
    }
    (parts >= 3).then_some(i)
}

/// Dotted chapter number with at least three components ("2.5.1"); the
/// digits are concatenated into the ordinal value.
fn match_chapter(c: &[char]) -> Option<(usize, i64)> {
    let mut i = digit_run(c, 0);
    if i == 0 {
        return None;
    }
    let mut parts = 1;
    while at_is(c, i, '.') && digit_run(c, i + 1) > 0 {
        i += 1 + digit_run(c, i + 1);
        parts += 1;
    }
    if parts < 3 {
        return None;
    }
    let n: String = c[..i].iter().filter(|&&ch| ch != '.').collect();
    Some((i, n.parse().ok()?))
}

/// English real: decimal point required, optional comma groups.
fn match_en_real(c: &[char]) -> Option<(usize, f64)> {
    let (_, _, decimal) = scan_grouped(c, ',', '.')?;
    let end = decimal?;
    Some((end, numeric_value(c, end, ',', '.')?))
}

/// Integer with optional comma groups.
fn match_en_int(c: &[char]) -> Option<(usize, f64)> {
    let (end, _, _) = scan_grouped(c, ',', '.')?;
    if digit_at(c, end) {
        return None;
    }
    Some((end, numeric_value(c, end, ',', '.')?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenValue;

    fn classify(s: &str) -> Token {
        parse_digits(Token::raw(s), false).0
    }

    #[test]
    fn times() {
        let t = classify("13:45");
        assert_eq!(t.kind, TokenKind::Time);
        assert_eq!(
            t.val,
            Some(TokenValue::Time {
                hour: 13,
                minute: 45,
                second: 0
            })
        );
        let t = classify("14:56:10");
        assert_eq!(
            t.val,
            Some(TokenValue::Time {
                hour: 14,
                minute: 56,
                second: 10
            })
        );
        // Three digits after the colon are not a time
        let t = classify("13:450");
        assert_eq!(t.kind, TokenKind::Number);
        assert_eq!(t.txt, "13");
    }

    #[test]
    fn dates() {
        let t = classify("2013-06-17");
        assert_eq!(t.kind, TokenKind::Date);
        assert_eq!(
            t.val,
            Some(TokenValue::Date {
                year: 2013,
                month: 6,
                day: 17
            })
        );
        let t = classify("17/6/2013");
        assert_eq!(t.kind, TokenKind::Date);
        let t = classify("17/6");
        assert_eq!(t.kind, TokenKind::DateRel);
        assert_eq!(
            t.val,
            Some(TokenValue::Date {
                year: 0,
                month: 6,
                day: 17
            })
        );
        // Invalid dates stay numbers
        let t = classify("31/02/2013");
        assert_ne!(t.kind, TokenKind::Date);
    }

    #[test]
    fn numbers_icelandic_and_english() {
        assert_eq!(classify("2.013").val, Some(TokenValue::Number(2013.0)));
        assert_eq!(classify("2,013").val, Some(TokenValue::Number(2.013)));
        assert_eq!(classify("2.013,45").val, Some(TokenValue::Number(2013.45)));
        assert_eq!(classify("2,013.45").val, Some(TokenValue::Number(2013.45)));
        assert_eq!(classify("20130").val, Some(TokenValue::Number(20130.0)));
        // Mixed separators fall back to smaller matches
        let t = classify("2.0134,45");
        assert_eq!(t.txt, "2.0134");
        assert_eq!(t.val, Some(TokenValue::Number(2.0134)));
        let t = classify("2,0134.45");
        assert_eq!(t.txt, "2");
    }

    #[test]
    fn fractions() {
        assert_eq!(classify("1/2").val, Some(TokenValue::Number(0.5)));
        assert_eq!(classify("1/4").val, Some(TokenValue::Number(0.25)));
        assert_eq!(classify("2⅞").val, Some(TokenValue::Number(2.875)));
        // 1/20 is a date, 1/37 is not
        assert_eq!(classify("1/20").kind, TokenKind::DateRel);
        assert_eq!(classify("1/37").kind, TokenKind::Number);
    }

    #[test]
    fn years() {
        assert_eq!(classify("2013").kind, TokenKind::Year);
        assert_eq!(classify("2013").val, Some(TokenValue::Year(2013)));
        assert_eq!(classify("20130").kind, TokenKind::Number);
        assert_eq!(classify("874").kind, TokenKind::Number);
    }

    #[test]
    fn telephone_and_serial_numbers() {
        let t = classify("525-4764");
        assert_eq!(t.kind, TokenKind::Telno);
        assert_eq!(
            t.val,
            Some(TokenValue::Telno {
                number: "525-4764".into(),
                country_code: "354".into()
            })
        );
        let t = classify("4204200");
        assert_eq!(
            t.val,
            Some(TokenValue::Telno {
                number: "420-4200".into(),
                country_code: "354".into()
            })
        );
        // Implausible prefix: serial number
        assert_eq!(classify("123-4567").kind, TokenKind::SerialNumber);
        assert_eq!(classify("394-8362-12").kind, TokenKind::SerialNumber);
    }

    #[test]
    fn ssn_checksum_gates_classification() {
        assert_eq!(classify("010130-2989").kind, TokenKind::Ssn);
        // A failed checksum falls through to the number patterns
        let t = classify("010130-2979");
        assert_eq!(t.kind, TokenKind::Number);
        assert_eq!(t.txt, "010130");
    }

    #[test]
    fn chapter_ordinals() {
        let t = classify("2.5.1");
        assert_eq!(t.kind, TokenKind::Ordinal);
        assert_eq!(t.val, Some(TokenValue::Ordinal(251)));
    }

    #[test]
    fn measurements_and_amounts() {
        let t = classify("64kWst");
        assert_eq!(t.kind, TokenKind::Measurement);
        assert_eq!(
            t.val,
            Some(TokenValue::Measurement {
                unit: "J".into(),
                value: 230_400_000.0
            })
        );
        let t = classify("30,7°C");
        assert_eq!(
            t.val,
            Some(TokenValue::Measurement {
                unit: "K".into(),
                value: 273.15 + 30.7
            })
        );
        let t = classify("12,3%");
        assert_eq!(t.kind, TokenKind::Percent);
        assert_eq!(t.val, Some(TokenValue::Percent(12.3)));
        let t = classify("180°");
        assert_eq!(
            t.val,
            Some(TokenValue::Measurement {
                unit: "°".into(),
                value: 180.0
            })
        );
    }

    #[test]
    fn number_with_letter() {
        let t = classify("33B");
        assert_eq!(t.kind, TokenKind::NumWithLetter);
        assert_eq!(
            t.val,
            Some(TokenValue::NumberWithLetter {
                number: 33,
                letter: 'B'
            })
        );
        // "7l" is a measurement (litres), not number-with-letter
        assert_eq!(classify("7l").kind, TokenKind::Measurement);
        // "2hæð" is neither: 'h' starts a longer word
        assert_eq!(classify("2hæð").txt, "2");
    }

    #[test]
    fn convert_numbers_rewrites_english_locale() {
        let (t, _) = parse_digits(Token::raw("1,234.56"), true);
        assert_eq!(t.txt, "1.234,56");
        assert_eq!(t.val, Some(TokenValue::Number(1234.56)));
        assert_eq!(t.original, "1,234.56");
    }
}
