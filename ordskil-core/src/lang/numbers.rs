//! Numeric odds and ends: vulgar fractions, kludgy ordinals, Roman
//! numerals and telephone-number prefixes.

use std::sync::LazyLock;

use regex::Regex;

/// Exact value of a single-char vulgar fraction.
pub fn fraction_value(c: char) -> Option<f64> {
    let v = match c {
        '↉' => 0.0,
        '⅒' => 1.0 / 10.0,
        '⅑' => 1.0 / 9.0,
        '⅛' => 1.0 / 8.0,
        '⅐' => 1.0 / 7.0,
        '⅙' => 1.0 / 6.0,
        '⅕' => 1.0 / 5.0,
        '¼' => 1.0 / 4.0,
        '⅓' => 1.0 / 3.0,
        '½' => 1.0 / 2.0,
        '⅖' => 2.0 / 5.0,
        '⅔' => 2.0 / 3.0,
        '⅜' => 3.0 / 8.0,
        '⅗' => 3.0 / 5.0,
        '¾' => 3.0 / 4.0,
        '⅘' => 4.0 / 5.0,
        '⅝' => 5.0 / 8.0,
        '⅚' => 5.0 / 6.0,
        '⅞' => 7.0 / 8.0,
        _ => return None,
    };
    Some(v)
}

/// Incorrectly written ("kludgy") ordinals and their word forms, in match
/// priority order.
pub const ORDINAL_ERRORS: &[(&str, &str)] = &[
    ("1sti", "fyrsti"),
    ("1sta", "fyrsta"),
    ("1stu", "fyrstu"),
    ("3ji", "þriðji"),
    ("3ju", "þriðju"),
    ("4ði", "fjórði"),
    ("4ða", "fjórða"),
    ("4ðu", "fjórðu"),
    ("5ti", "fimmti"),
    ("5ta", "fimmta"),
    ("5tu", "fimmtu"),
    ("2svar", "tvisvar"),
    ("3svar", "þrisvar"),
    ("2ja", "tveggja"),
    ("3ja", "þriggja"),
    ("4ra", "fjögurra"),
];

/// Numeric value of kludgy ordinals that genuinely denote ordinals
/// ("2ja" and "2svar" do not).
pub fn kludgy_ordinal_number(key: &str) -> Option<i64> {
    let n = match key {
        "1sti" | "1sta" | "1stu" => 1,
        "3ji" | "3ja" | "3ju" => 3,
        "4ði" | "4ða" | "4ðu" => 4,
        "5ti" | "5ta" | "5tu" => 5,
        _ => return None,
    };
    Some(n)
}

static ROMAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("Roman numeral pattern is valid")
});

/// Whether `s` is a well-formed Roman numeral (I..MMMM).
pub fn is_roman_numeral(s: &str) -> bool {
    !s.is_empty() && ROMAN.is_match(s)
}

const ROMAN_MAP: &[(i64, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert an already validated Roman numeral to an integer.
pub fn roman_to_int(s: &str) -> i64 {
    let mut rest = s;
    let mut result = 0;
    for &(value, numeral) in ROMAN_MAP {
        while let Some(r) = rest.strip_prefix(numeral) {
            result += value;
            rest = r;
        }
    }
    result
}

/// First digits admissible in Icelandic telephone numbers.
pub fn is_telno_prefix(c: char) -> bool {
    matches!(c, '4' | '5' | '6' | '7' | '8')
}

/// Known telephone country-code forms.
pub fn is_country_code(txt: &str) -> bool {
    matches!(txt, "354" | "+354" | "00354")
}
