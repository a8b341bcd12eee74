//! Kind-specific token payloads.

/// Spacing discipline of a punctuation symbol, used when reassembling text
/// from tokens. The numeric values are part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Spacing {
    /// Whitespace to the left only (opening brackets, currency signs)
    Left = 1,
    /// Whitespace on both sides
    Center = 2,
    /// Whitespace to the right only (comma, period, closing quote)
    Right = 3,
    /// No whitespace on either side (slash, hyphen)
    None = 4,
}

impl Spacing {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// One expansion of an abbreviation, in the morphological convention
/// `(stem, variant, pos, category, form, inflection)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordMeaning {
    /// Expanded form ("til dæmis")
    pub stem: String,
    /// Variant number; 0 for abbreviations
    pub variant: i32,
    /// Part of speech / gender marker ("ao", "kk", "kvk", "hk")
    pub pos: String,
    /// Category ("skst" for abbreviations, "frasi" for phrases)
    pub category: String,
    /// The abbreviated surface form itself ("t.d.")
    pub form: String,
    /// Inflection pattern; "-" for abbreviations
    pub inflection: String,
}

impl WordMeaning {
    pub fn abbreviation(stem: &str, pos: &str, category: &str, form: &str) -> Self {
        WordMeaning {
            stem: stem.to_string(),
            variant: 0,
            pos: pos.to_string(),
            category: category.to_string(),
            form: form.to_string(),
            inflection: "-".to_string(),
        }
    }
}

/// The typed payload of a token. The valid variant is determined by the
/// token's [`TokenKind`](super::TokenKind).
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// PUNCTUATION: spacing class and normalized symbol
    Punct { spacing: Spacing, symbol: String },
    /// TIME: hour, minute, second
    Time { hour: u32, minute: u32, second: u32 },
    /// DATE / DATEABS / DATEREL: year, month, day; zero when unknown
    Date { year: i32, month: u32, day: u32 },
    /// TIMESTAMP / TIMESTAMPABS / TIMESTAMPREL
    Timestamp {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
    /// YEAR: negative for BCE
    Year(i32),
    /// NUMBER
    Number(f64),
    /// NUMWLETTER
    NumberWithLetter { number: i64, letter: char },
    /// AMOUNT: quantity and ISO 4217 currency code
    Amount { value: f64, currency: String },
    /// CURRENCY: ISO 4217 code
    Currency(String),
    /// PERCENT: percentage value (promille stored as a tenth of a percent)
    Percent(f64),
    /// ORDINAL
    Ordinal(i64),
    /// TELNO: normalized "DDD-DDDD" form and country code
    Telno { number: String, country_code: String },
    /// MEASUREMENT: SI base unit and value converted to it
    Measurement { unit: String, value: f64 },
    /// USERNAME: handle without the leading '@'
    Username(String),
    /// SSN: the normalized "DDDDDD-DDDD" string
    Ssn(String),
    /// WORD: abbreviation expansions, when known
    Meanings(Vec<WordMeaning>),
}

impl TokenValue {
    /// The normalized symbol of a punctuation value, if this is one.
    pub fn punct_symbol(&self) -> Option<&str> {
        match self {
            TokenValue::Punct { symbol, .. } => Some(symbol),
            _ => None,
        }
    }
}
