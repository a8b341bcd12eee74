//! The closed token-kind taxonomy.
//!
//! The numeric codes are part of the wire format (CSV output and downstream
//! consumers key on them) and must not be renumbered. Kinds above
//! `META_BEGIN` are metatokens: they are not backed by visible characters in
//! the input text.

/// Numeric boundary between content tokens and metatokens.
pub const META_BEGIN: u32 = 9999;

/// Discriminant for a [`Token`](crate::Token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TokenKind {
    /// Punctuation symbol, with spacing class and normalized form
    Punctuation = 1,
    /// Time of day, hh:mm:ss
    Time = 2,
    /// Date (internal; resolved to DateAbs/DateRel before emission)
    Date = 3,
    /// Year, usually four digits; negative for BCE
    Year = 4,
    /// Number, integer or real
    Number = 5,
    /// Word, which may contain hyphens, apostrophes and interior periods
    Word = 6,
    /// Telephone number, normalized to DDD-DDDD plus country code
    Telno = 7,
    /// Percentage or promille
    Percent = 8,
    /// Uniform Resource Locator
    Url = 9,
    /// Ordinal number, decimal ("14.") or Roman ("XVII.")
    Ordinal = 10,
    /// Timestamp (internal; resolved to TimestampAbs/TimestampRel)
    Timestamp = 11,
    /// Currency name or code without an attached quantity
    Currency = 12,
    /// Quantity with a currency code
    Amount = 13,
    /// Person name (reserved for downstream annotators)
    Person = 14,
    /// E-mail address
    Email = 15,
    /// Entity name (reserved for downstream annotators)
    Entity = 16,
    /// Unrecognized token
    Unknown = 17,
    /// Fully specified date, (y, m, d) all known
    DateAbs = 18,
    /// Partially specified date
    DateRel = 19,
    /// Fully specified timestamp
    TimestampAbs = 20,
    /// Partially specified timestamp
    TimestampRel = 21,
    /// Measured quantity with its unit ("220V", "0,5 km")
    Measurement = 22,
    /// Number followed by a single letter ("Skógarstígur 4B")
    NumWithLetter = 23,
    /// Internet domain name ("mbl.is")
    Domain = 24,
    /// Hash tag ("#metoo")
    Hashtag = 25,
    /// Chemical formula ("H2SO4")
    Molecule = 26,
    /// Icelandic social security number, "kennitala"
    Ssn = 27,
    /// Social media user name ("@username_123")
    Username = 28,
    /// Serial number ("394-8362")
    SerialNumber = 29,
    /// Company name (reserved for downstream annotators)
    Company = 30,

    /// Hard sentence split (consumed by the sentence segmenter)
    SentSplit = 10000,
    /// Paragraph begin
    ParaBegin = 10001,
    /// Paragraph end
    ParaEnd = 10002,
    /// Sentence begin
    SentBegin = 11001,
    /// Sentence end
    SentEnd = 11002,
    /// End-of-stream sentinel, emitted exactly once
    EndSentinel = 12001,
}

impl TokenKind {
    /// The numeric wire code of this kind.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// The descriptive wire name of this kind, as used in JSON output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Time => "TIME",
            TokenKind::Date => "DATE",
            TokenKind::Year => "YEAR",
            TokenKind::Number => "NUMBER",
            TokenKind::Word => "WORD",
            TokenKind::Telno => "TELNO",
            TokenKind::Percent => "PERCENT",
            TokenKind::Url => "URL",
            TokenKind::Ordinal => "ORDINAL",
            TokenKind::Timestamp => "TIMESTAMP",
            TokenKind::Currency => "CURRENCY",
            TokenKind::Amount => "AMOUNT",
            TokenKind::Person => "PERSON",
            TokenKind::Email => "EMAIL",
            TokenKind::Entity => "ENTITY",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::DateAbs => "DATEABS",
            TokenKind::DateRel => "DATEREL",
            TokenKind::TimestampAbs => "TIMESTAMPABS",
            TokenKind::TimestampRel => "TIMESTAMPREL",
            TokenKind::Measurement => "MEASUREMENT",
            TokenKind::NumWithLetter => "NUMWLETTER",
            TokenKind::Domain => "DOMAIN",
            TokenKind::Hashtag => "HASHTAG",
            TokenKind::Molecule => "MOLECULE",
            TokenKind::Ssn => "SSN",
            TokenKind::Username => "USERNAME",
            TokenKind::SerialNumber => "SERIALNUMBER",
            TokenKind::Company => "COMPANY",
            TokenKind::SentSplit => "SPLIT SENT",
            TokenKind::ParaBegin => "BEGIN PARA",
            TokenKind::ParaEnd => "END PARA",
            TokenKind::SentBegin => "BEGIN SENT",
            TokenKind::SentEnd => "END SENT",
            TokenKind::EndSentinel => "END SENTINEL",
        }
    }

    /// True for metatokens, i.e. tokens not backed by visible characters.
    pub fn is_meta(self) -> bool {
        self.code() > META_BEGIN
    }

    /// Kinds that terminate a sentence or block.
    pub fn is_end(self) -> bool {
        matches!(
            self,
            TokenKind::ParaEnd | TokenKind::SentEnd | TokenKind::EndSentinel | TokenKind::SentSplit
        )
    }

    /// Kinds that open a sentence or block.
    pub fn is_begin(self) -> bool {
        matches!(self, TokenKind::ParaBegin | TokenKind::SentBegin)
    }

    /// Textual kinds: word-like tokens that can start a sentence with a
    /// capital letter.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            TokenKind::Word
                | TokenKind::Person
                | TokenKind::Entity
                | TokenKind::Molecule
                | TokenKind::Company
        )
    }

    /// Textual kinds excluding person names, used when an abbreviation is
    /// expected to be followed by a name.
    pub fn is_text_excl_person(self) -> bool {
        matches!(
            self,
            TokenKind::Word | TokenKind::Entity | TokenKind::Molecule | TokenKind::Company
        )
    }
}
