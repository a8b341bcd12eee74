//! Tokenizer options.

/// Handling of incorrectly written ordinals such as "1sti" and "3ja".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KludgyOrdinals {
    /// Pass through unchanged as WORD tokens (the default contract)
    #[default]
    PassThrough,
    /// Rewrite to the proper word form ("1sti" becomes "fyrsti")
    Modify,
    /// Emit ORDINAL tokens where the form denotes an ordinal ("1sti"
    /// becomes ordinal 1); other forms ("2ja") stay WORD tokens
    Translate,
}

impl KludgyOrdinals {
    /// Numeric form used by the CLI (-k 0|1|2).
    pub fn from_code(code: u8) -> Option<KludgyOrdinals> {
        match code {
            0 => Some(KludgyOrdinals::PassThrough),
            1 => Some(KludgyOrdinals::Modify),
            2 => Some(KludgyOrdinals::Translate),
            _ => None,
        }
    }
}

/// Options controlling tokenization and output rendering.
#[derive(Debug, Clone)]
pub struct TokenizerOptions {
    /// Accept English-locale numbers and rewrite them to Icelandic form
    pub convert_numbers: bool,
    /// Normalize "200° C" to "200 °C"
    pub convert_measurements: bool,
    /// Fold combining acute/diaeresis into precomposed letters
    pub replace_composite_glyphs: bool,
    /// Expand named and numeric HTML escapes
    pub replace_html_escapes: bool,
    /// Treat every newline as a hard sentence boundary
    pub one_sent_per_line: bool,
    /// Render original token surfaces in shallow output
    pub original: bool,
    /// Merge "17 prósent" into a PERCENT token
    pub coalesce_percent: bool,
    /// Use normalized punctuation forms in emitted surfaces
    pub normalize: bool,
    /// Kludgy-ordinal policy
    pub kludgy_ordinals: KludgyOrdinals,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            convert_numbers: false,
            convert_measurements: false,
            replace_composite_glyphs: true,
            replace_html_escapes: false,
            one_sent_per_line: false,
            original: false,
            coalesce_percent: false,
            normalize: false,
            kludgy_ordinals: KludgyOrdinals::PassThrough,
        }
    }
}

impl TokenizerOptions {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

/// Fluent builder for [`TokenizerOptions`].
#[derive(Debug, Default)]
pub struct OptionsBuilder {
    options: Option<TokenizerOptions>,
}

impl OptionsBuilder {
    fn get(&mut self) -> &mut TokenizerOptions {
        self.options.get_or_insert_with(TokenizerOptions::default)
    }

    pub fn convert_numbers(mut self, on: bool) -> Self {
        self.get().convert_numbers = on;
        self
    }

    pub fn convert_measurements(mut self, on: bool) -> Self {
        self.get().convert_measurements = on;
        self
    }

    pub fn replace_composite_glyphs(mut self, on: bool) -> Self {
        self.get().replace_composite_glyphs = on;
        self
    }

    pub fn replace_html_escapes(mut self, on: bool) -> Self {
        self.get().replace_html_escapes = on;
        self
    }

    pub fn one_sent_per_line(mut self, on: bool) -> Self {
        self.get().one_sent_per_line = on;
        self
    }

    pub fn original(mut self, on: bool) -> Self {
        self.get().original = on;
        self
    }

    pub fn coalesce_percent(mut self, on: bool) -> Self {
        self.get().coalesce_percent = on;
        self
    }

    pub fn normalize(mut self, on: bool) -> Self {
        self.get().normalize = on;
        self
    }

    pub fn kludgy_ordinals(mut self, mode: KludgyOrdinals) -> Self {
        self.get().kludgy_ordinals = mode;
        self
    }

    pub fn build(mut self) -> TokenizerOptions {
        self.options.take().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = TokenizerOptions::default();
        assert!(o.replace_composite_glyphs);
        assert!(!o.convert_numbers);
        assert_eq!(o.kludgy_ordinals, KludgyOrdinals::PassThrough);
    }

    #[test]
    fn builder_sets_flags() {
        let o = TokenizerOptions::builder()
            .convert_numbers(true)
            .replace_composite_glyphs(false)
            .kludgy_ordinals(KludgyOrdinals::Translate)
            .build();
        assert!(o.convert_numbers);
        assert!(!o.replace_composite_glyphs);
        assert_eq!(o.kludgy_ordinals, KludgyOrdinals::Translate);
    }

    #[test]
    fn kludgy_codes() {
        assert_eq!(KludgyOrdinals::from_code(0), Some(KludgyOrdinals::PassThrough));
        assert_eq!(KludgyOrdinals::from_code(2), Some(KludgyOrdinals::Translate));
        assert_eq!(KludgyOrdinals::from_code(7), None);
    }
}
