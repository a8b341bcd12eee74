//! The tokenization pipeline: a linear composition of lazy, single-consumer
//! iterator stages, each with a bounded lookahead.

pub(crate) mod classify;
pub(crate) mod dates;
pub(crate) mod digits;
pub(crate) mod particles;
pub(crate) mod phrases;
pub(crate) mod raw;
pub(crate) mod sentences;

use crate::abbrev::abbreviations;
use crate::error::Result;
use crate::lang::{currency, months, numbers};
use crate::options::TokenizerOptions;
use crate::token::Token;

use classify::Classifier;
use dates::{DatePhrases, DateResolver};
use particles::Particles;
use phrases::{FirstPhrases, SecondPhrases};
use raw::RawTokens;
use sentences::Segmenter;

/// The lazy token stream returned by [`tokenize`](crate::tokenize).
pub struct Tokens {
    inner: Box<dyn Iterator<Item = Token>>,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.inner.next()
    }
}

/// Compose the pipeline over an iterator of text chunks. Shallow mode
/// skips the final phrase coalescer, leaving currency words and magnitude
/// abbreviations unmerged.
pub(crate) fn build<I>(chunks: I, options: &TokenizerOptions, deep: bool) -> Result<Tokens>
where
    I: Iterator<Item = String> + 'static,
{
    let abbr = abbreviations()?;
    let raw = RawTokens::new(chunks, options);
    let classified = Classifier::new(raw, options.clone(), abbr);
    let refined = Particles::new(classified, abbr);
    let coalesced = FirstPhrases::new(refined, options);
    let dated = DateResolver::new(DatePhrases::new(coalesced, options));
    let inner: Box<dyn Iterator<Item = Token>> = if deep {
        Box::new(Segmenter::new(SecondPhrases::new(dated, options), abbr))
    } else {
        Box::new(Segmenter::new(dated, abbr))
    };
    Ok(Tokens { inner })
}

/// Could `next` be ending the current sentence or starting the next one?
/// True for end markers, and for capitalized text tokens that are not
/// month names (commonly miscapitalized), Roman numerals, or currency
/// codes after a magnitude abbreviation ("þús. USD").
pub(crate) fn could_be_end_of_sentence(next: &Token, excl_person: bool, multiplier: bool) -> bool {
    if next.kind.is_end() {
        return true;
    }
    let is_text = if excl_person {
        next.kind.is_text_excl_person()
    } else {
        next.kind.is_text()
    };
    if !is_text {
        return false;
    }
    let Some(first) = next.txt.chars().next() else {
        return false;
    };
    first.is_uppercase()
        && months::month_number(&next.txt.to_lowercase()).is_none()
        && !numbers::is_roman_numeral(&next.txt)
        && !(currency::is_currency_abbrev(&next.txt) && multiplier)
}
