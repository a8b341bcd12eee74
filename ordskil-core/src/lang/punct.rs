//! Punctuation classes and spacing rules.

use crate::token::Spacing;

pub const HYPHEN: char = '-';
pub const EN_DASH: char = '\u{2013}';

/// All hyphen-like characters, normalized to '-'.
pub const HYPHENS: &str = "-\u{2013}\u{2014}";

/// Hyphens that may mark a composite-word continuation
/// ("fjármála- og efnahagsráðuneyti").
pub const COMPOSITE_HYPHENS: &str = "-\u{2013}";

/// The marker form used for composite-word hyphens.
pub const COMPOSITE_HYPHEN: &str = "\u{2013}";

pub const LEFT_PUNCTUATION: &str = "([„‚«#$€£¥₽<";
pub const RIGHT_PUNCTUATION: &str = ".,:;)]!%‰?“»”’‛‘…>°";
pub const CENTER_PUNCTUATION: &str = "\"*•&+=@©|";
pub const NONE_PUNCTUATION: &str = "^/±'´~\\-\u{2013}\u{2014}";

/// Single and double quote variants as they appear in source text.
pub const SQUOTES: &str = "'‚‛‘´";
pub const DQUOTES: &str = "\"“„”«»";

/// Punctuation that ends a sentence.
pub fn ends_sentence(symbol: &str) -> bool {
    matches!(symbol, "." | "?" | "!" | "…")
}

/// Punctuation that may trail the sentence-ending symbol and still belong
/// to the sentence (closing brackets and quotes).
pub fn is_sentence_finisher(symbol: &str) -> bool {
    matches!(symbol, ")" | "]" | "“" | "»" | "”" | "’" | "\"" | "[…]")
}

/// Punctuation symbols that may occur inside words. An em dash always
/// splits a word.
pub fn may_occur_inside_word(c: char) -> bool {
    matches!(c, '.' | '\'' | '‘' | '´' | '’' | HYPHEN | EN_DASH)
}

/// Punctuation symbols that can terminate a word.
pub fn may_end_word(c: char) -> bool {
    matches!(c, '\'' | '²' | '³')
}

/// Punctuation that may combine into runs ("??!!").
pub fn may_combine(symbol: &str) -> bool {
    matches!(symbol, "?" | "!" | "…")
}

/// End-of-indirect-speech punctuation that does not necessarily end a
/// sentence („Er einhver þarna?“ sagði konan).
pub fn is_indirect_speech(symbol: &str) -> bool {
    matches!(symbol, "?" | "!")
}

pub fn is_punct_char(c: char) -> bool {
    LEFT_PUNCTUATION.contains(c)
        || CENTER_PUNCTUATION.contains(c)
        || RIGHT_PUNCTUATION.contains(c)
        || NONE_PUNCTUATION.contains(c)
}

/// Spacing class of a normalized punctuation symbol. Multi-character
/// symbols keep the default center discipline.
pub fn spacing_of(symbol: &str) -> Spacing {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            if LEFT_PUNCTUATION.contains(c) {
                Spacing::Left
            } else if RIGHT_PUNCTUATION.contains(c) {
                Spacing::Right
            } else if NONE_PUNCTUATION.contains(c) {
                Spacing::None
            } else {
                Spacing::Center
            }
        }
        _ => Spacing::Center,
    }
}

/// Spacing discipline used by the detokenizer: index 0..=4 corresponds to
/// Left, Center, Right, None and Word.
pub const TP_WORD: usize = 4;

/// Whether a space belongs between two adjacent output tokens, indexed by
/// the disciplines of the previous and the next token.
pub const TP_SPACE: [[bool; 5]; 5] = [
    // next:  LEFT   CENTER RIGHT  NONE   WORD
    /* LEFT   */ [false, true, false, false, false],
    /* CENTER */ [true, true, true, true, true],
    /* RIGHT  */ [true, true, false, false, true],
    /* NONE   */ [false, true, false, false, false],
    /* WORD   */ [true, true, false, false, true],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_membership() {
        assert_eq!(spacing_of("("), Spacing::Left);
        assert_eq!(spacing_of("."), Spacing::Right);
        assert_eq!(spacing_of("/"), Spacing::None);
        assert_eq!(spacing_of("&"), Spacing::Center);
        assert_eq!(spacing_of("„"), Spacing::Left);
        assert_eq!(spacing_of("“"), Spacing::Right);
    }

    #[test]
    fn punctuation_sets_do_not_fully_overlap() {
        for c in LEFT_PUNCTUATION.chars() {
            assert!(!RIGHT_PUNCTUATION.contains(c), "{c} in both left and right");
        }
        for c in NONE_PUNCTUATION.chars() {
            assert!(!CENTER_PUNCTUATION.contains(c), "{c} in both none and center");
        }
    }

    #[test]
    fn sentence_enders() {
        assert!(ends_sentence("."));
        assert!(ends_sentence("…"));
        assert!(!ends_sentence(","));
        assert!(is_sentence_finisher("”"));
        assert!(is_sentence_finisher("[…]"));
    }
}
