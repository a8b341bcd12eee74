//! End-to-end tests for single tokens and short phrases.

use ordskil_core::{
    tokenize, KludgyOrdinals, Token, TokenKind, TokenValue, TokenizerOptions,
};

fn tokens(text: &str, options: &TokenizerOptions) -> Vec<Token> {
    tokenize(text, options).unwrap().collect()
}

/// Tokenize and strip the sentence framing, asserting it is in place.
fn content(text: &str, options: &TokenizerOptions) -> Vec<Token> {
    let toks = tokens(text, options);
    assert_eq!(toks.first().map(|t| t.kind), Some(TokenKind::SentBegin));
    assert_eq!(
        toks.last().map(|t| t.kind),
        Some(TokenKind::EndSentinel),
        "stream must end with the sentinel"
    );
    assert_eq!(toks[toks.len() - 2].kind, TokenKind::SentEnd);
    toks[1..toks.len() - 2].to_vec()
}

fn single(text: &str) -> Token {
    let c = content(text, &TokenizerOptions::default());
    assert_eq!(c.len(), 1, "{text}: expected one token, got {c:?}");
    c.into_iter().next().unwrap()
}

#[track_caller]
fn assert_single(text: &str, kind: TokenKind, txt: &str, val: Option<TokenValue>) {
    let t = single(text);
    assert_eq!(t.kind, kind, "{text}");
    assert_eq!(t.txt, txt, "{text}");
    if let Some(v) = val {
        assert_eq!(t.val, Some(v), "{text}");
    }
}

#[test]
fn times() {
    assert_single(
        "13:45",
        TokenKind::Time,
        "13:45",
        Some(TokenValue::Time {
            hour: 13,
            minute: 45,
            second: 0,
        }),
    );
    assert_single(
        "kl. 13:45",
        TokenKind::Time,
        "kl. 13:45",
        Some(TokenValue::Time {
            hour: 13,
            minute: 45,
            second: 0,
        }),
    );
    assert_single(
        "Klukkan 13:45",
        TokenKind::Time,
        "Klukkan 13:45",
        None,
    );
    assert_single(
        "hálftólf",
        TokenKind::Time,
        "hálftólf",
        Some(TokenValue::Time {
            hour: 11,
            minute: 30,
            second: 0,
        }),
    );
    assert_single(
        "kl. hálfátta",
        TokenKind::Time,
        "kl. hálfátta",
        Some(TokenValue::Time {
            hour: 7,
            minute: 30,
            second: 0,
        }),
    );
    assert_single(
        "klukkan þrjú",
        TokenKind::Time,
        "klukkan þrjú",
        Some(TokenValue::Time {
            hour: 3,
            minute: 0,
            second: 0,
        }),
    );
}

#[test]
fn dates() {
    assert_single(
        "17/6",
        TokenKind::DateRel,
        "17/6",
        Some(TokenValue::Date {
            year: 0,
            month: 6,
            day: 17,
        }),
    );
    assert_single(
        "3. maí",
        TokenKind::DateRel,
        "3. maí",
        Some(TokenValue::Date {
            year: 0,
            month: 5,
            day: 3,
        }),
    );
    assert_single(
        "13. ágúst",
        TokenKind::DateRel,
        "13. ágúst",
        Some(TokenValue::Date {
            year: 0,
            month: 8,
            day: 13,
        }),
    );
    assert_single(
        "nóvember 1918",
        TokenKind::DateRel,
        "nóvember 1918",
        Some(TokenValue::Date {
            year: 1918,
            month: 11,
            day: 0,
        }),
    );
    assert_single(
        "17/6/2013",
        TokenKind::DateAbs,
        "17/6/2013",
        Some(TokenValue::Date {
            year: 2013,
            month: 6,
            day: 17,
        }),
    );
    assert_single("2013-06-17", TokenKind::DateAbs, "2013-06-17", None);
    assert_single("2013/06/17", TokenKind::DateAbs, "2013/06/17", None);
    // Capitalized Ágúst alone is a man's name, not a month
    assert_single("Ágúst", TokenKind::Word, "Ágúst", None);
}

#[test]
fn timestamps() {
    assert_single(
        "19/3/1977 14:56:10",
        TokenKind::TimestampAbs,
        "19/3/1977 14:56:10",
        Some(TokenValue::Timestamp {
            year: 1977,
            month: 3,
            day: 19,
            hour: 14,
            minute: 56,
            second: 10,
        }),
    );
    assert_single(
        "19/3/1977 kl. 14:56:10",
        TokenKind::TimestampAbs,
        "19/3/1977 kl. 14:56:10",
        None,
    );
}

#[test]
fn years() {
    assert_single("2013", TokenKind::Year, "2013", Some(TokenValue::Year(2013)));
    assert_single("árið 2013", TokenKind::Year, "árið 2013", Some(TokenValue::Year(2013)));
    assert_single("árinu 874", TokenKind::Year, "árinu 874", Some(TokenValue::Year(874)));
    // Era markers keep their attached period and sign the year
    assert_single(
        "874 e.Kr.",
        TokenKind::Year,
        "874 e.Kr.",
        Some(TokenValue::Year(874)),
    );
    assert_single(
        "2013 f.Kr.",
        TokenKind::Year,
        "2013 f.Kr.",
        Some(TokenValue::Year(-2013)),
    );
    assert_single(
        "ársins 320 f.Kr.",
        TokenKind::Year,
        "ársins 320 f.Kr.",
        Some(TokenValue::Year(-320)),
    );
}

#[test]
fn numbers() {
    assert_single("213", TokenKind::Number, "213", Some(TokenValue::Number(213.0)));
    assert_single("2.013", TokenKind::Number, "2.013", Some(TokenValue::Number(2013.0)));
    assert_single("2,013", TokenKind::Number, "2,013", Some(TokenValue::Number(2.013)));
    assert_single(
        "2.013,45",
        TokenKind::Number,
        "2.013,45",
        Some(TokenValue::Number(2013.45)),
    );
    assert_single(
        "2,013.45",
        TokenKind::Number,
        "2,013.45",
        Some(TokenValue::Number(2013.45)),
    );
    assert_single("1/2", TokenKind::Number, "1/2", Some(TokenValue::Number(0.5)));
    assert_single("1/20", TokenKind::DateRel, "1/20", None);
    assert_single("¼", TokenKind::Number, "¼", Some(TokenValue::Number(0.25)));
    assert_single("2⅞", TokenKind::Number, "2⅞", Some(TokenValue::Number(2.875)));
}

#[test]
fn kludgy_ordinals_pass_through_by_default() {
    for s in ["1sti", "4ðu", "2svar", "4ra", "2ja"] {
        assert_single(s, TokenKind::Word, s, None);
    }
}

#[test]
fn kludgy_ordinals_modify() {
    let opts = TokenizerOptions::builder()
        .kludgy_ordinals(KludgyOrdinals::Modify)
        .build();
    let cases = [("1sti", "fyrsti"), ("4ðu", "fjórðu"), ("2svar", "tvisvar"), ("4ra", "fjögurra")];
    for (input, expected) in cases {
        let c = content(input, &opts);
        assert_eq!(c[0].kind, TokenKind::Word);
        assert_eq!(c[0].txt, expected);
        assert_eq!(c[0].original, input);
    }
}

#[test]
fn kludgy_ordinals_translate() {
    let opts = TokenizerOptions::builder()
        .kludgy_ordinals(KludgyOrdinals::Translate)
        .build();
    let c = content("1sti", &opts);
    assert_eq!(c[0].kind, TokenKind::Ordinal);
    assert_eq!(c[0].val, Some(TokenValue::Ordinal(1)));
    // "2ja" denotes a cardinal and stays a word
    let c = content("2ja", &opts);
    assert_eq!(c[0].kind, TokenKind::Word);
    assert_eq!(c[0].txt, "2ja");
}

#[test]
fn amounts() {
    assert_single(
        "$472,64",
        TokenKind::Amount,
        "$472,64",
        Some(TokenValue::Amount {
            value: 472.64,
            currency: "USD".into(),
        }),
    );
    assert_single(
        "€3.472,64",
        TokenKind::Amount,
        "€3.472,64",
        Some(TokenValue::Amount {
            value: 3472.64,
            currency: "EUR".into(),
        }),
    );
    assert_single(
        "£5,199.99",
        TokenKind::Amount,
        "£5,199.99",
        Some(TokenValue::Amount {
            value: 5199.99,
            currency: "GBP".into(),
        }),
    );
    assert_single(
        "EUR 200",
        TokenKind::Amount,
        "EUR 200",
        Some(TokenValue::Amount {
            value: 200.0,
            currency: "EUR".into(),
        }),
    );
    assert_single(
        "kr. 5.999",
        TokenKind::Amount,
        "kr. 5.999",
        Some(TokenValue::Amount {
            value: 5999.0,
            currency: "ISK".into(),
        }),
    );
    assert_single(
        "USD900",
        TokenKind::Amount,
        "USD900",
        Some(TokenValue::Amount {
            value: 900.0,
            currency: "USD".into(),
        }),
    );
}

#[test]
fn isk_magnitudes() {
    let c = content("750 þús.kr.", &TokenizerOptions::default());
    assert_eq!(c[0].kind, TokenKind::Amount);
    assert_eq!(c[0].txt, "750 þús.kr");
    assert_eq!(
        c[0].val,
        Some(TokenValue::Amount {
            value: 750_000.0,
            currency: "ISK".into()
        })
    );
    assert_eq!(c[1].txt, ".");

    let c = content("2,7 mrð. USD.", &TokenizerOptions::default());
    assert_eq!(c[0].kind, TokenKind::Amount);
    assert_eq!(c[0].txt, "2,7 mrð. USD");
    assert_eq!(
        c[0].val,
        Some(TokenValue::Amount {
            value: 2.7e9,
            currency: "USD".into()
        })
    );

    let c = content("30,7 mö.kr.", &TokenizerOptions::default());
    assert_eq!(
        c[0].val,
        Some(TokenValue::Amount {
            value: 30.7e9,
            currency: "ISK".into()
        })
    );
}

#[test]
fn measurements() {
    assert_single(
        "64kWst",
        TokenKind::Measurement,
        "64kWst",
        Some(TokenValue::Measurement {
            unit: "J".into(),
            value: 230_400_000.0,
        }),
    );
    assert_single(
        "100 mm",
        TokenKind::Measurement,
        "100 mm",
        Some(TokenValue::Measurement {
            unit: "m".into(),
            value: 0.1,
        }),
    );
    assert_single(
        "30,7°C",
        TokenKind::Measurement,
        "30,7°C",
        Some(TokenValue::Measurement {
            unit: "K".into(),
            value: 273.15 + 30.7,
        }),
    );
    assert_single(
        "6.500 kg",
        TokenKind::Measurement,
        "6.500 kg",
        Some(TokenValue::Measurement {
            unit: "kg".into(),
            value: 6.5e3,
        }),
    );
    assert_single(
        "1800 MWst",
        TokenKind::Measurement,
        "1800 MWst",
        Some(TokenValue::Measurement {
            unit: "J".into(),
            value: 6.48e12,
        }),
    );
    // A year-like number still merges with a unit
    assert_single("690 MW", TokenKind::Measurement, "690 MW", None);
}

#[test]
fn degree_composition() {
    let opts = TokenizerOptions::default();
    let c = content("200° C", &opts);
    assert_eq!(c[0].kind, TokenKind::Measurement);
    assert_eq!(c[0].txt, "200° C");
    assert_eq!(
        c[0].val,
        Some(TokenValue::Measurement {
            unit: "K".into(),
            value: 473.15
        })
    );

    let opts = TokenizerOptions::builder().convert_measurements(true).build();
    let c = content("200° C", &opts);
    assert_eq!(c[0].txt, "200 °C");
    assert_eq!(c[0].original, "200° C");
    assert_eq!(
        c[0].val,
        Some(TokenValue::Measurement {
            unit: "K".into(),
            value: 473.15
        })
    );
}

#[test]
fn percentages() {
    assert_single("12,3%", TokenKind::Percent, "12,3%", Some(TokenValue::Percent(12.3)));
    assert_single("12,3 %", TokenKind::Percent, "12,3 %", Some(TokenValue::Percent(12.3)));
    let opts = TokenizerOptions::builder().coalesce_percent(true).build();
    let c = content("17 prósent", &opts);
    assert_eq!(c.len(), 1);
    assert_eq!(c[0].kind, TokenKind::Percent);
    assert_eq!(c[0].val, Some(TokenValue::Percent(17.0)));
}

#[test]
fn telephone_numbers() {
    assert_single(
        "699 2422",
        TokenKind::Telno,
        "699 2422",
        Some(TokenValue::Telno {
            number: "699-2422".into(),
            country_code: "354".into(),
        }),
    );
    assert_single(
        "+354 699 2422",
        TokenKind::Telno,
        "+354 699 2422",
        Some(TokenValue::Telno {
            number: "699-2422".into(),
            country_code: "+354".into(),
        }),
    );
}

#[test]
fn web_tokens() {
    assert_single("http://www.greynir.is", TokenKind::Url, "http://www.greynir.is", None);
    assert_single("www.greynir.is", TokenKind::Domain, "www.greynir.is", None);
    assert_single("RÚV.is", TokenKind::Domain, "RÚV.is", None);
    assert_single("9gag.com", TokenKind::Domain, "9gag.com", None);
    assert_single("fake@news.is", TokenKind::Email, "fake@news.is", None);
    assert_single("#MeToo", TokenKind::Hashtag, "#MeToo", None);
    assert_single(
        "@username_123",
        TokenKind::Username,
        "@username_123",
        Some(TokenValue::Username("username_123".into())),
    );
}

#[test]
fn molecules_and_ssn() {
    assert_single("H2SO4", TokenKind::Molecule, "H2SO4", None);
    assert_single(
        "010130-2989",
        TokenKind::Ssn,
        "010130-2989",
        Some(TokenValue::Ssn("010130-2989".into())),
    );
}

#[test]
fn number_with_letter() {
    assert_single(
        "33B",
        TokenKind::NumWithLetter,
        "33B",
        Some(TokenValue::NumberWithLetter {
            number: 33,
            letter: 'B',
        }),
    );
}

#[test]
fn composite_words() {
    assert_single(
        "stjórnskipunar- og eftirlitsnefnd",
        TokenKind::Word,
        "stjórnskipunar- og eftirlitsnefnd",
        None,
    );
    assert_single(
        "dómsmála-, viðskipta- og iðnaðarráðherra",
        TokenKind::Word,
        "dómsmála-, viðskipta- og iðnaðarráðherra",
        None,
    );
}

#[test]
fn abbreviations_mid_sentence_and_final() {
    // A finisher abbreviation at the end of a sentence keeps its period
    // attached and no separate dot is emitted
    let toks = tokens("Þetta er o.s.frv. Hann kom.", &TokenizerOptions::default());
    let osfrv = toks.iter().find(|t| t.txt == "o.s.frv.").unwrap();
    assert_eq!(osfrv.kind, TokenKind::Word);
    assert_eq!(osfrv.meanings()[0].stem, "og svo framvegis");
    let ix = toks.iter().position(|t| t.txt == "o.s.frv.").unwrap();
    assert_eq!(toks[ix + 1].kind, TokenKind::SentEnd);
    assert_eq!(toks[ix + 2].kind, TokenKind::SentBegin);

    let c = content("hann keypti t.d. bíl", &TokenizerOptions::default());
    let td = c.iter().find(|t| t.txt == "t.d.").unwrap();
    assert_eq!(td.meanings()[0].stem, "til dæmis");
}

#[test]
fn year_ranges() {
    // Tight range: one YEAR token
    let c = content("1914-1918", &TokenizerOptions::default());
    assert_eq!(c.len(), 1);
    assert_eq!(c[0].kind, TokenKind::Year);
    assert_eq!(c[0].txt, "1914-1918");

    // With normalization the hyphen becomes an en dash
    let opts = TokenizerOptions::builder().normalize(true).build();
    let c = content("1914-1918", &opts);
    assert_eq!(c[0].txt, "1914\u{2013}1918");
    assert_eq!(c[0].original, "1914-1918");

    // A space before the sign gives two years, not a negative number
    let c = content("1914 -1918", &TokenizerOptions::default());
    let kinds: Vec<TokenKind> = c.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Year, TokenKind::Punctuation, TokenKind::Year]
    );
    assert_eq!(c[2].val, Some(TokenValue::Year(1918)));
}

#[test]
fn full_sentence_walkthrough() {
    let toks = tokens(
        "3.janúar sl. keypti   ég 64kWst rafbíl. Hann kostaði € 30.000.",
        &TokenizerOptions::default(),
    );
    let expect: Vec<(TokenKind, &str)> = vec![
        (TokenKind::SentBegin, ""),
        (TokenKind::DateRel, "3. janúar"),
        (TokenKind::Word, "sl."),
        (TokenKind::Word, "keypti"),
        (TokenKind::Word, "ég"),
        (TokenKind::Measurement, "64kWst"),
        (TokenKind::Word, "rafbíl"),
        (TokenKind::Punctuation, "."),
        (TokenKind::SentEnd, ""),
        (TokenKind::SentBegin, ""),
        (TokenKind::Word, "Hann"),
        (TokenKind::Word, "kostaði"),
        (TokenKind::Amount, "€30.000"),
        (TokenKind::Punctuation, "."),
        (TokenKind::SentEnd, ""),
        (TokenKind::EndSentinel, ""),
    ];
    let actual: Vec<(TokenKind, &str)> = toks.iter().map(|t| (t.kind, t.txt.as_str())).collect();
    assert_eq!(actual, expect);

    assert_eq!(
        toks[1].val,
        Some(TokenValue::Date {
            year: 0,
            month: 1,
            day: 3
        })
    );
    assert_eq!(toks[2].meanings()[0].stem, "síðastliðinn");
    assert_eq!(
        toks[5].val,
        Some(TokenValue::Measurement {
            unit: "J".into(),
            value: 230_400_000.0
        })
    );
    assert_eq!(
        toks[12].val,
        Some(TokenValue::Amount {
            value: 30_000.0,
            currency: "EUR".into()
        })
    );
    // Punctuation value: right-hand spacing, normalized period
    match &toks[7].val {
        Some(TokenValue::Punct { spacing, symbol }) => {
            assert_eq!(spacing.code(), 3);
            assert_eq!(symbol, ".");
        }
        other => panic!("unexpected punct value: {other:?}"),
    }
}

#[test]
fn convert_numbers_option() {
    let opts = TokenizerOptions::builder().convert_numbers(true).build();
    let c = content("$1,234.56", &opts);
    assert_eq!(c.len(), 1);
    assert_eq!(c[0].kind, TokenKind::Amount);
    assert_eq!(c[0].txt, "$1.234,56");
    assert_eq!(c[0].original, "$1,234.56");
    assert_eq!(
        c[0].val,
        Some(TokenValue::Amount {
            value: 1234.56,
            currency: "USD".into()
        })
    );
}

#[test]
fn unicode_composites_in_context() {
    let toks = tokens(
        "Ko\u{308}rfuboltamaðurinn og KR-ingurinn Kristo\u{301}fer Acox heldur a\u{301} vit ævinty\u{301}ranna.",
        &TokenizerOptions::default(),
    );
    assert_eq!(toks[1].txt, "Körfuboltamaðurinn");
    assert!(toks.iter().any(|t| t.txt == "Kristófer"));
    assert!(toks.iter().any(|t| t.txt == "á"));
    assert!(toks.iter().any(|t| t.txt == "ævintýranna"));
}

#[test]
fn html_escapes_option() {
    let opts = TokenizerOptions::builder().replace_html_escapes(true).build();
    let c = content("&aacute;st og fri&eth;ur", &opts);
    assert_eq!(c[0].txt, "ást");
    assert_eq!(c[0].original, "&aacute;st");
    assert_eq!(c[2].txt, "friður");
}
