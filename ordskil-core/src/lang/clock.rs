//! Clock expressions spelled out in words, and related temporal tables.

/// Words that introduce a time of day ("kl. 15:30", "klukkan þrjú").
pub fn is_clock_word(lower: &str) -> bool {
    matches!(lower, "kl" | "kl." | "klukkan")
}

/// Time of day for a spelled-out clock number ("tvö", "hálfátta").
pub fn clock_number(lower: &str) -> Option<(u32, u32, u32)> {
    let t = match lower {
        "eitt" => (1, 0, 0),
        "tvö" => (2, 0, 0),
        "þrjú" => (3, 0, 0),
        "fjögur" => (4, 0, 0),
        "fimm" => (5, 0, 0),
        "sex" => (6, 0, 0),
        "sjö" => (7, 0, 0),
        "átta" => (8, 0, 0),
        "níu" => (9, 0, 0),
        "tíu" => (10, 0, 0),
        "ellefu" => (11, 0, 0),
        "tólf" => (12, 0, 0),
        "hálfeitt" => (12, 30, 0),
        "hálftvö" => (1, 30, 0),
        "hálfþrjú" => (2, 30, 0),
        "hálffjögur" => (3, 30, 0),
        "hálffimm" => (4, 30, 0),
        "hálfsex" => (5, 30, 0),
        "hálfsjö" => (6, 30, 0),
        "hálfátta" => (7, 30, 0),
        "hálfníu" => (8, 30, 0),
        "hálftíu" => (9, 30, 0),
        "hálfellefu" => (10, 30, 0),
        "hálftólf" => (11, 30, 0),
        _ => return None,
    };
    Some(t)
}

/// "hálftólf" and friends are only used temporally, so they form a TIME
/// token even without a preceding clock word.
pub fn is_clock_half(txt: &str) -> bool {
    txt.starts_with("hálf") && clock_number(txt).is_some()
}

/// Words that can precede a year number and assimilate into the year token.
pub fn is_year_word(lower: &str) -> bool {
    matches!(lower, "árið" | "ársins" | "árinu")
}

/// "eftir Krist" markers.
pub fn is_ce(txt: &str) -> bool {
    matches!(txt, "e.Kr" | "e.Kr.")
}

/// "fyrir Krist" markers; years before the current era are negated.
pub fn is_bce(txt: &str) -> bool {
    matches!(txt, "f.Kr" | "f.Kr.")
}

pub fn is_ce_bce(txt: &str) -> bool {
    is_ce(txt) || is_bce(txt)
}
