//! The abbreviation dictionary.
//!
//! Loaded once per process from the embedded `Abbrev.conf` under a one-shot
//! guard; read-only afterwards. Besides the primary surface-form index the
//! dictionary keeps the derived indices the pipeline needs: single-period
//! forms without their dot, dot-dropped misspellings, and the finisher
//! policy sets that drive sentence segmentation around abbreviations.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::token::WordMeaning;

/// Immutable abbreviation dictionary.
#[derive(Debug, Default)]
pub struct Abbreviations {
    /// Canonical surface form (with periods) to expansion list
    dict: HashMap<String, Vec<WordMeaning>>,
    /// Misspelled forms (dots dropped) to expansion list
    wrong_dict: HashMap<String, Vec<WordMeaning>>,
    /// All expansion texts
    meanings: HashSet<String>,
    /// Single-period abbreviations, stored without the final dot
    singles: HashSet<String>,
    /// All-dots-dropped forms of multi-period abbreviations
    wrong_singles: HashSet<String>,
    /// Abbreviations that may end a sentence ('*' marker)
    finishers: HashSet<String>,
    /// Abbreviations never read as such at the end of a sentence ('!')
    not_finishers: HashSet<String>,
    /// Abbreviations that are only abbreviations before a name ('^')
    name_finishers: HashSet<String>,
    /// Misspelled form to its canonical correction(s)
    wrong_dots: HashMap<String, Vec<String>>,
    /// Word forms that must never be read as abbreviations
    not_abbreviations: HashSet<String>,
}

fn push_unique(list: &mut Vec<WordMeaning>, m: WordMeaning) {
    if !list.contains(&m) {
        list.push(m);
    }
}

impl Abbreviations {
    /// Register one abbreviation. `abbrev` may carry a trailing `*`
    /// (finisher), `!` (not-finisher) or `^` (name-finisher) marker.
    fn add(&mut self, abbrev: &str, meaning: &str, gender: &str, fl: Option<&str>) -> Result<()> {
        let mut abbrev = abbrev;
        let mut finisher = false;
        let mut not_finisher = false;
        let mut name_finisher = false;
        if let Some(stripped) = abbrev.strip_suffix('*') {
            finisher = true;
            abbrev = stripped;
            if !abbrev.ends_with('.') {
                return Err(Error::Config(
                    "only abbreviations ending with a period can be sentence finishers".into(),
                ));
            }
        } else if let Some(stripped) = abbrev.strip_suffix('!') {
            not_finisher = true;
            abbrev = stripped;
            if !abbrev.ends_with('.') {
                return Err(Error::Config(
                    "only abbreviations ending with a period can be not-finishers".into(),
                ));
            }
        } else if let Some(stripped) = abbrev.strip_suffix('^') {
            name_finisher = true;
            abbrev = stripped;
            if !abbrev.ends_with('.') {
                return Err(Error::Config(
                    "only abbreviations ending with a period can be name finishers".into(),
                ));
            }
        }
        if abbrev.ends_with(['*', '!', '^']) {
            return Err(Error::Config(
                "the *, ! and ^ markers are mutually exclusive".into(),
            ));
        }

        let category = fl.unwrap_or("skst");
        let entry = WordMeaning::abbreviation(meaning, gender, category, abbrev);
        push_unique(self.dict.entry(abbrev.to_string()).or_default(), entry);
        self.meanings.insert(meaning.to_string());

        let dot_count = abbrev.matches('.').count();
        if abbrev.ends_with('.') && dot_count == 1 {
            // Single period at the end; the dotless form is a known
            // misspelling
            let wabbrev = &abbrev[..abbrev.len() - 1];
            self.singles.insert(wabbrev.to_string());
            if finisher {
                self.finishers.insert(wabbrev.to_string());
            }
            self.wrong_dots
                .entry(wabbrev.to_string())
                .or_default()
                .push(abbrev.to_string());
            if wabbrev.chars().count() > 1 {
                // Single letters ("Í.", "Á.") exist for person names only
                // and are not registered as dotless misspellings
                let wrong = WordMeaning::abbreviation(meaning, gender, category, abbrev);
                push_unique(self.wrong_dict.entry(wabbrev.to_string()).or_default(), wrong);
            }
        } else if dot_count > 0 {
            // Multi-period abbreviation: index every variant with one dot
            // dropped, pairs of dots dropped, and all dots dropped
            let dots: Vec<usize> = abbrev
                .char_indices()
                .filter_map(|(i, c)| (c == '.').then_some(i))
                .collect();
            let mut variants: Vec<String> = Vec::new();
            for &i in &dots {
                let mut w = String::with_capacity(abbrev.len());
                w.push_str(&abbrev[..i]);
                w.push_str(&abbrev[i + 1..]);
                variants.push(w);
            }
            if dots.len() > 2 {
                for pair in [(0, 1), (0, 2), (1, 2)] {
                    let (a, b) = (dots[pair.0], dots[pair.1]);
                    let mut w = String::with_capacity(abbrev.len());
                    for (i, c) in abbrev.char_indices() {
                        if i != a && i != b {
                            w.push(c);
                        }
                    }
                    variants.push(w);
                }
            }
            for wabbrev in variants {
                self.wrong_dots
                    .entry(wabbrev.clone())
                    .or_default()
                    .push(abbrev.to_string());
                let wrong = WordMeaning::abbreviation(meaning, gender, category, abbrev);
                push_unique(self.wrong_dict.entry(wabbrev).or_default(), wrong);
            }
            let bare: String = abbrev.chars().filter(|&c| c != '.').collect();
            self.wrong_singles.insert(bare.clone());
            self.wrong_dots
                .entry(bare.clone())
                .or_default()
                .push(abbrev.to_string());
            let wrong = WordMeaning::abbreviation(meaning, gender, category, abbrev);
            push_unique(self.wrong_dict.entry(bare).or_default(), wrong);
        }

        if finisher {
            self.finishers.insert(abbrev.to_string());
        }
        if not_finisher {
            self.not_finishers.insert(abbrev.to_string());
        }
        if name_finisher {
            self.name_finishers.insert(abbrev.to_string());
        }
        Ok(())
    }

    /// Expansions for the exact canonical form.
    pub fn meanings_of(&self, abbrev: &str) -> Option<&[WordMeaning]> {
        self.dict.get(abbrev).map(Vec::as_slice)
    }

    /// Expansions looked up in original case, then lowercased; handles
    /// sentence-initial capitalization ("Hr.").
    pub fn lookup(&self, abbrev: &str) -> Option<Vec<WordMeaning>> {
        if let Some(m) = self.dict.get(abbrev) {
            return Some(m.clone());
        }
        self.dict.get(&abbrev.to_lowercase()).cloned()
    }

    /// Whether the surface has any meaning, canonical or misspelled.
    pub fn has_meaning(&self, abbrev: &str) -> bool {
        self.dict.contains_key(abbrev) || self.wrong_dict.contains_key(abbrev)
    }

    /// Expansions for a surface, canonical or misspelled.
    pub fn meaning(&self, abbrev: &str) -> Option<Vec<WordMeaning>> {
        if let Some(m) = self.dict.get(abbrev) {
            return Some(m.clone());
        }
        self.wrong_dict.get(abbrev).cloned()
    }

    pub fn contains(&self, abbrev: &str) -> bool {
        self.dict.contains_key(abbrev)
    }

    pub fn is_single(&self, abbrev: &str) -> bool {
        self.singles.contains(abbrev)
    }

    /// All-dots-dropped form of a multi-period abbreviation ("osfrv").
    pub fn is_wrong_single(&self, abbrev: &str) -> bool {
        self.wrong_singles.contains(abbrev)
    }

    pub fn is_finisher(&self, abbrev: &str) -> bool {
        self.finishers.contains(abbrev)
    }

    pub fn is_not_finisher(&self, abbrev: &str) -> bool {
        self.not_finishers.contains(abbrev) || self.not_finishers.contains(&abbrev.to_lowercase())
    }

    pub fn is_name_finisher(&self, abbrev: &str) -> bool {
        self.name_finishers.contains(abbrev)
    }

    /// Canonical corrections for a dot-dropped misspelling.
    pub fn corrections(&self, wrong: &str) -> Option<&[String]> {
        self.wrong_dots.get(wrong).map(Vec::as_slice)
    }

    /// Parse the configuration text (see `Abbrev.conf` for the format).
    pub fn parse(config: &str) -> Result<Abbreviations> {
        let mut abbr = Abbreviations::default();
        let mut section: Option<&str> = None;

        for (lineno, raw_line) in config.lines().enumerate() {
            let line = match raw_line.find('#') {
                Some(ix) => &raw_line[..ix],
                None => raw_line,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') {
                if line != "[abbreviations]" && line != "[not_abbreviations]" {
                    return Err(Error::Config(format!(
                        "line {}: unknown section header {line}",
                        lineno + 1
                    )));
                }
                section = Some(if line == "[abbreviations]" {
                    "abbreviations"
                } else {
                    "not_abbreviations"
                });
                continue;
            }
            match section {
                Some("abbreviations") => abbr.parse_abbreviation(line, lineno + 1)?,
                Some("not_abbreviations") => {
                    let inner = line
                        .strip_prefix('"')
                        .and_then(|s| s.strip_suffix('"'))
                        .ok_or_else(|| {
                            Error::Config(format!(
                                "line {}: not_abbreviations entries must be double-quoted",
                                lineno + 1
                            ))
                        })?;
                    abbr.not_abbreviations.insert(inner.to_string());
                }
                _ => {
                    return Err(Error::Config(format!(
                        "line {}: content outside a section",
                        lineno + 1
                    )))
                }
            }
        }

        // Word forms listed as not-abbreviations must not be reachable
        // through the misspelling index
        for word in &abbr.not_abbreviations {
            abbr.wrong_dict.remove(word);
        }
        abbr.not_abbreviations.clear();
        Ok(abbr)
    }

    /// One `abbrev = "meaning" gender [category]` line.
    fn parse_abbreviation(&mut self, line: &str, lineno: usize) -> Result<()> {
        let (abbrev, rest) = line.split_once('=').ok_or_else(|| {
            Error::Config(format!(
                "line {lineno}: expected 'abbreviation = \"meaning\" ...'"
            ))
        })?;
        let abbrev = abbrev.trim();
        if abbrev.is_empty() {
            return Err(Error::Config(format!("line {lineno}: missing abbreviation")));
        }
        let parts: Vec<&str> = rest.trim().split('"').collect();
        if parts.len() < 3 {
            return Err(Error::Config(format!(
                "line {lineno}: meaning must be double-quoted"
            )));
        }
        let meaning = parts[1];
        let tail = parts[parts.len() - 1].trim();
        let mut gender = "hk";
        let mut fl = None;
        if !tail.is_empty() {
            let mut it = tail.split_whitespace();
            if let Some(g) = it.next() {
                gender = g;
            }
            fl = it.next();
        }
        self.add(abbrev, meaning, gender, fl)
    }
}

static ABBREVIATIONS: OnceLock<Result<Abbreviations>> = OnceLock::new();

/// The process-wide dictionary, parsed from the embedded configuration on
/// first use. A malformed configuration is reported before any
/// tokenization begins.
pub fn abbreviations() -> Result<&'static Abbreviations> {
    match ABBREVIATIONS.get_or_init(|| Abbreviations::parse(include_str!("Abbrev.conf"))) {
        Ok(a) => Ok(a),
        Err(e) => Err(e.clone()),
    }
}
