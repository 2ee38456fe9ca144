//! Dictionary store
//!
//! An immutable [`DictionarySet`] holds every category table the
//! cascade and the classifier consult. Sets are built once at startup,
//! either from the embedded defaults or from a caller-supplied
//! directory, and shared across threads behind an `Arc`.

use std::collections::{HashMap, HashSet};

mod config;
mod loader;

pub(crate) use config::{AbbreviationsFile, EntitiesFile, SymbolsFile, UnitsFile, WordsFile};

/// Immutable dictionary tables for one normalizer instance.
#[derive(Debug)]
pub struct DictionarySet {
    pub(crate) words: HashSet<String>,
    pub(crate) special: HashMap<String, String>,
    pub(crate) single_abbr: HashMap<String, String>,
    pub(crate) double_abbr: HashMap<String, String>,
    /// First tokens of the double-abbreviation keys, for the
    /// classifier's lookahead gate.
    pub(crate) double_abbr_starts: HashSet<String>,
    pub(crate) abbr_exceptions: HashSet<String>,
    pub(crate) locations: HashMap<String, String>,
    pub(crate) artists: HashMap<String, String>,
    pub(crate) banks: HashMap<String, String>,
    pub(crate) loans: HashMap<String, String>,
    pub(crate) mixed: HashMap<String, String>,
    pub(crate) websites: HashMap<String, String>,
    pub(crate) domains: HashMap<String, String>,
    pub(crate) symbols: HashMap<String, String>,
    pub(crate) punctuation: HashMap<String, String>,
    pub(crate) units: HashMap<String, String>,
    pub(crate) currency: HashMap<String, String>,
}

impl DictionarySet {
    fn build(
        words: WordsFile,
        abbr: AbbreviationsFile,
        entities: EntitiesFile,
        symbols: SymbolsFile,
        units: UnitsFile,
    ) -> Result<Self, String> {
        words.validate()?;
        abbr.validate()?;
        symbols.validate()?;
        units.validate()?;

        let double_abbr_starts = abbr
            .double
            .keys()
            .filter_map(|k| k.split('#').next())
            .map(str::to_string)
            .collect();

        Ok(Self {
            words: words.words.into_iter().collect(),
            special: words.special,
            single_abbr: abbr.single,
            double_abbr: abbr.double,
            double_abbr_starts,
            abbr_exceptions: abbr.exceptions.into_iter().collect(),
            locations: entities.locations,
            artists: entities.artists,
            banks: entities.banks,
            loans: entities.loans,
            mixed: entities.mixed,
            websites: entities.websites,
            domains: entities.domains,
            symbols: symbols.symbols,
            punctuation: symbols.punctuation,
            units: units.units,
            currency: units.currency,
        })
    }

    /// True when the lowercase token is a known vocabulary syllable
    /// sequence (multi-syllable entries are space-separated).
    pub(crate) fn is_word(&self, lower: &str) -> bool {
        self.words.contains(lower)
    }

    /// Spoken form of a currency symbol or code, trying the written
    /// form, then uppercase, then lowercase.
    pub(crate) fn currency_reading(&self, code: &str) -> Option<&str> {
        self.currency
            .get(code)
            .or_else(|| self.currency.get(&code.to_uppercase()))
            .or_else(|| self.currency.get(&code.to_lowercase()))
            .map(String::as_str)
    }

    /// Spoken form of a measurement unit code.
    pub(crate) fn unit_reading(&self, code: &str) -> Option<&str> {
        self.units
            .get(code)
            .or_else(|| self.units.get(&code.to_lowercase()))
            .map(String::as_str)
    }
}

/// Pause punctuation: read as "," mid-sentence and "." at the end.
pub(crate) fn is_duration_punct(token: &str) -> bool {
    matches!(
        token,
        "." | "," | ";" | "!" | "?" | ":" | "(" | ")" | "[" | "]" | "{" | "}" | "…"
    )
}

/// Characters the tokenizer treats as punctuation.
pub(crate) fn is_punct_char(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '…' | '–' | '—' | '“' | '”' | '‘' | '’')
}

/// Consonant clusters read with a schwa when they stand alone.
pub(crate) const DOUBLE_CONSONANTS: [&str; 7] = ["ch", "ng", "nh", "ph", "qu", "th", "tr"];

/// Vietnamese alphabet letter names, used when an abbreviation is
/// spelled out character by character.
pub(crate) fn letter_name(c: char) -> Option<&'static str> {
    let lower = c.to_lowercase().next()?;
    Some(match lower {
        'a' => "a",
        'ă' => "á",
        'â' => "ớ",
        'b' => "bê",
        'c' => "xê",
        'd' => "dê",
        'đ' => "đê",
        'e' => "e",
        'ê' => "ê",
        'f' => "ép",
        'g' => "gờ",
        'h' => "hát",
        'i' => "i",
        'j' => "gi",
        'k' => "ca",
        'l' => "e lờ",
        'm' => "em mờ",
        'n' => "en nờ",
        'o' => "o",
        'ô' => "ô",
        'ơ' => "ơ",
        'p' => "pê",
        'q' => "quy",
        'r' => "e rờ",
        's' => "ét",
        't' => "tê",
        'u' => "u",
        'ư' => "ư",
        'v' => "vê",
        'w' => "vê kép",
        'x' => "ích",
        'y' => "i dài",
        'z' => "dét",
        '0'..='9' => {
            return lower
                .to_digit(10)
                .map(|d| crate::reader::NumberReader::digit_word(d as usize));
        }
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_set_loads() {
        let dict = DictionarySet::embedded().unwrap();
        assert!(dict.is_word("ngày"));
        assert!(dict.single_abbr.contains_key("TP.HCM"));
        assert!(dict.double_abbr.contains_key("GD#ĐT"));
        assert!(dict.double_abbr_starts.contains("GD"));
        assert!(dict.currency_reading("vnđ").is_some());
        assert!(dict.unit_reading("kg").is_some());
    }

    #[test]
    fn letter_names() {
        assert_eq!(letter_name('B'), Some("bê"));
        assert_eq!(letter_name('đ'), Some("đê"));
        assert_eq!(letter_name('W'), Some("vê kép"));
        assert_eq!(letter_name('!'), None);
    }

    #[test]
    fn duration_punctuation() {
        assert!(is_duration_punct("."));
        assert!(is_duration_punct(":"));
        assert!(!is_duration_punct("-"));
        assert!(!is_duration_punct("%"));
    }
}
