//! Serde schema for the dictionary TOML files
//!
//! Five files make up a dictionary set: `words.toml`,
//! `abbreviations.toml`, `entities.toml`, `symbols.toml`,
//! `units.toml`. Each file deserializes into one of the structs below
//! and is validated before the [`DictionarySet`](super::DictionarySet)
//! is built.

use serde::Deserialize;
use std::collections::HashMap;

/// `words.toml`: base vocabulary plus special respellings.
#[derive(Debug, Deserialize)]
pub struct WordsFile {
    /// Known Vietnamese syllables, lowercase.
    pub words: Vec<String>,
    /// Written form -> spoken respelling ("đắk" -> "đắc").
    #[serde(default)]
    pub special: HashMap<String, String>,
}

impl WordsFile {
    pub fn validate(&self) -> Result<(), String> {
        if self.words.is_empty() {
            return Err("vocabulary must not be empty".to_string());
        }
        for w in &self.words {
            if w.chars().any(|c| c.is_uppercase()) {
                return Err(format!("vocabulary entry '{w}' must be lowercase"));
            }
        }
        Ok(())
    }
}

/// `abbreviations.toml`: single- and multi-token expansions.
#[derive(Debug, Deserialize)]
pub struct AbbreviationsFile {
    /// Token -> expansion ("UBND" -> "ủy ban nhân dân").
    pub single: HashMap<String, String>,
    /// Composite `A#B` / `A#B#C` key -> expansion.
    #[serde(default)]
    pub double: HashMap<String, String>,
    /// Uppercase tokens read as plain words rather than spelled out.
    #[serde(default)]
    pub exceptions: Vec<String>,
}

impl AbbreviationsFile {
    pub fn validate(&self) -> Result<(), String> {
        for key in self.double.keys() {
            let arity = key.split('#').count();
            if !(2..=3).contains(&arity) || key.split('#').any(str::is_empty) {
                return Err(format!(
                    "double abbreviation key '{key}' must be 'A#B' or 'A#B#C'"
                ));
            }
        }
        Ok(())
    }
}

/// `entities.toml`: named-entity respelling tables.
#[derive(Debug, Default, Deserialize)]
pub struct EntitiesFile {
    /// Administrative prefixes ("TP" -> "thành phố").
    #[serde(default)]
    pub locations: HashMap<String, String>,
    #[serde(default)]
    pub artists: HashMap<String, String>,
    #[serde(default)]
    pub banks: HashMap<String, String>,
    /// Loan words with fixed phonetic respellings.
    #[serde(default)]
    pub loans: HashMap<String, String>,
    /// Expansions that are re-classified recursively.
    #[serde(default)]
    pub mixed: HashMap<String, String>,
    /// Well-known site names.
    #[serde(default)]
    pub websites: HashMap<String, String>,
    /// Domain suffixes ("com", "vn", ...).
    #[serde(default)]
    pub domains: HashMap<String, String>,
}

/// `symbols.toml`: symbol and punctuation spoken forms.
#[derive(Debug, Deserialize)]
pub struct SymbolsFile {
    /// Single characters split out of words ("&" -> "và").
    pub symbols: HashMap<String, String>,
    /// Standalone punctuation tokens with a reading.
    #[serde(default)]
    pub punctuation: HashMap<String, String>,
}

impl SymbolsFile {
    pub fn validate(&self) -> Result<(), String> {
        for key in self.symbols.keys() {
            if key.chars().count() != 1 {
                return Err(format!("symbol key '{key}' must be a single character"));
            }
        }
        Ok(())
    }
}

/// `units.toml`: measurement unit and currency readings.
#[derive(Debug, Deserialize)]
pub struct UnitsFile {
    pub units: HashMap<String, String>,
    pub currency: HashMap<String, String>,
}

impl UnitsFile {
    pub fn validate(&self) -> Result<(), String> {
        if self.currency.is_empty() {
            return Err("currency table must not be empty".to_string());
        }
        Ok(())
    }
}
