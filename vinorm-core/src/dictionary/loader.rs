//! Dictionary loading
//!
//! The default tables ship embedded in the binary; callers may point
//! the engine at a directory holding the same five TOML files instead.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;

use super::{AbbreviationsFile, DictionarySet, EntitiesFile, SymbolsFile, UnitsFile, WordsFile};
use crate::error::{NormalizeError, Result};

const WORDS_TOML: &str = include_str!("../../configs/dictionaries/words.toml");
const ABBREVIATIONS_TOML: &str = include_str!("../../configs/dictionaries/abbreviations.toml");
const ENTITIES_TOML: &str = include_str!("../../configs/dictionaries/entities.toml");
const SYMBOLS_TOML: &str = include_str!("../../configs/dictionaries/symbols.toml");
const UNITS_TOML: &str = include_str!("../../configs/dictionaries/units.toml");

static EMBEDDED: OnceLock<std::result::Result<Arc<DictionarySet>, String>> = OnceLock::new();

impl DictionarySet {
    /// Process-wide embedded dictionary set.
    pub fn embedded() -> Result<Arc<DictionarySet>> {
        let cached = EMBEDDED.get_or_init(|| {
            let set = DictionarySet::build(
                parse_embedded("words.toml", WORDS_TOML)?,
                parse_embedded("abbreviations.toml", ABBREVIATIONS_TOML)?,
                parse_embedded("entities.toml", ENTITIES_TOML)?,
                parse_embedded("symbols.toml", SYMBOLS_TOML)?,
                parse_embedded("units.toml", UNITS_TOML)?,
            )
            .map_err(|reason| format!("embedded dictionaries: {reason}"))?;
            Ok(Arc::new(set))
        });
        match cached {
            Ok(set) => Ok(Arc::clone(set)),
            Err(reason) => Err(NormalizeError::Configuration {
                path: "<embedded>".to_string(),
                reason: reason.clone(),
            }),
        }
    }

    /// Loads a dictionary set from a directory holding the five
    /// category files. A missing or malformed file is fatal.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<DictionarySet> {
        let dir = dir.as_ref();
        log::info!("loading dictionaries from {}", dir.display());
        let words: WordsFile = read_file(dir, "words.toml")?;
        let abbr: AbbreviationsFile = read_file(dir, "abbreviations.toml")?;
        let entities: EntitiesFile = read_file(dir, "entities.toml")?;
        let symbols: SymbolsFile = read_file(dir, "symbols.toml")?;
        let units: UnitsFile = read_file(dir, "units.toml")?;
        DictionarySet::build(words, abbr, entities, symbols, units).map_err(|reason| {
            NormalizeError::Configuration {
                path: dir.display().to_string(),
                reason,
            }
        })
    }
}

fn parse_embedded<T: DeserializeOwned>(
    name: &str,
    raw: &str,
) -> std::result::Result<T, String> {
    toml::from_str(raw).map_err(|e| format!("{name}: {e}"))
}

fn read_file<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    let raw = std::fs::read_to_string(&path).map_err(|e| NormalizeError::Configuration {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    toml::from_str(&raw).map_err(|e| NormalizeError::Configuration {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
