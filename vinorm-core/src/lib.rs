//! Vietnamese text normalization for speech synthesis front ends.
//!
//! Turns raw written Vietnamese into a fully speakable word sequence:
//! digits become number words, dates/times/currencies/units become
//! phrases, abbreviations expand, and loan words get phonetic
//! respellings.
//!
//! # Example
//!
//! ```
//! use vinorm_core::normalize_text;
//!
//! let sentences = normalize_text("Tôi có 5 con mèo.").unwrap();
//! assert_eq!(sentences, vec!["tôi có năm con mèo."]);
//! ```

#![warn(missing_docs)]

mod cascade;
mod classify;
mod dictionary;
mod error;
mod preprocess;
mod reader;
mod segment;

pub use error::{NormalizeError, Result, SegmentError};
pub use reader::{DateReader, NumberReader, TimeReader};
pub use segment::{Segment, WhitespaceSegmenter};

use std::path::PathBuf;
use std::sync::Arc;

use cascade::RewriteCascade;
use classify::WordClassifier;
use dictionary::DictionarySet;
use preprocess::Preprocessor;

/// Engine configuration.
///
/// The default uses the embedded dictionaries and whitespace
/// segmentation; [`Config::builder`] overrides either.
#[derive(Default)]
pub struct Config {
    dictionary_dir: Option<PathBuf>,
    segmenter: Option<Box<dyn Segment>>,
}

impl Config {
    /// Creates a builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("dictionary_dir", &self.dictionary_dir)
            .field("custom_segmenter", &self.segmenter.is_some())
            .finish()
    }
}

/// Builder for [`Config`].
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Loads dictionaries from a directory instead of the embedded
    /// defaults.
    pub fn dictionary_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.dictionary_dir = Some(dir.into());
        self
    }

    /// Installs a custom word segmenter.
    pub fn segmenter(mut self, segmenter: Box<dyn Segment>) -> Self {
        self.config.segmenter = Some(segmenter);
        self
    }

    /// Finishes the configuration.
    pub fn build(self) -> Config {
        self.config
    }
}

/// The normalization engine.
///
/// Construction loads and validates the dictionaries; a constructed
/// normalizer is immutable and can be shared across threads.
pub struct TextNormalizer {
    cascade: RewriteCascade,
    classifier: WordClassifier,
    segmenter: Box<dyn Segment>,
}

impl TextNormalizer {
    /// Creates a normalizer with embedded dictionaries and whitespace
    /// segmentation.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Creates a normalizer from a [`Config`].
    pub fn with_config(config: Config) -> Result<Self> {
        let dict: Arc<DictionarySet> = match &config.dictionary_dir {
            Some(dir) => Arc::new(DictionarySet::from_dir(dir)?),
            None => DictionarySet::embedded()?,
        };
        let cascade = RewriteCascade::new(Arc::clone(&dict));
        let classifier = WordClassifier::new(dict);
        let segmenter = config
            .segmenter
            .unwrap_or_else(|| Box::new(WhitespaceSegmenter));
        Ok(Self {
            cascade,
            classifier,
            segmenter,
        })
    }

    /// Normalizes raw text into one spoken-form string per sentence.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        let mut sentences = Vec::new();
        for raw_line in text.lines() {
            let line = Preprocessor::run(raw_line);
            if line.is_empty() {
                continue;
            }
            let rewritten = self.cascade.apply(&line);
            log::debug!("cascade: {rewritten}");
            let segmented = self.segmenter.segment(&rewritten)?;
            // expand segmenter compound markers ("Hà_Nội")
            let tokens: Vec<String> = segmented
                .iter()
                .flat_map(|t| t.split('_'))
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            for sentence in split_sentences(&tokens) {
                let spoken = self.classifier.read_sentence(&sentence);
                if !spoken.is_empty() {
                    sentences.push(spoken);
                }
            }
        }
        Ok(sentences)
    }
}

/// Groups a token stream into sentences at terminal punctuation.
fn split_sentences(tokens: &[String]) -> Vec<Vec<String>> {
    let mut out: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for token in tokens {
        current.push(token.clone());
        if matches!(token.as_str(), "." | "!" | "?" | "…") {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Normalizes text with the default engine.
///
/// Convenience wrapper around [`TextNormalizer::new`] for one-off
/// calls; construct the engine once when normalizing repeatedly.
pub fn normalize_text(text: &str) -> Result<Vec<String>> {
    TextNormalizer::new()?.normalize(text)
}
