use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};

use crate::{config::IndexConfig, vectorizer::term::TermFrequency};

/// Turns raw text into normalized terms.
///
/// A token is a maximal run of alphanumeric chars, lowercased.
/// Tokens shorter than `min_token_length` chars or in the stop-word set are
/// dropped; survivors are optionally reduced to their English stem, which is
/// filtered again.
/// Pure: the same input always yields the same sequence.
pub struct Tokenizer {
    stop_words: HashSet<Box<str>>,
    min_token_length: usize,
    stemmer: Option<Stemmer>,
}

impl Tokenizer {
    pub fn new(config: &IndexConfig) -> Self {
        Self {
            stop_words: config
                .stop_words
                .iter()
                .map(|w| w.to_lowercase().into_boxed_str())
                .collect(),
            min_token_length: config.min_token_length,
            stemmer: config
                .stemming
                .then(|| Stemmer::create(Algorithm::English)),
        }
    }

    /// Ordered term occurrences, duplicates preserved
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter_map(|token| self.normalize(token))
            .collect()
    }

    /// Term multiset of `text`
    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter_map(|token| self.normalize(token))
            .collect()
    }

    #[inline]
    fn normalize(&self, token: &str) -> Option<String> {
        if !self.is_term(token) {
            return None;
        }
        match &self.stemmer {
            // the stem must pass the same filters, "ones" -> "one" is a stop word
            Some(stemmer) => {
                let stem = stemmer.stem(token);
                self.is_term(&stem).then(|| stem.into_owned())
            }
            None => Some(token.to_string()),
        }
    }

    #[inline]
    fn is_term(&self, token: &str) -> bool {
        !token.is_empty()
            && token.chars().count() >= self.min_token_length
            && !self.stop_words.contains(token)
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("stop_words", &self.stop_words.len())
            .field("min_token_length", &self.min_token_length)
            .field("stemming", &self.stemmer.is_some())
            .finish()
    }
}
