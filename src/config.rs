//! Build-time configuration for an [`crate::Index`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// English stop words excluded from indexing by default.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "be", "became", "because", "become", "becomes", "becoming", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
    "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down",
    "during", "each", "either", "else", "elsewhere", "enough", "etc", "even", "ever", "every",
    "everyone", "everything", "everywhere", "except", "few", "for", "former", "formerly", "from",
    "further", "had", "has", "have", "having", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hers", "herself", "him", "himself", "his", "how", "however", "i", "ie",
    "if", "in", "indeed", "into", "is", "it", "its", "itself", "just", "last", "latter",
    "latterly", "least", "less", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "much", "must", "my", "myself", "namely", "neither", "never",
    "nevertheless", "next", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now",
    "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others",
    "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please",
    "rather", "re", "same", "seem", "seemed", "seeming", "seems", "several", "she", "should",
    "since", "so", "some", "somehow", "someone", "something", "sometime", "sometimes",
    "somewhere", "still", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon",
    "these", "they", "this", "those", "though", "through", "throughout", "thru", "thus", "to",
    "together", "too", "toward", "towards", "under", "until", "up", "upon", "us", "very", "via",
    "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
    "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which",
    "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Vector normalization applied to every encoded document and query vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormScheme {
    /// Euclidean norm, dot product equals cosine similarity
    #[default]
    L2,
    /// Sum of absolute weights
    L1,
    /// Raw tf-idf weights
    None,
}

/// Configuration captured by an index at build time
/// and reused unchanged for every query against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Terms excluded from indexing, checked on the lowercased token and on its stem
    pub stop_words: BTreeSet<String>,
    /// Minimum token length in chars
    pub min_token_length: usize,
    /// Use `ln((1 + N) / (1 + df)) + 1` instead of `ln(N / df) + 1`
    pub idf_smoothing: bool,
    pub norm: NormScheme,
    /// Reduce tokens to their English Snowball stem
    pub stemming: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            min_token_length: 2,
            idf_smoothing: true,
            norm: NormScheme::L2,
            stemming: true,
        }
    }
}

impl IndexConfig {
    /// Default configuration: English stop words, stemming, smoothed idf, L2.
    pub fn english() -> Self {
        Self::default()
    }

    /// Replace the stop-word set
    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = stop_words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    pub fn with_idf_smoothing(mut self, idf_smoothing: bool) -> Self {
        self.idf_smoothing = idf_smoothing;
        self
    }

    pub fn with_norm(mut self, norm: NormScheme) -> Self {
        self.norm = norm;
        self
    }

    pub fn with_stemming(mut self, stemming: bool) -> Self {
        self.stemming = stemming;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = IndexConfig::default();
        assert_eq!(config.min_token_length, 2);
        assert!(config.idf_smoothing);
        assert_eq!(config.norm, NormScheme::L2);
        assert!(config.stemming);
        assert!(config.stop_words.contains("the"));
        assert!(!config.stop_words.contains("cloud"));
    }

    #[test]
    fn test_config_builder() {
        let config = IndexConfig::default()
            .with_stop_words(["foo", "bar"])
            .with_min_token_length(3)
            .with_idf_smoothing(false)
            .with_norm(NormScheme::L1)
            .with_stemming(false);
        assert_eq!(config.stop_words.len(), 2);
        assert_eq!(config.min_token_length, 3);
        assert!(!config.idf_smoothing);
        assert_eq!(config.norm, NormScheme::L1);
        assert!(!config.stemming);
    }

    #[test]
    fn test_config_json_partial_uses_defaults() {
        let config: IndexConfig = serde_json::from_str(r#"{"norm":"none","min_token_length":4}"#).unwrap();
        assert_eq!(config.norm, NormScheme::None);
        assert_eq!(config.min_token_length, 4);
        assert!(config.idf_smoothing);
        assert!(config.stop_words.contains("and"));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = IndexConfig::default().with_norm(NormScheme::L1);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"l1\""));
        let back: IndexConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
