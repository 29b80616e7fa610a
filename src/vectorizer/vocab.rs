use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SearchError},
    vectorizer::{corpus::CorpusStats, tfidf::TFIDFEngine},
};

/// Fixed term -> column mapping.
/// Columns `0..V` are assigned in lexical ascending order of the terms.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl Vocabulary {
    /// Vocabulary of every term in `corpus`
    pub fn from_corpus(corpus: &CorpusStats) -> Result<Self> {
        Self::from_sorted(corpus.sorted_terms())
    }

    fn from_sorted(terms: Vec<&str>) -> Result<Self> {
        if terms.is_empty() {
            return Err(SearchError::EmptyVocabulary);
        }
        Ok(Self {
            terms: terms.into_iter().map(Box::<str>::from).collect(),
        })
    }

    /// Column of `term`
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at column `index`
    #[inline]
    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| t.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Terms in column order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }
}

/// Per-column inverse document frequency weights.
/// Not sparse: every vocabulary term has a weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IDFVector {
    pub idf_vec: Vec<f64>,
    /// document count the weights were computed from
    pub doc_num: u64,
}

impl IDFVector {
    /// Weights for every column of `vocab` from the corpus document frequencies
    pub fn from_corpus<E>(corpus: &CorpusStats, vocab: &Vocabulary, smoothing: bool) -> Self
    where
        E: TFIDFEngine,
    {
        let doc_num = corpus.doc_num();
        let idf_vec = vocab
            .iter()
            .map(|term| E::idf(doc_num, corpus.doc_freq(term), smoothing))
            .collect();
        Self { idf_vec, doc_num }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.idf_vec.get(index).copied()
    }

    /// Weight of `term`, None when out of vocabulary
    #[inline]
    pub fn weight_of(&self, term: &str, vocab: &Vocabulary) -> Option<f64> {
        vocab.index_of(term).and_then(|i| self.get(i))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf_vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf_vec.is_empty()
    }
}
