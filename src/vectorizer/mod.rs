pub mod corpus;
pub mod evaluate;
pub mod serde;
pub mod term;
pub mod tfidf;
pub mod tokenizer;
pub mod vocab;

use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    config::IndexConfig,
    error::{Result, SearchError},
    utils::math::vector::SparseVec,
    vectorizer::{
        corpus::CorpusStats,
        evaluate::rank::{rank, Hits},
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        tokenizer::Tokenizer,
        vocab::{IDFVector, Vocabulary},
    },
};

/// A document handed to [`Index::build`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<K> {
    pub key: K,
    pub text: String,
}

impl<K> Document<K> {
    pub fn new(key: K, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }
}

/// Immutable TF-IDF index over an in-memory corpus.
///
/// Holds one L2 (or configured) normalized sparse vector per document, in
/// corpus order, plus the vocabulary and IDF weights they were encoded with.
/// Every vector has dimension `vocabulary_size()`.
///
/// `Index<K, E>` has the following generic parameters:
/// - `K`: document key type (ordinal `usize` by default)
/// - `E`: weighting engine (`DefaultTFIDFEngine` by default)
///
/// Nothing mutates a built index, so `&Index` can be queried from any number
/// of threads at once.
pub struct Index<K = usize, E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    pub(crate) keys: Vec<K>,
    pub(crate) documents: Vec<SparseVec<f64>>,
    pub(crate) vocab: Vocabulary,
    pub(crate) idf: IDFVector,
    pub(crate) config: IndexConfig,
    tokenizer: Tokenizer,
    _marker: PhantomData<fn() -> E>,
}

impl<K, E> Index<K, E>
where
    K: Send + Sync,
    E: TFIDFEngine,
{
    /// Build an index over keyed documents.
    ///
    /// Fails with `EmptyCorpus` when there are no documents and with
    /// `EmptyVocabulary` when normalization filters out every term.
    pub fn build<I>(documents: I, config: IndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Document<K>>,
    {
        let documents: Vec<Document<K>> = documents.into_iter().collect();
        if documents.is_empty() {
            warn!("index build aborted: empty corpus");
            return Err(SearchError::EmptyCorpus);
        }
        let tokenizer = Tokenizer::new(&config);

        // tokenize every document independently
        let freqs: Vec<TermFrequency> = documents
            .par_iter()
            .map(|doc| tokenizer.term_frequency(&doc.text))
            .collect();

        // corpus-wide document frequencies must be complete before any encoding
        let corpus = freqs
            .par_iter()
            .fold(CorpusStats::new, |mut corpus, freq| {
                corpus.add_set(freq.term_set());
                corpus
            })
            .reduce(CorpusStats::new, CorpusStats::merge);

        let vocab = Vocabulary::from_corpus(&corpus).inspect_err(|_| {
            warn!(documents = documents.len(), "index build aborted: every term was filtered");
        })?;
        let idf = IDFVector::from_corpus::<E>(&corpus, &vocab, config.idf_smoothing);

        let vectors: Vec<SparseVec<f64>> = freqs
            .par_iter()
            .map(|freq| E::tfidf_vec(freq, &vocab, &idf, config.norm))
            .collect();

        let keys: Vec<K> = documents.into_iter().map(|doc| doc.key).collect();
        let index = Self::from_parts(keys, vectors, vocab, idf, config);
        info!(
            documents = index.size(),
            vocabulary = index.vocabulary_size(),
            nnz = index.nnz(),
            "index built"
        );
        Ok(index)
    }
}

impl<E> Index<usize, E>
where
    E: TFIDFEngine,
{
    /// Build an index over plain texts keyed by their ordinal `0..N`
    pub fn build_texts<I, S>(texts: I, config: IndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let documents = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Document::new(i, text));
        Self::build(documents, config)
    }
}

impl<K, E> Index<K, E>
where
    E: TFIDFEngine,
{
    pub(crate) fn from_parts(
        keys: Vec<K>,
        documents: Vec<SparseVec<f64>>,
        vocab: Vocabulary,
        idf: IDFVector,
        config: IndexConfig,
    ) -> Self {
        let tokenizer = Tokenizer::new(&config);
        Self {
            keys,
            documents,
            vocab,
            idf,
            config,
            tokenizer,
            _marker: PhantomData,
        }
    }

    /// Number of indexed documents
    #[inline]
    pub fn size(&self) -> usize {
        self.documents.len()
    }

    /// Vector of the document at corpus position `i`
    #[inline]
    pub fn vector_at(&self, i: usize) -> Option<&SparseVec<f64>> {
        self.documents.get(i)
    }

    /// Dimension `V` of every vector in this index
    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vocab.len()
    }

    /// Total stored non-zero weights across all documents
    pub fn nnz(&self) -> usize {
        self.documents.iter().map(SparseVec::nnz).sum()
    }

    #[inline]
    pub fn key_at(&self, i: usize) -> Option<&K> {
        self.keys.get(i)
    }

    /// Corpus position of the first document with `key`
    pub fn position_of(&self, key: &K) -> Option<usize>
    where
        K: PartialEq,
    {
        self.keys.iter().position(|k| k == key)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn idf(&self) -> &IDFVector {
        &self.idf
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Encode free text with this index's tokenizer, vocabulary and IDF weights
    pub fn encode(&self, text: &str) -> SparseVec<f64> {
        let freq = self.tokenizer.term_frequency(text);
        E::tfidf_vec(&freq, &self.vocab, &self.idf, self.config.norm)
    }
}

impl<K, E> Index<K, E>
where
    K: Clone + Send + Sync,
    E: TFIDFEngine,
{
    /// Rank every document against `text` and return the best `k`.
    ///
    /// Fails with `InvalidK` when `k == 0`. A query without recognized terms
    /// is not an error: every score is 0 and documents come back in corpus order.
    pub fn query(&self, text: &str, k: usize) -> Result<Hits<K>> {
        if k == 0 {
            return Err(SearchError::InvalidK(k));
        }
        let query = self.encode(text);
        let scored = self.score_vec(&query);
        let hits = rank(scored, k)?;
        debug!(
            recognized_terms = query.nnz(),
            k,
            hits = hits.len(),
            "query ranked"
        );
        Ok(hits)
    }
}

impl<K, E> std::fmt::Debug for Index<K, E>
where
    K: std::fmt::Debug,
    E: TFIDFEngine,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("documents", &self.documents.len())
            .field("vocabulary", &self.vocab.len())
            .field("keys", &self.keys)
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NormScheme;

    fn corpus() -> Vec<&'static str> {
        vec![
            "Rust is a fast systems language",
            "Python is a flexible scripting language",
            "Rust and Python interoperate through bindings",
        ]
    }

    #[test]
    fn build_reports_sizes() {
        let index: Index = Index::build_texts(corpus(), IndexConfig::default()).unwrap();
        assert_eq!(index.size(), 3);
        assert!(index.vocabulary_size() > 0);
        for i in 0..index.size() {
            let vec = index.vector_at(i).unwrap();
            assert_eq!(vec.len(), index.vocabulary_size());
            assert!(vec.is_well_formed());
            assert!((vec.norm_l2() - 1.0).abs() < 1e-12);
        }
        assert!(index.vector_at(3).is_none());
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let result: Result<Index> = Index::build_texts(Vec::<String>::new(), IndexConfig::default());
        assert_eq!(result.unwrap_err(), SearchError::EmptyCorpus);
    }

    #[test]
    fn stop_word_corpus_is_rejected() {
        let result: Result<Index> = Index::build_texts(["the and of", "a an it"], IndexConfig::default());
        assert_eq!(result.unwrap_err(), SearchError::EmptyVocabulary);
    }

    #[test]
    fn stop_word_stems_never_reach_vocabulary() {
        let index: Index = Index::build_texts(["ones aed wells", "cloud servers"], IndexConfig::default()).unwrap();
        let terms: Vec<&str> = index.vocabulary().iter().collect();
        assert_eq!(terms, vec!["cloud", "server"]);
        for term in ["a", "one", "well"] {
            assert!(!index.vocabulary().contains(term), "{term}");
        }
        // surface form and stem of a stop word both encode to nothing
        assert!(index.encode("ones").is_zero());
        assert!(index.encode("one well").is_zero());
    }

    #[test]
    fn keyed_documents_keep_keys() {
        let docs = vec![
            Document::new("alpha".to_string(), "vector databases store embeddings"),
            Document::new("beta".to_string(), "serverless functions scale to zero"),
        ];
        let index: Index<String> = Index::build(docs, IndexConfig::default()).unwrap();
        assert_eq!(index.key_at(1).map(String::as_str), Some("beta"));
        assert_eq!(index.position_of(&"alpha".to_string()), Some(0));

        let hits = index.query("embeddings database", 1).unwrap();
        assert_eq!(hits.get(0).unwrap().key, "alpha");
    }

    #[test]
    fn query_rejects_zero_k() {
        let index: Index = Index::build_texts(corpus(), IndexConfig::default()).unwrap();
        assert_eq!(index.query("rust", 0).unwrap_err(), SearchError::InvalidK(0));
    }

    #[test]
    fn query_ranks_matching_document_first() {
        let index: Index = Index::build_texts(corpus(), IndexConfig::default()).unwrap();
        let hits = index.query("fast systems", 3).unwrap();
        assert_eq!(hits.get(0).unwrap().key, 0);
        assert!(hits.get(0).unwrap().score > 0.0);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn encode_uses_index_vocabulary() {
        let index: Index = Index::build_texts(corpus(), IndexConfig::default()).unwrap();
        let vec = index.encode("rust kotlin");
        assert_eq!(vec.len(), index.vocabulary_size());
        assert_eq!(vec.nnz(), 1);
        assert!(index.encode("kotlin swift").is_zero());
    }

    #[test]
    fn document_similarity() {
        let index: Index = Index::build_texts(corpus(), IndexConfig::default()).unwrap();
        let self_sim = index.similarity(0, 0).unwrap();
        assert!((self_sim - 1.0).abs() < 1e-12);
        assert!(index.similarity(0, 2).unwrap() > 0.0);
        assert!(index.similarity(0, 9).is_none());
    }

    #[test]
    fn l1_norm_index() {
        let config = IndexConfig::default().with_norm(NormScheme::L1);
        let index: Index = Index::build_texts(corpus(), config).unwrap();
        for i in 0..index.size() {
            assert!((index.vector_at(i).unwrap().norm_l1() - 1.0).abs() < 1e-12);
        }
    }
}
