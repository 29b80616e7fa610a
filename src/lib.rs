//! This crate is an in-memory text search engine ranking documents by
//! cosine similarity of TF-IDF weighted vectors.

pub mod config;
pub mod error;
pub mod utils;
pub mod vectorizer;

/// Search Index
/// The top-level struct of this crate.
/// It is built once from a corpus and answers free-text queries with a ranked
/// list of documents.
///
/// Internally, it holds:
/// - One normalized sparse TF-IDF vector per document, in corpus order
/// - The document keys aligned with those vectors
/// - The vocabulary (term -> column, lexical order)
/// - The IDF weight of every column
/// - The configuration and tokenizer used to encode queries
///
/// `Index<K, E>` has the following generic parameters:
/// - `K`: Document key type (e.g., usize, String)
/// - `E`: TF-IDF weighting engine (e.g., DefaultTFIDFEngine)
///
/// # Errors
/// Building fails on an empty corpus or when every term is filtered out;
/// querying fails when `k == 0`.
///
/// # Thread Safety
/// A built index is never mutated; `query` takes `&self` and can run from
/// many threads at once.
///
/// # Examples
/// ```
/// use tf_idf_search::{Index, IndexConfig};
///
/// let index: Index = Index::build_texts(
///     ["Docker containers isolate applications", "NumPy provides arrays"],
///     IndexConfig::default(),
/// ).unwrap();
/// let hits = index.query("container", 1).unwrap();
/// assert_eq!(hits.get(0).unwrap().key, 0);
/// ```
pub use vectorizer::Index;

/// Document
/// A caller-keyed document handed to `Index::build`.
pub use vectorizer::Document;

/// Index snapshot
/// Serializable plain-data image of a built `Index`.
/// Convert back with `IndexData::into_index`, which validates dimensions.
pub use vectorizer::serde::IndexData;

/// Build configuration
/// Stop words, minimum token length, IDF smoothing, normalization scheme and
/// stemming. Serializable; missing fields fall back to defaults.
pub use config::{IndexConfig, NormScheme};

/// Error type and result alias
pub use error::{Result, SearchError};

/// Term Frequency structure
/// Multiset of normalized terms for one document or query.
pub use vectorizer::term::TermFrequency;

/// Tokenizer
/// Lowercases, splits on non-alphanumeric characters, drops short tokens and
/// stop words, and stems.
pub use vectorizer::tokenizer::Tokenizer;

/// Vocabulary and IDF vector
/// The fixed term -> column mapping and per-column IDF weights an index was
/// built with.
pub use vectorizer::vocab::{IDFVector, Vocabulary};

/// TF IDF Calculation Engine Trait
/// Defines the TF and IDF formulas used to encode vectors.
/// `DefaultTFIDFEngine` uses raw counts; `SublinearTFIDFEngine` uses `1 + ln(tf)`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, SublinearTFIDFEngine, TFIDFEngine};

/// Search Hits and Hit Entry structures
/// - `Hits`: ranked results, best first
/// - `HitEntry`: document key, corpus position and score
pub use vectorizer::evaluate::rank::{HitEntry, Hits};

/// Sparse vector
/// Sorted index/value pairs over a fixed dimension.
pub use utils::math::vector::SparseVec;
