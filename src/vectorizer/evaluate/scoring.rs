use rayon::prelude::*;

use crate::{
    config::NormScheme,
    utils::math::vector::SparseVec,
    vectorizer::{evaluate::rank::HitEntry, tfidf::TFIDFEngine, Index},
};

/// Similarity of a query vector and a document vector.
///
/// The sum runs over the query's non-zero entries only, each looked up in the
/// document by binary search: O(nnz(query) * log nnz(doc)) per document.
/// Either side being the zero vector scores 0.
/// With L2-normalized inputs this is the cosine similarity, clamped to [0, 1]
/// to absorb rounding.
#[inline]
pub fn similarity(query: &SparseVec<f64>, doc: &SparseVec<f64>, norm: NormScheme) -> f64 {
    if query.is_zero() || doc.is_zero() {
        return 0.0;
    }
    let dot = query.dot_lookup(doc);
    match norm {
        NormScheme::L2 => dot.clamp(0.0, 1.0),
        NormScheme::L1 | NormScheme::None => dot,
    }
}

impl<K, E> Index<K, E>
where
    K: Clone + Send + Sync,
    E: TFIDFEngine,
{
    /// Score an encoded query against every indexed document, in corpus order
    pub fn score_vec(&self, query: &SparseVec<f64>) -> Vec<HitEntry<K>> {
        debug_assert_eq!(query.len(), self.vocabulary_size());
        let norm = self.config.norm;
        self.documents
            .par_iter()
            .zip(self.keys.par_iter())
            .enumerate()
            .map(|(position, (doc, key))| HitEntry {
                key: key.clone(),
                position,
                score: similarity(query, doc, norm),
            })
            .collect()
    }

    /// Unranked scores of `text` against every document, in corpus order
    pub fn score_all(&self, text: &str) -> Vec<HitEntry<K>> {
        let query = self.encode(text);
        self.score_vec(&query)
    }

    /// Similarity of two indexed documents, None when a position is out of range
    pub fn similarity(&self, a: usize, b: usize) -> Option<f64> {
        let doc_a = self.documents.get(a)?;
        let doc_b = self.documents.get(b)?;
        if doc_a.is_zero() || doc_b.is_zero() {
            return Some(0.0);
        }
        let dot = doc_a.dot_merge(doc_b);
        Some(match self.config.norm {
            NormScheme::L2 => dot.clamp(0.0, 1.0),
            NormScheme::L1 | NormScheme::None => dot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vectors_score_zero() {
        let q: SparseVec<f64> = SparseVec::zeros(3);
        let d = SparseVec::from_dense(&[0.6, 0.8, 0.0]);
        assert_eq!(similarity(&q, &d, NormScheme::L2), 0.0);
        assert_eq!(similarity(&d, &q, NormScheme::L2), 0.0);
    }

    #[test]
    fn identical_unit_vectors_score_one() {
        let d = SparseVec::from_dense(&[0.6, 0.8, 0.0]);
        let score = similarity(&d, &d, NormScheme::L2);
        assert!(score <= 1.0);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unnormalized_scores_are_raw_dot() {
        let a = SparseVec::from_dense(&[2.0, 0.0, 3.0]);
        let b = SparseVec::from_dense(&[1.0, 5.0, 1.0]);
        assert_eq!(similarity(&a, &b, NormScheme::None), 5.0);
    }
}
