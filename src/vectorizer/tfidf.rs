use crate::{
    config::NormScheme,
    utils::math::vector::SparseVec,
    vectorizer::{
        term::TermFrequency,
        vocab::{IDFVector, Vocabulary},
    },
};

/// Weighting strategy used to turn term counts into vector weights.
///
/// Implementors supply the TF and IDF formulas; `tfidf_vec` assembles and
/// normalizes the vector over a fixed vocabulary.
pub trait TFIDFEngine {
    /// Term weight for `count` occurrences (`count >= 1`)
    fn tf(count: u64) -> f64;

    /// Inverse document frequency
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus
    /// * `doc_freq` - number of documents containing the term
    /// * `smoothing` - add one to numerator/denominator
    fn idf(doc_num: u64, doc_freq: u64, smoothing: bool) -> f64 {
        let n = doc_num as f64;
        let df = doc_freq as f64;
        if smoothing {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n.max(1.0) / df.max(1.0)).ln() + 1.0
        }
    }

    /// Encode a term multiset over `vocab`.
    /// Terms outside the vocabulary are dropped; a vector with no
    /// recognized terms is returned as the all-zero vector.
    fn tfidf_vec(
        freq: &TermFrequency,
        vocab: &Vocabulary,
        idf: &IDFVector,
        norm: NormScheme,
    ) -> SparseVec<f64> {
        let mut inds = Vec::with_capacity(freq.len());
        let mut vals = Vec::with_capacity(freq.len());
        for (term, count) in freq.iter() {
            if let Some(col) = vocab.index_of(term) {
                let weight = Self::tf(count) * idf.get(col).unwrap_or(0.0);
                inds.push(col as u32);
                vals.push(weight);
            }
        }
        let mut vec = SparseVec::from_pairs(vocab.len(), inds, vals);
        match norm {
            NormScheme::L2 => {
                let n = vec.norm_l2();
                vec.normalize_by(n);
            }
            NormScheme::L1 => {
                let n = vec.norm_l1();
                vec.normalize_by(n);
            }
            NormScheme::None => {}
        }
        vec.shrink_to_fit();
        vec
    }
}

/// Textbook TF-IDF: raw count TF, smoothed log IDF
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u64) -> f64 {
        count as f64
    }
}

/// Sublinear TF: `1 + ln(count)`, dampens repeated terms
#[derive(Debug, Clone, Copy, Default)]
pub struct SublinearTFIDFEngine;

impl TFIDFEngine for SublinearTFIDFEngine {
    #[inline]
    fn tf(count: u64) -> f64 {
        if count == 0 {
            return 0.0;
        }
        1.0 + (count as f64).ln()
    }
}
