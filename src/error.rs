//! Error types for index build and query.

/// Errors surfaced by [`crate::Index`] build, query and snapshot operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The corpus handed to `build` contained no documents
    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,

    /// Every term in the corpus was filtered out by normalization
    #[error("corpus produced an empty vocabulary (all terms were filtered)")]
    EmptyVocabulary,

    /// Requested result count must be positive
    #[error("invalid result count k={0}, k must be at least 1")]
    InvalidK(usize),

    /// Snapshot encode/decode failure
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Snapshot whose vectors or weights disagree with its vocabulary
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

impl From<serde_cbor::Error> for SearchError {
    fn from(err: serde_cbor::Error) -> Self {
        SearchError::Snapshot(err.to_string())
    }
}

/// Result type alias using SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(SearchError::EmptyCorpus.to_string().contains("empty corpus"));
        assert!(SearchError::EmptyVocabulary.to_string().contains("empty vocabulary"));
        assert!(SearchError::InvalidK(0).to_string().contains("k=0"));

        let err = SearchError::DimensionMismatch { expected: 3, found: 5 };
        assert!(err.to_string().contains("expected 3"));
        assert!(err.to_string().contains("found 5"));
    }

    #[test]
    fn test_error_from_cbor_error() {
        let cbor_err = serde_cbor::from_slice::<Vec<u32>>(&[0xff, 0x00]).unwrap_err();
        let err: SearchError = cbor_err.into();
        assert!(matches!(err, SearchError::Snapshot(_)));
    }

    #[test]
    fn test_error_chaining() {
        fn inner_fn() -> Result<()> {
            Err(SearchError::EmptyVocabulary)
        }

        fn outer_fn() -> Result<()> {
            inner_fn()?;
            Ok(())
        }

        assert_eq!(outer_fn(), Err(SearchError::EmptyVocabulary));
    }
}
