use ::serde::{de::DeserializeOwned, ser::SerializeStruct, Deserialize, Serialize};

use crate::{
    config::IndexConfig,
    error::{Result, SearchError},
    utils::math::vector::SparseVec,
    vectorizer::{
        tfidf::TFIDFEngine,
        vocab::{IDFVector, Vocabulary},
        Index,
    },
};

/// Plain-data image of a built [`Index`].
/// Carries no tokenizer; `into_index` rebuilds it from the stored config.
/// The weighting engine is not recorded, load with the engine used at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexData<K> {
    pub config: IndexConfig,
    pub vocab: Vocabulary,
    pub idf: IDFVector,
    pub keys: Vec<K>,
    pub documents: Vec<SparseVec<f64>>,
}

impl<K> IndexData<K> {
    /// Validate and convert into a queryable index
    pub fn into_index<E>(self) -> Result<Index<K, E>>
    where
        E: TFIDFEngine,
    {
        self.validate()?;
        Ok(Index::from_parts(
            self.keys,
            self.documents,
            self.vocab,
            self.idf,
            self.config,
        ))
    }

    fn validate(&self) -> Result<()> {
        if self.documents.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }
        if self.vocab.is_empty() {
            return Err(SearchError::EmptyVocabulary);
        }
        let dim = self.vocab.len();
        if !self.vocab.iter().zip(self.vocab.iter().skip(1)).all(|(a, b)| a < b) {
            return Err(SearchError::Snapshot("vocabulary is not in lexical order".to_string()));
        }
        if self.idf.len() != dim {
            return Err(SearchError::DimensionMismatch { expected: dim, found: self.idf.len() });
        }
        if self.keys.len() != self.documents.len() {
            return Err(SearchError::DimensionMismatch {
                expected: self.documents.len(),
                found: self.keys.len(),
            });
        }
        for doc in &self.documents {
            if doc.len() != dim {
                return Err(SearchError::DimensionMismatch { expected: dim, found: doc.len() });
            }
            if !doc.is_well_formed() {
                return Err(SearchError::Snapshot("malformed sparse vector".to_string()));
            }
        }
        Ok(())
    }
}

impl<K, E> Index<K, E>
where
    K: Clone,
    E: TFIDFEngine,
{
    /// Copy the index into its plain-data image
    pub fn to_data(&self) -> IndexData<K> {
        IndexData {
            config: self.config.clone(),
            vocab: self.vocab.clone(),
            idf: self.idf.clone(),
            keys: self.keys.clone(),
            documents: self.documents.clone(),
        }
    }
}

impl<K, E> Index<K, E>
where
    K: Serialize,
    E: TFIDFEngine,
{
    /// Encode the index as CBOR
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }
}

impl<K, E> Index<K, E>
where
    K: DeserializeOwned,
    E: TFIDFEngine,
{
    /// Decode an index written by [`Index::to_cbor`]
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        let data: IndexData<K> = serde_cbor::from_slice(bytes)?;
        data.into_index()
    }
}

impl<K, E> Serialize for Index<K, E>
where
    K: Serialize,
    E: TFIDFEngine,
{
    /// Serialized with the same field layout as `IndexData`,
    /// deserialize through `IndexData`.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        let mut state = serializer.serialize_struct("IndexData", 5)?;
        state.serialize_field("config", &self.config)?;
        state.serialize_field("vocab", &self.vocab)?;
        state.serialize_field("idf", &self.idf)?;
        state.serialize_field("keys", &self.keys)?;
        state.serialize_field("documents", &self.documents)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::tfidf::DefaultTFIDFEngine;

    fn index() -> Index {
        Index::build_texts(
            [
                "Docker containers provide lightweight isolation",
                "Kubernetes orchestrates containerized workloads",
                "NumPy provides multi-dimensional arrays",
            ],
            IndexConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn cbor_snapshot_answers_queries_identically() {
        let original = index();
        let bytes = original.to_cbor().unwrap();
        let restored: Index = Index::from_cbor(&bytes).unwrap();
        assert_eq!(restored.size(), original.size());
        assert_eq!(restored.vocabulary(), original.vocabulary());
        assert_eq!(
            restored.query("container isolation", 3).unwrap(),
            original.query("container isolation", 3).unwrap()
        );
    }

    #[test]
    fn corrupt_bytes_are_a_snapshot_error() {
        let err = Index::<usize>::from_cbor(&[0xff, 0x00, 0x01]).unwrap_err();
        assert!(matches!(err, SearchError::Snapshot(_)));
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let mut data = index().to_data();
        data.documents[1] = SparseVec::zeros(data.vocab.len() + 1);
        let err = data.into_index::<DefaultTFIDFEngine>().unwrap_err();
        assert!(matches!(err, SearchError::DimensionMismatch { .. }));
    }

    #[test]
    fn key_count_mismatch_is_rejected() {
        let mut data = index().to_data();
        data.keys.pop();
        assert!(data.into_index::<DefaultTFIDFEngine>().is_err());
    }

    #[test]
    fn empty_snapshot_is_rejected() {
        let mut data = index().to_data();
        data.documents.clear();
        data.keys.clear();
        assert_eq!(
            data.into_index::<DefaultTFIDFEngine>().unwrap_err(),
            SearchError::EmptyCorpus
        );
    }
}
