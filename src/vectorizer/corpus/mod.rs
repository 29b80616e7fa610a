use indexmap::IndexMap;

/// Document-frequency statistics of a corpus.
/// Keeps the document count and, per term, the number of documents containing it.
/// Does not store document text or keys.
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    doc_num: u64,
    term_doc_counts: IndexMap<Box<str>, u64>,
}

impl CorpusStats {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_doc_counts: IndexMap::new(),
        }
    }

    /// Add one document given its distinct terms
    pub fn add_set<'a, I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.doc_num += 1;
        for term in terms {
            match self.term_doc_counts.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    self.term_doc_counts.insert(Box::from(term), 1);
                }
            }
        }
    }

    /// Merge another partial corpus into self
    pub fn merge(mut self, other: CorpusStats) -> Self {
        self.doc_num += other.doc_num;
        for (term, count) in other.term_doc_counts {
            *self.term_doc_counts.entry(term).or_insert(0) += count;
        }
        self
    }

    /// Number of documents
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.term_doc_counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_doc_counts.len()
    }

    /// Distinct terms in lexical ascending order
    pub fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.term_doc_counts.keys().map(|t| t.as_ref()).collect();
        terms.sort_unstable();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_documents_not_occurrences() {
        let mut corpus = CorpusStats::new();
        corpus.add_set(["rust", "fast"]);
        corpus.add_set(["rust", "safe"]);
        assert_eq!(corpus.doc_num(), 2);
        assert_eq!(corpus.doc_freq("rust"), 2);
        assert_eq!(corpus.doc_freq("safe"), 1);
        assert_eq!(corpus.doc_freq("slow"), 0);
        assert_eq!(corpus.vocab_size(), 3);
    }

    #[test]
    fn merge_is_order_independent() {
        let mut a = CorpusStats::new();
        a.add_set(["b", "a"]);
        let mut b = CorpusStats::new();
        b.add_set(["c", "a"]);
        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);
        assert_eq!(ab.doc_num(), 2);
        assert_eq!(ab.doc_freq("a"), 2);
        assert_eq!(ab.sorted_terms(), ba.sorted_terms());
        assert_eq!(ab.sorted_terms(), vec!["a", "b", "c"]);
    }
}
