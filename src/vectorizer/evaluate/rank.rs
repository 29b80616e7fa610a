use std::{cmp::Ordering, fmt::{self, Debug, Display}};

use crate::error::{Result, SearchError};

/// One scored document
#[derive(Debug, Clone, PartialEq)]
pub struct HitEntry<K> {
    /// Caller-supplied document key
    pub key: K,
    /// Position of the document in the corpus it was indexed from
    pub position: usize,
    pub score: f64,
}

/// Ranked search results, best first
#[derive(Clone, PartialEq)]
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

/// Ranking order: score descending, ties by ascending corpus position.
/// NaN scores sort after every number.
#[inline]
pub fn rank_order<K>(a: &HitEntry<K>, b: &HitEntry<K>) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or_else(|| a.score.is_nan().cmp(&b.score.is_nan()))
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort `entries` by [`rank_order`] and keep the first `k`.
/// Fails with `InvalidK` when `k == 0`.
pub fn rank<K>(mut entries: Vec<HitEntry<K>>, k: usize) -> Result<Hits<K>> {
    if k == 0 {
        return Err(SearchError::InvalidK(k));
    }
    if k < entries.len() {
        // partial selection first, only the top k get fully sorted
        entries.select_nth_unstable_by(k - 1, rank_order);
        entries.truncate(k);
    }
    entries.sort_by(rank_order);
    Ok(Hits { list: entries })
}

impl<K> Hits<K> {
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn get(&self, rank: usize) -> Option<&HitEntry<K>> {
        self.list.get(rank)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry<K>> {
        self.list.iter()
    }

    /// Keys in ranked order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|hit| &hit.key)
    }

    /// Scores in ranked order
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.list.iter().map(|hit| hit.score)
    }

    pub fn into_vec(self) -> Vec<HitEntry<K>> {
        self.list
    }
}

impl<K> IntoIterator for Hits<K> {
    type Item = HitEntry<K>;
    type IntoIter = std::vec::IntoIter<HitEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Hits<K> {
    type Item = &'a HitEntry<K>;
    type IntoIter = std::slice::Iter<'a, HitEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {:?}: {:.6} (pos: {})", hit.key, hit.score, hit.position)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<K> Display for Hits<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{}. [{:.3}] {}", rank + 1, hit.score, hit.key)?;
        }
        Ok(())
    }
}
