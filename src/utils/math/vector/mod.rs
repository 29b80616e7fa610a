pub mod math;

use std::fmt::Debug;

use num::Float;
use serde::{Deserialize, Serialize};

/// SparseVec stores only the non-zero entries of a fixed-dimension vector.
/// Entries are kept as two parallel arrays (indices and values)
/// with indices strictly ascending.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVec<N>
where
    N: Float,
{
    inds: Vec<u32>,
    vals: Vec<N>,
    len: usize,
}

impl<N> SparseVec<N>
where
    N: Float,
{
    /// All-zero vector of dimension `len`
    #[inline]
    pub fn zeros(len: usize) -> Self {
        Self {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    /// Build from unordered `(index, value)` pairs.
    /// Zero values are dropped; duplicated indices are summed.
    pub fn from_pairs(len: usize, inds: Vec<u32>, vals: Vec<N>) -> Self {
        debug_assert_eq!(inds.len(), vals.len());
        let mut pairs: Vec<(u32, N)> = inds.into_iter().zip(vals).collect();
        // stable, so duplicates are summed in input order
        pairs.sort_by_key(|&(idx, _)| idx);

        let mut out_inds: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut out_vals: Vec<N> = Vec::with_capacity(pairs.len());
        for (idx, val) in pairs {
            debug_assert!((idx as usize) < len, "index {idx} out of dimension {len}");
            match out_inds.last() {
                Some(&last) if last == idx => {
                    if let Some(acc) = out_vals.last_mut() {
                        *acc = *acc + val;
                    }
                }
                _ => {
                    out_inds.push(idx);
                    out_vals.push(val);
                }
            }
        }
        let mut vec = Self {
            inds: out_inds,
            vals: out_vals,
            len,
        };
        vec.drop_zeros();
        vec
    }

    /// Build from a dense slice
    pub fn from_dense(dense: &[N]) -> Self {
        let (inds, vals) = dense
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, v)| (i as u32, *v))
            .unzip();
        Self {
            inds,
            vals,
            len: dense.len(),
        }
    }

    fn drop_zeros(&mut self) {
        if self.vals.iter().all(|v| !v.is_zero()) {
            return;
        }
        let (inds, vals) = self
            .inds
            .iter()
            .zip(self.vals.iter())
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, v)| (*i, *v))
            .unzip();
        self.inds = inds;
        self.vals = vals;
    }

    /// Dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of stored (non-zero) entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// true when no entry is non-zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inds.is_empty()
    }

    /// Value at `index`, zero when not stored.
    /// O(log nnz)
    #[inline]
    pub fn get(&self, index: usize) -> N {
        if index >= self.len {
            return N::zero();
        }
        match self.inds.binary_search(&(index as u32)) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// Iterate stored entries as `(index, value)` in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds
            .iter()
            .zip(self.vals.iter())
            .map(|(i, v)| (*i as usize, *v))
    }

    pub fn indices(&self) -> &[u32] {
        &self.inds
    }

    pub fn values(&self) -> &[N] {
        &self.vals
    }

    /// Dense copy, only sensible for small dimensions
    pub fn to_dense(&self) -> Vec<N> {
        let mut dense = vec![N::zero(); self.len];
        for (i, v) in self.raw_iter() {
            // a deserialized vector may carry indices past its dimension
            if let Some(slot) = dense.get_mut(i) {
                *slot = v;
            }
        }
        dense
    }

    /// Check the stored layout: ascending unique indices below `len`, no zeros
    pub(crate) fn is_well_formed(&self) -> bool {
        self.inds.len() == self.vals.len()
            && self.inds.windows(2).all(|w| w[0] < w[1])
            && self.inds.last().map_or(true, |&i| (i as usize) < self.len)
            && self.vals.iter().all(|v| !v.is_zero())
    }

    #[inline]
    fn map_values<F>(&mut self, f: F)
    where
        F: Fn(N) -> N,
    {
        self.vals.iter_mut().for_each(|v| *v = f(*v));
        self.drop_zeros();
    }

    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> Debug for SparseVec<N>
where
    N: Float + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "SparseVec(len: {}, nnz: {}) [", self.len, self.nnz())?;
            for (i, v) in self.raw_iter() {
                writeln!(f, "    {}: {:?}", i, v)?;
            }
            write!(f, "]")
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}
