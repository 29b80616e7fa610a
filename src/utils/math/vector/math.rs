use std::cmp::Ordering;

use num::Float;

use super::SparseVec;

impl<N> SparseVec<N>
where
    N: Float,
{
    /// Euclidean norm
    #[inline]
    pub fn norm_l2(&self) -> N {
        self.values()
            .iter()
            .fold(N::zero(), |acc, v| acc + *v * *v)
            .sqrt()
    }

    /// Sum of absolute values
    #[inline]
    pub fn norm_l1(&self) -> N {
        self.values().iter().fold(N::zero(), |acc, v| acc + v.abs())
    }

    /// Divide every entry by `norm`.
    /// A zero (or non-finite) norm leaves the vector unchanged.
    #[inline]
    pub fn normalize_by(&mut self, norm: N) {
        if norm.is_zero() || !norm.is_finite() {
            return;
        }
        let inv = N::one() / norm;
        self.scale(inv);
    }

    /// Multiply every entry by `factor`
    #[inline]
    pub fn scale(&mut self, factor: N) {
        self.map_values(|v| v * factor);
    }

    /// Dot product driven by the non-zero entries of `self`,
    /// each looked up in `other` by binary search.
    /// O(nnz(self) * log nnz(other)), preferred when `self` is the sparser side.
    #[inline]
    pub fn dot_lookup(&self, other: &Self) -> N {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );
        if self.is_zero() || other.is_zero() {
            return N::zero();
        }
        self.raw_iter()
            .fold(N::zero(), |acc, (idx, val)| acc + val * other.get(idx))
    }

    /// Dot product by merging both index lists.
    /// O(nnz(self) + nnz(other))
    #[inline]
    pub fn dot_merge(&self, other: &Self) -> N {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );
        let (a_inds, a_vals) = (self.indices(), self.values());
        let (b_inds, b_vals) = (other.indices(), other.values());
        let mut result = N::zero();
        let mut i = 0;
        let mut j = 0;
        while i < a_inds.len() && j < b_inds.len() {
            match a_inds[i].cmp(&b_inds[j]) {
                Ordering::Equal => {
                    result = result + a_vals[i] * b_vals[j];
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }
}
