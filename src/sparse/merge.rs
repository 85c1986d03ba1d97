//! Key-wise merge of two sparse weight vectors.

use crate::algebra::Semiring;

use super::{Key, SparseWeightVec};

/// Merge `w1` and `w2` coordinate by coordinate with `map`.
///
/// The result default is `map(K::NO_KEY, d1, d2)` over the operand
/// defaults, so the combination applies to every unlisted coordinate as
/// well. Each key listed in either operand is then visited in ascending
/// order, the missing side substituting its default, and the mapped
/// value is kept only when it differs from the result default, which
/// keeps the result canonical. Handles disjoint, overlapping, and
/// identical key sets.
///
/// Every semiring operation on power weights is this routine with a
/// different closure:
///
/// ```rust
/// use sparsepower::algebra::{Semiring, TropicalWeight};
/// use sparsepower::sparse::{merge_with, SparseWeightVec};
///
/// let w1 = SparseWeightVec::from_pairs([(1, TropicalWeight(2.0f32)), (2, TropicalWeight(5.0))]);
/// let w2 = SparseWeightVec::from_pairs([(1, TropicalWeight(3.0f32)), (3, TropicalWeight(1.0))]);
///
/// // Vector addition: coordinate-wise tropical Plus (min)
/// let sum = merge_with(&w1, &w2, |_, a, b| a.plus(b));
/// assert_eq!(sum.value(1), &TropicalWeight(2.0));
/// assert_eq!(sum.value(3), &TropicalWeight(1.0));
/// ```
pub fn merge_with<W, K, F>(
    w1: &SparseWeightVec<W, K>,
    w2: &SparseWeightVec<W, K>,
    mut map: F,
) -> SparseWeightVec<W, K>
where
    W: Semiring,
    K: Key,
    F: FnMut(K, &W, &W) -> W,
{
    let d1 = w1.default_value();
    let d2 = w2.default_value();
    let mut out = SparseWeightVec::from_default(map(K::NO_KEY, d1, d2));

    let mut it1 = w1.iter().peekable();
    let mut it2 = w2.iter().peekable();
    loop {
        let next1 = it1.peek().copied();
        let next2 = it2.peek().copied();
        match (next1, next2) {
            (Some((k1, v1)), Some((k2, v2))) => {
                if k1 == k2 {
                    out.push(k1, map(k1, v1, v2));
                    it1.next();
                    it2.next();
                } else if k1 < k2 {
                    out.push(k1, map(k1, v1, d2));
                    it1.next();
                } else {
                    out.push(k2, map(k2, d1, v2));
                    it2.next();
                }
            }
            (Some((k1, v1)), None) => {
                out.push(k1, map(k1, v1, d2));
                it1.next();
            }
            (None, Some((k2, v2))) => {
                out.push(k2, map(k2, d1, v2));
                it2.next();
            }
            (None, None) => break,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::TropicalWeight;

    type W = TropicalWeight<f32>;
    type V = SparseWeightVec<W>;

    fn t(value: f32) -> W {
        TropicalWeight(value)
    }

    #[test]
    fn test_disjoint_keys() {
        let w1 = V::from_pairs([(1, t(2.0)), (3, t(4.0))]);
        let w2 = V::from_pairs([(2, t(1.0)), (4, t(6.0))]);

        let sum = merge_with(&w1, &w2, |_, a, b| a.plus(b));
        let keys: Vec<i32> = sum.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);
        assert_eq!(sum.value(3), &t(4.0));
    }

    #[test]
    fn test_overlapping_keys() {
        let w1 = V::from_pairs([(1, t(2.0)), (2, t(5.0))]);
        let w2 = V::from_pairs([(1, t(3.0)), (3, t(1.0))]);

        let sum = merge_with(&w1, &w2, |_, a, b| a.plus(b));
        assert_eq!(sum.value(1), &t(2.0));
        assert_eq!(sum.value(2), &t(5.0));
        assert_eq!(sum.value(3), &t(1.0));
    }

    #[test]
    fn test_identical_keys() {
        let w1 = V::from_pairs([(1, t(2.0)), (2, t(5.0))]);
        let w2 = V::from_pairs([(1, t(3.0)), (2, t(4.0))]);

        let product = merge_with(&w1, &w2, |_, a, b| a.times(b));
        assert_eq!(product.len(), 2);
        assert_eq!(product.value(1), &t(5.0));
        assert_eq!(product.value(2), &t(9.0));
    }

    #[test]
    fn test_default_equal_results_dropped() {
        let w1 = V::from_pairs([(1, t(2.0)), (2, t(5.0))]);
        let w2 = V::from_pairs([(1, t(3.0)), (3, t(1.0))]);

        // Times against a missing coordinate multiplies by Zero, which
        // annihilates; keys 2 and 3 must not be materialized.
        let product = merge_with(&w1, &w2, |_, a, b| a.times(b));
        assert_eq!(product.len(), 1);
        assert_eq!(product.value(1), &t(5.0));
    }

    #[test]
    fn test_defaults_are_merged() {
        let w1 = V::from_default(t(2.0));
        let w2 = V::from_pairs([(1, t(3.0)), (2, t(4.0))]);

        let product = merge_with(&w1, &w2, |_, a, b| a.times(b));
        // Unlisted coordinates: 2 ⊗ Zero = Zero
        assert!(product.default_value().is_zero());
        // Listed coordinates read w1's default
        assert_eq!(product.value(1), &t(5.0));
        assert_eq!(product.value(2), &t(6.0));
    }

    #[test]
    fn test_map_sees_no_key_for_default_slot() {
        let w1 = V::from_pairs([(1, t(2.0))]);
        let w2 = V::zero();

        let mut seen = Vec::new();
        merge_with(&w1, &w2, |k, a, _| {
            seen.push(k);
            a.clone()
        });
        assert_eq!(seen, vec![i32::NO_KEY, 1]);
    }
}
