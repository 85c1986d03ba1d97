//! Sparse keyed weight container.
//!
//! [`SparseWeightVec`] maps coordinate keys to weights. Coordinates that
//! are not explicitly listed all read a single per-vector default value,
//! and no stored entry is ever equal to that default. The representation
//! therefore stays canonical: two vectors are equal exactly when their
//! defaults and normalized entry lists are.

mod merge;

use std::fmt::Debug;
use std::hash::Hash;

use crate::algebra::Semiring;

pub use merge::merge_with;

/// Coordinate key contract.
///
/// Keys are small totally ordered identifiers. Each key type reserves one
/// sentinel, [`Key::NO_KEY`], for internal use; passing it as a real
/// coordinate key violates the caller contract and is not checked at
/// runtime.
pub trait Key: Copy + Ord + Eq + Hash + Debug + Send + Sync + 'static {
    /// Reserved sentinel, never a valid coordinate key.
    const NO_KEY: Self;

    /// The `i`-th key of the sequential keying scheme used by generators.
    fn from_index(i: usize) -> Self;
}

impl Key for i32 {
    const NO_KEY: Self = -1;

    #[inline]
    fn from_index(i: usize) -> Self {
        i as i32
    }
}

impl Key for i64 {
    const NO_KEY: Self = -1;

    #[inline]
    fn from_index(i: usize) -> Self {
        i as i64
    }
}

impl Key for u64 {
    const NO_KEY: Self = u64::MAX;

    #[inline]
    fn from_index(i: usize) -> Self {
        i as u64
    }
}

impl Key for usize {
    const NO_KEY: Self = usize::MAX;

    #[inline]
    fn from_index(i: usize) -> Self {
        i
    }
}

/// Sparse vector of weights with a default value for unlisted coordinates.
///
/// The well-known vectors are all empty-entry instances distinguished by
/// their default: [`zero`](SparseWeightVec::zero) defaults to the base
/// Zero, [`one`](SparseWeightVec::one) to the base One,
/// [`no_weight`](SparseWeightVec::no_weight) to the invalid sentinel, and
/// [`from_default`](SparseWeightVec::from_default) lifts an arbitrary
/// scalar into the vector that reads that scalar at every coordinate.
///
/// Values are immutable once a vector is published; the only mutating
/// primitive is [`push`](SparseWeightVec::push), used while a fresh result
/// is being assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseWeightVec<W: Semiring, K: Key = i32> {
    /// Value of every coordinate not listed in `entries`.
    default: W,

    /// Explicit coordinates, ascending by key; no value equals `default`.
    entries: Vec<(K, W)>,
}

impl<W: Semiring, K: Key> SparseWeightVec<W, K> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// The zero vector: every coordinate reads the base Zero.
    pub fn zero() -> Self {
        Self::from_default(W::zero())
    }

    /// The one vector: every coordinate reads the base One.
    pub fn one() -> Self {
        Self::from_default(W::one())
    }

    /// The invalid vector: every coordinate reads the invalid sentinel.
    pub fn no_weight() -> Self {
        Self::from_default(W::no_weight())
    }

    /// Scalar lift: the vector reading `default` at every coordinate.
    pub fn from_default(default: W) -> Self {
        Self {
            default,
            entries: Vec::new(),
        }
    }

    /// Build from key/value pairs over a Zero default. Pairs carrying the
    /// base Zero are not materialized.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, W)>,
    {
        let mut vector = Self::zero();
        for (key, value) in pairs {
            vector.push(key, value);
        }
        vector
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The value read by every unlisted coordinate.
    #[inline]
    pub fn default_value(&self) -> &W {
        &self.default
    }

    /// Number of explicitly listed coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no coordinate is explicitly listed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `key`, falling back to the default for unlisted keys.
    pub fn value(&self, key: K) -> &W {
        match self.entries.binary_search_by(|(k, _)| k.cmp(&key)) {
            Ok(pos) => &self.entries[pos].1,
            Err(_) => &self.default,
        }
    }

    /// Explicitly listed coordinates in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &W)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// True when the default and every listed value are members.
    pub fn is_member(&self) -> bool {
        self.default.is_member() && self.entries.iter().all(|(_, value)| value.is_member())
    }

    // ========================================================================
    // Construction-time mutation
    // ========================================================================

    /// Append-or-overwrite insertion.
    ///
    /// A value equal to the default is never materialized; writing one
    /// over an existing entry removes that entry. Appending with a key
    /// greater than the current maximum is O(1); other keys fall back to
    /// a binary-searched insert or overwrite.
    pub fn push(&mut self, key: K, value: W) {
        if value == self.default {
            if let Ok(pos) = self.entries.binary_search_by(|(k, _)| k.cmp(&key)) {
                self.entries.remove(pos);
            }
            return;
        }
        if self.entries.last().map_or(true, |(last, _)| *last < key) {
            self.entries.push((key, value));
            return;
        }
        match self.entries.binary_search_by(|(k, _)| k.cmp(&key)) {
            Ok(pos) => self.entries[pos].1 = value,
            Err(pos) => self.entries.insert(pos, (key, value)),
        }
    }

    // ========================================================================
    // Coordinate-wise transforms
    // ========================================================================

    /// Quantize the default and every listed value. Entries that collapse
    /// onto the quantized default disappear.
    pub fn quantize(&self, delta: f32) -> Self {
        let mut out = Self::from_default(self.default.quantize(delta));
        for (key, value) in self.iter() {
            out.push(key, value.quantize(delta));
        }
        out
    }

    /// Map every coordinate into the reverse algebra.
    pub fn reverse(&self) -> SparseWeightVec<W::Reverse, K> {
        let mut out = SparseWeightVec::from_default(self.default.reverse());
        for (key, value) in self.iter() {
            out.push(key, value.reverse());
        }
        out
    }
}

impl<W: Semiring, K: Key> FromIterator<(K, W)> for SparseWeightVec<W, K> {
    fn from_iter<I: IntoIterator<Item = (K, W)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Semiring, TropicalWeight, DELTA};

    type W = TropicalWeight<f32>;
    type V = SparseWeightVec<W>;

    #[test]
    fn test_round_trip_ascending() {
        let v = V::from_pairs([(3, TropicalWeight(1.0)), (1, TropicalWeight(2.0))]);

        let pairs: Vec<(i32, W)> = v.iter().map(|(k, w)| (k, *w)).collect();
        assert_eq!(pairs, vec![(1, TropicalWeight(2.0)), (3, TropicalWeight(1.0))]);

        // Rebuilding from the iterated pairs reproduces an equal vector
        assert_eq!(V::from_pairs(pairs), v);
    }

    #[test]
    fn test_zero_values_not_materialized() {
        let v = V::from_pairs([
            (1, TropicalWeight(2.0)),
            (2, W::zero()),
            (3, TropicalWeight(4.0)),
        ]);

        assert_eq!(v.len(), 2);
        assert!(v.value(2).is_zero());
    }

    #[test]
    fn test_push_overwrite() {
        let mut v = V::zero();
        v.push(1, TropicalWeight(2.0));
        v.push(5, TropicalWeight(3.0));
        v.push(1, TropicalWeight(7.0));
        assert_eq!(v.value(1), &TropicalWeight(7.0));
        assert_eq!(v.len(), 2);

        // Overwriting with the default clears the entry
        v.push(5, W::zero());
        assert_eq!(v.len(), 1);
        assert!(v.value(5).is_zero());
    }

    #[test]
    fn test_identity_vectors_distinct() {
        assert_ne!(V::zero(), V::one());
        assert!(V::zero().is_empty() && V::one().is_empty());
        assert!(V::zero().is_member());
        assert!(!V::no_weight().is_member());
    }

    #[test]
    fn test_value_falls_back_to_default() {
        let v = V::from_default(TropicalWeight(9.0));
        assert_eq!(v.value(42), &TropicalWeight(9.0));
        assert!(v.is_empty());
    }

    #[test]
    fn test_quantize_collapses_entries() {
        let mut v = V::from_default(TropicalWeight(1.0));
        v.push(1, TropicalWeight(1.0 + DELTA / 4.0));
        assert_eq!(v.len(), 1);

        // Within delta of the default, the entry collapses away
        let q = v.quantize(DELTA);
        assert!(q.is_empty());
        assert_eq!(q.default_value(), &TropicalWeight(1.0));
    }

    #[test]
    fn test_reverse_round_trip() {
        let v = V::from_pairs([(1, TropicalWeight(2.0)), (4, TropicalWeight(0.5))]);
        assert_eq!(v.reverse().reverse(), v);
    }
}
