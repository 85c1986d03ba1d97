//! Sparse Cartesian-power weight `W^n`.
//!
//! [`SparsePowerWeight`] combines coordinate-wise copies of a base weight
//! into a single weight that again satisfies the [`Semiring`] contract,
//! so algorithms written against "any semiring weight" operate on vectors
//! of weights unmodified. It forms:
//!
//! - a left semimodule when the base is a left semiring,
//! - a right semimodule when the base is a right semiring,
//! - a bisemimodule when the base is a semiring,
//!
//! with the scalar products provided by [`scale_left`] and
//! [`scale_right`].
//!
//! [`scale_left`]: SparsePowerWeight::scale_left
//! [`scale_right`]: SparsePowerWeight::scale_right

mod generate;

use std::mem::size_of;

use crate::algebra::{
    DivideType, Semiring, COMMUTATIVE, IDEMPOTENT, LEFT_SEMIRING, RIGHT_SEMIRING,
};
use crate::sparse::{merge_with, Key, SparseWeightVec};

pub use generate::PowerWeightGenerate;

/// Sparse Cartesian power of a base semiring.
///
/// A thin wrapper around [`SparseWeightVec`]: the wrapper owns the
/// component vector and forwards construction, lookup, and iteration,
/// while its [`Semiring`] impl supplies the coordinate-wise operations.
/// All operations are pure; a weight is never mutated after it is
/// published, so instances can be shared freely across threads.
///
/// # Example
///
/// ```rust
/// use sparsepower::algebra::{Semiring, TropicalWeight};
/// use sparsepower::power::SparsePowerWeight;
///
/// type W = SparsePowerWeight<TropicalWeight<f32>>;
///
/// let w1 = W::from_pairs([(1, TropicalWeight(2.0)), (2, TropicalWeight(5.0))]);
/// let w2 = W::from_pairs([(1, TropicalWeight(3.0)), (3, TropicalWeight(1.0))]);
///
/// // Coordinate-wise tropical Plus (min)
/// let sum = w1.plus(&w2);
/// assert_eq!(sum.value(2), &TropicalWeight(5.0));
///
/// // Dot product folds the coordinate-wise product: min over 2+3
/// assert_eq!(w1.dot(&w2), TropicalWeight(5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparsePowerWeight<W: Semiring, K: Key = i32> {
    components: SparseWeightVec<W, K>,
}

impl<W: Semiring, K: Key> SparsePowerWeight<W, K> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Wrap an existing component vector.
    pub fn from_components(components: SparseWeightVec<W, K>) -> Self {
        Self { components }
    }

    /// Build from key/value pairs over a Zero default; pairs carrying the
    /// base Zero are not materialized.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, W)>,
    {
        Self::from_components(SparseWeightVec::from_pairs(pairs))
    }

    /// Lift a scalar into the vector reading `value` at every coordinate.
    pub fn scalar(value: W) -> Self {
        Self::from_components(SparseWeightVec::from_default(value))
    }

    // ========================================================================
    // Component access
    // ========================================================================

    /// The underlying component vector.
    #[inline]
    pub fn components(&self) -> &SparseWeightVec<W, K> {
        &self.components
    }

    /// Value at `key`, falling back to the component default.
    #[inline]
    pub fn value(&self, key: K) -> &W {
        self.components.value(key)
    }

    /// Explicitly populated coordinates in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &W)> + '_ {
        self.components.iter()
    }

    /// Number of explicitly populated coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when no coordinate is explicitly populated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Append-or-overwrite a coordinate during construction.
    pub fn push(&mut self, key: K, value: W) {
        self.components.push(key, value);
    }

    // ========================================================================
    // Semimodule surface
    // ========================================================================

    /// Left scalar product `k ⊗ self`, applied at every coordinate.
    pub fn scale_left(&self, k: &W) -> Self {
        Self::scalar(k.clone()).times(self)
    }

    /// Right scalar product `self ⊗ k`, applied at every coordinate.
    pub fn scale_right(&self, k: &W) -> Self {
        self.times(&Self::scalar(k.clone()))
    }

    /// Divide every coordinate by the scalar `k`.
    pub fn divide_scalar(&self, k: &W, divide_type: DivideType) -> Self {
        self.divide(&Self::scalar(k.clone()), divide_type)
    }

    /// Dot product: the base-Plus fold over the explicit support of the
    /// coordinate-wise product. An all-Zero product folds to base Zero.
    pub fn dot(&self, other: &Self) -> W {
        let product = self.times(other);
        let mut acc = W::zero();
        for (_, value) in product.iter() {
            acc = acc.plus(value);
        }
        acc
    }
}

impl<W: Semiring, K: Key> FromIterator<(K, W)> for SparsePowerWeight<W, K> {
    fn from_iter<I: IntoIterator<Item = (K, W)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<W: Semiring, K: Key> Semiring for SparsePowerWeight<W, K> {
    type Reverse = SparsePowerWeight<W::Reverse, K>;

    fn zero() -> Self {
        Self::from_components(SparseWeightVec::zero())
    }

    fn one() -> Self {
        Self::from_components(SparseWeightVec::one())
    }

    fn no_weight() -> Self {
        Self::from_components(SparseWeightVec::no_weight())
    }

    /// Coordinate-wise base Plus; identity is the Zero vector.
    fn plus(&self, rhs: &Self) -> Self {
        Self::from_components(merge_with(&self.components, &rhs.components, |_, a, b| {
            a.plus(b)
        }))
    }

    /// Coordinate-wise (Hadamard) base Times; identity is the One vector.
    /// A key absent from either operand multiplies by Zero and is
    /// annihilated, so it drops from the result.
    fn times(&self, rhs: &Self) -> Self {
        Self::from_components(merge_with(&self.components, &rhs.components, |_, a, b| {
            a.times(b)
        }))
    }

    /// Coordinate-wise base Divide under `divide_type`, the selector
    /// captured once for the whole operation.
    ///
    /// A coordinate implicitly Zero on one side passes through to the base
    /// divide convention unchanged; for the float base weights a division
    /// by Zero yields the invalid sentinel, which is retained in the
    /// result and makes it a non-member.
    fn divide(&self, rhs: &Self, divide_type: DivideType) -> Self {
        Self::from_components(merge_with(&self.components, &rhs.components, move |_, a, b| {
            a.divide(b, divide_type)
        }))
    }

    /// Holds iff every coordinate (and the default) is base-approx-equal
    /// within `delta`: the merge maps matches to base One and mismatches
    /// to base Zero, so the result equals the One vector exactly when no
    /// mismatch was recorded.
    fn approx_equal(&self, rhs: &Self, delta: f32) -> bool {
        let per_coordinate = merge_with(&self.components, &rhs.components, |_, a, b| {
            if a.approx_equal(b, delta) {
                W::one()
            } else {
                W::zero()
            }
        });
        per_coordinate == SparseWeightVec::one()
    }

    fn quantize(&self, delta: f32) -> Self {
        Self::from_components(self.components.quantize(delta))
    }

    fn reverse(&self) -> Self::Reverse {
        SparsePowerWeight::from_components(self.components.reverse())
    }

    fn is_member(&self) -> bool {
        self.components.is_member()
    }

    fn properties() -> u64 {
        W::properties() & (LEFT_SEMIRING | RIGHT_SEMIRING | COMMUTATIVE | IDEMPOTENT)
    }

    fn weight_type() -> String {
        let mut name = format!("{}_^n", W::weight_type());
        if size_of::<K>() != 4 {
            name.push_str(&format!("_{}", 8 * size_of::<K>()));
        }
        name
    }
}
