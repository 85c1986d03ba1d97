//! Randomized power weights for property tests.

use std::marker::PhantomData;

use rand::Rng;

use crate::algebra::{GenerateWeight, Semiring};
use crate::sparse::{Key, SparseWeightVec};

use super::SparsePowerWeight;

/// Default number of populated coordinates per generated weight.
const DEFAULT_RANK: usize = 3;

/// Generates power weights of a fixed rank.
///
/// Coordinates are keyed sequentially `1..=rank` and each value is drawn
/// independently from the base generator. Insertion goes through the
/// container's default-checked push, so a base Zero draw (possible when
/// `allow_zero` is set) leaves that coordinate unpopulated rather than
/// materializing a Zero entry.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use sparsepower::algebra::TropicalWeight;
/// use sparsepower::power::PowerWeightGenerate;
///
/// let generate = PowerWeightGenerate::<TropicalWeight<f32>>::new(false, 3);
/// let mut rng = StdRng::seed_from_u64(1);
/// let weight = generate.generate(&mut rng);
/// assert_eq!(weight.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PowerWeightGenerate<W: Semiring, K: Key = i32> {
    allow_zero: bool,
    rank: usize,
    _weight: PhantomData<fn() -> (W, K)>,
}

impl<W: Semiring, K: Key> Default for PowerWeightGenerate<W, K> {
    fn default() -> Self {
        Self::new(true, DEFAULT_RANK)
    }
}

impl<W: Semiring, K: Key> PowerWeightGenerate<W, K> {
    pub fn new(allow_zero: bool, rank: usize) -> Self {
        Self {
            allow_zero,
            rank,
            _weight: PhantomData,
        }
    }
}

impl<W: GenerateWeight, K: Key> PowerWeightGenerate<W, K> {
    /// Draw one random power weight.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SparsePowerWeight<W, K> {
        let mut components = SparseWeightVec::zero();
        for i in 1..=self.rank {
            components.push(K::from_index(i), W::generate(rng, self.allow_zero));
        }
        SparsePowerWeight::from_components(components)
    }
}

impl<W: GenerateWeight, K: Key> GenerateWeight for SparsePowerWeight<W, K> {
    fn generate<R: Rng + ?Sized>(rng: &mut R, allow_zero: bool) -> Self {
        PowerWeightGenerate::new(allow_zero, DEFAULT_RANK).generate(rng)
    }
}
