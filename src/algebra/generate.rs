//! Randomized weight generation for property tests.

use rand::Rng;

use super::float::{FloatScalar, LogWeight, TropicalWeight};
use super::semiring::Semiring;

/// Number of distinct finite values the base generators draw from. Small
/// on purpose: collisions exercise idempotency and cancellation paths.
const NUM_RANDOM_WEIGHTS: u32 = 5;

/// A weight type with a randomized instance generator.
pub trait GenerateWeight: Semiring {
    /// Draw a random weight. With `allow_zero`, one extra draw value maps
    /// to [`Semiring::zero`].
    fn generate<R: Rng + ?Sized>(rng: &mut R, allow_zero: bool) -> Self;
}

#[inline]
fn random_draw<R: Rng + ?Sized>(rng: &mut R, allow_zero: bool) -> Option<u32> {
    let n = rng.gen_range(0..NUM_RANDOM_WEIGHTS + allow_zero as u32);
    (n < NUM_RANDOM_WEIGHTS).then_some(n)
}

impl<T: FloatScalar> GenerateWeight for TropicalWeight<T> {
    fn generate<R: Rng + ?Sized>(rng: &mut R, allow_zero: bool) -> Self {
        match random_draw(rng, allow_zero) {
            Some(n) => TropicalWeight(T::from_f32(n as f32)),
            None => Self::zero(),
        }
    }
}

impl<T: FloatScalar> GenerateWeight for LogWeight<T> {
    fn generate<R: Rng + ?Sized>(rng: &mut R, allow_zero: bool) -> Self {
        match random_draw(rng, allow_zero) {
            Some(n) => LogWeight(T::from_f32(n as f32)),
            None => Self::zero(),
        }
    }
}
