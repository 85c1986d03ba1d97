//! Algebraic structures for sparse power weights.
//!
//! This module defines the [`Semiring`] weight contract and base weights
//! implementing it:
//! - [`TropicalWeight<T>`]: tropical min-plus `(min, +)`
//! - [`LogWeight<T>`]: log semiring `(−log(e⁻ˣ+e⁻ʸ), +)`

mod float;
mod generate;
mod semiring;

pub use float::{FloatScalar, LogWeight, TropicalWeight};
pub use generate::GenerateWeight;
pub use semiring::{
    DivideType, Semiring, COMMUTATIVE, DELTA, IDEMPOTENT, LEFT_SEMIRING, PATH, RIGHT_SEMIRING,
};
