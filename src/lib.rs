//! # sparsepower
//!
//! Sparse Cartesian-power semiring weights with pluggable base algebras.
//!
//! ## Features
//!
//! - **Algebra-agnostic**: any base weight satisfying the [`Semiring`]
//!   contract lifts to its Cartesian power; tropical `(min, +)` and log
//!   semirings ship in [`algebra`]
//! - **Sparse**: only coordinates that differ from a per-vector default
//!   are stored, and every operation preserves that canonical form
//! - **One merge primitive**: addition, multiplication, division, and
//!   approximate equality are all a key-wise merge with a different
//!   combining closure
//! - **Drop-in weight**: [`SparsePowerWeight`] satisfies the same
//!   [`Semiring`] contract as its components, so generic algorithms take
//!   vectors of weights unmodified
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsepower::{Semiring, SparsePowerWeight, TropicalWeight};
//!
//! type W = SparsePowerWeight<TropicalWeight<f32>>;
//!
//! let w1 = W::from_pairs([(1, TropicalWeight(2.0)), (2, TropicalWeight(5.0))]);
//! let w2 = W::from_pairs([(1, TropicalWeight(3.0)), (3, TropicalWeight(1.0))]);
//!
//! // Coordinate-wise min: {1: 2, 2: 5, 3: 1}
//! let sum = w1.plus(&w2);
//! assert_eq!(sum.len(), 3);
//!
//! // Coordinate-wise +: keys 2 and 3 annihilate against implicit Zero
//! let product = w1.times(&w2);
//! assert_eq!(product.len(), 1);
//!
//! // Plus-fold of the product
//! assert_eq!(w1.dot(&w2), TropicalWeight(5.0));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                SparsePowerWeight<W, K>                      │
//! │   Semiring impl + scale_left/scale_right/divide_scalar/dot  │
//! └─────────────────────────────────────────────────────────────┘
//!                               │ closures select the operation
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              merge_with(w1, w2, map)                        │
//! │   ascending key-union walk, defaults fill missing sides,    │
//! │   default-equal results stay unmaterialized                 │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │            SparseWeightVec<W, K> over Semiring W            │
//! │   TropicalWeight<T>: (min, +)    LogWeight<T>: (logsum, +)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod algebra;
pub mod power;
pub mod sparse;

// Re-exports
pub use algebra::{
    DivideType, FloatScalar, GenerateWeight, LogWeight, Semiring, TropicalWeight, DELTA,
};
pub use power::{PowerWeightGenerate, SparsePowerWeight};
pub use sparse::{merge_with, Key, SparseWeightVec};
