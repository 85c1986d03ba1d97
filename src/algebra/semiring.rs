//! Core weight contract shared by base weights and power weights.

use std::fmt::Debug;

/// Default tolerance for approximate comparison and quantization.
pub const DELTA: f32 = 1.0 / 1024.0;

/// Property flag: Times left-distributes over Plus.
pub const LEFT_SEMIRING: u64 = 0x01;
/// Property flag: Times right-distributes over Plus.
pub const RIGHT_SEMIRING: u64 = 0x02;
/// Property flag: Times is commutative.
pub const COMMUTATIVE: u64 = 0x04;
/// Property flag: Plus is idempotent (`a ⊕ a = a`).
pub const IDEMPOTENT: u64 = 0x08;
/// Property flag: Plus selects one of its operands (`a ⊕ b ∈ {a, b}`).
pub const PATH: u64 = 0x10;

/// Division convention for non-commutative semirings.
///
/// - [`DivideType::Left`]: find `z` such that `rhs ⊗ z = self`
/// - [`DivideType::Right`]: find `z` such that `z ⊗ rhs = self`
/// - [`DivideType::Any`]: either convention; only meaningful when the
///   semiring is commutative and both agree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivideType {
    Left,
    Right,
    #[default]
    Any,
}

/// A semiring weight: two binary operations (⊕, ⊗) with identities,
/// plus the auxiliary operations generic weighted-graph algorithms
/// rely on.
///
/// # Semiring Laws
///
/// For a semiring (S, ⊕, ⊗, 0̄, 1̄):
/// - (S, ⊕, 0̄) is a commutative monoid
/// - (S, ⊗, 1̄) is a monoid
/// - ⊗ distributes over ⊕ (possibly one-sided; see [`Semiring::properties`])
/// - 0̄ annihilates: `a ⊗ 0̄ = 0̄ ⊗ a = 0̄`
///
/// # Examples
///
/// | Weight | ⊕ | ⊗ | 0̄ | 1̄ |
/// |----------|---|---|---|---|
/// | Tropical | min | + | +∞ | 0 |
/// | Log      | −log(e⁻ˣ+e⁻ʸ) | + | +∞ | 0 |
/// | Power `W^n` | coordinate-wise ⊕ | coordinate-wise ⊗ | 0̄ vector | 1̄ vector |
///
/// Beyond the two identities every implementation carries an explicit
/// invalid sentinel, [`Semiring::no_weight`], which is produced by
/// undefined operations (for example division by [`Semiring::zero`]) and
/// is recognizable through [`Semiring::is_member`].
pub trait Semiring: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Weight type of the reversed algebra. Reversing twice lands back on
    /// `Self`; for commutative weights the reverse type is `Self` itself.
    type Reverse: Semiring<Reverse = Self>;

    /// Additive identity (zero element for ⊕).
    fn zero() -> Self;

    /// Multiplicative identity (one element for ⊗).
    fn one() -> Self;

    /// The invalid-weight sentinel. Not a member of the semiring.
    fn no_weight() -> Self;

    /// Addition operation (⊕).
    fn plus(&self, rhs: &Self) -> Self;

    /// Multiplication operation (⊗).
    fn times(&self, rhs: &Self) -> Self;

    /// Division: the inverse of ⊗ under the convention selected by
    /// `divide_type`. Undefined quotients yield [`Semiring::no_weight`].
    fn divide(&self, rhs: &Self, divide_type: DivideType) -> Self;

    /// Approximate equality within `delta`.
    fn approx_equal(&self, rhs: &Self, delta: f32) -> bool;

    /// Round to a canonical representative within `delta`, so that
    /// nearly-equal weights hash and compare identically.
    fn quantize(&self, delta: f32) -> Self;

    /// The corresponding weight of the reversed algebra.
    fn reverse(&self) -> Self::Reverse;

    /// False exactly for invalid values such as [`Semiring::no_weight`].
    fn is_member(&self) -> bool;

    /// Check if this is the zero element.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Algebraic property flags ([`LEFT_SEMIRING`], [`RIGHT_SEMIRING`],
    /// [`COMMUTATIVE`], [`IDEMPOTENT`], [`PATH`]).
    fn properties() -> u64;

    /// Name of the weight type, used to tag containers of this weight.
    fn weight_type() -> String;
}
