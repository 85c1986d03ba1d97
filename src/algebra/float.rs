//! Floating-point base weights.
//!
//! - [`TropicalWeight<T>`]: `(min, +)` semiring for shortest path, Viterbi
//! - [`LogWeight<T>`]: `(−log(e⁻ˣ+e⁻ʸ), +)` semiring for probability sums
//!   in negative-log space

use std::fmt;

use num_traits::Float;

use super::semiring::{
    DivideType, Semiring, COMMUTATIVE, IDEMPOTENT, LEFT_SEMIRING, PATH, RIGHT_SEMIRING,
};

/// Marker trait for the scalar types float weights wrap.
pub trait FloatScalar:
    Float + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Suffix appended to the weight type name for this width.
    const TYPE_SUFFIX: &'static str;

    /// Widen a tolerance into this scalar type.
    fn from_f32(value: f32) -> Self;
}

impl FloatScalar for f32 {
    const TYPE_SUFFIX: &'static str = "";

    #[inline]
    fn from_f32(value: f32) -> Self {
        value
    }
}

impl FloatScalar for f64 {
    const TYPE_SUFFIX: &'static str = "64";

    #[inline]
    fn from_f32(value: f32) -> Self {
        value as f64
    }
}

// Conventions shared by both float weights: NaN is the invalid sentinel,
// −∞ is excluded from membership, Zero is +∞ and One is 0.

#[inline]
fn float_member<T: FloatScalar>(value: T) -> bool {
    !value.is_nan() && value != T::neg_infinity()
}

#[inline]
fn float_approx_equal<T: FloatScalar>(v1: T, v2: T, delta: f32) -> bool {
    let delta = T::from_f32(delta);
    v1 <= v2 + delta && v2 <= v1 + delta
}

#[inline]
fn float_quantize<T: FloatScalar>(value: T, delta: f32) -> T {
    if value == T::infinity() || value == T::neg_infinity() || value.is_nan() {
        return value;
    }
    let delta = T::from_f32(delta);
    (value / delta + T::from_f32(0.5)).floor() * delta
}

/// Times is real addition for both float weights, so Divide is
/// subtraction. Dividing by Zero (+∞) is undefined; dividing Zero by a
/// member weight stays Zero.
#[inline]
fn float_divide<T: FloatScalar>(v1: T, v2: T) -> T {
    if !float_member(v1) || !float_member(v2) || v2 == T::infinity() {
        T::nan()
    } else if v1 == T::infinity() {
        v1
    } else {
        v1 - v2
    }
}

// ============================================================================
// TropicalWeight: (min, +) semiring
// ============================================================================

/// Tropical min-plus semiring weight `(min, +)`.
///
/// Operations:
/// - Plus (⊕): `min(a, b)`
/// - Times (⊗): `a + b`
/// - Zero: `+∞`
/// - One: `0`
///
/// Used for: shortest path, best-path (Viterbi) scoring in negative-log
/// space.
///
/// # Example
///
/// ```rust
/// use sparsepower::algebra::{Semiring, TropicalWeight};
///
/// let a = TropicalWeight(2.0f32);
/// let b = TropicalWeight(3.0f32);
///
/// assert_eq!(a.plus(&b).value(), 2.0);  // min(2, 3) = 2
/// assert_eq!(a.times(&b).value(), 5.0); // 2 + 3 = 5
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct TropicalWeight<T: FloatScalar>(pub T);

impl<T: FloatScalar> TropicalWeight<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        TropicalWeight(value)
    }

    #[inline]
    pub fn value(&self) -> T {
        self.0
    }
}

impl<T: FloatScalar> fmt::Display for TropicalWeight<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: FloatScalar> Semiring for TropicalWeight<T> {
    type Reverse = Self;

    #[inline]
    fn zero() -> Self {
        TropicalWeight(T::infinity())
    }

    #[inline]
    fn one() -> Self {
        TropicalWeight(T::zero())
    }

    #[inline]
    fn no_weight() -> Self {
        TropicalWeight(T::nan())
    }

    #[inline]
    fn plus(&self, rhs: &Self) -> Self {
        if !self.is_member() || !rhs.is_member() {
            Self::no_weight()
        } else if self.0 < rhs.0 {
            *self
        } else {
            *rhs
        }
    }

    #[inline]
    fn times(&self, rhs: &Self) -> Self {
        if !self.is_member() || !rhs.is_member() {
            Self::no_weight()
        } else if self.0 == T::infinity() {
            *self
        } else if rhs.0 == T::infinity() {
            *rhs
        } else {
            TropicalWeight(self.0 + rhs.0)
        }
    }

    #[inline]
    fn divide(&self, rhs: &Self, _divide_type: DivideType) -> Self {
        TropicalWeight(float_divide(self.0, rhs.0))
    }

    #[inline]
    fn approx_equal(&self, rhs: &Self, delta: f32) -> bool {
        float_approx_equal(self.0, rhs.0, delta)
    }

    #[inline]
    fn quantize(&self, delta: f32) -> Self {
        TropicalWeight(float_quantize(self.0, delta))
    }

    #[inline]
    fn reverse(&self) -> Self {
        *self
    }

    #[inline]
    fn is_member(&self) -> bool {
        float_member(self.0)
    }

    fn properties() -> u64 {
        LEFT_SEMIRING | RIGHT_SEMIRING | COMMUTATIVE | IDEMPOTENT | PATH
    }

    fn weight_type() -> String {
        format!("tropical{}", T::TYPE_SUFFIX)
    }
}

// ============================================================================
// LogWeight: (−log(e⁻ˣ+e⁻ʸ), +) semiring
// ============================================================================

/// `log(1 + e⁻ˣ)`, the stable tail of log-space addition.
#[inline]
fn log_exp<T: FloatScalar>(x: T) -> T {
    (-x).exp().ln_1p()
}

/// Log semiring weight over negative log probabilities.
///
/// Operations:
/// - Plus (⊕): `−log(e⁻ᵃ + e⁻ᵇ)`
/// - Times (⊗): `a + b`
/// - Zero: `+∞`
/// - One: `0`
///
/// Plus sums probabilities rather than selecting the best one, so this
/// weight is not idempotent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct LogWeight<T: FloatScalar>(pub T);

impl<T: FloatScalar> LogWeight<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LogWeight(value)
    }

    #[inline]
    pub fn value(&self) -> T {
        self.0
    }
}

impl<T: FloatScalar> fmt::Display for LogWeight<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: FloatScalar> Semiring for LogWeight<T> {
    type Reverse = Self;

    #[inline]
    fn zero() -> Self {
        LogWeight(T::infinity())
    }

    #[inline]
    fn one() -> Self {
        LogWeight(T::zero())
    }

    #[inline]
    fn no_weight() -> Self {
        LogWeight(T::nan())
    }

    #[inline]
    fn plus(&self, rhs: &Self) -> Self {
        if !self.is_member() || !rhs.is_member() {
            return Self::no_weight();
        }
        let (f1, f2) = (self.0, rhs.0);
        if f1 == T::infinity() {
            *rhs
        } else if f2 == T::infinity() {
            *self
        } else if f1 > f2 {
            LogWeight(f2 - log_exp(f1 - f2))
        } else {
            LogWeight(f1 - log_exp(f2 - f1))
        }
    }

    #[inline]
    fn times(&self, rhs: &Self) -> Self {
        if !self.is_member() || !rhs.is_member() {
            Self::no_weight()
        } else if self.0 == T::infinity() {
            *self
        } else if rhs.0 == T::infinity() {
            *rhs
        } else {
            LogWeight(self.0 + rhs.0)
        }
    }

    #[inline]
    fn divide(&self, rhs: &Self, _divide_type: DivideType) -> Self {
        LogWeight(float_divide(self.0, rhs.0))
    }

    #[inline]
    fn approx_equal(&self, rhs: &Self, delta: f32) -> bool {
        float_approx_equal(self.0, rhs.0, delta)
    }

    #[inline]
    fn quantize(&self, delta: f32) -> Self {
        LogWeight(float_quantize(self.0, delta))
    }

    #[inline]
    fn reverse(&self) -> Self {
        *self
    }

    #[inline]
    fn is_member(&self) -> bool {
        float_member(self.0)
    }

    fn properties() -> u64 {
        LEFT_SEMIRING | RIGHT_SEMIRING | COMMUTATIVE
    }

    fn weight_type() -> String {
        format!("log{}", T::TYPE_SUFFIX)
    }
}
