// ============================================================================
// Value Calculator Interface
// Per-encoding arithmetic contract used by every dispatch path
// ============================================================================

use crate::numeric::NumericResult;
use std::fmt;

/// Arithmetic over one numeric encoding.
///
/// Implementations are stateless; every operation is an associated function
/// so generic code can call `T::add(a, b)` without a calculator instance.
/// Implementations: every primitive behind `NumericTag`, plus `BigDouble`.
///
/// # Semantics
/// - Integers wrap on overflow
/// - Integer division by zero is `DivisionByZero`; float division follows IEEE
/// - `power` on integers evaluates in f64 and truncates back
pub trait ValueCalculator: Copy + PartialEq + fmt::Debug {
    fn add(a: Self, b: Self) -> Self;

    fn subtract(a: Self, b: Self) -> Self;

    fn multiply(a: Self, b: Self) -> Self;

    /// # Errors
    /// `DivisionByZero` for integer encodings with `b == 0`.
    fn divide(a: Self, b: Self) -> NumericResult<Self>;

    /// `base` raised to `exponent`.
    fn power(base: Self, exponent: Self) -> Self;

    fn min(a: Self, b: Self) -> Self;

    fn max(a: Self, b: Self) -> Self;
}

/// Unary functions over one numeric encoding.
///
/// Integer encodings round-trip through f64 with truncating casts; the
/// rounding family is the identity for them.
pub trait MathFunctions: Copy + PartialEq + fmt::Debug {
    fn abs(value: Self) -> Self;

    fn floor(value: Self) -> Self;

    fn ceil(value: Self) -> Self;

    fn round(value: Self) -> Self;

    fn sqrt(value: Self) -> Self;

    fn log10(value: Self) -> Self;

    fn ln(value: Self) -> Self;
}
