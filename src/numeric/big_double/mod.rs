// ============================================================================
// BigDouble
// Normalized mantissa/exponent decimal float with i64 exponent range
// ============================================================================

mod arithmetic;
mod comparison;
mod conversions;
mod format;
mod functions;

use super::powers_of_ten::{self, DOUBLE_EXP_MIN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal floating-point number approximating `mantissa × 10^exponent`.
///
/// The mantissa is an f64, so precision is bounded to roughly 15-17
/// significant decimal digits, but the exponent is an i64 and reaches far
/// beyond the f64 range.
///
/// # Invariants
/// - nonzero finite: `1.0 <= |mantissa| < 10.0`
/// - zero: `(0.0, 0)` exactly
/// - infinity: `(±1.0, i64::MAX)`
/// - NaN: `(NaN, 0)`, never normalized further
///
/// # Example
/// ```
/// use generic_math::numeric::BigDouble;
///
/// let a = BigDouble::new(1.5, 1000);
/// let b = BigDouble::new(2.0, 2000);
/// let c = a * b;
/// assert_eq!(c.exponent(), 3000);
/// assert_eq!(c.to_string(), "3e3000");
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BigDouble {
    mantissa: f64,
    exponent: i64,
}

/// Exponent sentinel carried by signed infinities.
pub const INFINITE_EXPONENT: i64 = i64::MAX;

/// Exponent at and above which every representable value is an integer.
pub const MAX_SIGNIFICANT_EXPONENT: i64 = 17;

/// Exponent gap past which the smaller addend cannot change the sum.
pub const NEGLIGIBLE_EXPONENT_DIFF: i64 = 17;

/// log2(10)
pub const LOG2_10: f64 = 3.321_928_094_887_362;

impl BigDouble {
    /// 0
    pub const ZERO: Self = Self::from_raw(0.0, 0);

    /// 1
    pub const ONE: Self = Self::from_raw(1.0, 0);

    /// 10
    pub const TEN: Self = Self::from_raw(1.0, 1);

    /// -1
    pub const NEG_ONE: Self = Self::from_raw(-1.0, 0);

    /// Not a number
    pub const NAN: Self = Self::from_raw(f64::NAN, 0);

    /// Positive infinity
    pub const INFINITY: Self = Self::from_raw(1.0, INFINITE_EXPONENT);

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self::from_raw(-1.0, INFINITE_EXPONENT);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an explicit mantissa/exponent pair, normalizing.
    ///
    /// # Example
    /// ```
    /// use generic_math::numeric::BigDouble;
    ///
    /// let v = BigDouble::new(50.0, 3);
    /// assert_eq!(v.mantissa(), 5.0);
    /// assert_eq!(v.exponent(), 4);
    /// ```
    #[inline]
    pub fn new(mantissa: f64, exponent: i64) -> Self {
        Self::normalize(mantissa, exponent)
    }

    /// Create from a native double.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self::normalize(value, 0)
    }

    /// Store a pair as-is. Callers must already satisfy the invariants.
    #[inline]
    pub(crate) const fn from_raw(mantissa: f64, exponent: i64) -> Self {
        Self { mantissa, exponent }
    }

    fn normalize(mut mantissa: f64, mut exponent: i64) -> Self {
        if mantissa.is_nan() {
            return Self::from_raw(mantissa, 0);
        }

        if mantissa == 0.0 {
            return Self::ZERO;
        }

        if mantissa.is_infinite() {
            return Self::from_raw(mantissa.signum(), INFINITE_EXPONENT);
        }

        let abs = mantissa.abs();
        if !(1.0..10.0).contains(&abs) {
            let shift = abs.log10().floor() as i64;

            if shift == DOUBLE_EXP_MIN {
                // 10^-324 is not representable; log10 is also unstable this low
                mantissa = mantissa * 10.0 / 1e-323;
            } else {
                mantissa /= powers_of_ten::lookup(shift);
            }

            exponent = exponent.saturating_add(shift);

            // floor(log10) can be off by one near exact powers and subnormals
            let abs = mantissa.abs();
            if abs >= 10.0 {
                mantissa /= 10.0;
                exponent = exponent.saturating_add(1);
            } else if abs < 1.0 {
                mantissa *= 10.0;
                exponent = exponent.saturating_sub(1);
            }
        }

        if exponent < i64::MIN / 2 {
            return Self::ZERO;
        }

        Self::from_raw(mantissa, exponent)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Normalized mantissa.
    #[inline]
    pub const fn mantissa(self) -> f64 {
        self.mantissa
    }

    /// Decimal exponent.
    #[inline]
    pub const fn exponent(self) -> i64 {
        self.exponent
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.mantissa == 0.0
    }

    /// Check if value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.mantissa.is_nan()
    }

    /// Check if value is a signed infinity.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.exponent == INFINITE_EXPONENT && !self.mantissa.is_nan()
    }

    /// Neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.mantissa > 0.0
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.mantissa < 0.0
    }
}

impl Default for BigDouble {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

#[inline]
pub(crate) fn pow10(power: i64) -> f64 {
    powers_of_ten::lookup(power)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    fn parts() -> impl Strategy<Value = (f64, i64)> {
        (-1e6f64..1e6, -10_000i64..10_000)
    }

    proptest! {
        #[test]
        fn prop_normalized_mantissa_in_range((mantissa, exponent) in parts()) {
            let v = BigDouble::new(mantissa, exponent);
            if v.is_zero() {
                prop_assert_eq!(v.exponent(), 0);
            } else {
                prop_assert!(v.mantissa().abs() >= 1.0 && v.mantissa().abs() < 10.0);
            }
        }

        #[test]
        fn prop_f64_round_trip(value in prop::num::f64::NORMAL) {
            let back = BigDouble::from_f64(value).to_f64();
            let diff = (back - value).abs();
            // non-negative exponents may snap onto a neighbouring integer
            prop_assert!(diff <= value.abs() * 1e-12 || diff < 1e-10, "{} -> {}", value, back);
        }

        #[test]
        fn prop_add_mul_commute(a in parts(), b in parts()) {
            let a = BigDouble::new(a.0, a.1);
            let b = BigDouble::new(b.0, b.1);
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn prop_negligible_addend_is_ignored(
            (mantissa, exponent) in parts(),
            small in -1e6f64..1e6,
            gap in 18i64..1_000,
        ) {
            let a = BigDouble::new(mantissa, exponent);
            let b = BigDouble::new(small, a.exponent() - gap);
            prop_assume!(!a.is_zero() && !b.is_zero());
            prop_assume!(a.exponent() - b.exponent() > NEGLIGIBLE_EXPONENT_DIFF);

            let sum = a + b;
            prop_assert_eq!(sum.mantissa().to_bits(), a.mantissa().to_bits());
            prop_assert_eq!(sum.exponent(), a.exponent());
        }

        #[test]
        fn prop_identities((mantissa, exponent) in parts()) {
            let a = BigDouble::new(mantissa, exponent);
            prop_assert_eq!(a + BigDouble::ZERO, a);
            prop_assert_eq!(a * BigDouble::ONE, a);
            prop_assert!((a - a).is_zero());
        }

        #[test]
        fn prop_order_matches_f64(a in -1e300f64..1e300, b in -1e300f64..1e300) {
            let ordering = BigDouble::from_f64(a).compare_to(&BigDouble::from_f64(b));
            match a.partial_cmp(&b) {
                Some(Ordering::Less) => prop_assert_ne!(ordering, Ordering::Greater),
                Some(Ordering::Greater) => prop_assert_ne!(ordering, Ordering::Less),
                _ => prop_assert_eq!(ordering, Ordering::Equal),
            }
        }
    }
}
