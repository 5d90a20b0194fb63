// ============================================================================
// BigDouble Functions
// Logarithms, powers, roots and rounding
// ============================================================================

use super::{pow10, BigDouble, INFINITE_EXPONENT, LOG2_10, MAX_SIGNIFICANT_EXPONENT};
use std::f64::consts::{E, LN_10, LOG10_E, PI};

/// Exponent below which `exp` evaluates natively.
const NATIVE_EXP_MAX_EXPONENT: i64 = 3;

impl BigDouble {
    // ========================================================================
    // Logarithms
    // ========================================================================

    /// Base-10 logarithm: `exponent + log10(mantissa)`.
    #[inline]
    pub fn log10(self) -> f64 {
        self.exponent as f64 + self.mantissa.log10()
    }

    /// Base-10 logarithm of the magnitude.
    #[inline]
    pub fn abs_log10(self) -> f64 {
        self.exponent as f64 + self.mantissa.abs().log10()
    }

    /// Natural logarithm. NaN for zero and negative values.
    #[inline]
    pub fn ln(self) -> f64 {
        if self.mantissa <= 0.0 {
            return f64::NAN;
        }

        self.mantissa.ln() + self.exponent as f64 * LN_10
    }

    /// Base-2 logarithm.
    #[inline]
    pub fn log2(self) -> f64 {
        LOG2_10 * self.log10()
    }

    /// Logarithm in an arbitrary native base.
    #[inline]
    pub fn log(self, base: f64) -> f64 {
        self.ln() / base.ln()
    }

    /// Logarithm in an arbitrary extended base.
    #[inline]
    pub fn log_big(self, base: BigDouble) -> f64 {
        self.ln() / base.ln()
    }

    // ========================================================================
    // Powers
    // ========================================================================

    /// Raise to a native power by way of the base-10 logarithm.
    ///
    /// `0^0` is one and `0^p` is zero otherwise. A negative base keeps its
    /// sign for odd integral powers; a fractional power of a negative base
    /// is NaN.
    ///
    /// # Example
    /// ```
    /// use generic_math::numeric::BigDouble;
    ///
    /// let v = BigDouble::new(1.0, 100).powf(50.0);
    /// assert_eq!(v.exponent(), 5000);
    /// ```
    pub fn powf(self, power: f64) -> Self {
        if self.mantissa == 0.0 {
            return if power == 0.0 { Self::ONE } else { Self::ZERO };
        }

        if self.is_nan() || power.is_nan() {
            return Self::NAN;
        }

        let magnitude = Self::from_log10(power * self.abs_log10());
        if self.mantissa > 0.0 {
            return magnitude;
        }

        if power.fract() != 0.0 {
            return Self::NAN;
        }

        if power % 2.0 == 0.0 {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Raise to an integer power.
    #[inline]
    pub fn powi(self, power: i64) -> Self {
        self.powf(power as f64)
    }

    /// Raise to an extended power. The power is narrowed to f64.
    #[inline]
    pub fn pow(self, power: BigDouble) -> Self {
        self.powf(power.to_f64())
    }

    /// Rebuild a value from its base-10 logarithm.
    fn from_log10(log: f64) -> Self {
        if log.is_nan() {
            return Self::NAN;
        }

        if log >= INFINITE_EXPONENT as f64 {
            return Self::INFINITY;
        }

        if log < (i64::MIN / 2) as f64 {
            return Self::ZERO;
        }

        let exponent = log.floor();
        let residual = log - exponent;
        BigDouble::new(10f64.powf(residual), exponent as i64)
    }

    /// Square root.
    ///
    /// Zero and negative values yield zero. Odd exponents shift one decade
    /// into the mantissa so the exponent halves exactly.
    pub fn sqrt(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }

        if self.mantissa <= 0.0 {
            return Self::ZERO;
        }

        if self.is_infinite() {
            return self;
        }

        if self.exponent % 2 == 0 {
            BigDouble::new(self.mantissa.sqrt(), self.exponent / 2)
        } else {
            BigDouble::new((self.mantissa * 10.0).sqrt(), (self.exponent - 1) / 2)
        }
    }

    /// Natural exponential.
    pub fn exp(self) -> Self {
        if self.exponent < NATIVE_EXP_MAX_EXPONENT {
            return BigDouble::from_f64(self.to_f64().exp());
        }

        // e^x = 10^(x * log10(e))
        let log = (self * BigDouble::from_f64(LOG10_E)).to_f64();
        if log.is_infinite() {
            return if log > 0.0 { Self::INFINITY } else { Self::ZERO };
        }

        Self::from_log10(log)
    }

    /// Approximate `self!` for non-integers too, using Stirling's series with
    /// Windschitl's correction. Not exact for small integers (`5!` is about
    /// `120.0000002`).
    pub fn factorial(self) -> Self {
        let n = self.to_f64() + 1.0;
        let base = n / E * (n * (1.0 / n).sinh() + 1.0 / (810.0 * n.powi(6))).sqrt();

        BigDouble::from_f64(base).powf(n) * BigDouble::from_f64((2.0 * PI / n).sqrt())
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        BigDouble::from_raw(self.mantissa.abs(), self.exponent)
    }

    /// Round toward negative infinity.
    pub fn floor(self) -> Self {
        if self.exponent < 0 {
            return if self.mantissa >= 0.0 {
                Self::ZERO
            } else {
                Self::NEG_ONE
            };
        }

        if self.exponent >= MAX_SIGNIFICANT_EXPONENT {
            return self;
        }

        BigDouble::from_f64(self.to_f64().floor())
    }

    /// Round toward positive infinity.
    pub fn ceil(self) -> Self {
        if self.exponent < 0 {
            return if self.mantissa > 0.0 {
                Self::ONE
            } else {
                Self::ZERO
            };
        }

        if self.exponent >= MAX_SIGNIFICANT_EXPONENT {
            return self;
        }

        BigDouble::from_f64(self.to_f64().ceil())
    }

    /// Round to the nearest integer, ties away from zero.
    pub fn round(self) -> Self {
        if self.exponent < 0 {
            return BigDouble::from_f64((self.mantissa * pow10(self.exponent)).round());
        }

        if self.exponent >= MAX_SIGNIFICANT_EXPONENT {
            return self;
        }

        BigDouble::from_f64(self.to_f64().round())
    }
}
