// ============================================================================
// Numeric Configuration
// Text formatting and float tolerance settings
// ============================================================================

use crate::numeric::powers_of_ten::DOUBLE_EXP_MAX;
use half::f16;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Most fraction digits an f64 mantissa can meaningfully carry.
pub const MAX_FRACTION_DIGITS: usize = 17;

// ============================================================================
// Format Configuration
// ============================================================================

/// Controls how `BigDouble` renders as text.
///
/// Exponents in `[0, plain_max_exponent)` and `(plain_min_exponent, 0)` are
/// printed as plain decimals; everything else uses `<mantissa>e<exponent>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// Fraction digits kept after the leading significant digit
    pub fraction_digits: usize,

    /// Exclusive upper exponent bound for plain output
    pub plain_max_exponent: i64,

    /// Exclusive lower exponent bound for plain output
    pub plain_min_exponent: i64,
}

impl FormatConfig {
    /// Create the default configuration: 2 digits, plain for `(-4, 6)`.
    pub const fn new() -> Self {
        Self {
            fraction_digits: 2,
            plain_max_exponent: 6,
            plain_min_exponent: -4,
        }
    }

    /// Short output, switching to scientific notation early.
    pub const fn compact() -> Self {
        Self {
            fraction_digits: 1,
            plain_max_exponent: 3,
            plain_min_exponent: -2,
        }
    }

    /// Six fraction digits with the default plain window.
    pub const fn precise() -> Self {
        Self {
            fraction_digits: 6,
            plain_max_exponent: 6,
            plain_min_exponent: -4,
        }
    }

    /// Builder method: Set fraction digits
    pub fn with_fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Builder method: Set the plain-output upper exponent bound
    pub fn with_plain_max_exponent(mut self, exponent: i64) -> Self {
        self.plain_max_exponent = exponent;
        self
    }

    /// Builder method: Set the plain-output lower exponent bound
    pub fn with_plain_min_exponent(mut self, exponent: i64) -> Self {
        self.plain_min_exponent = exponent;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(format!(
                "Fraction digits cannot exceed {}",
                MAX_FRACTION_DIGITS
            ));
        }

        // plain output goes through f64, so the window must stay inside its range
        if self.plain_max_exponent < 0 || self.plain_max_exponent > DOUBLE_EXP_MAX {
            return Err(format!(
                "Plain max exponent must be between 0 and {}",
                DOUBLE_EXP_MAX
            ));
        }

        if self.plain_min_exponent > 0 || self.plain_min_exponent < -DOUBLE_EXP_MAX {
            return Err(format!(
                "Plain min exponent must be between -{} and 0",
                DOUBLE_EXP_MAX
            ));
        }

        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tolerance Configuration
// ============================================================================

/// Relative tolerances used when deciding whether a recomputed float changed.
///
/// Two floats `a` and `b` count as equal when
/// `|a - b| <= tolerance * max(1, |a|, |b|)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToleranceConfig {
    /// Tolerance for half-precision values, expressed in f32
    pub half: f32,

    /// Tolerance for f32 values
    pub single: f32,

    /// Tolerance for f64 values
    pub double: f64,
}

impl ToleranceConfig {
    /// Machine epsilon of each float width.
    pub fn new() -> Self {
        Self {
            half: f16::EPSILON.to_f32(),
            single: f32::EPSILON,
            double: f64::EPSILON,
        }
    }

    /// Exact comparison for every float width.
    pub const fn exact() -> Self {
        Self {
            half: 0.0,
            single: 0.0,
            double: 0.0,
        }
    }

    /// Builder method: Set half-precision tolerance
    pub fn with_half(mut self, tolerance: f32) -> Self {
        self.half = tolerance;
        self
    }

    /// Builder method: Set f32 tolerance
    pub fn with_single(mut self, tolerance: f32) -> Self {
        self.single = tolerance;
        self
    }

    /// Builder method: Set f64 tolerance
    pub fn with_double(mut self, tolerance: f64) -> Self {
        self.double = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.half.is_finite() || self.half < 0.0 {
            return Err("Half tolerance must be finite and non-negative".to_string());
        }

        if !self.single.is_finite() || self.single < 0.0 {
            return Err("Single tolerance must be finite and non-negative".to_string());
        }

        if !self.double.is_finite() || self.double < 0.0 {
            return Err("Double tolerance must be finite and non-negative".to_string());
        }

        Ok(())
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self::new()
    }
}
