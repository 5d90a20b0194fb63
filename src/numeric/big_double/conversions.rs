// ============================================================================
// BigDouble Conversions
// Native casts, rust_decimal interop and string parsing
// ============================================================================

use super::{pow10, BigDouble};
use crate::numeric::errors::{NumericError, NumericResult};
use crate::numeric::powers_of_ten::{DOUBLE_EXP_MAX, DOUBLE_EXP_MIN};
use half::f16;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Distance from an integer under which `to_f64` snaps to it.
const INTEGER_SNAP_TOLERANCE: f64 = 1e-10;

impl BigDouble {
    /// Convert to the nearest native double.
    ///
    /// Exponents past the f64 range saturate to ±infinity or zero. For
    /// non-negative exponents the result is snapped to an integer when it is
    /// within `1e-10` of one, which hides mantissa scaling error on values
    /// that round-trip through text.
    pub fn to_f64(self) -> f64 {
        if self.mantissa == 0.0 {
            return 0.0;
        }

        if self.exponent > DOUBLE_EXP_MAX {
            return if self.mantissa > 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }

        if self.exponent < DOUBLE_EXP_MIN {
            return 0.0;
        }

        if self.exponent == DOUBLE_EXP_MIN {
            return if self.mantissa > 0.0 { 5e-324 } else { -5e-324 };
        }

        let result = self.mantissa * pow10(self.exponent);
        if !result.is_finite() || self.exponent < 0 {
            return result;
        }

        let rounded = result.round();
        if (rounded - result).abs() < INTEGER_SNAP_TOLERANCE {
            rounded
        } else {
            result
        }
    }

    /// Convert to f32 through [`BigDouble::to_f64`].
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Convert to a half-precision float through [`BigDouble::to_f64`].
    #[inline]
    pub fn to_f16(self) -> f16 {
        f16::from_f64(self.to_f64())
    }

    // ========================================================================
    // rust_decimal interop
    // ========================================================================

    /// Convert from rust_decimal::Decimal.
    pub fn from_decimal(value: Decimal) -> Self {
        value.to_f64().map_or(Self::NAN, Self::from_f64)
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Overflow` for NaN, infinities and magnitudes past the
    /// 96-bit decimal range.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        Decimal::from_f64(self.to_f64()).ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// Integer casts: out-of-range and NaN become 0, in-range truncates
// ============================================================================

macro_rules! impl_integer_casts {
    ($($name:ident => $ty:ty),* $(,)?) => {
        impl BigDouble {
            $(
                #[doc = concat!("Truncating cast to `", stringify!($ty), "`; out of range yields 0.")]
                #[inline]
                pub fn $name(self) -> $ty {
                    let value = self.to_f64();
                    if value >= <$ty>::MIN as f64 && value <= <$ty>::MAX as f64 {
                        value as $ty
                    } else {
                        0
                    }
                }
            )*
        }
    };
}

impl_integer_casts! {
    to_i8 => i8,
    to_u8 => u8,
    to_i16 => i16,
    to_u16 => u16,
    to_i32 => i32,
    to_u32 => u32,
    to_i64 => i64,
    to_u64 => u64,
}

macro_rules! impl_from_native {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for BigDouble {
                #[inline]
                fn from(value: $ty) -> Self {
                    BigDouble::from_f64(value as f64)
                }
            }
        )*
    };
}

impl_from_native!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl From<bool> for BigDouble {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            BigDouble::ONE
        } else {
            BigDouble::ZERO
        }
    }
}

impl From<f16> for BigDouble {
    #[inline]
    fn from(value: f16) -> Self {
        BigDouble::from_f64(value.to_f64())
    }
}

impl From<Decimal> for BigDouble {
    #[inline]
    fn from(value: Decimal) -> Self {
        BigDouble::from_decimal(value)
    }
}

impl From<BigDouble> for f64 {
    #[inline]
    fn from(value: BigDouble) -> Self {
        value.to_f64()
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for BigDouble {
    type Err = NumericError;

    /// Parse the textual grammar produced by `Display`.
    ///
    /// # Examples
    /// - "1.23e45" -> (1.23, 45)
    /// - "-2.5e10" -> (-2.5, 10)
    /// - "150" -> (1.5, 2)
    /// - "NaN" -> NaN
    /// - "Inf" -> +infinity
    ///
    /// # Errors
    /// - `InvalidInput` if either half fails to parse
    /// - `UnexpectedNaN` if plain decimal text yields NaN without being
    ///   the literal `NaN` token
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((mantissa, exponent)) = s.split_once('e') {
            let mantissa: f64 = mantissa.parse().map_err(|_| NumericError::InvalidInput)?;
            let exponent: i64 = exponent.parse().map_err(|_| NumericError::InvalidInput)?;
            return Ok(BigDouble::new(mantissa, exponent));
        }

        if s == "NaN" {
            return Ok(BigDouble::NAN);
        }

        let value: f64 = s.parse().map_err(|_| NumericError::InvalidInput)?;
        let result = BigDouble::from_f64(value);
        if result.is_nan() {
            return Err(NumericError::UnexpectedNaN);
        }

        Ok(result)
    }
}
