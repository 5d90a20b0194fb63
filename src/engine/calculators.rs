// ============================================================================
// Calculators
// ValueCalculator and MathFunctions for every supported encoding
// ============================================================================

use crate::interfaces::{MathFunctions, ValueCalculator};
use crate::numeric::{BigDouble, NumericError, NumericResult};
use half::f16;

// ============================================================================
// Integers: wrapping arithmetic, f64 round trip for power and functions
// ============================================================================

macro_rules! impl_integer_calculator {
    ($($ty:ty => $abs:path),* $(,)?) => {
        $(
            impl ValueCalculator for $ty {
                #[inline]
                fn add(a: Self, b: Self) -> Self {
                    a.wrapping_add(b)
                }

                #[inline]
                fn subtract(a: Self, b: Self) -> Self {
                    a.wrapping_sub(b)
                }

                #[inline]
                fn multiply(a: Self, b: Self) -> Self {
                    a.wrapping_mul(b)
                }

                #[inline]
                fn divide(a: Self, b: Self) -> NumericResult<Self> {
                    if b == 0 {
                        return Err(NumericError::DivisionByZero);
                    }
                    Ok(a.wrapping_div(b))
                }

                #[inline]
                fn power(base: Self, exponent: Self) -> Self {
                    (base as f64).powf(exponent as f64) as $ty
                }

                #[inline]
                fn min(a: Self, b: Self) -> Self {
                    Ord::min(a, b)
                }

                #[inline]
                fn max(a: Self, b: Self) -> Self {
                    Ord::max(a, b)
                }
            }

            impl MathFunctions for $ty {
                #[inline]
                fn abs(value: Self) -> Self {
                    $abs(value)
                }

                #[inline]
                fn floor(value: Self) -> Self {
                    value
                }

                #[inline]
                fn ceil(value: Self) -> Self {
                    value
                }

                #[inline]
                fn round(value: Self) -> Self {
                    value
                }

                #[inline]
                fn sqrt(value: Self) -> Self {
                    (value as f64).sqrt() as $ty
                }

                #[inline]
                fn log10(value: Self) -> Self {
                    (value as f64).log10() as $ty
                }

                #[inline]
                fn ln(value: Self) -> Self {
                    (value as f64).ln() as $ty
                }
            }
        )*
    };
}

impl_integer_calculator! {
    i8 => i8::wrapping_abs,
    i16 => i16::wrapping_abs,
    u16 => std::convert::identity,
    i32 => i32::wrapping_abs,
    u32 => std::convert::identity,
    i64 => i64::wrapping_abs,
    u64 => std::convert::identity,
}

// ============================================================================
// Native floats: IEEE semantics
// ============================================================================

macro_rules! impl_float_calculator {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ValueCalculator for $ty {
                #[inline]
                fn add(a: Self, b: Self) -> Self {
                    a + b
                }

                #[inline]
                fn subtract(a: Self, b: Self) -> Self {
                    a - b
                }

                #[inline]
                fn multiply(a: Self, b: Self) -> Self {
                    a * b
                }

                #[inline]
                fn divide(a: Self, b: Self) -> NumericResult<Self> {
                    Ok(a / b)
                }

                #[inline]
                fn power(base: Self, exponent: Self) -> Self {
                    base.powf(exponent)
                }

                #[inline]
                fn min(a: Self, b: Self) -> Self {
                    a.min(b)
                }

                #[inline]
                fn max(a: Self, b: Self) -> Self {
                    a.max(b)
                }
            }

            impl MathFunctions for $ty {
                #[inline]
                fn abs(value: Self) -> Self {
                    value.abs()
                }

                #[inline]
                fn floor(value: Self) -> Self {
                    value.floor()
                }

                #[inline]
                fn ceil(value: Self) -> Self {
                    value.ceil()
                }

                #[inline]
                fn round(value: Self) -> Self {
                    value.round()
                }

                #[inline]
                fn sqrt(value: Self) -> Self {
                    value.sqrt()
                }

                #[inline]
                fn log10(value: Self) -> Self {
                    value.log10()
                }

                #[inline]
                fn ln(value: Self) -> Self {
                    value.ln()
                }
            }
        )*
    };
}

impl_float_calculator!(f32, f64);

// ============================================================================
// Half precision: evaluated in f32, rounded back
// ============================================================================

#[inline]
fn via_f32(value: f16, op: impl FnOnce(f32) -> f32) -> f16 {
    f16::from_f32(op(value.to_f32()))
}

#[inline]
fn via_f32_binary(a: f16, b: f16, op: impl FnOnce(f32, f32) -> f32) -> f16 {
    f16::from_f32(op(a.to_f32(), b.to_f32()))
}

impl ValueCalculator for f16 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        via_f32_binary(a, b, |a, b| a + b)
    }

    #[inline]
    fn subtract(a: Self, b: Self) -> Self {
        via_f32_binary(a, b, |a, b| a - b)
    }

    #[inline]
    fn multiply(a: Self, b: Self) -> Self {
        via_f32_binary(a, b, |a, b| a * b)
    }

    #[inline]
    fn divide(a: Self, b: Self) -> NumericResult<Self> {
        Ok(via_f32_binary(a, b, |a, b| a / b))
    }

    #[inline]
    fn power(base: Self, exponent: Self) -> Self {
        via_f32_binary(base, exponent, f32::powf)
    }

    #[inline]
    fn min(a: Self, b: Self) -> Self {
        via_f32_binary(a, b, f32::min)
    }

    #[inline]
    fn max(a: Self, b: Self) -> Self {
        via_f32_binary(a, b, f32::max)
    }
}

impl MathFunctions for f16 {
    #[inline]
    fn abs(value: Self) -> Self {
        via_f32(value, f32::abs)
    }

    #[inline]
    fn floor(value: Self) -> Self {
        via_f32(value, f32::floor)
    }

    #[inline]
    fn ceil(value: Self) -> Self {
        via_f32(value, f32::ceil)
    }

    #[inline]
    fn round(value: Self) -> Self {
        via_f32(value, f32::round)
    }

    #[inline]
    fn sqrt(value: Self) -> Self {
        via_f32(value, f32::sqrt)
    }

    #[inline]
    fn log10(value: Self) -> Self {
        via_f32(value, f32::log10)
    }

    #[inline]
    fn ln(value: Self) -> Self {
        via_f32(value, f32::ln)
    }
}

// ============================================================================
// Bool: a 0/1 byte whose nonzero results are true
// ============================================================================

impl ValueCalculator for bool {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a | b
    }

    #[inline]
    fn subtract(a: Self, b: Self) -> Self {
        a ^ b
    }

    #[inline]
    fn multiply(a: Self, b: Self) -> Self {
        a & b
    }

    #[inline]
    fn divide(a: Self, b: Self) -> NumericResult<Self> {
        if !b {
            return Err(NumericError::DivisionByZero);
        }
        Ok(a)
    }

    /// 0^0 = 1, 1^0 = 1, 0^1 = 0, 1^1 = 1
    #[inline]
    fn power(base: Self, exponent: Self) -> Self {
        base | !exponent
    }

    #[inline]
    fn min(a: Self, b: Self) -> Self {
        a & b
    }

    #[inline]
    fn max(a: Self, b: Self) -> Self {
        a | b
    }
}

impl MathFunctions for bool {
    #[inline]
    fn abs(value: Self) -> Self {
        value
    }

    #[inline]
    fn floor(value: Self) -> Self {
        value
    }

    #[inline]
    fn ceil(value: Self) -> Self {
        value
    }

    #[inline]
    fn round(value: Self) -> Self {
        value
    }

    #[inline]
    fn sqrt(value: Self) -> Self {
        value
    }

    // log(1) = 0 and log(0) = -inf, neither of which is positive
    #[inline]
    fn log10(_value: Self) -> Self {
        false
    }

    #[inline]
    fn ln(_value: Self) -> Self {
        false
    }
}

// ============================================================================
// BigDouble
// ============================================================================

impl ValueCalculator for BigDouble {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn subtract(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn multiply(a: Self, b: Self) -> Self {
        a * b
    }

    /// Division by zero yields a signed infinity rather than an error.
    #[inline]
    fn divide(a: Self, b: Self) -> NumericResult<Self> {
        Ok(a / b)
    }

    #[inline]
    fn power(base: Self, exponent: Self) -> Self {
        base.pow(exponent)
    }

    #[inline]
    fn min(a: Self, b: Self) -> Self {
        BigDouble::min(a, b)
    }

    #[inline]
    fn max(a: Self, b: Self) -> Self {
        BigDouble::max(a, b)
    }
}

impl MathFunctions for BigDouble {
    #[inline]
    fn abs(value: Self) -> Self {
        value.abs()
    }

    #[inline]
    fn floor(value: Self) -> Self {
        value.floor()
    }

    #[inline]
    fn ceil(value: Self) -> Self {
        value.ceil()
    }

    #[inline]
    fn round(value: Self) -> Self {
        value.round()
    }

    #[inline]
    fn sqrt(value: Self) -> Self {
        value.sqrt()
    }

    #[inline]
    fn log10(value: Self) -> Self {
        BigDouble::from_f64(value.log10())
    }

    #[inline]
    fn ln(value: Self) -> Self {
        BigDouble::from_f64(value.ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc_min<T: ValueCalculator>(a: T, b: T) -> T {
        T::min(a, b)
    }

    fn calc_max<T: ValueCalculator>(a: T, b: T) -> T {
        T::max(a, b)
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(<i8 as ValueCalculator>::add(120, 10), -126);
        assert_eq!(<u16 as ValueCalculator>::subtract(0, 1), u16::MAX);
        assert_eq!(<i32 as ValueCalculator>::multiply(i32::MAX, 2), -2);
        assert_eq!(<i64 as ValueCalculator>::divide(i64::MIN, -1), Ok(i64::MIN));
    }

    #[test]
    fn test_integer_divide_by_zero() {
        assert_eq!(
            <u32 as ValueCalculator>::divide(7, 0),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(<i16 as ValueCalculator>::divide(-7, 2), Ok(-3));
    }

    #[test]
    fn test_integer_power_truncates() {
        assert_eq!(<i32 as ValueCalculator>::power(2, 10), 1024);
        assert_eq!(<i32 as ValueCalculator>::power(2, -1), 0);
        assert_eq!(<u16 as ValueCalculator>::power(2, 20), u16::MAX);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(calc_min(3i32, -4), -4);
        assert_eq!(calc_max(3u64, 9), 9);
        assert_eq!(calc_min(1.5f32, 0.5), 0.5);
        assert_eq!(calc_max(f16::from_f32(1.0), f16::from_f32(2.0)), f16::from_f32(2.0));
        assert_eq!(
            calc_max(BigDouble::new(1.0, 500), BigDouble::new(9.0, 499)),
            BigDouble::new(1.0, 500)
        );
    }

    #[test]
    fn test_float_division_follows_ieee() {
        let result = <f64 as ValueCalculator>::divide(1.0, 0.0).unwrap();
        assert!(result.is_infinite());

        let result = <f32 as ValueCalculator>::divide(0.0, 0.0).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_half_rounds_back() {
        let a = f16::from_f32(0.1);
        let b = f16::from_f32(0.2);
        let sum = <f16 as ValueCalculator>::add(a, b);
        assert_eq!(sum, f16::from_f32(a.to_f32() + b.to_f32()));
        assert_eq!(
            <f16 as ValueCalculator>::power(f16::from_f32(2.0), f16::from_f32(3.0)),
            f16::from_f32(8.0)
        );
    }

    #[test]
    fn test_bool_truth_table() {
        assert!(<bool as ValueCalculator>::add(true, false));
        assert!(!<bool as ValueCalculator>::subtract(true, true));
        assert!(!<bool as ValueCalculator>::multiply(true, false));
        assert_eq!(<bool as ValueCalculator>::divide(true, true), Ok(true));
        assert_eq!(
            <bool as ValueCalculator>::divide(true, false),
            Err(NumericError::DivisionByZero)
        );
        assert!(<bool as ValueCalculator>::power(false, false));
        assert!(!<bool as ValueCalculator>::power(false, true));
        assert!(!calc_min(true, false));
        assert!(calc_max(true, false));
    }

    #[test]
    fn test_big_double_calculator() {
        let a = BigDouble::new(2.0, 400);
        let b = BigDouble::new(4.0, 400);
        assert_eq!(<BigDouble as ValueCalculator>::add(a, b), BigDouble::new(6.0, 400));
        assert!(<BigDouble as ValueCalculator>::divide(a, BigDouble::ZERO)
            .unwrap()
            .is_infinite());

        let squared = <BigDouble as ValueCalculator>::power(a, BigDouble::from(2.0));
        assert_eq!(squared.exponent(), 800);
    }

    #[test]
    fn test_math_functions() {
        assert_eq!(<i32 as MathFunctions>::abs(i32::MIN), i32::MIN);
        assert_eq!(<i8 as MathFunctions>::abs(-5), 5);
        assert_eq!(<u32 as MathFunctions>::sqrt(17), 4);
        assert_eq!(<i64 as MathFunctions>::log10(1), 0);
        // ln(0) is -inf, which saturates on the cast back
        assert_eq!(<i64 as MathFunctions>::ln(0), i64::MIN);
        assert_eq!(<f64 as MathFunctions>::floor(-1.5), -2.0);
        assert_eq!(<f32 as MathFunctions>::round(2.5), 3.0);
        assert_eq!(
            <f16 as MathFunctions>::sqrt(f16::from_f32(9.0)),
            f16::from_f32(3.0)
        );
        assert!(!<bool as MathFunctions>::log10(true));
        assert_eq!(
            <BigDouble as MathFunctions>::log10(BigDouble::new(1.0, 400)),
            BigDouble::from(400.0)
        );
    }
}
