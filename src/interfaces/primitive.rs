// ============================================================================
// Primitive Bridge
// Maps each tagged encoding onto its Rust type
// ============================================================================

use crate::domain::{NumericTag, TaggedValue, ToleranceConfig};
use crate::numeric::{NumericError, NumericResult};
use half::f16;
use std::fmt;

/// A Rust type stored under one `NumericTag`.
///
/// Conversions follow truncating `as`-cast semantics, never rounding. A bool
/// is a 0/1 byte: it is `true` exactly when the source number is positive.
pub trait Primitive: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display {
    const TAG: NumericTag;
    const WIDTH: usize;

    /// Narrow a double into this encoding.
    fn from_f64_truncating(value: f64) -> Self;

    fn to_f64(self) -> f64;

    /// Exact integer view; `None` for float encodings.
    fn to_i128(self) -> Option<i128>;

    /// Narrow an integer, wrapping modulo the type's width.
    fn from_i128_wrapping(value: i128) -> Self;

    /// Payload of `value` if it carries this encoding.
    fn from_tagged(value: TaggedValue) -> Option<Self>;

    fn into_tagged(self) -> TaggedValue;

    /// Read the first `WIDTH` bytes in host byte order.
    ///
    /// # Errors
    /// `BufferTooSmall` when `bytes` is shorter than `WIDTH`.
    fn read_ne_bytes(bytes: &[u8]) -> NumericResult<Self>;

    /// Write `WIDTH` bytes in host byte order to the front of `out`.
    ///
    /// # Errors
    /// `BufferTooSmall` when `out` is shorter than `WIDTH`.
    fn write_ne_bytes(self, out: &mut [u8]) -> NumericResult<()>;

    /// Equality with a relative tolerance for floats; exact otherwise.
    fn approx_eq(self, other: Self, tolerance: &ToleranceConfig) -> bool;
}

#[inline]
fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }

    let scale = 1f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= tolerance * scale
}

#[inline]
fn buffer_too_small(needed: usize, actual: usize) -> NumericError {
    NumericError::BufferTooSmall { needed, actual }
}

// ============================================================================
// Integers
// ============================================================================

macro_rules! impl_integer_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const TAG: NumericTag = NumericTag::$variant;
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn from_f64_truncating(value: f64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_i128(self) -> Option<i128> {
                    Some(self as i128)
                }

                #[inline]
                fn from_i128_wrapping(value: i128) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_tagged(value: TaggedValue) -> Option<Self> {
                    match value {
                        TaggedValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[inline]
                fn into_tagged(self) -> TaggedValue {
                    TaggedValue::$variant(self)
                }

                fn read_ne_bytes(bytes: &[u8]) -> NumericResult<Self> {
                    let raw = bytes
                        .get(..Self::WIDTH)
                        .and_then(|prefix| prefix.try_into().ok())
                        .ok_or_else(|| buffer_too_small(Self::WIDTH, bytes.len()))?;
                    Ok(<$ty>::from_ne_bytes(raw))
                }

                fn write_ne_bytes(self, out: &mut [u8]) -> NumericResult<()> {
                    let actual = out.len();
                    let target = out
                        .get_mut(..Self::WIDTH)
                        .ok_or_else(|| buffer_too_small(Self::WIDTH, actual))?;
                    target.copy_from_slice(&self.to_ne_bytes());
                    Ok(())
                }

                #[inline]
                fn approx_eq(self, other: Self, _tolerance: &ToleranceConfig) -> bool {
                    self == other
                }
            }

            impl From<$ty> for TaggedValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    TaggedValue::$variant(value)
                }
            }
        )*
    };
}

impl_integer_primitive! {
    i8 => Int8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
}

// ============================================================================
// Floats
// ============================================================================

macro_rules! impl_float_primitive {
    ($($ty:ty => $variant:ident, $tolerance:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const TAG: NumericTag = NumericTag::$variant;
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn from_f64_truncating(value: f64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_i128(self) -> Option<i128> {
                    None
                }

                #[inline]
                fn from_i128_wrapping(value: i128) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_tagged(value: TaggedValue) -> Option<Self> {
                    match value {
                        TaggedValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[inline]
                fn into_tagged(self) -> TaggedValue {
                    TaggedValue::$variant(self)
                }

                fn read_ne_bytes(bytes: &[u8]) -> NumericResult<Self> {
                    let raw = bytes
                        .get(..Self::WIDTH)
                        .and_then(|prefix| prefix.try_into().ok())
                        .ok_or_else(|| buffer_too_small(Self::WIDTH, bytes.len()))?;
                    Ok(<$ty>::from_ne_bytes(raw))
                }

                fn write_ne_bytes(self, out: &mut [u8]) -> NumericResult<()> {
                    let actual = out.len();
                    let target = out
                        .get_mut(..Self::WIDTH)
                        .ok_or_else(|| buffer_too_small(Self::WIDTH, actual))?;
                    target.copy_from_slice(&self.to_ne_bytes());
                    Ok(())
                }

                #[inline]
                fn approx_eq(self, other: Self, tolerance: &ToleranceConfig) -> bool {
                    relative_eq(self as f64, other as f64, tolerance.$tolerance as f64)
                }
            }

            impl From<$ty> for TaggedValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    TaggedValue::$variant(value)
                }
            }
        )*
    };
}

impl_float_primitive! {
    f32 => Float32, single,
    f64 => Float64, double,
}

impl Primitive for f16 {
    const TAG: NumericTag = NumericTag::Float16;
    const WIDTH: usize = 2;

    #[inline]
    fn from_f64_truncating(value: f64) -> Self {
        f16::from_f64(value)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline]
    fn to_i128(self) -> Option<i128> {
        None
    }

    #[inline]
    fn from_i128_wrapping(value: i128) -> Self {
        f16::from_f64(value as f64)
    }

    #[inline]
    fn from_tagged(value: TaggedValue) -> Option<Self> {
        match value {
            TaggedValue::Float16(inner) => Some(inner),
            _ => None,
        }
    }

    #[inline]
    fn into_tagged(self) -> TaggedValue {
        TaggedValue::Float16(self)
    }

    fn read_ne_bytes(bytes: &[u8]) -> NumericResult<Self> {
        let raw = bytes
            .get(..Self::WIDTH)
            .and_then(|prefix| prefix.try_into().ok())
            .ok_or_else(|| buffer_too_small(Self::WIDTH, bytes.len()))?;
        Ok(f16::from_ne_bytes(raw))
    }

    fn write_ne_bytes(self, out: &mut [u8]) -> NumericResult<()> {
        let actual = out.len();
        let target = out
            .get_mut(..Self::WIDTH)
            .ok_or_else(|| buffer_too_small(Self::WIDTH, actual))?;
        target.copy_from_slice(&self.to_ne_bytes());
        Ok(())
    }

    #[inline]
    fn approx_eq(self, other: Self, tolerance: &ToleranceConfig) -> bool {
        relative_eq(self.to_f64(), other.to_f64(), tolerance.half as f64)
    }
}

impl From<f16> for TaggedValue {
    #[inline]
    fn from(value: f16) -> Self {
        TaggedValue::Float16(value)
    }
}

// ============================================================================
// Bool
// ============================================================================

impl Primitive for bool {
    const TAG: NumericTag = NumericTag::Bool;
    const WIDTH: usize = 1;

    #[inline]
    fn from_f64_truncating(value: f64) -> Self {
        value > 0.0
    }

    #[inline]
    fn to_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }

    #[inline]
    fn to_i128(self) -> Option<i128> {
        Some(self as i128)
    }

    #[inline]
    fn from_i128_wrapping(value: i128) -> Self {
        value > 0
    }

    #[inline]
    fn from_tagged(value: TaggedValue) -> Option<Self> {
        match value {
            TaggedValue::Bool(inner) => Some(inner),
            _ => None,
        }
    }

    #[inline]
    fn into_tagged(self) -> TaggedValue {
        TaggedValue::Bool(self)
    }

    /// Any nonzero byte reads as `true`.
    fn read_ne_bytes(bytes: &[u8]) -> NumericResult<Self> {
        bytes
            .first()
            .map(|&byte| byte > 0)
            .ok_or_else(|| buffer_too_small(Self::WIDTH, bytes.len()))
    }

    fn write_ne_bytes(self, out: &mut [u8]) -> NumericResult<()> {
        let actual = out.len();
        let target = out
            .first_mut()
            .ok_or_else(|| buffer_too_small(Self::WIDTH, actual))?;
        *target = self as u8;
        Ok(())
    }

    #[inline]
    fn approx_eq(self, other: Self, _tolerance: &ToleranceConfig) -> bool {
        self == other
    }
}

impl From<bool> for TaggedValue {
    #[inline]
    fn from(value: bool) -> Self {
        TaggedValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_match_tags() {
        assert_eq!(<bool as Primitive>::WIDTH, NumericTag::Bool.byte_width().unwrap());
        assert_eq!(<f16 as Primitive>::WIDTH, NumericTag::Float16.byte_width().unwrap());
        assert_eq!(<u32 as Primitive>::WIDTH, NumericTag::UInt32.byte_width().unwrap());
        assert_eq!(<i64 as Primitive>::WIDTH, NumericTag::Int64.byte_width().unwrap());
    }

    #[test]
    fn test_truncating_casts() {
        assert_eq!(i32::from_f64_truncating(2.9), 2);
        assert_eq!(i32::from_f64_truncating(-2.9), -2);
        assert_eq!(u16::from_f64_truncating(-5.0), 0);
        assert_eq!(i8::from_f64_truncating(1000.0), i8::MAX);
        assert_eq!(u64::from_f64_truncating(f64::NAN), 0);
        assert!(bool::from_f64_truncating(0.5));
        assert!(!bool::from_f64_truncating(0.0));
        assert!(!bool::from_f64_truncating(-3.0));
    }

    #[test]
    fn test_wrapping_from_integer() {
        assert_eq!(i8::from_i128_wrapping(300), 44);
        assert_eq!(u16::from_i128_wrapping(-1), u16::MAX);
        assert_eq!(u32::from_i128_wrapping(1 << 32), 0);
        assert!(bool::from_i128_wrapping(2));
        assert!(!bool::from_i128_wrapping(-2));
        assert_eq!(f32::from_i128_wrapping(7), 7.0);
    }

    #[test]
    fn test_byte_round_trip() {
        let mut buffer = [0u8; 8];
        (-123_456i32).write_ne_bytes(&mut buffer).unwrap();
        assert_eq!(i32::read_ne_bytes(&buffer).unwrap(), -123_456);
        assert_eq!(&buffer[..4], &(-123_456i32).to_ne_bytes());

        f16::from_f32(1.5).write_ne_bytes(&mut buffer).unwrap();
        assert_eq!(f16::read_ne_bytes(&buffer).unwrap(), f16::from_f32(1.5));
    }

    #[test]
    fn test_bool_reads_any_nonzero_byte() {
        assert!(bool::read_ne_bytes(&[7]).unwrap());
        assert!(!bool::read_ne_bytes(&[0]).unwrap());

        let mut out = [9u8];
        true.write_ne_bytes(&mut out).unwrap();
        assert_eq!(out, [1]);
    }

    #[test]
    fn test_short_buffers_are_rejected() {
        assert_eq!(
            u64::read_ne_bytes(&[0u8; 3]),
            Err(NumericError::BufferTooSmall {
                needed: 8,
                actual: 3
            })
        );
        assert_eq!(
            true.write_ne_bytes(&mut []),
            Err(NumericError::BufferTooSmall {
                needed: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_tagged_bridge() {
        let value = 42u16.into_tagged();
        assert_eq!(value, TaggedValue::UInt16(42));
        assert_eq!(u16::from_tagged(value), Some(42));
        assert_eq!(i16::from_tagged(value), None);
        assert_eq!(TaggedValue::from(1.5f64), TaggedValue::Float64(1.5));
    }

    #[test]
    fn test_approx_eq() {
        let tolerance = ToleranceConfig::default();
        assert!(1.0f64.approx_eq(1.0 + f64::EPSILON / 2.0, &tolerance));
        assert!(!1.0f64.approx_eq(1.0001, &tolerance));
        assert!(1e10f32.approx_eq(1e10 + 512.0, &tolerance));
        assert!(!5i32.approx_eq(6, &tolerance));
        assert!(f16::from_f32(100.0).approx_eq(f16::from_f32(100.0), &tolerance));
    }
}
