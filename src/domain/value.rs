// ============================================================================
// Tagged Value
// A primitive number carried together with its encoding
// ============================================================================

use super::tag::{dispatch_tag, NumericTag};
use crate::interfaces::Primitive;
use crate::numeric::{NumericError, NumericResult};
use arrayvec::ArrayVec;
use half::f16;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One value of any dispatchable encoding.
///
/// The variant is the tag, so a payload can never be read under the wrong
/// encoding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaggedValue {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    UInt16(u16),
    Float16(f16),
    Float32(f32),
    Int32(i32),
    UInt32(u32),
    Float64(f64),
    Int64(i64),
    UInt64(u64),
}

impl TaggedValue {
    /// Encoding of the payload.
    pub fn tag(&self) -> NumericTag {
        match self {
            TaggedValue::Bool(_) => NumericTag::Bool,
            TaggedValue::Int8(_) => NumericTag::Int8,
            TaggedValue::Int16(_) => NumericTag::Int16,
            TaggedValue::UInt16(_) => NumericTag::UInt16,
            TaggedValue::Float16(_) => NumericTag::Float16,
            TaggedValue::Float32(_) => NumericTag::Float32,
            TaggedValue::Int32(_) => NumericTag::Int32,
            TaggedValue::UInt32(_) => NumericTag::UInt32,
            TaggedValue::Float64(_) => NumericTag::Float64,
            TaggedValue::Int64(_) => NumericTag::Int64,
            TaggedValue::UInt64(_) => NumericTag::UInt64,
        }
    }

    /// Narrow a double literal into `tag`'s encoding.
    ///
    /// # Example
    /// ```
    /// use generic_math::domain::{NumericTag, TaggedValue};
    ///
    /// let v = TaggedValue::from_f64(NumericTag::Int16, -7.9).unwrap();
    /// assert_eq!(v, TaggedValue::Int16(-7));
    /// ```
    pub fn from_f64(tag: NumericTag, value: f64) -> NumericResult<Self> {
        dispatch_tag!(tag, P => Ok(P::from_f64_truncating(value).into_tagged()))
    }

    /// Decode `tag`'s encoding from the front of `bytes`, in host byte order.
    ///
    /// # Errors
    /// - `UnsupportedKind` for `Absent`
    /// - `BufferTooSmall` when `bytes` is shorter than the tag's width
    pub fn read(tag: NumericTag, bytes: &[u8]) -> NumericResult<Self> {
        dispatch_tag!(tag, P => P::read_ne_bytes(bytes).map(Primitive::into_tagged))
    }

    /// Encode into the front of `out`, in host byte order.
    pub fn write(self, out: &mut [u8]) -> NumericResult<()> {
        match self {
            TaggedValue::Bool(v) => v.write_ne_bytes(out),
            TaggedValue::Int8(v) => v.write_ne_bytes(out),
            TaggedValue::Int16(v) => v.write_ne_bytes(out),
            TaggedValue::UInt16(v) => v.write_ne_bytes(out),
            TaggedValue::Float16(v) => v.write_ne_bytes(out),
            TaggedValue::Float32(v) => v.write_ne_bytes(out),
            TaggedValue::Int32(v) => v.write_ne_bytes(out),
            TaggedValue::UInt32(v) => v.write_ne_bytes(out),
            TaggedValue::Float64(v) => v.write_ne_bytes(out),
            TaggedValue::Int64(v) => v.write_ne_bytes(out),
            TaggedValue::UInt64(v) => v.write_ne_bytes(out),
        }
    }

    /// Host-order bytes of the payload, exactly `tag().byte_width()` long.
    ///
    /// No endianness conversion is applied; bytes written on one platform
    /// only decode on platforms with the same byte order. A bool encodes as
    /// a single `0` or `1` byte; which numbers count as `true` is decided
    /// earlier, by whichever constructor produced the value.
    pub fn to_ne_bytes(self) -> ArrayVec<u8, { NumericTag::MAX_WIDTH }> {
        let mut raw = [0u8; NumericTag::MAX_WIDTH];
        let mut bytes = ArrayVec::new();
        // every payload fits MAX_WIDTH, so the write cannot fail
        if self.write(&mut raw).is_ok() {
            bytes.extend(raw.iter().copied().take(self.width()));
        }
        bytes
    }

    /// Storage width of the payload in bytes.
    pub fn width(&self) -> usize {
        match self {
            TaggedValue::Bool(_) | TaggedValue::Int8(_) => 1,
            TaggedValue::Int16(_) | TaggedValue::UInt16(_) | TaggedValue::Float16(_) => 2,
            TaggedValue::Float32(_) | TaggedValue::Int32(_) | TaggedValue::UInt32(_) => 4,
            TaggedValue::Float64(_) | TaggedValue::Int64(_) | TaggedValue::UInt64(_) => 8,
        }
    }

    /// Convert into another encoding.
    ///
    /// Integer and bool sources narrow by wrapping; float sources narrow by
    /// truncating cast.
    pub fn cast(self, tag: NumericTag) -> NumericResult<Self> {
        let integer = self.to_i128();
        let float = self.to_f64();
        dispatch_tag!(tag, P => Ok(match integer {
            Some(value) => P::from_i128_wrapping(value),
            None => P::from_f64_truncating(float),
        }
        .into_tagged()))
    }

    /// Payload widened to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            TaggedValue::Bool(v) => v.to_f64(),
            TaggedValue::Int8(v) => v as f64,
            TaggedValue::Int16(v) => v as f64,
            TaggedValue::UInt16(v) => v as f64,
            TaggedValue::Float16(v) => v.to_f64(),
            TaggedValue::Float32(v) => v as f64,
            TaggedValue::Int32(v) => v as f64,
            TaggedValue::UInt32(v) => v as f64,
            TaggedValue::Float64(v) => v,
            TaggedValue::Int64(v) => v as f64,
            TaggedValue::UInt64(v) => v as f64,
        }
    }

    fn to_i128(self) -> Option<i128> {
        match self {
            TaggedValue::Bool(v) => Some(v as i128),
            TaggedValue::Int8(v) => Some(v as i128),
            TaggedValue::Int16(v) => Some(v as i128),
            TaggedValue::UInt16(v) => Some(v as i128),
            TaggedValue::Int32(v) => Some(v as i128),
            TaggedValue::UInt32(v) => Some(v as i128),
            TaggedValue::Int64(v) => Some(v as i128),
            TaggedValue::UInt64(v) => Some(v as i128),
            TaggedValue::Float16(_) | TaggedValue::Float32(_) | TaggedValue::Float64(_) => None,
        }
    }

    /// Typed payload.
    ///
    /// # Errors
    /// `TagMismatch` if the payload is not a `P`.
    pub fn get<P: Primitive>(self) -> NumericResult<P> {
        P::from_tagged(self).ok_or(NumericError::TagMismatch {
            expected: P::TAG,
            actual: self.tag(),
        })
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaggedValue::Bool(v) => write!(f, "{}", v),
            TaggedValue::Int8(v) => write!(f, "{}", v),
            TaggedValue::Int16(v) => write!(f, "{}", v),
            TaggedValue::UInt16(v) => write!(f, "{}", v),
            TaggedValue::Float16(v) => write!(f, "{}", v),
            TaggedValue::Float32(v) => write!(f, "{}", v),
            TaggedValue::Int32(v) => write!(f, "{}", v),
            TaggedValue::UInt32(v) => write!(f, "{}", v),
            TaggedValue::Float64(v) => write!(f, "{}", v),
            TaggedValue::Int64(v) => write!(f, "{}", v),
            TaggedValue::UInt64(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_compact() {
        assert!(std::mem::size_of::<TaggedValue>() <= 16);
    }

    #[test]
    fn test_from_f64_truncates() {
        assert_eq!(
            TaggedValue::from_f64(NumericTag::Int32, 3.99).unwrap(),
            TaggedValue::Int32(3)
        );
        assert_eq!(
            TaggedValue::from_f64(NumericTag::UInt16, -1.0).unwrap(),
            TaggedValue::UInt16(0)
        );
        assert_eq!(
            TaggedValue::from_f64(NumericTag::Bool, 0.25).unwrap(),
            TaggedValue::Bool(true)
        );
        assert_eq!(
            TaggedValue::from_f64(NumericTag::Float32, 0.5).unwrap(),
            TaggedValue::Float32(0.5)
        );
        assert_eq!(
            TaggedValue::from_f64(NumericTag::Absent, 1.0),
            Err(NumericError::UnsupportedKind(0))
        );
    }

    #[test]
    fn test_every_tag_round_trips_through_bytes() {
        for tag in NumericTag::PRIMITIVES {
            let value = TaggedValue::from_f64(tag, 5.0).unwrap();
            assert_eq!(value.tag(), tag);

            let bytes = value.to_ne_bytes();
            assert_eq!(bytes.len(), tag.byte_width().unwrap());
            assert_eq!(TaggedValue::read(tag, &bytes).unwrap(), value);
        }
    }

    #[test]
    fn test_read_checks_length() {
        assert_eq!(
            TaggedValue::read(NumericTag::Float64, &[0u8; 4]),
            Err(NumericError::BufferTooSmall {
                needed: 8,
                actual: 4
            })
        );

        // longer storage is fine, only the prefix is read
        let mut storage = [0u8; 6];
        storage[..2].copy_from_slice(&300i16.to_ne_bytes());
        assert_eq!(
            TaggedValue::read(NumericTag::Int16, &storage).unwrap(),
            TaggedValue::Int16(300)
        );
    }

    #[test]
    fn test_cast_integers_wrap() {
        let v = TaggedValue::Int32(300);
        assert_eq!(v.cast(NumericTag::Int8).unwrap(), TaggedValue::Int8(44));
        assert_eq!(
            TaggedValue::Int64(-1).cast(NumericTag::UInt16).unwrap(),
            TaggedValue::UInt16(u16::MAX)
        );
        assert_eq!(
            TaggedValue::UInt64(u64::MAX).cast(NumericTag::Float64).unwrap(),
            TaggedValue::Float64(u64::MAX as f64)
        );
    }

    #[test]
    fn test_cast_floats_truncate() {
        assert_eq!(
            TaggedValue::Float64(-2.7).cast(NumericTag::Int32).unwrap(),
            TaggedValue::Int32(-2)
        );
        assert_eq!(
            TaggedValue::Float32(1e10).cast(NumericTag::Int16).unwrap(),
            TaggedValue::Int16(i16::MAX)
        );
        assert_eq!(
            TaggedValue::Float64(0.1).cast(NumericTag::Bool).unwrap(),
            TaggedValue::Bool(true)
        );
        assert_eq!(
            TaggedValue::Bool(true).cast(NumericTag::Float16).unwrap(),
            TaggedValue::Float16(f16::ONE)
        );
    }

    #[test]
    fn test_get_typed_payload() {
        let v = TaggedValue::UInt32(9);
        assert_eq!(v.get::<u32>(), Ok(9));
        assert_eq!(
            v.get::<i32>(),
            Err(NumericError::TagMismatch {
                expected: NumericTag::Int32,
                actual: NumericTag::UInt32,
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TaggedValue::Int32(-5).to_string(), "-5");
        assert_eq!(TaggedValue::Bool(true).to_string(), "true");
        assert_eq!(TaggedValue::Float64(2.5).to_string(), "2.5");
    }
}
