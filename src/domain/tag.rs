// ============================================================================
// Numeric Tag
// Runtime discriminant naming the primitive encoding of a stored value
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Primitive encoding of a tagged value.
///
/// The discriminants are stable and may be persisted; `Absent` marks a field
/// with no encoding and is rejected by every dispatch path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericTag {
    Absent = 0,
    Bool = 1,
    Int8 = 2,
    Int16 = 3,
    UInt16 = 4,
    Float16 = 5,
    Float32 = 6,
    Int32 = 7,
    UInt32 = 8,
    Float64 = 9,
    Int64 = 10,
    UInt64 = 11,
}

impl NumericTag {
    /// Every dispatchable encoding, in discriminant order.
    pub const PRIMITIVES: [Self; 11] = [
        NumericTag::Bool,
        NumericTag::Int8,
        NumericTag::Int16,
        NumericTag::UInt16,
        NumericTag::Float16,
        NumericTag::Float32,
        NumericTag::Int32,
        NumericTag::UInt32,
        NumericTag::Float64,
        NumericTag::Int64,
        NumericTag::UInt64,
    ];

    /// Widest encoding in bytes.
    pub const MAX_WIDTH: usize = 8;

    /// Decode a stored discriminant.
    pub fn from_raw(raw: u8) -> NumericResult<Self> {
        match raw {
            0 => Ok(NumericTag::Absent),
            1 => Ok(NumericTag::Bool),
            2 => Ok(NumericTag::Int8),
            3 => Ok(NumericTag::Int16),
            4 => Ok(NumericTag::UInt16),
            5 => Ok(NumericTag::Float16),
            6 => Ok(NumericTag::Float32),
            7 => Ok(NumericTag::Int32),
            8 => Ok(NumericTag::UInt32),
            9 => Ok(NumericTag::Float64),
            10 => Ok(NumericTag::Int64),
            11 => Ok(NumericTag::UInt64),
            _ => Err(NumericError::UnsupportedKind(raw)),
        }
    }

    #[inline]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Storage width in bytes.
    ///
    /// # Errors
    /// `UnsupportedKind` for `Absent`.
    pub fn byte_width(self) -> NumericResult<usize> {
        match self {
            NumericTag::Absent => Err(NumericError::UnsupportedKind(self.as_raw())),
            NumericTag::Bool | NumericTag::Int8 => Ok(1),
            NumericTag::Int16 | NumericTag::UInt16 | NumericTag::Float16 => Ok(2),
            NumericTag::Float32 | NumericTag::Int32 | NumericTag::UInt32 => Ok(4),
            NumericTag::Float64 | NumericTag::Int64 | NumericTag::UInt64 => Ok(8),
        }
    }

    pub fn is_present(self) -> bool {
        self != NumericTag::Absent
    }

    pub fn is_float(self) -> bool {
        matches!(
            self,
            NumericTag::Float16 | NumericTag::Float32 | NumericTag::Float64
        )
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            NumericTag::Int8
                | NumericTag::Int16
                | NumericTag::UInt16
                | NumericTag::Int32
                | NumericTag::UInt32
                | NumericTag::Int64
                | NumericTag::UInt64
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            NumericTag::Absent => "absent",
            NumericTag::Bool => "bool",
            NumericTag::Int8 => "int8",
            NumericTag::Int16 => "int16",
            NumericTag::UInt16 => "uint16",
            NumericTag::Float16 => "float16",
            NumericTag::Float32 => "float32",
            NumericTag::Int32 => "int32",
            NumericTag::UInt32 => "uint32",
            NumericTag::Float64 => "float64",
            NumericTag::Int64 => "int64",
            NumericTag::UInt64 => "uint64",
        }
    }
}

impl TryFrom<u8> for NumericTag {
    type Error = NumericError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        NumericTag::from_raw(raw)
    }
}

impl fmt::Display for NumericTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Tag Dispatch
// ============================================================================

/// Run `$body` with `$ty` bound to the Rust type stored under `$tag`.
///
/// `$body` must evaluate to a `NumericResult`; `Absent` short-circuits to
/// `UnsupportedKind`.
macro_rules! dispatch_tag {
    ($tag:expr, $ty:ident => $body:expr) => {
        match $tag {
            $crate::domain::NumericTag::Absent => Err(
                $crate::numeric::NumericError::UnsupportedKind(
                    $crate::domain::NumericTag::Absent.as_raw(),
                ),
            ),
            $crate::domain::NumericTag::Bool => {
                type $ty = bool;
                $body
            }
            $crate::domain::NumericTag::Int8 => {
                type $ty = i8;
                $body
            }
            $crate::domain::NumericTag::Int16 => {
                type $ty = i16;
                $body
            }
            $crate::domain::NumericTag::UInt16 => {
                type $ty = u16;
                $body
            }
            $crate::domain::NumericTag::Float16 => {
                type $ty = ::half::f16;
                $body
            }
            $crate::domain::NumericTag::Float32 => {
                type $ty = f32;
                $body
            }
            $crate::domain::NumericTag::Int32 => {
                type $ty = i32;
                $body
            }
            $crate::domain::NumericTag::UInt32 => {
                type $ty = u32;
                $body
            }
            $crate::domain::NumericTag::Float64 => {
                type $ty = f64;
                $body
            }
            $crate::domain::NumericTag::Int64 => {
                type $ty = i64;
                $body
            }
            $crate::domain::NumericTag::UInt64 => {
                type $ty = u64;
                $body
            }
        }
    };
}

pub(crate) use dispatch_tag;
