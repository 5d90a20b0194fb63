// ============================================================================
// Generic Math Library
// Extended-range decimal floats and tag-dispatched primitive arithmetic
// ============================================================================

//! # Generic Math
//!
//! Arithmetic over values whose encoding is only known at runtime, plus an
//! extended-range decimal float for magnitudes far outside `f64`.
//!
//! ## Features
//!
//! - **BigDouble**: normalized `f64` mantissa with an `i64` decimal exponent
//! - **Tag dispatch**: one generic implementation per operation, selected by a
//!   `NumericTag` across bool, 8/16/32/64-bit integers and 16/32/64-bit floats
//! - **Byte views**: width-checked `TaggedSlot` over caller-owned storage
//! - **Packed records**: heterogeneous fields in one contiguous byte buffer
//! - **Change detection**: every in-place update reports whether it changed
//!
//! ## Example
//!
//! ```rust
//! use generic_math::prelude::*;
//!
//! // Operate on storage described only by a runtime tag
//! let mut record = PackedRecord::with_layout(&[NumericTag::Int32, NumericTag::Float64]).unwrap();
//! let mut slot = record.slot(0).unwrap();
//! apply_f64(MathOperator::Add, &mut slot, 41.0).unwrap();
//! apply_f64(MathOperator::Add, &mut slot, 1.0).unwrap();
//! assert_eq!(record.get(0).unwrap(), TaggedValue::Int32(42));
//!
//! // Values beyond the f64 range
//! let googol = BigDouble::new(1.0, 100);
//! let huge = googol.powi(50);
//! assert_eq!(huge.exponent(), 5000);
//! println!("{}", huge);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Comparison, FormatConfig, MathFunction, MathOperator, NumericTag, PackedRecord,
        TaggedSlot, TaggedValue, ToleranceConfig,
    };
    pub use crate::engine::{
        apply, apply_bytes, apply_clamped, apply_f64, apply_function, apply_function_slot,
        apply_value, apply_values, compare, compare_bytes, process_clamped,
        process_return_change, recompute_scaled,
    };
    pub use crate::interfaces::{MathFunctions, Primitive, ValueCalculator};
    pub use crate::numeric::{BigDouble, NumericError, NumericResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::engine::{append_f64, byte_array};

    #[test]
    fn test_packed_record_end_to_end() {
        let layout = [
            NumericTag::Bool,
            NumericTag::UInt16,
            NumericTag::Float32,
            NumericTag::Int64,
        ];
        let mut record = PackedRecord::with_layout(&layout).unwrap();
        assert_eq!(record.byte_len(), 1 + 2 + 4 + 8);

        {
            let mut slot = record.slot(1).unwrap();
            assert!(apply_f64(MathOperator::Set, &mut slot, 600.0).unwrap());
            assert!(apply_f64(MathOperator::Multiply, &mut slot, 200.0).unwrap());
        }
        // 120_000 wraps in u16
        assert_eq!(record.get(1).unwrap(), TaggedValue::UInt16(54_464));

        {
            let mut slot = record.slot(3).unwrap();
            let changed = apply_clamped(
                MathOperator::Subtract,
                &mut slot,
                TaggedValue::Int64(10),
                TaggedValue::Int64(-5),
                TaggedValue::Int64(5),
            )
            .unwrap();
            assert!(changed);
        }
        assert_eq!(record.get(3).unwrap(), TaggedValue::Int64(-5));

        {
            let mut slot = record.slot(2).unwrap();
            recompute_scaled(&mut slot, TaggedValue::Float32(1.25), 4, &ToleranceConfig::default())
                .unwrap();
        }
        assert!(compare(Comparison::Equal, record.get(2).unwrap(), TaggedValue::Float32(5.0)).unwrap());

        // Untouched field keeps its zero encoding
        assert_eq!(record.get(0).unwrap(), TaggedValue::Bool(false));
    }

    #[test]
    fn test_bytes_agree_with_values() {
        let mut buffer = Vec::new();
        for tag in NumericTag::PRIMITIVES {
            append_f64(&mut buffer, tag, 3.0).unwrap();
        }

        let mut offset = 0;
        for tag in NumericTag::PRIMITIVES {
            let width = tag.byte_width().unwrap();
            let expected = byte_array(tag, 3.0).unwrap();
            assert_eq!(&buffer[offset..offset + width], expected.as_slice(), "{}", tag);

            let value = TaggedValue::read(tag, &buffer[offset..]).unwrap();
            assert!(compare_bytes(Comparison::Equal, tag, &buffer[offset..], &expected).unwrap());
            assert_eq!(value, TaggedValue::from_f64(tag, 3.0).unwrap());
            offset += width;
        }
        assert_eq!(offset, buffer.len());
    }

    #[test]
    fn test_big_double_shares_generic_core() {
        let mut total = BigDouble::ZERO;
        for _ in 0..3 {
            process_return_change(MathOperator::Add, &mut total, BigDouble::new(5.0, 400)).unwrap();
        }
        assert_eq!(total, BigDouble::new(1.5, 401));

        let mut bounded = BigDouble::ONE;
        process_clamped(
            MathOperator::Multiply,
            &mut bounded,
            BigDouble::new(1.0, 1000),
            BigDouble::ZERO,
            BigDouble::new(1.0, 500),
        )
        .unwrap();
        assert_eq!(bounded, BigDouble::new(1.0, 500));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let value = TaggedValue::UInt32(7);
        let json = serde_json::to_string(&value).unwrap();
        let back: TaggedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let big = BigDouble::new(2.5, 1234);
        let json = serde_json::to_string(&big).unwrap();
        let back: BigDouble = serde_json::from_str(&json).unwrap();
        assert_eq!(back, big);
    }
}
