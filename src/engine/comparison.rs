// ============================================================================
// Tagged Comparison
// Relational tests on tagged values and raw byte encodings
// ============================================================================

use crate::domain::tag::dispatch_tag;
use crate::domain::{Comparison, NumericTag, TaggedValue};
use crate::interfaces::Primitive;
use crate::numeric::NumericResult;

/// Evaluate `lhs cmp rhs`. Both sides must share an encoding.
///
/// Booleans order as `false < true`.
pub fn compare(cmp: Comparison, lhs: TaggedValue, rhs: TaggedValue) -> NumericResult<bool> {
    dispatch_tag!(lhs.tag(), P => {
        let lhs = lhs.get::<P>()?;
        let rhs = rhs.get::<P>()?;
        Ok(cmp.evaluate(&lhs, &rhs))
    })
}

/// Evaluate `lhs cmp rhs` with a double right-hand side narrowed into the
/// left-hand encoding first.
pub fn compare_f64(cmp: Comparison, lhs: TaggedValue, rhs: f64) -> NumericResult<bool> {
    dispatch_tag!(lhs.tag(), P => {
        let lhs = lhs.get::<P>()?;
        Ok(cmp.evaluate(&lhs, &P::from_f64_truncating(rhs)))
    })
}

/// Decode both operands under `tag` and compare.
///
/// # Errors
/// - `UnsupportedKind` for `Absent`
/// - `BufferTooSmall` when either side is narrower than the tag
pub fn compare_bytes(cmp: Comparison, tag: NumericTag, lhs: &[u8], rhs: &[u8]) -> NumericResult<bool> {
    dispatch_tag!(tag, P => {
        let lhs = P::read_ne_bytes(lhs)?;
        let rhs = P::read_ne_bytes(rhs)?;
        Ok(cmp.evaluate(&lhs, &rhs))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_compare_same_encoding() {
        assert!(compare(Comparison::Less, TaggedValue::Int32(-1), TaggedValue::Int32(1)).unwrap());
        assert!(compare(Comparison::Equal, TaggedValue::UInt64(7), TaggedValue::UInt64(7)).unwrap());
        assert!(!compare(Comparison::Greater, TaggedValue::Float32(1.0), TaggedValue::Float32(1.0)).unwrap());
    }

    #[test]
    fn test_compare_rejects_mixed_encodings() {
        let result = compare(Comparison::Equal, TaggedValue::Int16(1), TaggedValue::Int32(1));
        assert_eq!(
            result,
            Err(NumericError::TagMismatch {
                expected: NumericTag::Int16,
                actual: NumericTag::Int32,
            })
        );
    }

    #[test]
    fn test_bool_ordering() {
        let t = TaggedValue::Bool(true);
        let f = TaggedValue::Bool(false);

        assert!(compare(Comparison::Less, f, t).unwrap());
        assert!(compare(Comparison::GreaterOrEqual, t, t).unwrap());
        assert!(compare(Comparison::NotEqual, t, f).unwrap());
    }

    #[test]
    fn test_nan_is_unordered() {
        let nan = TaggedValue::Float64(f64::NAN);
        let one = TaggedValue::Float64(1.0);

        assert!(compare(Comparison::NotEqual, nan, nan).unwrap());
        assert!(!compare(Comparison::Equal, nan, nan).unwrap());
        assert!(!compare(Comparison::Less, nan, one).unwrap());
        assert!(!compare(Comparison::GreaterOrEqual, nan, one).unwrap());
    }

    #[test]
    fn test_compare_f64_narrows() {
        assert!(compare_f64(Comparison::Equal, TaggedValue::Int8(3), 3.7).unwrap());
        assert!(compare_f64(Comparison::Greater, TaggedValue::Bool(true), 0.0).unwrap());
    }

    #[test]
    fn test_compare_bytes() {
        let a = 300u16.to_ne_bytes();
        let b = 20u16.to_ne_bytes();

        assert!(compare_bytes(Comparison::Greater, NumericTag::UInt16, &a, &b).unwrap());
        assert_eq!(
            compare_bytes(Comparison::Equal, NumericTag::Absent, &a, &b),
            Err(NumericError::UnsupportedKind(0))
        );
        assert_eq!(
            compare_bytes(Comparison::Equal, NumericTag::Int32, &a, &b),
            Err(NumericError::BufferTooSmall { needed: 4, actual: 2 })
        );
    }
}
