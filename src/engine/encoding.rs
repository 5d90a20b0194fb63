// ============================================================================
// Byte Encoding
// Appends tagged values to growable byte buffers in host byte order
// ============================================================================

use arrayvec::ArrayVec;

use crate::domain::{NumericTag, TaggedValue};
use crate::numeric::NumericResult;

/// Append the host-order bytes of `value`.
#[inline]
pub fn append_value<B: Extend<u8>>(buffer: &mut B, value: TaggedValue) {
    buffer.extend(value.to_ne_bytes());
}

/// Narrow a double literal into `tag` and append its bytes.
///
/// # Errors
/// `UnsupportedKind` for `Absent`; nothing is appended in that case.
pub fn append_f64<B: Extend<u8>>(buffer: &mut B, tag: NumericTag, value: f64) -> NumericResult<()> {
    let value = TaggedValue::from_f64(tag, value)?;
    append_value(buffer, value);
    Ok(())
}

/// Copy one encoded value of `tag` from the front of `source`.
pub fn append_bytes<B: Extend<u8>>(buffer: &mut B, tag: NumericTag, source: &[u8]) -> NumericResult<()> {
    let value = TaggedValue::read(tag, source)?;
    append_value(buffer, value);
    Ok(())
}

/// Encoded bytes of a double literal narrowed into `tag`.
///
/// Unlike [`TaggedValue::from_f64`], which keeps only positive values as
/// `true`, a bool here is `true` for any nonzero literal (negatives and NaN
/// included).
///
/// # Example
/// ```
/// use generic_math::domain::NumericTag;
/// use generic_math::engine::byte_array;
///
/// let bytes = byte_array(NumericTag::Int16, 258.0).unwrap();
/// assert_eq!(bytes.as_slice(), &258i16.to_ne_bytes());
/// ```
pub fn byte_array(tag: NumericTag, value: f64) -> NumericResult<ArrayVec<u8, { NumericTag::MAX_WIDTH }>> {
    let value = match tag {
        NumericTag::Bool => TaggedValue::Bool(value != 0.0),
        _ => TaggedValue::from_f64(tag, value)?,
    };
    Ok(value.to_ne_bytes())
}
