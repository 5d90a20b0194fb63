// ============================================================================
// Packed Record
// Contiguous storage for a sequence of heterogeneous tagged fields
// ============================================================================

use super::slot::TaggedSlot;
use super::tag::NumericTag;
use super::value::TaggedValue;
use crate::numeric::{NumericError, NumericResult};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of one field inside a [`PackedRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldLayout {
    pub tag: NumericTag,
    pub offset: usize,
}

/// Fields packed back to back with no padding, in host byte order.
///
/// Small records stay inline; larger ones spill to the heap.
///
/// # Example
/// ```
/// use generic_math::domain::{NumericTag, PackedRecord, TaggedValue};
///
/// let mut record = PackedRecord::new();
/// record.push(TaggedValue::Int32(10));
/// record.push(TaggedValue::Float32(0.5));
///
/// assert_eq!(record.byte_len(), 8);
/// assert_eq!(record.get(1).unwrap(), TaggedValue::Float32(0.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedRecord {
    fields: SmallVec<[FieldLayout; 8]>,
    bytes: SmallVec<[u8; 64]>,
}

impl PackedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-filled record with one field per tag.
    ///
    /// # Errors
    /// `UnsupportedKind` if any tag is `Absent`.
    pub fn with_layout(tags: &[NumericTag]) -> NumericResult<Self> {
        let mut record = Self::new();
        for &tag in tags {
            let width = tag.byte_width()?;
            record.fields.push(FieldLayout {
                tag,
                offset: record.bytes.len(),
            });
            record.bytes.resize(record.bytes.len() + width, 0);
        }
        Ok(record)
    }

    /// Append a field; returns its index.
    pub fn push(&mut self, value: TaggedValue) -> usize {
        self.fields.push(FieldLayout {
            tag: value.tag(),
            offset: self.bytes.len(),
        });
        self.bytes.extend_from_slice(&value.to_ne_bytes());
        self.fields.len() - 1
    }

    /// Append a double literal narrowed to `tag`; returns the field index.
    pub fn push_f64(&mut self, tag: NumericTag, value: f64) -> NumericResult<usize> {
        Ok(self.push(TaggedValue::from_f64(tag, value)?))
    }

    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total packed size in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn field(&self, index: usize) -> NumericResult<FieldLayout> {
        self.fields
            .get(index)
            .copied()
            .ok_or(NumericError::MissingField(index))
    }

    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    /// Decode field `index`.
    pub fn get(&self, index: usize) -> NumericResult<TaggedValue> {
        let field = self.field(index)?;
        TaggedValue::read(field.tag, &self.bytes[field.offset..])
    }

    /// Overwrite field `index`; `value` must carry the field's encoding.
    pub fn set(&mut self, index: usize, value: TaggedValue) -> NumericResult<()> {
        self.slot(index)?.set(value)
    }

    /// Mutable view of field `index` for in-place dispatch.
    pub fn slot(&mut self, index: usize) -> NumericResult<TaggedSlot<'_>> {
        let field = self.field(index)?;
        TaggedSlot::new(field.tag, &mut self.bytes[field.offset..])
    }

    /// Decode every field in order.
    pub fn values(&self) -> impl Iterator<Item = NumericResult<TaggedValue>> + '_ {
        (0..self.len()).map(move |index| self.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_packs_without_padding() {
        let mut record = PackedRecord::new();
        assert!(record.is_empty());

        assert_eq!(record.push(TaggedValue::Bool(true)), 0);
        assert_eq!(record.push(TaggedValue::Float64(1.25)), 1);
        assert_eq!(record.push(TaggedValue::UInt16(7)), 2);

        assert_eq!(record.len(), 3);
        assert_eq!(record.byte_len(), 1 + 8 + 2);
        assert_eq!(record.field(1).unwrap().offset, 1);
        assert_eq!(record.field(2).unwrap().offset, 9);
    }

    #[test]
    fn test_get_and_set_fields() {
        let mut record = PackedRecord::new();
        record.push(TaggedValue::Int8(-1));
        record.push(TaggedValue::Int32(1000));

        record.set(1, TaggedValue::Int32(2000)).unwrap();
        assert_eq!(record.get(0).unwrap(), TaggedValue::Int8(-1));
        assert_eq!(record.get(1).unwrap(), TaggedValue::Int32(2000));

        assert_eq!(
            record.set(1, TaggedValue::Int64(1)),
            Err(NumericError::TagMismatch {
                expected: NumericTag::Int32,
                actual: NumericTag::Int64,
            })
        );
        assert_eq!(record.get(5), Err(NumericError::MissingField(5)));
    }

    #[test]
    fn test_with_layout_zero_fills() {
        let record =
            PackedRecord::with_layout(&[NumericTag::Float16, NumericTag::UInt64]).unwrap();
        assert_eq!(record.byte_len(), 10);

        let values: Vec<TaggedValue> = record.values().collect::<NumericResult<_>>().unwrap();
        assert_eq!(
            values,
            vec![
                TaggedValue::Float16(half::f16::ZERO),
                TaggedValue::UInt64(0)
            ]
        );

        assert_eq!(
            PackedRecord::with_layout(&[NumericTag::Absent]),
            Err(NumericError::UnsupportedKind(0))
        );
    }

    #[test]
    fn test_slot_writes_into_record() {
        let mut record = PackedRecord::new();
        record.push_f64(NumericTag::UInt32, 5.9).unwrap();

        record.slot(0).unwrap().write(9u32).unwrap();
        assert_eq!(record.get(0).unwrap(), TaggedValue::UInt32(9));
        assert_eq!(record.as_bytes(), &9u32.to_ne_bytes());
    }
}
