// ============================================================================
// Tagged Slot
// Width-checked mutable view over caller-owned storage
// ============================================================================

use super::tag::NumericTag;
use super::value::TaggedValue;
use crate::interfaces::Primitive;
use crate::numeric::{NumericError, NumericResult};

/// A tag plus exactly `tag.byte_width()` bytes of caller storage.
///
/// The mutable borrow guarantees nothing else reads or writes the bytes for
/// the lifetime of the slot.
#[derive(Debug)]
pub struct TaggedSlot<'a> {
    tag: NumericTag,
    bytes: &'a mut [u8],
}

impl<'a> TaggedSlot<'a> {
    /// View the front of `storage` as one value of `tag`.
    ///
    /// # Errors
    /// - `UnsupportedKind` for `Absent`
    /// - `BufferTooSmall` when `storage` is shorter than the tag's width
    pub fn new(tag: NumericTag, storage: &'a mut [u8]) -> NumericResult<Self> {
        let needed = tag.byte_width()?;
        let actual = storage.len();
        let bytes = storage
            .get_mut(..needed)
            .ok_or(NumericError::BufferTooSmall { needed, actual })?;

        Ok(Self { tag, bytes })
    }

    #[inline]
    pub fn tag(&self) -> NumericTag {
        self.tag
    }

    /// Raw bytes in host byte order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    /// Decode the current value.
    pub fn get(&self) -> NumericResult<TaggedValue> {
        TaggedValue::read(self.tag, &*self.bytes)
    }

    /// Overwrite with `value`, which must carry the slot's encoding.
    pub fn set(&mut self, value: TaggedValue) -> NumericResult<()> {
        self.check_tag(value.tag())?;
        value.write(&mut *self.bytes)
    }

    /// Decode as `P`.
    pub fn read<P: Primitive>(&self) -> NumericResult<P> {
        self.check_tag(P::TAG)?;
        P::read_ne_bytes(&*self.bytes)
    }

    /// Encode `value` as `P`.
    pub fn write<P: Primitive>(&mut self, value: P) -> NumericResult<()> {
        self.check_tag(P::TAG)?;
        value.write_ne_bytes(&mut *self.bytes)
    }

    /// Shorter-lived slot over the same bytes.
    pub fn reborrow(&mut self) -> TaggedSlot<'_> {
        TaggedSlot {
            tag: self.tag,
            bytes: &mut *self.bytes,
        }
    }

    #[inline]
    fn check_tag(&self, actual: NumericTag) -> NumericResult<()> {
        if actual != self.tag {
            return Err(NumericError::TagMismatch {
                expected: self.tag,
                actual,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_is_exact_width() {
        let mut storage = [0u8; 16];
        let slot = TaggedSlot::new(NumericTag::UInt32, &mut storage).unwrap();
        assert_eq!(slot.as_bytes().len(), 4);
        assert_eq!(slot.tag(), NumericTag::UInt32);
    }

    #[test]
    fn test_slot_rejects_short_storage() {
        let mut storage = [0u8; 3];
        assert_eq!(
            TaggedSlot::new(NumericTag::Float64, &mut storage).unwrap_err(),
            NumericError::BufferTooSmall {
                needed: 8,
                actual: 3
            }
        );
        assert_eq!(
            TaggedSlot::new(NumericTag::Absent, &mut storage).unwrap_err(),
            NumericError::UnsupportedKind(0)
        );
    }

    #[test]
    fn test_get_and_set() {
        let mut storage = [0u8; 8];
        {
            let mut slot = TaggedSlot::new(NumericTag::Int64, &mut storage).unwrap();
            slot.set(TaggedValue::Int64(-99)).unwrap();
            assert_eq!(slot.get().unwrap(), TaggedValue::Int64(-99));
        }
        assert_eq!(i64::from_ne_bytes(storage), -99);
    }

    #[test]
    fn test_typed_access_checks_tag() {
        let mut storage = [0u8; 4];
        let mut slot = TaggedSlot::new(NumericTag::Float32, &mut storage).unwrap();
        slot.write(2.5f32).unwrap();
        assert_eq!(slot.read::<f32>().unwrap(), 2.5);

        let mismatch = NumericError::TagMismatch {
            expected: NumericTag::Float32,
            actual: NumericTag::Int32,
        };
        assert_eq!(slot.read::<i32>(), Err(mismatch));
        assert_eq!(slot.write(1i32), Err(mismatch));
        assert_eq!(slot.set(TaggedValue::Int32(1)), Err(mismatch));
    }

    #[test]
    fn test_reborrow_writes_through() {
        let mut storage = [0u8; 2];
        let mut slot = TaggedSlot::new(NumericTag::UInt16, &mut storage).unwrap();
        slot.reborrow().write(512u16).unwrap();
        assert_eq!(slot.read::<u16>().unwrap(), 512);
    }
}
