// ============================================================================
// Scaled Recompute
// Rewrites a stored value as base * multiplier when it drifts
// ============================================================================

use crate::domain::tag::dispatch_tag;
use crate::domain::{TaggedSlot, TaggedValue, ToleranceConfig};
use crate::interfaces::{Primitive, ValueCalculator};
use crate::numeric::NumericResult;

/// Recompute `base * multiplier` in the slot's encoding and store it when it
/// differs from the current value.
///
/// Integer encodings compare exactly and wrap on overflow. Float encodings
/// treat values within `tolerance` of each other as unchanged, so repeated
/// recomputes do not churn on rounding noise.
///
/// # Errors
/// `TagMismatch` when `base` does not carry the slot's encoding.
///
/// # Example
/// ```
/// use generic_math::domain::{NumericTag, TaggedSlot, TaggedValue, ToleranceConfig};
/// use generic_math::engine::recompute_scaled;
///
/// let mut storage = 0u32.to_ne_bytes();
/// let mut slot = TaggedSlot::new(NumericTag::UInt32, &mut storage).unwrap();
/// let tolerance = ToleranceConfig::default();
///
/// assert!(recompute_scaled(&mut slot, TaggedValue::UInt32(12), 3, &tolerance).unwrap());
/// assert_eq!(slot.get().unwrap(), TaggedValue::UInt32(36));
/// assert!(!recompute_scaled(&mut slot, TaggedValue::UInt32(12), 3, &tolerance).unwrap());
/// ```
pub fn recompute_scaled(
    slot: &mut TaggedSlot<'_>,
    base: TaggedValue,
    multiplier: i32,
    tolerance: &ToleranceConfig,
) -> NumericResult<bool> {
    dispatch_tag!(slot.tag(), P => {
        let base = base.get::<P>()?;
        let scaled = P::multiply(base, P::from_i128_wrapping(i128::from(multiplier)));
        store_scaled(slot, scaled, tolerance)
    })
}

fn store_scaled<P: Primitive + ValueCalculator>(
    slot: &mut TaggedSlot<'_>,
    scaled: P,
    tolerance: &ToleranceConfig,
) -> NumericResult<bool> {
    let current = slot.read::<P>()?;
    if scaled.approx_eq(current, tolerance) {
        return Ok(false);
    }

    tracing::trace!(tag = %slot.tag(), old = ?current, new = ?scaled, "recomputed");
    slot.write(scaled)?;
    Ok(true)
}
