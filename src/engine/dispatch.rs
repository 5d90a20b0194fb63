// ============================================================================
// Operator Dispatch
// Applies a MathOperator to typed values, tagged values and raw slots
// ============================================================================

use crate::domain::tag::dispatch_tag;
use crate::domain::{MathOperator, TaggedSlot, TaggedValue};
use crate::interfaces::{Primitive, ValueCalculator};
use crate::numeric::NumericResult;

// ============================================================================
// Generic core
// ============================================================================

/// Result of applying `op` to a stored `current` with `operand`.
///
/// # Errors
/// `DivisionByZero` when `op` is `Divide` on an integer encoding with a zero
/// operand.
#[inline]
pub fn evaluate<T: ValueCalculator>(op: MathOperator, current: T, operand: T) -> NumericResult<T> {
    let result = match op {
        MathOperator::Set => operand,
        MathOperator::Add => T::add(current, operand),
        MathOperator::Subtract => T::subtract(current, operand),
        MathOperator::Multiply => T::multiply(current, operand),
        MathOperator::Divide => T::divide(current, operand)?,
        MathOperator::PowerAtoB => T::power(current, operand),
        MathOperator::PowerBtoA => T::power(operand, current),
        MathOperator::Min => T::min(current, operand),
        MathOperator::Max => T::max(current, operand),
    };

    Ok(result)
}

/// Apply `op` in place and report whether the stored value changed.
///
/// Change detection is exact equality, so a NaN result always reports a
/// change. On error `value` is left untouched.
pub fn process_return_change<T: ValueCalculator>(
    op: MathOperator,
    value: &mut T,
    operand: T,
) -> NumericResult<bool> {
    let updated = evaluate(op, *value, operand)?;
    store_if_changed(op, value, updated)
}

/// Apply `op`, then bound the result to `[min, max]` and store it.
///
/// The upper bound is applied first, so with inverted bounds
/// (`min > max`) the result is `min`.
pub fn process_clamped<T: ValueCalculator>(
    op: MathOperator,
    value: &mut T,
    operand: T,
    min: T,
    max: T,
) -> NumericResult<bool> {
    let updated = evaluate(op, *value, operand)?;
    let bounded = T::max(T::min(updated, max), min);
    store_if_changed(op, value, bounded)
}

#[inline]
fn store_if_changed<T: ValueCalculator>(
    op: MathOperator,
    value: &mut T,
    updated: T,
) -> NumericResult<bool> {
    if updated == *value {
        return Ok(false);
    }

    tracing::trace!(operator = %op, old = ?*value, new = ?updated, "value changed");
    *value = updated;
    Ok(true)
}

// ============================================================================
// Slot entry points
// ============================================================================

fn apply_typed<P: Primitive + ValueCalculator>(
    op: MathOperator,
    slot: &mut TaggedSlot<'_>,
    operand: P,
) -> NumericResult<bool> {
    let mut value = slot.read::<P>()?;
    let changed = process_return_change(op, &mut value, operand)?;
    if changed {
        slot.write(value)?;
    }
    Ok(changed)
}

/// Apply `op` to the value stored in `slot`.
///
/// # Errors
/// - `TagMismatch` when `operand` does not carry the slot's encoding
/// - `DivisionByZero` from integer division
///
/// # Example
/// ```
/// use generic_math::domain::{MathOperator, NumericTag, TaggedSlot, TaggedValue};
/// use generic_math::engine::apply;
///
/// let mut storage = 10i32.to_ne_bytes();
/// let mut slot = TaggedSlot::new(NumericTag::Int32, &mut storage).unwrap();
///
/// assert!(apply(MathOperator::Add, &mut slot, TaggedValue::Int32(5)).unwrap());
/// assert_eq!(slot.get().unwrap(), TaggedValue::Int32(15));
/// ```
pub fn apply(
    op: MathOperator,
    slot: &mut TaggedSlot<'_>,
    operand: TaggedValue,
) -> NumericResult<bool> {
    dispatch_tag!(slot.tag(), P => {
        let operand = operand.get::<P>()?;
        apply_typed::<P>(op, slot, operand)
    })
}

/// Apply `op` with a double operand narrowed into the slot's encoding.
pub fn apply_f64(op: MathOperator, slot: &mut TaggedSlot<'_>, operand: f64) -> NumericResult<bool> {
    dispatch_tag!(slot.tag(), P => apply_typed::<P>(op, slot, P::from_f64_truncating(operand)))
}

/// Apply `op` with an operand decoded from `operand` under the slot's encoding.
///
/// # Errors
/// `BufferTooSmall` when `operand` is narrower than the slot.
pub fn apply_bytes(op: MathOperator, slot: &mut TaggedSlot<'_>, operand: &[u8]) -> NumericResult<bool> {
    dispatch_tag!(slot.tag(), P => apply_typed::<P>(op, slot, P::read_ne_bytes(operand)?))
}

/// Apply `op`, then clamp the stored result into `[min, max]`.
///
/// `operand`, `min` and `max` must all carry the slot's encoding.
pub fn apply_clamped(
    op: MathOperator,
    slot: &mut TaggedSlot<'_>,
    operand: TaggedValue,
    min: TaggedValue,
    max: TaggedValue,
) -> NumericResult<bool> {
    dispatch_tag!(slot.tag(), P => {
        let operand = operand.get::<P>()?;
        let min = min.get::<P>()?;
        let max = max.get::<P>()?;

        let mut value = slot.read::<P>()?;
        let changed = process_clamped(op, &mut value, operand, min, max)?;
        if changed {
            slot.write(value)?;
        }
        Ok(changed)
    })
}

// ============================================================================
// Value entry points
// ============================================================================

/// Apply `op` to an owned tagged value in place.
pub fn apply_value(
    op: MathOperator,
    target: &mut TaggedValue,
    operand: TaggedValue,
) -> NumericResult<bool> {
    dispatch_tag!(target.tag(), P => {
        let mut value = target.get::<P>()?;
        let changed = process_return_change(op, &mut value, operand.get::<P>()?)?;
        if changed {
            *target = value.into_tagged();
        }
        Ok(changed)
    })
}

/// `lhs op rhs` without a destination.
pub fn apply_values(op: MathOperator, lhs: TaggedValue, rhs: TaggedValue) -> NumericResult<TaggedValue> {
    dispatch_tag!(lhs.tag(), P => {
        let result = evaluate(op, lhs.get::<P>()?, rhs.get::<P>()?)?;
        Ok(result.into_tagged())
    })
}
