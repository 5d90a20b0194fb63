// ============================================================================
// Unary Functions
// MathFunction dispatch over typed and tagged values
// ============================================================================

use crate::domain::tag::dispatch_tag;
use crate::domain::{MathFunction, TaggedSlot, TaggedValue};
use crate::interfaces::{MathFunctions, Primitive};
use crate::numeric::NumericResult;

#[inline]
pub fn evaluate_function<T: MathFunctions>(func: MathFunction, value: T) -> T {
    match func {
        MathFunction::Abs => T::abs(value),
        MathFunction::Floor => T::floor(value),
        MathFunction::Ceil => T::ceil(value),
        MathFunction::Round => T::round(value),
        MathFunction::Sqrt => T::sqrt(value),
        MathFunction::Log10 => T::log10(value),
        MathFunction::Ln => T::ln(value),
    }
}

/// `func(value)` in the value's own encoding.
pub fn apply_function(func: MathFunction, value: TaggedValue) -> NumericResult<TaggedValue> {
    dispatch_tag!(value.tag(), P => {
        let result = evaluate_function(func, value.get::<P>()?);
        Ok(result.into_tagged())
    })
}

/// Replace the slot's value with `func(value)`; returns whether it changed.
pub fn apply_function_slot(func: MathFunction, slot: &mut TaggedSlot<'_>) -> NumericResult<bool> {
    dispatch_tag!(slot.tag(), P => {
        let current = slot.read::<P>()?;
        let updated = evaluate_function(func, current);
        if updated == current {
            Ok(false)
        } else {
            tracing::trace!(function = ?func, old = ?current, new = ?updated, "value changed");
            slot.write(updated)?;
            Ok(true)
        }
    })
}
