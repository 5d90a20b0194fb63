// ============================================================================
// Numeric Module
// Extended-range decimal floats for values past the f64 exponent range
// ============================================================================
//
// This module provides:
// - BigDouble: normalized mantissa/exponent pair with an i64 exponent
// - powers_of_ten: shared 10^k table used for mantissa scaling
// - NumericError: error type shared by the whole crate
//
// Design principles:
// - Values are immutable Copy types; every operation renormalizes
// - NaN and infinity propagate through arithmetic instead of erroring
// - Fallible conversions and parsing return NumericResult

mod big_double;
mod errors;

pub mod powers_of_ten;

pub use big_double::{
    BigDouble, INFINITE_EXPONENT, LOG2_10, MAX_SIGNIFICANT_EXPONENT, NEGLIGIBLE_EXPONENT_DIFF,
};
pub use errors::{NumericError, NumericResult};
pub use powers_of_ten::PowersOfTen;
