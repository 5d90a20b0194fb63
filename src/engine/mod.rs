// ============================================================================
// Engine Module
// Calculators and the tag-dispatched operations built on them
// ============================================================================

mod calculators;
mod comparison;
mod dispatch;
mod encoding;
mod functions;
mod recompute;

pub use comparison::{compare, compare_bytes, compare_f64};
pub use dispatch::{
    apply, apply_bytes, apply_clamped, apply_f64, apply_value, apply_values, evaluate,
    process_clamped, process_return_change,
};
pub use encoding::{append_bytes, append_f64, append_value, byte_array};
pub use functions::{apply_function, apply_function_slot, evaluate_function};
pub use recompute::recompute_scaled;
