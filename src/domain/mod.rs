// ============================================================================
// Domain Models Module
// Tags, tagged values, byte views and operator selectors
// ============================================================================

pub mod config;
pub mod operators;
pub mod packed;
pub mod slot;
pub mod tag;
pub mod value;

pub use config::{FormatConfig, ToleranceConfig};
pub use operators::{Comparison, MathFunction, MathOperator};
pub use packed::{FieldLayout, PackedRecord};
pub use slot::TaggedSlot;
pub use tag::NumericTag;
pub use value::TaggedValue;
