// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod primitive;
mod value_calculator;

pub use primitive::Primitive;
pub use value_calculator::{MathFunctions, ValueCalculator};
