// ============================================================================
// Operators
// Arithmetic, comparison and unary function selectors
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary update applied to a stored value `a` with operand `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MathOperator {
    /// a = b
    Set = 0,
    /// a = a + b
    Add = 1,
    /// a = a - b
    Subtract = 2,
    /// a = a * b
    Multiply = 3,
    /// a = a / b
    Divide = 4,
    /// a = a ^ b
    PowerAtoB = 5,
    /// a = b ^ a
    PowerBtoA = 6,
    /// a = min(a, b)
    Min = 7,
    /// a = max(a, b)
    Max = 8,
}

impl MathOperator {
    pub const ALL: [Self; 9] = [
        MathOperator::Set,
        MathOperator::Add,
        MathOperator::Subtract,
        MathOperator::Multiply,
        MathOperator::Divide,
        MathOperator::PowerAtoB,
        MathOperator::PowerBtoA,
        MathOperator::Min,
        MathOperator::Max,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            MathOperator::Set => "=",
            MathOperator::Add => "+",
            MathOperator::Subtract => "-",
            MathOperator::Multiply => "*",
            MathOperator::Divide => "/",
            MathOperator::PowerAtoB => "a^b",
            MathOperator::PowerBtoA => "b^a",
            MathOperator::Min => "min",
            MathOperator::Max => "max",
        }
    }
}

impl fmt::Display for MathOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Relational test between two values of one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Comparison {
    Equal = 0,
    NotEqual = 1,
    Less = 2,
    LessOrEqual = 3,
    Greater = 4,
    GreaterOrEqual = 5,
}

impl Comparison {
    /// Evaluate on any partially ordered pair.
    ///
    /// Unordered floats (NaN) satisfy only `NotEqual`.
    #[inline]
    pub fn evaluate<T: PartialOrd>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::NotEqual => lhs != rhs,
            Comparison::Less => lhs < rhs,
            Comparison::LessOrEqual => lhs <= rhs,
            Comparison::Greater => lhs > rhs,
            Comparison::GreaterOrEqual => lhs >= rhs,
        }
    }

    /// Comparison that holds exactly when `self` does not, for ordered operands.
    pub fn negate(self) -> Self {
        match self {
            Comparison::Equal => Comparison::NotEqual,
            Comparison::NotEqual => Comparison::Equal,
            Comparison::Less => Comparison::GreaterOrEqual,
            Comparison::LessOrEqual => Comparison::Greater,
            Comparison::Greater => Comparison::LessOrEqual,
            Comparison::GreaterOrEqual => Comparison::Less,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::Greater => ">",
            Comparison::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary function applied in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MathFunction {
    Abs = 0,
    Floor = 1,
    Ceil = 2,
    Round = 3,
    Sqrt = 4,
    Log10 = 5,
    Ln = 6,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_evaluate() {
        assert!(Comparison::Less.evaluate(&1, &2));
        assert!(Comparison::GreaterOrEqual.evaluate(&2, &2));
        assert!(!Comparison::Greater.evaluate(&2, &2));
        assert!(Comparison::NotEqual.evaluate(&1.0, &f64::NAN));
        assert!(!Comparison::LessOrEqual.evaluate(&1.0, &f64::NAN));
    }

    #[test]
    fn test_negate_is_complement() {
        let comparisons = [
            Comparison::Equal,
            Comparison::NotEqual,
            Comparison::Less,
            Comparison::LessOrEqual,
            Comparison::Greater,
            Comparison::GreaterOrEqual,
        ];

        for comparison in comparisons {
            for (a, b) in [(1, 2), (2, 2), (3, 2)] {
                assert_ne!(
                    comparison.evaluate(&a, &b),
                    comparison.negate().evaluate(&a, &b),
                    "{} on ({}, {})",
                    comparison,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(MathOperator::Add.to_string(), "+");
        assert_eq!(MathOperator::PowerBtoA.to_string(), "b^a");
        assert_eq!(MathOperator::ALL.len(), 9);
    }
}
