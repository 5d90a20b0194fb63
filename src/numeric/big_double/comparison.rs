// ============================================================================
// BigDouble Comparison
// ============================================================================

use super::BigDouble;
use std::cmp::Ordering;

impl BigDouble {
    /// Three-way comparison on the normalized representation.
    ///
    /// Zero short-circuits on the other operand's sign, opposite signs decide
    /// immediately, and same-sign values compare exponent then mantissa.
    ///
    /// NaN is not treated as unordered. It takes the negative-sign branch
    /// with exponent 0 and a mantissa that is neither less nor greater than
    /// anything, so `NAN` vs `ONE` is `Equal`, `NAN` vs `ZERO` is `Less`
    /// and `NAN` vs `1e3` is `Greater`.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        let (a, b) = (self.mantissa, other.mantissa);

        if a == 0.0 && b == 0.0 {
            return Ordering::Equal;
        }
        if a == 0.0 {
            return if b > 0.0 { Ordering::Less } else { Ordering::Greater };
        }
        if b == 0.0 {
            return if a > 0.0 { Ordering::Greater } else { Ordering::Less };
        }

        if a > 0.0 && b < 0.0 {
            return Ordering::Greater;
        }
        if a < 0.0 && b > 0.0 {
            return Ordering::Less;
        }

        let by_exponent = self.exponent.cmp(&other.exponent);
        if by_exponent != Ordering::Equal {
            return if a > 0.0 { by_exponent } else { by_exponent.reverse() };
        }

        if a > b {
            Ordering::Greater
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Smaller of two values; ties return `self`.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.compare_to(&other) != Ordering::Greater {
            self
        } else {
            other
        }
    }

    /// Larger of two values; ties return `self`.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.compare_to(&other) != Ordering::Less {
            self
        } else {
            other
        }
    }

    /// Restrict to `[min, max]`. The lower bound is checked first.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        if self.compare_to(&min) == Ordering::Less {
            return min;
        }

        if self.compare_to(&max) == Ordering::Greater {
            return max;
        }

        self
    }
}

impl PartialEq for BigDouble {
    /// Exact equality of the normalized (mantissa, exponent) pair.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.mantissa == other.mantissa && self.exponent == other.exponent
    }
}

impl PartialOrd for BigDouble {
    /// Delegates to [`BigDouble::compare_to`], NaN included.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}
