// ============================================================================
// BigDouble Arithmetic
// ============================================================================

use super::{pow10, BigDouble, INFINITE_EXPONENT, NEGLIGIBLE_EXPONENT_DIFF};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Add for BigDouble {
    type Output = Self;

    /// Sum aligned to the larger exponent.
    ///
    /// When the exponents differ by more than 17 the smaller operand cannot
    /// affect an f64 mantissa, and the larger operand is returned unchanged.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        if self.is_nan() || rhs.is_nan() {
            return BigDouble::NAN;
        }

        if self.is_infinite() && rhs.is_infinite() && self.mantissa != rhs.mantissa {
            return BigDouble::NAN;
        }

        if self.mantissa == 0.0 {
            return rhs;
        }

        if rhs.mantissa == 0.0 {
            return self;
        }

        let exp_diff = self.exponent.saturating_sub(rhs.exponent);

        if exp_diff > NEGLIGIBLE_EXPONENT_DIFF {
            return self;
        }

        if exp_diff < -NEGLIGIBLE_EXPONENT_DIFF {
            return rhs;
        }

        let (mantissa, exponent) = if exp_diff >= 0 {
            (self.mantissa + rhs.mantissa * pow10(-exp_diff), self.exponent)
        } else {
            (self.mantissa * pow10(exp_diff) + rhs.mantissa, rhs.exponent)
        };

        BigDouble::new(mantissa, exponent)
    }
}

impl Sub for BigDouble {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for BigDouble {
    type Output = Self;

    /// Infinity times zero is NaN; otherwise infinities keep the product sign.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_nan() || rhs.is_nan() {
            return BigDouble::NAN;
        }

        if self.is_infinite() || rhs.is_infinite() {
            if self.mantissa == 0.0 || rhs.mantissa == 0.0 {
                return BigDouble::NAN;
            }
            return BigDouble::signed_infinity(self.mantissa * rhs.mantissa);
        }

        BigDouble::new(
            self.mantissa * rhs.mantissa,
            self.exponent.saturating_add(rhs.exponent),
        )
        .saturate()
    }
}

impl Div for BigDouble {
    type Output = Self;

    /// Infinity over infinity is NaN; a finite value over infinity is zero.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) => return BigDouble::NAN,
            (true, false) if !rhs.is_nan() => {
                return BigDouble::signed_infinity(self.mantissa * rhs.mantissa.signum());
            }
            (false, true) if !self.is_nan() => return BigDouble::ZERO,
            _ => {}
        }

        BigDouble::new(
            self.mantissa / rhs.mantissa,
            self.exponent.saturating_sub(rhs.exponent),
        )
        .saturate()
    }
}

impl BigDouble {
    #[inline]
    fn signed_infinity(sign: f64) -> Self {
        if sign < 0.0 {
            BigDouble::NEG_INFINITY
        } else {
            BigDouble::INFINITY
        }
    }

    /// A finite result whose exponent reached the sentinel becomes infinity.
    #[inline]
    fn saturate(self) -> Self {
        if self.exponent == INFINITE_EXPONENT && !self.is_nan() {
            return BigDouble::signed_infinity(self.mantissa);
        }
        self
    }
}

impl Neg for BigDouble {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        BigDouble::from_raw(-self.mantissa, self.exponent)
    }
}

impl AddAssign for BigDouble {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for BigDouble {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for BigDouble {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for BigDouble {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
