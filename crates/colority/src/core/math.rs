use crate::Float;

/// An extension trait for floating point numbers.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision for equality comparisons.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// Round to the given number of digits after the decimal, with halfway
    /// cases rounded away from zero.
    #[must_use]
    fn round_to(self, digits: i32) -> Self;

    /// Replace negative zero with positive zero.
    #[must_use]
    fn without_negative_zero(self) -> Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;

    #[inline]
    fn round_to(self, digits: i32) -> Self {
        let factor = (10.0 as Float).powi(digits);
        (self * factor).round() / factor
    }

    #[inline]
    fn without_negative_zero(self) -> Self {
        if self == 0.0 {
            0.0
        } else {
            self
        }
    }
}
