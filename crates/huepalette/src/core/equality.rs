use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two chromaticity points are the same.
///
/// Both coordinates are normalized with [`to_eq_bits`] before comparison.
///
/// # Panics
///
/// This macro panics if either pair of normalized coordinates differs.
#[macro_export]
macro_rules! assert_same_xy {
    ($p1:expr, $p2:expr $(,)?) => {
        let (p1, p2) = ($p1, $p2);
        let bits1 = [$crate::to_eq_bits(p1.x()), $crate::to_eq_bits(p1.y())];
        let bits2 = [$crate::to_eq_bits(p2.x()), $crate::to_eq_bits(p2.y())];
        assert_eq!(bits1, bits2, "points differ:\n{:?}\n{:?}", p1, p2);
    };
}

/// Helper function to normalize a floating point number before equality
/// testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] and
/// [`assert_same_xy`] test macros use it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}

/// Determine whether the quantity is zero within tolerance.
#[inline]
pub(crate) fn is_negligible(f: Float) -> bool {
    f.abs() <= <Float as FloatExt>::TOLERANCE
}
