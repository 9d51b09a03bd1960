/// An extension trait for floating point numbers.
///
/// The trait pre-computes the constants that depend on the floating point
/// representation, namely the rounding factor for equality comparisons and the
/// tolerance for geometric predicates.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// The slack granted to geometric predicates.
    ///
    /// A point that was projected onto a triangle edge may end up a few ulps
    /// outside the triangle. Predicates accept such points as inside, which
    /// keeps clamping idempotent.
    const TOLERANCE: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
    const TOLERANCE: f64 = 1e-12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
    const TOLERANCE: f32 = 1e-6;
}
