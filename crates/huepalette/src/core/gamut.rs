use crate::core::FloatExt;
use crate::Float;

/// A triangle in the xy chromaticity plane, with vertices in red, green, blue
/// order.
pub(crate) type Triangle = [[Float; 2]; 3];

#[inline]
fn subtract(a: &[Float; 2], b: &[Float; 2]) -> [Float; 2] {
    [a[0] - b[0], a[1] - b[1]]
}

#[inline]
fn dot(a: &[Float; 2], b: &[Float; 2]) -> Float {
    a[0].mul_add(b[0], a[1] * b[1])
}

#[inline]
fn cross(a: &[Float; 2], b: &[Float; 2]) -> Float {
    a[0].mul_add(b[1], -(a[1] * b[0]))
}

/// Compute the squared Euclidean distance between the two points.
#[inline]
pub(crate) fn distance_squared(a: &[Float; 2], b: &[Float; 2]) -> Float {
    let d = subtract(a, b);
    dot(&d, &d)
}

/// Determine whether the point lies inside or on the boundary of the triangle.
///
/// This function computes the point's barycentric coordinates `s` and `t`
/// relative to the red vertex. The point is inside if both are non-negative
/// and sum to at most one, give or take [`FloatExt::TOLERANCE`].
pub(crate) fn in_triangle(triangle: &Triangle, point: &[Float; 2]) -> bool {
    let [red, green, blue] = triangle;
    let v1 = subtract(green, red);
    let v2 = subtract(blue, red);
    let q = subtract(point, red);

    let denominator = cross(&v1, &v2);
    let s = cross(&q, &v2) / denominator;
    let t = cross(&v1, &q) / denominator;

    let tolerance = <Float as FloatExt>::TOLERANCE;
    -tolerance <= s && -tolerance <= t && s + t <= 1.0 + tolerance
}

/// Find the point on the segment from `a` to `b` that is closest to the given
/// point.
///
/// The perpendicular projection onto the line through `a` and `b` is clipped
/// to the segment, so the result is either the foot of the perpendicular or
/// one of the two end points.
pub(crate) fn closest_on_segment(a: &[Float; 2], b: &[Float; 2], point: &[Float; 2]) -> [Float; 2] {
    let ab = subtract(b, a);
    let ap = subtract(point, a);

    let length_squared = dot(&ab, &ab);
    if length_squared <= 0.0 {
        return *a;
    }

    let t = dot(&ap, &ab) / length_squared;
    if t <= 0.0 {
        *a
    } else if 1.0 <= t {
        *b
    } else {
        [ab[0].mul_add(t, a[0]), ab[1].mul_add(t, a[1])]
    }
}

/// Clamp the point to the triangle.
///
/// Points inside the triangle are returned unchanged. Points outside are
/// replaced by the nearest point on the triangle's boundary, which is the
/// closest of the three per-edge projections.
pub(crate) fn clamp_to_triangle(triangle: &Triangle, point: &[Float; 2]) -> [Float; 2] {
    if in_triangle(triangle, point) {
        return *point;
    }

    let [red, green, blue] = triangle;
    let mut closest = closest_on_segment(red, green, point);
    let mut best = distance_squared(&closest, point);

    for (a, b) in [(blue, red), (green, blue)] {
        let candidate = closest_on_segment(a, b, point);
        let distance = distance_squared(&candidate, point);
        if distance < best {
            closest = candidate;
            best = distance;
        }
    }

    closest
}

// ====================================================================================================================
