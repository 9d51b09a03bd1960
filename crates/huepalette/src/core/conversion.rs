use super::is_negligible;
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [
        Float::from(r) / 255.0,
        Float::from(g) / 255.0,
        Float::from(b) / 255.0,
    ]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the coordinates range `0..=1`. Even if that is
/// not the case, the conversion automatically clamps coordinates to the range
/// `0x00..=0xff`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    let [r, g, b] = *coordinates;
    [convert(r), convert(g), convert(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected RGB to linear RGB using sRGB's
/// gamma. This is a one-hop, direct conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear RGB to gamma-corrected RGB using sRGB's
/// gamma. This is a one-hop, direct conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.0031308 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// Wide gamut RGB with D65 white point, as published in Philips' "RGB to xy
// Color conversion" application note for Hue fixtures.

#[rustfmt::skip]
const LINEAR_RGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.664511, 0.154324, 0.162028 ],
    [ 0.283881, 0.668433, 0.047685 ],
    [ 0.000088, 0.072310, 0.986039 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_RGB: [[Float; 3]; 3] = [
    [  1.656492, -0.354851, -0.255038 ],
    [ -0.707196,  1.655397,  0.036152 ],
    [  0.051713, -0.121364,  1.011530 ],
];

/// Convert gamma-corrected RGB coordinates to XYZ.
pub(crate) fn rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_RGB_TO_XYZ, &rgb_to_linear_rgb(value))
}

/// Project XYZ tristimulus values onto the xy chromaticity plane.
///
/// This function returns `None` if the tristimulus values sum to zero, i.e.,
/// for black, whose chromaticity is undefined.
pub(crate) fn xyz_to_xy(value: &[Float; 3]) -> Option<[Float; 2]> {
    let [x, y, z] = *value;
    let sum = x + y + z;
    if is_negligible(sum) {
        None
    } else {
        Some([x / sum, y / sum])
    }
}

/// Convert chromaticity coordinates with the given brightness back to
/// gamma-corrected RGB.
///
/// The brightness serves as luminance Y. Negative RGB coordinates are zeroed
/// out and, if the largest coordinate exceeds one, all coordinates are scaled
/// down by it.
pub(crate) fn xy_to_rgb(xy: &[Float; 2], brightness: Float) -> [Float; 3] {
    let [x, y] = *xy;
    if is_negligible(y) {
        return [0.0, 0.0, 0.0];
    }

    let luminance = brightness.clamp(0.0, 1.0);
    let xyz = [
        luminance / y * x,
        luminance,
        luminance / y * (1.0 - x - y),
    ];

    let [r, g, b] = linear_rgb_to_rgb(&multiply(&XYZ_TO_LINEAR_RGB, &xyz));
    let [r, g, b] = [r.max(0.0), g.max(0.0), b.max(0.0)];

    let max = r.max(g).max(b);
    if 1.0 < max {
        [r / max, g / max, b / max]
    } else {
        [r, g, b]
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert gamma-corrected RGB coordinates to hue, saturation, and value. The
/// hue is in degrees `0..360`; saturation and value have unit range.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if max <= 0.0 {
        return [0.0, 0.0, 0.0];
    } else if delta <= 0.0 {
        return [0.0, 0.0, max];
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [(60.0 * sector).rem_euclid(360.0), delta / max, max]
}

/// Convert hue, saturation, and value back to gamma-corrected RGB coordinates.
/// The hue may have any magnitude; it is reduced modulo 360 first.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let h = h.rem_euclid(360.0) / 60.0;
    let chroma = v * s;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = v - chroma;

    let [r, g, b] = match h as u8 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    [r + m, g + m, b + m]
}

// ====================================================================================================================
