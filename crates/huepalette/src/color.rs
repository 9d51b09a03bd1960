//! The three interchangeable color representations.
//!
//! A color travels through the engine as [`Rgb`] (normalized, gamma-corrected
//! red, green, blue), as [`Hsv`] (hue, saturation, value) while harmonies
//! rotate its hue, and finally as [`XyPoint`], the CIE 1931 chromaticity
//! fixtures accept. The conversions to and from chromaticity depend on a
//! fixture's [`Gamut`](crate::Gamut) and hence live with the
//! [`Converter`](crate::Converter).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{format_hex, from_24bit, hsv_to_rgb, parse_hex, rgb_to_hsv, to_24bit};
use crate::error::ColorFormatError;
use crate::Float;

/// A normalized RGB color.
///
/// All three coordinates are gamma-corrected and range `0..=1`. The
/// constructors validate that range, so a value of this type is always well
/// formed.
///
/// ```
/// # use huepalette::Rgb;
/// # use huepalette::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let orange: Rgb = "#ff8000".parse()?;
/// assert_eq!(orange.to_24bit(), [0xff, 0x80, 0x00]);
/// assert_eq!(orange.to_hex(), "ff8000");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    coordinates: [Float; 3],
}

impl Rgb {
    /// Create a new color from coordinates with unit range.
    ///
    /// This associated function fails if a coordinate is not-a-number or
    /// outside `0..=1`.
    pub fn new(r: Float, g: Float, b: Float) -> Result<Self, ColorFormatError> {
        let coordinates = [r, g, b];
        if coordinates.iter().all(|c| (0.0..=1.0).contains(c)) {
            Ok(Self { coordinates })
        } else {
            Err(ColorFormatError::OutOfRange)
        }
    }

    /// Create a new color from coordinates ranging `0..=255`.
    ///
    /// Unlike [`Rgb::from_24bit`], the coordinates may have fractional parts.
    /// This associated function fails if a coordinate is not-a-number or
    /// outside `0..=255`.
    pub fn from_255(r: Float, g: Float, b: Float) -> Result<Self, ColorFormatError> {
        let coordinates = [r, g, b];
        if coordinates.iter().all(|c| (0.0..=255.0).contains(c)) {
            Ok(Self {
                coordinates: [r / 255.0, g / 255.0, b / 255.0],
            })
        } else {
            Err(ColorFormatError::OutOfRange)
        }
    }

    /// Create a new color from 24-bit coordinates.
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self {
            coordinates: from_24bit(r, g, b),
        }
    }

    /// Parse a color in hexadecimal format.
    ///
    /// The string must have exactly six hexadecimal digits, in either case,
    /// optionally preceded by a `#`.
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        let [r, g, b] = parse_hex(s)?;
        Ok(Self::from_24bit(r, g, b))
    }

    /// Wrap coordinates known to have unit range.
    pub(crate) fn from_unit(coordinates: [Float; 3]) -> Self {
        Self {
            coordinates: coordinates.map(|c| c.clamp(0.0, 1.0)),
        }
    }

    /// Get the coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Determine whether this color is black.
    pub fn is_black(&self) -> bool {
        self.coordinates.iter().all(|c| *c <= 0.0)
    }

    /// Convert this color to 24-bit representation, rounding each coordinate.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.coordinates)
    }

    /// Format this color as six lowercase hexadecimal digits, without `#`.
    pub fn to_hex(&self) -> String {
        format_hex(self.to_24bit())
    }

    /// Convert this color to hue, saturation, and value.
    pub fn to_hsv(&self) -> Hsv {
        let [h, s, v] = rgb_to_hsv(&self.coordinates);
        Hsv { h, s, v }
    }
}

impl AsRef<[Float; 3]> for Rgb {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

// ====================================================================================================================

/// A color as hue, saturation, and value.
///
/// The hue is measured in degrees and kept within `0..360`; saturation and
/// value have unit range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    h: Float,
    s: Float,
    v: Float,
}

impl Hsv {
    /// Create a new color. The hue is reduced modulo 360, whereas saturation
    /// and value are clamped to unit range.
    pub fn new(h: Float, s: Float, v: Float) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> Float {
        self.h
    }

    /// Get the saturation.
    pub const fn saturation(&self) -> Float {
        self.s
    }

    /// Get the value.
    pub const fn value(&self) -> Float {
        self.v
    }

    /// Rotate the hue by the given number of degrees, which may be negative.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn rotate(&self, degrees: Float) -> Self {
        Self::new(self.h + degrees, self.s, self.v)
    }

    /// Convert back to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(hsv_to_rgb(&[self.h, self.s, self.v]))
    }
}

impl From<&Rgb> for Hsv {
    fn from(value: &Rgb) -> Self {
        value.to_hsv()
    }
}

// ====================================================================================================================

/// A point in the CIE 1931 xy chromaticity diagram.
///
/// Serializes as a two-element array `[x, y]`, which is the format bridges use
/// for a light's `xy` attribute. Deserialization and conversion from an array
/// reject coordinates outside `0..=1` as well as not-a-number. Equality is
/// exact, since shuffling compares the values reported by the bridge verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[Float; 2]", into = "[Float; 2]")]
pub struct XyPoint {
    x: Float,
    y: Float,
}

impl XyPoint {
    /// Create a new chromaticity point.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Get the x coordinate.
    pub const fn x(&self) -> Float {
        self.x
    }

    /// Get the y coordinate.
    pub const fn y(&self) -> Float {
        self.y
    }

    /// Get both coordinates.
    pub const fn to_array(&self) -> [Float; 2] {
        [self.x, self.y]
    }

    /// Compute the Euclidean distance to the other point.
    pub fn distance(&self, other: &Self) -> Float {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl TryFrom<[Float; 2]> for XyPoint {
    type Error = ColorFormatError;

    fn try_from(value: [Float; 2]) -> Result<Self, Self::Error> {
        if value.iter().all(|c| (0.0..=1.0).contains(c)) {
            Ok(Self::new(value[0], value[1]))
        } else {
            Err(ColorFormatError::OutOfRange)
        }
    }
}

impl From<XyPoint> for [Float; 2] {
    fn from(value: XyPoint) -> Self {
        value.to_array()
    }
}

impl std::fmt::Display for XyPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "xy({:.4}, {:.4})", self.x, self.y)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Hsv, Rgb, XyPoint};
    use crate::error::ColorFormatError;
    use crate::{assert_close_enough, Float};

    #[test]
    fn test_rgb_validation() {
        assert!(Rgb::new(0.0, 0.5, 1.0).is_ok());
        assert_eq!(Rgb::new(0.0, 1.5, 0.0), Err(ColorFormatError::OutOfRange));
        assert_eq!(Rgb::new(-0.1, 0.0, 0.0), Err(ColorFormatError::OutOfRange));
        assert_eq!(
            Rgb::new(Float::NAN, 0.0, 0.0),
            Err(ColorFormatError::OutOfRange)
        );

        assert_eq!(Rgb::from_255(255.0, 0.0, 51.0), Rgb::new(1.0, 0.0, 0.2));
        assert_eq!(
            Rgb::from_255(256.0, 0.0, 0.0),
            Err(ColorFormatError::OutOfRange)
        );
    }

    #[test]
    fn test_hex() -> Result<(), ColorFormatError> {
        let color = Rgb::from_hex("#FF8000")?;
        assert_eq!(color, Rgb::from_24bit(0xff, 0x80, 0x00));
        assert_eq!(color.to_hex(), "ff8000");
        assert_eq!(color.to_string(), "#ff8000");
        assert_eq!("zzzzzz".parse::<Rgb>(), Err(ColorFormatError::MalformedHex));

        // Rounds like a color picker would.
        assert_eq!(Rgb::new(0.5, 0.0, 1.0)?.to_hex(), "8000ff");
        Ok(())
    }

    #[test]
    fn test_hsv() -> Result<(), ColorFormatError> {
        let red = Rgb::from_hex("ff0000")?.to_hsv();
        assert_eq!(red, Hsv::new(0.0, 1.0, 1.0));

        let cyan = red.rotate(180.0);
        assert_close_enough!(cyan.hue(), 180.0);
        assert_eq!(cyan.to_rgb().to_hex(), "00ffff");

        let magenta = red.rotate(-60.0);
        assert_close_enough!(magenta.hue(), 300.0);
        assert_eq!(magenta.to_rgb().to_hex(), "ff00ff");

        assert!(Rgb::from_24bit(0, 0, 0).is_black());
        assert_eq!(Hsv::new(720.5, 2.0, -1.0), Hsv::new(0.5, 1.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_xy_serde() -> Result<(), serde_json::Error> {
        let point = XyPoint::new(0.675, 0.322);
        assert_eq!(serde_json::to_string(&point)?, "[0.675,0.322]");
        assert_eq!(serde_json::from_str::<XyPoint>("[0.675,0.322]")?, point);
        assert_eq!(serde_json::from_str::<XyPoint>("[0,1]")?, XyPoint::new(0.0, 1.0));
        assert_eq!(point.to_string(), "xy(0.6750, 0.3220)");

        assert!(serde_json::from_str::<XyPoint>("[1.5,0.2]").is_err());
        assert!(serde_json::from_str::<XyPoint>("[0.3,-0.01]").is_err());
        assert!(serde_json::from_str::<XyPoint>("[0.3]").is_err());
        Ok(())
    }

    #[test]
    fn test_xy_range() {
        assert_eq!(XyPoint::try_from([0.3, 0.3]), Ok(XyPoint::new(0.3, 0.3)));
        assert_eq!(XyPoint::try_from([1.2, 0.3]), Err(ColorFormatError::OutOfRange));
        assert_eq!(
            XyPoint::try_from([0.3, Float::NAN]),
            Err(ColorFormatError::OutOfRange)
        );
    }
}
