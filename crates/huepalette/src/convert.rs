//! Conversion between RGB and gamut-clamped chromaticity.
//!
//! Fixtures accept colors only as CIE 1931 xy chromaticity, and only within
//! their device gamut. A [`Converter`] pairs the conversion pipeline with a
//! [`Gamut`], so that every chromaticity it produces is valid for fixtures with
//! that gamut:
//!
//!  1. Linearize the gamma-corrected RGB coordinates with sRGB's transfer
//!     function.
//!  2. Convert to XYZ with Philips' wide gamut matrix for D65.
//!  3. Project onto the xy plane, which fails for black.
//!  4. Clamp to the gamut.
//!
//! The reverse direction, from chromaticity back to RGB, clamps first and then
//! runs the pipeline backwards, with the brightness standing in for the
//! luminance that chromaticity lacks.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use rand::Rng;

use crate::color::{Hsv, Rgb, XyPoint};
use crate::core::{rgb_to_xyz, xy_to_rgb, xyz_to_xy};
use crate::error::PaletteError;
use crate::gamut::Gamut;
#[cfg(feature = "pyffi")]
use crate::gamut::GamutClass;
use crate::Float;

/// A converter between RGB and chromaticity for a given gamut.
///
/// ```
/// # use huepalette::{Converter, GAMUT_C};
/// # use huepalette::error::PaletteError;
/// # fn main() -> Result<(), PaletteError> {
/// let converter = Converter::new(&GAMUT_C);
/// let xy = converter.hex_to_xy("#ff0000")?;
/// assert_eq!(xy, GAMUT_C.red());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Converter<'g> {
    gamut: &'g Gamut,
}

impl<'g> Converter<'g> {
    /// Create a new converter for the gamut.
    pub const fn new(gamut: &'g Gamut) -> Self {
        Self { gamut }
    }

    /// Get this converter's gamut.
    pub const fn gamut(&self) -> &'g Gamut {
        self.gamut
    }

    /// Convert the color to gamut-clamped chromaticity.
    ///
    /// This method fails with [`PaletteError::DegenerateColor`] for black.
    pub fn to_xy(&self, color: &Rgb) -> Result<XyPoint, PaletteError> {
        let xyz = rgb_to_xyz(color.as_ref());
        let xy = xyz_to_xy(&xyz).ok_or(PaletteError::DegenerateColor)?;
        let [x, y] = xy;
        Ok(self.gamut.clamp(&XyPoint::new(x, y)))
    }

    /// Convert the hexadecimal color to gamut-clamped chromaticity.
    pub fn hex_to_xy(&self, hex: &str) -> Result<XyPoint, PaletteError> {
        self.to_xy(&Rgb::from_hex(hex)?)
    }

    /// Convert the RGB coordinates with unit range to gamut-clamped
    /// chromaticity.
    pub fn rgb_to_xy(&self, r: Float, g: Float, b: Float) -> Result<XyPoint, PaletteError> {
        self.to_xy(&Rgb::new(r, g, b)?)
    }

    /// Convert the RGB coordinates ranging `0..=255` to gamut-clamped
    /// chromaticity.
    pub fn rgb255_to_xy(&self, r: Float, g: Float, b: Float) -> Result<XyPoint, PaletteError> {
        self.to_xy(&Rgb::from_255(r, g, b)?)
    }

    /// Convert the chromaticity with the given brightness back to RGB.
    ///
    /// The chromaticity is clamped to the gamut first. Since the fixtures'
    /// primaries are more saturated than sRGB's, the result may be clipped.
    pub fn xy_to_rgb(&self, xy: &XyPoint, brightness: Float) -> Rgb {
        let xy = self.gamut.clamp(xy);
        Rgb::from_unit(xy_to_rgb(&xy.to_array(), brightness))
    }

    /// Convert the chromaticity with the given brightness back to a
    /// hexadecimal color.
    pub fn xy_to_hex(&self, xy: &XyPoint, brightness: Float) -> String {
        self.xy_to_rgb(xy, brightness).to_hex()
    }

    /// Pick a random color.
    ///
    /// The color is fully saturated and fully bright, with a hue drawn
    /// uniformly from the color wheel.
    pub fn random_xy<R: Rng>(&self, rng: &mut R) -> Result<XyPoint, PaletteError> {
        let hue: Float = rng.random_range(0.0..360.0);
        self.to_xy(&Hsv::new(hue, 1.0, 1.0).to_rgb())
    }
}

/// Convert the hexadecimal color to chromaticity clamped to the gamut.
pub fn hex_to_xy(hex: &str, gamut: &Gamut) -> Result<XyPoint, PaletteError> {
    Converter::new(gamut).hex_to_xy(hex)
}

/// Convert the RGB coordinates with unit range to chromaticity clamped to the
/// gamut.
pub fn rgb_to_xy(r: Float, g: Float, b: Float, gamut: &Gamut) -> Result<XyPoint, PaletteError> {
    Converter::new(gamut).rgb_to_xy(r, g, b)
}

/// Convert the RGB coordinates ranging `0..=255` to chromaticity clamped to
/// the gamut.
pub fn rgb255_to_xy(r: Float, g: Float, b: Float, gamut: &Gamut) -> Result<XyPoint, PaletteError> {
    Converter::new(gamut).rgb255_to_xy(r, g, b)
}

#[cfg(feature = "pyffi")]
pub(crate) mod pyffi {
    use super::{GamutClass, PyResult};
    use crate::Float;
    use pyo3::prelude::pyfunction;

    /// Convert the hexadecimal color to chromaticity clamped to the gamut.
    #[pyfunction]
    #[pyo3(name = "hex_to_xy")]
    pub(crate) fn hex_to_xy(hex: &str, class: GamutClass) -> PyResult<(Float, Float)> {
        let xy = super::hex_to_xy(hex, class.triangle())?;
        Ok((xy.x(), xy.y()))
    }

    /// Convert the RGB coordinates to chromaticity clamped to the gamut.
    #[pyfunction]
    #[pyo3(name = "rgb_to_xy")]
    pub(crate) fn rgb_to_xy(r: Float, g: Float, b: Float, class: GamutClass) -> PyResult<(Float, Float)> {
        let xy = super::rgb_to_xy(r, g, b, class.triangle())?;
        Ok((xy.x(), xy.y()))
    }

    /// Convert the RGB coordinates ranging `0..=255` to chromaticity clamped
    /// to the gamut.
    #[pyfunction]
    #[pyo3(name = "rgb255_to_xy")]
    pub(crate) fn rgb255_to_xy(r: Float, g: Float, b: Float, class: GamutClass) -> PyResult<(Float, Float)> {
        let xy = super::rgb255_to_xy(r, g, b, class.triangle())?;
        Ok((xy.x(), xy.y()))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{hex_to_xy, rgb255_to_xy, rgb_to_xy, Converter};
    use crate::color::XyPoint;
    use crate::error::{ColorFormatError, PaletteError};
    use crate::gamut::{GAMUT_A, GAMUT_B, GAMUT_C};
    use crate::{assert_close_enough, assert_same_xy};

    #[test]
    fn test_red() -> Result<(), PaletteError> {
        // Pure red lies just beyond gamut A's red corner...
        let xy = hex_to_xy("ff0000", &GAMUT_A)?;
        assert!(GAMUT_A.contains(&xy), "{} should be in gamut A", xy);
        assert!(xy.distance(&GAMUT_A.red()) < 0.01, "{} should be close to red", xy);

        // ...and well beyond those of gamuts B and C.
        assert_eq!(hex_to_xy("#FF0000", &GAMUT_B)?, XyPoint::new(0.675, 0.322));
        assert_eq!(hex_to_xy("ff0000", &GAMUT_C)?, GAMUT_C.red());
        Ok(())
    }

    #[test]
    fn test_white() -> Result<(), PaletteError> {
        let xy = rgb_to_xy(1.0, 1.0, 1.0, &GAMUT_B)?;
        assert!((xy.x() - 0.3227).abs() < 0.001, "x of {} is off", xy);
        assert!((xy.y() - 0.3290).abs() < 0.001, "y of {} is off", xy);
        assert_eq!(hex_to_xy("ffffff", &GAMUT_B)?, xy);
        Ok(())
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            hex_to_xy("zzzzzz", &GAMUT_A),
            Err(PaletteError::InvalidColorFormat(ColorFormatError::MalformedHex))
        );
        assert_eq!(
            hex_to_xy("#fff", &GAMUT_A),
            Err(PaletteError::InvalidColorFormat(ColorFormatError::WrongLength))
        );
        assert_eq!(
            rgb_to_xy(0.0, 2.0, 0.0, &GAMUT_A),
            Err(PaletteError::InvalidColorFormat(ColorFormatError::OutOfRange))
        );
        assert_eq!(hex_to_xy("000000", &GAMUT_A), Err(PaletteError::DegenerateColor));
    }

    #[test]
    fn test_rgb255() -> Result<(), PaletteError> {
        assert_eq!(rgb255_to_xy(255.0, 0.0, 0.0, &GAMUT_A)?, hex_to_xy("ff0000", &GAMUT_A)?);
        assert_eq!(
            Converter::new(&GAMUT_C).rgb255_to_xy(18.0, 52.0, 86.0)?,
            hex_to_xy("123456", &GAMUT_C)?
        );
        assert_eq!(rgb255_to_xy(255.0, 255.0, 255.0, &GAMUT_B)?, rgb_to_xy(1.0, 1.0, 1.0, &GAMUT_B)?);

        assert_eq!(
            rgb255_to_xy(256.0, 0.0, 0.0, &GAMUT_A),
            Err(PaletteError::InvalidColorFormat(ColorFormatError::OutOfRange))
        );
        assert_eq!(
            rgb255_to_xy(0.0, -1.0, 0.0, &GAMUT_A),
            Err(PaletteError::InvalidColorFormat(ColorFormatError::OutOfRange))
        );
        assert_eq!(rgb255_to_xy(0.0, 0.0, 0.0, &GAMUT_A), Err(PaletteError::DegenerateColor));
        Ok(())
    }

    #[test]
    fn test_always_in_gamut() -> Result<(), PaletteError> {
        for gamut in [GAMUT_A, GAMUT_B, GAMUT_C] {
            let converter = Converter::new(&gamut);
            for hex in ["ff0000", "00ff00", "0000ff", "ffff00", "00ffff", "ff00ff", "808080", "123456"] {
                let xy = converter.hex_to_xy(hex)?;
                assert!(gamut.contains(&xy), "{} for #{} escapes {}", xy, hex, gamut.class());
                assert_same_xy!(gamut.clamp(&xy), xy);
            }
        }
        Ok(())
    }

    #[test]
    fn test_back_to_rgb() -> Result<(), PaletteError> {
        let converter = Converter::new(&GAMUT_C);

        // Red comes back reddish, with the most saturated primary at maximum.
        let red = converter.xy_to_rgb(&converter.hex_to_xy("ff0000")?, 1.0);
        assert_eq!(red.to_24bit()[0], 0xff);
        let hue = red.to_hsv().hue();
        assert!(hue < 15.0, "hue {} should be red", hue);

        // Out of gamut chromaticity is clamped first.
        let beyond = XyPoint::new(0.9, 0.1);
        assert_eq!(
            converter.xy_to_hex(&beyond, 1.0),
            converter.xy_to_hex(&GAMUT_C.clamp(&beyond), 1.0)
        );

        // Zero brightness is black.
        assert_eq!(converter.xy_to_hex(&GAMUT_C.blue(), 0.0), "000000");
        Ok(())
    }

    #[test]
    fn test_random() -> Result<(), PaletteError> {
        let mut rng = StdRng::seed_from_u64(42);
        let converter = Converter::new(&GAMUT_B);

        let mut colors = Vec::new();
        for _ in 0..20 {
            let xy = converter.random_xy(&mut rng)?;
            assert!(GAMUT_B.contains(&xy), "{} should be in gamut B", xy);
            colors.push(xy);
        }
        assert!(
            colors.iter().any(|xy| *xy != colors[0]),
            "random colors should differ"
        );

        // Same seed, same color.
        let first = converter.random_xy(&mut StdRng::seed_from_u64(7))?;
        let second = converter.random_xy(&mut StdRng::seed_from_u64(7))?;
        assert_close_enough!(first.x(), second.x());
        Ok(())
    }
}
