//! Utility module with huepalette's errors.

#[cfg(feature = "pyffi")]
use pyo3::exceptions::{PyKeyError, PyValueError};
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// An erroneous color format.
///
/// Each variant describes why a hexadecimal string, an RGB triple, or an xy
/// pair was rejected.
/// All of them surface as [`PaletteError::InvalidColorFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A hexadecimal color without exactly six digits. For example, `#fff`
    /// uses the three-digit shorthand, which fixtures do not accept.
    WrongLength,

    /// A hexadecimal color with the right length but characters other than
    /// hexadecimal digits. For example, `zzzzzz` has six letters, none of
    /// which is a digit.
    MalformedHex,

    /// An RGB or xy coordinate that is not a number or falls outside the
    /// expected range, either `0..=1` or, for RGB, `0..=255`.
    OutOfRange,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            WrongLength => f.write_str("hexadecimal color should have exactly 6 digits"),
            MalformedHex => {
                f.write_str("hexadecimal color should contain only the digits 0-9 and a-f")
            }
            OutOfRange => f.write_str("coordinates should be numbers within range"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// The palette engine's error.
///
/// Callers should treat [`PaletteError::InvalidColorFormat`] and
/// [`PaletteError::UnknownHarmonyMode`] as errors in user input to be
/// reported, not as defects. Unknown device models are not an error at all;
/// they fall back onto the registry's default gamut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteError {
    /// A malformed hexadecimal string or out-of-range RGB triple.
    InvalidColorFormat(ColorFormatError),

    /// A color without luminance, i.e., black, whose chromaticity is undefined.
    DegenerateColor,

    /// A harmony mode name that is not in the catalog.
    UnknownHarmonyMode(String),

    /// A light identifier that is not part of the bridge snapshot.
    UnknownLight(String),

    /// A group identifier that is not part of the bridge snapshot.
    UnknownGroup(String),
}

impl From<ColorFormatError> for PaletteError {
    fn from(value: ColorFormatError) -> Self {
        Self::InvalidColorFormat(value)
    }
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::InvalidColorFormat(ref error) => write!(f, "invalid color: {}", error),
            Self::DegenerateColor => f.write_str("black has no chromaticity and cannot be set"),
            Self::UnknownHarmonyMode(ref name) => write!(f, "unknown harmony mode `{}`", name),
            Self::UnknownLight(ref id) => write!(f, "no light with id `{}`", id),
            Self::UnknownGroup(ref id) => write!(f, "no group with id `{}`", id),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::InvalidColorFormat(ref error) = *self {
            Some(error)
        } else {
            None
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<PaletteError> for PyErr {
    fn from(value: PaletteError) -> Self {
        match value {
            PaletteError::UnknownLight(_) | PaletteError::UnknownGroup(_) => {
                PyKeyError::new_err(value.to_string())
            }
            _ => PyValueError::new_err(value.to_string()),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColorFormatError, PaletteError};
    use std::error::Error;

    #[test]
    fn test_display() {
        let error = PaletteError::from(ColorFormatError::WrongLength);
        assert_eq!(
            error.to_string(),
            "invalid color: hexadecimal color should have exactly 6 digits"
        );
        assert!(error.source().is_some());

        let error = PaletteError::UnknownHarmonyMode("tetris".to_string());
        assert_eq!(error.to_string(), "unknown harmony mode `tetris`");
        assert!(error.source().is_none());
    }
}
