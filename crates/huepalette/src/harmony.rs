//! Color harmonies.
//!
//! A harmony derives a palette from a root color by rotating the root's hue
//! by fixed offsets, while leaving saturation and value untouched. The first
//! offset of every harmony is zero, so the root itself always opens the
//! palette. For palettes longer than a harmony's offset table, the offsets
//! repeat cyclically.
//!
//! Palettes are consumed like a stack: The last color generated goes to the
//! first participating light. [`Planner::harmony`](crate::Planner::harmony)
//! takes care of that.

use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::color::Rgb;
use crate::error::PaletteError;
use crate::Float;

/// A harmony mode.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "huepalette.engine")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HarmonyMode {
    /// The root and its opposite on the color wheel.
    Complementary,
    /// The root and its two neighbors 30° to either side.
    Analogous,
    /// Three hues evenly spaced around the color wheel.
    Triad,
    /// Two complementary pairs 60° apart.
    Tetrad,
    /// Four hues evenly spaced around the color wheel.
    Square,
    /// The root and the two neighbors of its complement.
    SplitComplementary,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl HarmonyMode {
    /// Get the mode's canonical name.
    pub fn name(&self) -> &'static str {
        match *self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triad => "triad",
            Self::Tetrad => "tetrad",
            Self::Square => "square",
            Self::SplitComplementary => "split_complementary",
        }
    }
}

impl HarmonyMode {
    /// All harmony modes.
    pub const ALL: [HarmonyMode; 6] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triad,
        Self::Tetrad,
        Self::Square,
        Self::SplitComplementary,
    ];

    /// Get the hue offsets in degrees. The first offset is always zero.
    pub const fn offsets(&self) -> &'static [Float] {
        match *self {
            Self::Complementary => &[0.0, 180.0],
            Self::Analogous => &[0.0, 30.0, -30.0],
            Self::Triad => &[0.0, 120.0, 240.0],
            Self::Tetrad => &[0.0, 60.0, 180.0, 240.0],
            Self::Square => &[0.0, 90.0, 180.0, 270.0],
            Self::SplitComplementary => &[0.0, 150.0, 210.0],
        }
    }

    /// Generate a palette with `count` colors from the root color.
    ///
    /// The color at index `i` is the root rotated by offset `i` modulo the
    /// number of offsets. Since saturation is preserved, a gray root yields a
    /// palette of identical grays.
    ///
    /// ```
    /// # use huepalette::{HarmonyMode, Rgb};
    /// # use huepalette::error::PaletteError;
    /// # fn main() -> Result<(), PaletteError> {
    /// let root = Rgb::from_hex("ff0000")?;
    /// let palette = HarmonyMode::Triad.generate(&root, 4);
    /// let hex = palette.iter().map(|c| c.to_hex()).collect::<Vec<_>>();
    /// assert_eq!(hex, ["ff0000", "00ff00", "0000ff", "ff0000"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn generate(&self, root: &Rgb, count: usize) -> Vec<Rgb> {
        let hsv = root.to_hsv();
        self.offsets()
            .iter()
            .cycle()
            .take(count)
            .map(|offset| hsv.rotate(*offset).to_rgb())
            .collect()
    }
}

impl FromStr for HarmonyMode {
    type Err = PaletteError;

    /// Parse the harmony mode from its name.
    ///
    /// Names are case-insensitive, may use dashes instead of underscores, and
    /// `triadic` as well as `tetradic` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        let mode = match name.as_str() {
            "complementary" => Self::Complementary,
            "analogous" => Self::Analogous,
            "triad" | "triadic" => Self::Triad,
            "tetrad" | "tetradic" => Self::Tetrad,
            "square" => Self::Square,
            "split_complementary" => Self::SplitComplementary,
            _ => return Err(PaletteError::UnknownHarmonyMode(s.to_owned())),
        };
        Ok(mode)
    }
}

impl std::fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate a palette with `count` colors from the root color.
///
/// This function is a convenience for [`HarmonyMode::generate`].
pub fn generate(mode: HarmonyMode, root: &Rgb, count: usize) -> Vec<Rgb> {
    mode.generate(root, count)
}

// ====================================================================================================================
