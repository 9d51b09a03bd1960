//! # huepalette: Gamut-Aware Colors for Networked Light Fixtures
//!
//! Networked fixtures, such as Philips Hue bulbs and strips, are set to a
//! color by sending them CIE 1931 xy chromaticity coordinates. Each fixture
//! model, however, can only reproduce chromaticities inside a triangle, its
//! *gamut*, and bridges handle out-of-gamut values poorly. This crate computes
//! valid chromaticities for such fixtures and plans the requests that set
//! them.
//!
//!
//! ## Overview
//!
//!   * [`GamutRegistry`] maps model identifiers to the three standard gamuts
//!     [`GAMUT_A`], [`GAMUT_B`], and [`GAMUT_C`], falling back onto a
//!     configurable default gamut for unknown models and for groups.
//!   * [`Converter`] turns hexadecimal or RGB colors into chromaticities
//!     clamped to a gamut, and back.
//!   * [`HarmonyMode`] derives palettes from a root color by rotating its
//!     hue.
//!   * [`Shuffler`] permutes colors so that no light keeps its color.
//!   * [`Planner`] ties these together: It resolves lights and groups against a
//!     [`Bridge`] snapshot and renders the results as [`Request`]s, which a
//!     [`Dispatch`] implementation sends on.
//!
//! The crate uses the [`log`](https://docs.rs/log) facade for diagnostics but
//! never installs a logger. [`opt::Options`] holds the few configuration
//! knobs, which can also be read from the environment.
//!
//!
//! ## Example
//!
//! ```
//! # use huepalette::{dispatch_all, to_requests, Bridge, Dispatch, Method, Planner};
//! # use rand::SeedableRng;
//! # use serde_json::Value;
//! struct Log(Vec<String>);
//!
//! impl Dispatch for Log {
//!     type Error = std::convert::Infallible;
//!
//!     fn request(&mut self, method: Method, endpoint: &str, _: &Value) -> Result<(), Self::Error> {
//!         self.0.push(format!("{} {}", method, endpoint));
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bridge = Bridge::from_json(
//!     r#"{"1": {"modelid": "LCT014", "state": {"on": true, "xy": [0.3, 0.3]}},
//!         "2": {"modelid": "LLC010", "state": {"on": true, "xy": [0.5, 0.4]}}}"#,
//!     r#"{"1": {"lights": ["1", "2"]}}"#,
//! )?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let updates = Planner::new(&bridge).shuffle("1", &mut rng)?;
//! assert_eq!(updates[0].xy, bridge.light("2").and_then(|l| l.xy).ok_or("no xy")?);
//!
//! let mut log = Log(Vec::new());
//! dispatch_all(&mut log, &to_requests(&updates))?;
//! assert_eq!(log.0, ["PUT /lights/1/state", "PUT /lights/2/state"]);
//! # Ok(())
//! # }
//! ```

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod bridge;
mod color;
mod convert;
mod core;
pub mod error;
mod gamut;
mod harmony;
pub mod opt;
mod plan;
mod shuffle;
mod util;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use bridge::{dispatch_all, Bridge, Dispatch, Group, Light, Method, Request};
pub use color::{Hsv, Rgb, XyPoint};
pub use convert::{hex_to_xy, rgb255_to_xy, rgb_to_xy, Converter};
pub use gamut::{Gamut, GamutClass, GamutRegistry, GAMUT_A, GAMUT_B, GAMUT_C};
pub use harmony::{generate, HarmonyMode};
pub use plan::{to_requests, LightUpdate, Planner, Target};
pub use shuffle::{is_derangement, shuffle, Shuffler};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert::pyffi::hex_to_xy, m)?)?;
    m.add_function(wrap_pyfunction!(convert::pyffi::rgb_to_xy, m)?)?;
    m.add_function(wrap_pyfunction!(convert::pyffi::rgb255_to_xy, m)?)?;

    m.add_class::<GamutClass>()?;
    m.add_class::<HarmonyMode>()?;
    Ok(())
}
