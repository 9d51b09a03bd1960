//! Planning state changes for lights and groups.
//!
//! A [`Planner`] resolves targets against a bridge snapshot, runs the
//! conversion, harmony, and shuffle machinery, and renders the outcome as
//! requests ready for [`dispatch_all`](crate::dispatch_all). It never sends
//! anything itself.

use log::debug;
use rand::Rng;
use serde_json::json;

use crate::bridge::{Bridge, Group, Light, Method, Request};
use crate::color::{Rgb, XyPoint};
use crate::convert::Converter;
use crate::error::PaletteError;
use crate::gamut::GamutRegistry;
use crate::harmony::HarmonyMode;
use crate::opt::Options;
use crate::shuffle::Shuffler;

/// The target of a color change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target<'a> {
    /// A single light, identified by id.
    Light(&'a str),
    /// A group of lights, identified by id.
    Group(&'a str),
}

/// A new chromaticity for a light.
#[derive(Clone, Debug, PartialEq)]
pub struct LightUpdate {
    /// The id of the light to update.
    pub light_id: String,
    /// The light's new chromaticity, which lies within the light's gamut.
    pub xy: XyPoint,
}

impl LightUpdate {
    /// Render this update as a request for the light's state.
    pub fn to_request(&self) -> Request {
        state_request(Target::Light(&self.light_id), &self.xy)
    }
}

fn state_request(target: Target<'_>, xy: &XyPoint) -> Request {
    let endpoint = match target {
        Target::Light(id) => format!("/lights/{}/state", id),
        Target::Group(id) => format!("/groups/{}/action", id),
    };

    Request {
        method: Method::Put,
        endpoint,
        body: json!({ "xy": [xy.x(), xy.y()] }),
    }
}

/// A planner for color changes.
///
/// ```
/// # use huepalette::{Bridge, Planner, Target};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bridge = Bridge::from_json(
///     r#"{"1": {"modelid": "LCT001", "state": {"on": true, "xy": [0.3, 0.3]}}}"#,
///     r#"{}"#,
/// )?;
/// let request = Planner::new(&bridge).color(Target::Light("1"), "ff0000")?;
/// assert_eq!(request.to_string(), r#"PUT /lights/1/state {"xy":[0.675,0.322]}"#);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Planner<'b> {
    bridge: &'b Bridge,
    registry: GamutRegistry,
    shuffler: Shuffler,
}

impl<'b> Planner<'b> {
    /// Create a new planner with default options.
    pub fn new(bridge: &'b Bridge) -> Self {
        Self::with_options(bridge, &Options::default())
    }

    /// Create a new planner with the given options.
    pub fn with_options(bridge: &'b Bridge, options: &Options) -> Self {
        Self {
            bridge,
            registry: GamutRegistry::with_options(options),
            shuffler: Shuffler::with_options(options),
        }
    }

    /// Get the gamut registry.
    pub const fn registry(&self) -> &GamutRegistry {
        &self.registry
    }

    fn light(&self, id: &str) -> Result<&'b Light, PaletteError> {
        self.bridge
            .light(id)
            .ok_or_else(|| PaletteError::UnknownLight(id.to_owned()))
    }

    fn group(&self, id: &str) -> Result<&'b Group, PaletteError> {
        self.bridge
            .group(id)
            .ok_or_else(|| PaletteError::UnknownGroup(id.to_owned()))
    }

    /// Get the converter for the target, which uses the light's own gamut or,
    /// for groups, the default gamut.
    fn converter(&self, target: Target<'_>) -> Result<Converter<'static>, PaletteError> {
        let gamut = match target {
            Target::Light(id) => self.registry.gamut_for(&self.light(id)?.model_id),
            Target::Group(id) => {
                self.group(id)?;
                self.registry.default_gamut()
            }
        };
        Ok(Converter::new(gamut))
    }

    /// Plan setting the target to the hexadecimal color.
    pub fn color(&self, target: Target<'_>, hex: &str) -> Result<Request, PaletteError> {
        let xy = self.converter(target)?.hex_to_xy(hex)?;
        Ok(state_request(target, &xy))
    }

    /// Plan setting the target to a random, fully saturated color.
    pub fn random_color<R: Rng>(&self, target: Target<'_>, rng: &mut R) -> Result<Request, PaletteError> {
        let xy = self.converter(target)?.random_xy(rng)?;
        Ok(state_request(target, &xy))
    }

    /// Plan a harmony for the group.
    ///
    /// The palette has one color per participating light, i.e., per light
    /// that is on and capable of color. The palette is consumed from its end,
    /// so the first participating light receives the last color generated.
    /// Each color is converted with the receiving light's gamut.
    pub fn harmony(&self, group: &str, mode: &str, root: &str) -> Result<Vec<LightUpdate>, PaletteError> {
        let mode = mode.parse::<HarmonyMode>()?;
        let root = Rgb::from_hex(root)?;
        let participants = self.bridge.participants(self.group(group)?);

        let palette = mode.generate(&root, participants.len());
        debug!(
            "{} harmony of {} for {} lights in group `{}`",
            mode,
            root,
            participants.len(),
            group
        );

        palette
            .into_iter()
            .rev()
            .zip(participants)
            .map(|(color, light)| -> Result<LightUpdate, PaletteError> {
                let gamut = self.registry.gamut_for(&light.model_id);
                Ok(LightUpdate {
                    light_id: light.id.clone(),
                    xy: Converter::new(gamut).to_xy(&color)?,
                })
            })
            .collect()
    }

    /// Plan shuffling the group's colors.
    ///
    /// The participating lights' current chromaticities are deranged, so that
    /// no light keeps its color whenever that is possible. Since every
    /// chromaticity was valid for the light reporting it, it is reused
    /// without clamping.
    pub fn shuffle<R: Rng>(&self, group: &str, rng: &mut R) -> Result<Vec<LightUpdate>, PaletteError> {
        let participants = self.bridge.participants(self.group(group)?);
        let (ids, colors): (Vec<&str>, Vec<XyPoint>) = participants
            .iter()
            .filter_map(|light| light.xy.map(|xy| (light.id.as_str(), xy)))
            .unzip();

        debug!("shuffling {} colors in group `{}`", colors.len(), group);
        let shuffled = self.shuffler.shuffle(&colors, rng);

        Ok(ids
            .into_iter()
            .zip(shuffled)
            .map(|(id, xy)| LightUpdate {
                light_id: id.to_owned(),
                xy,
            })
            .collect())
    }
}

/// Render the updates as requests.
pub fn to_requests(updates: &[LightUpdate]) -> Vec<Request> {
    updates.iter().map(LightUpdate::to_request).collect()
}

// ====================================================================================================================
