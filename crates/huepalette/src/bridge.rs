//! A snapshot of a bridge's lights and groups, plus the means for sending
//! state changes back.
//!
//! The engine never talks to a bridge itself. Instead, the caller fetches the
//! `/lights` and `/groups` resources, turns them into a [`Bridge`] with
//! [`Bridge::from_json`], and eventually hands the computed [`Request`]s to an
//! implementation of [`Dispatch`].

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::XyPoint;

/// A light.
///
/// White-only fixtures do not report a chromaticity and hence have no `xy`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Light {
    /// The bridge's id for the light.
    pub id: String,
    /// The user-facing name.
    pub name: String,
    /// Whether the light is on.
    pub on: bool,
    /// The current chromaticity, if the light is capable of color.
    pub xy: Option<XyPoint>,
    /// The model identifier, which determines the light's gamut.
    pub model_id: String,
}

impl Light {
    /// Create a new light that is on.
    pub fn new<I: Into<String>, M: Into<String>>(id: I, model_id: M, xy: Option<XyPoint>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            on: true,
            xy,
            model_id: model_id.into(),
        }
    }

    /// Turn this light off.
    #[must_use = "method returns a new light and does not mutate original value"]
    pub fn turned_off(mut self) -> Self {
        self.on = false;
        self
    }

    /// Determine whether this light takes part in group-wide color changes,
    /// i.e., whether it is on and capable of color.
    pub fn is_participant(&self) -> bool {
        self.on && self.xy.is_some()
    }
}

/// A group of lights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group {
    /// The bridge's id for the group.
    pub id: String,
    /// The user-facing name.
    pub name: String,
    /// The ids of the member lights, in the bridge's order.
    pub lights: Vec<String>,
}

impl Group {
    /// Create a new group with the given member lights.
    pub fn new<I, L, S>(id: I, lights: L) -> Self
    where
        I: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            lights: lights.into_iter().map(Into::into).collect(),
        }
    }
}

// The shapes of the bridge's JSON resources, which key lights and groups by id.

#[derive(Deserialize)]
struct RawState {
    #[serde(default)]
    on: bool,
    #[serde(default)]
    xy: Option<XyPoint>,
}

#[derive(Deserialize)]
struct RawLight {
    #[serde(default)]
    name: String,
    #[serde(default)]
    modelid: String,
    state: RawState,
}

#[derive(Deserialize)]
struct RawGroup {
    #[serde(default)]
    name: String,
    #[serde(default)]
    lights: Vec<String>,
}

// ====================================================================================================================

/// A snapshot of a bridge's lights and groups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bridge {
    lights: BTreeMap<String, Light>,
    groups: BTreeMap<String, Group>,
}

impl Bridge {
    /// Create a new, empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the bodies of the `/lights` and `/groups` resources.
    ///
    /// Parsing fails if a light reports chromaticity coordinates outside
    /// `0..=1`.
    ///
    /// ```
    /// # use huepalette::Bridge;
    /// let bridge = Bridge::from_json(
    ///     r#"{"1": {"name": "Desk", "modelid": "LCT014",
    ///               "state": {"on": true, "xy": [0.3, 0.3]}}}"#,
    ///     r#"{"7": {"name": "Office", "lights": ["1"]}}"#,
    /// )?;
    /// assert_eq!(bridge.light("1").map(|l| l.name.as_str()), Some("Desk"));
    /// assert_eq!(bridge.group("7").map(|g| g.lights.len()), Some(1));
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn from_json(lights: &str, groups: &str) -> Result<Self, serde_json::Error> {
        let lights: BTreeMap<String, RawLight> = serde_json::from_str(lights)?;
        let groups: BTreeMap<String, RawGroup> = serde_json::from_str(groups)?;

        let mut bridge = Self::new();
        for (id, raw) in lights {
            bridge.add_light(Light {
                id,
                name: raw.name,
                on: raw.state.on,
                xy: raw.state.xy,
                model_id: raw.modelid,
            });
        }
        for (id, raw) in groups {
            bridge.add_group(Group {
                id,
                name: raw.name,
                lights: raw.lights,
            });
        }

        debug!(
            "bridge snapshot with {} lights and {} groups",
            bridge.lights.len(),
            bridge.groups.len()
        );
        Ok(bridge)
    }

    /// Add the light, replacing any light with the same id.
    pub fn add_light(&mut self, light: Light) -> &mut Self {
        self.lights.insert(light.id.clone(), light);
        self
    }

    /// Add the group, replacing any group with the same id.
    pub fn add_group(&mut self, group: Group) -> &mut Self {
        self.groups.insert(group.id.clone(), group);
        self
    }

    /// Look up a light.
    pub fn light(&self, id: &str) -> Option<&Light> {
        self.lights.get(id)
    }

    /// Look up a group.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }

    /// Get an iterator over all lights, ordered by id.
    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.values()
    }

    /// Get an iterator over all groups, ordered by id.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Get the group's lights that take part in group-wide color changes.
    ///
    /// The lights are in the group's order. Member ids without a matching
    /// light are skipped.
    pub fn participants(&self, group: &Group) -> Vec<&Light> {
        group
            .lights
            .iter()
            .filter_map(|id| {
                let light = self.lights.get(id);
                if light.is_none() {
                    debug!("group `{}` lists unknown light `{}`", group.id, id);
                }
                light
            })
            .filter(|light| light.is_participant())
            .collect()
    }
}

// ====================================================================================================================

/// An HTTP method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource.
    Get,
    /// Update a resource, e.g., a light's state.
    Put,
    /// Create a resource.
    Post,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// Get the method's name.
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for the bridge.
///
/// Endpoints are relative to the bridge's API root for the paired user, e.g.,
/// `/lights/3/state`.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The endpoint relative to the API root.
    pub endpoint: String,
    /// The JSON body.
    pub body: Value,
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.method, self.endpoint, self.body)
    }
}

/// The capability to send requests to a bridge.
///
/// Implementations provide the transport. The engine only decides what to
/// send.
pub trait Dispatch {
    /// The transport's error.
    type Error;

    /// Send a request.
    fn request(&mut self, method: Method, endpoint: &str, body: &Value) -> Result<(), Self::Error>;
}

/// Send all requests in order, stopping at the first failure.
///
/// This function returns the number of requests sent.
pub fn dispatch_all<D: Dispatch>(dispatch: &mut D, requests: &[Request]) -> Result<usize, D::Error> {
    for request in requests {
        debug!("dispatching {}", request);
        dispatch.request(request.method, &request.endpoint, &request.body)?;
    }
    Ok(requests.len())
}

// ====================================================================================================================
