//! Device gamuts and the registry mapping device models to them.
//!
//! Each fixture can only reproduce chromaticities within a triangle in the xy
//! plane. Philips publishes three such triangles, gamuts A, B, and C, and
//! assigns every color-capable model to one of them.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use log::debug;

use crate::color::XyPoint;
use crate::core::{clamp_to_triangle, in_triangle, Triangle};
use crate::opt::Options;
use crate::Float;

/// The class of a device gamut.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "huepalette.engine")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GamutClass {
    /// The gamut of first-generation LivingColors and LightStrips.
    A,
    /// The gamut of first-generation Hue bulbs.
    B,
    /// The gamut of later Hue bulbs and LightStrips Plus. It covers the
    /// largest area of the three and hence is the default.
    #[default]
    C,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl GamutClass {
    /// Get the gamut's name, which is the letter A, B, or C.
    pub fn name(&self) -> &'static str {
        match *self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl GamutClass {
    /// All gamut classes.
    pub const ALL: [GamutClass; 3] = [Self::A, Self::B, Self::C];

    /// Get the gamut's chromaticity triangle.
    pub fn gamut(&self) -> Gamut {
        *self.triangle()
    }

    /// Get a reference to the gamut's chromaticity triangle.
    pub const fn triangle(&self) -> &'static Gamut {
        match *self {
            Self::A => &GAMUT_A,
            Self::B => &GAMUT_B,
            Self::C => &GAMUT_C,
        }
    }

    /// Parse the gamut class from its name, ignoring case and surrounding
    /// white space.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            _ => None,
        }
    }
}

impl std::fmt::Display for GamutClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gamut {}", self.name())
    }
}

// ====================================================================================================================

/// A device gamut.
///
/// A gamut is the triangle spanned by a fixture's red, green, and blue
/// primaries in the xy chromaticity plane. Gamuts are immutable; the three
/// standard ones are available as [`GAMUT_A`], [`GAMUT_B`], and [`GAMUT_C`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gamut {
    class: GamutClass,
    vertices: Triangle,
}

impl Gamut {
    /// Get the gamut's class.
    pub const fn class(&self) -> GamutClass {
        self.class
    }

    /// Get the red primary.
    pub const fn red(&self) -> XyPoint {
        XyPoint::new(self.vertices[0][0], self.vertices[0][1])
    }

    /// Get the green primary.
    pub const fn green(&self) -> XyPoint {
        XyPoint::new(self.vertices[1][0], self.vertices[1][1])
    }

    /// Get the blue primary.
    pub const fn blue(&self) -> XyPoint {
        XyPoint::new(self.vertices[2][0], self.vertices[2][1])
    }

    /// Determine whether the point lies inside or on the boundary of this
    /// gamut.
    pub fn contains(&self, point: &XyPoint) -> bool {
        in_triangle(&self.vertices, &point.to_array())
    }

    /// Clamp the point to this gamut.
    ///
    /// If the point lies outside the triangle, this method returns the nearest
    /// point on the triangle's boundary by Euclidean distance. Otherwise, it
    /// returns the point unchanged. Hence clamping is idempotent.
    ///
    /// ```
    /// # use huepalette::{XyPoint, GAMUT_B};
    /// let beyond_red = XyPoint::new(0.72, 0.28);
    /// let clamped = GAMUT_B.clamp(&beyond_red);
    /// assert_eq!(clamped, GAMUT_B.red());
    /// assert_eq!(GAMUT_B.clamp(&clamped), clamped);
    /// ```
    pub fn clamp(&self, point: &XyPoint) -> XyPoint {
        let [x, y] = clamp_to_triangle(&self.vertices, &point.to_array());
        XyPoint::new(x, y)
    }

    /// Get the vertices in red, green, blue order.
    pub fn vertices(&self) -> [XyPoint; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Compute the area of the gamut's triangle.
    pub fn area(&self) -> Float {
        let [[x1, y1], [x2, y2], [x3, y3]] = self.vertices;
        (x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2)).abs() / 2.0
    }
}

/// The gamut of first-generation LivingColors and LightStrips.
pub const GAMUT_A: Gamut = Gamut {
    class: GamutClass::A,
    vertices: [[0.704, 0.296], [0.2151, 0.7106], [0.138, 0.08]],
};

/// The gamut of first-generation Hue bulbs.
pub const GAMUT_B: Gamut = Gamut {
    class: GamutClass::B,
    vertices: [[0.675, 0.322], [0.4091, 0.518], [0.167, 0.04]],
};

/// The gamut of later Hue bulbs and LightStrips Plus.
pub const GAMUT_C: Gamut = Gamut {
    class: GamutClass::C,
    vertices: [[0.692, 0.308], [0.17, 0.7], [0.153, 0.048]],
};

// ====================================================================================================================

/// The model identifiers of known color fixtures and their gamut classes.
const MODELS: [(&str, GamutClass); 19] = [
    ("LST001", GamutClass::A),
    ("LLC005", GamutClass::A),
    ("LLC006", GamutClass::A),
    ("LLC007", GamutClass::A),
    ("LLC010", GamutClass::A),
    ("LLC011", GamutClass::A),
    ("LLC012", GamutClass::A),
    ("LLC013", GamutClass::A),
    ("LLC014", GamutClass::A),
    ("LCT001", GamutClass::B),
    ("LCT002", GamutClass::B),
    ("LCT003", GamutClass::B),
    ("LCT007", GamutClass::B),
    ("LLM001", GamutClass::B),
    ("LCT010", GamutClass::C),
    ("LCT011", GamutClass::C),
    ("LCT014", GamutClass::C),
    ("LLC020", GamutClass::C),
    ("LST002", GamutClass::C),
];

/// A registry of device gamuts.
///
/// The registry resolves a fixture's model identifier to its gamut. Lookups
/// never fail: Unknown models resolve to the registry's default gamut, which
/// also serves group-level operations spanning several models. Unless
/// configured otherwise, the default is gamut C, which has the broadest
/// coverage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GamutRegistry {
    default: GamutClass,
}

impl GamutRegistry {
    /// Create a new registry with the given default gamut class.
    pub const fn new(default: GamutClass) -> Self {
        Self { default }
    }

    /// Create a new registry with the options' default gamut class.
    pub fn with_options(options: &Options) -> Self {
        Self::new(options.default_gamut())
    }

    /// Look up the gamut class for the model identifier.
    ///
    /// Unlike [`GamutRegistry::gamut_for`], this method does not fall back onto
    /// the default but returns `None` for unknown models.
    pub fn lookup(&self, model_id: &str) -> Option<GamutClass> {
        let model_id = model_id.trim();
        MODELS
            .iter()
            .find(|(id, _)| *id == model_id)
            .map(|(_, class)| *class)
    }

    /// Get the gamut for the model identifier.
    pub fn gamut_for(&self, model_id: &str) -> &'static Gamut {
        if let Some(class) = self.lookup(model_id) {
            class.triangle()
        } else {
            debug!(
                "unknown model `{}` falls back onto {}",
                model_id, self.default
            );
            self.default_gamut()
        }
    }

    /// Get the default gamut.
    pub const fn default_gamut(&self) -> &'static Gamut {
        self.default.triangle()
    }

    /// Get the default gamut class.
    pub const fn default_class(&self) -> GamutClass {
        self.default
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Gamut, GamutClass, GamutRegistry, GAMUT_A, GAMUT_B, GAMUT_C};
    use crate::color::XyPoint;
    use crate::core::{closest_on_segment, distance_squared};
    use crate::{assert_same_xy, Float};

    #[test]
    fn test_registry() {
        let registry = GamutRegistry::default();
        assert_eq!(registry.gamut_for("LLC010").class(), GamutClass::A);
        assert_eq!(registry.gamut_for("LCT001").class(), GamutClass::B);
        assert_eq!(registry.gamut_for(" LCT014 ").class(), GamutClass::C);
        assert_eq!(registry.lookup("LWB004"), None);
        assert_eq!(registry.gamut_for("LWB004"), &GAMUT_C);
        assert_eq!(registry.gamut_for(""), registry.default_gamut());

        let registry = GamutRegistry::new(GamutClass::A);
        assert_eq!(registry.gamut_for("LWB004"), &GAMUT_A);
        assert_eq!(registry.gamut_for("LCT003"), &GAMUT_B);
    }

    #[test]
    fn test_class() {
        assert_eq!(GamutClass::from_name("b"), Some(GamutClass::B));
        assert_eq!(GamutClass::from_name(" C\n"), Some(GamutClass::C));
        assert_eq!(GamutClass::from_name("D"), None);
        assert_eq!(GamutClass::A.to_string(), "gamut A");
        assert_eq!(GamutClass::B.gamut(), GAMUT_B);
    }

    #[test]
    fn test_contains_vertices() {
        for gamut in [GAMUT_A, GAMUT_B, GAMUT_C] {
            for vertex in gamut.vertices() {
                assert!(gamut.contains(&vertex), "{:?} should contain {}", gamut.class(), vertex);
                assert_eq!(gamut.clamp(&vertex), vertex);
            }
            assert!(gamut.contains(&XyPoint::new(0.35, 0.35)));
            assert!(!gamut.contains(&XyPoint::new(0.0, 0.0)));
            assert!(!gamut.contains(&XyPoint::new(0.9, 0.9)));
        }
    }

    #[test]
    fn test_area() {
        assert!(GAMUT_B.area() < GAMUT_A.area());
        assert!(GAMUT_A.area() < GAMUT_C.area());
        assert!((GAMUT_A.area() - 0.1701).abs() < 0.001);
        assert!((GAMUT_C.area() - 0.1735).abs() < 0.001);
    }

    #[test]
    fn test_default_is_broadest() {
        let default = GamutRegistry::default().default_gamut();
        for class in GamutClass::ALL {
            assert!(
                class.gamut().area() <= default.area(),
                "{} covers more than default {}",
                class,
                default.class()
            );
        }
        assert_eq!(GamutRegistry::default().gamut_for("XYZ999"), default);
    }

    /// Walk the gamut's boundary in small steps and return the closest
    /// boundary sample to the point.
    fn nearest_boundary_sample(gamut: &Gamut, point: &XyPoint) -> Float {
        let [red, green, blue] = gamut.vertices().map(|v| v.to_array());
        let mut best = Float::INFINITY;
        for (a, b) in [(red, green), (green, blue), (blue, red)] {
            for step in 0..=1_000 {
                let t = step as Float / 1_000.0;
                let sample = [
                    (b[0] - a[0]).mul_add(t, a[0]),
                    (b[1] - a[1]).mul_add(t, a[1]),
                ];
                best = best.min(distance_squared(&sample, &point.to_array()).sqrt());
            }
        }
        best
    }

    #[test]
    fn test_clamp_is_nearest() {
        let outside = [
            XyPoint::new(0.0, 0.0),
            XyPoint::new(0.8, 0.2),
            XyPoint::new(0.1, 0.9),
            XyPoint::new(0.5, 0.8),
            XyPoint::new(0.05, 0.3),
            XyPoint::new(0.4, 0.0),
        ];

        for gamut in [GAMUT_A, GAMUT_B, GAMUT_C] {
            for point in outside {
                assert!(!gamut.contains(&point), "{} should be outside", point);

                let clamped = gamut.clamp(&point);
                assert!(gamut.contains(&clamped), "{} should be inside", clamped);

                // The clamped point lies on an edge.
                let [red, green, blue] = gamut.vertices().map(|v| v.to_array());
                let on_edge = [(red, green), (green, blue), (blue, red)].iter().any(|(a, b)| {
                    distance_squared(&closest_on_segment(a, b, &clamped.to_array()), &clamped.to_array())
                        < 1e-12
                });
                assert!(on_edge, "{} should be on the boundary", clamped);

                // And no boundary sample is closer.
                let distance = clamped.distance(&point);
                let sampled = nearest_boundary_sample(&gamut, &point);
                assert!(distance <= sampled + 1e-9, "{} is not nearest", clamped);

                // Idempotent.
                assert_same_xy!(gamut.clamp(&clamped), clamped);
            }
        }
    }
}
