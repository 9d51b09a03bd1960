mod conversion;
mod equality;
mod gamut;
mod math;
mod string;

// conversion
pub(crate) use conversion::{
    from_24bit, hsv_to_rgb, rgb_to_hsv, rgb_to_xyz, to_24bit, xy_to_rgb, xyz_to_xy,
};

// equality
pub use equality::to_eq_bits;
pub(crate) use equality::is_negligible;

// gamut
pub(crate) use gamut::{clamp_to_triangle, in_triangle, Triangle};
#[cfg(test)]
pub(crate) use gamut::{closest_on_segment, distance_squared};

// math
pub(crate) use math::FloatExt;

// string
pub(crate) use string::{format_hex, parse_hex};
