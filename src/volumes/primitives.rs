//! Geometry primitives
//!
//! Diameter→area conversion, annulus area and depth-interval helpers.
//! Diameters are inches, areas m², depths m.

use std::f64::consts::PI;

use crate::config::defaults::{INCH_TO_METER, LITERS_PER_CUBIC_METER};

/// Cross-sectional area of a bore of `diameter_in` inches, in m².
///
/// Formula: A = π × (d/2 × 0.0254)²
pub fn diameter_to_area(diameter_in: f64) -> f64 {
    let radius_m = diameter_in / 2.0 * INCH_TO_METER;
    PI * (radius_m * radius_m)
}

/// Annulus area between an outer bore and an inner pipe OD, in m².
///
/// Floors at zero: an inner pipe wider than its nominal container leaves
/// no annulus rather than a negative one.
pub fn annulus_area(outer_id_in: f64, inner_od_in: f64) -> f64 {
    (diameter_to_area(outer_id_in) - diameter_to_area(inner_od_in)).max(0.0)
}

/// Capacity in L/m expressed as a cross-sectional area in m².
pub fn capacity_to_area(liters_per_meter: f64) -> f64 {
    liters_per_meter / LITERS_PER_CUBIC_METER
}

/// Bore radius (m) backed out of a capacity in L/m.
///
/// radius = √((L/m ÷ 1000) / π)
pub fn bore_radius_from_capacity(liters_per_meter: f64) -> f64 {
    (capacity_to_area(liters_per_meter) / PI).max(0.0).sqrt()
}

/// Steel cross-section (m²) of a pipe given its OD and internal capacity.
///
/// Used when the catalog carries no explicit open-ended displacement.
pub fn steel_area_from_capacity(od_in: f64, bore_l_per_m: f64) -> f64 {
    let od_radius_m = od_in / 2.0 * INCH_TO_METER;
    let bore_radius_m = bore_radius_from_capacity(bore_l_per_m);
    (PI * (od_radius_m * od_radius_m - bore_radius_m * bore_radius_m)).max(0.0)
}

/// Length of the overlap between `[a_top, a_bottom)` and `[b_top, b_bottom)`.
pub fn overlap_length(a_top: f64, a_bottom: f64, b_top: f64, b_bottom: f64) -> f64 {
    (a_bottom.min(b_bottom) - a_top.max(b_top)).max(0.0)
}

/// Split `[start, end)` at `poi` into (above, below) lengths.
///
/// A segment ending exactly at the POI is entirely above it, one starting
/// exactly at the POI is entirely below it.
pub fn split_at_poi(start: f64, end: f64, poi: f64) -> (f64, f64) {
    let length = (end - start).max(0.0);
    if end <= poi {
        (length, 0.0)
    } else if start >= poi {
        (0.0, length)
    } else {
        (poi - start, end - poi)
    }
}

pub fn cubic_meters_to_liters(volume_m3: f64) -> f64 {
    volume_m3 * LITERS_PER_CUBIC_METER
}
