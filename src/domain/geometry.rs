//! Cylinder geometry and the closed-form weight estimate.
//!
//! The weight formula models the volumetric displacement of an annular steel
//! cylinder times a density constant. It is pure and total: a negative result
//! is a legitimate output signaling physically inconsistent geometry, and it
//! is the caller's job to surface a warning while still using the value.

use std::f64::consts::FRAC_PI_4;
use std::ops::RangeInclusive;

/// Steel density in kg/mm^3, matching the millimetre unit system of the
/// linear dimensions. Part of the trained-model contract; do not change.
pub const STEEL_DENSITY_KG_PER_MM3: f64 = 0.000_007_85;

/// Documented input ranges, enforced at the form boundary rather than by
/// `estimate_weight` itself.
pub const DIAMETER_RANGE_MM: RangeInclusive<u32> = 0..=200;
pub const STROKE_RANGE_MM: RangeInclusive<u32> = 0..=2000;
pub const CLOSED_LEN_RANGE_MM: RangeInclusive<u32> = 0..=2500;

/// Five cylinder dimensions in millimetres. All fields are expected to be
/// finite and non-negative; no ordering is enforced between bore and rod.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryInput {
    pub tube_od_mm: f64,
    pub bore_mm: f64,
    pub rod_mm: f64,
    pub stroke_mm: f64,
    pub closed_len_mm: f64,
}

/// Estimate cylinder weight in kilograms.
///
/// # Formula
/// weight = (pi/4) x 0.00000785 x (tube_OD^2 x closed_len - (bore^2 - rod^2) x stroke)
///
/// Deterministic for identical inputs. Can go negative when the bore
/// displacement term dominates the tube volume term.
pub fn estimate_weight(g: &GeometryInput) -> f64 {
    FRAC_PI_4
        * STEEL_DENSITY_KG_PER_MM3
        * (g.tube_od_mm * g.tube_od_mm * g.closed_len_mm
            - (g.bore_mm * g.bore_mm - g.rod_mm * g.rod_mm) * g.stroke_mm)
}
