//! The single-row feature record handed to the trained cost model.

use super::cylinder::{ApplicationType, CushionType, CylinderSelection};
use super::geometry::GeometryInput;
use serde::Serialize;

/// External column names of the predictor input, in order.
/// These MUST match exactly the schema the model artifact was trained
/// against. Any change here is a breaking change requiring retraining.
pub const FEATURE_COLUMNS: &[&str] = &[
    "Est. Wt (Kg)",
    "Rod",
    "Stroke",
    "Tube_OD",
    "Application",
    "Cushion Type",
];

/// Length of the numeric encoding: four numeric slots plus one-hot
/// application (5) and one-hot cushion (4).
pub const ENCODED_LEN: usize = 4 + ApplicationType::ALL.len() + CushionType::ALL.len();

/// One predictor input row. Constructed fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    #[serde(rename = "Est. Wt (Kg)")]
    pub est_wt_kg: f64,
    #[serde(rename = "Rod")]
    pub rod: f64,
    #[serde(rename = "Stroke")]
    pub stroke: f64,
    #[serde(rename = "Tube_OD")]
    pub tube_od: f64,
    #[serde(rename = "Application")]
    pub application: ApplicationType,
    #[serde(rename = "Cushion Type")]
    pub cushion: CushionType,
}

impl FeatureRecord {
    pub fn new(est_wt_kg: f64, geometry: &GeometryInput, selection: &CylinderSelection) -> Self {
        Self {
            est_wt_kg,
            rod: geometry.rod_mm,
            stroke: geometry.stroke_mm,
            tube_od: geometry.tube_od_mm,
            application: selection.application,
            cushion: selection.cushion,
        }
    }
}

/// Converts a record into the fixed-order numeric vector the regression
/// model consumes. Slot order MUST match the training pipeline exactly:
/// numerics first, then one-hot application, then one-hot cushion.
pub fn to_feature_vector(record: &FeatureRecord) -> Vec<f64> {
    let mut v = Vec::with_capacity(ENCODED_LEN);
    v.push(record.est_wt_kg);
    v.push(record.rod);
    v.push(record.stroke);
    v.push(record.tube_od);
    for app in ApplicationType::ALL {
        v.push(if record.application == app { 1.0 } else { 0.0 });
    }
    for cushion in CushionType::ALL {
        v.push(if record.cushion == cushion { 1.0 } else { 0.0 });
    }
    v
}
