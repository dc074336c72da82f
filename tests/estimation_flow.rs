//! End-to-end facade flow against mock predictors.

use cylcost::application::estimator::CostEstimator;
use cylcost::application::ml::mock::{FailingPredictor, RecordingPredictor};
use cylcost::domain::cylinder::{ApplicationType, CushionType, CylinderSelection};
use cylcost::domain::errors::EstimateError;
use cylcost::domain::features::FEATURE_COLUMNS;
use cylcost::domain::geometry::GeometryInput;
use std::sync::Arc;

fn catalog_geometry() -> GeometryInput {
    GeometryInput {
        tube_od_mm: 70.0,
        bore_mm: 60.0,
        rod_mm: 35.0,
        stroke_mm: 400.0,
        closed_len_mm: 650.0,
    }
}

#[test]
fn full_pipeline_produces_weight_and_forwards_cost() {
    let predictor = Arc::new(RecordingPredictor::new(5000.0));
    let estimator = CostEstimator::new(predictor.clone());

    let selection = CylinderSelection {
        application: ApplicationType::Boom,
        cushion: CushionType::Cb,
    };
    let estimate = estimator.estimate(&catalog_geometry(), &selection);

    assert!((estimate.weight_kg - 13.7796).abs() < 1e-3);
    assert!(!estimate.weight_suspect);
    assert_eq!(estimate.cost.unwrap(), 5000.0);

    // The record crossing the predictor seam must carry the exact external
    // schema the artifact was trained against.
    let seen = predictor.last_record.lock().unwrap().clone().unwrap();
    let json = serde_json::to_value(&seen).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), FEATURE_COLUMNS.len());
    for column in FEATURE_COLUMNS {
        assert!(obj.contains_key(*column), "missing column {column:?}");
    }
    assert_eq!(obj["Est. Wt (Kg)"], estimate.weight_kg);
    assert_eq!(obj["Rod"], 35.0);
    assert_eq!(obj["Stroke"], 400.0);
    assert_eq!(obj["Tube_OD"], 70.0);
    assert_eq!(obj["Application"], "Boom Cylinder");
    assert_eq!(obj["Cushion Type"], "CB");
}

#[test]
fn inconsistent_geometry_warns_but_still_predicts() {
    let predictor = Arc::new(RecordingPredictor::new(3100.0));
    let estimator = CostEstimator::new(predictor.clone());

    let geometry = GeometryInput {
        tube_od_mm: 60.0,
        bore_mm: 58.0,
        rod_mm: 10.0,
        stroke_mm: 2000.0,
        closed_len_mm: 100.0,
    };
    let selection = CylinderSelection {
        application: ApplicationType::Arm,
        cushion: CushionType::Nc,
    };
    let estimate = estimator.estimate(&geometry, &selection);

    assert!(estimate.weight_suspect);
    assert!(estimate.weight_kg < 0.0);
    assert_eq!(estimate.cost.unwrap(), 3100.0);

    let seen = predictor.last_record.lock().unwrap().clone().unwrap();
    assert_eq!(seen.est_wt_kg, estimate.weight_kg);
}

#[test]
fn predictor_failure_is_reported_not_propagated() {
    let estimator = CostEstimator::new(Arc::new(FailingPredictor::new(
        "columns are missing: {'Cushion Type'}",
    )));

    let selection = CylinderSelection {
        application: ApplicationType::Swing,
        cushion: CushionType::Ch,
    };
    let estimate = estimator.estimate(&catalog_geometry(), &selection);

    // The weight side of the request is unaffected by the failure.
    assert!((estimate.weight_kg - 13.7796).abs() < 1e-3);

    let EstimateError::PredictionFailed { reason } = estimate.cost.unwrap_err();
    assert!(reason.contains("Cushion Type"));
}

#[test]
fn selections_outside_the_enumerated_sets_never_reach_the_facade() {
    // The parse boundary is the only way to turn free text into a selection.
    assert!("Track Cylinder".parse::<ApplicationType>().is_err());
    assert!("ZZ".parse::<CushionType>().is_err());
    assert_eq!(ApplicationType::ALL.len(), 5);
    assert_eq!(CushionType::ALL.len(), 4);
}
