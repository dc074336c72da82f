//! Cost estimation facade: weight formula in, predicted cost out.

use crate::application::ml::predictor::CostPredictor;
use crate::domain::cylinder::CylinderSelection;
use crate::domain::errors::EstimateError;
use crate::domain::features::FeatureRecord;
use crate::domain::geometry::{self, GeometryInput};
use std::sync::Arc;
use tracing::warn;

/// Outcome of one full estimation request. Request-scoped; nothing here
/// outlives the interaction that produced it.
#[derive(Debug)]
pub struct CostEstimate {
    pub weight_kg: f64,
    /// Negative weight means physically inconsistent geometry. The value is
    /// still fed to the predictor, but the caller must show a warning.
    pub weight_suspect: bool,
    pub record: FeatureRecord,
    pub cost: Result<f64, EstimateError>,
}

/// Facade over the weight formula and an injected predictor handle.
pub struct CostEstimator {
    predictor: Arc<dyn CostPredictor>,
}

impl CostEstimator {
    pub fn new(predictor: Arc<dyn CostPredictor>) -> Self {
        Self { predictor }
    }

    pub fn model_label(&self) -> String {
        format!("{} {}", self.predictor.name(), self.predictor.version())
    }

    /// Full pipeline: weight, feature record, single predictor invocation.
    pub fn estimate(&self, geometry: &GeometryInput, selection: &CylinderSelection) -> CostEstimate {
        let weight_kg = geometry::estimate_weight(geometry);
        let weight_suspect = weight_kg < 0.0;
        if weight_suspect {
            warn!("Estimated weight is negative ({weight_kg:.2} kg); check geometry");
        }

        let record = FeatureRecord::new(weight_kg, geometry, selection);
        let cost = self.estimate_cost(&record);

        CostEstimate {
            weight_kg,
            weight_suspect,
            record,
            cost,
        }
    }

    /// Invoke the predictor exactly once. No retry, no caching, no batching;
    /// any backend failure is shaped into `PredictionFailed` instead of
    /// escaping raw.
    pub fn estimate_cost(&self, record: &FeatureRecord) -> Result<f64, EstimateError> {
        self.predictor
            .predict(record)
            .map_err(|reason| EstimateError::PredictionFailed { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::mock::{FailingPredictor, FixedCostPredictor, RecordingPredictor};
    use crate::domain::cylinder::{ApplicationType, CushionType};

    fn default_geometry() -> GeometryInput {
        GeometryInput {
            tube_od_mm: 70.0,
            bore_mm: 60.0,
            rod_mm: 35.0,
            stroke_mm: 400.0,
            closed_len_mm: 650.0,
        }
    }

    fn default_selection() -> CylinderSelection {
        CylinderSelection {
            application: ApplicationType::Arm,
            cushion: CushionType::Nc,
        }
    }

    #[test]
    fn test_stub_cost_forwarded_unchanged() {
        let estimator = CostEstimator::new(Arc::new(FixedCostPredictor::new(5000.0)));

        let estimate = estimator.estimate(&default_geometry(), &default_selection());

        assert_eq!(estimate.cost.unwrap(), 5000.0);
        assert!(!estimate.weight_suspect);
        assert!((estimate.weight_kg - 13.7796).abs() < 1e-3);
    }

    #[test]
    fn test_record_handed_to_predictor_matches_inputs() {
        let predictor = Arc::new(RecordingPredictor::new(5000.0));
        let estimator = CostEstimator::new(predictor.clone());

        let estimate = estimator.estimate(&default_geometry(), &default_selection());

        let seen = predictor.last_record.lock().unwrap().clone().unwrap();
        assert_eq!(seen, estimate.record);
        assert_eq!(seen.est_wt_kg, estimate.weight_kg);
        assert_eq!(seen.rod, 35.0);
        assert_eq!(seen.stroke, 400.0);
        assert_eq!(seen.tube_od, 70.0);
        assert_eq!(seen.application, ApplicationType::Arm);
        assert_eq!(seen.cushion, CushionType::Nc);
    }

    #[test]
    fn test_predictor_failure_becomes_prediction_failed() {
        let estimator =
            CostEstimator::new(Arc::new(FailingPredictor::new("unknown categorical level")));

        let estimate = estimator.estimate(&default_geometry(), &default_selection());

        let err = estimate.cost.unwrap_err();
        let EstimateError::PredictionFailed { reason } = err;
        assert!(reason.contains("unknown categorical level"));
    }

    #[test]
    fn test_negative_weight_is_flagged_and_still_predicted() {
        let geometry = GeometryInput {
            tube_od_mm: 60.0,
            bore_mm: 58.0,
            rod_mm: 10.0,
            stroke_mm: 2000.0,
            closed_len_mm: 100.0,
        };
        let predictor = Arc::new(RecordingPredictor::new(1200.0));
        let estimator = CostEstimator::new(predictor.clone());

        let estimate = estimator.estimate(&geometry, &default_selection());

        assert!(estimate.weight_suspect);
        assert!(estimate.weight_kg < 0.0);
        // Permissive policy: the suspect weight flows through unchanged.
        let seen = predictor.last_record.lock().unwrap().clone().unwrap();
        assert_eq!(seen.est_wt_kg, estimate.weight_kg);
        assert_eq!(estimate.cost.unwrap(), 1200.0);
    }
}
