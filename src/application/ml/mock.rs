//! Deterministic predictor stand-ins for mock mode and tests.

use super::predictor::CostPredictor;
use crate::domain::features::FeatureRecord;
use std::sync::Mutex;

/// Always returns the same cost, regardless of the record.
pub struct FixedCostPredictor {
    cost: f64,
}

impl FixedCostPredictor {
    pub fn new(cost: f64) -> Self {
        Self { cost }
    }
}

impl CostPredictor for FixedCostPredictor {
    fn predict(&self, _record: &FeatureRecord) -> Result<f64, String> {
        Ok(self.cost)
    }

    fn name(&self) -> &str {
        "Fixed Cost Mock"
    }

    fn version(&self) -> &str {
        "v0"
    }
}

/// Returns a fixed cost and captures the last record it was asked to score,
/// so tests can assert on the exact schema handed across the seam.
pub struct RecordingPredictor {
    cost: f64,
    pub last_record: Mutex<Option<FeatureRecord>>,
}

impl RecordingPredictor {
    pub fn new(cost: f64) -> Self {
        Self {
            cost,
            last_record: Mutex::new(None),
        }
    }
}

impl CostPredictor for RecordingPredictor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, String> {
        if let Ok(mut last) = self.last_record.lock() {
            *last = Some(record.clone());
        }
        Ok(self.cost)
    }

    fn name(&self) -> &str {
        "Recording Mock"
    }

    fn version(&self) -> &str {
        "v0"
    }
}

/// Fails every prediction with a fixed reason.
pub struct FailingPredictor {
    reason: String,
}

impl FailingPredictor {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl CostPredictor for FailingPredictor {
    fn predict(&self, _record: &FeatureRecord) -> Result<f64, String> {
        Err(self.reason.clone())
    }

    fn name(&self) -> &str {
        "Failing Mock"
    }

    fn version(&self) -> &str {
        "v0"
    }
}
