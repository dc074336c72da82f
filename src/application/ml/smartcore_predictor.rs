use super::predictor::CostPredictor;
use crate::domain::features::{self, FeatureRecord};
use anyhow::Context;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Cost model backend over a serialized smartcore random forest.
///
/// The artifact is loaded once at construction and never mutated afterwards,
/// so a shared reference can serve any number of concurrent callers.
pub struct SmartCorePredictor {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl SmartCorePredictor {
    /// Load a serde_json-serialized regression artifact. A missing or
    /// corrupt artifact is an error, not a silent fallback.
    pub fn load(model_path: &Path) -> anyhow::Result<Self> {
        let file = File::open(model_path)
            .with_context(|| format!("Failed to open model artifact at {model_path:?}"))?;

        let model = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to deserialize model artifact at {model_path:?}"))?;

        info!("Loaded cost model from {:?}", model_path);
        Ok(Self { model })
    }
}

impl CostPredictor for SmartCorePredictor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, String> {
        let input_vec = features::to_feature_vector(record);
        let input_matrix = match DenseMatrix::from_2d_vec(&vec![input_vec]) {
            Ok(m) => m,
            Err(e) => return Err(format!("Matrix creation failed: {}", e)),
        };

        match self.model.predict(&input_matrix) {
            Ok(predictions) => match predictions.first() {
                Some(pred) => Ok(*pred),
                None => Err("No prediction returned".to_string()),
            },
            Err(e) => Err(format!("Model inference failed: {}", e)),
        }
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
