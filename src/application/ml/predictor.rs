use crate::domain::features::FeatureRecord;

/// Interface for trained cost models.
///
/// One structured record in, one scalar cost out. Implementations must be
/// immutable after construction so `predict` is safe to call concurrently.
pub trait CostPredictor: Send + Sync {
    /// Predict the cost for a single feature record.
    fn predict(&self, record: &FeatureRecord) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
