use thiserror::Error;

/// Errors surfaced by the cost estimation facade
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("Prediction failed: {reason}")]
    PredictionFailed { reason: String },
}

/// Errors from parsing categorical cylinder selections
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown application type: {0}")]
    UnknownApplication(String),

    #[error("Unknown cushioning type: {0}")]
    UnknownCushion(String),
}
