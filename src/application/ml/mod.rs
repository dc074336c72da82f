pub mod mock;
pub mod predictor;
pub mod smartcore_predictor;
