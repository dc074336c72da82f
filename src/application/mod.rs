pub mod estimator;
pub mod ml;
