use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Mock,
    Model,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Mode::Mock),
            "model" => Ok(Mode::Model),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'mock' or 'model'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub model_path: PathBuf,
    /// Cost returned by the mock predictor when MODE=mock.
    pub mock_cost: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("MODE").unwrap_or_else(|_| "model".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let model_path = env::var("MODEL_PATH")
            .unwrap_or_else(|_| "./models/cost_model.json".to_string())
            .into();

        let mock_cost = env::var("MOCK_COST")
            .unwrap_or_else(|_| "5000.0".to_string())
            .parse::<f64>()
            .context("Failed to parse MOCK_COST")?;

        Ok(Self {
            mode,
            model_path,
            mock_cost,
        })
    }
}
