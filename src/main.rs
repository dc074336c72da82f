use cylcost::application::estimator::CostEstimator;
use cylcost::application::ml::mock::FixedCostPredictor;
use cylcost::application::ml::predictor::CostPredictor;
use cylcost::application::ml::smartcore_predictor::SmartCorePredictor;
use cylcost::config::{Config, Mode};
use cylcost::interfaces::app::EstimatorApp;
use std::sync::Arc;
use tracing::{Level, info};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .with_target(false) // cleaner
        .init();

    let config = Config::from_env()?;

    // The model artifact is loaded exactly once and shared read-only.
    let predictor: Arc<dyn CostPredictor> = match config.mode {
        Mode::Model => Arc::new(SmartCorePredictor::load(&config.model_path)?),
        Mode::Mock => {
            info!("Running with mock predictor (fixed cost {})", config.mock_cost);
            Arc::new(FixedCostPredictor::new(config.mock_cost))
        }
    };

    let estimator = CostEstimator::new(predictor);
    info!("Predictor ready: {}", estimator.model_label());

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_title("Cylinder Cost Estimator"),
        ..Default::default()
    };

    eframe::run_native(
        "Cylinder Cost Estimator",
        native_options,
        Box::new(|_cc| Ok(Box::new(EstimatorApp::new(estimator)))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
