use std::sync::Arc;
use std::time::Duration;
use zehvraat_catalog::PricingEngine;
use zehvraat_model::{JewelryPricePredictor, PredictorConfig};

use crate::app_config::Config;

#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingEngine>,
    pub predictor: Arc<JewelryPricePredictor>,
    /// Delay before classic predictions resolve
    pub simulated_latency: Duration,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let predictor = JewelryPricePredictor::new(PredictorConfig {
            price_offset: config.model.price_offset,
            price_scale: config.model.price_scale,
            price_floor: config.model.price_floor,
            ..Default::default()
        });

        Self {
            pricing: Arc::new(PricingEngine::default()),
            predictor: Arc::new(predictor),
            simulated_latency: config.prediction.simulated_latency(),
        }
    }
}
