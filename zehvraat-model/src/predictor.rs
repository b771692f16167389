use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use zehvraat_catalog::{round_to, MarketJitter};
use zehvraat_shared::JewelryInput;

use crate::error::ModelError;
use crate::features::JewelryFeatures;
use crate::network::PriceNetwork;

/// Settings for the model-backed jewelry predictor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Rupees added to every scaled output
    pub price_offset: f64,
    /// Rupees per unit of network output
    pub price_scale: f64,
    /// Lowest pre-jitter price the predictor will quote
    pub price_floor: f64,
    pub jitter: MarketJitter,
    pub denomination: i64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            price_offset: 5_000.0,
            price_scale: 50_000.0,
            price_floor: 1_000.0,
            jitter: MarketJitter::MODEL,
            denomination: 100,
        }
    }
}

type NetworkBuilder = Box<dyn Fn() -> Result<PriceNetwork, ModelError> + Send + Sync>;

/// Jewelry price predictor backed by the fixed-weight network.
///
/// The network is built on first use. Concurrent callers wait on the same
/// initialization, so at most one network is ever constructed per
/// predictor. A failed build leaves the predictor unloaded and the error
/// goes back to the caller.
pub struct JewelryPricePredictor {
    config: PredictorConfig,
    network: OnceCell<Arc<PriceNetwork>>,
    builder: NetworkBuilder,
    builds: AtomicUsize,
}

impl JewelryPricePredictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self::with_builder(config, PriceNetwork::synthetic)
    }

    /// Use a custom network constructor instead of the synthetic one
    pub fn with_builder<F>(config: PredictorConfig, builder: F) -> Self
    where
        F: Fn() -> Result<PriceNetwork, ModelError> + Send + Sync + 'static,
    {
        Self {
            config,
            network: OnceCell::new(),
            builder: Box::new(builder),
            builds: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.network.initialized()
    }

    /// Number of times the network constructor has run
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    /// Build the network if needed and return it
    pub async fn load(&self) -> Result<Arc<PriceNetwork>, ModelError> {
        let network = self
            .network
            .get_or_try_init(|| async {
                tokio::task::yield_now().await;
                self.builds.fetch_add(1, Ordering::SeqCst);

                match (self.builder)() {
                    Ok(network) => {
                        tracing::info!(layers = ?network.layer_sizes(), "Synthetic jewelry price prediction model loaded");
                        Ok(Arc::new(network))
                    }
                    Err(e) => {
                        tracing::error!("Error loading model: {}", e);
                        Err(ModelError::LoadFailed(e.to_string()))
                    }
                }
            })
            .await?;

        Ok(network.clone())
    }

    /// Price before market jitter and rounding
    pub async fn base_price(&self, input: &JewelryInput) -> Result<f64, ModelError> {
        let network = self.load().await?;
        let features = JewelryFeatures::extract(input);
        let raw = network.predict(&features.normalized())?;

        let scaled = self.config.price_offset + raw * self.config.price_scale;
        Ok(scaled.max(self.config.price_floor))
    }

    /// Jittered, rounded price using a caller-supplied generator
    pub async fn predict_with_rng<R: Rng + ?Sized>(&self, input: &JewelryInput, rng: &mut R) -> Result<i64, ModelError> {
        let base = self.base_price(input).await?;
        Ok(self.finish(input, base, self.config.jitter.factor(rng)))
    }

    /// Jittered, rounded price
    pub async fn predict(&self, input: &JewelryInput) -> Result<i64, ModelError> {
        let base = self.base_price(input).await?;
        let factor = self.config.jitter.factor(&mut rand::thread_rng());
        Ok(self.finish(input, base, factor))
    }

    fn finish(&self, input: &JewelryInput, base: f64, factor: f64) -> i64 {
        let price = round_to(base * factor, self.config.denomination);
        tracing::debug!(material = %input.material, base, factor, price, "Model prediction");
        price
    }
}

impl Default for JewelryPricePredictor {
    fn default() -> Self {
        Self::new(PredictorConfig::default())
    }
}
