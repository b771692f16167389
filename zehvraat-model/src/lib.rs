pub mod error;
pub mod features;
pub mod network;
pub mod predictor;

pub use error::ModelError;
pub use features::JewelryFeatures;
pub use network::{DenseLayer, PriceNetwork};
pub use predictor::{JewelryPricePredictor, PredictorConfig};
