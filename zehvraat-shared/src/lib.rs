pub mod models;
pub mod currency;
pub mod dataset;

pub use models::prediction::{CarInput, JewelryInput, PredictionMethod, PredictionResult};
pub use currency::format_inr;
pub use dataset::{ReferenceSample, DatasetSummary};
