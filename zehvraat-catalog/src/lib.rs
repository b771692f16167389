pub mod encoding;
pub mod pricing;
pub mod market;

pub use encoding::{EncodingTable, FormOptions};
pub use pricing::{PricingConfig, PricingEngine};
pub use market::{round_to, MarketJitter};
