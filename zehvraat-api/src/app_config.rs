use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub prediction: PredictionConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Milliseconds to wait before a classic prediction resolves; 0 disables
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,
}

impl PredictionConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self { simulated_latency_ms: default_latency_ms() }
    }
}

fn default_latency_ms() -> u64 { 1500 }

/// Rescaling applied to the network output
#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    #[serde(default = "default_price_offset")]
    pub price_offset: f64,
    #[serde(default = "default_price_scale")]
    pub price_scale: f64,
    #[serde(default = "default_price_floor")]
    pub price_floor: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            price_offset: default_price_offset(),
            price_scale: default_price_scale(),
            price_floor: default_price_floor(),
        }
    }
}

fn default_price_offset() -> f64 { 5_000.0 }
fn default_price_scale() -> f64 { 50_000.0 }
fn default_price_floor() -> f64 { 1_000.0 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local, uncommitted overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `ZEHVRAAT__MODEL__PRICE_FLOOR=2000` sets `model.price_floor`
            .add_source(config::Environment::with_prefix("ZEHVRAAT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.prediction.simulated_latency(), Duration::from_millis(1500));
        assert_eq!(config.model.price_offset, 5_000.0);
        assert_eq!(config.model.price_floor, 1_000.0);
    }

    #[test]
    fn test_partial_source_fills_defaults() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str("[model]\nprice_floor = 2500.0\n", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.model.price_floor, 2_500.0);
        assert_eq!(config.model.price_scale, 50_000.0);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.prediction.simulated_latency_ms, 1500);
    }
}
