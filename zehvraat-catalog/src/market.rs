use rand::Rng;
use serde::{Deserialize, Serialize};

/// Uniform random multiplier simulating day-to-day market variance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketJitter {
    /// Inclusive lower bound
    pub low: f64,
    /// Exclusive upper bound
    pub high: f64,
}

impl MarketJitter {
    /// ±10%, used by the classic formulas
    pub const CLASSIC: MarketJitter = MarketJitter { low: 0.9, high: 1.1 };

    /// ±5%, used after model inference
    pub const MODEL: MarketJitter = MarketJitter { low: 0.95, high: 1.05 };

    /// Draw a factor in `[low, high)`
    pub fn factor<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.high <= self.low {
            return self.low;
        }
        rng.gen_range(self.low..self.high)
    }

    pub fn apply<R: Rng + ?Sized>(&self, price: f64, rng: &mut R) -> f64 {
        price * self.factor(rng)
    }
}

/// Round to the nearest multiple of `denomination`, halves away from zero
pub fn round_to(value: f64, denomination: i64) -> i64 {
    if denomination <= 1 {
        return value.round() as i64;
    }
    let d = denomination as f64;
    ((value / d).round() * d) as i64
}
