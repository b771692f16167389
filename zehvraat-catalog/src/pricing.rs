use rand::Rng;
use serde::{Deserialize, Serialize};
use zehvraat_shared::{CarInput, JewelryInput};

use crate::encoding::{
    CAR_BRAND_BASE_PRICES, DESIGN_MULTIPLIERS, FIRST_OWNER, FUEL_MULTIPLIERS, MATERIAL_BASE_PRICES,
    OWNERSHIP_DISCOUNTS, TRANSMISSION_MULTIPLIERS,
};
use crate::market::{round_to, MarketJitter};

/// Settings for the classic (formula-based) pricing engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Market variance applied to every quote
    pub jitter: MarketJitter,

    /// Jewelry quotes are rounded to this many rupees
    pub jewelry_denomination: i64,

    /// Car quotes are rounded to this many rupees
    pub car_denomination: i64,

    /// Kilometers at which depreciation from mileage would reach 100%
    pub km_full_depreciation: f64,

    /// Cap on the mileage reduction
    pub max_km_reduction: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            jitter: MarketJitter::CLASSIC,
            jewelry_denomination: 100,
            car_denomination: 1000,
            km_full_depreciation: 200_000.0,
            max_km_reduction: 0.4,
        }
    }
}

/// Classic pricing engine: lookup tables and nested multipliers
pub struct PricingEngine {
    config: PricingConfig,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Jewelry price before market jitter and rounding
    pub fn jewelry_base_price(&self, input: &JewelryInput) -> f64 {
        let mut price = MATERIAL_BASE_PRICES.encode(&input.material);

        // Every gram adds 10% of the material base
        let weight_factor = input.weight_grams * 0.2;
        price += (weight_factor * price / 100.0) * 50.0;

        price * DESIGN_MULTIPLIERS.encode(&input.design)
    }

    /// Car price before market jitter and rounding
    pub fn car_base_price(&self, input: &CarInput) -> f64 {
        let mut price = CAR_BRAND_BASE_PRICES.encode(&input.brand);

        // Newer is more expensive; a 2010 car keeps its brand price
        let year_factor = (input.year - 2000) as f64 / 20.0;
        price *= 0.5 + year_factor;

        let km_reduction = (input.kilometers as f64 / self.config.km_full_depreciation)
            .min(self.config.max_km_reduction);
        price *= 1.0 - km_reduction;

        price *= FUEL_MULTIPLIERS.encode(&input.fuel_type);
        price *= TRANSMISSION_MULTIPLIERS.encode(&input.transmission);

        if input.owner != FIRST_OWNER {
            price *= 1.0 - OWNERSHIP_DISCOUNTS.encode(&input.owner);
        }

        price
    }

    /// Jittered jewelry quote rounded to the jewelry denomination
    pub fn quote_jewelry<R: Rng + ?Sized>(&self, input: &JewelryInput, rng: &mut R) -> i64 {
        let base = self.jewelry_base_price(input);
        let quoted = round_to(self.config.jitter.apply(base, rng), self.config.jewelry_denomination);
        tracing::debug!(material = %input.material, base, quoted, "Jewelry quote");
        quoted
    }

    /// Jittered car quote rounded to the car denomination
    pub fn quote_car<R: Rng + ?Sized>(&self, input: &CarInput, rng: &mut R) -> i64 {
        let base = self.car_base_price(input);
        let quoted = round_to(self.config.jitter.apply(base, rng), self.config.car_denomination);
        tracing::debug!(brand = %input.brand, base, quoted, "Car quote");
        quoted
    }
}
