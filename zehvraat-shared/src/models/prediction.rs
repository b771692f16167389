use serde::{Deserialize, Serialize};

use crate::currency::format_inr;

/// Attributes of a piece of jewelry, already validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JewelryInput {
    pub material: String,
    pub weight_grams: f64,
    pub design: String,
}

impl JewelryInput {
    pub fn new(material: impl Into<String>, weight_grams: f64, design: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            weight_grams,
            design: design.into(),
        }
    }
}

/// Attributes of a used car, already validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarInput {
    pub brand: String,
    /// Collected for display only; does not affect the price
    pub model: String,
    pub year: i32,
    pub kilometers: u64,
    pub fuel_type: String,
    pub transmission: String,
    pub owner: String,
}

/// Which pricing variant produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionMethod {
    /// Lookup tables and nested multipliers
    Classic,
    /// Fixed-weight feed-forward network
    Model,
}

/// Estimated price in whole rupees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub price: i64,
    pub formatted: String,
    pub currency: String,
    pub method: PredictionMethod,
}

impl PredictionResult {
    pub fn new(price: i64, method: PredictionMethod) -> Self {
        Self {
            price,
            formatted: format_inr(price),
            currency: "INR".to_string(),
            method,
        }
    }
}
