use serde::{Deserialize, Serialize};
use zehvraat_catalog::encoding::{DESIGN_LEVELS, MATERIAL_SCORES};
use zehvraat_shared::JewelryInput;

/// Per-feature means used for standardization
pub const FEATURE_MEANS: [f64; 3] = [0.5, 15.0, 2.0];

/// Per-feature standard deviations used for standardization
pub const FEATURE_STDS: [f64; 3] = [0.25, 8.0, 1.0];

/// Encoded (but not yet normalized) model inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JewelryFeatures {
    pub material: f64,
    pub weight: f64,
    pub design: f64,
}

impl JewelryFeatures {
    pub fn extract(input: &JewelryInput) -> Self {
        Self {
            material: MATERIAL_SCORES.encode(&input.material),
            weight: input.weight_grams,
            design: DESIGN_LEVELS.encode(&input.design),
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.material, self.weight, self.design]
    }

    /// Standardize each feature with the fixed means and deviations
    pub fn normalized(&self) -> [f64; 3] {
        let raw = self.as_array();
        std::array::from_fn(|i| (raw[i] - FEATURE_MEANS[i]) / FEATURE_STDS[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silver_moderate_encoding() {
        let input = JewelryInput::new("Silver", 20.0, "Moderate");
        let features = JewelryFeatures::extract(&input);
        assert_eq!(features.as_array(), [0.75, 20.0, 2.0]);
    }

    #[test]
    fn test_unknown_labels_use_defaults() {
        let input = JewelryInput::new("Pearl", 3.0, "Filigree");
        let features = JewelryFeatures::extract(&input);
        assert_eq!(features.material, 0.5);
        assert_eq!(features.design, 1.0);
    }

    #[test]
    fn test_normalization() {
        let features = JewelryFeatures { material: 0.75, weight: 23.0, design: 2.0 };
        assert_eq!(features.normalized(), [1.0, 1.0, 0.0]);
    }
}
