use serde::Serialize;

/// A known market price for a jewelry item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceSample {
    pub material: &'static str,
    pub weight_grams: f64,
    pub design: &'static str,
    pub price: i64,
}

const fn sample(material: &'static str, weight_grams: f64, design: &'static str, price: i64) -> ReferenceSample {
    ReferenceSample { material, weight_grams, design, price }
}

/// Sample prices from the Indian jewelry market
pub const REFERENCE_SAMPLES: &[ReferenceSample] = &[
    sample("Gold", 10.0, "Simple", 50_000),
    sample("Gold", 15.0, "Moderate", 80_000),
    sample("Gold", 20.0, "Intricate", 120_000),
    sample("Gold", 25.0, "Very Intricate", 175_000),
    sample("Gold", 30.0, "Custom", 220_000),
    sample("Silver", 15.0, "Simple", 8_000),
    sample("Silver", 20.0, "Moderate", 12_000),
    sample("Silver", 25.0, "Intricate", 18_000),
    sample("Silver", 30.0, "Very Intricate", 25_000),
    sample("Silver", 35.0, "Custom", 32_000),
    sample("Platinum", 8.0, "Simple", 70_000),
    sample("Platinum", 10.0, "Moderate", 90_000),
    sample("Platinum", 12.0, "Intricate", 120_000),
    sample("Platinum", 15.0, "Very Intricate", 160_000),
    sample("Platinum", 18.0, "Custom", 200_000),
    sample("Diamond", 2.0, "Simple", 100_000),
    sample("Diamond", 3.0, "Moderate", 150_000),
    sample("Diamond", 4.0, "Intricate", 220_000),
    sample("Diamond", 5.0, "Very Intricate", 300_000),
    sample("Diamond", 6.0, "Custom", 400_000),
    sample("Emerald", 3.0, "Moderate", 80_000),
    sample("Ruby", 4.0, "Intricate", 70_000),
    sample("Sapphire", 4.0, "Moderate", 65_000),
    sample("Crystal", 8.0, "Simple", 12_000),
    sample("Rock", 10.0, "Simple", 2_000),
    sample("Soil", 12.0, "Simple", 1_000),
];

/// Aggregate statistics over the reference samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub count: usize,
    /// Distinct materials in first-seen order
    pub materials: Vec<String>,
    pub avg_price: f64,
}

impl DatasetSummary {
    pub fn from_samples(samples: &[ReferenceSample]) -> Self {
        let mut materials: Vec<String> = Vec::new();
        for s in samples {
            if !materials.iter().any(|m| m == s.material) {
                materials.push(s.material.to_string());
            }
        }

        let avg_price = if samples.is_empty() {
            0.0
        } else {
            samples.iter().map(|s| s.price as f64).sum::<f64>() / samples.len() as f64
        };

        Self {
            count: samples.len(),
            materials,
            avg_price,
        }
    }
}

pub fn summary() -> DatasetSummary {
    DatasetSummary::from_samples(REFERENCE_SAMPLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_summary() {
        let summary = summary();
        assert_eq!(summary.count, 26);
        assert_eq!(summary.materials.len(), 10);
        assert_eq!(summary.materials[0], "Gold");
        assert_eq!(summary.materials[9], "Soil");
        assert!((summary.avg_price - 2_780_000.0 / 26.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_summary() {
        let summary = DatasetSummary::from_samples(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.materials.is_empty());
        assert_eq!(summary.avg_price, 0.0);
    }
}
