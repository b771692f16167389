//! Static category → numeric constant tables.
//!
//! Every lookup resolves: labels that are not in a table silently map to
//! that table's default. Matching is exact and case-sensitive.

use serde::Serialize;

/// A fixed mapping from category label to a numeric score
#[derive(Debug, Clone, Copy)]
pub struct EncodingTable {
    name: &'static str,
    entries: &'static [(&'static str, f64)],
    default: f64,
}

impl EncodingTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, f64)], default: f64) -> Self {
        Self { name, entries, default }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> f64 {
        self.default
    }

    /// Value for a known label, `None` otherwise
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, value)| *value)
    }

    /// Value for `label`, falling back to the table default
    pub fn encode(&self, label: &str) -> f64 {
        match self.get(label) {
            Some(value) => value,
            None => {
                tracing::debug!(table = self.name, label, default = self.default, "Unknown label, using default");
                self.default
            }
        }
    }

    /// Known labels in declaration order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }
}

// Model features

pub const MATERIAL_SCORES: EncodingTable = EncodingTable::new(
    "material_score",
    &[
        ("Gold", 0.95),
        ("Silver", 0.75),
        ("Platinum", 0.98),
        ("Diamond", 0.99),
        ("Emerald", 0.90),
        ("Ruby", 0.85),
        ("Sapphire", 0.88),
        ("Crystal", 0.60),
        ("Rock", 0.20),
        ("Soil", 0.10),
    ],
    0.5,
);

pub const DESIGN_LEVELS: EncodingTable = EncodingTable::new(
    "design_level",
    &[
        ("Simple", 1.0),
        ("Moderate", 2.0),
        ("Intricate", 3.0),
        ("Very Intricate", 4.0),
        ("Custom", 5.0),
    ],
    1.0,
);

// Classic jewelry pricing (rupees)

pub const MATERIAL_BASE_PRICES: EncodingTable = EncodingTable::new(
    "material_base_price",
    &[
        ("Gold", 5_000.0),
        ("Silver", 1_500.0),
        ("Platinum", 8_000.0),
        ("Diamond", 12_000.0),
        ("Emerald", 9_000.0),
        ("Ruby", 7_000.0),
        ("Sapphire", 6_500.0),
        ("Crystal", 2_000.0),
        ("Rock", 1_000.0),
    ],
    800.0,
);

pub const DESIGN_MULTIPLIERS: EncodingTable = EncodingTable::new(
    "design_multiplier",
    &[
        ("Simple", 1.0),
        ("Moderate", 1.5),
        ("Intricate", 2.0),
        ("Very Intricate", 2.5),
        ("Custom", 3.0),
    ],
    1.0,
);

// Classic car pricing (rupees)

pub const CAR_BRAND_BASE_PRICES: EncodingTable = EncodingTable::new(
    "car_brand_base_price",
    &[
        ("Maruti Suzuki", 600_000.0),
        ("Hyundai", 800_000.0),
        ("Tata", 700_000.0),
        ("Mahindra", 900_000.0),
        ("Kia", 1_000_000.0),
        ("Honda", 1_100_000.0),
        ("Toyota", 1_200_000.0),
    ],
    800_000.0,
);

pub const FUEL_MULTIPLIERS: EncodingTable = EncodingTable::new(
    "fuel_multiplier",
    &[("Diesel", 1.1), ("Electric", 1.3), ("CNG", 0.9)],
    1.0,
);

pub const TRANSMISSION_MULTIPLIERS: EncodingTable = EncodingTable::new(
    "transmission_multiplier",
    &[("Automatic", 1.15)],
    1.0,
);

/// Anything that is not a known first/second/third owner gets the deepest discount
pub const OWNERSHIP_DISCOUNTS: EncodingTable = EncodingTable::new(
    "ownership_discount",
    &[("First Owner", 0.0), ("Second Owner", 0.15), ("Third Owner", 0.25)],
    0.35,
);

pub const FIRST_OWNER: &str = "First Owner";

// Form options

pub const JEWELRY_MATERIALS: &[&str] = &[
    "Rock", "Soil", "Crystal", "Gold", "Silver", "Platinum", "Diamond", "Emerald", "Ruby", "Sapphire",
];

pub const DESIGN_COMPLEXITIES: &[&str] = &["Simple", "Moderate", "Intricate", "Very Intricate", "Custom"];

pub const CAR_BRANDS: &[&str] = &[
    "Maruti Suzuki", "Hyundai", "Tata", "Mahindra", "Kia", "Honda", "Toyota",
    "Volkswagen", "Ford", "Renault", "Skoda", "MG", "Nissan", "Jeep",
];

pub const FUEL_TYPES: &[&str] = &["Petrol", "Diesel", "CNG", "Electric", "Hybrid"];

pub const TRANSMISSION_TYPES: &[&str] = &["Manual", "Automatic"];

pub const OWNER_TYPES: &[&str] = &["First Owner", "Second Owner", "Third Owner", "Fourth Owner or More"];

/// Oldest manufacturing year offered on the car form
pub const EARLIEST_YEAR: i32 = 2000;

/// Manufacturing years from `current_year` down to 2000
pub fn manufacturing_years(current_year: i32) -> Vec<i32> {
    (EARLIEST_YEAR..=current_year).rev().collect()
}

/// Every option list shown on the prediction forms
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub materials: Vec<&'static str>,
    pub designs: Vec<&'static str>,
    pub car_brands: Vec<&'static str>,
    pub years: Vec<i32>,
    pub fuel_types: Vec<&'static str>,
    pub transmissions: Vec<&'static str>,
    pub owners: Vec<&'static str>,
}

impl FormOptions {
    pub fn for_year(current_year: i32) -> Self {
        Self {
            materials: JEWELRY_MATERIALS.to_vec(),
            designs: DESIGN_COMPLEXITIES.to_vec(),
            car_brands: CAR_BRANDS.to_vec(),
            years: manufacturing_years(current_year),
            fuel_types: FUEL_TYPES.to_vec(),
            transmissions: TRANSMISSION_TYPES.to_vec(),
            owners: OWNER_TYPES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_encode_to_constants() {
        assert_eq!(MATERIAL_SCORES.encode("Gold"), 0.95);
        assert_eq!(MATERIAL_SCORES.encode("Silver"), 0.75);
        assert_eq!(MATERIAL_SCORES.encode("Soil"), 0.10);
        assert_eq!(DESIGN_LEVELS.encode("Moderate"), 2.0);
        assert_eq!(DESIGN_LEVELS.encode("Very Intricate"), 4.0);
        assert_eq!(MATERIAL_BASE_PRICES.encode("Diamond"), 12_000.0);
        assert_eq!(CAR_BRAND_BASE_PRICES.encode("Toyota"), 1_200_000.0);
        assert_eq!(OWNERSHIP_DISCOUNTS.encode("Second Owner"), 0.15);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_default() {
        assert_eq!(MATERIAL_SCORES.encode("Pearl"), 0.5);
        assert_eq!(DESIGN_LEVELS.encode("Baroque"), 1.0);
        assert_eq!(MATERIAL_BASE_PRICES.encode("Soil"), 800.0);
        assert_eq!(DESIGN_MULTIPLIERS.encode(""), 1.0);
        assert_eq!(CAR_BRAND_BASE_PRICES.encode("Jeep"), 800_000.0);
        assert_eq!(FUEL_MULTIPLIERS.encode("Petrol"), 1.0);
        assert_eq!(TRANSMISSION_MULTIPLIERS.encode("Manual"), 1.0);
        assert_eq!(OWNERSHIP_DISCOUNTS.encode("Fourth Owner or More"), 0.35);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(MATERIAL_SCORES.get("gold"), None);
        assert_eq!(MATERIAL_SCORES.encode("gold"), MATERIAL_SCORES.default_value());
    }

    #[test]
    fn test_every_form_option_has_a_score() {
        for material in JEWELRY_MATERIALS {
            assert!(MATERIAL_SCORES.get(material).is_some(), "missing {}", material);
        }
        let designs: Vec<_> = DESIGN_LEVELS.labels().collect();
        assert_eq!(designs, DESIGN_COMPLEXITIES);
    }

    #[test]
    fn test_manufacturing_years() {
        let years = manufacturing_years(2026);
        assert_eq!(years.len(), 27);
        assert_eq!(years.first(), Some(&2026));
        assert_eq!(years.last(), Some(&2000));
    }
}
