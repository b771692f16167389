use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use zehvraat_catalog::encoding::EARLIEST_YEAR;
use zehvraat_shared::{CarInput, JewelryInput};

/// Field name → user-facing message
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug, thiserror::Error)]
#[error("validation failed on {} field(s)", .0.len())]
pub struct ValidationError(pub FieldErrors);

// Fields are kept as raw JSON so a wrong type becomes a field error
// instead of a rejected body.

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JewelryForm {
    pub material: Option<Value>,
    pub weight: Option<Value>,
    pub design: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarForm {
    pub brand: Option<Value>,
    pub model: Option<Value>,
    pub year: Option<Value>,
    pub kilometers: Option<Value>,
    pub fuel_type: Option<Value>,
    pub transmission: Option<Value>,
    pub owner: Option<Value>,
}

/// A finite number submitted either as a JSON number or as text
fn number(field: &Option<Value>) -> Option<f64> {
    let value = match field.as_ref()? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

fn required(field: &Option<Value>, name: &'static str, message: &str, errors: &mut FieldErrors) -> String {
    match field.as_ref().and_then(Value::as_str).map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            errors.insert(name, message.to_string());
            String::new()
        }
    }
}

impl JewelryForm {
    pub fn validate(&self) -> Result<JewelryInput, ValidationError> {
        let mut errors = FieldErrors::new();

        let material = required(&self.material, "material", "Please select a material type.", &mut errors);
        let design = required(&self.design, "design", "Please select design complexity.", &mut errors);

        let weight = number(&self.weight).filter(|w| *w > 0.0);
        if weight.is_none() {
            errors.insert("weight", "Please enter a valid weight in grams.".to_string());
        }

        match weight {
            Some(weight_grams) if errors.is_empty() => Ok(JewelryInput { material, weight_grams, design }),
            _ => Err(ValidationError(errors)),
        }
    }
}

impl CarForm {
    pub fn validate(&self, current_year: i32) -> Result<CarInput, ValidationError> {
        let mut errors = FieldErrors::new();

        let brand = required(&self.brand, "brand", "Please select a car brand.", &mut errors);
        let model = required(&self.model, "model", "Please specify the car model.", &mut errors);
        let fuel_type = required(&self.fuel_type, "fuelType", "Please select a fuel type.", &mut errors);
        let transmission = required(&self.transmission, "transmission", "Please select a transmission type.", &mut errors);
        let owner = required(&self.owner, "owner", "Please select the ownership status.", &mut errors);

        let year = number(&self.year)
            .filter(|y| y.fract() == 0.0 && (EARLIEST_YEAR as f64..=current_year as f64).contains(y))
            .map(|y| y as i32);
        if year.is_none() {
            errors.insert("year", "Please select the car manufacturing year.".to_string());
        }

        // Readings are truncated to whole kilometers
        let kilometers = number(&self.kilometers)
            .filter(|km| *km >= 0.0)
            .map(|km| km.trunc() as u64);
        if kilometers.is_none() {
            errors.insert("kilometers", "Please enter a valid kilometer reading.".to_string());
        }

        match (year, kilometers) {
            (Some(year), Some(kilometers)) if errors.is_empty() => Ok(CarInput {
                brand,
                model,
                year,
                kilometers,
                fuel_type,
                transmission,
                owner,
            }),
            _ => Err(ValidationError(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jewelry(body: Value) -> JewelryForm {
        serde_json::from_value(body).unwrap()
    }

    fn car_form() -> CarForm {
        serde_json::from_value(json!({
            "brand": "Hyundai",
            "model": "i20",
            "year": "2019",
            "kilometers": "45000",
            "fuelType": "Petrol",
            "transmission": "Manual",
            "owner": "First Owner"
        }))
        .unwrap()
    }

    #[test]
    fn test_weight_as_text() {
        let input = jewelry(json!({ "material": "Silver", "weight": "20", "design": "Moderate" })).validate().unwrap();
        assert_eq!(input, JewelryInput::new("Silver", 20.0, "Moderate"));
    }

    #[test]
    fn test_invalid_weights() {
        for weight in [json!(""), json!("abc"), json!("0"), json!(-3), json!(true), json!([10])] {
            let err = jewelry(json!({ "material": "Gold", "weight": weight, "design": "Simple" })).validate().unwrap_err();
            assert_eq!(err.0.get("weight").map(String::as_str), Some("Please enter a valid weight in grams."));
        }
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = JewelryForm::default().validate().unwrap_err();
        assert_eq!(err.0.len(), 3);
        assert!(err.0.contains_key("material"));
        assert!(err.0.contains_key("design"));
    }

    #[test]
    fn test_non_text_selection_is_a_field_error() {
        let err = jewelry(json!({ "material": 5, "weight": 10, "design": null })).validate().unwrap_err();
        assert_eq!(err.0.len(), 2);
        assert_eq!(err.0["material"], "Please select a material type.");
        assert_eq!(err.0["design"], "Please select design complexity.");
    }

    #[test]
    fn test_unknown_material_is_not_a_validation_error() {
        assert!(jewelry(json!({ "material": "Pearl", "weight": 4, "design": "Simple" })).validate().is_ok());
    }

    #[test]
    fn test_valid_car() {
        let input = car_form().validate(2026).unwrap();
        assert_eq!(input.year, 2019);
        assert_eq!(input.kilometers, 45_000);
    }

    #[test]
    fn test_kilometers_truncated() {
        let mut form = car_form();
        form.kilometers = Some(json!(1234.9));
        assert_eq!(form.validate(2026).unwrap().kilometers, 1234);
    }

    #[test]
    fn test_invalid_car_fields() {
        let mut form = car_form();
        form.year = Some(json!("1999"));
        form.kilometers = Some(json!("-1"));
        form.model = Some(json!("  "));
        form.owner = Some(json!({ "rank": 1 }));

        let err = form.validate(2026).unwrap_err();
        assert_eq!(err.0.len(), 4);
        assert!(err.0.contains_key("year"));
        assert!(err.0.contains_key("kilometers"));
        assert!(err.0.contains_key("model"));
        assert!(err.0.contains_key("owner"));
    }

    #[test]
    fn test_future_year_rejected() {
        let mut form = car_form();
        form.year = Some(json!(2027));
        assert!(form.validate(2026).is_err());
    }
}
