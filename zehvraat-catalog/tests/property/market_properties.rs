use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use zehvraat_catalog::encoding::{CAR_BRANDS, DESIGN_COMPLEXITIES, FUEL_TYPES, JEWELRY_MATERIALS, OWNER_TYPES, TRANSMISSION_TYPES};
use zehvraat_catalog::{round_to, MarketJitter, PricingEngine};
use zehvraat_shared::{CarInput, JewelryInput};

proptest! {
    #[test]
    fn classic_jitter_stays_in_bounds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let factor = MarketJitter::CLASSIC.factor(&mut rng);
        prop_assert!((0.9..1.1).contains(&factor), "factor {}", factor);
    }

    #[test]
    fn model_jitter_stays_in_bounds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let factor = MarketJitter::MODEL.factor(&mut rng);
        prop_assert!((0.95..1.05).contains(&factor), "factor {}", factor);
    }

    #[test]
    fn rounding_yields_multiples(value in 0.0f64..1.0e9, denomination in prop::sample::select(vec![100i64, 1000])) {
        let rounded = round_to(value, denomination);
        prop_assert_eq!(rounded % denomination, 0);
        prop_assert!((rounded as f64 - value).abs() <= denomination as f64 / 2.0 + 1e-6);
    }

    #[test]
    fn jewelry_quotes_are_multiples_of_hundred(
        material in prop::sample::select(JEWELRY_MATERIALS.to_vec()),
        design in prop::sample::select(DESIGN_COMPLEXITIES.to_vec()),
        weight in 0.1f64..500.0,
        seed in any::<u64>(),
    ) {
        let engine = PricingEngine::default();
        let input = JewelryInput::new(material, weight, design);
        let base = engine.jewelry_base_price(&input);
        let quote = engine.quote_jewelry(&input, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(quote % 100, 0);
        prop_assert!(quote as f64 >= base * 0.9 - 50.0);
        prop_assert!(quote as f64 <= base * 1.1 + 50.0);
    }

    #[test]
    fn car_quotes_are_multiples_of_thousand(
        brand in prop::sample::select(CAR_BRANDS.to_vec()),
        fuel in prop::sample::select(FUEL_TYPES.to_vec()),
        transmission in prop::sample::select(TRANSMISSION_TYPES.to_vec()),
        owner in prop::sample::select(OWNER_TYPES.to_vec()),
        year in 2000i32..=2030,
        kilometers in 0u64..1_000_000,
        seed in any::<u64>(),
    ) {
        let engine = PricingEngine::default();
        let input = CarInput {
            brand: brand.to_string(),
            model: "Any".to_string(),
            year,
            kilometers,
            fuel_type: fuel.to_string(),
            transmission: transmission.to_string(),
            owner: owner.to_string(),
        };
        let quote = engine.quote_car(&input, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(quote % 1000, 0);
        prop_assert!(quote > 0);
    }
}
