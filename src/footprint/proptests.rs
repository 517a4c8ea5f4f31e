//! Property-based tests for footprint scaling

use super::*;
use crate::reference::{models, regions};
use proptest::prelude::*;

fn rel_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_energy_is_linear_in_tokens(
        model_idx in 0usize..20,
        region_idx in 0usize..18,
        tokens in 1u64..1_000_000_000,
    ) {
        let model = &models()[model_idx % models().len()].id;
        let region = &regions()[region_idx % regions().len()].region_id;
        let options = FootprintOptions::default();

        let single = compute_footprint(model, region, tokens, 1, &options).unwrap();
        let double = compute_footprint(model, region, tokens * 2, 1, &options).unwrap();

        prop_assert!(rel_eq(double.energy_kwh, 2.0 * single.energy_kwh));
        prop_assert!(rel_eq(double.co2e_grams, 2.0 * single.co2e_grams));
        prop_assert!(rel_eq(double.water_liters, 2.0 * single.water_liters));
        prop_assert!(rel_eq(
            double.hardware_amortized_grams,
            2.0 * single.hardware_amortized_grams
        ));
    }

    #[test]
    fn prop_per_request_stable_across_volume(
        model_idx in 0usize..20,
        tokens_per_request in 1u64..10_000,
        requests in 1u64..100_000,
        factor in 1u64..50,
    ) {
        let model = &models()[model_idx % models().len()].id;
        let options = FootprintOptions::default();

        let small_tokens = tokens_per_request * requests;
        let small =
            compute_footprint(model, "eu-west-1", small_tokens, requests, &options).unwrap();
        let large = compute_footprint(
            model,
            "eu-west-1",
            tokens_per_request * requests * factor,
            requests * factor,
            &options,
        )
        .unwrap();

        prop_assert!(rel_eq(small.per_request.energy_kwh, large.per_request.energy_kwh));
        prop_assert!(rel_eq(small.per_request.co2e_grams, large.per_request.co2e_grams));
        prop_assert!(rel_eq(small.per_request.water_liters, large.per_request.water_liters));
    }

    #[test]
    fn prop_all_metrics_non_negative(
        model_idx in 0usize..20,
        region_idx in 0usize..18,
        tokens in 1u64..10_000_000,
    ) {
        let model = &models()[model_idx % models().len()].id;
        let region = &regions()[region_idx % regions().len()].region_id;
        let fp = compute_footprint(model, region, tokens, 1, &FootprintOptions::default()).unwrap();

        prop_assert!(fp.energy_kwh > 0.0);
        prop_assert!(fp.co2e_grams > 0.0);
        prop_assert!(fp.water_liters > 0.0);
        prop_assert!(fp.hardware_amortized_grams > 0.0);
        prop_assert!(fp.duration_hours > 0.0);
    }
}
