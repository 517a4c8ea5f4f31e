//! Property-based tests for boundary validation

use super::error::ValidationError;
use super::validator::*;
use crate::ecoscore::EcoScoreWeights;
use crate::fixtures::custom_model;
use proptest::prelude::*;

fn arb_normalized_weights() -> impl Strategy<Value = EcoScoreWeights> {
    proptest::collection::vec(0.0f64..10.0, 5).prop_filter_map("positive total", |raw| {
        let total: f64 = raw.iter().sum();
        (total > 1e-3).then(|| EcoScoreWeights {
            energy_efficiency: raw[0] / total,
            carbon_intensity: raw[1] / total,
            water_usage: raw[2] / total,
            hardware_lifecycle: raw[3] / total,
            renewable_alignment: raw[4] / total,
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_normalized_weights_pass(weights in arb_normalized_weights()) {
        prop_assert!(validate_weights(&weights).is_ok());
    }

    #[test]
    fn prop_scaled_weights_fail(weights in arb_normalized_weights(), factor in 1.01f64..5.0) {
        let scaled = EcoScoreWeights {
            energy_efficiency: weights.energy_efficiency * factor,
            carbon_intensity: weights.carbon_intensity * factor,
            water_usage: weights.water_usage * factor,
            hardware_lifecycle: weights.hardware_lifecycle * factor,
            renewable_alignment: weights.renewable_alignment * factor,
        };
        prop_assert!(matches!(validate_weights(&scaled), Err(ValidationError::WeightSum(_))));
    }

    #[test]
    fn prop_pue_in_range_passes(pue in 1.0f64..=3.0, wue in 0.0f64..=5.0) {
        prop_assert!(validate_facility(Some(pue), Some(wue)).is_ok());
    }

    #[test]
    fn prop_pue_below_one_fails(pue in 0.0f64..0.999) {
        prop_assert_eq!(validate_facility(Some(pue), None), Err(ValidationError::InvalidPue(pue)));
    }

    #[test]
    fn prop_positive_usage_passes(requests in 1u64..u32::MAX as u64, tokens in 1u64..100_000) {
        prop_assert!(validate_usage(requests, tokens).is_ok());
    }

    #[test]
    fn prop_comparison_size(n in 0usize..10) {
        let ids: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
        prop_assert_eq!(validate_comparison(&ids).is_ok(), (2..=5).contains(&n));
    }

    #[test]
    fn prop_custom_model_quality_range(quality in -50.0f64..150.0) {
        let mut model = custom_model("acme");
        model.quality_score = quality;
        prop_assert_eq!(
            validate_custom_model(&model, &[]).is_ok(),
            (0.0..=100.0).contains(&quality)
        );
    }
}
