//! Property-based tests for normalization and scoring

use super::*;
use crate::reference::{models, regions, Benchmark};
use proptest::prelude::*;

fn arb_benchmark() -> impl Strategy<Value = Benchmark> {
    (0.001f64..10.0, 1.5f64..1000.0)
        .prop_map(|(best, ratio)| Benchmark { best, worst: best * ratio })
}

fn arb_weights() -> impl Strategy<Value = EcoScoreWeights> {
    proptest::collection::vec(0.0f64..1.0, 5).prop_filter_map("non-zero total", |raw| {
        let total: f64 = raw.iter().sum();
        (total > 1e-6).then(|| EcoScoreWeights {
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
    fn prop_log_normalize_bounded(b in arb_benchmark(), value in 0.0001f64..1e5) {
        let s = log_normalize(value, b);
        prop_assert!((0.0..=100.0).contains(&s));
    }

    #[test]
    fn prop_log_normalize_monotone(
        b in arb_benchmark(),
        a in 0.0001f64..1e4,
        factor in 1.0f64..100.0
    ) {
        let smaller = log_normalize(a, b);
        let larger = log_normalize(a * factor, b);
        prop_assert!(smaller >= larger);
    }

    #[test]
    fn prop_linear_normalize_bounded(value in -50.0f64..150.0) {
        let s = linear_normalize(value, crate::reference::ECOSCORE_BENCHMARKS.renewable_percentage);
        prop_assert!((0.0..=100.0).contains(&s));
    }

    #[test]
    fn prop_weighted_sum_identity(
        weights in arb_weights(),
        model_idx in 0usize..20,
        region_idx in 0usize..18,
    ) {
        let model = &models()[model_idx % models().len()];
        let region = &regions()[region_idx % regions().len()];
        let options = EcoScoreOptions::new().with_weights(weights);
        let result = compute_eco_score(&model.id, &region.region_id, &options).unwrap();

        let recomputed: f64 = result
            .breakdown
            .scores()
            .iter()
            .zip(weights.as_array())
            .map(|(s, w)| s * w)
            .sum();
        prop_assert!((result.overall - recomputed).abs() <= 0.1 + 1e-9);
        prop_assert!((0.0..=100.0).contains(&result.overall));
        // The grade comes from the unrounded sum, within half a point of `overall`
        let bounds = [
            Grade::from_score(result.overall - 0.05),
            Grade::from_score(result.overall + 0.05),
        ];
        prop_assert!(bounds.contains(&result.grade));
    }
}
