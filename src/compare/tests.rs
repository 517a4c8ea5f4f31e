//! Tests for model and scenario comparison

use super::*;
use crate::ecoscore::{EcoScoreWeights, Grade};
use crate::error::{Error, ReferenceTable};
use crate::fixtures::custom_model;
use crate::narrative::{Assumption, ScenarioVerdict, Tradeoff};
use approx::assert_abs_diff_eq;

fn scenario(name: &str, model: &str, region: &str) -> ScenarioConfig {
    ScenarioConfig {
        name: name.to_string(),
        model_id: model.to_string(),
        region_id: region.to_string(),
        request_count: 10_000,
        avg_tokens_per_request: 1_000,
        usage_pattern: UsagePattern::Mixed,
        pue: None,
        wue: None,
    }
}

fn hardware_only() -> EcoScoreWeights {
    EcoScoreWeights {
        energy_efficiency: 0.0,
        carbon_intensity: 0.0,
        water_usage: 0.0,
        hardware_lifecycle: 1.0,
        renewable_alignment: 0.0,
    }
}

#[test]
fn test_compare_three_models() {
    let ids = ["gpt4", "mistral7b", "claude3-sonnet"];
    let cmp = compare_models(&ids, "eu-central-1", 1_000, 1_000, EcoScoreWeights::default(), &[])
        .unwrap();

    assert_eq!(cmp.models.len(), 3);
    assert_eq!(cmp.models[0].model_id, "gpt4");
    assert_abs_diff_eq!(cmp.models[0].footprint.co2e_grams, 1764.0, epsilon = 1e-6);
    assert_abs_diff_eq!(cmp.models[1].footprint.co2e_grams, 16.8, epsilon = 1e-9);

    assert_eq!(cmp.rankings.by_eco_score, vec!["mistral7b", "claude3-sonnet", "gpt4"]);
    assert_eq!(cmp.rankings.by_co2e, vec!["mistral7b", "claude3-sonnet", "gpt4"]);
    assert_eq!(cmp.recommendation.best_overall, "mistral7b");
    assert_eq!(cmp.recommendation.best_efficiency, "mistral7b");
    assert_eq!(cmp.recommendation.best_quality_per_carbon, "mistral7b");
}

#[test]
fn test_cost_efficiency_is_quality_per_kg() {
    let cmp = compare_models(
        &["gpt4", "mistral7b"],
        "eu-central-1",
        1_000,
        1_000,
        EcoScoreWeights::default(),
        &[],
    )
    .unwrap();
    // 95 quality / 1.764 kg
    assert_abs_diff_eq!(cmp.models[0].cost_efficiency, 53.9, epsilon = 1e-9);
    // 60 quality / 0.0168 kg
    assert_abs_diff_eq!(cmp.models[1].cost_efficiency, 3571.4, epsilon = 1e-9);
}

#[test]
fn test_migration_tradeoff_when_savings_large() {
    let cmp = compare_models(
        &["gpt4", "mistral7b"],
        "eu-central-1",
        1_000,
        1_000,
        EcoScoreWeights::default(),
        &[],
    )
    .unwrap();
    let tradeoffs = &cmp.recommendation.tradeoffs;

    assert_eq!(tradeoffs.len(), 1);
    match &tradeoffs[0] {
        Tradeoff::Migration { from, to, reduction_percent, quality_from, quality_to } => {
            assert_eq!(from, "GPT-4 Class (≈1.8T params)");
            assert_eq!(to, "Mistral 7B");
            assert_eq!(*reduction_percent, 99);
            assert_eq!(*quality_from, 95.0);
            assert_eq!(*quality_to, 60.0);
        }
        other => panic!("unexpected tradeoff: {other:?}"),
    }
}

#[test]
fn test_overall_and_efficiency_leaders_differ() {
    let ids = ["gpt35", "mixtral8x7b"];
    let cmp = compare_models(&ids, "eu-central-1", 1_000, 1_000, hardware_only(), &[]).unwrap();
    let rec = &cmp.recommendation;

    assert_eq!(rec.best_overall, "gpt35");
    assert_eq!(rec.best_efficiency, "mixtral8x7b");
    assert_eq!(rec.best_quality_per_carbon, "mixtral8x7b");
    assert_eq!(rec.tradeoffs.len(), 2);
    assert!(matches!(rec.tradeoffs[0], Tradeoff::OverallVsEmissions { .. }));
    assert!(matches!(rec.tradeoffs[1], Tradeoff::QualityPerCarbonLeader { .. }));
}

#[test]
fn test_identical_candidates_have_no_tradeoffs() {
    let weights = EcoScoreWeights::default();
    let cmp = compare_models(&["llama7b", "llama7b"], "us-west-2", 500, 800, weights, &[]).unwrap();
    assert!(cmp.recommendation.tradeoffs.is_empty());
    assert_eq!(cmp.rankings.by_eco_score, vec!["llama7b", "llama7b"]);
}

#[test]
fn test_comparison_narrative_and_assumptions() {
    let cmp = compare_models(
        &["gpt4", "mistral7b"],
        "eu-central-1",
        10_000,
        500,
        EcoScoreWeights::default(),
        &[],
    )
    .unwrap();
    let text = cmp.recommendation.narrative.to_string();
    assert!(text.starts_with("Based on 10,000 requests in Frankfurt, Germany"));

    assert_eq!(
        cmp.scenario_assumptions,
        vec![
            Assumption::ComparisonVolume { requests: 10_000, avg_tokens_per_request: 500 },
            Assumption::ComparisonRegion { region_id: "eu-central-1".to_string() },
            Assumption::TotalTokens { tokens: 5_000_000 },
        ]
    );
}

#[test]
fn test_compare_with_custom_model() {
    let extras = vec![custom_model("acme-summarizer")];
    let cmp = compare_models(
        &["acme-summarizer", "gpt35"],
        "eu-west-1",
        1_000,
        1_000,
        EcoScoreWeights::default(),
        &extras,
    )
    .unwrap();
    assert_eq!(cmp.models[0].display_name, "Acme Summarizer");
    assert_eq!(cmp.recommendation.best_efficiency, "acme-summarizer");
}

#[test]
fn test_compare_empty_list_fails() {
    let ids: [&str; 0] = [];
    let err = compare_models(&ids, "eu-central-1", 1_000, 1_000, EcoScoreWeights::default(), &[])
        .unwrap_err();
    assert!(matches!(err, Error::EmptyComparison));
}

#[test]
fn test_compare_token_volume_saturates() {
    let ids = ["llama7b", "mistral7b"];
    let weights = EcoScoreWeights::default();
    let cmp = compare_models(&ids, "eu-north-1", u64::MAX / 2, 3, weights, &[]).unwrap();
    let capped = compare_models(&ids, "eu-north-1", u64::MAX, 1, weights, &[]).unwrap();

    assert_eq!(cmp.models[0].footprint.energy_kwh, capped.models[0].footprint.energy_kwh);
    assert!(cmp.models.iter().all(|m| m.footprint.co2e_grams.is_finite()));
}

#[test]
fn test_compare_unknown_model_fails() {
    let weights = EcoScoreWeights::default();
    let err =
        compare_models(&["gpt4", "gpt9"], "eu-central-1", 1_000, 1_000, weights, &[]).unwrap_err();
    assert!(matches!(err, Error::UnknownReference { table: ReferenceTable::Model, .. }));
}

#[test]
fn test_usage_pattern_multipliers() {
    assert_eq!(UsagePattern::Realtime.multiplier(), 1.15);
    assert_eq!(UsagePattern::Mixed.multiplier(), 1.0);
    assert_eq!(UsagePattern::Batch.multiplier(), 0.85);
    assert_eq!(UsagePattern::default(), UsagePattern::Mixed);
}

#[test]
fn test_run_scenario_applies_multiplier() {
    let mut config = scenario("batch", "claude3-sonnet", "eu-central-1");
    config.usage_pattern = UsagePattern::Batch;
    let result = run_scenario(&config, &[]).unwrap();

    assert_eq!(result.total_tokens, 10_000_000);
    assert_abs_diff_eq!(result.footprint.energy_kwh, 6.6 * 0.85, epsilon = 1e-9);
    assert_abs_diff_eq!(result.footprint.co2e_grams, 2310.0 * 0.85, epsilon = 1e-6);
    assert_abs_diff_eq!(result.attribution.operational.inference, 2310.0 * 0.85, epsilon = 1e-6);
    assert!(result
        .footprint
        .assumptions
        .contains(&Assumption::UsagePattern { pattern: UsagePattern::Batch, multiplier: 0.85 }));
}

#[test]
fn test_region_move_frankfurt_to_stockholm() {
    let baseline = scenario("current", "claude3-sonnet", "eu-central-1");
    let proposed = scenario("nordic", "claude3-sonnet", "eu-north-1");
    let cmp = compare_scenarios(&baseline, &proposed, &[]).unwrap();

    assert_abs_diff_eq!(cmp.delta.co2e_percent, -97.43, epsilon = 1e-9);
    assert_eq!(cmp.delta.energy_percent, 0.0);
    assert_abs_diff_eq!(cmp.delta.co2e_grams, 6.6 * 9.0 - 2310.0, epsilon = 1e-6);
    assert_abs_diff_eq!(cmp.delta.eco_score, 26.5, epsilon = 1e-9);
    assert_eq!(cmp.proposed.eco_score.grade, Grade::B);

    assert_eq!(cmp.recommendation.verdict, ScenarioVerdict::Recommended);
    assert!(cmp.recommendation.to_string().starts_with("Recommended"));

    assert_eq!(cmp.tradeoffs.len(), 1);
    assert!(matches!(cmp.tradeoffs[0], Tradeoff::RegionChange { .. }));

    assert_abs_diff_eq!(
        cmp.annual_projection.co2e_kg,
        (59.4 - 2310.0) / 1000.0 * 12.0,
        epsilon = 1e-9
    );
    assert_eq!(cmp.annual_projection.energy_kwh, 0.0);
}

#[test]
fn test_batching_alone_is_consider() {
    let baseline = scenario("now", "llama70b", "us-east-1");
    let mut proposed = scenario("batched", "llama70b", "us-east-1");
    proposed.usage_pattern = UsagePattern::Batch;
    let cmp = compare_scenarios(&baseline, &proposed, &[]).unwrap();

    assert_abs_diff_eq!(cmp.delta.co2e_percent, -15.0, epsilon = 1e-9);
    assert_eq!(cmp.delta.eco_score, 0.0);
    assert_eq!(cmp.recommendation.verdict, ScenarioVerdict::Consider);
    assert_eq!(cmp.tradeoffs.len(), 1);
    assert!(matches!(
        cmp.tradeoffs[0],
        Tradeoff::UsagePatternChange { from: UsagePattern::Mixed, to: UsagePattern::Batch, .. }
    ));
}

#[test]
fn test_bigger_model_dirtier_grid_not_recommended() {
    let baseline = scenario("now", "mistral7b", "eu-north-1");
    let proposed = scenario("upgrade", "gpt4", "ap-south-1");
    let cmp = compare_scenarios(&baseline, &proposed, &[]).unwrap();

    assert!(cmp.delta.co2e_grams > 0.0);
    assert!(cmp.delta.eco_score < 0.0);
    assert_eq!(cmp.recommendation.verdict, ScenarioVerdict::NotRecommended);
    // Quality and region both change
    assert_eq!(cmp.tradeoffs.len(), 2);
    assert!(cmp.annual_projection.co2e_kg > 0.0);
}

#[test]
fn test_identical_scenarios_are_not_recommended() {
    let config = scenario("same", "gpt35", "eu-west-3");
    let cmp = compare_scenarios(&config, &config, &[]).unwrap();
    assert_eq!(cmp.delta.co2e_percent, 0.0);
    assert_eq!(cmp.recommendation.verdict, ScenarioVerdict::NotRecommended);
    assert!(cmp.tradeoffs.is_empty());
}

#[test]
fn test_scenario_pue_override_flows_through() {
    let baseline = scenario("default", "gpt35", "eu-west-1");
    let mut proposed = scenario("efficient-dc", "gpt35", "eu-west-1");
    proposed.pue = Some(1.1);
    let cmp = compare_scenarios(&baseline, &proposed, &[]).unwrap();

    assert_abs_diff_eq!(cmp.delta.energy_percent, -8.33, epsilon = 1e-9);
    assert_eq!(cmp.recommendation.verdict, ScenarioVerdict::Consider);
}

#[test]
fn test_scenario_unknown_region_fails() {
    let baseline = scenario("a", "gpt35", "eu-west-1");
    let proposed = scenario("b", "gpt35", "moon-base-1");
    let err = compare_scenarios(&baseline, &proposed, &[]).unwrap_err();
    assert!(matches!(err, Error::UnknownReference { table: ReferenceTable::Region, .. }));
}

#[test]
fn test_scenario_config_yaml_defaults() {
    let yaml = "name: pilot\nmodel_id: gpt35\nregion_id: eu-west-1\nrequest_count: 100\n\
                avg_tokens_per_request: 400\n";
    let config: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.usage_pattern, UsagePattern::Mixed);
    assert_eq!(config.pue, None);
    assert_eq!(config.total_tokens(), 40_000);
}
