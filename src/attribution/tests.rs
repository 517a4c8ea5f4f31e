//! Tests for carbon attribution

use super::*;
use crate::ecoscore::Confidence;
use crate::fixtures::custom_model;
use crate::footprint::{compute_footprint, FootprintOptions, FootprintResult};
use approx::assert_abs_diff_eq;

fn footprint(model: &str) -> FootprintResult {
    compute_footprint(model, "eu-central-1", 10_000_000, 10_000, &FootprintOptions::default())
        .unwrap()
}

#[test]
fn test_sonnet_components() {
    let fp = footprint("claude3-sonnet");
    let b = compute_carbon_attribution(&fp, &fp.model);

    assert_abs_diff_eq!(b.operational.inference, 2310.0, epsilon = 1e-6);
    assert_abs_diff_eq!(b.operational.networking, 46.2, epsilon = 1e-6);
    assert_abs_diff_eq!(b.operational.storage, 11.55, epsilon = 1e-6);
    assert_abs_diff_eq!(b.embodied.hardware, fp.hardware_amortized_grams, epsilon = 1e-12);
    assert_abs_diff_eq!(
        b.embodied.infrastructure,
        fp.hardware_amortized_grams * 0.15,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(b.upstream.training, 179.52, epsilon = 1e-6);
    assert_abs_diff_eq!(b.upstream.finetuning, 17.952, epsilon = 1e-6);
}

#[test]
fn test_total_is_exact_sum() {
    for model in ["gpt4", "claude3-haiku", "mistral7b", "deepseek-v3"] {
        let fp = footprint(model);
        let b = compute_carbon_attribution(&fp, &fp.model);
        let sum: f64 = b.components().iter().map(|(_, v)| v).sum();
        assert_abs_diff_eq!(b.total_grams, sum, epsilon = 1e-9);
    }
}

#[test]
fn test_large_predefined_model_medium_confidence() {
    let fp = footprint("claude3-sonnet");
    let b = compute_carbon_attribution(&fp, &fp.model);
    assert_eq!(b.confidence_interval.confidence, Confidence::Medium);
    assert_abs_diff_eq!(b.confidence_interval.low, b.total_grams * 0.85, epsilon = 1e-9);
    assert_abs_diff_eq!(b.confidence_interval.high, b.total_grams * 1.15, epsilon = 1e-9);
}

#[test]
fn test_small_predefined_model_high_confidence() {
    let fp = footprint("llama70b");
    let b = compute_carbon_attribution(&fp, &fp.model);
    assert_eq!(b.confidence_interval.confidence, Confidence::High);
}

#[test]
fn test_custom_model_wide_interval() {
    let extras = vec![custom_model("acme-summarizer")];
    let options = FootprintOptions::new().with_extra_models(&extras);
    let fp = compute_footprint("acme-summarizer", "eu-central-1", 1_000_000, 10, &options).unwrap();
    let b = compute_carbon_attribution(&fp, &fp.model);

    assert_eq!(b.confidence_interval.confidence, Confidence::Low);
    assert_abs_diff_eq!(b.confidence_interval.low, b.total_grams * 0.6, epsilon = 1e-9);
    assert_abs_diff_eq!(b.confidence_interval.high, b.total_grams * 1.4, epsilon = 1e-9);
}

#[test]
fn test_zero_training_figures() {
    let extras = vec![{
        let mut m = custom_model("acme-untrained");
        m.training_co2e_tons = 0.0;
        m
    }];
    let options = FootprintOptions::new().with_extra_models(&extras);
    let fp = compute_footprint("acme-untrained", "eu-central-1", 1_000_000, 10, &options).unwrap();
    let b = compute_carbon_attribution(&fp, &fp.model);
    assert_eq!(b.upstream.training, 0.0);
    assert_eq!(b.upstream.finetuning, 0.0);
}

#[test]
fn test_custom_policy_overrides_ratios() {
    let fp = footprint("claude3-sonnet");
    let policy =
        AttributionPolicy { networking_ratio: 0.0, storage_ratio: 0.0, ..Default::default() };
    let b = compute_carbon_attribution_with(&fp, &fp.model, &policy);
    assert_eq!(b.operational.networking, 0.0);
    assert_eq!(b.operational.storage, 0.0);
    assert!(b.total_grams < compute_carbon_attribution(&fp, &fp.model).total_grams);
}

#[test]
fn test_policy_defaults_match_constants() {
    let p = AttributionPolicy::default();
    assert_eq!(p.networking_ratio, 0.02);
    assert_eq!(p.storage_ratio, 0.005);
    assert_eq!(p.infrastructure_ratio, 0.15);
    assert_eq!(p.finetuning_ratio, 0.10);
    assert_eq!(p.lifetime_requests, 1e11);
}

#[test]
fn test_policy_partial_yaml_keeps_defaults() {
    let p: AttributionPolicy = serde_yaml::from_str("networking_ratio: 0.05\n").unwrap();
    assert_eq!(p.networking_ratio, 0.05);
    assert_eq!(p.storage_ratio, AttributionPolicy::STORAGE_RATIO);
}
