//! Tests for reference tables and lookup

use super::*;
use crate::error::{Error, ReferenceTable};
use crate::fixtures::custom_model;
use std::collections::HashSet;

#[test]
fn test_resolve_predefined_model() {
    let resolved = resolve_model("claude3-sonnet", &[]).unwrap();

    assert_eq!(resolved.origin, ModelOrigin::Predefined);
    assert!(!resolved.is_custom());
    assert_eq!(resolved.profile.gpu, "nvidia-a100-40gb");
    assert_eq!(resolved.profile.gpu_count_inference, 2);
    assert!((resolved.profile.energy_per_million_tokens_kwh - 0.55).abs() < f64::EPSILON);
    assert!((resolved.profile.parameters_billions - 150.0).abs() < f64::EPSILON);
}

#[test]
fn test_resolve_custom_model_from_extras() {
    let extras = vec![custom_model("acme-summarizer")];
    let resolved = resolve_model("acme-summarizer", &extras).unwrap();

    assert_eq!(resolved.origin, ModelOrigin::Custom);
    assert!(resolved.is_custom());
    assert_eq!(resolved.profile.display_name, "Acme Summarizer");
}

#[test]
fn test_custom_model_cannot_shadow_predefined() {
    let mut shadow = custom_model("gpt4");
    shadow.energy_per_million_tokens_kwh = 0.001;
    let extras = vec![shadow];

    let resolved = resolve_model("gpt4", &extras).unwrap();
    assert_eq!(resolved.origin, ModelOrigin::Predefined);
    assert!((resolved.profile.energy_per_million_tokens_kwh - 4.2).abs() < f64::EPSILON);
}

#[test]
fn test_unknown_model_names_table_and_id() {
    let err = resolve_model("nonexistent-model", &[]).unwrap_err();
    match err {
        Error::UnknownReference { table, id } => {
            assert_eq!(table, ReferenceTable::Model);
            assert_eq!(id, "nonexistent-model");
        }
        other => panic!("expected UnknownReference, got {other:?}"),
    }
}

#[test]
fn test_unknown_gpu_and_region() {
    assert!(matches!(
        resolve_gpu("tpu-v5"),
        Err(Error::UnknownReference { table: ReferenceTable::Gpu, .. })
    ));
    assert!(matches!(
        resolve_region("mars-north-1"),
        Err(Error::UnknownReference { table: ReferenceTable::Region, .. })
    ));
}

#[test]
fn test_resolve_region_values() {
    let frankfurt = resolve_region("eu-central-1").unwrap();
    assert!((frankfurt.g_co2e_per_kwh - 350.0).abs() < f64::EPSILON);
    assert_eq!(frankfurt.location, "Frankfurt, Germany");

    let stockholm = resolve_region("eu-north-1").unwrap();
    assert!((stockholm.g_co2e_per_kwh - 9.0).abs() < f64::EPSILON);
    assert!((stockholm.renewable_percentage - 98.0).abs() < f64::EPSILON);
    assert_eq!(stockholm.year, 2023);
}

#[test]
fn test_gpu_embodied_grams_per_hour() {
    let a100 = resolve_gpu("nvidia-a100-40gb").unwrap();
    // 120 kg over 35,000 h
    assert!((a100.embodied_grams_per_hour() - 120_000.0 / 35_000.0).abs() < 1e-9);
}

#[test]
fn test_model_inference_hours() {
    let sonnet = resolve_model("claude3-sonnet", &[]).unwrap().profile;
    assert!((sonnet.replica_tokens_per_second() - 200.0).abs() < f64::EPSILON);
    assert!((sonnet.inference_hours(10_000_000.0) - 10_000_000.0 / 200.0 / 3600.0).abs() < 1e-9);
}

#[test]
fn test_table_ids_are_unique() {
    let model_ids: HashSet<_> = models().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(model_ids.len(), models().len());

    let gpu_ids: HashSet<_> = gpus().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(gpu_ids.len(), gpus().len());

    let region_ids: HashSet<_> = regions().iter().map(|r| r.region_id.as_str()).collect();
    assert_eq!(region_ids.len(), regions().len());
}

#[test]
fn test_table_sizes() {
    assert_eq!(models().len(), 20);
    assert_eq!(gpus().len(), 7);
    assert_eq!(regions().len(), 18);
}

#[test]
fn test_every_model_gpu_resolves() {
    for model in models() {
        assert!(
            resolve_gpu(&model.gpu).is_ok(),
            "{} references unknown GPU {}",
            model.id,
            model.gpu
        );
    }
}

#[test]
fn test_reference_values_are_positive() {
    for model in models() {
        assert!(model.tokens_per_second_per_gpu > 0.0);
        assert!(model.gpu_count_inference >= 1);
        assert!(model.energy_per_million_tokens_kwh > 0.0);
        assert!((0.0..=100.0).contains(&model.quality_score));
    }
    for gpu in gpus() {
        assert!(gpu.expected_lifespan_hours > 0.0);
        assert!(gpu.embodied_carbon_kg_co2e > 0.0);
    }
    for region in regions() {
        assert!(region.g_co2e_per_kwh > 0.0);
        assert!((0.0..=100.0).contains(&region.renewable_percentage));
    }
}

#[test]
fn test_is_predefined_model() {
    assert!(is_predefined_model("llama7b"));
    assert!(!is_predefined_model("acme-summarizer"));
}

#[test]
fn test_settings_defaults() {
    let defaults = settings_defaults();
    assert!((defaults.default_pue - 1.2).abs() < f64::EPSILON);
    assert!((defaults.default_wue - 1.1).abs() < f64::EPSILON);
    assert!((defaults.ecoscore_weights.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn test_benchmarks_are_ordered() {
    let b = ECOSCORE_BENCHMARKS;
    for bench in [
        b.energy_per_million_tokens,
        b.co2e_per_million_tokens,
        b.water_per_million_tokens,
        b.hardware_per_million_tokens,
    ] {
        assert!(bench.best > 0.0);
        assert!(bench.best < bench.worst);
    }
    assert!(b.renewable_percentage.best > b.renewable_percentage.worst);
}

#[test]
fn test_model_profile_yaml_defaults() {
    let yaml = r#"
id: acme-tiny
display_name: Acme Tiny
family: acme
parameters_billions: 3
gpu: nvidia-t4
gpu_count_inference: 1
tokens_per_second_per_gpu: 250
energy_per_million_tokens_kwh: 0.03
quality_score: 50
"#;
    let profile: ModelProfile = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(profile.category, ModelCategory::Custom);
    assert!((profile.training_co2e_tons - 0.0).abs() < f64::EPSILON);
    assert!(profile.description.is_none());
}

#[test]
fn test_model_category_serde_kebab_case() {
    let json = serde_json::to_string(&ModelCategory::FrontierLlm).unwrap();
    assert_eq!(json, "\"frontier-llm\"");
    assert_eq!(ModelCategory::MidSizeLlm.to_string(), "mid-size-llm");
}
