//! Demo configuration tests
//!
//! Every YAML file under `demos/` must load, validate and run through the
//! engine without errors.

use ecoscore::compare::compare_scenarios_with;
use ecoscore::config::validate::validate_scenario;
use ecoscore::config::{load_config, load_scenario_file, load_usage_file, validate_config};
use ecoscore::narrative::ScenarioVerdict;
use ecoscore::report::{evaluate_usage, summarize_usage};
use std::path::{Path, PathBuf};

fn demo(filename: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(filename)
}

#[test]
fn test_demo_engine_config() {
    let config =
        load_config(demo("ecoscore.yaml")).unwrap_or_else(|e| panic!("ecoscore.yaml: {e}"));
    validate_config(&config).unwrap();

    assert_eq!(config.defaults.pue, Some(1.15));
    assert_eq!(config.custom_models.len(), 1);
    assert_eq!(config.custom_models[0].id, "acme-summarizer");
}

#[test]
fn test_demo_scenarios() {
    let config = load_config(demo("ecoscore.yaml")).unwrap();
    let file = load_scenario_file(demo("scenarios.yaml")).unwrap();
    validate_scenario(&file.baseline).unwrap();
    validate_scenario(&file.proposed).unwrap();

    let cmp = compare_scenarios_with(
        &file.baseline,
        &file.proposed,
        &config.custom_models,
        &config.attribution,
    )
    .unwrap();
    assert_eq!(cmp.recommendation.verdict, ScenarioVerdict::Recommended);
    assert!(cmp.delta.co2e_percent < -90.0);
    assert!(cmp.annual_projection.co2e_kg < 0.0);
}

#[test]
fn test_demo_usage_report() {
    let config = load_config(demo("ecoscore.yaml")).unwrap();
    let file = load_usage_file(demo("usage.yaml")).unwrap();
    assert_eq!(file.usage.len(), 4);

    let records = evaluate_usage(&file.usage, &config.usage_options()).unwrap();
    let summary = summarize_usage(&records);

    assert_eq!(summary.total_requests, 175_000);
    assert_eq!(summary.models.len(), 3);
    assert_eq!(summary.models[0].model_id, "claude3-sonnet");
    assert_eq!(summary.models[0].requests, 50_000);
    assert!(summary.avg_eco_score.is_some());
}
