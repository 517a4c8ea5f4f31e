//! Scenario command implementation

use super::fixed;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::compare::{compare_scenarios_with, ScenarioComparison, ScenarioConfig, ScenarioResult};
use crate::config::validate::validate_scenario;
use crate::config::{load_scenario_file, EngineConfig, ScenarioArgs};
use ecoscore_common::{render, styles, Result, TableBuilder};

/// Fill unset facility overrides from the engine config
fn with_config_defaults(mut scenario: ScenarioConfig, config: &EngineConfig) -> ScenarioConfig {
    scenario.pue = scenario.pue.or(config.defaults.pue);
    scenario.wue = scenario.wue.or(config.defaults.wue);
    scenario
}

fn scenario_row(label: &str, result: &ScenarioResult) -> Vec<String> {
    vec![
        label.to_string(),
        result.config.name.clone(),
        result.footprint.model.display_name.clone(),
        result.footprint.grid.location.clone(),
        fixed(result.footprint.energy_kwh, 4),
        fixed(result.footprint.co2e_grams, 2),
        fixed(result.footprint.water_liters, 3),
        fixed(result.eco_score.overall, 1),
    ]
}

pub fn format_scenario_comparison(comparison: &ScenarioComparison) -> String {
    let delta = &comparison.delta;
    let table = TableBuilder::new()
        .headers(vec![
            "",
            "Scenario",
            "Model",
            "Location",
            "Energy (kWh)",
            "CO₂e (g)",
            "Water (L)",
            "EcoScore",
        ])
        .row(scenario_row("baseline", &comparison.baseline))
        .row(scenario_row("proposed", &comparison.proposed))
        .row(vec![
            "change".to_string(),
            String::new(),
            String::new(),
            String::new(),
            format!("{:+.2}%", delta.energy_percent),
            format!("{:+.2}%", delta.co2e_percent),
            format!("{:+.2}%", delta.water_percent),
            format!("{:+.1}", delta.eco_score),
        ])
        .build();

    let annual = &comparison.annual_projection;
    let mut lines = vec![
        styles::header("Scenario comparison"),
        table.to_string(),
        String::new(),
        comparison.recommendation.to_string(),
        format!(
            "Annual change: {} kgCO₂e, {} kWh, {} L",
            fixed(annual.co2e_kg, 2),
            fixed(annual.energy_kwh, 2),
            fixed(annual.water_liters, 2)
        ),
    ];
    if !comparison.tradeoffs.is_empty() {
        lines.push(String::new());
        lines.push("Trade-offs:".to_string());
        lines.extend(comparison.tradeoffs.iter().map(|t| styles::bullet(&t.to_string())));
    }
    lines.join("\n")
}

pub fn run_scenario(args: ScenarioArgs, config: &EngineConfig, level: LogLevel) -> Result<()> {
    log(level, LogLevel::Verbose, &format!("Loading scenarios: {}", args.file.display()));
    let file = load_scenario_file(&args.file)?;
    let baseline = with_config_defaults(file.baseline, config);
    let proposed = with_config_defaults(file.proposed, config);
    validate_scenario(&baseline)?;
    validate_scenario(&proposed)?;
    super::total_tokens(baseline.request_count, baseline.avg_tokens_per_request)?;
    super::total_tokens(proposed.request_count, proposed.avg_tokens_per_request)?;

    let comparison =
        compare_scenarios_with(&baseline, &proposed, &config.custom_models, &config.attribution)?;
    tracing::debug!(
        baseline = %baseline.name,
        proposed = %proposed.name,
        verdict = %comparison.recommendation.verdict,
        "scenarios compared"
    );
    log(level, LogLevel::Normal, &render(&comparison, args.format, format_scenario_comparison)?);
    Ok(())
}
