//! Compare command implementation

use super::fixed;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::compare::{compare_models, ModelComparison};
use crate::config::validate::{validate_comparison, validate_usage};
use crate::config::{CompareArgs, EngineConfig};
use ecoscore_common::{render, styles, Result, TableBuilder};

pub fn format_comparison(comparison: &ModelComparison) -> String {
    let mut table = TableBuilder::new().headers(vec![
        "Model",
        "EcoScore",
        "Grade",
        "CO₂e (g)",
        "Energy (kWh)",
        "Water (L)",
        "Quality",
        "Quality/kgCO₂e",
    ]);
    for entry in &comparison.models {
        table = table.row(vec![
            entry.display_name.clone(),
            fixed(entry.eco_score.overall, 1),
            entry.eco_score.grade.to_string(),
            fixed(entry.footprint.co2e_grams, 2),
            fixed(entry.footprint.energy_kwh, 4),
            fixed(entry.footprint.water_liters, 3),
            fixed(entry.quality_score, 0),
            fixed(entry.cost_efficiency, 1),
        ]);
    }

    let recommendation = &comparison.recommendation;
    let mut lines = vec![
        styles::header("Model comparison"),
        table.build().to_string(),
        String::new(),
        recommendation.narrative.to_string(),
    ];
    if !recommendation.tradeoffs.is_empty() {
        lines.push(String::new());
        lines.push("Trade-offs:".to_string());
        lines.extend(recommendation.tradeoffs.iter().map(|t| styles::bullet(&t.to_string())));
    }
    lines.push(String::new());
    lines.push("Assumptions:".to_string());
    lines.extend(comparison.scenario_assumptions.iter().map(|a| styles::bullet(&a.to_string())));
    lines.join("\n")
}

pub fn run_compare(args: CompareArgs, config: &EngineConfig, level: LogLevel) -> Result<()> {
    validate_comparison(&args.models)?;
    validate_usage(args.requests, args.avg_tokens)?;
    super::total_tokens(args.requests, args.avg_tokens)?;

    log(
        level,
        LogLevel::Verbose,
        &format!("Comparing {} in {}", args.models.join(", "), args.region),
    );
    let comparison = compare_models(
        &args.models,
        &args.region,
        args.requests,
        args.avg_tokens,
        config.weights,
        &config.custom_models,
    )?;
    log(level, LogLevel::Normal, &render(&comparison, args.format, format_comparison)?);
    Ok(())
}
