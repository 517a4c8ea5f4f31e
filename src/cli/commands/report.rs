//! Report command implementation

use super::fixed;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::validate::validate_usage;
use crate::config::{load_usage_file, EngineConfig, ReportArgs};
use crate::report::{evaluate_usage, summarize_usage, UsageEntry, UsageSummary};
use ecoscore_common::{render, styles, Result, TableBuilder};

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

pub fn format_usage_summary(summary: &UsageSummary) -> String {
    let mut table = TableBuilder::new().headers(vec![
        "Model",
        "Requests",
        "Energy (kWh)",
        "CO₂e (g)",
        "Water (L)",
        "EcoScore",
        "Grade",
    ]);
    for m in &summary.models {
        table = table.row(vec![
            m.display_name.clone(),
            m.requests.to_string(),
            fixed(m.energy_kwh, 4),
            fixed(m.co2e_grams, 2),
            fixed(m.water_liters, 3),
            optional(m.avg_eco_score.map(|s| fixed(s, 1))),
            optional(m.grade.map(|g| g.to_string())),
        ]);
    }

    [
        styles::header("Usage summary"),
        table.build().to_string(),
        format!("Total requests: {}", summary.total_requests),
        format!("Total energy: {} kWh", fixed(summary.total_energy_kwh, 4)),
        format!("Total CO₂e: {} kg", fixed(summary.total_co2e_kg, 4)),
        format!("Total water: {} L", fixed(summary.total_water_liters, 3)),
        format!("Average EcoScore: {}", optional(summary.avg_eco_score.map(|s| fixed(s, 1)))),
    ]
    .join("\n")
}

fn validate_entries(entries: &[UsageEntry]) -> Result<()> {
    for entry in entries {
        validate_usage(entry.requests, entry.avg_tokens_per_request)?;
        super::total_tokens(entry.requests, entry.avg_tokens_per_request)?;
    }
    Ok(())
}

/// Load, validate and summarize a usage file under the engine config
pub fn build_usage_summary(args: &ReportArgs, config: &EngineConfig) -> Result<UsageSummary> {
    let file = load_usage_file(&args.file)?;
    validate_entries(&file.usage)?;

    let records = evaluate_usage(&file.usage, &config.usage_options())?;
    let summary = summarize_usage(&records);
    tracing::debug!(entries = file.usage.len(), models = summary.models.len(), "usage summarized");
    Ok(summary)
}

pub fn run_report(args: ReportArgs, config: &EngineConfig, level: LogLevel) -> Result<()> {
    log(level, LogLevel::Verbose, &format!("Loading usage: {}", args.file.display()));
    let summary = build_usage_summary(&args, config)?;
    log(level, LogLevel::Normal, &render(&summary, args.format, format_usage_summary)?);
    Ok(())
}
