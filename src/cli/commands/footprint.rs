//! Footprint command implementation

use super::{fixed, total_tokens};
use crate::attribution::{compute_carbon_attribution_with, CarbonAttributionBreakdown};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::validate::{validate_facility, validate_usage};
use crate::config::{EngineConfig, FootprintArgs};
use crate::ecoscore::{compute_eco_score, EcoScoreOptions, EcoScoreResult};
use crate::footprint::{compute_footprint, FootprintResult};
use ecoscore_common::{render, styles, Result, TableBuilder};
use serde::Serialize;

/// Footprint with its EcoScore and carbon attribution, as emitted by the command
#[derive(Debug, Serialize)]
pub struct FootprintReport {
    pub footprint: FootprintResult,
    pub eco_score: EcoScoreResult,
    pub attribution: CarbonAttributionBreakdown,
}

/// Compute the footprint report for the given arguments
pub fn build_footprint_report(
    args: &FootprintArgs,
    config: &EngineConfig,
) -> Result<FootprintReport> {
    validate_usage(args.requests, args.avg_tokens)?;
    validate_facility(args.pue, args.wue)?;
    let tokens = total_tokens(args.requests, args.avg_tokens)?;

    let mut options = config.footprint_options();
    options.pue = args.pue.or(options.pue);
    options.wue = args.wue.or(options.wue);
    options.gpu_override = args.gpu.as_deref();

    let footprint = compute_footprint(&args.model, &args.region, tokens, args.requests, &options)?;
    let mut score_options = EcoScoreOptions::new()
        .with_weights(config.weights)
        .with_extra_models(&config.custom_models);
    score_options.gpu_override = options.gpu_override;
    let eco_score = compute_eco_score(&args.model, &args.region, &score_options)?;

    let attribution =
        compute_carbon_attribution_with(&footprint, &footprint.model, &config.attribution);
    tracing::debug!(
        model = %args.model,
        region = %args.region,
        tokens,
        co2e_grams = footprint.co2e_grams,
        eco_score = eco_score.overall,
        "footprint computed"
    );
    Ok(FootprintReport { footprint, eco_score, attribution })
}

/// Format a footprint report as text tables
pub fn format_footprint(report: &FootprintReport) -> String {
    let fp = &report.footprint;
    let totals = TableBuilder::new()
        .headers(vec!["Metric", "Total", "Per request"])
        .row(vec![
            "Energy (kWh)".to_string(),
            fixed(fp.energy_kwh, 4),
            fixed(fp.per_request.energy_kwh, 6),
        ])
        .row(vec![
            "CO₂e (g)".to_string(),
            fixed(fp.co2e_grams, 2),
            fixed(fp.per_request.co2e_grams, 4),
        ])
        .row(vec![
            "Water (L)".to_string(),
            fixed(fp.water_liters, 3),
            fixed(fp.per_request.water_liters, 5),
        ])
        .row(vec![
            "Embodied hardware (g)".to_string(),
            fixed(fp.hardware_amortized_grams, 2),
            String::new(),
        ])
        .row(vec!["GPU hours".to_string(), fixed(fp.duration_hours, 2), String::new()])
        .build();

    let mut attribution = TableBuilder::new().headers(vec!["Component", "CO₂e (g)"]);
    for (name, grams) in report.attribution.components() {
        attribution = attribution.row(vec![name.to_string(), fixed(grams, 2)]);
    }
    let interval = &report.attribution.confidence_interval;
    let attribution = attribution
        .row(vec!["total".to_string(), fixed(report.attribution.total_grams, 2)])
        .build();

    let mut lines = vec![
        styles::header(&format!("{} in {}", fp.model.display_name, fp.grid.location)),
        totals.to_string(),
        format!(
            "≈ {} km driven, {} smartphone charges",
            fixed(fp.equivalent_km_driving, 2),
            fixed(fp.equivalent_smartphone_charges, 1)
        ),
        format!("EcoScore: {} ({})", fixed(report.eco_score.overall, 1), report.eco_score.grade),
        String::new(),
        attribution.to_string(),
        format!(
            "Range: {} to {} g ({} confidence)",
            fixed(interval.low, 2),
            fixed(interval.high, 2),
            interval.confidence
        ),
        String::new(),
        "Assumptions:".to_string(),
    ];
    lines.extend(fp.assumptions.iter().map(|a| styles::bullet(&a.to_string())));
    lines.join("\n")
}

pub fn run_footprint(args: FootprintArgs, config: &EngineConfig, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Footprint: {} in {} ({} requests)", args.model, args.region, args.requests),
    );
    let report = build_footprint_report(&args, config)?;
    log(level, LogLevel::Normal, &render(&report, args.format, format_footprint)?);
    Ok(())
}
