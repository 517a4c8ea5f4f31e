//! Score command implementation

use super::fixed;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{EngineConfig, ScoreArgs};
use crate::ecoscore::{compute_eco_score, EcoScoreOptions, EcoScoreResult};
use ecoscore_common::{render, styles, Result, TableBuilder};

pub fn format_score(result: &EcoScoreResult) -> String {
    let mut table = TableBuilder::new().headers(vec!["Dimension", "Score", "Raw", "Unit"]);
    for (name, dim) in result.breakdown.dimensions() {
        table = table.row(vec![
            name.to_string(),
            fixed(dim.score, 1),
            dim.raw.to_string(),
            dim.unit.clone(),
        ]);
    }

    let mut lines = vec![
        styles::header(&format!("EcoScore {} ({})", fixed(result.overall, 1), result.grade)),
        table.build().to_string(),
        String::new(),
    ];
    lines.extend(
        result
            .breakdown
            .dimensions()
            .iter()
            .map(|(_, dim)| styles::bullet(&dim.explanation.to_string())),
    );
    lines.push(String::new());
    lines.push(format!("Confidence: {}", result.confidence));
    lines.extend(result.assumptions.iter().map(|a| styles::bullet(&a.to_string())));
    lines.join("\n")
}

pub fn run_score(args: ScoreArgs, config: &EngineConfig, level: LogLevel) -> Result<()> {
    let mut options = EcoScoreOptions::new()
        .with_weights(config.weights)
        .with_extra_models(&config.custom_models);
    if let Some(gpu) = args.gpu.as_deref() {
        options = options.with_gpu(gpu);
    }

    log(level, LogLevel::Verbose, &format!("Scoring {} in {}", args.model, args.region));
    let result = compute_eco_score(&args.model, &args.region, &options)?;
    log(level, LogLevel::Normal, &render(&result, args.format, format_score)?);
    Ok(())
}
