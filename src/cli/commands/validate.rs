//! Validate command implementation

use super::fixed;
use crate::cli::errors::config_error;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{read_config, validate_config, EngineConfig, ValidateArgs};
use crate::reference::{DEFAULT_PUE, DEFAULT_WUE_LITERS_PER_KWH};
use ecoscore_common::{styles, Result};

/// Format facility defaults as a string
pub fn format_facility_info(config: &EngineConfig) -> String {
    let describe = |value: Option<f64>, default: f64| match value {
        Some(v) => format!("{v}"),
        None => format!("{default} (engine default)"),
    };
    format!(
        "  PUE: {}\n  WUE: {} L/kWh",
        describe(config.defaults.pue, DEFAULT_PUE),
        describe(config.defaults.wue, DEFAULT_WUE_LITERS_PER_KWH)
    )
}

/// Format EcoScore weights as a string
pub fn format_weights_info(config: &EngineConfig) -> String {
    let w = &config.weights;
    format!(
        "  Weights: energy {} / carbon {} / water {} / hardware {} / renewable {}",
        w.energy_efficiency,
        w.carbon_intensity,
        w.water_usage,
        w.hardware_lifecycle,
        w.renewable_alignment
    )
}

/// Format attribution policy as a string
pub fn format_attribution_info(config: &EngineConfig) -> String {
    let p = &config.attribution;
    format!(
        "  Attribution: networking {}%, storage {}%, infrastructure {}%, fine-tuning {}%\n  \
         Amortized over {:.0} lifetime requests",
        fixed(p.networking_ratio * 100.0, 1),
        fixed(p.storage_ratio * 100.0, 1),
        fixed(p.infrastructure_ratio * 100.0, 1),
        fixed(p.finetuning_ratio * 100.0, 1),
        p.lifetime_requests
    )
}

/// Format custom model ids as a string
pub fn format_custom_models_info(config: &EngineConfig) -> Option<String> {
    if config.custom_models.is_empty() {
        return None;
    }
    let mut lines = vec![format!("  Custom models ({}):", config.custom_models.len())];
    lines.extend(config.custom_models.iter().map(|m| {
        format!("    {} - {} on {} ×{}", m.id, m.display_name, m.gpu, m.gpu_count_inference)
    }));
    Some(lines.join("\n"))
}

/// Print detailed configuration summary
pub fn print_detailed_summary(config: &EngineConfig) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_facility_info(config));
    println!("{}", format_weights_info(config));
    println!("{}", format_attribution_info(config));

    if let Some(models) = format_custom_models_info(config) {
        println!();
        println!("{models}");
    }
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.file.display()),
    );

    let config = read_config(&args.file).map_err(|e| config_error(&args.file, e))?;
    validate_config(&config)?;

    log(level, LogLevel::Normal, &styles::success("Configuration is valid"));

    if args.detailed && level != LogLevel::Quiet {
        print_detailed_summary(&config);
    }

    Ok(())
}
