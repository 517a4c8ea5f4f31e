//! Reference command implementation

use super::fixed;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{ReferenceArgs, ReferenceKind};
use crate::reference::{
    gpus, models, regions, settings_defaults, GpuProfile, GridCarbonIntensity, ModelProfile,
    SettingsDefaults,
};
use ecoscore_common::{render, styles, Result, TableBuilder};

pub fn format_models(models: &[ModelProfile]) -> String {
    let mut table = TableBuilder::new().headers(vec![
        "Id",
        "Name",
        "Category",
        "Params (B)",
        "GPU",
        "kWh/M tokens",
        "Quality",
    ]);
    for m in models {
        table = table.row(vec![
            m.id.clone(),
            m.display_name.clone(),
            m.category.to_string(),
            fixed(m.parameters_billions, 1),
            format!("{} ×{}", m.gpu, m.gpu_count_inference),
            fixed(m.energy_per_million_tokens_kwh, 3),
            fixed(m.quality_score, 0),
        ]);
    }
    table.build().to_string()
}

pub fn format_gpus(gpus: &[GpuProfile]) -> String {
    let mut table = TableBuilder::new().headers(vec![
        "Id",
        "Name",
        "TDP (W)",
        "Memory (GB)",
        "Embodied (kg)",
        "Lifespan (h)",
    ]);
    for g in gpus {
        table = table.row(vec![
            g.id.clone(),
            g.name.clone(),
            fixed(g.tdp_watts, 0),
            fixed(g.memory_gb, 0),
            fixed(g.embodied_carbon_kg_co2e, 0),
            fixed(g.expected_lifespan_hours, 0),
        ]);
    }
    table.build().to_string()
}

pub fn format_regions(regions: &[GridCarbonIntensity]) -> String {
    let mut table = TableBuilder::new().headers(vec![
        "Id",
        "Provider",
        "Location",
        "gCO₂e/kWh",
        "Renewable %",
        "Source",
    ]);
    for r in regions {
        table = table.row(vec![
            r.region_id.clone(),
            r.provider.clone(),
            r.location.clone(),
            fixed(r.g_co2e_per_kwh, 0),
            fixed(r.renewable_percentage, 0),
            format!("{} {}", r.source, r.year),
        ]);
    }
    table.build().to_string()
}

pub fn format_defaults(defaults: &SettingsDefaults) -> String {
    let w = &defaults.ecoscore_weights;
    [
        styles::header("Engine defaults"),
        format!("PUE: {}", defaults.default_pue),
        format!("WUE: {} L/kWh", defaults.default_wue),
        "EcoScore weights:".to_string(),
        styles::bullet(&format!("energy_efficiency: {}", w.energy_efficiency)),
        styles::bullet(&format!("carbon_intensity: {}", w.carbon_intensity)),
        styles::bullet(&format!("water_usage: {}", w.water_usage)),
        styles::bullet(&format!("hardware_lifecycle: {}", w.hardware_lifecycle)),
        styles::bullet(&format!("renewable_alignment: {}", w.renewable_alignment)),
    ]
    .join("\n")
}

pub fn render_reference(args: &ReferenceArgs) -> Result<String> {
    match args.table {
        ReferenceKind::Models => render(&models(), args.format, |m| format_models(m)),
        ReferenceKind::Gpus => render(&gpus(), args.format, |g| format_gpus(g)),
        ReferenceKind::Regions => render(&regions(), args.format, |r| format_regions(r)),
        ReferenceKind::Defaults => render(&settings_defaults(), args.format, format_defaults),
    }
}

pub fn run_reference(args: ReferenceArgs, level: LogLevel) -> Result<()> {
    log(level, LogLevel::Normal, &render_reference(&args)?);
    Ok(())
}
