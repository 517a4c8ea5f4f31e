//! Calculation assumptions

use super::group_thousands;
use crate::compare::UsagePattern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a configurable coefficient came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterSource {
    /// Engine default
    Default,
    /// Supplied by the caller for this calculation
    Override,
}

/// One audit line describing a coefficient or scenario parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum Assumption {
    Pue { value: f64, source: ParameterSource },
    Wue { value: f64, source: ParameterSource },
    Duration { hours: f64, tokens_per_second_per_gpu: f64, gpu_count: u32 },
    GridIntensity { g_co2e_per_kwh: f64, source: String },
    EmbodiedCarbon { kg_co2e: f64, lifespan_hours: f64 },
    EnergyBenchmark { best: f64, worst: f64 },
    GridLocation { location: String, g_co2e_per_kwh: f64 },
    RenewableShare { percentage: f64 },
    ConfidenceNote,
    UsagePattern { pattern: UsagePattern, multiplier: f64 },
    ComparisonVolume { requests: u64, avg_tokens_per_request: u64 },
    ComparisonRegion { region_id: String },
    TotalTokens { tokens: u64 },
}

impl fmt::Display for Assumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assumption::Pue { value, source } => match source {
                ParameterSource::Default => {
                    write!(f, "PUE factor: {value} (industry average for modern data centers)")
                }
                ParameterSource::Override => write!(f, "PUE factor: {value} (caller override)"),
            },
            Assumption::Wue { value, source } => match source {
                ParameterSource::Default => write!(f, "WUE: {value} L/kWh (Google 2023 average)"),
                ParameterSource::Override => write!(f, "WUE: {value} L/kWh (caller override)"),
            },
            Assumption::Duration { hours, tokens_per_second_per_gpu, gpu_count } => write!(
                f,
                "Estimated duration: {hours:.3} hours based on {tokens_per_second_per_gpu} tok/s \
                 × {gpu_count} GPUs"
            ),
            Assumption::GridIntensity { g_co2e_per_kwh, source } => {
                write!(f, "Grid intensity: {g_co2e_per_kwh} gCO2e/kWh ({source})")
            }
            Assumption::EmbodiedCarbon { kg_co2e, lifespan_hours } => write!(
                f,
                "GPU embodied carbon: {kg_co2e} kgCO2e over {} hour lifespan",
                group_thousands(lifespan_hours.round() as u64)
            ),
            Assumption::EnergyBenchmark { best, worst } => write!(
                f,
                "Energy efficiency scored against best ({best} kWh/M tokens) and worst \
                 ({worst} kWh/M tokens) benchmarks"
            ),
            Assumption::GridLocation { location, g_co2e_per_kwh } => {
                write!(f, "Carbon intensity uses {location} grid at {g_co2e_per_kwh} gCO2e/kWh")
            }
            Assumption::RenewableShare { percentage } => {
                write!(f, "Region renewable energy: {percentage}%")
            }
            Assumption::ConfidenceNote => f.write_str(
                "Confidence reflects data source quality; production use requires real telemetry",
            ),
            Assumption::UsagePattern { pattern, multiplier } => {
                write!(
                    f,
                    "Usage pattern: {pattern} (×{multiplier} applied to all footprint metrics)"
                )
            }
            Assumption::ComparisonVolume { requests, avg_tokens_per_request } => write!(
                f,
                "Comparison scenario: {} requests, {avg_tokens_per_request} avg tokens/request",
                group_thousands(*requests)
            ),
            Assumption::ComparisonRegion { region_id } => write!(f, "Region: {region_id}"),
            Assumption::TotalTokens { tokens } => {
                write!(f, "Total tokens evaluated: {}", group_thousands(*tokens))
            }
        }
    }
}
