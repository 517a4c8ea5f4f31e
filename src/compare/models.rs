//! Model comparison

use crate::ecoscore::{
    compute_eco_score, round_dp, EcoScoreOptions, EcoScoreResult, EcoScoreWeights,
};
use crate::error::{Error, Result};
use crate::footprint::{compute_footprint, FootprintOptions};
use crate::narrative::{Assumption, ComparisonNarrative, Tradeoff};
use crate::reference::{resolve_region, ModelProfile};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const MIN_COMPARED_MODELS: usize = 2;
pub const MAX_COMPARED_MODELS: usize = 5;

/// Migration suggestions are only made above this CO2e reduction (percent)
const MIGRATION_THRESHOLD_PERCENT: i64 = 10;

/// Absolute figures for the shared comparison workload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonFootprint {
    pub energy_kwh: f64,
    pub co2e_grams: f64,
    pub water_liters: f64,
    pub hardware_amortized_grams: f64,
    pub equivalent_km_driving: f64,
    pub equivalent_smartphone_charges: f64,
}

/// One candidate in a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelComparisonEntry {
    pub model_id: String,
    pub display_name: String,
    pub eco_score: EcoScoreResult,
    pub footprint: ComparisonFootprint,
    pub quality_score: f64,
    /// Quality points per kg CO2e, one decimal
    pub cost_efficiency: f64,
}

/// Model ids ordered by each ranking criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    /// Highest EcoScore first
    pub by_eco_score: Vec<String>,
    /// Lowest absolute CO2e first
    pub by_co2e: Vec<String>,
    /// Highest quality per kg CO2e first
    pub by_cost_efficiency: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecommendation {
    pub best_overall: String,
    pub best_efficiency: String,
    pub best_quality_per_carbon: String,
    pub narrative: ComparisonNarrative,
    pub tradeoffs: Vec<Tradeoff>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    /// Entries in input order
    pub models: Vec<ModelComparisonEntry>,
    pub rankings: Rankings,
    pub recommendation: ComparisonRecommendation,
    pub scenario_assumptions: Vec<Assumption>,
}

/// Stable ordering of entry indices; ties keep input order
fn ranked<F>(entries: &[ModelComparisonEntry], cmp: F) -> Vec<usize>
where
    F: Fn(&ModelComparisonEntry, &ModelComparisonEntry) -> Ordering,
{
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| cmp(&entries[a], &entries[b]));
    order
}

/// Compare candidate models at the same request volume in one region
///
/// The 2..=5 bound on candidates is a caller concern; an empty list is
/// rejected because nothing can be ranked.
pub fn compare_models<S: AsRef<str>>(
    model_ids: &[S],
    region_id: &str,
    requests: u64,
    avg_tokens_per_request: u64,
    weights: EcoScoreWeights,
    extra_models: &[ModelProfile],
) -> Result<ModelComparison> {
    if model_ids.is_empty() {
        return Err(Error::EmptyComparison);
    }
    let region = resolve_region(region_id)?;
    let total_tokens = requests.saturating_mul(avg_tokens_per_request);
    let eco_options = EcoScoreOptions::new().with_weights(weights).with_extra_models(extra_models);
    let fp_options = FootprintOptions::new().with_extra_models(extra_models);

    let entries = model_ids
        .iter()
        .map(|id| {
            let id = id.as_ref();
            let eco_score = compute_eco_score(id, region_id, &eco_options)?;
            let fp = compute_footprint(id, region_id, total_tokens, requests, &fp_options)?;
            let cost_efficiency = if fp.co2e_grams > 0.0 {
                round_dp(fp.model.quality_score / fp.co2e_kg(), 1)
            } else {
                0.0
            };
            Ok(ModelComparisonEntry {
                model_id: id.to_string(),
                display_name: fp.model.display_name.clone(),
                eco_score,
                footprint: ComparisonFootprint {
                    energy_kwh: fp.energy_kwh,
                    co2e_grams: fp.co2e_grams,
                    water_liters: fp.water_liters,
                    hardware_amortized_grams: fp.hardware_amortized_grams,
                    equivalent_km_driving: fp.equivalent_km_driving,
                    equivalent_smartphone_charges: fp.equivalent_smartphone_charges,
                },
                quality_score: fp.model.quality_score,
                cost_efficiency,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let by_score = ranked(&entries, |a, b| b.eco_score.overall.total_cmp(&a.eco_score.overall));
    let by_co2e =
        ranked(&entries, |a, b| a.footprint.co2e_grams.total_cmp(&b.footprint.co2e_grams));
    let by_cost = ranked(&entries, |a, b| b.cost_efficiency.total_cmp(&a.cost_efficiency));

    let best_overall = &entries[by_score[0]];
    let best_efficiency = &entries[by_co2e[0]];
    let best_quality = &entries[by_cost[0]];
    let worst = &entries[by_score[by_score.len() - 1]];

    let mut tradeoffs = Vec::new();
    if best_overall.model_id != best_efficiency.model_id {
        tradeoffs.push(Tradeoff::OverallVsEmissions {
            best_overall: best_overall.display_name.clone(),
            lowest_emissions: best_efficiency.display_name.clone(),
        });
    }
    if best_overall.model_id != best_quality.model_id {
        tradeoffs.push(Tradeoff::QualityPerCarbonLeader {
            model: best_quality.display_name.clone(),
        });
    }
    let improvement_percent = if worst.footprint.co2e_grams > 0.0 {
        let ratio = best_efficiency.footprint.co2e_grams / worst.footprint.co2e_grams;
        ((1.0 - ratio) * 100.0).round() as i64
    } else {
        0
    };
    if improvement_percent > MIGRATION_THRESHOLD_PERCENT {
        tradeoffs.push(Tradeoff::Migration {
            from: worst.display_name.clone(),
            to: best_efficiency.display_name.clone(),
            reduction_percent: improvement_percent,
            quality_from: worst.quality_score,
            quality_to: best_quality.quality_score,
        });
    }

    let narrative = ComparisonNarrative {
        requests,
        location: region.location.clone(),
        best_overall: best_overall.display_name.clone(),
        best_overall_score: best_overall.eco_score.overall,
        best_overall_grade: best_overall.eco_score.grade.to_string(),
        most_efficient: best_efficiency.display_name.clone(),
        most_efficient_co2e_grams: best_efficiency.footprint.co2e_grams,
        best_quality_per_carbon: best_quality.display_name.clone(),
        quality_points_per_kg: best_quality.cost_efficiency,
    };

    let recommendation = ComparisonRecommendation {
        best_overall: best_overall.model_id.clone(),
        best_efficiency: best_efficiency.model_id.clone(),
        best_quality_per_carbon: best_quality.model_id.clone(),
        narrative,
        tradeoffs,
    };

    let ids = |order: &[usize]| -> Vec<String> {
        order.iter().map(|&i| entries[i].model_id.clone()).collect()
    };
    let rankings = Rankings {
        by_eco_score: ids(&by_score),
        by_co2e: ids(&by_co2e),
        by_cost_efficiency: ids(&by_cost),
    };

    let scenario_assumptions = vec![
        Assumption::ComparisonVolume { requests, avg_tokens_per_request },
        Assumption::ComparisonRegion { region_id: region_id.to_string() },
        Assumption::TotalTokens { tokens: total_tokens },
    ];

    Ok(ModelComparison { models: entries, rankings, recommendation, scenario_assumptions })
}
