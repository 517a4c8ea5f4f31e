//! Usage aggregation

use crate::attribution::AttributionPolicy;
use crate::compare::{run_weighted_scenario, ScenarioConfig, UsagePattern};
use crate::ecoscore::{round_dp, EcoScoreResult, EcoScoreWeights, Grade};
use crate::error::Result;
use crate::footprint::FootprintResult;
use crate::reference::ModelProfile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One workload to be evaluated for a usage summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEntry {
    pub model_id: String,
    pub region_id: String,
    pub requests: u64,
    pub avg_tokens_per_request: u64,
    #[serde(default)]
    pub usage_pattern: UsagePattern,
}

/// Evaluated footprint of one workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub model_id: String,
    pub display_name: String,
    pub quality_score: f64,
    pub requests: u64,
    pub energy_kwh: f64,
    pub co2e_grams: f64,
    pub water_liters: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_score: Option<f64>,
}

impl UsageRecord {
    /// Build a record from a computed footprint and optional EcoScore
    pub fn from_calculation(
        footprint: &FootprintResult,
        eco_score: Option<&EcoScoreResult>,
        requests: u64,
    ) -> Self {
        Self {
            model_id: footprint.model.id.clone(),
            display_name: footprint.model.display_name.clone(),
            quality_score: footprint.model.quality_score,
            requests,
            energy_kwh: footprint.energy_kwh,
            co2e_grams: footprint.co2e_grams,
            water_liters: footprint.water_liters,
            eco_score: eco_score.map(|e| e.overall),
        }
    }
}

/// Per-model aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelUsage {
    pub model_id: String,
    pub display_name: String,
    pub quality_score: f64,
    pub requests: u64,
    pub energy_kwh: f64,
    pub co2e_grams: f64,
    pub water_liters: f64,
    pub avg_eco_score: Option<f64>,
    pub grade: Option<Grade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub total_requests: u64,
    pub total_energy_kwh: f64,
    pub total_co2e_kg: f64,
    pub total_water_liters: f64,
    /// Mean over records carrying an EcoScore, one decimal
    pub avg_eco_score: Option<f64>,
    /// Highest CO2e first
    pub models: Vec<ModelUsage>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(round_dp(values.iter().sum::<f64>() / values.len() as f64, 1))
}

/// Facility overrides, weights and models applied to every usage entry
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageOptions<'a> {
    /// PUE override; engine default when `None`
    pub pue: Option<f64>,
    /// WUE override (L/kWh); engine default when `None`
    pub wue: Option<f64>,
    pub weights: EcoScoreWeights,
    pub extra_models: &'a [ModelProfile],
    pub policy: AttributionPolicy,
}

impl<'a> UsageOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pue(mut self, pue: f64) -> Self {
        self.pue = Some(pue);
        self
    }

    pub fn with_wue(mut self, wue: f64) -> Self {
        self.wue = Some(wue);
        self
    }

    pub fn with_weights(mut self, weights: EcoScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_extra_models(mut self, extra_models: &'a [ModelProfile]) -> Self {
        self.extra_models = extra_models;
        self
    }

    pub fn with_policy(mut self, policy: AttributionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Evaluate usage entries into records
pub fn evaluate_usage(
    entries: &[UsageEntry],
    options: &UsageOptions<'_>,
) -> Result<Vec<UsageRecord>> {
    entries
        .iter()
        .map(|entry| {
            let config = ScenarioConfig {
                name: entry.model_id.clone(),
                model_id: entry.model_id.clone(),
                region_id: entry.region_id.clone(),
                request_count: entry.requests,
                avg_tokens_per_request: entry.avg_tokens_per_request,
                usage_pattern: entry.usage_pattern,
                pue: options.pue,
                wue: options.wue,
            };
            let result = run_weighted_scenario(
                &config,
                options.extra_models,
                &options.policy,
                options.weights,
            )?;
            Ok(UsageRecord::from_calculation(
                &result.footprint,
                Some(&result.eco_score),
                entry.requests,
            ))
        })
        .collect()
}

/// Aggregate usage records
pub fn summarize_usage(records: &[UsageRecord]) -> UsageSummary {
    struct Acc<'a> {
        first: &'a UsageRecord,
        requests: u64,
        energy_kwh: f64,
        co2e_grams: f64,
        water_liters: f64,
        scores: Vec<f64>,
    }

    let mut by_model: BTreeMap<&str, Acc<'_>> = BTreeMap::new();
    for record in records {
        let acc = by_model.entry(record.model_id.as_str()).or_insert_with(|| Acc {
            first: record,
            requests: 0,
            energy_kwh: 0.0,
            co2e_grams: 0.0,
            water_liters: 0.0,
            scores: Vec::new(),
        });
        acc.requests += record.requests;
        acc.energy_kwh += record.energy_kwh;
        acc.co2e_grams += record.co2e_grams;
        acc.water_liters += record.water_liters;
        acc.scores.extend(record.eco_score);
    }

    let mut models: Vec<ModelUsage> = by_model
        .into_values()
        .map(|acc| {
            let avg_eco_score = mean(&acc.scores);
            ModelUsage {
                model_id: acc.first.model_id.clone(),
                display_name: acc.first.display_name.clone(),
                quality_score: acc.first.quality_score,
                requests: acc.requests,
                energy_kwh: acc.energy_kwh,
                co2e_grams: acc.co2e_grams,
                water_liters: acc.water_liters,
                avg_eco_score,
                grade: avg_eco_score.map(Grade::from_score),
            }
        })
        .collect();
    models.sort_by(|a, b| b.co2e_grams.total_cmp(&a.co2e_grams));

    let scores: Vec<f64> = records.iter().filter_map(|r| r.eco_score).collect();

    UsageSummary {
        total_requests: records.iter().map(|r| r.requests).sum(),
        total_energy_kwh: records.iter().map(|r| r.energy_kwh).sum(),
        total_co2e_kg: records.iter().map(|r| r.co2e_grams).sum::<f64>() / 1000.0,
        total_water_liters: records.iter().map(|r| r.water_liters).sum(),
        avg_eco_score: mean(&scores),
        models,
    }
}
