//! Scenario runs and baseline-versus-proposed comparison

use crate::attribution::{
    compute_carbon_attribution_with, AttributionPolicy, CarbonAttributionBreakdown,
};
use crate::ecoscore::{
    compute_eco_score, round_dp, EcoScoreOptions, EcoScoreResult, EcoScoreWeights,
};
use crate::error::Result;
use crate::footprint::{compute_footprint, FootprintOptions, FootprintResult};
use crate::narrative::{Assumption, ScenarioRecommendation, ScenarioVerdict, Tradeoff};
use crate::reference::ModelProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scenarios represent one month of volume
const MONTHS_PER_YEAR: f64 = 12.0;

/// How requests are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsagePattern {
    /// Latency-bound, poor batching
    Realtime,
    #[default]
    Mixed,
    /// Throughput-bound, well batched
    Batch,
}

impl UsagePattern {
    /// Factor applied to every footprint metric
    pub fn multiplier(self) -> f64 {
        match self {
            UsagePattern::Realtime => 1.15,
            UsagePattern::Mixed => 1.0,
            UsagePattern::Batch => 0.85,
        }
    }
}

impl fmt::Display for UsagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UsagePattern::Realtime => "realtime",
            UsagePattern::Mixed => "mixed",
            UsagePattern::Batch => "batch",
        };
        f.write_str(s)
    }
}

/// A named bundle of model, region and monthly volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub model_id: String,
    pub region_id: String,
    pub request_count: u64,
    pub avg_tokens_per_request: u64,
    #[serde(default)]
    pub usage_pattern: UsagePattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wue: Option<f64>,
}

impl ScenarioConfig {
    /// Monthly token volume, saturating at `u64::MAX`
    pub fn total_tokens(&self) -> u64 {
        self.request_count.saturating_mul(self.avg_tokens_per_request)
    }
}

/// Footprint, EcoScore and attribution for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub config: ScenarioConfig,
    pub total_tokens: u64,
    /// Footprint with the usage-pattern multiplier applied
    pub footprint: FootprintResult,
    pub eco_score: EcoScoreResult,
    pub attribution: CarbonAttributionBreakdown,
}

/// Proposed minus baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDelta {
    pub energy_percent: f64,
    pub co2e_percent: f64,
    pub water_percent: f64,
    pub energy_kwh: f64,
    pub co2e_grams: f64,
    pub water_liters: f64,
    pub eco_score: f64,
}

/// Absolute deltas extended to twelve months (signed)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualProjection {
    pub co2e_kg: f64,
    pub energy_kwh: f64,
    pub water_liters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub baseline: ScenarioResult,
    pub proposed: ScenarioResult,
    pub delta: ScenarioDelta,
    pub recommendation: ScenarioRecommendation,
    pub tradeoffs: Vec<Tradeoff>,
    pub annual_projection: AnnualProjection,
}

/// Evaluate one scenario with the default attribution policy
pub fn run_scenario(
    config: &ScenarioConfig,
    extra_models: &[ModelProfile],
) -> Result<ScenarioResult> {
    run_scenario_with(config, extra_models, &AttributionPolicy::default())
}

/// Evaluate one scenario
pub fn run_scenario_with(
    config: &ScenarioConfig,
    extra_models: &[ModelProfile],
    policy: &AttributionPolicy,
) -> Result<ScenarioResult> {
    run_weighted_scenario(config, extra_models, policy, EcoScoreWeights::default())
}

/// Evaluate one scenario, scoring it with explicit EcoScore weights
pub(crate) fn run_weighted_scenario(
    config: &ScenarioConfig,
    extra_models: &[ModelProfile],
    policy: &AttributionPolicy,
    weights: EcoScoreWeights,
) -> Result<ScenarioResult> {
    let total_tokens = config.total_tokens();
    let fp_options = FootprintOptions {
        pue: config.pue,
        wue: config.wue,
        gpu_override: None,
        extra_models,
    };
    let base = compute_footprint(
        &config.model_id,
        &config.region_id,
        total_tokens,
        config.request_count,
        &fp_options,
    )?;

    let multiplier = config.usage_pattern.multiplier();
    let mut footprint = base.scaled(multiplier);
    footprint
        .assumptions
        .push(Assumption::UsagePattern { pattern: config.usage_pattern, multiplier });

    let eco_options = EcoScoreOptions::new().with_weights(weights).with_extra_models(extra_models);
    let eco_score = compute_eco_score(&config.model_id, &config.region_id, &eco_options)?;
    let attribution = compute_carbon_attribution_with(&footprint, &footprint.model, policy);

    Ok(ScenarioResult { config: config.clone(), total_tokens, footprint, eco_score, attribution })
}

fn percent_change(new: f64, old: f64) -> f64 {
    if old == 0.0 {
        return 0.0;
    }
    round_dp((new - old) / old * 100.0, 2)
}

fn scenario_tradeoffs(baseline: &ScenarioResult, proposed: &ScenarioResult) -> Vec<Tradeoff> {
    let (b, p) = (&baseline.footprint, &proposed.footprint);
    let mut tradeoffs = Vec::new();

    if b.model.quality_score != p.model.quality_score {
        tradeoffs.push(Tradeoff::QualityChange {
            baseline_model: b.model.display_name.clone(),
            proposed_model: p.model.display_name.clone(),
            baseline_quality: b.model.quality_score,
            proposed_quality: p.model.quality_score,
        });
    }
    if b.grid.region_id != p.grid.region_id {
        tradeoffs.push(Tradeoff::RegionChange {
            from_location: b.grid.location.clone(),
            to_location: p.grid.location.clone(),
            from_intensity: b.grid.g_co2e_per_kwh,
            to_intensity: p.grid.g_co2e_per_kwh,
        });
    }
    let (from, to) = (baseline.config.usage_pattern, proposed.config.usage_pattern);
    if from != to {
        tradeoffs.push(Tradeoff::UsagePatternChange {
            from,
            to,
            from_multiplier: from.multiplier(),
            to_multiplier: to.multiplier(),
        });
    }
    tradeoffs
}

/// Compare two scenarios with the default attribution policy
pub fn compare_scenarios(
    baseline: &ScenarioConfig,
    proposed: &ScenarioConfig,
    extra_models: &[ModelProfile],
) -> Result<ScenarioComparison> {
    compare_scenarios_with(baseline, proposed, extra_models, &AttributionPolicy::default())
}

/// Compare a proposed scenario against a baseline
pub fn compare_scenarios_with(
    baseline: &ScenarioConfig,
    proposed: &ScenarioConfig,
    extra_models: &[ModelProfile],
    policy: &AttributionPolicy,
) -> Result<ScenarioComparison> {
    let baseline = run_scenario_with(baseline, extra_models, policy)?;
    let proposed = run_scenario_with(proposed, extra_models, policy)?;
    let (b, p) = (&baseline.footprint, &proposed.footprint);

    let delta = ScenarioDelta {
        energy_percent: percent_change(p.energy_kwh, b.energy_kwh),
        co2e_percent: percent_change(p.co2e_grams, b.co2e_grams),
        water_percent: percent_change(p.water_liters, b.water_liters),
        energy_kwh: p.energy_kwh - b.energy_kwh,
        co2e_grams: p.co2e_grams - b.co2e_grams,
        water_liters: p.water_liters - b.water_liters,
        eco_score: round_dp(proposed.eco_score.overall - baseline.eco_score.overall, 2),
    };

    let recommendation = ScenarioRecommendation {
        verdict: ScenarioVerdict::classify(delta.co2e_grams, delta.eco_score),
        co2e_percent: delta.co2e_percent,
        eco_score_delta: delta.eco_score,
    };

    let annual_projection = AnnualProjection {
        co2e_kg: delta.co2e_grams / 1000.0 * MONTHS_PER_YEAR,
        energy_kwh: delta.energy_kwh * MONTHS_PER_YEAR,
        water_liters: delta.water_liters * MONTHS_PER_YEAR,
    };

    let tradeoffs = scenario_tradeoffs(&baseline, &proposed);

    Ok(ScenarioComparison {
        baseline,
        proposed,
        delta,
        recommendation,
        tradeoffs,
        annual_projection,
    })
}
