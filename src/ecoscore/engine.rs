//! EcoScore computation

use super::normalize::{linear_normalize, log_normalize, round_dp};
use super::rating::{Confidence, Grade};
use super::weights::EcoScoreWeights;
use crate::error::Result;
use crate::narrative::{Assumption, Explanation, ParameterSource};
use crate::reference::{
    resolve_gpu, resolve_model, resolve_region, ModelProfile, DEFAULT_PUE,
    DEFAULT_WUE_LITERS_PER_KWH, ECOSCORE_BENCHMARKS,
};
use serde::{Deserialize, Serialize};

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Optional inputs to [`compute_eco_score`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EcoScoreOptions<'a> {
    pub weights: EcoScoreWeights,
    /// GPU profile id replacing the model's default GPU
    pub gpu_override: Option<&'a str>,
    /// Caller-supplied profiles consulted after the predefined table
    pub extra_models: &'a [ModelProfile],
}

impl<'a> EcoScoreOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: EcoScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_gpu(mut self, gpu_id: &'a str) -> Self {
        self.gpu_override = Some(gpu_id);
        self
    }

    pub fn with_extra_models(mut self, extra_models: &'a [ModelProfile]) -> Self {
        self.extra_models = extra_models;
        self
    }
}

/// Score, raw rate and explanation for one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Normalized score, 0-100, one decimal
    pub score: f64,
    /// Raw per-million-token rate (or percentage for renewables)
    pub raw: f64,
    pub unit: String,
    pub explanation: Explanation,
}

impl DimensionScore {
    fn new(score: f64, raw: f64, unit: &str, explanation: Explanation) -> Self {
        Self { score: round_dp(score, 1), raw, unit: unit.to_string(), explanation }
    }
}

/// Per-dimension scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcoScoreBreakdown {
    pub energy_efficiency: DimensionScore,
    pub carbon_intensity: DimensionScore,
    pub water_usage: DimensionScore,
    pub hardware_lifecycle: DimensionScore,
    pub renewable_alignment: DimensionScore,
}

impl EcoScoreBreakdown {
    /// Dimension scores in weight order
    pub fn scores(&self) -> [f64; 5] {
        [
            self.energy_efficiency.score,
            self.carbon_intensity.score,
            self.water_usage.score,
            self.hardware_lifecycle.score,
            self.renewable_alignment.score,
        ]
    }

    /// Dimensions paired with their display names
    pub fn dimensions(&self) -> [(&'static str, &DimensionScore); 5] {
        [
            ("Energy efficiency", &self.energy_efficiency),
            ("Carbon intensity", &self.carbon_intensity),
            ("Water usage", &self.water_usage),
            ("Hardware lifecycle", &self.hardware_lifecycle),
            ("Renewable alignment", &self.renewable_alignment),
        ]
    }
}

/// Composite EcoScore for one model/region pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcoScoreResult {
    /// Weighted score, 0-100, one decimal
    pub overall: f64,
    pub grade: Grade,
    pub breakdown: EcoScoreBreakdown,
    pub assumptions: Vec<Assumption>,
    pub confidence: Confidence,
}

/// Rate EcoScore for a model in a region
///
/// Facility coefficients are always the engine defaults so that scores stay
/// comparable across callers.
pub fn compute_eco_score(
    model_id: &str,
    region_id: &str,
    options: &EcoScoreOptions<'_>,
) -> Result<EcoScoreResult> {
    let resolved = resolve_model(model_id, options.extra_models)?;
    let model = resolved.profile;
    let gpu = resolve_gpu(options.gpu_override.unwrap_or(&model.gpu))?;
    let region = resolve_region(region_id)?;
    let benchmarks = &ECOSCORE_BENCHMARKS;

    let pue = DEFAULT_PUE;
    let wue = DEFAULT_WUE_LITERS_PER_KWH;
    let hours_per_million = model.inference_hours(TOKENS_PER_MILLION);

    let energy_raw = model.energy_per_million_tokens_kwh * pue;
    let co2_raw = energy_raw * region.g_co2e_per_kwh;
    let water_raw = energy_raw * wue + gpu.water_cooling_liters_per_hour * hours_per_million;
    let hardware_raw =
        gpu.embodied_grams_per_hour() * f64::from(model.gpu_count_inference) * hours_per_million;
    let renewable_raw = region.renewable_percentage;

    let energy_score = log_normalize(energy_raw, benchmarks.energy_per_million_tokens);
    let carbon_score = log_normalize(co2_raw, benchmarks.co2e_per_million_tokens);
    let water_score = log_normalize(water_raw, benchmarks.water_per_million_tokens);
    let hardware_score = log_normalize(hardware_raw, benchmarks.hardware_per_million_tokens);
    let renewable_score = linear_normalize(renewable_raw, benchmarks.renewable_percentage);

    let weighted: f64 = [energy_score, carbon_score, water_score, hardware_score, renewable_score]
        .iter()
        .zip(options.weights.as_array())
        .map(|(score, weight)| score * weight)
        .sum();
    let overall = round_dp(weighted, 1);

    let breakdown = EcoScoreBreakdown {
        energy_efficiency: DimensionScore::new(
            energy_score,
            round_dp(energy_raw, 3),
            "kWh/M tokens",
            Explanation::Energy { kwh_per_million_tokens: energy_raw, pue },
        ),
        carbon_intensity: DimensionScore::new(
            carbon_score,
            round_dp(co2_raw, 2),
            "gCO₂e/M tokens",
            Explanation::Carbon {
                grams_per_million_tokens: co2_raw,
                location: region.location.clone(),
            },
        ),
        water_usage: DimensionScore::new(
            water_score,
            round_dp(water_raw, 3),
            "L/M tokens",
            Explanation::Water { liters_per_million_tokens: water_raw },
        ),
        hardware_lifecycle: DimensionScore::new(
            hardware_score,
            round_dp(hardware_raw, 2),
            "gCO₂e embodied/M tokens",
            Explanation::Hardware {
                grams_per_million_tokens: hardware_raw,
                gpu_count: model.gpu_count_inference,
                gpu_name: gpu.name.clone(),
            },
        ),
        renewable_alignment: DimensionScore::new(
            renewable_score,
            renewable_raw,
            "%",
            Explanation::Renewable {
                location: region.location.clone(),
                percentage: renewable_raw,
                source: region.source.clone(),
            },
        ),
    };

    let assumptions = vec![
        Assumption::Pue { value: pue, source: ParameterSource::Default },
        Assumption::Wue { value: wue, source: ParameterSource::Default },
        Assumption::EnergyBenchmark {
            best: benchmarks.energy_per_million_tokens.best,
            worst: benchmarks.energy_per_million_tokens.worst,
        },
        Assumption::GridLocation {
            location: region.location.clone(),
            g_co2e_per_kwh: region.g_co2e_per_kwh,
        },
        Assumption::RenewableShare { percentage: renewable_raw },
        Assumption::ConfidenceNote,
    ];

    let confidence = if resolved.is_custom() { Confidence::Low } else { Confidence::Medium };

    // Grade the unrounded sum so 89.96 stays an A
    let grade = Grade::from_score(weighted);

    Ok(EcoScoreResult { overall, grade, breakdown, assumptions, confidence })
}
