//! Boundary validation logic

use super::error::ValidationError;
use crate::attribution::AttributionPolicy;
use crate::compare::{ScenarioConfig, MAX_COMPARED_MODELS, MIN_COMPARED_MODELS};
use crate::config::schema::EngineConfig;
use crate::ecoscore::EcoScoreWeights;
use crate::reference::{is_predefined_model, resolve_gpu, ModelProfile};

/// Allowed distance of the weight total from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;
pub const MIN_DISPLAY_NAME_CHARS: usize = 2;
pub const MAX_DISPLAY_NAME_CHARS: usize = 200;

const MAX_PARAMETERS_BILLIONS: f64 = 10_000.0;
const MAX_ENERGY_KWH: f64 = 100.0;
const MAX_GPU_COUNT: u32 = 64;
const MAX_TOKENS_PER_SECOND: f64 = 10_000.0;

/// Check weights are non-negative and sum to 1.0
pub fn validate_weights(weights: &EcoScoreWeights) -> Result<(), ValidationError> {
    let fields = [
        ("energy_efficiency", weights.energy_efficiency),
        ("carbon_intensity", weights.carbon_intensity),
        ("water_usage", weights.water_usage),
        ("hardware_lifecycle", weights.hardware_lifecycle),
        ("renewable_alignment", weights.renewable_alignment),
    ];
    for (field, value) in fields {
        if value.is_nan() || value < 0.0 {
            return Err(ValidationError::NegativeWeight { field, value });
        }
    }

    let sum = weights.sum();
    if sum.is_nan() || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ValidationError::WeightSum(sum));
    }
    Ok(())
}

/// Check optional PUE/WUE overrides
pub fn validate_facility(pue: Option<f64>, wue: Option<f64>) -> Result<(), ValidationError> {
    if let Some(pue) = pue {
        if !(1.0..=3.0).contains(&pue) {
            return Err(ValidationError::InvalidPue(pue));
        }
    }
    if let Some(wue) = wue {
        if !(0.0..=5.0).contains(&wue) {
            return Err(ValidationError::InvalidWue(wue));
        }
    }
    Ok(())
}

/// Check a workload has at least one request of at least one token
pub fn validate_usage(requests: u64, avg_tokens_per_request: u64) -> Result<(), ValidationError> {
    if requests == 0 {
        return Err(ValidationError::InvalidRequestCount(requests));
    }
    if avg_tokens_per_request == 0 {
        return Err(ValidationError::InvalidAvgTokens(avg_tokens_per_request));
    }
    Ok(())
}

/// Check a comparison names 2 to 5 models
pub fn validate_comparison<S: AsRef<str>>(model_ids: &[S]) -> Result<(), ValidationError> {
    if !(MIN_COMPARED_MODELS..=MAX_COMPARED_MODELS).contains(&model_ids.len()) {
        return Err(ValidationError::InvalidComparisonSize(model_ids.len()));
    }
    Ok(())
}

/// Check one scenario's name, volume and facility overrides
pub fn validate_scenario(config: &ScenarioConfig) -> Result<(), ValidationError> {
    if config.name.trim().is_empty() {
        return Err(ValidationError::EmptyScenarioName);
    }
    validate_usage(config.request_count, config.avg_tokens_per_request)?;
    validate_facility(config.pue, config.wue)
}

/// Check a caller-supplied model profile
///
/// `others` holds custom profiles already accepted; ids must be unique
/// across them and the predefined table.
pub fn validate_custom_model(
    model: &ModelProfile,
    others: &[ModelProfile],
) -> Result<(), ValidationError> {
    let id = model.id.trim();
    if id.is_empty() {
        return Err(ValidationError::EmptyModelId);
    }
    // Resolution matches ids exactly
    if id != model.id {
        return Err(ValidationError::PaddedModelId(model.id.clone()));
    }
    if is_predefined_model(id) {
        return Err(ValidationError::ShadowsPredefinedModel(id.to_string()));
    }
    if others.iter().any(|m| m.id == model.id) {
        return Err(ValidationError::DuplicateModelId(id.to_string()));
    }

    let name_len = model.display_name.trim().chars().count();
    if !(MIN_DISPLAY_NAME_CHARS..=MAX_DISPLAY_NAME_CHARS).contains(&name_len) {
        return Err(ValidationError::InvalidDisplayName(id.to_string()));
    }
    if model.family.trim().is_empty() {
        return Err(ValidationError::EmptyFamily(id.to_string()));
    }

    let params = model.parameters_billions;
    if params.is_nan() || params <= 0.0 || params > MAX_PARAMETERS_BILLIONS {
        return Err(ValidationError::InvalidParameters { id: id.to_string(), value: params });
    }
    let energy = model.energy_per_million_tokens_kwh;
    if energy.is_nan() || energy <= 0.0 || energy > MAX_ENERGY_KWH {
        return Err(ValidationError::InvalidEnergy { id: id.to_string(), value: energy });
    }
    if resolve_gpu(&model.gpu).is_err() {
        return Err(ValidationError::UnknownGpu { id: id.to_string(), gpu: model.gpu.clone() });
    }
    if !(1..=MAX_GPU_COUNT).contains(&model.gpu_count_inference) {
        return Err(ValidationError::InvalidGpuCount {
            id: id.to_string(),
            value: model.gpu_count_inference,
        });
    }
    if !(1.0..=MAX_TOKENS_PER_SECOND).contains(&model.tokens_per_second_per_gpu) {
        return Err(ValidationError::InvalidThroughput {
            id: id.to_string(),
            value: model.tokens_per_second_per_gpu,
        });
    }
    if !(0.0..=100.0).contains(&model.quality_score) {
        return Err(ValidationError::InvalidQuality {
            id: id.to_string(),
            value: model.quality_score,
        });
    }
    let training = [model.training_energy_mwh, model.training_co2e_tons];
    if training.iter().any(|v| v.is_nan() || *v < 0.0) {
        return Err(ValidationError::NegativeTraining(id.to_string()));
    }
    Ok(())
}

/// Check a list of custom models, including uniqueness within the list
pub fn validate_custom_models(models: &[ModelProfile]) -> Result<(), ValidationError> {
    models
        .iter()
        .enumerate()
        .try_for_each(|(i, model)| validate_custom_model(model, &models[..i]))
}

/// Check attribution policy knobs
pub fn validate_attribution(policy: &AttributionPolicy) -> Result<(), ValidationError> {
    let ratios = [
        ("networking_ratio", policy.networking_ratio),
        ("storage_ratio", policy.storage_ratio),
        ("infrastructure_ratio", policy.infrastructure_ratio),
        ("finetuning_ratio", policy.finetuning_ratio),
        ("large_model_params_billions", policy.large_model_params_billions),
    ];
    for (field, value) in ratios {
        if value.is_nan() || value < 0.0 {
            return Err(ValidationError::InvalidAttributionRatio { field, value });
        }
    }

    let uncertainties = [
        ("custom_uncertainty", policy.custom_uncertainty),
        ("predefined_uncertainty", policy.predefined_uncertainty),
    ];
    for (field, value) in uncertainties {
        if !(0.0..1.0).contains(&value) {
            return Err(ValidationError::InvalidUncertainty { field, value });
        }
    }

    if policy.lifetime_requests.is_nan() || policy.lifetime_requests <= 0.0 {
        return Err(ValidationError::InvalidLifetimeRequests(policy.lifetime_requests));
    }
    Ok(())
}

/// Validate an engine configuration
///
/// Checks:
/// - Facility overrides are in range
/// - Weights are non-negative and sum to 1.0
/// - Attribution knobs are in range
/// - Custom models are well-formed with globally unique ids
pub fn validate_config(config: &EngineConfig) -> Result<(), ValidationError> {
    validate_facility(config.defaults.pue, config.defaults.wue)?;
    validate_weights(&config.weights)?;
    validate_attribution(&config.attribution)?;
    validate_custom_models(&config.custom_models)
}
