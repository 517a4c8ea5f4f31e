//! Attribution policy knobs

use serde::{Deserialize, Serialize};

/// Fixed ratios and constants used to decompose a footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionPolicy {
    /// Networking overhead as a share of inference emissions
    pub networking_ratio: f64,
    /// Storage overhead as a share of inference emissions
    pub storage_ratio: f64,
    /// Data-center construction as a share of hardware emissions
    pub infrastructure_ratio: f64,
    /// Fine-tuning as a share of amortized training emissions
    pub finetuning_ratio: f64,
    /// Requests over which training emissions are amortized
    pub lifetime_requests: f64,
    /// Relative half-width of the interval for caller-supplied models
    pub custom_uncertainty: f64,
    /// Relative half-width of the interval for predefined models
    pub predefined_uncertainty: f64,
    /// Predefined models above this size get medium rather than high confidence
    pub large_model_params_billions: f64,
}

impl AttributionPolicy {
    pub const NETWORKING_RATIO: f64 = 0.02;
    pub const STORAGE_RATIO: f64 = 0.005;
    pub const INFRASTRUCTURE_RATIO: f64 = 0.15;
    pub const FINETUNING_RATIO: f64 = 0.10;
    pub const LIFETIME_REQUESTS: f64 = 1e11;
    pub const CUSTOM_UNCERTAINTY: f64 = 0.40;
    pub const PREDEFINED_UNCERTAINTY: f64 = 0.15;
    pub const LARGE_MODEL_PARAMS_BILLIONS: f64 = 100.0;
}

impl Default for AttributionPolicy {
    fn default() -> Self {
        Self {
            networking_ratio: Self::NETWORKING_RATIO,
            storage_ratio: Self::STORAGE_RATIO,
            infrastructure_ratio: Self::INFRASTRUCTURE_RATIO,
            finetuning_ratio: Self::FINETUNING_RATIO,
            lifetime_requests: Self::LIFETIME_REQUESTS,
            custom_uncertainty: Self::CUSTOM_UNCERTAINTY,
            predefined_uncertainty: Self::PREDEFINED_UNCERTAINTY,
            large_model_params_billions: Self::LARGE_MODEL_PARAMS_BILLIONS,
        }
    }
}
