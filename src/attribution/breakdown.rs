//! Footprint decomposition

use super::policy::AttributionPolicy;
use crate::ecoscore::Confidence;
use crate::footprint::FootprintResult;
use crate::reference::{is_predefined_model, ModelProfile};
use serde::{Deserialize, Serialize};

/// Emissions from running the workload (g CO2e)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationalEmissions {
    pub inference: f64,
    pub networking: f64,
    pub storage: f64,
}

/// Emissions from manufacturing hardware and facilities (g CO2e)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbodiedEmissions {
    pub hardware: f64,
    pub infrastructure: f64,
}

/// Emissions from producing the model (g CO2e)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpstreamEmissions {
    pub training: f64,
    pub finetuning: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
    pub confidence: Confidence,
}

/// Seven-way split of a footprint's emissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonAttributionBreakdown {
    pub operational: OperationalEmissions,
    pub embodied: EmbodiedEmissions,
    pub upstream: UpstreamEmissions,
    /// Exact sum of the seven components
    pub total_grams: f64,
    pub confidence_interval: ConfidenceInterval,
}

impl CarbonAttributionBreakdown {
    /// Components in a fixed order, paired with display labels
    pub fn components(&self) -> [(&'static str, f64); 7] {
        [
            ("Inference", self.operational.inference),
            ("Networking", self.operational.networking),
            ("Storage", self.operational.storage),
            ("Hardware", self.embodied.hardware),
            ("Infrastructure", self.embodied.infrastructure),
            ("Training", self.upstream.training),
            ("Fine-tuning", self.upstream.finetuning),
        ]
    }
}

/// Decompose a footprint with the default policy
pub fn compute_carbon_attribution(
    footprint: &FootprintResult,
    model: &ModelProfile,
) -> CarbonAttributionBreakdown {
    compute_carbon_attribution_with(footprint, model, &AttributionPolicy::default())
}

/// Decompose a footprint with an explicit policy
pub fn compute_carbon_attribution_with(
    footprint: &FootprintResult,
    model: &ModelProfile,
    policy: &AttributionPolicy,
) -> CarbonAttributionBreakdown {
    let inference = footprint.co2e_grams;
    let operational = OperationalEmissions {
        inference,
        networking: inference * policy.networking_ratio,
        storage: inference * policy.storage_ratio,
    };

    let hardware = footprint.hardware_amortized_grams;
    let embodied =
        EmbodiedEmissions { hardware, infrastructure: hardware * policy.infrastructure_ratio };

    // Energy draw stands in for workload size when amortizing training
    let training_per_request = model.training_co2e_tons * 1e6 / policy.lifetime_requests;
    let training = training_per_request * footprint.energy_kwh * 1000.0;
    let upstream = UpstreamEmissions { training, finetuning: training * policy.finetuning_ratio };

    let total_grams = operational.inference
        + operational.networking
        + operational.storage
        + embodied.hardware
        + embodied.infrastructure
        + upstream.training
        + upstream.finetuning;

    let is_custom = !is_predefined_model(&model.id);
    let (uncertainty, confidence) = if is_custom {
        (policy.custom_uncertainty, Confidence::Low)
    } else if model.parameters_billions > policy.large_model_params_billions {
        (policy.predefined_uncertainty, Confidence::Medium)
    } else {
        (policy.predefined_uncertainty, Confidence::High)
    };

    CarbonAttributionBreakdown {
        operational,
        embodied,
        upstream,
        total_grams,
        confidence_interval: ConfidenceInterval {
            low: total_grams * (1.0 - uncertainty),
            high: total_grams * (1.0 + uncertainty),
            confidence,
        },
    }
}
