//! YAML schema definitions for engine, scenario and usage files

use crate::attribution::AttributionPolicy;
use crate::compare::ScenarioConfig;
use crate::ecoscore::EcoScoreWeights;
use crate::footprint::FootprintOptions;
use crate::reference::ModelProfile;
use crate::report::{UsageEntry, UsageOptions};
use serde::{Deserialize, Serialize};

/// Facility coefficient overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityDefaults {
    /// Power Usage Effectiveness; engine default when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pue: Option<f64>,
    /// Water Usage Effectiveness (L/kWh); engine default when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wue: Option<f64>,
}

/// Engine configuration file
///
/// Every section is optional; an empty document yields engine defaults.
///
/// ```yaml
/// defaults:
///   pue: 1.3
/// weights:
///   energy_efficiency: 0.4
///   carbon_intensity: 0.3
///   water_usage: 0.1
///   hardware_lifecycle: 0.1
///   renewable_alignment: 0.1
/// custom_models: []
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub defaults: FacilityDefaults,
    pub weights: EcoScoreWeights,
    pub attribution: AttributionPolicy,
    /// Caller-owned model profiles layered after the predefined table
    pub custom_models: Vec<ModelProfile>,
}

impl EngineConfig {
    /// Footprint options carrying this config's overrides and custom models
    pub fn footprint_options(&self) -> FootprintOptions<'_> {
        FootprintOptions {
            pue: self.defaults.pue,
            wue: self.defaults.wue,
            gpu_override: None,
            extra_models: &self.custom_models,
        }
    }

    /// Usage options carrying this config's overrides, weights, policy and custom models
    pub fn usage_options(&self) -> UsageOptions<'_> {
        UsageOptions {
            pue: self.defaults.pue,
            wue: self.defaults.wue,
            weights: self.weights,
            extra_models: &self.custom_models,
            policy: self.attribution,
        }
    }
}

/// Baseline and proposed scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub baseline: ScenarioConfig,
    pub proposed: ScenarioConfig,
}

/// Workloads to summarize
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageFile {
    #[serde(default)]
    pub usage: Vec<UsageEntry>,
}
