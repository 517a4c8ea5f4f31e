//! Two-tier reference lookup
//!
//! Models resolve against the predefined table first and only then against
//! the caller-supplied list, so a custom profile can never shadow a
//! predefined one.

use super::constants::{DEFAULT_PUE, DEFAULT_WUE_LITERS_PER_KWH};
use super::profiles::{GpuProfile, GridCarbonIntensity, ModelProfile};
use super::tables::{GPU_PROFILES, GRID_INTENSITIES, MODEL_PROFILES};
use crate::ecoscore::EcoScoreWeights;
use crate::error::{Error, ReferenceTable, Result};
use serde::{Deserialize, Serialize};

/// Where a resolved model profile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelOrigin {
    /// Process-wide reference table
    Predefined,
    /// Caller-supplied extra profile
    Custom,
}

/// A model profile together with its origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedModel<'a> {
    pub profile: &'a ModelProfile,
    pub origin: ModelOrigin,
}

impl ResolvedModel<'_> {
    /// Whether the profile was supplied by the caller
    pub fn is_custom(&self) -> bool {
        self.origin == ModelOrigin::Custom
    }
}

/// Resolve a model id against the predefined table, then `extra_models`
pub fn resolve_model<'a>(id: &str, extra_models: &'a [ModelProfile]) -> Result<ResolvedModel<'a>> {
    if let Some(profile) = MODEL_PROFILES.iter().find(|m| m.id == id) {
        return Ok(ResolvedModel { profile, origin: ModelOrigin::Predefined });
    }
    extra_models
        .iter()
        .find(|m| m.id == id)
        .map(|profile| ResolvedModel { profile, origin: ModelOrigin::Custom })
        .ok_or_else(|| Error::unknown(ReferenceTable::Model, id))
}

/// Resolve a GPU profile id
pub fn resolve_gpu(id: &str) -> Result<&'static GpuProfile> {
    GPU_PROFILES.iter().find(|g| g.id == id).ok_or_else(|| Error::unknown(ReferenceTable::Gpu, id))
}

/// Resolve a region id to its grid carbon intensity
pub fn resolve_region(id: &str) -> Result<&'static GridCarbonIntensity> {
    GRID_INTENSITIES
        .iter()
        .find(|r| r.region_id == id)
        .ok_or_else(|| Error::unknown(ReferenceTable::Region, id))
}

/// Check whether `id` names a predefined model
pub fn is_predefined_model(id: &str) -> bool {
    MODEL_PROFILES.iter().any(|m| m.id == id)
}

/// All predefined model profiles
pub fn models() -> &'static [ModelProfile] {
    &MODEL_PROFILES
}

/// All GPU profiles
pub fn gpus() -> &'static [GpuProfile] {
    &GPU_PROFILES
}

/// All region intensities
pub fn regions() -> &'static [GridCarbonIntensity] {
    &GRID_INTENSITIES
}

/// Defaults a presentation layer pre-fills its settings with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsDefaults {
    pub default_pue: f64,
    pub default_wue: f64,
    pub ecoscore_weights: EcoScoreWeights,
}

/// Engine defaults for PUE, WUE and EcoScore weights
pub fn settings_defaults() -> SettingsDefaults {
    SettingsDefaults {
        default_pue: DEFAULT_PUE,
        default_wue: DEFAULT_WUE_LITERS_PER_KWH,
        ecoscore_weights: EcoScoreWeights::default(),
    }
}
