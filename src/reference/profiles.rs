//! Reference record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad model class, used for listing and reporting only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelCategory {
    FrontierLlm,
    MidSizeLlm,
    SmallEdge,
    CodeModel,
    ImageGen,
    Embedding,
    Multimodal,
    #[default]
    Custom,
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelCategory::FrontierLlm => "frontier-llm",
            ModelCategory::MidSizeLlm => "mid-size-llm",
            ModelCategory::SmallEdge => "small-edge",
            ModelCategory::CodeModel => "code-model",
            ModelCategory::ImageGen => "image-gen",
            ModelCategory::Embedding => "embedding",
            ModelCategory::Multimodal => "multimodal",
            ModelCategory::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Technical profile of an inference model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelProfile {
    /// Globally unique id (predefined and custom ids share one namespace)
    pub id: String,
    /// Human-readable name
    pub display_name: String,
    /// Model family
    pub family: String,
    /// Model class
    #[serde(default)]
    pub category: ModelCategory,
    /// Parameter count in billions
    pub parameters_billions: f64,
    /// Default GPU profile id used for inference
    pub gpu: String,
    /// GPUs serving one replica
    pub gpu_count_inference: u32,
    /// Nominal throughput per GPU
    pub tokens_per_second_per_gpu: f64,
    /// IT energy per million tokens, excluding facility overhead (kWh)
    pub energy_per_million_tokens_kwh: f64,
    /// Training energy (MWh)
    #[serde(default)]
    pub training_energy_mwh: f64,
    /// Training emissions (tonnes CO2e)
    #[serde(default)]
    pub training_co2e_tons: f64,
    /// Capability score, 0-100
    pub quality_score: f64,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ModelProfile {
    /// Aggregate throughput of one replica (tokens/s)
    pub fn replica_tokens_per_second(&self) -> f64 {
        self.tokens_per_second_per_gpu * f64::from(self.gpu_count_inference)
    }

    /// Wall-clock hours to generate `tokens` at nominal throughput
    pub fn inference_hours(&self, tokens: f64) -> f64 {
        tokens / self.replica_tokens_per_second() / 3600.0
    }
}

/// GPU hardware profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuProfile {
    pub id: String,
    pub name: String,
    /// Thermal design power (W)
    pub tdp_watts: f64,
    /// Typical utilization fraction under inference load
    pub typical_utilization: f64,
    pub memory_gb: f64,
    pub flops_teraflops: f64,
    /// Manufacturing and shipping emissions (kg CO2e)
    pub embodied_carbon_kg_co2e: f64,
    /// Expected service life (hours)
    pub expected_lifespan_hours: f64,
    /// Direct liquid cooling draw (L/h)
    pub water_cooling_liters_per_hour: f64,
}

impl GpuProfile {
    /// Embodied carbon spread linearly over the service life (g CO2e per GPU-hour)
    pub fn embodied_grams_per_hour(&self) -> f64 {
        self.embodied_carbon_kg_co2e * 1000.0 / self.expected_lifespan_hours
    }
}

/// Location-based grid carbon intensity for a cloud region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCarbonIntensity {
    pub region_id: String,
    pub provider: String,
    pub location: String,
    /// Annual average intensity (g CO2e/kWh)
    pub g_co2e_per_kwh: f64,
    /// Share of renewable generation (0-100)
    pub renewable_percentage: f64,
    pub source: String,
    pub year: u16,
}
