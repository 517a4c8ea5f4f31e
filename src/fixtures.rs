//! Shared test fixtures

use crate::reference::{ModelCategory, ModelProfile};

/// A valid caller-supplied model profile served on a single T4
pub(crate) fn custom_model(id: &str) -> ModelProfile {
    ModelProfile {
        id: id.to_string(),
        display_name: "Acme Summarizer".to_string(),
        family: "acme".to_string(),
        category: ModelCategory::Custom,
        parameters_billions: 3.0,
        gpu: "nvidia-t4".to_string(),
        gpu_count_inference: 1,
        tokens_per_second_per_gpu: 250.0,
        energy_per_million_tokens_kwh: 0.03,
        training_energy_mwh: 100.0,
        training_co2e_tons: 40.0,
        quality_score: 58.0,
        description: Some("In-house distilled summarization model".to_string()),
    }
}
