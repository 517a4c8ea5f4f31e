//! EcoScore dimension weights

use serde::{Deserialize, Serialize};

/// Weight per EcoScore dimension
///
/// Callers keep every field non-negative and the total at 1.0; the engine
/// applies whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcoScoreWeights {
    pub energy_efficiency: f64,
    pub carbon_intensity: f64,
    pub water_usage: f64,
    pub hardware_lifecycle: f64,
    pub renewable_alignment: f64,
}

impl EcoScoreWeights {
    pub const DEFAULT: Self = Self {
        energy_efficiency: 0.30,
        carbon_intensity: 0.30,
        water_usage: 0.10,
        hardware_lifecycle: 0.10,
        renewable_alignment: 0.20,
    };

    /// Total of all five weights
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Weights in breakdown order
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.energy_efficiency,
            self.carbon_intensity,
            self.water_usage,
            self.hardware_lifecycle,
            self.renewable_alignment,
        ]
    }
}

impl Default for EcoScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
