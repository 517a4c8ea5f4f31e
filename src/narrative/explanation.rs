//! Per-dimension EcoScore explanations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a dimension scored the way it did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum Explanation {
    Energy { kwh_per_million_tokens: f64, pue: f64 },
    Carbon { grams_per_million_tokens: f64, location: String },
    Water { liters_per_million_tokens: f64 },
    Hardware { grams_per_million_tokens: f64, gpu_count: u32, gpu_name: String },
    Renewable { location: String, percentage: f64, source: String },
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Explanation::Energy { kwh_per_million_tokens, pue } => write!(
                f,
                "Model consumes {kwh_per_million_tokens:.3} kWh per million tokens \
                 (incl. PUE {pue})"
            ),
            Explanation::Carbon { grams_per_million_tokens, location } => {
                write!(f, "{grams_per_million_tokens:.1}g CO₂e per million tokens in {location}")
            }
            Explanation::Water { liters_per_million_tokens } => write!(
                f,
                "{liters_per_million_tokens:.3}L water per million tokens \
                 (facility + server cooling)"
            ),
            Explanation::Hardware { grams_per_million_tokens, gpu_count, gpu_name } => write!(
                f,
                "{grams_per_million_tokens:.2}g embodied carbon amortized per million tokens \
                 across {gpu_count}× {gpu_name}"
            ),
            Explanation::Renewable { location, percentage, source } => {
                write!(f, "{location} grid is {percentage}% renewable ({source})")
            }
        }
    }
}
