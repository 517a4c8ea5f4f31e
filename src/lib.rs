//! EcoScore: footprint and sustainability rating for generative-AI inference
//!
//! Estimates the energy, carbon and water cost of serving a model in a cloud
//! region, rates the combination on a 0-100 EcoScore with a letter grade,
//! decomposes emissions into operational, embodied and upstream shares, and
//! compares candidate models or deployment scenarios.
//!
//! # Modules
//!
//! - [`reference`] - static GPU, region and model tables plus global constants
//! - [`footprint`] - energy, CO₂e, water and amortized hardware for a workload
//! - [`ecoscore`] - weighted five-dimension rating and grade
//! - [`attribution`] - lifecycle carbon breakdown with a confidence interval
//! - [`compare`] - multi-model rankings and baseline/proposed scenarios
//! - [`report`] - usage aggregation across models
//! - [`narrative`] - structured assumptions, explanations and trade-offs
//! - [`config`] - YAML configuration, boundary validation and CLI arguments
//!
//! # Example
//!
//! ```
//! use ecoscore::ecoscore::{compute_eco_score, EcoScoreOptions};
//!
//! let score = compute_eco_score("mistral7b", "eu-north-1", &EcoScoreOptions::default()).unwrap();
//! assert!(score.overall > 80.0);
//! println!("{} ({})", score.overall, score.grade);
//! ```

pub mod attribution;
pub mod cli;
pub mod compare;
pub mod config;
pub mod ecoscore;
pub mod error;
pub mod footprint;
pub mod narrative;
pub mod reference;
pub mod report;

#[cfg(test)]
mod fixtures;

pub use attribution::{compute_carbon_attribution, CarbonAttributionBreakdown};
pub use compare::{
    compare_models, compare_scenarios, ModelComparison, ScenarioComparison, ScenarioConfig,
};
pub use ecoscore::{compute_eco_score, EcoScoreResult, EcoScoreWeights, Grade};
pub use error::{Error, Result};
pub use footprint::{compute_footprint, FootprintResult};
