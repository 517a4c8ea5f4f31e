//! Comparison Engine
//!
//! Side-by-side evaluation of candidate models at one workload, and
//! baseline-versus-proposed evaluation of two complete scenarios.

mod models;
mod scenario;

pub use models::{
    compare_models, ComparisonFootprint, ComparisonRecommendation, ModelComparison,
    ModelComparisonEntry, Rankings, MAX_COMPARED_MODELS, MIN_COMPARED_MODELS,
};
pub use scenario::{
    compare_scenarios, compare_scenarios_with, run_scenario, run_scenario_with, AnnualProjection,
    ScenarioComparison, ScenarioConfig, ScenarioDelta, ScenarioResult, UsagePattern,
};
pub(crate) use scenario::run_weighted_scenario;

#[cfg(test)]
mod tests;
