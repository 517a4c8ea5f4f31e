//! EcoScore Engine
//!
//! Composite 0-100 sustainability rating over five dimensions. Four are
//! per-million-token rates (energy, carbon, water, hardware) mapped through
//! log-normalization; renewable alignment is a bounded percentage mapped
//! linearly. Rates never depend on request volume, so scores compare models
//! and regions independently of workload size.

mod engine;
mod normalize;
mod rating;
mod weights;

pub use engine::{
    compute_eco_score, DimensionScore, EcoScoreBreakdown, EcoScoreOptions, EcoScoreResult,
};
pub use normalize::{linear_normalize, log_normalize};
pub(crate) use normalize::round_dp;
pub use rating::{Confidence, Grade};
pub use weights::EcoScoreWeights;

#[cfg(test)]
mod proptests;
