//! Carbon Attribution Engine
//!
//! Splits a computed footprint into operational, embodied and upstream
//! components. The ratios are an illustrative decomposition and live in
//! [`AttributionPolicy`] so callers can replace them.

mod breakdown;
mod policy;

pub use breakdown::{
    compute_carbon_attribution, compute_carbon_attribution_with, CarbonAttributionBreakdown,
    ConfidenceInterval, EmbodiedEmissions, OperationalEmissions, UpstreamEmissions,
};
pub use policy::AttributionPolicy;

#[cfg(test)]
mod tests;
