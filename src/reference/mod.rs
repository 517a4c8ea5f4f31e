//! Reference Data Tables
//!
//! Static, versioned lookup sets: grid carbon intensity per region, GPU
//! hardware profile per class, model profile per model id, and the global
//! constants (default PUE/WUE, equivalency factors, EcoScore benchmarks).
//!
//! # Lookup
//!
//! - [`resolve_model`] - predefined table first, then caller-supplied extras
//! - [`resolve_gpu`] - GPU hardware profile
//! - [`resolve_region`] - grid carbon intensity
//!
//! Each fails with [`Error::UnknownReference`](crate::Error::UnknownReference)
//! naming the missing id and table.

pub mod constants;
mod profiles;
mod resolver;
mod tables;

pub use constants::{
    equivalencies, Benchmark, EcoScoreBenchmarks, DEFAULT_PUE, DEFAULT_WUE_LITERS_PER_KWH,
    ECOSCORE_BENCHMARKS,
};
pub use profiles::{GpuProfile, GridCarbonIntensity, ModelCategory, ModelProfile};
pub use resolver::{
    gpus, is_predefined_model, models, regions, resolve_gpu, resolve_model, resolve_region,
    settings_defaults, ModelOrigin, ResolvedModel, SettingsDefaults,
};

#[cfg(test)]
mod tests;
