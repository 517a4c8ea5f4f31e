//! Global engine constants
//!
//! Facility defaults, communication equivalencies and EcoScore benchmarks.

use serde::{Deserialize, Serialize};

/// Default Power Usage Effectiveness (industry average for modern data centers)
pub const DEFAULT_PUE: f64 = 1.2;

/// Default Water Usage Effectiveness in L/kWh (Google 2023 average)
pub const DEFAULT_WUE_LITERS_PER_KWH: f64 = 1.1;

/// Communication-only equivalency factors
pub mod equivalencies {
    /// Average EU passenger car at 168 g CO2/km
    pub const KM_DRIVING_PER_KG_CO2E: f64 = 5.95;
    /// Roughly 0.012 kWh per smartphone charge
    pub const SMARTPHONE_CHARGES_PER_KWH: f64 = 86.0;
}

/// Best/worst anchor pair for one EcoScore dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub best: f64,
    pub worst: f64,
}

/// Benchmarks for the five EcoScore dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcoScoreBenchmarks {
    /// kWh per million tokens
    pub energy_per_million_tokens: Benchmark,
    /// g CO2e per million tokens
    pub co2e_per_million_tokens: Benchmark,
    /// Liters per million tokens
    pub water_per_million_tokens: Benchmark,
    /// Amortized embodied g CO2e per million tokens
    pub hardware_per_million_tokens: Benchmark,
    /// Renewable share of the grid, percent
    pub renewable_percentage: Benchmark,
}

/// Fixed benchmark set used by every EcoScore calculation
pub const ECOSCORE_BENCHMARKS: EcoScoreBenchmarks = EcoScoreBenchmarks {
    energy_per_million_tokens: Benchmark { best: 0.03, worst: 5.0 },
    co2e_per_million_tokens: Benchmark { best: 2.3, worst: 2100.0 },
    water_per_million_tokens: Benchmark { best: 0.03, worst: 5.5 },
    hardware_per_million_tokens: Benchmark { best: 0.5, worst: 120.0 },
    renewable_percentage: Benchmark { best: 100.0, worst: 0.0 },
};
