//! Footprint Calculator
//!
//! Absolute energy, carbon, water and embodied-hardware figures for a
//! workload of `total_tokens` spread over `request_count` requests.
//!
//! # Example
//!
//! ```
//! use ecoscore::footprint::{compute_footprint, FootprintOptions};
//!
//! let fp = compute_footprint("claude3-sonnet", "eu-central-1", 10_000_000, 10_000,
//!     &FootprintOptions::default()).unwrap();
//! assert!((fp.energy_kwh - 6.6).abs() < 1e-9);
//! assert!((fp.co2e_grams - 2310.0).abs() < 1e-6);
//! ```

mod calculator;

pub use calculator::{compute_footprint, FootprintOptions, FootprintResult, PerRequest};

#[cfg(test)]
mod proptests;
