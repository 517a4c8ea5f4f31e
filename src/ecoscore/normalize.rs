//! Benchmark normalization

use crate::reference::Benchmark;

/// Map a lower-is-better rate onto 0-100 on a logarithmic scale
///
/// Values at or below `best` score 100, values at or above `worst` score 0.
/// Equal ratios between two values always yield equal score differences.
pub fn log_normalize(value: f64, benchmark: Benchmark) -> f64 {
    if value <= benchmark.best {
        return 100.0;
    }
    if value >= benchmark.worst {
        return 0.0;
    }
    let span = benchmark.worst.ln() - benchmark.best.ln();
    let score = 100.0 * (1.0 - (value.ln() - benchmark.best.ln()) / span);
    score.clamp(0.0, 100.0)
}

/// Map a value linearly between `worst` (0) and `best` (100), clamped
pub fn linear_normalize(value: f64, benchmark: Benchmark) -> f64 {
    let span = benchmark.best - benchmark.worst;
    if span == 0.0 {
        return if value >= benchmark.best { 100.0 } else { 0.0 };
    }
    (100.0 * (value - benchmark.worst) / span).clamp(0.0, 100.0)
}

/// Round half away from zero to `decimals` places
pub(crate) fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
