//! Usage summary
//!
//! Aggregates a set of evaluated workloads into totals and a per-model
//! breakdown ordered by emissions. Pure and in-memory; storing records and
//! exporting documents belong to the caller.

mod summary;

pub use summary::{
    evaluate_usage, summarize_usage, ModelUsage, UsageEntry, UsageOptions, UsageRecord,
    UsageSummary,
};
