//! CLI module for ecoscore
//!
//! Command handlers, error conversion and output gating.

mod commands;
mod errors;
mod logging;

pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
