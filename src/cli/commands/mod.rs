//! CLI command implementations

mod compare;
mod footprint;
mod reference;
mod report;
mod scenario;
mod score;
mod validate;


use crate::cli::errors::config_error;
use crate::cli::{init_tracing, LogLevel};
use crate::config::{load_config, Cli, Command, EngineConfig};
use ecoscore_common::{CliError, Result};
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);
    init_tracing(log_level);

    tracing::debug!(command = ?cli.command, config = ?cli.config, "dispatching command");
    let config = || engine_config(cli.config.as_deref());
    match cli.command {
        Command::Footprint(args) => footprint::run_footprint(args, &config()?, log_level),
        Command::Score(args) => score::run_score(args, &config()?, log_level),
        Command::Compare(args) => compare::run_compare(args, &config()?, log_level),
        Command::Scenario(args) => scenario::run_scenario(args, &config()?, log_level),
        Command::Reference(args) => reference::run_reference(args, log_level),
        Command::Report(args) => report::run_report(args, &config()?, log_level),
        // Reads its own file so problems are reported field by field
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}

/// Load the `--config` file, or engine defaults when none is given
pub(crate) fn engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => load_config(path).map_err(|e| config_error(path, e)),
        None => Ok(EngineConfig::default()),
    }
}

/// Total token volume, rejecting workloads that overflow `u64`
pub(crate) fn total_tokens(requests: u64, avg_tokens: u64) -> Result<u64> {
    requests.checked_mul(avg_tokens).ok_or_else(|| {
        CliError::invalid_input(
            format!("{requests} requests × {avg_tokens} tokens overflows the token counter"),
            "Lower --requests or --avg-tokens",
        )
    })
}

/// Format a float with a fixed number of decimals
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
