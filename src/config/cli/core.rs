//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use ecoscore_common::OutputFormat;
use std::path::PathBuf;

use super::types::ReferenceKind;

/// EcoScore: GenAI footprint and sustainability rating engine
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ecoscore")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Energy, carbon and water footprint, EcoScore rating and comparison for GenAI workloads"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Engine configuration file (weights, facility defaults, custom models)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Compute footprint, EcoScore and carbon attribution for a workload
    Footprint(FootprintArgs),

    /// Rate a model in a region
    Score(ScoreArgs),

    /// Compare 2 to 5 models at the same workload
    Compare(CompareArgs),

    /// Compare a baseline and a proposed scenario
    Scenario(ScenarioArgs),

    /// List reference data
    Reference(ReferenceArgs),

    /// Summarize a usage file
    Report(ReportArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Arguments for the footprint command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct FootprintArgs {
    /// Model id
    #[arg(short, long)]
    pub model: String,

    /// Region id
    #[arg(short, long)]
    pub region: String,

    /// Number of requests
    #[arg(long, default_value_t = 1000)]
    pub requests: u64,

    /// Average tokens per request
    #[arg(long, default_value_t = 1000)]
    pub avg_tokens: u64,

    /// Override Power Usage Effectiveness
    #[arg(long)]
    pub pue: Option<f64>,

    /// Override Water Usage Effectiveness (L/kWh)
    #[arg(long)]
    pub wue: Option<f64>,

    /// Override the model's GPU profile
    #[arg(long)]
    pub gpu: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the score command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// Model id
    #[arg(short, long)]
    pub model: String,

    /// Region id
    #[arg(short, long)]
    pub region: String,

    /// Override the model's GPU profile
    #[arg(long)]
    pub gpu: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the compare command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CompareArgs {
    /// Comma-separated model ids
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub models: Vec<String>,

    /// Region id
    #[arg(short, long)]
    pub region: String,

    /// Number of requests
    #[arg(long, default_value_t = 1000)]
    pub requests: u64,

    /// Average tokens per request
    #[arg(long, default_value_t = 1000)]
    pub avg_tokens: u64,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the scenario command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScenarioArgs {
    /// YAML file with `baseline` and `proposed` scenarios
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the reference command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReferenceArgs {
    /// Table to list (models, gpus, regions, defaults)
    #[arg(value_name = "TABLE", default_value = "models")]
    pub table: ReferenceKind,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// YAML file with a `usage` list
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub file: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
