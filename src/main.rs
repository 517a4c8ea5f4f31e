//! EcoScore CLI
//!
//! Footprint, rating and comparison of GenAI inference workloads.
//!
//! # Usage
//!
//! ```bash
//! # Footprint of 10k requests
//! ecoscore footprint -m claude3-sonnet -r eu-central-1 --requests 10000
//!
//! # EcoScore with a GPU override
//! ecoscore score -m llama7b -r us-west-2 --gpu nvidia-a10g
//!
//! # Compare models
//! ecoscore compare -m gpt4,mistral7b,claude3-haiku -r eu-north-1 -f json
//!
//! # Baseline vs proposed scenario
//! ecoscore scenario scenarios.yaml
//!
//! # List reference data
//! ecoscore reference regions
//!
//! # Validate config
//! ecoscore validate ecoscore.yaml --detailed
//! ```

use clap::Parser;
use ecoscore::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}
