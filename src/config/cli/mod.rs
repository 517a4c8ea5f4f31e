//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! ecoscore footprint --model claude3-sonnet --region eu-central-1 --requests 10000
//! ecoscore score --model mistral7b --region eu-north-1 --format json
//! ecoscore compare --models gpt4,claude3-haiku,mistral7b --region us-east-1
//! ecoscore scenario migration.yaml
//! ecoscore reference regions
//! ecoscore --config ecoscore.yaml report usage.yaml
//! ecoscore validate ecoscore.yaml
//! ```

mod core;
mod types;

pub use core::{
    parse_args, Cli, Command, CompareArgs, FootprintArgs, ReferenceArgs, ReportArgs, ScenarioArgs,
    ScoreArgs, ValidateArgs,
};
pub use types::ReferenceKind;

#[cfg(test)]
mod tests;
