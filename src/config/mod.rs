//! Configuration: YAML schema, loading, boundary validation and CLI arguments

mod cli;
mod loader;
pub mod schema;
pub mod validate;

pub use cli::{
    parse_args, Cli, Command, CompareArgs, FootprintArgs, ReferenceArgs, ReferenceKind, ReportArgs,
    ScenarioArgs, ScoreArgs, ValidateArgs,
};
pub use loader::{load_config, load_scenario_file, load_usage_file, read_config};
pub use schema::{EngineConfig, FacilityDefaults, ScenarioFile, UsageFile};
pub use validate::{validate_config, ValidationError};
