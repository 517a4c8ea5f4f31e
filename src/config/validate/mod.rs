//! Boundary validation
//!
//! The calculation engine trusts its inputs. Everything read from a config
//! file or the command line passes through these checks first.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{
    validate_attribution, validate_comparison, validate_config, validate_custom_model,
    validate_custom_models, validate_facility, validate_scenario, validate_usage,
    validate_weights, MAX_DISPLAY_NAME_CHARS, MIN_DISPLAY_NAME_CHARS, WEIGHT_SUM_TOLERANCE,
};
