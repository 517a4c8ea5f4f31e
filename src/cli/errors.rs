//! Conversion of engine and validation errors into CLI errors

use crate::config::ValidationError;
use crate::error::Error;
use ecoscore_common::CliError;
use std::path::Path;

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        match err {
            Error::UnknownReference { table, id } => {
                CliError::UnknownReference { table: table.to_string(), id }
            }
            Error::EmptyComparison => {
                CliError::invalid_input("no models to compare", "Pass 2 to 5 ids with --models")
            }
            Error::Config(message) => {
                CliError::invalid_input(message, "Run `ecoscore validate <FILE>` for details")
            }
            Error::Io { context, source } => CliError::io(context, source),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        let suggestion = match &err {
            ValidationError::WeightSum(_) | ValidationError::NegativeWeight { .. } => {
                "Use five non-negative weights that add up to 1.0"
            }
            ValidationError::InvalidComparisonSize(_) => "Pass 2 to 5 comma-separated model ids",
            ValidationError::ShadowsPredefinedModel(_) | ValidationError::DuplicateModelId(_) => {
                "Pick an id not listed by `ecoscore reference models`"
            }
            ValidationError::PaddedModelId(_) => "Remove the surrounding whitespace from the id",
            ValidationError::UnknownGpu { .. } => "Run `ecoscore reference gpus` to list GPU ids",
            _ => "Adjust the value to the allowed range",
        };
        CliError::ConfigValue {
            field: err.field(),
            message: err.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

/// Map config loading failures to path-aware CLI errors
pub(crate) fn config_error(path: &Path, err: Error) -> CliError {
    match err {
        Error::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
            CliError::ConfigNotFound { path: path.to_path_buf() }
        }
        Error::Config(message) => CliError::ConfigParsing { path: path.to_path_buf(), message },
        other => other.into(),
    }
}
