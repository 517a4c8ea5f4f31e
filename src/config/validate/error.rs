//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid weight for {field}: {value} (must be >= 0.0)")]
    NegativeWeight { field: &'static str, value: f64 },

    #[error("EcoScore weights sum to {0} (must sum to 1.0)")]
    WeightSum(f64),

    #[error("Invalid PUE: {0} (must be in [1.0, 3.0])")]
    InvalidPue(f64),

    #[error("Invalid WUE: {0} (must be in [0.0, 5.0])")]
    InvalidWue(f64),

    #[error("Invalid request count: {0} (must be >= 1)")]
    InvalidRequestCount(u64),

    #[error("Invalid average tokens per request: {0} (must be >= 1)")]
    InvalidAvgTokens(u64),

    #[error("Cannot compare {0} models (must compare 2 to 5)")]
    InvalidComparisonSize(usize),

    #[error("Scenario name cannot be empty")]
    EmptyScenarioName,

    #[error("Custom model id cannot be empty")]
    EmptyModelId,

    #[error("Custom model id '{0}' has leading or trailing whitespace")]
    PaddedModelId(String),

    #[error("Custom model id '{0}' collides with a predefined model")]
    ShadowsPredefinedModel(String),

    #[error("Custom model id '{0}' is defined more than once")]
    DuplicateModelId(String),

    #[error("Invalid display name for '{0}' (must be 2 to 200 characters)")]
    InvalidDisplayName(String),

    #[error("Model family for '{0}' cannot be empty")]
    EmptyFamily(String),

    #[error("Invalid parameter count for '{id}': {value}B (must be > 0 and <= 10000)")]
    InvalidParameters { id: String, value: f64 },

    #[error("Invalid energy for '{id}': {value} kWh/M tokens (must be > 0 and <= 100)")]
    InvalidEnergy { id: String, value: f64 },

    #[error("Unknown GPU '{gpu}' for model '{id}'")]
    UnknownGpu { id: String, gpu: String },

    #[error("Invalid GPU count for '{id}': {value} (must be 1 to 64)")]
    InvalidGpuCount { id: String, value: u32 },

    #[error("Invalid throughput for '{id}': {value} tok/s (must be 1 to 10000)")]
    InvalidThroughput { id: String, value: f64 },

    #[error("Invalid quality score for '{id}': {value} (must be 0 to 100)")]
    InvalidQuality { id: String, value: f64 },

    #[error("Training figures for '{0}' cannot be negative")]
    NegativeTraining(String),

    #[error("Invalid attribution {field}: {value} (must be >= 0.0)")]
    InvalidAttributionRatio { field: &'static str, value: f64 },

    #[error("Invalid attribution {field}: {value} (must be in [0.0, 1.0))")]
    InvalidUncertainty { field: &'static str, value: f64 },

    #[error("Invalid lifetime requests: {0} (must be > 0)")]
    InvalidLifetimeRequests(f64),
}

impl ValidationError {
    /// Config field the error refers to, for CLI diagnostics
    pub fn field(&self) -> String {
        match self {
            Self::NegativeWeight { field, .. } => format!("weights.{field}"),
            Self::WeightSum(_) => "weights".to_string(),
            Self::InvalidPue(_) => "pue".to_string(),
            Self::InvalidWue(_) => "wue".to_string(),
            Self::InvalidRequestCount(_) => "requests".to_string(),
            Self::InvalidAvgTokens(_) => "avg_tokens_per_request".to_string(),
            Self::InvalidComparisonSize(_) => "models".to_string(),
            Self::EmptyScenarioName => "name".to_string(),
            Self::InvalidAttributionRatio { field, .. }
            | Self::InvalidUncertainty { field, .. } => format!("attribution.{field}"),
            Self::InvalidLifetimeRequests(_) => "attribution.lifetime_requests".to_string(),
            Self::EmptyModelId
            | Self::PaddedModelId(_)
            | Self::ShadowsPredefinedModel(_)
            | Self::DuplicateModelId(_)
            | Self::InvalidDisplayName(_)
            | Self::EmptyFamily(_)
            | Self::InvalidParameters { .. }
            | Self::InvalidEnergy { .. }
            | Self::UnknownGpu { .. }
            | Self::InvalidGpuCount { .. }
            | Self::InvalidThroughput { .. }
            | Self::InvalidQuality { .. }
            | Self::NegativeTraining(_) => "custom_models".to_string(),
        }
    }
}
