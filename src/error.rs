//! Engine error types

use std::fmt;
use thiserror::Error;

/// Reference table a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceTable {
    /// Model profiles (predefined plus caller-supplied)
    Model,
    /// GPU hardware profiles
    Gpu,
    /// Grid carbon intensity per region
    Region,
}

impl fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceTable::Model => "model",
            ReferenceTable::Gpu => "gpu",
            ReferenceTable::Region => "region",
        };
        f.write_str(name)
    }
}

/// Engine errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown {table} id: {id}")]
    UnknownReference { table: ReferenceTable, id: String },

    #[error("Model comparison requires at least one model id")]
    EmptyComparison,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn unknown(table: ReferenceTable, id: &str) -> Self {
        Self::UnknownReference { table, id: id.to_string() }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;
