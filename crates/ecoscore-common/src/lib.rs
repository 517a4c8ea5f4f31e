//! Shared infrastructure for ecoscore CLI tools.
//!
//! This crate provides common utilities used by the `ecoscore` binary:
//! - CLI styling and output format selection
//! - Error handling with actionable diagnostics
//! - Table rendering for terminal output

pub mod cli;
pub mod error;
pub mod output;

pub use cli::{styles, OutputFormat};
pub use error::{CliError, Result};
pub use output::{render, Table, TableBuilder};
