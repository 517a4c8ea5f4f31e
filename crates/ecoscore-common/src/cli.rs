//! CLI output selection and message styling.

use std::fmt;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json, yaml")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// Consistent prefixes for terminal messages.
pub mod styles {
    /// Section header
    pub fn header(title: &str) -> String {
        let rule = "═".repeat(title.chars().count() + 4);
        format!("{rule}\n  {title}\n{rule}")
    }

    /// Success line
    pub fn success(msg: &str) -> String {
        format!("✓ {msg}")
    }

    /// Warning line
    pub fn warning(msg: &str) -> String {
        format!("⚠ {msg}")
    }

    /// Error line
    pub fn error(msg: &str) -> String {
        format!("✗ {msg}")
    }

    /// Indented bullet
    pub fn bullet(msg: &str) -> String {
        format!("  • {msg}")
    }
}
