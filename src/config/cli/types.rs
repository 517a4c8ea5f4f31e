//! CLI argument value types

/// Reference table to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceKind {
    #[default]
    Models,
    Gpus,
    Regions,
    /// Engine defaults for PUE, WUE and EcoScore weights
    Defaults,
}

impl std::str::FromStr for ReferenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "models" | "model" => Ok(ReferenceKind::Models),
            "gpus" | "gpu" => Ok(ReferenceKind::Gpus),
            "regions" | "region" => Ok(ReferenceKind::Regions),
            "defaults" | "settings" => Ok(ReferenceKind::Defaults),
            _ => Err(format!(
                "Unknown reference table: {s}. Valid tables: models, gpus, regions, defaults"
            )),
        }
    }
}
