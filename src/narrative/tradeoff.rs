//! Trade-offs, comparison narrative and scenario recommendations

use crate::compare::UsagePattern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A notable tension between candidate configurations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum Tradeoff {
    /// Best EcoScore and lowest absolute emissions belong to different models
    OverallVsEmissions { best_overall: String, lowest_emissions: String },
    /// A model other than the EcoScore leader gives the most quality per carbon
    QualityPerCarbonLeader { model: String },
    /// Switching off the lowest-scoring model saves a material share of emissions
    Migration {
        from: String,
        to: String,
        reduction_percent: i64,
        quality_from: f64,
        quality_to: f64,
    },
    /// Scenario changes the model's quality score
    QualityChange {
        baseline_model: String,
        proposed_model: String,
        baseline_quality: f64,
        proposed_quality: f64,
    },
    /// Scenario moves the workload to a different grid
    RegionChange {
        from_location: String,
        to_location: String,
        from_intensity: f64,
        to_intensity: f64,
    },
    /// Scenario changes how requests are scheduled
    UsagePatternChange {
        from: UsagePattern,
        to: UsagePattern,
        from_multiplier: f64,
        to_multiplier: f64,
    },
}

impl fmt::Display for Tradeoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tradeoff::OverallVsEmissions { best_overall, lowest_emissions } => write!(
                f,
                "{best_overall} has the best overall EcoScore but {lowest_emissions} has lower \
                 absolute emissions; consider workload criticality."
            ),
            Tradeoff::QualityPerCarbonLeader { model } => {
                write!(f, "{model} offers the best quality per unit of carbon.")
            }
            Tradeoff::Migration { from, to, reduction_percent, quality_from, quality_to } => write!(
                f,
                "Switching from {from} to {to} could reduce emissions by ~{reduction_percent}% \
                 with a quality score change of {quality_from} → {quality_to}."
            ),
            Tradeoff::QualityChange {
                baseline_model,
                proposed_model,
                baseline_quality,
                proposed_quality,
            } => {
                let direction = if proposed_quality < baseline_quality { "drops" } else { "rises" };
                write!(
                    f,
                    "Quality score {direction} from {baseline_quality} ({baseline_model}) to \
                     {proposed_quality} ({proposed_model}); confirm the proposed model meets \
                     task requirements."
                )
            }
            Tradeoff::RegionChange { from_location, to_location, from_intensity, to_intensity } => {
                write!(
                    f,
                    "Moving from {from_location} ({from_intensity} gCO2e/kWh) to {to_location} \
                     ({to_intensity} gCO2e/kWh) may affect latency and data residency."
                )
            }
            Tradeoff::UsagePatternChange { from, to, from_multiplier, to_multiplier } => write!(
                f,
                "Usage pattern changes from {from} (×{from_multiplier}) to {to} \
                 (×{to_multiplier}); check that response-time expectations still hold."
            ),
        }
    }
}

/// Headline sentence for a model comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonNarrative {
    pub requests: u64,
    pub location: String,
    pub best_overall: String,
    pub best_overall_score: f64,
    pub best_overall_grade: String,
    pub most_efficient: String,
    pub most_efficient_co2e_grams: f64,
    pub best_quality_per_carbon: String,
    /// Quality points per kg CO2e of the quality-per-carbon leader
    pub quality_points_per_kg: f64,
}

impl fmt::Display for ComparisonNarrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Based on {} requests in {}, {} achieves the best overall EcoScore ({}, {}/100). ",
            super::group_thousands(self.requests),
            self.location,
            self.best_overall,
            self.best_overall_grade,
            self.best_overall_score,
        )?;
        write!(
            f,
            "For maximum efficiency, {} uses only {:.1}g CO₂e. ",
            self.most_efficient, self.most_efficient_co2e_grams
        )?;
        write!(
            f,
            "The best quality-per-carbon ratio belongs to {} at {} quality points per kgCO₂e.",
            self.best_quality_per_carbon, self.quality_points_per_kg
        )
    }
}

/// Outcome class of a scenario comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioVerdict {
    /// Lower emissions and a better EcoScore
    Recommended,
    /// Lower emissions without an EcoScore gain
    Consider,
    /// Better EcoScore but emissions do not fall
    Mixed,
    /// Neither emissions nor EcoScore improve
    NotRecommended,
}

impl ScenarioVerdict {
    /// Classify a change by its CO₂e delta and EcoScore delta
    pub fn classify(co2e_delta: f64, eco_score_delta: f64) -> Self {
        match (co2e_delta < 0.0, eco_score_delta > 0.0) {
            (true, true) => ScenarioVerdict::Recommended,
            (true, false) => ScenarioVerdict::Consider,
            (false, true) => ScenarioVerdict::Mixed,
            (false, false) => ScenarioVerdict::NotRecommended,
        }
    }
}

impl fmt::Display for ScenarioVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScenarioVerdict::Recommended => "Recommended",
            ScenarioVerdict::Consider => "Consider",
            ScenarioVerdict::Mixed => "Mixed",
            ScenarioVerdict::NotRecommended => "Not recommended",
        };
        f.write_str(label)
    }
}

/// Recommendation attached to a scenario comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecommendation {
    pub verdict: ScenarioVerdict,
    pub co2e_percent: f64,
    pub eco_score_delta: f64,
}

impl fmt::Display for ScenarioRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reduction = self.co2e_percent.abs();
        let score = self.eco_score_delta.abs();
        match self.verdict {
            ScenarioVerdict::Recommended => write!(
                f,
                "Recommended: reduces CO₂e by {reduction:.1}% and improves EcoScore by \
                 {score:.1} points."
            ),
            ScenarioVerdict::Consider => write!(
                f,
                "Consider: reduces CO₂e by {reduction:.1}% but EcoScore does not improve \
                 ({:+.1} points).",
                self.eco_score_delta
            ),
            ScenarioVerdict::Mixed => write!(
                f,
                "Mixed: EcoScore improves by {score:.1} points but CO₂e changes by {:+.1}%.",
                self.co2e_percent
            ),
            ScenarioVerdict::NotRecommended => write!(
                f,
                "Not recommended: CO₂e changes by {:+.1}% and EcoScore changes by {:+.1} points.",
                self.co2e_percent, self.eco_score_delta
            ),
        }
    }
}
