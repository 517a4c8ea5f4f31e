//! Structured narrative
//!
//! Assumptions, dimension explanations, trade-offs and recommendations are
//! carried as (template, parameters) values and only rendered to text through
//! `Display` at the presentation boundary. Serialized forms carry a `template`
//! tag next to the parameters.

mod assumption;
mod explanation;
mod tradeoff;

pub use assumption::{Assumption, ParameterSource};
pub use explanation::Explanation;
pub use tradeoff::{ComparisonNarrative, ScenarioRecommendation, ScenarioVerdict, Tradeoff};

/// Render a list of narrative items to strings
pub fn render_all<T: std::fmt::Display>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Format an integer with thousands separators
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
