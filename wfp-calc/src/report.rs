use crate::components::{compute_components, WaterComponents};
use crate::efficiency::{classify_efficiency, EfficiencyTier};
use crate::error::Result;
use crate::input::FootprintInput;
use crate::insights::{generate_insights, Insights};
use serde::Serialize;

/// Everything a single calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintReport {
    pub components: WaterComponents,
    pub tier: &'static EfficiencyTier,
    pub insights: Insights,
}

impl FootprintReport {
    /// Text shown under the total: "Excellent - Highly efficient water usage".
    pub fn tier_summary(&self) -> String {
        format!("{} - {}", self.tier.rating, self.tier.recommendation)
    }

    pub fn total_display(&self) -> String {
        format!("{:.2}", self.components.total_water_footprint)
    }
}

/// Components, then tier, then insights.
///
/// Input is validated first so nothing negative or non-finite reaches the formulas.
pub fn calculate(input: &FootprintInput) -> Result<FootprintReport> {
    input.validate()?;
    let components = compute_components(input);
    let tier = classify_efficiency(components.total_water_footprint, components.land_area)?;
    let insights = generate_insights(&components);
    Ok(FootprintReport {
        components,
        tier,
        insights,
    })
}
