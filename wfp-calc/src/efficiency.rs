//! Water intensity and efficiency tier classification.

use crate::config::EFFICIENCY_TIERS;
use crate::error::{FootprintError, Result};
use serde::Serialize;
use std::fmt;

/// Efficiency ratings, best first.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize)]
pub enum EfficiencyRating {
    Exceptional,
    Excellent,
    Good,
    Average,
    Poor,
    Critical,
}

impl EfficiencyRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            EfficiencyRating::Exceptional => "Exceptional",
            EfficiencyRating::Excellent => "Excellent",
            EfficiencyRating::Good => "Good",
            EfficiencyRating::Average => "Average",
            EfficiencyRating::Poor => "Poor",
            EfficiencyRating::Critical => "Critical",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the static tier table.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyTier {
    pub rating: EfficiencyRating,
    /// Inclusive upper bound on water intensity; `None` matches anything.
    pub max_intensity: Option<f64>,
    pub color: &'static str,
    pub recommendation: &'static str,
}

impl EfficiencyTier {
    pub fn matches(&self, water_intensity: f64) -> bool {
        match self.max_intensity {
            Some(max) => water_intensity <= max,
            None => true,
        }
    }
}

/// Total footprint per unit of land area.
///
/// Fails with [`FootprintError::DegenerateInput`] only when the land area is
/// not strictly positive. A total that overflowed to infinity yields an
/// infinite intensity, which [`tier_for_intensity`] rates `Critical`.
pub fn water_intensity(total_water_footprint: f64, land_area: f64) -> Result<f64> {
    if land_area.is_nan() || land_area <= 0.0 {
        return Err(FootprintError::DegenerateInput { land_area });
    }
    Ok(total_water_footprint / land_area)
}

/// Pick the first tier whose bound is at least the intensity.
///
/// Boundary values land in the better tier: 500 is Exceptional, 500.0001 is Excellent.
pub fn tier_for_intensity(water_intensity: f64) -> &'static EfficiencyTier {
    EFFICIENCY_TIERS
        .iter()
        .find(|tier| tier.matches(water_intensity))
        .unwrap_or(&EFFICIENCY_TIERS[EFFICIENCY_TIERS.len() - 1])
}

pub fn classify_efficiency(
    total_water_footprint: f64,
    land_area: f64,
) -> Result<&'static EfficiencyTier> {
    let intensity = water_intensity(total_water_footprint, land_area)?;
    let tier = tier_for_intensity(intensity);
    log::debug!("intensity {intensity} -> {}", tier.rating);
    Ok(tier)
}
