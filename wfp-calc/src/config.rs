//! Fixed coefficients, insight thresholds and the efficiency tier table.

use crate::efficiency::{EfficiencyRating, EfficiencyTier};

/// Grey water per unit of fertilizer applied.
pub const GREY_WATER_FACTOR: f64 = 0.65;

/// Green water above this value counts as good rainwater utilization.
pub const GREEN_WATER_THRESHOLD: f64 = 300.0;

/// Blue water below this value counts as efficient irrigation.
pub const BLUE_WATER_THRESHOLD: f64 = 500.0;

/// Grey water below this value counts as low pollution impact.
pub const GREY_WATER_THRESHOLD: f64 = 100.0;

/// Efficiency tiers in ascending order of water intensity.
///
/// Selection is first-match, so the order of this table is significant.
/// The last entry has no bound and catches everything above `Poor`.
pub static EFFICIENCY_TIERS: [EfficiencyTier; 6] = [
    EfficiencyTier {
        rating: EfficiencyRating::Exceptional,
        max_intensity: Some(500.0),
        color: "#2ecc71",
        recommendation: "Outstanding water management practices",
    },
    EfficiencyTier {
        rating: EfficiencyRating::Excellent,
        max_intensity: Some(1000.0),
        color: "#27ae60",
        recommendation: "Highly efficient water usage",
    },
    EfficiencyTier {
        rating: EfficiencyRating::Good,
        max_intensity: Some(1500.0),
        color: "#3498db",
        recommendation: "Moderate water efficiency, room for improvement",
    },
    EfficiencyTier {
        rating: EfficiencyRating::Average,
        max_intensity: Some(2000.0),
        color: "#f39c12",
        recommendation: "Consider water conservation strategies",
    },
    EfficiencyTier {
        rating: EfficiencyRating::Poor,
        max_intensity: Some(2500.0),
        color: "#e74c3c",
        recommendation: "Urgent need for water management improvements",
    },
    EfficiencyTier {
        rating: EfficiencyRating::Critical,
        max_intensity: None,
        color: "#c0392b",
        recommendation: "Immediate water efficiency interventions required",
    },
];
