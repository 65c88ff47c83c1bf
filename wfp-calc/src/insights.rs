use crate::components::WaterComponents;
use crate::config::{BLUE_WATER_THRESHOLD, GREEN_WATER_THRESHOLD, GREY_WATER_THRESHOLD};
use serde::Serialize;

/// Human-readable summary of one water component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub title: &'static str,
    /// Raw value formatted to two decimal places.
    pub value: String,
    pub description: &'static str,
}

/// One insight per water component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub green_water: Insight,
    pub blue_water: Insight,
    pub grey_water: Insight,
}

impl Insights {
    /// Green, blue, grey, in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Insight> {
        [&self.green_water, &self.blue_water, &self.grey_water].into_iter()
    }
}

fn insight(
    title: &'static str,
    value: f64,
    praised: bool,
    good: &'static str,
    bad: &'static str,
) -> Insight {
    Insight {
        title,
        value: format!("{value:.2}"),
        description: if praised { good } else { bad },
    }
}

/// Build the three component insights.
///
/// Green water is praised above its threshold (more captured rain is good);
/// blue and grey are praised below theirs.
pub fn generate_insights(components: &WaterComponents) -> Insights {
    Insights {
        green_water: insight(
            "Green Water Efficiency",
            components.green_water,
            components.green_water > GREEN_WATER_THRESHOLD,
            "Excellent rainwater utilization. Natural water capture is optimized.",
            "Consider improving rainwater capture and retention techniques.",
        ),
        blue_water: insight(
            "Irrigation Management",
            components.blue_water,
            components.blue_water < BLUE_WATER_THRESHOLD,
            "Efficient irrigation practices. Minimal external water usage.",
            "High irrigation needs. Explore water-saving irrigation methods.",
        ),
        grey_water: insight(
            "Environmental Neutralization",
            components.grey_water,
            components.grey_water < GREY_WATER_THRESHOLD,
            "Minimal pollution water requirement. Low environmental impact.",
            "High pollution dilution water. Reduce fertilizer and chemical usage.",
        ),
    }
}
