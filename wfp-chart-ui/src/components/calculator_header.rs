//! Title block with a colour key for the three water components.

use crate::chart_spec::{COMPONENT_COLORS, COMPONENT_LABELS};
use dioxus::prelude::*;

/// What each component measures, in chart order.
const COMPONENT_NOTES: [&str; 3] = [
    "captured rainfall net of runoff",
    "irrigation",
    "pollutant dilution from fertilizer",
];

/// Page title plus one swatch per water component, coloured as in the charts.
#[component]
pub fn CalculatorHeader(title: String) -> Element {
    let key = COMPONENT_LABELS
        .into_iter()
        .zip(COMPONENT_COLORS)
        .zip(COMPONENT_NOTES);

    rsx! {
        header {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0 0 6px 0; font-size: 20px;",
                "{title}"
            }
            ul {
                style: "display: flex; flex-wrap: wrap; gap: 12px; margin: 0; padding: 0; list-style: none; font-size: 12px; color: #555;",
                for ((label, color), note) in key {
                    li {
                        key: "{label}",
                        span {
                            style: "display: inline-block; width: 10px; height: 10px; margin-right: 4px; border-radius: 2px; background: {color};",
                        }
                        "{label}: {note}"
                    }
                }
            }
        }
    }
}
