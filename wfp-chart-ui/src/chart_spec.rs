//! Data and config payloads for the D3.js chart functions.

use crate::surface::ChartKind;
use serde::Serialize;
use wfp_calc::WaterComponents;

pub const COMPONENT_LABELS: [&str; 3] = ["Green Water", "Blue Water", "Grey Water"];
pub const COMPONENT_COLORS: [&str; 3] = ["#2ecc71", "#3498db", "#f39c12"];
/// Area fill under the line chart, same hues at 0.2 alpha.
pub const COMPONENT_FILLS: [&str; 3] = [
    "rgba(46, 204, 113, 0.2)",
    "rgba(52, 152, 219, 0.2)",
    "rgba(243, 156, 18, 0.2)",
];

/// One slice/point/bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<&'static str>,
}

/// Everything needed to draw one chart of the three water components.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub region: &'static str,
    pub title: &'static str,
    pub data: Vec<ChartDatum>,
}

impl ChartSpec {
    pub fn for_components(kind: ChartKind, components: &WaterComponents) -> Self {
        let title = match kind {
            ChartKind::Pie => "Water Footprint Composition",
            ChartKind::Line => "Water Component Trend",
            ChartKind::Bar => "Water Component Comparison",
        };
        let data = components
            .series()
            .into_iter()
            .enumerate()
            .map(|(i, value)| ChartDatum {
                label: COMPONENT_LABELS[i],
                value,
                color: COMPONENT_COLORS[i],
                fill: (kind == ChartKind::Line).then_some(COMPONENT_FILLS[i]),
            })
            .collect();

        Self {
            kind,
            region: kind.region_id(),
            title,
            data,
        }
    }

    pub fn data_json(&self) -> String {
        serde_json::to_string(&self.data).unwrap_or_default()
    }

    pub fn config_json(&self) -> String {
        let config = match self.kind {
            ChartKind::Pie => serde_json::json!({
                "title": self.title,
                "legendPosition": "bottom",
                "padding": 20,
            }),
            ChartKind::Line => serde_json::json!({
                "title": self.title,
                "seriesLabel": "Water Components",
                "beginAtZero": true,
                "fill": true,
                "strokeWidth": 2,
            }),
            ChartKind::Bar => serde_json::json!({
                "title": self.title,
                "seriesLabel": "Water Components",
                "beginAtZero": true,
            }),
        };
        config.to_string()
    }
}
