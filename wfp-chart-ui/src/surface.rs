//! The display surface the presenter writes to.
//!
//! The browser app implements [`DisplaySurface`] over Dioxus signals and the
//! D3.js bridge; tests implement it in memory.

use crate::chart_spec::ChartSpec;
use serde::Serialize;
use std::fmt;
use wfp_calc::{FootprintReport, InputField};

/// Chart types drawn for each calculation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
    Bar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Pie, ChartKind::Line, ChartKind::Bar];

    /// DOM id of the region this chart is bound to.
    pub fn region_id(&self) -> &'static str {
        match self {
            ChartKind::Pie => "waterFootprintGraph",
            ChartKind::Line => "waterLineGraph",
            ChartKind::Bar => "waterBarGraph",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Pie => f.write_str("pie"),
            ChartKind::Line => f.write_str("line"),
            ChartKind::Bar => f.write_str("bar"),
        }
    }
}

/// A live chart instance.
///
/// Not `Clone`; the single owner hands it back to [`DisplaySurface::destroy_chart`].
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    pub id: u64,
    pub kind: ChartKind,
    pub region: &'static str,
}

/// Which result card a value belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardKind {
    Green,
    Blue,
    Grey,
    Total,
}

impl CardKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            CardKind::Green => "result-card green-card",
            CardKind::Blue => "result-card blue-card",
            CardKind::Grey => "result-card grey-card",
            CardKind::Total => "result-card total-card",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub kind: CardKind,
    pub title: String,
    pub value: String,
    pub caption: String,
    /// Background override; only the total card is tinted by tier.
    pub background: Option<&'static str>,
}

/// Content of the results panel after a successful calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub cards: Vec<ResultCard>,
}

impl From<&FootprintReport> for ResultsView {
    fn from(report: &FootprintReport) -> Self {
        let mut cards: Vec<ResultCard> = [CardKind::Green, CardKind::Blue, CardKind::Grey]
            .into_iter()
            .zip(report.insights.iter())
            .map(|(kind, insight)| ResultCard {
                kind,
                title: insight.title.to_string(),
                value: format!("{} mm", insight.value),
                caption: insight.description.to_string(),
                background: None,
            })
            .collect();

        cards.push(ResultCard {
            kind: CardKind::Total,
            title: "Water Efficiency".to_string(),
            value: format!("{} mm", report.total_display()),
            caption: report.tier_summary(),
            background: Some(report.tier.color),
        });

        Self { cards }
    }
}

/// Capabilities the presenter needs from whatever is displaying it.
pub trait DisplaySurface {
    /// Raw text of a form field, or `None` if the field does not exist.
    fn read_field(&self, field: InputField) -> Option<String>;

    fn mark_invalid(&mut self, field: InputField);

    fn clear_invalid(&mut self);

    /// Replace the results region with the result cards.
    fn show_results(&mut self, view: ResultsView);

    /// Replace the results region with an error panel.
    fn show_error(&mut self, message: &str);

    /// Draw a chart into `spec.region`. Returns `None` if the region is missing.
    fn create_chart(&mut self, spec: &ChartSpec) -> Option<ChartHandle>;

    fn destroy_chart(&mut self, handle: ChartHandle);
}
