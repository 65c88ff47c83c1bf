//! Reusable Dioxus RSX components for the water footprint form.

mod calculator_header;
mod chart_container;
mod error_display;
mod number_field;
mod results_panel;

pub use calculator_header::CalculatorHeader;
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use number_field::NumberField;
pub use results_panel::ResultsPanel;
