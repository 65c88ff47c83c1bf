//! Water Footprint Calculator
//!
//! A single form: five numeric inputs, a Calculate button, result cards and
//! three D3.js charts (composition pie, component area, component bars).
//!
//! Data flow:
//! 1. Each keystroke updates `AppState::fields`; negative numbers are clamped to 0.
//! 2. On Calculate: the `Presenter` reads the fields through `SignalSurface`,
//!    runs the calculator and writes cards into `AppState::results`.
//! 3. The presenter destroys the previous charts and asks D3.js to draw new
//!    ones into the chart regions once they exist in the DOM.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use wfp_calc::InputField;
use wfp_chart_ui::components::{
    CalculatorHeader, ChartContainer, ErrorDisplay, NumberField, ResultsPanel,
};
use wfp_chart_ui::js_bridge;
use wfp_chart_ui::presenter::Presenter;
use wfp_chart_ui::state::AppState;
use wfp_chart_ui::surface::ChartKind;
use wfp_chart_ui::web_surface::SignalSurface;

/// DOM id of the results region (cards or error panel).
const RESULT_CONTAINER_ID: &str = "waterFootprintResult";
const FORM_ID: &str = "waterFootprintForm";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting water footprint calculator");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("water-footprint-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut presenter = use_signal(move || Presenter::new(SignalSurface::new(state)));

    // Initialize D3 chart scripts (one-time)
    use_effect(move || {
        js_bridge::init_charts();
    });

    let on_calculate = move |_| {
        if let Some(report) = presenter.write().run_calculation() {
            info!(
                "water footprint {} mm ({})",
                report.total_display(),
                report.tier.rating
            );
        }
    };

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            CalculatorHeader { title: "Water Footprint Calculator".to_string() }

            form {
                id: FORM_ID,
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                for field in InputField::ALL {
                    NumberField { key: "{field}", field: field }
                }
                button {
                    id: "calculateBtn",
                    r#type: "button",
                    style: "margin-top: 8px; padding: 8px 16px; background: #3498db; color: #fff; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: on_calculate,
                    "Calculate"
                }
            }

            div {
                id: RESULT_CONTAINER_ID,
                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                } else {
                    ResultsPanel {}
                }
            }

            ChartRegions {}
        }
    }
}

/// One region per chart kind; the presenter binds each chart to its own id.
#[component]
fn ChartRegions() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin-top: 12px;",
            for kind in ChartKind::ALL {
                ChartContainer {
                    key: "{kind}",
                    id: kind.region_id().to_string(),
                }
            }
        }
    }
}
