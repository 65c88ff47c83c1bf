//! [`DisplaySurface`] backed by [`AppState`] signals and the D3.js bridge.

use crate::chart_spec::ChartSpec;
use crate::js_bridge;
use crate::state::AppState;
use crate::surface::{ChartHandle, ChartKind, DisplaySurface, ResultsView};
use dioxus::prelude::*;
use std::collections::HashMap;
use wfp_calc::InputField;

/// Hands out chart ids and remembers each chart's pending render timer.
///
/// A timer is the id of the bridge's polling interval; it stays registered
/// until the chart is released, whether or not the poll has already fired.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    next_id: u64,
    timers: HashMap<u64, i32>,
}

impl ChartRegistry {
    pub fn register(&mut self, spec: &ChartSpec, timer: Option<i32>) -> ChartHandle {
        self.next_id += 1;
        if let Some(timer) = timer {
            self.timers.insert(self.next_id, timer);
        }
        ChartHandle {
            id: self.next_id,
            kind: spec.kind,
            region: spec.region,
        }
    }

    /// Forget the chart and return the timer to cancel, if it had one.
    pub fn release(&mut self, handle: &ChartHandle) -> Option<i32> {
        self.timers.remove(&handle.id)
    }

    /// Charts whose timer has not been released yet.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }
}

pub struct SignalSurface {
    state: AppState,
    charts: ChartRegistry,
}

impl SignalSurface {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            charts: ChartRegistry::default(),
        }
    }
}

impl DisplaySurface for SignalSurface {
    fn read_field(&self, field: InputField) -> Option<String> {
        self.state.fields.read().get(&field).cloned()
    }

    fn mark_invalid(&mut self, field: InputField) {
        self.state.invalid.write().insert(field);
    }

    fn clear_invalid(&mut self) {
        self.state.invalid.write().clear();
    }

    fn show_results(&mut self, view: ResultsView) {
        self.state.error_msg.set(None);
        self.state.results.set(Some(view));
    }

    fn show_error(&mut self, message: &str) {
        self.state.results.set(None);
        self.state.error_msg.set(Some(message.to_string()));
    }

    fn create_chart(&mut self, spec: &ChartSpec) -> Option<ChartHandle> {
        if !js_bridge::region_exists(spec.region) {
            log::warn!("no element with id {} in the document", spec.region);
            return None;
        }
        let data_json = spec.data_json();
        let config_json = spec.config_json();
        let timer = match spec.kind {
            ChartKind::Pie => js_bridge::render_pie_chart(spec.region, &data_json, &config_json),
            ChartKind::Line => js_bridge::render_area_chart(spec.region, &data_json, &config_json),
            ChartKind::Bar => js_bridge::render_bar_chart(spec.region, &data_json, &config_json),
        };
        Some(self.charts.register(spec, timer))
    }

    fn destroy_chart(&mut self, handle: ChartHandle) {
        log::debug!("destroying {} chart #{}", handle.kind, handle.id);
        let timer = self.charts.release(&handle);
        js_bridge::destroy_chart(handle.region, timer);
    }
}
