//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::surface::ResultsView;
use dioxus::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use wfp_calc::InputField;

/// Shared application state for the water footprint form.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Raw text of each form field, keyed by field
    pub fields: Signal<BTreeMap<InputField, String>>,
    /// Fields flagged invalid by the last calculation
    pub invalid: Signal<BTreeSet<InputField>>,
    /// Result cards from the last successful calculation
    pub results: Signal<Option<ResultsView>>,
    /// Error message if the last calculation failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with every field present and empty.
    pub fn new() -> Self {
        let fields = InputField::ALL
            .into_iter()
            .map(|f| (f, String::new()))
            .collect();
        Self {
            fields: Signal::new(fields),
            invalid: Signal::new(BTreeSet::new()),
            results: Signal::new(None),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
