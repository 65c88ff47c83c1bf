//! Presenter, shared Dioxus components and D3.js bridge for the water
//! footprint form.
//!
//! This crate provides:
//! - `surface`: the `DisplaySurface` trait the presenter draws through
//! - `presenter`: input collection, orchestration and chart ownership
//! - `chart_spec`: JSON payloads for the pie, area and bar charts
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state` / `web_surface`: Dioxus signals and the surface built on them
//! - `components`: Reusable RSX components (fields, cards, chart regions)

pub mod chart_spec;
pub mod components;
pub mod js_bridge;
pub mod presenter;
pub mod state;
pub mod surface;
pub mod web_surface;
