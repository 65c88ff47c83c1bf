//! Water footprint calculator.
//!
//! Pure functions mapping five input quantities (land area, precipitation,
//! runoff, irrigation, fertilizer) to green/blue/grey water components, an
//! efficiency tier and per-component insight text. No I/O.
//!
//! # Usage
//!
//! ```rust
//! use wfp_calc::{calculate, EfficiencyRating, FootprintInput};
//!
//! let input = FootprintInput {
//!     land_area: 10.0,
//!     precipitation: 800.0,
//!     runoff: 200.0,
//!     irrigation: 300.0,
//!     fertilizer: 100.0,
//! };
//! let report = calculate(&input).unwrap();
//! assert_eq!(report.components.total_water_footprint, 9650.0);
//! assert_eq!(report.tier.rating, EfficiencyRating::Excellent);
//! ```

pub mod components;
pub mod config;
pub mod efficiency;
pub mod error;
pub mod input;
pub mod insights;
pub mod report;

pub use components::{compute_components, WaterComponents};
pub use efficiency::{
    classify_efficiency, tier_for_intensity, water_intensity, EfficiencyRating, EfficiencyTier,
};
pub use error::{FootprintError, Result};
pub use input::{FootprintInput, InputField};
pub use insights::{generate_insights, Insight, Insights};
pub use report::{calculate, FootprintReport};
