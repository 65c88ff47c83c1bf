/// Error types for the water footprint calculator
use thiserror::Error;

/// Main error type for footprint calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FootprintError {
    /// A named input field is absent from the input surface
    #[error("Missing input field: {field}")]
    MissingField { field: &'static str },

    /// Input could not be parsed, was not finite, or was negative
    #[error("Invalid input for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// Land area makes water intensity undefined
    #[error("Water intensity is undefined for land area {land_area}")]
    DegenerateInput { land_area: f64 },
}

/// Type alias for Results using FootprintError
pub type Result<T> = std::result::Result<T, FootprintError>;
