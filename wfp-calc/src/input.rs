use crate::error::{FootprintError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five named numeric fields on the input form.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputField {
    LandArea,
    Precipitation,
    Irrigation,
    Runoff,
    Fertilizer,
}

impl InputField {
    /// All fields, in the order they are read from the form.
    pub const ALL: [InputField; 5] = [
        InputField::LandArea,
        InputField::Precipitation,
        InputField::Irrigation,
        InputField::Runoff,
        InputField::Fertilizer,
    ];

    /// The fixed form/DOM name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            InputField::LandArea => "landArea",
            InputField::Precipitation => "precipitation",
            InputField::Irrigation => "irrigation",
            InputField::Runoff => "runoff",
            InputField::Fertilizer => "fertilizer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::LandArea => "Land Area",
            InputField::Precipitation => "Precipitation",
            InputField::Irrigation => "Irrigation",
            InputField::Runoff => "Runoff",
            InputField::Fertilizer => "Fertilizer Use",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            InputField::LandArea => "ha",
            InputField::Precipitation | InputField::Irrigation | InputField::Runoff => "mm",
            InputField::Fertilizer => "kg/ha",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five quantities a footprint is computed from.
///
/// Every value must be finite and non-negative before it reaches the
/// calculator; see [`FootprintInput::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintInput {
    pub land_area: f64,
    pub precipitation: f64,
    pub runoff: f64,
    pub irrigation: f64,
    pub fertilizer: f64,
}

impl FootprintInput {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::LandArea => self.land_area,
            InputField::Precipitation => self.precipitation,
            InputField::Irrigation => self.irrigation,
            InputField::Runoff => self.runoff,
            InputField::Fertilizer => self.fertilizer,
        }
    }

    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::LandArea => self.land_area = value,
            InputField::Precipitation => self.precipitation = value,
            InputField::Irrigation => self.irrigation = value,
            InputField::Runoff => self.runoff = value,
            InputField::Fertilizer => self.fertilizer = value,
        }
    }

    /// Check every field is a finite number >= 0, reporting the first offender.
    pub fn validate(&self) -> Result<()> {
        for field in InputField::ALL {
            let value = self.get(field);
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::InvalidNumber {
                    field: field.name(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}
