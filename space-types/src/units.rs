// SPDX-License-Identifier: GPL-3.0-only

//! Length and area unit conversion
//!
//! Provides conversions between metric and imperial units used when editing
//! location dimensions, with optional rounding of the result for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnitError};

const FEET_PER_METER: f64 = 3.281;
const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.764;
const CENTIMETERS_PER_INCH: f64 = 2.54;
const CENTIMETERS_PER_METER: f64 = 100.0;

/// Physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Length,
    Area,
}

/// Units accepted by location forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Feet,
    Meters,
    Inches,
    Centimeters,
    SquareFeet,
    SquareMeters,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Feet,
        Unit::Meters,
        Unit::Inches,
        Unit::Centimeters,
        Unit::SquareFeet,
        Unit::SquareMeters,
    ];

    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Feet | Unit::Meters | Unit::Inches | Unit::Centimeters => Dimension::Length,
            Unit::SquareFeet | Unit::SquareMeters => Dimension::Area,
        }
    }

    /// Serialized name, e.g. `square_feet`
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Feet => "feet",
            Unit::Meters => "meters",
            Unit::Inches => "inches",
            Unit::Centimeters => "centimeters",
            Unit::SquareFeet => "square_feet",
            Unit::SquareMeters => "square_meters",
        }
    }

    /// Get the display label for this unit
    pub fn label(self) -> &'static str {
        match self {
            Unit::Feet => "feet",
            Unit::Meters => "meters",
            Unit::Inches => "inches",
            Unit::Centimeters => "centimeters",
            Unit::SquareFeet => "sq. ft",
            Unit::SquareMeters => "sq. m",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| UnitError::UnknownUnit(s.to_string()))
    }
}

/// Options for [`convert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Decimal digits to round to; `None` returns the raw result
    pub round: Option<u32>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { round: Some(2) }
    }
}

impl ConvertOptions {
    pub fn unrounded() -> Self {
        Self { round: None }
    }

    /// Round to `digits` decimals; zero disables rounding
    pub fn round_to(digits: u32) -> Self {
        Self {
            round: (digits > 0).then_some(digits),
        }
    }
}

/// Convert `magnitude` from one unit into another.
///
/// Converting a unit into itself returns `magnitude` untouched, without
/// rounding. Pairs without a conversion factor, including any pair that
/// crosses dimensions, fail with [`UnitError::InvalidConversion`].
pub fn convert(magnitude: f64, from: Unit, to: Unit, options: ConvertOptions) -> Result<f64> {
    if from == to {
        return Ok(magnitude);
    }

    let result = match (from, to) {
        (Unit::Feet, Unit::Meters) => magnitude / FEET_PER_METER,
        (Unit::Meters, Unit::Feet) => magnitude * FEET_PER_METER,

        (Unit::Centimeters, Unit::Inches) => magnitude / CENTIMETERS_PER_INCH,
        (Unit::Inches, Unit::Centimeters) => magnitude * CENTIMETERS_PER_INCH,

        (Unit::Centimeters, Unit::Meters) => magnitude / CENTIMETERS_PER_METER,
        (Unit::Meters, Unit::Centimeters) => magnitude * CENTIMETERS_PER_METER,

        (Unit::SquareFeet, Unit::SquareMeters) => magnitude / SQUARE_FEET_PER_SQUARE_METER,
        (Unit::SquareMeters, Unit::SquareFeet) => magnitude * SQUARE_FEET_PER_SQUARE_METER,

        _ => {
            return Err(UnitError::InvalidConversion {
                magnitude,
                from,
                to,
            });
        }
    };

    Ok(match options.round {
        Some(digits) if digits > 0 => round_decimals(result, digits),
        _ => result,
    })
}

fn round_decimals(value: f64, digits: u32) -> f64 {
    let factor = 10_f64.powi(digits as i32);
    round_half_up(value * factor) / factor
}

// Ties go toward positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
