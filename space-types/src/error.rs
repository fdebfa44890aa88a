// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

use crate::units::Unit;

/// Errors raised by unit parsing and conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// The two units measure different quantities, or the pair has no factor
    #[error("cannot convert {magnitude} {from} into {to}")]
    InvalidConversion { magnitude: f64, from: Unit, to: Unit },

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

/// Result type alias for unit operations
pub type Result<T> = std::result::Result<T, UnitError>;
