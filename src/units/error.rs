//! Conversion failure reasons

use thiserror::Error;

use super::normalize::UnitCategory;

/// Why a conversion could not be performed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),

    #[error("Cannot convert {from} to {to}")]
    IncompatibleCategory { from: UnitCategory, to: UnitCategory },

    #[error("No density known for ingredient '{0}'")]
    DensityUnavailable(String),

    #[error("Quantity must be a finite number, got {0}")]
    InvalidValue(f64),

    #[error("Cannot read a quantity from '{0}'")]
    UnparsableQuantity(String),
}

impl ConversionError {
    /// Short machine-readable tag for tool responses
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit(_) => "unknown_unit",
            ConversionError::IncompatibleCategory { .. } => "incompatible_category",
            ConversionError::DensityUnavailable(_) => "density_unavailable",
            ConversionError::InvalidValue(_) => "invalid_value",
            ConversionError::UnparsableQuantity(_) => "unparsable_quantity",
        }
    }
}

/// Result type for conversions
pub type ConversionOutcome<T> = Result<T, ConversionError>;
