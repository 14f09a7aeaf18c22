//! Validation utilities for the advisory engine
//!
//! Every precondition failure surfaces as a [`ValidationError`]. Inputs are
//! never clamped or coerced into range.

use rust_decimal::Decimal;
use thiserror::Error;

/// The single error kind produced by the advisory engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} out of range: {message}")]
    OutOfRange {
        field: &'static str,
        message: String,
    },

    #[error("{field} is invalid: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        ValidationError::MissingField { field }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidValue { field, .. } => field,
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the first failing field; field order is stable for a given struct.
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);

        match fields.into_iter().next() {
            Some((field, errs)) => {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "failed validation".to_string());
                let is_range = errs.iter().any(|e| e.code == "range");
                if is_range {
                    ValidationError::OutOfRange { field, message }
                } else {
                    ValidationError::InvalidValue { field, message }
                }
            }
            None => ValidationError::InvalidValue {
                field: "input",
                message: "failed validation".to_string(),
            },
        }
    }
}

/// Validate soil moisture is a percentage in [0, 100]
pub fn validate_soil_moisture(moisture: Decimal) -> Result<(), ValidationError> {
    if moisture < Decimal::ZERO || moisture > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: "soil_moisture_percent",
            message: format!("{} is not between 0 and 100", moisture),
        });
    }
    Ok(())
}

/// Validate crop type is a non-blank name
pub fn validate_crop_type(crop: &str) -> Result<(), ValidationError> {
    if crop.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "crop_type",
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate farm area is strictly positive
pub fn validate_area_ha(area: Decimal) -> Result<(), ValidationError> {
    if area <= Decimal::ZERO {
        return Err(ValidationError::OutOfRange {
            field: "area_ha",
            message: format!("{} must be greater than 0", area),
        });
    }
    Ok(())
}

/// Validate a percentage expressed as an integer
pub fn validate_percent(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if value > 100 {
        return Err(ValidationError::OutOfRange {
            field,
            message: format!("{} is not between 0 and 100", value),
        });
    }
    Ok(())
}
