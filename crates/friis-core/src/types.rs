//! Error types shared by every link budget operation
//!
//! All validation happens at the boundary of the numeric functions, before
//! any arithmetic runs. Two kinds of failure exist:
//!
//! - **Invalid parameters**: a frequency, distance, wavelength or transmit
//!   power that is not a positive finite number, or a gain that is not finite.
//! - **Numeric domain errors**: a linear quantity that must be converted to
//!   decibels turned out to be zero, negative or non-finite.
//!
//! Rendering failures from a chart sink are reported through the same type so
//! the driver can log and skip a chart with a single error path.

/// Result type for link budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

/// Errors that can occur while computing or rendering a link budget
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BudgetError {
    #[error("Invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Numeric domain error: {quantity} = {value:e} has no logarithm")]
    NumericDomain { quantity: &'static str, value: f64 },

    #[error("Chart rendering failed: {0}")]
    Render(String),
}

impl BudgetError {
    /// Name of the offending parameter or quantity, if there is one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            BudgetError::InvalidParameter { name, .. } => Some(name),
            BudgetError::NumericDomain { quantity, .. } => Some(quantity),
            BudgetError::Render(_) => None,
        }
    }

    /// True for errors raised by input validation.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, BudgetError::InvalidParameter { .. })
    }
}

/// Accept `value` only if it is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> BudgetResult<f64> {
    if !value.is_finite() {
        return Err(BudgetError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(BudgetError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Accept any finite `value`.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> BudgetResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BudgetError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}
