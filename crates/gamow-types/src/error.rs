use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Numerical overflow: {quantity} = {value}")]
    NumericalOverflow { quantity: &'static str, value: f64 },

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RateError {
    /// Short machine-readable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RateError::InvalidArgument(_) => "invalid_argument",
            RateError::NumericalOverflow { .. } => "numerical_overflow",
            RateError::Unsupported(_) => "unsupported",
            RateError::Io(_) => "io",
            RateError::Json(_) => "json",
        }
    }
}

pub type RateResult<T> = Result<T, RateError>;

/// Reject NaN and ±∞ produced by an intermediate quantity.
pub fn ensure_finite(quantity: &'static str, value: f64) -> RateResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RateError::NumericalOverflow { quantity, value })
    }
}

/// Require a finite, strictly positive argument.
pub fn require_positive(name: &str, value: f64) -> RateResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RateError::InvalidArgument(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}

/// Require a finite, non-negative argument.
pub fn require_non_negative(name: &str, value: f64) -> RateResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RateError::InvalidArgument(format!(
            "{name} must be finite and >= 0, got {value}"
        )))
    }
}
