//! Error type shared by every model constructor.
//!
//! Only construction can fail. Evaluation is total: numeric edge cases
//! (σ = 0 reached through unchecked struct literals, the undefined angle at the
//! origin, NaN inputs) propagate IEEE special values instead of erroring.

use thiserror::Error;

/// Failure raised when a model is built from parameters it cannot represent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A scale was non-positive, a sequence length was inconsistent, or a
    /// grid had no pixels.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Require `value > 0` and finite. NaN fails the comparison and is rejected too.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameters(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameters(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("sigma", 0.5), Ok(0.5));
        assert!(ensure_positive("sigma", 0.0).is_err());
        assert!(ensure_positive("sigma", -1.0).is_err());
        assert!(ensure_positive("sigma", f64::NAN).is_err());
        assert!(ensure_positive("sigma", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ensure_positive("stretch x", -2.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameters: stretch x must be positive and finite, got -2"
        );
    }
}
