//! Validation errors raised by the estimators
//!
//! Every error is a deterministic validation failure, so none of them are
//! transient and callers never need to retry. Inputs are checked before any
//! arithmetic runs; results are checked once more for overflow.

use thiserror::Error;

/// Errors returned by the loan and insurance estimators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    /// A monetary input was zero, negative, NaN, infinite, or too large to price
    #[error("{field} must be a positive amount within range, got {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// Loan term outside {3, 6, 12, 18, 24, 36} months, as given by the caller
    #[error("unsupported loan term: {0:?}")]
    UnsupportedTerm(String),

    /// Credit band other than excellent/good/fair/poor
    #[error("unsupported credit band: {0:?}")]
    UnsupportedCreditBand(String),

    /// Trip duration or traveler age band outside the fixed table
    #[error("unsupported {kind} band: {value:?}")]
    UnsupportedBand { kind: &'static str, value: String },
}

impl QuoteError {
    /// Reject non-positive or non-finite money before it reaches a formula
    pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<f64, QuoteError> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(QuoteError::InvalidInput { field, value })
        }
    }

    /// Reject results that overflowed even though the input was accepted
    pub(crate) fn check_in_range(field: &'static str, input: f64, results: &[f64]) -> Result<(), QuoteError> {
        if results.iter().all(|r| r.is_finite()) {
            Ok(())
        } else {
            Err(QuoteError::InvalidInput { field, value: input })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive() {
        assert_eq!(QuoteError::check_positive("principal", 10.0), Ok(10.0));
        assert!(QuoteError::check_positive("principal", 0.0).is_err());
        assert!(QuoteError::check_positive("principal", -5.0).is_err());
        assert!(QuoteError::check_positive("principal", f64::NAN).is_err());
        assert!(QuoteError::check_positive("principal", f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_in_range() {
        assert_eq!(QuoteError::check_in_range("principal", 10.0, &[1.0, 2.0]), Ok(()));
        assert_eq!(
            QuoteError::check_in_range("principal", f64::MAX, &[1.0, f64::INFINITY]),
            Err(QuoteError::InvalidInput { field: "principal", value: f64::MAX })
        );
        assert!(QuoteError::check_in_range("basePrice", 1.0, &[f64::NAN]).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = QuoteError::UnsupportedTerm("7".into());
        assert_eq!(err.to_string(), "unsupported loan term: \"7\"");

        let err = QuoteError::InvalidInput { field: "principal", value: -1.0 };
        assert_eq!(err.to_string(), "principal must be a positive amount within range, got -1");

        let err = QuoteError::UnsupportedBand { kind: "age", value: "120+".into() };
        assert_eq!(err.to_string(), "unsupported age band: \"120+\"");
    }
}
