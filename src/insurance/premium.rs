//! Premium adjustment for trip length and traveler age

use super::{AgeBand, DurationBand};
use crate::error::QuoteError;
use serde::{Deserialize, Serialize};

/// Inputs for a single plan price adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceQuoteRequest {
    pub base_price: f64,
    pub duration_band: DurationBand,
    pub age_band: AgeBand,
}

impl InsuranceQuoteRequest {
    /// Build a request from the raw dropdown values
    pub fn parse(base_price: f64, duration_band: &str, age_band: &str) -> Result<Self, QuoteError> {
        Ok(Self {
            base_price: QuoteError::check_positive("basePrice", base_price)?,
            duration_band: duration_band.parse()?,
            age_band: age_band.parse()?,
        })
    }

    pub fn quote(&self) -> Result<InsuranceQuoteResult, QuoteError> {
        let adjusted_price = adjust_premium(self.base_price, self.duration_band, self.age_band)?;
        Ok(InsuranceQuoteResult { adjusted_price })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceQuoteResult {
    pub adjusted_price: f64,
}

/// Scale a plan's base price by the duration and age multipliers
///
/// The result is rounded half-up to cents.
pub fn adjust_premium(base_price: f64, duration: DurationBand, age: AgeBand) -> Result<f64, QuoteError> {
    let base_price = QuoteError::check_positive("basePrice", base_price)?;
    let multiplier = duration.multiplier() * age.multiplier();
    let adjusted = round_to_cents(base_price * multiplier);
    QuoteError::check_in_range("basePrice", base_price, &[adjusted])?;
    Ok(adjusted)
}

/// Round a non-negative amount to 2 decimal places, halves going up
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_multipliers() {
        let price = adjust_premium(59.99, DurationBand::Days4To7, AgeBand::Age30To39).unwrap();
        assert_eq!(price, 59.99);
    }

    #[test]
    fn test_longest_trip_oldest_traveler() {
        // 59.99 * (4.8 * 2.2) = 633.4944
        let price = adjust_premium(59.99, DurationBand::Days61To90, AgeBand::Age70Plus).unwrap();
        assert_eq!(price, 633.49);
    }

    #[test]
    fn test_short_trip_discount() {
        // 89.99 * 0.6 * 0.8 = 43.1952
        let price = adjust_premium(89.99, DurationBand::Days1To3, AgeBand::Under18).unwrap();
        assert_eq!(price, 43.2);
    }

    #[test]
    fn test_every_band_combination_is_positive() {
        for duration in DurationBand::ALL {
            for age in AgeBand::ALL {
                let price = adjust_premium(159.99, duration, age).unwrap();
                assert!(price > 0.0 && price.is_finite(), "{:?} {:?}", duration, age);
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let err = adjust_premium(0.0, DurationBand::Days4To7, AgeBand::Age30To39).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput { field: "basePrice", .. }));
    }

    #[test]
    fn test_rejects_price_that_overflows() {
        let err = adjust_premium(f64::MAX, DurationBand::Days61To90, AgeBand::Age70Plus).unwrap_err();
        assert_eq!(err, QuoteError::InvalidInput { field: "basePrice", value: f64::MAX });
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(10.005 + 1e-9), 10.01);
        assert_eq!(round_to_cents(43.1952), 43.2);
        assert_eq!(round_to_cents(12.0), 12.0);
    }

    #[test]
    fn test_parse_request() {
        let request = InsuranceQuoteRequest::parse(89.99, "14", "50-59").unwrap();
        assert_eq!(request.duration_band, DurationBand::Days8To14);
        assert_eq!(request.age_band, AgeBand::Age50To59);

        // 89.99 * 1.5 * 1.3 = 175.4805
        assert_eq!(request.quote().unwrap().adjusted_price, 175.48);

        assert!(matches!(
            InsuranceQuoteRequest::parse(89.99, "100", "50-59"),
            Err(QuoteError::UnsupportedBand { kind: "duration", .. })
        ));
    }
}
