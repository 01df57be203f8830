//! Fixed-rate amortized loan estimates
//!
//! payment = P * r / (1 - (1 + r)^-n), with r the monthly rate (annual / 12)
//! and n the number of monthly payments.

use super::{CreditBand, LoanTerm};
use crate::error::QuoteError;
use serde::{Deserialize, Serialize};

/// Inputs collected by the loan calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanQuoteRequest {
    pub principal: f64,
    #[serde(rename = "termMonths")]
    pub term: LoanTerm,
    pub credit_band: CreditBand,
}

impl LoanQuoteRequest {
    /// Build a request from loosely typed inputs, validating each field
    pub fn parse(principal: f64, term_months: u32, credit_band: &str) -> Result<Self, QuoteError> {
        Ok(Self {
            principal: QuoteError::check_positive("principal", principal)?,
            term: LoanTerm::try_from(term_months)?,
            credit_band: credit_band.parse()?,
        })
    }

    pub fn estimate(&self) -> Result<LoanQuoteResult, QuoteError> {
        estimate_loan(self.principal, self.term, self.credit_band)
    }
}

/// Output of a single loan estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanQuoteResult {
    pub monthly_payment: f64,
    pub annual_rate_percent: f64,
    pub total_repayment: f64,
    pub total_interest: f64,
}

/// Estimate the fixed monthly payment for a travel loan
///
/// # Errors
/// * `QuoteError::InvalidInput` if `principal` is not a positive finite amount
pub fn estimate_loan(principal: f64, term: LoanTerm, credit_band: CreditBand) -> Result<LoanQuoteResult, QuoteError> {
    let principal = QuoteError::check_positive("principal", principal)?;

    let annual_rate = credit_band.annual_rate();
    let months = term.months();
    let monthly_payment = monthly_payment(principal, annual_rate / 12.0, months);
    let total_repayment = monthly_payment * months as f64;
    let total_interest = total_repayment - principal;
    QuoteError::check_in_range("principal", principal, &[monthly_payment, total_repayment, total_interest])?;

    Ok(LoanQuoteResult {
        monthly_payment,
        annual_rate_percent: annual_rate * 100.0,
        total_repayment,
        total_interest,
    })
}

/// Level payment that retires `principal` over `months` periods at `monthly_rate`
pub fn monthly_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    // Unreachable with the published rate table
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }
    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-(months as i32)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_calculator_inputs() {
        // Page defaults: 3000 over 12 months with a good credit score
        let quote = estimate_loan(3000.0, LoanTerm::Months12, CreditBand::Good).unwrap();

        assert_abs_diff_eq!(quote.monthly_payment, 262.2153, epsilon = 1e-4);
        assert_abs_diff_eq!(quote.annual_rate_percent, 8.9, epsilon = 1e-12);
        assert_abs_diff_eq!(quote.total_repayment, 3146.5840, epsilon = 1e-4);
        assert_abs_diff_eq!(quote.total_interest, 146.5840, epsilon = 1e-4);
    }

    #[test]
    fn test_totals_are_consistent() {
        for term in LoanTerm::ALL {
            for band in CreditBand::ALL {
                let quote = estimate_loan(1500.0, term, band).unwrap();
                assert!(quote.monthly_payment > 0.0);
                assert!(quote.total_interest >= 0.0, "{:?} {:?}", term, band);
                assert_abs_diff_eq!(
                    quote.total_repayment,
                    quote.monthly_payment * term.months() as f64,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        for bad in [0.0, -100.0, f64::NAN] {
            let err = estimate_loan(bad, LoanTerm::Months6, CreditBand::Fair).unwrap_err();
            assert!(matches!(err, QuoteError::InvalidInput { field: "principal", .. }));
        }
    }

    #[test]
    fn test_rejects_principal_that_overflows_totals() {
        let err = estimate_loan(f64::MAX, LoanTerm::Months3, CreditBand::Poor).unwrap_err();
        assert_eq!(err, QuoteError::InvalidInput { field: "principal", value: f64::MAX });

        let quote = estimate_loan(1e300, LoanTerm::Months36, CreditBand::Excellent).unwrap();
        assert!(quote.total_repayment.is_finite());
    }

    #[test]
    fn test_zero_rate_fallback() {
        assert_abs_diff_eq!(monthly_payment(1200.0, 0.0, 12), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let a = estimate_loan(4321.0, LoanTerm::Months36, CreditBand::Poor).unwrap();
        let b = estimate_loan(4321.0, LoanTerm::Months36, CreditBand::Poor).unwrap();
        assert_eq!(a.monthly_payment.to_bits(), b.monthly_payment.to_bits());
        assert_eq!(a.total_interest.to_bits(), b.total_interest.to_bits());
    }

    #[test]
    fn test_parse_request() {
        let request = LoanQuoteRequest::parse(2500.0, 24, "excellent").unwrap();
        assert_eq!(request.term, LoanTerm::Months24);
        assert_eq!(request.credit_band, CreditBand::Excellent);

        assert_eq!(
            LoanQuoteRequest::parse(2500.0, 5, "good"),
            Err(QuoteError::UnsupportedTerm("5".into()))
        );
        assert_eq!(
            LoanQuoteRequest::parse(2500.0, 12, "platinum"),
            Err(QuoteError::UnsupportedCreditBand("platinum".into()))
        );
    }

    #[test]
    fn test_request_json_shape() {
        let request: LoanQuoteRequest =
            serde_json::from_str(r#"{"principal":3000,"termMonths":12,"creditBand":"good"}"#).unwrap();
        assert_eq!(request.term, LoanTerm::Months12);

        let json = serde_json::to_value(request.estimate().unwrap()).unwrap();
        assert!(json.get("monthlyPayment").is_some());
        assert!(json.get("annualRatePercent").is_some());
    }
}
