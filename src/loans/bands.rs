//! Credit score bands and loan terms offered by the travel loan calculator

use crate::error::QuoteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credit score band selected on the loan form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CreditBand {
    /// 720+
    Excellent,
    /// 690-719
    Good,
    /// 630-689
    Fair,
    /// below 630
    Poor,
}

impl CreditBand {
    pub const ALL: [CreditBand; 4] = [
        CreditBand::Excellent,
        CreditBand::Good,
        CreditBand::Fair,
        CreditBand::Poor,
    ];

    /// Nominal annual interest rate as a decimal
    pub fn annual_rate(&self) -> f64 {
        match self {
            CreditBand::Excellent => 0.069,
            CreditBand::Good => 0.089,
            CreditBand::Fair => 0.119,
            CreditBand::Poor => 0.159,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreditBand::Excellent => "excellent",
            CreditBand::Good => "good",
            CreditBand::Fair => "fair",
            CreditBand::Poor => "poor",
        }
    }

    /// Label shown in the credit score dropdown
    pub fn label(&self) -> &'static str {
        match self {
            CreditBand::Excellent => "Excellent (720+)",
            CreditBand::Good => "Good (690-719)",
            CreditBand::Fair => "Fair (630-689)",
            CreditBand::Poor => "Poor (below 630)",
        }
    }
}

impl FromStr for CreditBand {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(CreditBand::Excellent),
            "good" => Ok(CreditBand::Good),
            "fair" => Ok(CreditBand::Fair),
            "poor" => Ok(CreditBand::Poor),
            _ => Err(QuoteError::UnsupportedCreditBand(s.to_string())),
        }
    }
}

impl TryFrom<String> for CreditBand {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CreditBand> for String {
    fn from(band: CreditBand) -> Self {
        band.as_str().to_string()
    }
}

impl fmt::Display for CreditBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repayment term in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanTerm {
    Months3,
    Months6,
    Months12,
    Months18,
    Months24,
    Months36,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 6] = [
        LoanTerm::Months3,
        LoanTerm::Months6,
        LoanTerm::Months12,
        LoanTerm::Months18,
        LoanTerm::Months24,
        LoanTerm::Months36,
    ];

    pub fn months(&self) -> u32 {
        match self {
            LoanTerm::Months3 => 3,
            LoanTerm::Months6 => 6,
            LoanTerm::Months12 => 12,
            LoanTerm::Months18 => 18,
            LoanTerm::Months24 => 24,
            LoanTerm::Months36 => 36,
        }
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = QuoteError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            3 => Ok(LoanTerm::Months3),
            6 => Ok(LoanTerm::Months6),
            12 => Ok(LoanTerm::Months12),
            18 => Ok(LoanTerm::Months18),
            24 => Ok(LoanTerm::Months24),
            36 => Ok(LoanTerm::Months36),
            other => Err(QuoteError::UnsupportedTerm(other.to_string())),
        }
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> Self {
        term.months()
    }
}

impl FromStr for LoanTerm {
    type Err = QuoteError;

    /// Parses the dropdown value, e.g. "12"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let months: u32 = s
            .trim()
            .parse()
            .map_err(|_| QuoteError::UnsupportedTerm(s.to_string()))?;
        LoanTerm::try_from(months)
    }
}

impl fmt::Display for LoanTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.months())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_band_rates() {
        assert_eq!(CreditBand::Excellent.annual_rate(), 0.069);
        assert_eq!(CreditBand::Good.annual_rate(), 0.089);
        assert_eq!(CreditBand::Fair.annual_rate(), 0.119);
        assert_eq!(CreditBand::Poor.annual_rate(), 0.159);
    }

    #[test]
    fn test_credit_band_parse() {
        assert_eq!("Good".parse::<CreditBand>(), Ok(CreditBand::Good));
        assert_eq!(
            "superb".parse::<CreditBand>(),
            Err(QuoteError::UnsupportedCreditBand("superb".into()))
        );
    }

    #[test]
    fn test_loan_terms() {
        let months: Vec<u32> = LoanTerm::ALL.iter().map(|t| t.months()).collect();
        assert_eq!(months, vec![3, 6, 12, 18, 24, 36]);

        assert_eq!(LoanTerm::try_from(18), Ok(LoanTerm::Months18));
        assert_eq!(LoanTerm::try_from(48), Err(QuoteError::UnsupportedTerm("48".into())));
        assert_eq!("24".parse::<LoanTerm>(), Ok(LoanTerm::Months24));
        assert_eq!(
            "two years".parse::<LoanTerm>(),
            Err(QuoteError::UnsupportedTerm("two years".into()))
        );
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let band: CreditBand = serde_json::from_str("\"fair\"").unwrap();
        assert_eq!(band, CreditBand::Fair);
        assert_eq!(serde_json::to_string(&LoanTerm::Months6).unwrap(), "6");
        assert!(serde_json::from_str::<LoanTerm>("7").is_err());
    }
}
