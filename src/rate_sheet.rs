//! Rate sheets: every band combination quoted in one batch
//!
//! Used by the CLI's `rate-sheet` command and handy for eyeballing the
//! multiplier tables. Quotes are computed in parallel and returned in
//! enum order.

use crate::error::QuoteError;
use crate::insurance::{adjust_premium, AgeBand, DurationBand};
use crate::loans::{estimate_loan, CreditBand, LoanQuoteResult, LoanTerm};
use rayon::prelude::*;
use serde::Serialize;

/// One cell of the loan grid
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanGridRow {
    pub term_months: u32,
    pub credit_band: CreditBand,
    #[serde(flatten)]
    pub quote: LoanQuoteResult,
}

/// One cell of the premium grid
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumGridRow {
    pub duration_band: DurationBand,
    pub age_band: AgeBand,
    pub adjusted_price: f64,
}

/// Batch quoting over the full band tables
#[derive(Debug, Clone, Copy, Default)]
pub struct RateSheet;

impl RateSheet {
    /// Quote `principal` for every term and credit band (term-major order)
    pub fn loan_grid(principal: f64) -> Result<Vec<LoanGridRow>, QuoteError> {
        let cells: Vec<(LoanTerm, CreditBand)> = LoanTerm::ALL
            .iter()
            .flat_map(|&term| CreditBand::ALL.iter().map(move |&band| (term, band)))
            .collect();

        cells
            .par_iter()
            .map(|&(term, credit_band)| -> Result<LoanGridRow, QuoteError> {
                Ok(LoanGridRow {
                    term_months: term.months(),
                    credit_band,
                    quote: estimate_loan(principal, term, credit_band)?,
                })
            })
            .collect()
    }

    /// Adjust `base_price` for every duration and age band (duration-major order)
    pub fn premium_grid(base_price: f64) -> Result<Vec<PremiumGridRow>, QuoteError> {
        let cells: Vec<(DurationBand, AgeBand)> = DurationBand::ALL
            .iter()
            .flat_map(|&duration| AgeBand::ALL.iter().map(move |&age| (duration, age)))
            .collect();

        cells
            .par_iter()
            .map(|&(duration_band, age_band)| -> Result<PremiumGridRow, QuoteError> {
                Ok(PremiumGridRow {
                    duration_band,
                    age_band,
                    adjusted_price: adjust_premium(base_price, duration_band, age_band)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_grid_covers_every_cell_in_order() {
        let grid = RateSheet::loan_grid(3000.0).unwrap();
        assert_eq!(grid.len(), LoanTerm::ALL.len() * CreditBand::ALL.len());
        assert_eq!(grid[0].term_months, 3);
        assert_eq!(grid[0].credit_band, CreditBand::Excellent);
        assert_eq!(grid.last().unwrap().term_months, 36);
        assert_eq!(grid.last().unwrap().credit_band, CreditBand::Poor);

        // Worse credit never yields a cheaper payment for the same term
        for chunk in grid.chunks(CreditBand::ALL.len()) {
            for pair in chunk.windows(2) {
                assert!(pair[0].quote.monthly_payment < pair[1].quote.monthly_payment);
            }
        }
    }

    #[test]
    fn test_premium_grid() {
        let grid = RateSheet::premium_grid(59.99).unwrap();
        assert_eq!(grid.len(), 42);
        let identity = grid
            .iter()
            .find(|r| r.duration_band == DurationBand::Days4To7 && r.age_band == AgeBand::Age30To39)
            .unwrap();
        assert_eq!(identity.adjusted_price, 59.99);
    }

    #[test]
    fn test_grids_reject_bad_amounts() {
        assert!(RateSheet::loan_grid(-1.0).is_err());
        assert!(RateSheet::premium_grid(0.0).is_err());
    }
}
