//! Travel loan calculator: credit bands, terms and the amortization estimate

mod bands;
mod estimator;

pub use bands::{CreditBand, LoanTerm};
pub use estimator::{estimate_loan, monthly_payment, LoanQuoteRequest, LoanQuoteResult};
