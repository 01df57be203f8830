//! Flightish - estimators behind the travel-finance site
//!
//! This library provides:
//! - Travel loan estimates (fixed-rate amortization by credit band)
//! - Travel insurance premium adjustment by trip duration and traveler age
//! - Job and document search/filtering over an in-memory catalogue
//! - Region-aware currency formatting
//! - Form validation and submission state for the site's forms
//! - A transport-independent router exposing the estimators over HTTP

pub mod catalog;
pub mod error;
pub mod format;
pub mod forms;
pub mod insurance;
pub mod loans;
pub mod rate_sheet;
pub mod region;
pub mod service;

// Re-export commonly used types
pub use catalog::{filter_records, Catalog, JobPosting, SearchableRecord, WalletDocument};
pub use error::QuoteError;
pub use format::format_currency;
pub use insurance::{adjust_premium, AgeBand, DurationBand, InsuranceQuoteRequest, InsuranceQuoteResult};
pub use loans::{estimate_loan, CreditBand, LoanQuoteRequest, LoanQuoteResult, LoanTerm};
pub use rate_sheet::RateSheet;
pub use region::{Currency, Region, RegionSettings};
pub use service::{EstimateService, ServiceResponse};
