//! Travel insurance pricing: multiplier bands, premium adjuster and plans

mod bands;
mod plans;
mod premium;

pub use bands::{AgeBand, DurationBand};
pub use plans::{insurance_plans, quote_plans, CoverageLimits, InsurancePlan, PlanQuote, PlanTier};
pub use premium::{adjust_premium, round_to_cents, InsuranceQuoteRequest, InsuranceQuoteResult};
