//! Travel insurance plan catalogue
//!
//! Prices and coverage limits depend on the display currency; the
//! underwriting provider depends on the region.

use super::{adjust_premium, AgeBand, DurationBand};
use crate::error::QuoteError;
use crate::format::format_currency;
use crate::region::{Currency, Region, RegionSettings};
use serde::Serialize;

/// Plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Basic,
    Premium,
    Elite,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Basic, PlanTier::Premium, PlanTier::Elite];

    /// Base price for a 4-7 day trip by a 30-39 year old
    pub fn base_price(&self, currency: Currency) -> f64 {
        match (self, currency) {
            (PlanTier::Basic, Currency::Usd) => 59.99,
            (PlanTier::Basic, Currency::Aud) => 89.99,
            (PlanTier::Premium, Currency::Usd) => 89.99,
            (PlanTier::Premium, Currency::Aud) => 139.99,
            (PlanTier::Elite, Currency::Usd) => 159.99,
            (PlanTier::Elite, Currency::Aud) => 249.99,
        }
    }

    pub fn provider(&self, region: Region) -> &'static str {
        match (self, region) {
            (PlanTier::Basic, Region::Usa) => "SafeTravel USA",
            (PlanTier::Basic, Region::Australia) => "AusGuard Insurance",
            (PlanTier::Premium, Region::Usa) => "TravelGuard Pro",
            (PlanTier::Premium, Region::Australia) => "Qantas Insurance",
            (PlanTier::Elite, Region::Usa) => "Allianz Global",
            (PlanTier::Elite, Region::Australia) => "Cover-More Elite",
        }
    }

    /// Coverage limits in USD; AUD limits are 1.5x
    fn usd_limits(&self) -> CoverageLimits {
        match self {
            PlanTier::Basic => CoverageLimits {
                medical: 50_000.0,
                cancellation: 1_000.0,
                baggage: 500.0,
                delay: 200.0,
            },
            PlanTier::Premium => CoverageLimits {
                medical: 250_000.0,
                cancellation: 5_000.0,
                baggage: 2_500.0,
                delay: 500.0,
            },
            PlanTier::Elite => CoverageLimits {
                medical: 1_000_000.0,
                cancellation: 10_000.0,
                baggage: 5_000.0,
                delay: 1_000.0,
            },
        }
    }

    pub fn coverage(&self, currency: Currency) -> CoverageLimits {
        let usd = self.usd_limits();
        match currency {
            Currency::Usd => usd,
            Currency::Aud => CoverageLimits {
                medical: usd.medical * 1.5,
                cancellation: usd.cancellation * 1.5,
                baggage: usd.baggage * 1.5,
                delay: usd.delay * 1.5,
            },
        }
    }
}

/// Maximum payout per coverage category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageLimits {
    pub medical: f64,
    pub cancellation: f64,
    pub baggage: f64,
    pub delay: f64,
}

/// A plan as displayed for one region/currency selection
#[derive(Debug, Clone, Serialize)]
pub struct InsurancePlan {
    pub id: PlanTier,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub currency: Currency,
    pub featured: bool,
    pub coverage: CoverageLimits,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub provider: &'static str,
}

const BASIC_FEATURES: &[&str] = &[
    "Emergency medical expenses",
    "Trip cancellation coverage",
    "Baggage loss protection",
    "24/7 emergency assistance",
];
const BASIC_LIMITATIONS: &[&str] = &[
    "Limited coverage for adventure activities",
    "Pre-existing conditions not covered",
    "No coverage for electronic devices over $300",
];
const PREMIUM_FEATURES: &[&str] = &[
    "Extensive medical coverage",
    "Full trip cancellation reimbursement",
    "Enhanced baggage protection",
    "Trip delay compensation",
    "Coverage for most adventure activities",
    "Rental car damage coverage",
    "Pre-existing conditions covered (with conditions)",
];
const PREMIUM_LIMITATIONS: &[&str] = &[
    "Some extreme sports require additional coverage",
    "Maximum trip duration of 45 days",
];
const ELITE_FEATURES: &[&str] = &[
    "Premium medical evacuation coverage",
    "Cancel for any reason option",
    "Premium baggage protection including electronics",
    "Generous travel delay compensation",
    "Coverage for all adventure activities",
    "Rental car coverage included",
    "Pre-existing conditions covered",
    "Concierge services",
    "Primary coverage (no deductible)",
];
const ELITE_LIMITATIONS: &[&str] = &["Higher cost premium"];

impl InsurancePlan {
    pub fn for_settings(tier: PlanTier, settings: &RegionSettings) -> Self {
        let currency = settings.currency();
        let (name, description, features, limitations) = match tier {
            PlanTier::Basic => (
                "Basic Protection",
                "Essential coverage for budget-conscious travelers",
                BASIC_FEATURES,
                BASIC_LIMITATIONS,
            ),
            PlanTier::Premium => (
                "Premium Coverage",
                "Comprehensive protection with enhanced benefits",
                PREMIUM_FEATURES,
                PREMIUM_LIMITATIONS,
            ),
            PlanTier::Elite => (
                "Elite Traveler",
                "Premium coverage for discerning travelers",
                ELITE_FEATURES,
                ELITE_LIMITATIONS,
            ),
        };

        Self {
            id: tier,
            name,
            description,
            price: tier.base_price(currency),
            currency,
            featured: tier == PlanTier::Premium,
            coverage: tier.coverage(currency),
            features,
            limitations,
            provider: tier.provider(settings.region()),
        }
    }
}

/// All plans for the current selection
pub fn insurance_plans(settings: &RegionSettings) -> Vec<InsurancePlan> {
    PlanTier::ALL
        .iter()
        .map(|&tier| InsurancePlan::for_settings(tier, settings))
        .collect()
}

/// A plan together with its price for the chosen trip
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanQuote {
    pub plan: InsurancePlan,
    pub duration_band: DurationBand,
    pub age_band: AgeBand,
    pub adjusted_price: f64,
    pub display_price: String,
}

/// Price every plan for a trip duration and traveler age
pub fn quote_plans(
    settings: &RegionSettings,
    duration: DurationBand,
    age: AgeBand,
) -> Result<Vec<PlanQuote>, QuoteError> {
    insurance_plans(settings)
        .into_iter()
        .map(|plan| -> Result<PlanQuote, QuoteError> {
            let adjusted_price = adjust_premium(plan.price, duration, age)?;
            Ok(PlanQuote {
                display_price: format_currency(adjusted_price, plan.currency),
                plan,
                duration_band: duration,
                age_band: age,
                adjusted_price,
            })
        })
        .collect()
}
