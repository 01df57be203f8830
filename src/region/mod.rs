//! Region and display-currency settings
//!
//! The site shows every price in the currency of the selected region. The
//! selection is an explicit value handed to whatever needs it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market the visitor is browsing from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "USA")]
    Usa,
    Australia,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Usa, Region::Australia];

    /// Currency implied by the region
    pub fn currency(&self) -> Currency {
        match self {
            Region::Usa => Currency::Usd,
            Region::Australia => Currency::Aud,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Usa => "USA",
            Region::Australia => "Australia",
        }
    }

    /// Country flag emoji shown in the region picker
    pub fn flag(&self) -> &'static str {
        match self {
            Region::Usa => "🇺🇸",
            Region::Australia => "🇦🇺",
        }
    }

    /// Checkout payment methods offered in the region
    pub fn payment_methods(&self) -> &'static [&'static str] {
        match self {
            Region::Usa => &["Credit Card", "PayPal", "Apple Pay", "Google Pay", "Bank Transfer"],
            Region::Australia => &["Credit Card", "BPAY", "POLi", "PayID", "Bank Transfer"],
        }
    }

    /// Parse a region name, treating anything unrecognised as USA
    pub fn from_name_or_default(name: &str) -> Region {
        name.parse().unwrap_or(Region::Usa)
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usa" | "us" => Ok(Region::Usa),
            "australia" | "au" => Ok(Region::Australia),
            other => Err(format!("unknown region: {}", other)),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ISO 4217 currencies the site can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Aud,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Aud => "AUD",
        }
    }

    /// BCP 47 locale whose formatting rules apply to this currency
    pub fn locale(&self) -> &'static str {
        match self {
            Currency::Usd => "en-US",
            Currency::Aud => "en-AU",
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "AUD" => Ok(Currency::Aud),
            other => Err(format!("unsupported currency: {}", other)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Region selection plus the currency derived from it
///
/// Changing the region re-derives the currency; an explicit currency
/// override lasts until the next region change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSettings {
    region: Region,
    currency: Currency,
}

impl RegionSettings {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            currency: region.currency(),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
        self.currency = region.currency();
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// Builder-style override used by the CLI
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

impl Default for RegionSettings {
    fn default() -> Self {
        Self::new(Region::Usa)
    }
}
