//! Trip duration and traveler age bands with their premium multipliers

use crate::error::QuoteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the insured trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DurationBand {
    Days1To3,
    Days4To7,
    Days8To14,
    Days15To30,
    Days31To60,
    Days61To90,
}

impl DurationBand {
    pub const ALL: [DurationBand; 6] = [
        DurationBand::Days1To3,
        DurationBand::Days4To7,
        DurationBand::Days8To14,
        DurationBand::Days15To30,
        DurationBand::Days31To60,
        DurationBand::Days61To90,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            DurationBand::Days1To3 => 0.6,
            DurationBand::Days4To7 => 1.0,
            DurationBand::Days8To14 => 1.5,
            DurationBand::Days15To30 => 2.2,
            DurationBand::Days31To60 => 3.5,
            DurationBand::Days61To90 => 4.8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBand::Days1To3 => "1-3",
            DurationBand::Days4To7 => "4-7",
            DurationBand::Days8To14 => "8-14",
            DurationBand::Days15To30 => "15-30",
            DurationBand::Days31To60 => "31-60",
            DurationBand::Days61To90 => "61-90",
        }
    }

    /// Longest trip, in days, covered by the band
    pub fn max_days(&self) -> u32 {
        match self {
            DurationBand::Days1To3 => 3,
            DurationBand::Days4To7 => 7,
            DurationBand::Days8To14 => 14,
            DurationBand::Days15To30 => 30,
            DurationBand::Days31To60 => 60,
            DurationBand::Days61To90 => 90,
        }
    }
}

impl FromStr for DurationBand {
    type Err = QuoteError;

    /// Accepts "4-7" style ranges (hyphen or en dash, optional " days")
    /// and the single upper-bound values used by the plan picker ("7").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .trim_end_matches("days")
            .trim()
            .replace('–', "-")
            .replace(' ', "");
        let band = match normalized.as_str() {
            "1-3" | "3" => DurationBand::Days1To3,
            "4-7" | "7" => DurationBand::Days4To7,
            "8-14" | "14" => DurationBand::Days8To14,
            "15-30" | "30" => DurationBand::Days15To30,
            "31-60" | "60" => DurationBand::Days31To60,
            "61-90" | "90" => DurationBand::Days61To90,
            _ => {
                return Err(QuoteError::UnsupportedBand {
                    kind: "duration",
                    value: s.to_string(),
                })
            }
        };
        Ok(band)
    }
}

impl TryFrom<String> for DurationBand {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DurationBand> for String {
    fn from(band: DurationBand) -> Self {
        band.as_str().to_string()
    }
}

impl fmt::Display for DurationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.as_str())
    }
}

/// Age of the insured traveler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AgeBand {
    Under18,
    Age18To29,
    Age30To39,
    Age40To49,
    Age50To59,
    Age60To69,
    Age70Plus,
}

impl AgeBand {
    pub const ALL: [AgeBand; 7] = [
        AgeBand::Under18,
        AgeBand::Age18To29,
        AgeBand::Age30To39,
        AgeBand::Age40To49,
        AgeBand::Age50To59,
        AgeBand::Age60To69,
        AgeBand::Age70Plus,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            AgeBand::Under18 => 0.8,
            AgeBand::Age18To29 => 0.9,
            AgeBand::Age30To39 => 1.0,
            AgeBand::Age40To49 => 1.1,
            AgeBand::Age50To59 => 1.3,
            AgeBand::Age60To69 => 1.6,
            AgeBand::Age70Plus => 2.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Under18 => "0-17",
            AgeBand::Age18To29 => "18-29",
            AgeBand::Age30To39 => "30-39",
            AgeBand::Age40To49 => "40-49",
            AgeBand::Age50To59 => "50-59",
            AgeBand::Age60To69 => "60-69",
            AgeBand::Age70Plus => "70+",
        }
    }

    /// Band containing an exact age in years
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=17 => AgeBand::Under18,
            18..=29 => AgeBand::Age18To29,
            30..=39 => AgeBand::Age30To39,
            40..=49 => AgeBand::Age40To49,
            50..=59 => AgeBand::Age50To59,
            60..=69 => AgeBand::Age60To69,
            _ => AgeBand::Age70Plus,
        }
    }
}

impl FromStr for AgeBand {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('–', "-").replace(' ', "");
        let band = match normalized.as_str() {
            "0-17" => AgeBand::Under18,
            "18-29" => AgeBand::Age18To29,
            "30-39" => AgeBand::Age30To39,
            "40-49" => AgeBand::Age40To49,
            "50-59" => AgeBand::Age50To59,
            "60-69" => AgeBand::Age60To69,
            "70+" => AgeBand::Age70Plus,
            _ => {
                return Err(QuoteError::UnsupportedBand {
                    kind: "age",
                    value: s.to_string(),
                })
            }
        };
        Ok(band)
    }
}

impl TryFrom<String> for AgeBand {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AgeBand> for String {
    fn from(band: AgeBand) -> Self {
        band.as_str().to_string()
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_multipliers() {
        let multipliers: Vec<f64> = DurationBand::ALL.iter().map(|b| b.multiplier()).collect();
        assert_eq!(multipliers, vec![0.6, 1.0, 1.5, 2.2, 3.5, 4.8]);
    }

    #[test]
    fn test_age_multipliers() {
        let multipliers: Vec<f64> = AgeBand::ALL.iter().map(|b| b.multiplier()).collect();
        assert_eq!(multipliers, vec![0.8, 0.9, 1.0, 1.1, 1.3, 1.6, 2.2]);
    }

    #[test]
    fn test_duration_aliases() {
        assert_eq!("4-7".parse::<DurationBand>(), Ok(DurationBand::Days4To7));
        assert_eq!("7".parse::<DurationBand>(), Ok(DurationBand::Days4To7));
        assert_eq!("61–90 days".parse::<DurationBand>(), Ok(DurationBand::Days61To90));
        assert!(matches!(
            "91-120".parse::<DurationBand>(),
            Err(QuoteError::UnsupportedBand { kind: "duration", .. })
        ));
    }

    #[test]
    fn test_age_parse_round_trips_labels() {
        for band in AgeBand::ALL {
            assert_eq!(band.as_str().parse::<AgeBand>(), Ok(band));
        }
        assert!(matches!(
            "17-29".parse::<AgeBand>(),
            Err(QuoteError::UnsupportedBand { kind: "age", .. })
        ));
    }

    #[test]
    fn test_age_band_from_age() {
        assert_eq!(AgeBand::from_age(0), AgeBand::Under18);
        assert_eq!(AgeBand::from_age(18), AgeBand::Age18To29);
        assert_eq!(AgeBand::from_age(69), AgeBand::Age60To69);
        assert_eq!(AgeBand::from_age(104), AgeBand::Age70Plus);
    }
}
