//! Record types shown in the careers list and the document wallet

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Anything the search box and category picker can filter
pub trait SearchableRecord {
    /// Primary text (job title, document file name)
    fn title(&self) -> &str;
    /// Secondary text (job summary, document type)
    fn description(&self) -> &str;
    /// Facet used by the category picker
    fn category(&self) -> &str;
}

/// An open position on the careers page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub salary: String,
    pub experience: String,
    pub description: String,
}

impl SearchableRecord for JobPosting {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.department
    }
}

/// A file stored in the traveler's document wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletDocument {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: NaiveDate,
    pub size: String,
}

impl SearchableRecord for WalletDocument {
    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.kind
    }

    fn category(&self) -> &str {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serializes_type_field() {
        let doc = WalletDocument {
            id: 1,
            name: "Passport.pdf".into(),
            kind: "Passport".into(),
            date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
            size: "2.4 MB".into(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "Passport");
        assert_eq!(json["date"], "2023-05-15");
        assert_eq!(doc.category(), "Passport");
    }
}
