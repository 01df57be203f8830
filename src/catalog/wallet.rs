//! In-memory document wallet
//!
//! Backs the wallet page: list, upload, delete, and filter by document kind.

use super::WalletDocument;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Filter entries shown in the wallet sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    All,
    Passport,
    Insurance,
    Visa,
    Medical,
    Identification,
    Financial,
    Accommodation,
    Other,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 9] = [
        DocumentKind::All,
        DocumentKind::Passport,
        DocumentKind::Insurance,
        DocumentKind::Visa,
        DocumentKind::Medical,
        DocumentKind::Identification,
        DocumentKind::Financial,
        DocumentKind::Accommodation,
        DocumentKind::Other,
    ];

    /// Identifier used in URLs and filter state
    pub fn id(&self) -> &'static str {
        match self {
            DocumentKind::All => "all",
            DocumentKind::Passport => "passport",
            DocumentKind::Insurance => "insurance",
            DocumentKind::Visa => "visa",
            DocumentKind::Medical => "medical",
            DocumentKind::Identification => "identification",
            DocumentKind::Financial => "financial",
            DocumentKind::Accommodation => "accommodation",
            DocumentKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::All => "All Documents",
            DocumentKind::Passport => "Passport",
            DocumentKind::Insurance => "Insurance",
            DocumentKind::Visa => "Visa Documents",
            DocumentKind::Medical => "Medical Records",
            DocumentKind::Identification => "ID Documents",
            DocumentKind::Financial => "Financial Documents",
            DocumentKind::Accommodation => "Accommodation",
            DocumentKind::Other => "Other",
        }
    }

    /// Whether a stored document type falls under this filter
    pub fn includes(&self, document_type: &str) -> bool {
        match self {
            DocumentKind::All => true,
            kind => document_type.eq_ignore_ascii_case(kind.id()),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DocumentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown document kind: {}", s))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A traveler's documents, owned by the page that shows them
#[derive(Debug, Clone, Default)]
pub struct DocumentWallet {
    documents: Vec<WalletDocument>,
}

impl DocumentWallet {
    pub fn new(documents: Vec<WalletDocument>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[WalletDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Store a new document and return its assigned id
    pub fn add(&mut self, name: &str, kind: &str, size: &str, date: NaiveDate) -> u32 {
        // Ids stay unique after deletions
        let id = self.documents.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        self.documents.push(WalletDocument {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            date,
            size: size.to_string(),
        });
        id
    }

    /// Simulated upload used by the wallet page's upload button
    pub fn upload_placeholder(&mut self, today: NaiveDate) -> u32 {
        self.add("New_Document.pdf", "Other", "1.1 MB", today)
    }

    pub fn remove(&mut self, id: u32) -> Option<WalletDocument> {
        let index = self.documents.iter().position(|d| d.id == id)?;
        Some(self.documents.remove(index))
    }

    /// Documents under a sidebar filter, in upload order
    pub fn filter_by_kind(&self, kind: DocumentKind) -> impl Iterator<Item = &WalletDocument> + Clone {
        self.documents.iter().filter(move |d| kind.includes(&d.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_documents;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filter_by_kind() {
        let wallet = DocumentWallet::new(builtin_documents());
        assert_eq!(wallet.filter_by_kind(DocumentKind::All).count(), 6);

        let visas: Vec<&str> = wallet
            .filter_by_kind(DocumentKind::Visa)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(visas, vec!["Travel_Visa_India.pdf"]);

        assert_eq!(wallet.filter_by_kind(DocumentKind::Financial).count(), 0);
    }

    #[test]
    fn test_upload_and_remove() {
        let mut wallet = DocumentWallet::new(builtin_documents());
        let id = wallet.upload_placeholder(date(2024, 1, 2));
        assert_eq!(id, 7);
        assert_eq!(wallet.filter_by_kind(DocumentKind::Other).count(), 1);

        let removed = wallet.remove(3).unwrap();
        assert_eq!(removed.name, "Medical_Certificate.pdf");
        assert!(wallet.remove(3).is_none());

        // Deleting an older document must not recycle an id
        let next = wallet.add("Boarding_Pass.pdf", "Other", "0.2 MB", date(2024, 1, 3));
        assert_eq!(next, 8);
        assert_eq!(wallet.len(), 7);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Passport".parse::<DocumentKind>(), Ok(DocumentKind::Passport));
        assert_eq!("all".parse::<DocumentKind>(), Ok(DocumentKind::All));
        assert!("boarding".parse::<DocumentKind>().is_err());
    }
}
