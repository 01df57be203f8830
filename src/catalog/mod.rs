//! Job postings and wallet documents, with the search/filter used by both lists

mod filter;
pub mod loader;
mod records;
mod wallet;

pub use filter::{filter_records, RecordQuery, ALL_CATEGORIES};
pub use loader::CatalogError;
pub use records::{JobPosting, SearchableRecord, WalletDocument};
pub use wallet::{DocumentKind, DocumentWallet};

use chrono::NaiveDate;
use std::path::Path;

/// Container for every searchable list the site serves
#[derive(Debug, Clone)]
pub struct Catalog {
    pub jobs: Vec<JobPosting>,
    pub documents: Vec<WalletDocument>,
}

impl Catalog {
    /// Catalogue compiled into the binary
    pub fn builtin() -> Self {
        Self {
            jobs: builtin_jobs(),
            documents: builtin_documents(),
        }
    }

    /// Load the catalogue from CSV files in the default location (data/catalog/)
    pub fn from_csv() -> Result<Self, CatalogError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_CATALOG_PATH))
    }

    /// Load the catalogue from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let jobs = loader::load_jobs(path)?;
        let documents = loader::load_documents(path)?;
        log::info!(
            "Loaded {} jobs and {} documents from {}",
            jobs.len(),
            documents.len(),
            path.display()
        );
        Ok(Self { jobs, documents })
    }

    /// Departments offered in the careers filter, in first-seen order
    pub fn departments(&self) -> Vec<&str> {
        let mut departments: Vec<&str> = Vec::new();
        for job in &self.jobs {
            if !departments.contains(&job.department.as_str()) {
                departments.push(&job.department);
            }
        }
        departments
    }

    pub fn wallet(&self) -> DocumentWallet {
        DocumentWallet::new(self.documents.clone())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn job(
    id: u32,
    title: &str,
    department: &str,
    location: &str,
    salary: &str,
    experience: &str,
    description: &str,
) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        employment_type: "Full-time".to_string(),
        salary: salary.to_string(),
        experience: experience.to_string(),
        description: description.to_string(),
    }
}

/// Open positions listed on the careers page
pub fn builtin_jobs() -> Vec<JobPosting> {
    vec![
        job(1, "Senior Full-Stack Developer", "Engineering", "Los Angeles, CA", "$150K - $200K", "5+ years",
            "Build scalable travel platform features using React and Node.js"),
        job(2, "Machine Learning Engineer", "AI/ML", "Remote", "$160K - $220K", "4+ years",
            "Develop AI models for travel recommendations and pricing optimization"),
        job(3, "Cloud Architect", "Infrastructure", "Sydney, Australia", "AUD 180K - 240K", "6+ years",
            "Design and manage multi-cloud infrastructure for global platform"),
        job(4, "Product Manager", "Product", "Chennai, India", "₹25L - 35L", "5+ years",
            "Lead product strategy for travel insurance and financial services"),
        job(5, "DevOps Engineer", "Infrastructure", "Remote", "$130K - $170K", "3+ years",
            "Implement CI/CD pipelines and manage Kubernetes infrastructure"),
        job(6, "QA Automation Lead", "Quality", "Los Angeles, CA", "$120K - $160K", "4+ years",
            "Lead QA automation strategy and build testing frameworks"),
        job(7, "Data Scientist", "AI/ML", "Remote", "$140K - $190K", "3+ years",
            "Analyze travel data and build predictive models"),
        job(8, "Business Analyst", "Business", "Sydney, Australia", "AUD 120K - 160K", "3+ years",
            "Gather requirements and design solutions for travel products"),
    ]
}

fn document(id: u32, name: &str, kind: &str, (y, m, d): (i32, u32, u32), size: &str) -> WalletDocument {
    WalletDocument {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        size: size.to_string(),
    }
}

/// Sample documents pre-loaded into the wallet
pub fn builtin_documents() -> Vec<WalletDocument> {
    vec![
        document(1, "Passport.pdf", "Passport", (2023, 5, 15), "2.4 MB"),
        document(2, "Travel_Insurance_Policy.pdf", "Insurance", (2023, 7, 22), "1.8 MB"),
        document(3, "Medical_Certificate.pdf", "Medical", (2023, 6, 12), "1.5 MB"),
        document(4, "Hotel_Reservation.pdf", "Accommodation", (2023, 8, 6), "1.2 MB"),
        document(5, "Drivers_License.pdf", "Identification", (2023, 4, 18), "1.7 MB"),
        document(6, "Travel_Visa_India.pdf", "Visa", (2023, 7, 30), "0.8 MB"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.jobs.len(), 8);
        assert_eq!(catalog.documents.len(), 6);
        assert_eq!(
            catalog.departments(),
            vec!["Engineering", "AI/ML", "Infrastructure", "Product", "Quality", "Business"]
        );
    }

    #[test]
    fn test_shipped_csv_matches_builtin() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(loader::DEFAULT_CATALOG_PATH);
        let loaded = Catalog::from_csv_path(&dir).unwrap();
        let builtin = Catalog::builtin();
        assert_eq!(loaded.jobs, builtin.jobs);
        assert_eq!(loaded.documents, builtin.documents);
    }
}
