//! CSV-based catalogue loader
//!
//! Loads job postings and wallet documents from `jobs.csv` and
//! `documents.csv` in a catalogue directory.

use super::{JobPosting, WalletDocument};
use chrono::NaiveDate;
use csv::Reader;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default path to the catalogue directory
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid date {value:?} for document {id}")]
    InvalidDate { id: u32, value: String },
}

/// Raw CSV row matching jobs.csv columns
#[derive(Debug, serde::Deserialize)]
struct JobRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Type")]
    employment_type: String,
    #[serde(rename = "Salary")]
    salary: String,
    #[serde(rename = "Experience")]
    experience: String,
    #[serde(rename = "Description")]
    description: String,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            department: row.department,
            location: row.location,
            employment_type: row.employment_type,
            salary: row.salary,
            experience: row.experience,
            description: row.description,
        }
    }
}

/// Raw CSV row matching documents.csv columns
#[derive(Debug, serde::Deserialize)]
struct DocumentRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Size")]
    size: String,
}

impl DocumentRow {
    fn into_document(self) -> Result<WalletDocument, CatalogError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| CatalogError::InvalidDate {
            id: self.id,
            value: self.date.clone(),
        })?;

        Ok(WalletDocument {
            id: self.id,
            name: self.name,
            kind: self.kind,
            date,
            size: self.size,
        })
    }
}

fn csv_error(path: &Path) -> impl FnOnce(csv::Error) -> CatalogError + '_ {
    move |source| CatalogError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Load job postings from any reader (e.g., string buffer, file)
pub fn load_jobs_from_reader<R: Read>(reader: R) -> Result<Vec<JobPosting>, CatalogError> {
    load_jobs_with_origin(reader, Path::new("<reader>"))
}

fn load_jobs_with_origin<R: Read>(reader: R, origin: &Path) -> Result<Vec<JobPosting>, CatalogError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut jobs = Vec::new();

    for result in csv_reader.deserialize() {
        let row: JobRow = result.map_err(csv_error(origin))?;
        jobs.push(row.into());
    }

    Ok(jobs)
}

/// Load wallet documents from any reader
pub fn load_documents_from_reader<R: Read>(reader: R) -> Result<Vec<WalletDocument>, CatalogError> {
    load_documents_with_origin(reader, Path::new("<reader>"))
}

fn load_documents_with_origin<R: Read>(reader: R, origin: &Path) -> Result<Vec<WalletDocument>, CatalogError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut documents = Vec::new();

    for result in csv_reader.deserialize() {
        let row: DocumentRow = result.map_err(csv_error(origin))?;
        documents.push(row.into_document()?);
    }

    Ok(documents)
}

/// Load job postings from `<dir>/jobs.csv`
pub fn load_jobs(dir: &Path) -> Result<Vec<JobPosting>, CatalogError> {
    let path = dir.join("jobs.csv");
    let file = std::fs::File::open(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    load_jobs_with_origin(file, &path)
}

/// Load wallet documents from `<dir>/documents.csv`
pub fn load_documents(dir: &Path) -> Result<Vec<WalletDocument>, CatalogError> {
    let path = dir.join("documents.csv");
    let file = std::fs::File::open(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    load_documents_with_origin(file, &path)
}
