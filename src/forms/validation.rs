//! Field-level validation for the site's forms
//!
//! Each validator returns every failing field at once, keyed by the field
//! name the form uses, so a UI can show messages next to inputs.

use crate::loans::{CreditBand, LoanQuoteRequest, LoanTerm};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

#[allow(clippy::expect_used)] // literal pattern
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex should not panic")
});

/// Field name -> message for every field that failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure; the first message for a field wins
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when nothing failed
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

fn min_chars(errors: &mut FieldErrors, field: &str, value: &str, min: usize, message: &str) {
    if value.chars().count() < min {
        errors.add(field, message);
    }
}

fn valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

/// Anything a form handler can check before submitting
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Subjects offered on the contact form
pub const CONTACT_SUBJECTS: [&str; 8] = [
    "insurance",
    "loans",
    "documents",
    "api",
    "ai",
    "partnership",
    "support",
    "other",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(&mut errors, "name", &self.name, 2, "Name must be at least 2 characters");
        if !valid_email(&self.email) {
            errors.add("email", "Please enter a valid email address");
        }
        if !CONTACT_SUBJECTS.contains(&self.subject.trim()) {
            errors.add("subject", "Please select a subject");
        }
        min_chars(&mut errors, "message", &self.message, 10, "Message must be at least 10 characters");
        errors.into_result(())
    }
}

/// Loan calculator inputs exactly as typed/selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanCalculatorForm {
    pub loan_amount: String,
    pub loan_term: String,
    pub credit_score: String,
}

impl Default for LoanCalculatorForm {
    /// The calculator's initial selection
    fn default() -> Self {
        Self {
            loan_amount: "3000".to_string(),
            loan_term: "12".to_string(),
            credit_score: "good".to_string(),
        }
    }
}

impl LoanCalculatorForm {
    /// Validate and convert into an estimator request
    pub fn to_request(&self) -> Result<LoanQuoteRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let amount = self.loan_amount.trim().replace(',', "");
        let principal = if amount.is_empty() {
            errors.add("loanAmount", "Please enter a loan amount");
            None
        } else {
            match amount.parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => Some(value),
                _ => {
                    errors.add("loanAmount", "Please enter a valid loan amount");
                    None
                }
            }
        };

        let term = match self.loan_term.parse::<LoanTerm>() {
            Ok(term) => Some(term),
            Err(_) => {
                errors.add("loanTerm", "Please select a loan term");
                None
            }
        };

        let credit_band = match self.credit_score.parse::<CreditBand>() {
            Ok(band) => Some(band),
            Err(_) => {
                errors.add("creditScore", "Please select a credit score range");
                None
            }
        };

        match (principal, term, credit_band) {
            (Some(principal), Some(term), Some(credit_band)) => Ok(LoanQuoteRequest {
                principal,
                term,
                credit_band,
            }),
            _ => Err(errors),
        }
    }
}

impl Validate for LoanCalculatorForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        self.to_request().map(|_| ())
    }
}

/// Careers page application modal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobApplicationForm {
    pub job_id: u32,
    pub name: String,
    pub email: String,
    pub resume: String,
    #[serde(default)]
    pub message: String,
}

impl Validate for JobApplicationForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(&mut errors, "name", &self.name, 1, "Please enter your name");
        if !valid_email(&self.email) {
            errors.add("email", "Please enter a valid email address");
        }
        min_chars(&mut errors, "resume", &self.resume, 1, "Please provide a link to your resume");
        errors.into_result(())
    }
}

/// Cabin classes offered by flight search
pub const CABIN_CLASSES: [&str; 4] = ["economy", "premium", "business", "first"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchForm {
    pub from: String,
    pub to: String,
    pub depart_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    pub passengers: String,
    pub cabin_class: String,
}

impl Default for FlightSearchForm {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            depart_date: String::new(),
            return_date: None,
            passengers: "1".to_string(),
            cabin_class: "economy".to_string(),
        }
    }
}

impl Validate for FlightSearchForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        min_chars(&mut errors, "from", &self.from, 3, "Please enter departure city");
        min_chars(&mut errors, "to", &self.to, 3, "Please enter destination city");
        min_chars(&mut errors, "departDate", &self.depart_date, 1, "Please select departure date");
        match self.passengers.trim().parse::<u8>() {
            Ok(1..=6) => {}
            _ => errors.add("passengers", "Please select number of passengers"),
        }
        if !CABIN_CLASSES.contains(&self.cabin_class.trim()) {
            errors.add("cabinClass", "Please select cabin class");
        }
        errors.into_result(())
    }
}
