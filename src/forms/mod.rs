//! Form validation and submission state for the site's forms

mod submission;
mod validation;

pub use submission::{FormSubmitter, SubmissionState};
pub use validation::{
    ContactForm, FieldErrors, FlightSearchForm, JobApplicationForm, LoanCalculatorForm, Validate,
    CABIN_CLASSES, CONTACT_SUBJECTS,
};
