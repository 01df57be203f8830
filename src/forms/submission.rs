//! Form submission lifecycle
//!
//! Submitting a form is an async task whose progress the caller can watch:
//! Idle -> Pending -> Succeeded, or Idle -> Failed when validation rejects it.

use super::{FieldErrors, Validate};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;

/// Progress of the most recent submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionState {
    Idle,
    Pending,
    Succeeded,
    Failed { errors: FieldErrors },
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }
}

/// Submits validated forms and publishes their state to watchers
#[derive(Debug)]
pub struct FormSubmitter {
    /// Name used in log lines, e.g. "contact"
    form_name: &'static str,
    /// Artificial latency before the submission is accepted
    delay: Duration,
    state: watch::Sender<SubmissionState>,
}

impl FormSubmitter {
    pub fn new(form_name: &'static str) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            form_name,
            delay: Duration::ZERO,
            state,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Validate and accept `form`
    ///
    /// # Errors
    /// Returns the field errors when validation fails; nothing is submitted.
    pub async fn submit<F>(&self, form: &F) -> Result<(), FieldErrors>
    where
        F: Validate + Serialize,
    {
        if let Err(errors) = form.validate() {
            log::debug!("{} form rejected: {}", self.form_name, errors);
            self.state.send_replace(SubmissionState::Failed { errors: errors.clone() });
            return Err(errors);
        }

        self.state.send_replace(SubmissionState::Pending);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match serde_json::to_string(form) {
            Ok(payload) => log::info!("{} form submitted: {}", self.form_name, payload),
            Err(e) => log::error!("{} form submitted, payload could not be encoded: {}", self.form_name, e),
        }
        self.state.send_replace(SubmissionState::Succeeded);
        Ok(())
    }

    /// Return to Idle, e.g. once a success banner has been dismissed
    pub fn reset(&self) {
        self.state.send_replace(SubmissionState::Idle);
    }
}
