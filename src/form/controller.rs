use super::{validate, ContactSubmitter, ErrorMap, FormField, FormState, SubmissionError, SubmitError};
use leptos::logging;
use std::time::Duration;

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(5);

/// Where the form is in its submit cycle.
///
/// `Idle -> Submitting -> Succeeded -> Idle`, or `Submitting -> Idle` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        self == SubmissionStatus::Submitting
    }

    pub fn is_succeeded(self) -> bool {
        self == SubmissionStatus::Succeeded
    }

    /// Whether the cycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: SubmissionStatus) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, next),
            (Idle, Submitting) | (Submitting, Succeeded) | (Submitting, Idle) | (Succeeded, Idle)
        )
    }
}

/// Identifies one successful submission so a stale banner timer
/// cannot hide the banner of a later success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

/// Owns the contact form data, its validation errors and submission status.
///
/// Both the desktop and mobile layouts drive the form through this type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormController {
    state: FormState,
    errors: ErrorMap,
    status: SubmissionStatus,
    successes: u64,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, field: FormField) -> &str {
        self.state.get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Store a new value and drop that field's error, if any.
    ///
    /// Validation waits until the next submit.
    pub fn on_field_change(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set(field, value);
        self.errors.remove(field);
    }

    pub fn validate(&self) -> ErrorMap {
        validate(&self.state)
    }

    /// Validate and, if clean, move to `Submitting`.
    ///
    /// Returns the request to hand to the submitter. An invalid form keeps
    /// its status and records the new errors in place of the old ones.
    pub fn begin_submit(&mut self) -> Result<FormState, SubmitError> {
        if self.status.is_submitting() {
            return Err(SubmitError::InProgress);
        }

        let errors = self.validate();
        self.errors = errors.clone();
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }

        // A new submission ends any success banner still showing.
        if self.status.is_succeeded() {
            self.transition(SubmissionStatus::Idle);
        }
        self.transition(SubmissionStatus::Submitting);
        Ok(self.state.clone())
    }

    /// Apply the submitter's answer to an in-flight submission.
    ///
    /// Success clears the form; failure is logged and leaves the data for a retry.
    pub fn complete_submit(
        &mut self,
        result: Result<(), SubmissionError>,
    ) -> Result<SuccessTicket, SubmitError> {
        if !self.status.is_submitting() {
            return Err(SubmitError::NotSubmitting);
        }

        match result {
            Ok(()) => {
                self.state.reset();
                self.transition(SubmissionStatus::Succeeded);
                self.successes += 1;
                Ok(SuccessTicket(self.successes))
            }
            Err(err) => {
                logging::error!("Jacobi: Error submitting contact form: {}", err);
                self.transition(SubmissionStatus::Idle);
                Err(SubmitError::Failed(err))
            }
        }
    }

    /// Hide the success banner, unless a newer success has replaced it.
    pub fn dismiss_success(&mut self, ticket: SuccessTicket) -> bool {
        if self.status.is_succeeded() && ticket.0 == self.successes {
            self.transition(SubmissionStatus::Idle);
            true
        } else {
            false
        }
    }

    fn transition(&mut self, next: SubmissionStatus) {
        debug_assert!(
            self.status.can_transition_to(next),
            "illegal status change {:?} -> {:?}",
            self.status,
            next
        );
        self.status = next;
    }

    /// Full submit cycle against `submitter`.
    ///
    /// The caller schedules [`dismiss_success`](Self::dismiss_success) after
    /// [`SUCCESS_BANNER_DURATION`].
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<SuccessTicket, SubmitError>
    where
        S: ContactSubmitter + ?Sized,
    {
        let request = self.begin_submit()?;
        let result = submitter.submit(&request).await;
        self.complete_submit(result)
    }
}
