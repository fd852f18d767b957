//! Submit-cycle tests for `ContactFormController`.
//!
//! Uses a recording submitter so no timers or browser APIs are involved.

use super::*;
use async_trait::async_trait;
use std::cell::RefCell;

struct RecordingSubmitter {
    outcome: Result<(), SubmissionError>,
    requests: RefCell<Vec<FormState>>,
}

impl RecordingSubmitter {
    fn succeeding() -> Self {
        Self {
            outcome: Ok(()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn failing(err: SubmissionError) -> Self {
        Self {
            outcome: Err(err),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for RecordingSubmitter {
    async fn submit(&self, request: &FormState) -> Result<(), SubmissionError> {
        self.requests.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}

fn fill_ada(form: &mut ContactFormController) {
    form.on_field_change(FormField::FirstName, "Ada");
    form.on_field_change(FormField::LastName, "Lovelace");
    form.on_field_change(FormField::CompanyName, "");
    form.on_field_change(FormField::WorkEmail, "ada@x.com");
    form.on_field_change(FormField::Country, "us");
    form.on_field_change(FormField::PhoneCountryCode, "+1");
    form.on_field_change(FormField::PhoneNumber, "5551234");
    form.on_field_change(FormField::ProjectDescription, "");
}

#[test]
fn test_new_controller_is_idle_and_blank() {
    let form = ContactFormController::new();
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.errors().is_empty());
    assert_eq!(form.state(), &FormState::default());
}

#[test]
fn test_field_change_clears_only_that_error() {
    let mut form = ContactFormController::new();
    let err = form.begin_submit().unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(ref e) if e.len() == 5));

    form.on_field_change(FormField::LastName, "Lovelace");

    assert_eq!(form.error(FormField::LastName), None);
    assert_eq!(form.error(FormField::FirstName), Some("First name is required"));
    assert_eq!(form.error(FormField::WorkEmail), Some("Work email is required"));
    assert_eq!(form.error(FormField::Country), Some("Country is required"));
    assert_eq!(form.error(FormField::PhoneNumber), Some("Phone number is required"));
    assert_eq!(form.errors().len(), 4);
}

#[test]
fn test_field_change_does_not_validate() {
    let mut form = ContactFormController::new();
    form.on_field_change(FormField::WorkEmail, "not-an-email");
    assert!(form.errors().is_empty());
    assert_eq!(form.value(FormField::WorkEmail), "not-an-email");
}

#[test]
fn test_validation_pass_replaces_previous_errors() {
    let mut form = ContactFormController::new();
    let _ = form.begin_submit();
    assert_eq!(form.errors().len(), 5);

    fill_ada(&mut form);
    form.on_field_change(FormField::WorkEmail, "ada");
    let err = form.begin_submit().unwrap_err();

    let mut expected = ErrorMap::new();
    expected.insert(FormField::WorkEmail, "Please enter a valid email address");
    assert_eq!(err, SubmitError::Invalid(expected.clone()));
    assert_eq!(form.errors(), &expected);
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[test]
fn test_begin_submit_moves_to_submitting_with_snapshot() {
    let mut form = ContactFormController::new();
    fill_ada(&mut form);
    let request = form.begin_submit().unwrap();
    assert_eq!(form.status(), SubmissionStatus::Submitting);
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.work_email, "ada@x.com");
    assert_eq!(&request, form.state());
}

#[test]
fn test_second_begin_while_submitting_is_refused() {
    let mut form = ContactFormController::new();
    fill_ada(&mut form);
    form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(SubmitError::InProgress));
    assert_eq!(form.status(), SubmissionStatus::Submitting);
}

#[test]
fn test_complete_without_begin_is_rejected() {
    let mut form = ContactFormController::new();
    assert_eq!(form.complete_submit(Ok(())), Err(SubmitError::NotSubmitting));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[test]
fn test_success_resets_form_and_banner_reverts() {
    let mut form = ContactFormController::new();
    fill_ada(&mut form);
    form.on_field_change(FormField::PhoneCountryCode, "+44");
    form.begin_submit().unwrap();

    let ticket = form.complete_submit(Ok(())).unwrap();
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
    assert_eq!(form.state(), &FormState::default());
    assert_eq!(form.value(FormField::PhoneCountryCode), "+1");

    assert!(form.dismiss_success(ticket));
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(!form.dismiss_success(ticket));
}

#[test]
fn test_stale_ticket_keeps_newer_banner() {
    let mut form = ContactFormController::new();
    fill_ada(&mut form);
    form.begin_submit().unwrap();
    let first = form.complete_submit(Ok(())).unwrap();

    fill_ada(&mut form);
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
    form.begin_submit().unwrap();
    assert_eq!(form.status(), SubmissionStatus::Submitting);
    let second = form.complete_submit(Ok(())).unwrap();

    assert!(!form.dismiss_success(first));
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
    assert!(form.dismiss_success(second));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[test]
fn test_status_transition_table() {
    use SubmissionStatus::*;
    let legal = [(Idle, Submitting), (Submitting, Succeeded), (Submitting, Idle), (Succeeded, Idle)];
    for from in [Idle, Submitting, Succeeded] {
        for to in [Idle, Submitting, Succeeded] {
            assert_eq!(
                from.can_transition_to(to),
                legal.contains(&(from, to)),
                "{:?} -> {:?}",
                from,
                to
            );
        }
    }
    assert!(!Succeeded.can_transition_to(Submitting));
}

#[test]
fn test_resubmit_during_banner_goes_through_idle() {
    // Any illegal step trips the debug assertion inside the controller.
    let mut form = ContactFormController::new();
    fill_ada(&mut form);
    form.begin_submit().unwrap();
    let first = form.complete_submit(Ok(())).unwrap();
    assert_eq!(form.status(), SubmissionStatus::Succeeded);

    fill_ada(&mut form);
    form.begin_submit().unwrap();
    assert_eq!(form.status(), SubmissionStatus::Submitting);
    // The old banner is gone; its timer finds nothing to dismiss.
    assert!(!form.dismiss_success(first));
    assert_eq!(form.status(), SubmissionStatus::Submitting);

    form.complete_submit(Err(SubmissionError::Rejected("spam".to_string())))
        .unwrap_err();
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[test]
fn test_invalid_resubmit_during_banner_keeps_banner() {
    let mut form = ContactFormController::new();
    fill_ada(&mut form);
    form.begin_submit().unwrap();
    let ticket = form.complete_submit(Ok(())).unwrap();

    assert!(matches!(form.begin_submit(), Err(SubmitError::Invalid(_))));
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
    assert!(form.dismiss_success(ticket));
}

#[tokio::test]
async fn test_submit_valid_form_succeeds() {
    let submitter = RecordingSubmitter::succeeding();
    let mut form = ContactFormController::new();
    fill_ada(&mut form);
    assert!(form.validate().is_empty());
    let sent = form.state().clone();

    let ticket = form.submit(&submitter).await.unwrap();

    assert_eq!(submitter.calls(), 1);
    assert_eq!(submitter.requests.borrow()[0], sent);
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
    assert_eq!(form.state(), &FormState::default());
    assert!(form.dismiss_success(ticket));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_submit_invalid_form_never_calls_submitter() {
    let submitter = RecordingSubmitter::succeeding();
    let mut form = ContactFormController::new();
    form.on_field_change(FormField::FirstName, "Ada");

    let err = form.submit(&submitter).await.unwrap_err();

    assert!(matches!(err, SubmitError::Invalid(_)));
    assert_eq!(submitter.calls(), 0);
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.value(FormField::FirstName), "Ada");
    assert!(form.error(FormField::FirstName).is_none());
    assert!(form.error(FormField::LastName).is_some());
}

#[tokio::test]
async fn test_failed_submission_keeps_data_for_retry() {
    let failure = SubmissionError::Unavailable("timeout".to_string());
    let submitter = RecordingSubmitter::failing(failure.clone());
    let mut form = ContactFormController::new();
    fill_ada(&mut form);
    let before = form.state().clone();

    let err = form.submit(&submitter).await.unwrap_err();

    assert_eq!(err, SubmitError::Failed(failure));
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.state(), &before);
    assert!(form.errors().is_empty());

    let retry = RecordingSubmitter::succeeding();
    form.submit(&retry).await.unwrap();
    assert_eq!(retry.calls(), 1);
    assert_eq!(form.status(), SubmissionStatus::Succeeded);
}

#[tokio::test]
async fn test_submit_through_trait_object() {
    let shared = SharedSubmitter::new(RecordingSubmitter::succeeding());
    let mut form = ContactFormController::new();
    fill_ada(&mut form);
    assert!(form.submit(shared.0.as_ref()).await.is_ok());
}
