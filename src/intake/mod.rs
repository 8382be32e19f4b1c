//! Design intake: collects form input, submits it, and announces accepted
//! designs on the bus.
//!
//! Submission flow:
//! 1. status resets to idle and the form is checked for completeness
//! 2. status becomes submitting while the service call is in flight
//! 3. on success the form clears, the service payload is published as
//!    `designSubmitted`, and status becomes success
//! 4. on failure the form is kept untouched and status becomes error
//!
//! Status is published on a `watch` channel so a UI can show the
//! "Creating Design..." label while a call is pending.

mod form;

pub use form::{FormField, FormState};

use crate::api::DesignService;
use crate::bus::DesignBus;
use crate::design::DesignPayload;
use crate::error::{FormError, SubmitError};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Label of the submit control while idle.
pub const SUBMIT_LABEL: &str = "Generate Design";
/// Label of the submit control while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Creating Design...";
/// Message shown after the service accepts a request.
pub const SUCCESS_MESSAGE: &str =
    "Design request submitted successfully! Your design is being generated.";
/// Message shown after a failed submission.
pub const ERROR_MESSAGE: &str = "Failed to submit design request. Please try again.";

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IntakeStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error { message: String },
}

impl IntakeStatus {
    /// User-facing banner for this status, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Error { .. } => Some(ERROR_MESSAGE),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// Form owner and submitter.
pub struct DesignIntake {
    service: Arc<dyn DesignService>,
    bus: DesignBus,
    form: FormState,
    status: watch::Sender<IntakeStatus>,
}

impl DesignIntake {
    pub fn new(service: Arc<dyn DesignService>, bus: DesignBus) -> Self {
        let (status, _) = watch::channel(IntakeStatus::Idle);
        Self {
            service,
            bus,
            form: FormState::new(),
            status,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Validate and store one field value.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), FormError> {
        self.form.set_field(field, raw)
    }

    /// Replace the whole form, e.g. from command-line flags.
    pub fn fill(&mut self, form: FormState) {
        self.form = form;
    }

    pub fn status(&self) -> IntakeStatus {
        self.status.borrow().clone()
    }

    /// Observe status changes, including the in-flight phase.
    pub fn watch_status(&self) -> watch::Receiver<IntakeStatus> {
        self.status.subscribe()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(*self.status.borrow(), IntakeStatus::Submitting)
    }

    /// Label for the submit control in the current status.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Submit the current form once.
    ///
    /// Incomplete forms are rejected before any network call and leave the
    /// status idle. Returns the payload that was broadcast on success.
    pub async fn submit(&mut self) -> Result<DesignPayload, SubmitError> {
        self.status.send_replace(IntakeStatus::Idle);
        let request = self.form.to_request()?;

        self.status.send_replace(IntakeStatus::Submitting);
        match self.service.create_design(&request).await {
            Ok(payload) => {
                self.form.reset();
                let receivers = self.bus.publish(payload.clone());
                info!(
                    event = self.bus.name(),
                    receivers,
                    id = payload.id().unwrap_or("-"),
                    "design submitted"
                );
                self.status.send_replace(IntakeStatus::Success);
                Ok(payload)
            }
            Err(err) => {
                warn!(error = %err, "design submission failed");
                self.status.send_replace(IntakeStatus::Error {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EchoService;
    use crate::design::DesignRequest;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    fn fill_valid(intake: &mut DesignIntake) {
        intake.set_field(FormField::DesignType, "evening").unwrap();
        intake.set_field(FormField::Color, "#112233").unwrap();
        intake.set_field(FormField::Style, "A-line").unwrap();
        intake.set_field(FormField::Weight, "65").unwrap();
        intake.set_field(FormField::Height, "170").unwrap();
    }

    struct FailingService;

    #[async_trait]
    impl DesignService for FailingService {
        async fn create_design(&self, _: &DesignRequest) -> Result<DesignPayload, SubmitError> {
            Err(SubmitError::Status {
                code: 500,
                body: String::new(),
            })
        }
    }

    /// Records requests and answers after a delay.
    #[derive(Default)]
    struct SlowEcho {
        calls: Mutex<Vec<DesignRequest>>,
    }

    #[async_trait]
    impl DesignService for SlowEcho {
        async fn create_design(&self, request: &DesignRequest) -> Result<DesignPayload, SubmitError> {
            self.calls.lock().unwrap().push(request.clone());
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(DesignPayload::from(request))
        }
    }

    #[tokio::test]
    async fn success_clears_form_and_broadcasts_once() {
        let bus = DesignBus::new();
        let mut sub = bus.subscribe();
        let mut intake = DesignIntake::new(Arc::new(EchoService), bus);
        fill_valid(&mut intake);

        let payload = intake.submit().await.expect("submitted");
        assert_eq!(payload.height(), Some(170.0));
        assert_eq!(intake.form(), &FormState::default());
        assert_eq!(intake.status(), IntakeStatus::Success);
        assert_eq!(intake.status().message(), Some(SUCCESS_MESSAGE));

        assert_eq!(sub.try_recv(), Some(payload));
        assert_eq!(sub.try_recv(), None);
    }

    #[tokio::test]
    async fn failure_keeps_form_and_does_not_broadcast() {
        let bus = DesignBus::new();
        let mut sub = bus.subscribe();
        let mut intake = DesignIntake::new(Arc::new(FailingService), bus);
        fill_valid(&mut intake);
        let before = intake.form().clone();

        let err = intake.submit().await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(intake.form(), &before);
        assert!(matches!(intake.status(), IntakeStatus::Error { .. }));
        assert_eq!(intake.status().message(), Some(ERROR_MESSAGE));
        assert_eq!(sub.try_recv(), None);
        assert_eq!(intake.submit_label(), SUBMIT_LABEL);
    }

    #[tokio::test]
    async fn incomplete_form_never_reaches_service() {
        let service = Arc::new(SlowEcho::default());
        let mut intake = DesignIntake::new(service.clone(), DesignBus::new());
        intake.set_field(FormField::Style, "fitted").unwrap();

        let err = intake.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Form(FormError::Incomplete(_))), "got: {err}");
        assert!(service.calls.lock().unwrap().is_empty());
        assert_eq!(intake.status(), IntakeStatus::Idle);
        assert_eq!(intake.form().style, "fitted");
    }

    #[tokio::test]
    async fn new_attempt_resets_previous_error() {
        let mut intake = DesignIntake::new(Arc::new(FailingService), DesignBus::new());
        fill_valid(&mut intake);
        let _ = intake.submit().await;
        let mut rx = intake.watch_status();
        rx.mark_unchanged();

        intake.form.height = None;
        let _ = intake.submit().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(intake.status(), IntakeStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn submitting_status_is_observable_while_in_flight() {
        let service = Arc::new(SlowEcho::default());
        let mut intake = DesignIntake::new(service.clone(), DesignBus::new());
        fill_valid(&mut intake);
        let mut rx = intake.watch_status();

        let observer = tokio::spawn(async move {
            let mut seen = Vec::new();
            while rx.changed().await.is_ok() {
                let status = rx.borrow_and_update().clone();
                let done = matches!(status, IntakeStatus::Success);
                seen.push(status);
                if done {
                    break;
                }
            }
            seen
        });

        intake.submit().await.unwrap();
        let seen = observer.await.unwrap();
        assert!(seen.contains(&IntakeStatus::Submitting), "got: {seen:?}");
        assert_eq!(seen.last(), Some(&IntakeStatus::Success));
        assert_eq!(service.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn labels_follow_status() {
        let intake = DesignIntake::new(Arc::new(EchoService), DesignBus::new());
        assert_eq!(intake.submit_label(), SUBMIT_LABEL);
        intake.status.send_replace(IntakeStatus::Submitting);
        assert!(intake.is_submitting());
        assert_eq!(intake.submit_label(), SUBMITTING_LABEL);
    }
}
