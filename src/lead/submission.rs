//! Submission workflow for the contact form
//!
//! `Idle -> Validating -> Invalid | Sending -> Success | Failure -> Idle`.
//! Validating never outlives a call to [`LeadForm::begin_submit`], so only
//! `Idle` and `Sending` are observable. `Sending` is the one state that
//! rejects another submission.

use super::fields::{FieldName, FormFields, LeadPayload};
use super::service::MainService;
use super::validate::{validate, PhoneRule, ValidationState};
use crate::relay::{MailRelay, NoticeKind, Notifier, RelayError};
use thiserror::Error;
use uuid::Uuid;

pub const SUCCESS_TITLE: &str = "Message Sent!";
pub const SUCCESS_MESSAGE: &str = "We'll get back to you soon.";
pub const FAILURE_TITLE: &str = "Oops...";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Observable submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Nothing was sent; the map says which fields to fix
    #[error("form has invalid fields: {:?}", .0.invalid_fields())]
    Validation(ValidationState),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

#[derive(Debug)]
pub enum SubmissionResult {
    Success,
    Failure(SubmitError),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Result of the synchronous half of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are now published on the form
    Invalid(ValidationState),
    /// Validation passed; the caller must relay this payload and report back
    /// through [`LeadForm::finish_submit`]
    Sending(LeadPayload),
    /// A relay call is already in flight
    Busy,
}

/// Caller-owned state of one contact form instance
#[derive(Debug, Clone, Default)]
pub struct LeadForm {
    fields: FormFields,
    errors: ValidationState,
    phase: SubmitPhase,
    phone_rule: PhoneRule,
    default_service: Option<MainService>,
}

impl LeadForm {
    pub fn new(phone_rule: PhoneRule) -> Self {
        Self {
            phone_rule,
            ..Default::default()
        }
    }

    /// A form shown on a page, pre-selecting the main service the path names
    pub fn for_route(path: &str, phone_rule: PhoneRule) -> Self {
        let default_service = MainService::from_route(path);
        Self {
            fields: FormFields {
                main_service: default_service,
                ..Default::default()
            },
            phone_rule,
            default_service,
            ..Default::default()
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationState {
        &self.errors
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    pub fn phone_rule(&self) -> PhoneRule {
        self.phone_rule
    }

    /// Sub-services offered for the current main service (empty if unset)
    pub fn sub_service_options(&self) -> &'static [&'static str] {
        self.fields
            .main_service
            .map(MainService::sub_services)
            .unwrap_or(&[])
    }

    /// Store a new raw value and re-check only for emptiness.
    /// Shape checks wait for submission.
    ///
    /// The flag follows the stored value, so a main service outside the
    /// catalog reads as empty and is flagged.
    pub fn on_field_change(&mut self, field: FieldName, raw: &str) {
        self.fields.set_raw(field, raw);
        let empty = self.fields.raw(field).trim().is_empty();
        self.errors.set(field, empty);
    }

    /// Switch the sub-service candidates. A previously chosen sub-service is
    /// kept as-is and fails validation if the new service does not offer it.
    pub fn on_main_service_change(&mut self, service: MainService) {
        self.on_field_change(FieldName::MainService, service.label());
    }

    /// Validate the current snapshot and, if clean, enter `Sending`.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.is_sending() {
            tracing::debug!("Submit ignored: a message is already being sent");
            return SubmitOutcome::Busy;
        }

        let errors = validate(&self.fields, self.phone_rule);
        self.errors = errors;
        if errors.any_invalid() {
            tracing::info!(
                "Lead rejected by validation: {:?}",
                errors.invalid_fields()
            );
            return SubmitOutcome::Invalid(errors);
        }

        let Some(payload) = LeadPayload::from_fields(&self.fields) else {
            // validate() flags a missing main service, so this is unreachable
            self.errors.main_service = true;
            return SubmitOutcome::Invalid(self.errors);
        };

        self.errors = ValidationState::default();
        self.phase = SubmitPhase::Sending;
        SubmitOutcome::Sending(payload)
    }

    /// Apply the relay's answer and leave `Sending`.
    ///
    /// Success clears every field back to its initial value; failure keeps
    /// the input so the user can retry. Either way exactly one notification
    /// is raised.
    pub fn finish_submit(
        &mut self,
        result: Result<(), RelayError>,
        notifier: &mut dyn Notifier,
    ) -> SubmissionResult {
        self.phase = SubmitPhase::Idle;

        match result {
            Ok(()) => {
                notifier.notify(NoticeKind::Success, SUCCESS_TITLE, SUCCESS_MESSAGE);
                self.reset();
                SubmissionResult::Success
            }
            Err(err) => {
                tracing::warn!("Lead relay failed: {err}");
                notifier.notify(NoticeKind::Error, FAILURE_TITLE, FAILURE_MESSAGE);
                SubmissionResult::Failure(SubmitError::Relay(err))
            }
        }
    }

    /// Run a whole submission, awaiting the relay in place.
    ///
    /// Returns `None` when a relay call is already in flight.
    pub async fn submit(
        &mut self,
        relay: &dyn MailRelay,
        notifier: &mut dyn Notifier,
    ) -> Option<SubmissionResult> {
        let payload = match self.begin_submit() {
            SubmitOutcome::Busy => return None,
            SubmitOutcome::Invalid(errors) => {
                return Some(SubmissionResult::Failure(SubmitError::Validation(errors)))
            }
            SubmitOutcome::Sending(payload) => payload,
        };

        let result = dispatch(relay, &payload, Uuid::new_v4()).await;
        Some(self.finish_submit(result, notifier))
    }

    /// Back to the initial state: route default service, no errors, idle
    pub fn reset(&mut self) {
        self.fields = FormFields {
            main_service: self.default_service,
            ..Default::default()
        };
        self.errors = ValidationState::default();
        self.phase = SubmitPhase::Idle;
    }
}

/// Hand a clean payload to the relay once, logging under `request_id`.
pub async fn dispatch(
    relay: &dyn MailRelay,
    payload: &LeadPayload,
    request_id: Uuid,
) -> Result<(), RelayError> {
    tracing::info!(%request_id, "Sending lead for {}", payload.main_service);
    let result = relay.send(payload).await;
    tracing::info!(%request_id, ok = result.is_ok(), "Lead relay finished");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{MockMailRelay, MockNotifier};

    fn fill_valid(form: &mut LeadForm) {
        form.on_field_change(FieldName::Name, "Jane Doe");
        form.on_field_change(FieldName::Phone, "0771234567");
        form.on_field_change(FieldName::Email, "jane@example.com");
        form.on_main_service_change(MainService::Design);
        form.on_field_change(FieldName::SubService, "Package design");
        form.on_field_change(FieldName::Message, "Hello");
    }

    fn expected_payload() -> LeadPayload {
        LeadPayload {
            name: "Jane Doe".to_string(),
            phone: "0771234567".to_string(),
            email: "jane@example.com".to_string(),
            main_service: MainService::Design,
            sub_service: "Package design".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn silent_notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();
        notifier
    }

    mod field_changes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state_is_clean() {
            let form = LeadForm::new(PhoneRule::Mobile);
            assert_eq!(*form.errors(), ValidationState::default());
            assert_eq!(form.phase(), SubmitPhase::Idle);
            assert!(form.sub_service_options().is_empty());
        }

        #[test]
        fn test_blank_value_flags_field() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            form.on_field_change(FieldName::Name, "  ");
            assert!(form.errors().name);
            form.on_field_change(FieldName::Name, "J");
            assert!(!form.errors().name);
        }

        #[test]
        fn test_shape_is_not_checked_on_change() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            form.on_field_change(FieldName::Email, "abc");
            form.on_field_change(FieldName::Phone, "123");
            assert!(!form.errors().email);
            assert!(!form.errors().phone);
        }

        #[test]
        fn test_unknown_main_service_is_flagged_like_blank() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            form.on_main_service_change(MainService::Design);
            assert!(!form.errors().main_service);

            form.on_field_change(FieldName::MainService, "Catering");

            assert_eq!(form.fields().main_service, None);
            assert!(form.errors().main_service);
        }

        #[test]
        fn test_main_service_change_swaps_options_but_keeps_selection() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            form.on_main_service_change(MainService::Marketing);
            form.on_field_change(FieldName::SubService, "SEO Audit and Setup");

            form.on_main_service_change(MainService::Technology);

            assert_eq!(
                form.sub_service_options(),
                MainService::Technology.sub_services()
            );
            assert_eq!(form.fields().sub_service, "SEO Audit and Setup");
        }

        #[test]
        fn test_for_route_preselects_service() {
            let form = LeadForm::for_route("/Marketing", PhoneRule::Mobile);
            assert_eq!(form.fields().main_service, Some(MainService::Marketing));

            let form = LeadForm::for_route("/contact", PhoneRule::Mobile);
            assert_eq!(form.fields().main_service, None);
        }
    }

    mod begin_submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_form_stays_idle_with_errors() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            fill_valid(&mut form);
            form.on_field_change(FieldName::Email, "abc");

            let outcome = form.begin_submit();

            let SubmitOutcome::Invalid(errors) = outcome else {
                panic!("expected Invalid, got {outcome:?}");
            };
            assert_eq!(errors.invalid_fields(), vec![FieldName::Email]);
            assert_eq!(*form.errors(), errors);
            assert_eq!(form.phase(), SubmitPhase::Idle);
        }

        #[test]
        fn test_valid_form_enters_sending_with_payload() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            fill_valid(&mut form);

            assert_eq!(form.begin_submit(), SubmitOutcome::Sending(expected_payload()));
            assert!(form.is_sending());
            assert!(!form.errors().any_invalid());
        }

        #[test]
        fn test_second_submit_while_sending_is_busy() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            fill_valid(&mut form);

            assert!(matches!(form.begin_submit(), SubmitOutcome::Sending(_)));
            assert_eq!(form.begin_submit(), SubmitOutcome::Busy);
            assert!(form.is_sending());
        }

        #[test]
        fn test_stale_sub_service_after_service_switch() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            fill_valid(&mut form);
            form.on_main_service_change(MainService::Marketing);
            form.on_field_change(FieldName::SubService, "Brand Strategy");
            form.on_main_service_change(MainService::Technology);

            let SubmitOutcome::Invalid(errors) = form.begin_submit() else {
                panic!("expected Invalid");
            };
            assert_eq!(errors.invalid_fields(), vec![FieldName::SubService]);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_each_blank_field_blocks_relay() {
            for field in FieldName::ALL {
                let mut form = LeadForm::new(PhoneRule::Mobile);
                fill_valid(&mut form);
                form.on_field_change(field, "");

                let mut relay = MockMailRelay::new();
                relay.expect_send().never();
                let mut notifier = silent_notifier();

                let result = form.submit(&relay, &mut notifier).await;

                match result {
                    Some(SubmissionResult::Failure(SubmitError::Validation(errors))) => {
                        assert_eq!(errors.invalid_fields(), vec![field], "{field:?}");
                    }
                    other => panic!("expected validation failure, got {other:?}"),
                }
            }
        }

        #[tokio::test]
        async fn test_invalid_email_blocks_relay() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            fill_valid(&mut form);
            form.on_field_change(FieldName::Email, "abc");

            let mut relay = MockMailRelay::new();
            relay.expect_send().never();
            let mut notifier = silent_notifier();

            let result = form.submit(&relay, &mut notifier).await;

            assert!(matches!(
                result,
                Some(SubmissionResult::Failure(SubmitError::Validation(e))) if e.email
            ));
        }

        #[tokio::test]
        async fn test_dispatch_sends_payload_once_and_returns_relay_error() {
            let mut relay = MockMailRelay::new();
            relay
                .expect_send()
                .withf(|payload| *payload == expected_payload())
                .times(1)
                .returning(|_| Err(RelayError::NotConfigured));

            let result = dispatch(&relay, &expected_payload(), Uuid::new_v4()).await;

            assert!(matches!(result, Err(RelayError::NotConfigured)));
        }

        #[tokio::test]
        async fn test_success_sends_once_and_resets() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            fill_valid(&mut form);

            let mut relay = MockMailRelay::new();
            relay
                .expect_send()
                .withf(|payload| *payload == expected_payload())
                .times(1)
                .returning(|_| Ok(()));

            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|kind, title, _| *kind == NoticeKind::Success && title == SUCCESS_TITLE)
                .times(1)
                .return_const(());

            let result = form.submit(&relay, &mut notifier).await;

            assert!(result.is_some_and(|r| r.is_success()));
            assert_eq!(*form.fields(), FormFields::default());
            assert_eq!(*form.errors(), ValidationState::default());
            assert_eq!(form.phase(), SubmitPhase::Idle);
        }

        #[tokio::test]
        async fn test_success_restores_route_default_service() {
            let mut form = LeadForm::for_route("/Design", PhoneRule::Mobile);
            fill_valid(&mut form);

            let mut relay = MockMailRelay::new();
            relay.expect_send().times(1).returning(|_| Ok(()));
            let mut notifier = MockNotifier::new();
            notifier.expect_notify().times(1).return_const(());

            form.submit(&relay, &mut notifier).await;

            assert_eq!(form.fields().main_service, Some(MainService::Design));
            assert!(form.fields().name.is_empty());
        }

        #[tokio::test]
        async fn test_failure_keeps_values_and_allows_retry() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            fill_valid(&mut form);
            let before = form.fields().clone();

            let mut relay = MockMailRelay::new();
            relay.expect_send().times(1).returning(|_| {
                Err(RelayError::Rejected {
                    status: 500,
                    body: "boom".to_string(),
                })
            });

            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|kind, title, message| {
                    *kind == NoticeKind::Error
                        && title == FAILURE_TITLE
                        && message == FAILURE_MESSAGE
                })
                .times(1)
                .return_const(());

            let result = form.submit(&relay, &mut notifier).await;

            assert!(matches!(
                result,
                Some(SubmissionResult::Failure(SubmitError::Relay(
                    RelayError::Rejected { status: 500, .. }
                )))
            ));
            assert_eq!(*form.fields(), before);
            assert!(!form.is_sending());

            // Retry goes through again
            let mut retry_relay = MockMailRelay::new();
            retry_relay.expect_send().times(1).returning(|_| Ok(()));
            let mut retry_notifier = MockNotifier::new();
            retry_notifier.expect_notify().times(1).return_const(());

            let retried = form.submit(&retry_relay, &mut retry_notifier).await;
            assert!(retried.is_some_and(|r| r.is_success()));
        }

        #[test]
        fn test_submit_while_sending_is_noop() {
            let mut form = LeadForm::new(PhoneRule::Mobile);
            fill_valid(&mut form);
            assert!(matches!(form.begin_submit(), SubmitOutcome::Sending(_)));

            let mut relay = MockMailRelay::new();
            relay.expect_send().never();
            let mut notifier = silent_notifier();

            let result = tokio_test::block_on(form.submit(&relay, &mut notifier));
            assert!(result.is_none());
            assert!(form.is_sending());
        }
    }

    #[test]
    fn test_validation_error_message_lists_fields() {
        let errors = ValidationState {
            phone: true,
            ..Default::default()
        };
        let message = SubmitError::Validation(errors).to_string();
        assert!(message.contains("Phone"));
    }
}
