//! Lead submission domain
//!
//! UI-free core of the contact form: the field model, the main/sub
//! service catalog, shape predicates and the submission state machine.
//! Rendering code only ever talks to [`LeadForm`].

mod fields;
mod service;
mod submission;
mod validate;

pub use fields::{FieldName, FormFields, LeadPayload};
pub use service::{MainService, UnknownService};
pub use submission::{dispatch, LeadForm, SubmissionResult, SubmitError, SubmitOutcome, SubmitPhase};
pub use validate::{is_valid_email, validate, PhoneRule, ValidationState};
