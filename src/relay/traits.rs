//! Trait abstractions for the relay and notifier to enable mocking in tests

use crate::lead::LeadPayload;
use async_trait::async_trait;
use thiserror::Error;

/// Why the relay could not deliver a lead
#[derive(Debug, Error)]
pub enum RelayError {
    /// Service id, template id or public key is missing
    #[error("mail relay is not configured")]
    NotConfigured,

    #[error("mail relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a validated lead to the operator mailbox.
///
/// Implementations never retry. A failure is handed back to the form so
/// the user can resubmit by hand.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, payload: &LeadPayload) -> Result<(), RelayError>;
}

/// Kind of user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Fire-and-forget user notification (modal, toast, ...)
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str);
}
