//! External collaborators of the contact form
//!
//! The mail relay that actually sends the lead, and the notifier that
//! tells the user how it went.

mod emailjs;
mod traits;

pub use emailjs::{EmailJsCredentials, EmailJsRelay, DEFAULT_ENDPOINT};
pub use traits::{MailRelay, NoticeKind, Notifier, RelayError};

#[cfg(test)]
pub use traits::{MockMailRelay, MockNotifier};
