//! Form domain layer
//!
//! Screen-side state of the contact form. Validation and submission live
//! in [`crate::lead`]; this layer adds focus, option pickers and editing.

mod field;
mod form_state;

pub use field::{FieldKind, FormField, CONTACT_FIELDS};
pub use form_state::{ContactForm, Form, SUBMIT_ROW};
