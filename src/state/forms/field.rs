//! Contact form field descriptors

use crate::lead::FieldName;

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Pick one entry from an option list
    Select,
}

/// Static description of one field in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Helper text shown under the field while it is invalid
    pub error_hint: &'static str,
}

impl FormField {
    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn is_select(&self) -> bool {
        self.kind == FieldKind::Select
    }
}

/// Fields in the order they are drawn and tabbed through
pub const CONTACT_FIELDS: &[FormField] = &[
    FormField {
        name: FieldName::Name,
        label: "Your name",
        kind: FieldKind::Text,
        error_hint: "Name is required.",
    },
    FormField {
        name: FieldName::Phone,
        label: "Contact number",
        kind: FieldKind::Text,
        error_hint: "Please enter a valid contact number.",
    },
    FormField {
        name: FieldName::Email,
        label: "E-mail",
        kind: FieldKind::Text,
        error_hint: "Please enter a valid email address.",
    },
    FormField {
        name: FieldName::MainService,
        label: "Main service",
        kind: FieldKind::Select,
        error_hint: "Please select a main service.",
    },
    FormField {
        name: FieldName::SubService,
        label: "Select a sub service",
        kind: FieldKind::Select,
        error_hint: "Please select a sub service.",
    },
    FormField {
        name: FieldName::Message,
        label: "Enter your message",
        kind: FieldKind::Multiline,
        error_hint: "Message is required.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_follow_form_order() {
        let names: Vec<FieldName> = CONTACT_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());
    }

    #[test]
    fn test_only_message_is_multiline() {
        for field in CONTACT_FIELDS {
            assert_eq!(field.is_multiline(), field.name == FieldName::Message);
        }
    }

    #[test]
    fn test_service_fields_are_selects() {
        assert!(CONTACT_FIELDS[3].is_select());
        assert!(CONTACT_FIELDS[4].is_select());
        assert!(!CONTACT_FIELDS[0].is_select());
    }
}
