//! Contact form UI state: focus, option pickers and text editing

use super::field::{FormField, CONTACT_FIELDS};
use crate::lead::{FieldName, LeadForm, MainService, PhoneRule};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Index of the submit button row, after the six fields
pub const SUBMIT_ROW: usize = CONTACT_FIELDS.len();

/// Contact form as shown on screen
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Validation and submission state
    pub lead: LeadForm,
    pub active_field_index: usize,
    /// Cursor of the open option list, if a select field is expanded
    pub picker: Option<usize>,
}

impl ContactForm {
    pub fn new(route: &str, phone_rule: PhoneRule) -> Self {
        Self {
            lead: LeadForm::for_route(route, phone_rule),
            active_field_index: 0,
            picker: None,
        }
    }

    /// Descriptor of the focused field (None on the submit row)
    pub fn active_descriptor(&self) -> Option<&'static FormField> {
        CONTACT_FIELDS.get(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    fn active_text_field(&self) -> Option<&'static FormField> {
        self.active_descriptor().filter(|f| !f.is_select())
    }

    fn edit_active(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(field) = self.active_text_field() {
            let mut value = self.lead.fields().raw(field.name).to_string();
            edit(&mut value);
            self.lead.on_field_change(field.name, &value);
        }
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        self.edit_active(|value| value.push(c));
    }

    pub fn backspace(&mut self) {
        self.edit_active(|value| {
            value.pop();
        });
    }

    /// Line break, only meaningful in the message field
    pub fn newline(&mut self) {
        if self.active_text_field().is_some_and(FormField::is_multiline) {
            self.edit_active(|value| value.push('\n'));
        }
    }

    /// Insert pasted text. Single-line fields get line breaks folded to spaces.
    pub fn paste(&mut self, text: &str) {
        let Some(field) = self.active_text_field() else {
            return;
        };
        let text = if field.is_multiline() {
            text.replace("\r\n", "\n")
        } else {
            text.split(['\r', '\n'])
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        };
        self.edit_active(|value| value.push_str(&text));
    }

    /// Choices for a select field
    pub fn options_for(&self, field: FieldName) -> Vec<&'static str> {
        match field {
            FieldName::MainService => MainService::ALL.iter().map(|s| s.label()).collect(),
            FieldName::SubService => self.lead.sub_service_options().to_vec(),
            _ => Vec::new(),
        }
    }

    fn active_select(&self) -> Option<FieldName> {
        self.active_descriptor()
            .filter(|f| f.is_select())
            .map(|f| f.name)
    }

    /// Expand the focused select field with the cursor on its current value
    pub fn open_picker(&mut self) {
        let Some(field) = self.active_select() else {
            return;
        };
        let options = self.options_for(field);
        if options.is_empty() {
            return;
        }
        let current = self.lead.fields().raw(field);
        self.picker = Some(options.iter().position(|o| *o == current).unwrap_or(0));
    }

    pub fn picker_next(&mut self) {
        if let (Some(cursor), Some(field)) = (self.picker, self.active_select()) {
            let len = self.options_for(field).len().max(1);
            self.picker = Some((cursor + 1) % len);
        }
    }

    pub fn picker_prev(&mut self) {
        if let (Some(cursor), Some(field)) = (self.picker, self.active_select()) {
            let len = self.options_for(field).len().max(1);
            self.picker = Some((cursor + len - 1) % len);
        }
    }

    /// Apply the option under the picker cursor and collapse it
    pub fn confirm_picker(&mut self) {
        let (Some(cursor), Some(field)) = (self.picker.take(), self.active_select()) else {
            return;
        };
        let Some(choice) = self.options_for(field).get(cursor).copied() else {
            return;
        };

        match field {
            FieldName::MainService => {
                if let Ok(service) = choice.parse() {
                    self.lead.on_main_service_change(service);
                }
            }
            _ => self.lead.on_field_change(field, choice),
        }
    }

    pub fn cancel_picker(&mut self) {
        self.picker = None;
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // six fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.picker = None;
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}
