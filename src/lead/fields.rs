//! Contact form field model

use super::service::MainService;
use serde::Serialize;

/// The six fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Phone,
    Email,
    MainService,
    SubService,
    Message,
}

impl FieldName {
    /// Form order
    pub const ALL: [FieldName; 6] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::MainService,
        Self::SubService,
        Self::Message,
    ];

    /// Template parameter name used by the mail relay
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "from_name",
            Self::Phone => "from_phone",
            Self::Email => "from_email",
            Self::MainService => "main_service",
            Self::SubService => "sub_service",
            Self::Message => "message",
        }
    }
}

/// Raw form input as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub main_service: Option<MainService>,
    pub sub_service: String,
    pub message: String,
}

impl FormFields {
    /// Current raw value of a field. An unset main service reads as "".
    pub fn raw(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Phone => &self.phone,
            FieldName::Email => &self.email,
            FieldName::MainService => self.main_service.map(MainService::label).unwrap_or(""),
            FieldName::SubService => &self.sub_service,
            FieldName::Message => &self.message,
        }
    }

    /// Overwrite a field from its raw string form.
    ///
    /// A main service value outside the catalog leaves the field unset.
    pub fn set_raw(&mut self, field: FieldName, value: &str) {
        match field {
            FieldName::Name => self.name = value.to_string(),
            FieldName::Phone => self.phone = value.to_string(),
            FieldName::Email => self.email = value.to_string(),
            FieldName::MainService => self.main_service = value.trim().parse().ok(),
            FieldName::SubService => self.sub_service = value.to_string(),
            FieldName::Message => self.message = value.to_string(),
        }
    }
}

/// Validated, trimmed lead handed to the mail relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    #[serde(rename = "from_name")]
    pub name: String,
    #[serde(rename = "from_phone")]
    pub phone: String,
    #[serde(rename = "from_email")]
    pub email: String,
    pub main_service: MainService,
    pub sub_service: String,
    pub message: String,
}

impl LeadPayload {
    /// Build from fields that already passed validation.
    /// Returns `None` only when no main service is selected.
    pub(crate) fn from_fields(fields: &FormFields) -> Option<Self> {
        Some(Self {
            name: fields.name.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            email: fields.email.trim().to_string(),
            main_service: fields.main_service?,
            sub_service: fields.sub_service.trim().to_string(),
            message: fields.message.trim().to_string(),
        })
    }
}
