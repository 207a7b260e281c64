//! Shape predicates and the pure validation pass

use super::fields::{FieldName, FormFields};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

// Alternation binds as `(^(\+94|0)?7)|(8[0-9]{8}$)`. Digits are ASCII only.
static LEGACY_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+94|0)?7|8[0-9]{8}$").expect("valid legacy phone regex"));

static MOBILE_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+94|0)?7[0-9]{8}$").expect("valid mobile phone regex"));

/// Which phone-shape predicate the form applies on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneRule {
    /// Sri Lankan mobile number: optional `+94` or `0`, then `7` and eight digits
    #[default]
    Mobile,
    /// Bit-for-bit the pattern the web form shipped with, precedence quirk included
    Legacy,
}

impl PhoneRule {
    pub fn matches(self, phone: &str) -> bool {
        match self {
            Self::Mobile => MOBILE_PHONE_RE.is_match(phone),
            Self::Legacy => LEGACY_PHONE_RE.is_match(phone),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Per-field "is invalid" flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub name: bool,
    pub phone: bool,
    pub email: bool,
    pub main_service: bool,
    pub sub_service: bool,
    pub message: bool,
}

impl ValidationState {
    pub fn is_invalid(&self, field: FieldName) -> bool {
        match field {
            FieldName::Name => self.name,
            FieldName::Phone => self.phone,
            FieldName::Email => self.email,
            FieldName::MainService => self.main_service,
            FieldName::SubService => self.sub_service,
            FieldName::Message => self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, invalid: bool) {
        let flag = match field {
            FieldName::Name => &mut self.name,
            FieldName::Phone => &mut self.phone,
            FieldName::Email => &mut self.email,
            FieldName::MainService => &mut self.main_service,
            FieldName::SubService => &mut self.sub_service,
            FieldName::Message => &mut self.message,
        };
        *flag = invalid;
    }

    pub fn any_invalid(&self) -> bool {
        FieldName::ALL.iter().any(|f| self.is_invalid(*f))
    }

    /// Invalid fields in form order
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| self.is_invalid(*f))
            .collect()
    }
}

/// Evaluate every rule against a snapshot of the form.
///
/// All six fields are always checked so the caller gets the full picture.
pub fn validate(fields: &FormFields, phone_rule: PhoneRule) -> ValidationState {
    let name = fields.name.trim();
    let phone = fields.phone.trim();
    let email = fields.email.trim();
    let sub_service = fields.sub_service.trim();

    ValidationState {
        name: name.is_empty(),
        phone: phone.is_empty() || !phone_rule.matches(phone),
        email: email.is_empty() || !is_valid_email(email),
        main_service: fields.main_service.is_none(),
        // A selection left over from a previous main service counts as unset
        sub_service: sub_service.is_empty()
            || fields
                .main_service
                .is_some_and(|service| !service.offers(sub_service)),
        message: fields.message.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::MainService;

    fn valid_fields() -> FormFields {
        FormFields {
            name: "Jane Doe".to_string(),
            phone: "0771234567".to_string(),
            email: "jane@example.com".to_string(),
            main_service: Some(MainService::Design),
            sub_service: "Package design".to_string(),
            message: "Hello".to_string(),
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_plain_addresses() {
            assert!(is_valid_email("jane@example.com"));
            assert!(is_valid_email("a.b+c@sub.example.co.uk"));
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            assert!(!is_valid_email("abc"));
            assert!(!is_valid_email("jane@example"));
            assert!(!is_valid_email("jane doe@example.com"));
            assert!(!is_valid_email("jane@@example.com"));
            assert!(!is_valid_email("@example.com"));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_mobile_rule_accepts_local_mobile_numbers() {
            assert!(PhoneRule::Mobile.matches("0771234567"));
            assert!(PhoneRule::Mobile.matches("+94771234567"));
            assert!(PhoneRule::Mobile.matches("771234567"));
        }

        #[test]
        fn test_mobile_rule_rejects_other_shapes() {
            assert!(!PhoneRule::Mobile.matches("7"));
            assert!(!PhoneRule::Mobile.matches("0812121051"));
            assert!(!PhoneRule::Mobile.matches("077123456"));
            assert!(!PhoneRule::Mobile.matches("07712345678"));
        }

        #[test]
        fn test_legacy_rule_keeps_precedence_quirk() {
            // Left branch only anchors the start
            assert!(PhoneRule::Legacy.matches("7"));
            assert!(PhoneRule::Legacy.matches("07abc"));
            // Right branch only anchors the end
            assert!(PhoneRule::Legacy.matches("call me 812345678"));
            assert!(PhoneRule::Legacy.matches("0812121051"));
            assert!(!PhoneRule::Legacy.matches("0612345678"));
        }

        #[test]
        fn test_non_ascii_digits_are_rejected() {
            // Arabic-Indic digits U+0661..U+0668
            let digits = "\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}\u{0666}\u{0667}\u{0668}";
            assert!(!PhoneRule::Mobile.matches(&format!("07{digits}")));
            assert!(!PhoneRule::Legacy.matches(&format!("x8{digits}")));
        }

        #[test]
        fn test_default_rule_is_mobile() {
            assert_eq!(PhoneRule::default(), PhoneRule::Mobile);
        }

        #[test]
        fn test_rule_deserializes_lowercase() {
            let rule: PhoneRule = serde_json::from_str("\"legacy\"").unwrap();
            assert_eq!(rule, PhoneRule::Legacy);
        }
    }

    mod validate_pass {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_input_has_no_errors() {
            let state = validate(&valid_fields(), PhoneRule::Mobile);
            assert_eq!(state, ValidationState::default());
            assert!(!state.any_invalid());
        }

        #[test]
        fn test_each_blank_field_is_flagged_alone() {
            for field in FieldName::ALL {
                let mut fields = valid_fields();
                fields.set_raw(field, "   ");
                let state = validate(&fields, PhoneRule::Mobile);
                assert_eq!(state.invalid_fields(), vec![field], "{field:?}");
            }
        }

        #[test]
        fn test_bad_email_shape_is_flagged() {
            let mut fields = valid_fields();
            fields.email = "abc".to_string();
            let state = validate(&fields, PhoneRule::Mobile);
            assert_eq!(state.invalid_fields(), vec![FieldName::Email]);
        }

        #[test]
        fn test_bad_phone_shape_is_flagged() {
            let mut fields = valid_fields();
            fields.phone = "12345".to_string();
            let state = validate(&fields, PhoneRule::Mobile);
            assert_eq!(state.invalid_fields(), vec![FieldName::Phone]);
        }

        #[test]
        fn test_values_are_trimmed_before_shape_checks() {
            let mut fields = valid_fields();
            fields.phone = "  0771234567 ".to_string();
            fields.email = " jane@example.com ".to_string();
            assert!(!validate(&fields, PhoneRule::Mobile).any_invalid());
        }

        #[test]
        fn test_stale_sub_service_is_flagged() {
            let mut fields = valid_fields();
            fields.main_service = Some(MainService::Technology);
            let state = validate(&fields, PhoneRule::Mobile);
            assert_eq!(state.invalid_fields(), vec![FieldName::SubService]);
        }

        #[test]
        fn test_sub_service_without_main_service_only_flags_main() {
            let mut fields = valid_fields();
            fields.main_service = None;
            let state = validate(&fields, PhoneRule::Mobile);
            assert_eq!(state.invalid_fields(), vec![FieldName::MainService]);
        }

        #[test]
        fn test_all_errors_reported_at_once() {
            let state = validate(&FormFields::default(), PhoneRule::Mobile);
            assert_eq!(state.invalid_fields(), FieldName::ALL.to_vec());
        }
    }

    #[test]
    fn test_set_and_is_invalid_agree() {
        let mut state = ValidationState::default();
        for field in FieldName::ALL {
            state.set(field, true);
            assert!(state.is_invalid(field));
            state.set(field, false);
            assert!(!state.is_invalid(field));
        }
    }
}
