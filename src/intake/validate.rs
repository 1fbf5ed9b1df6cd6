//! Schema validation for contact payloads.
//!
//! Validation never fails with an error for bad input: it returns a
//! [`FieldErrors`] map (field name → human-readable messages) so callers can
//! surface every problem at once, matching the `{"error": {...}}` wire shape.
//!
//! Two schemas share the five core fields: the creation schema (public form,
//! no status or referral code accepted from the caller) and the edit schema
//! (status required, referral code explicitly nullable).

use crate::model::{Service, Status};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

// E.164: optional '+', leading digit 1-9, 8 to 15 digits total.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9]\d{7,14}$").expect("phone regex"));

pub const NAME_MIN: usize = 4;
pub const NAME_MAX: usize = 64;
pub const EMAIL_MIN: usize = 4;
pub const EMAIL_MAX: usize = 64;
pub const MESSAGE_MIN: usize = 16;
pub const MESSAGE_MAX: usize = 1024;

/// Field-keyed validation messages. Ordered map so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

/// Raw creation payload, exactly as submitted through the public form.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Raw edit payload: the core five fields plus the workflow status and an
/// explicitly nullable referral code.
#[derive(Debug, Clone, Default)]
pub struct ContactEditDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub status: String,
    pub referral_code: Option<String>,
}

/// A creation payload that passed the schema: trimmed strings, typed enums.
#[derive(Debug, Clone)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Service,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidContactEdit {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Service,
    pub message: String,
    pub status: Status,
    pub referral_code: Option<String>,
}

/// Phone numbers arrive formatted ("+380 99 123-45-67"); strip the usual
/// separators before the numbering-plan check.
fn normalize_phone(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect()
}

pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(raw))
}

fn check_core(draft_name: &str, email: &str, phone: &str, service: &str, message: &str) -> (FieldErrors, Option<(String, String, String, Service, String)>) {
    let mut errors = FieldErrors::default();

    // Bounds count characters, not bytes; names are routinely non-ASCII.
    let name = draft_name.trim().to_string();
    let name_chars = name.chars().count();
    if name_chars < NAME_MIN {
        errors.push("name", "Full Name is required");
    } else if name_chars > NAME_MAX {
        errors.push("name", format!("Full Name must be at most {} characters", NAME_MAX));
    }

    let email = email.trim().to_string();
    let email_chars = email.chars().count();
    if email_chars < EMAIL_MIN {
        errors.push("email", "Email Address is required");
    } else if email_chars > EMAIL_MAX {
        errors.push("email", format!("Email must be at most {} characters", EMAIL_MAX));
    } else if !EMAIL_RE.is_match(&email) {
        errors.push("email", "Invalid email address");
    }

    let phone = phone.trim().to_string();
    if phone.is_empty() {
        errors.push("phone", "Phone Number is required");
    } else if !is_valid_phone(&phone) {
        errors.push("phone", "Phone number required");
    }

    let service = match Service::from_str(service) {
        Ok(s) => Some(s),
        Err(_) => {
            errors.push("service", "Invalid service");
            None
        }
    };

    let message = message.trim().to_string();
    let message_chars = message.chars().count();
    if message_chars < MESSAGE_MIN {
        errors.push("message", "Project Details is required");
    } else if message_chars > MESSAGE_MAX {
        errors.push(
            "message",
            format!("Project Details must be at most {} characters", MESSAGE_MAX),
        );
    }

    match service {
        Some(svc) if errors.is_empty() => (errors, Some((name, email, phone, svc, message))),
        _ => (errors, None),
    }
}

/// Creation schema (public form submission).
pub fn validate_contact(draft: &ContactDraft) -> std::result::Result<ValidContact, FieldErrors> {
    let (errors, core) = check_core(
        &draft.name,
        &draft.email,
        &draft.phone,
        &draft.service,
        &draft.message,
    );
    match core {
        Some((name, email, phone, service, message)) => Ok(ValidContact {
            name,
            email,
            phone,
            service,
            message,
        }),
        None => Err(errors),
    }
}

/// Edit schema (staff dashboard): creation schema plus a required status.
pub fn validate_contact_edit(
    draft: &ContactEditDraft,
) -> std::result::Result<ValidContactEdit, FieldErrors> {
    let (mut errors, core) = check_core(
        &draft.name,
        &draft.email,
        &draft.phone,
        &draft.service,
        &draft.message,
    );

    let status = match Status::from_str(&draft.status) {
        Ok(s) => Some(s),
        Err(_) => {
            errors.push("status", "Invalid status");
            None
        }
    };

    match (core, status) {
        (Some((name, email, phone, service, message)), Some(status)) if errors.is_empty() => {
            Ok(ValidContactEdit {
                name,
                email,
                phone,
                service,
                message,
                status,
                referral_code: draft.referral_code.clone(),
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_draft() -> ContactDraft {
        ContactDraft {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "+380 99 123 4567".into(),
            service: "sauna".into(),
            message: "We would like a quote for a garden sauna.".into(),
        }
    }

    #[test]
    fn accepts_valid_payload_and_trims() {
        let mut draft = good_draft();
        draft.name = "  Jane Doe  ".into();
        draft.message = format!("  {}  ", draft.message);

        let valid = validate_contact(&draft).unwrap();
        assert_eq!(valid.name, "Jane Doe");
        assert_eq!(valid.service, Service::Sauna);
        assert!(!valid.message.starts_with(' '));
    }

    #[test]
    fn short_name_yields_exactly_one_field_key() {
        let mut draft = good_draft();
        draft.name = "Jan".into();

        let errors = validate_contact(&draft).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0["name"], vec!["Full Name is required".to_string()]);
    }

    #[test]
    fn length_bounds_count_characters_not_bytes() {
        // 42 characters, well over 64 bytes in UTF-8.
        let mut draft = good_draft();
        draft.name = "Олена Шевченко-Константинопольська Деміївна".into();
        assert_eq!(draft.name.chars().count(), 43);
        assert!(draft.name.len() > NAME_MAX);
        let valid = validate_contact(&draft).unwrap();
        assert_eq!(valid.name, draft.name);

        // 3 characters (6 bytes) is still under the 4-character minimum.
        draft.name = "Яна".into();
        let errors = validate_contact(&draft).unwrap_err();
        assert_eq!(errors.0["name"], vec!["Full Name is required".to_string()]);

        // Cyrillic project details inside the character bound pass too.
        let mut draft = good_draft();
        draft.message = "Ми хотіли б замовити сауну для саду біля озера.".into();
        assert!(validate_contact(&draft).is_ok());
    }

    #[test]
    fn rejects_bad_email_syntax() {
        let mut draft = good_draft();
        draft.email = "not-an-email".into();

        let errors = validate_contact(&draft).unwrap_err();
        assert!(errors.0.contains_key("email"));
    }

    #[test]
    fn rejects_unknown_service() {
        let mut draft = good_draft();
        draft.service = "houseboat".into();

        let errors = validate_contact(&draft).unwrap_err();
        assert_eq!(errors.0["service"], vec!["Invalid service".to_string()]);
    }

    #[test]
    fn rejects_short_message() {
        let mut draft = good_draft();
        draft.message = "too short".into();

        let errors = validate_contact(&draft).unwrap_err();
        assert!(errors.0.contains_key("message"));
    }

    #[test]
    fn phone_accepts_formatted_e164() {
        assert!(is_valid_phone("+1 (555) 867-5309"));
        assert!(is_valid_phone("+380991234567"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+0123"));
        assert!(!is_valid_phone("call me maybe"));
    }

    #[test]
    fn collects_multiple_field_errors_at_once() {
        let draft = ContactDraft::default();
        let errors = validate_contact(&draft).unwrap_err();
        for field in ["name", "email", "phone", "service", "message"] {
            assert!(errors.0.contains_key(field), "missing {}", field);
        }
    }

    #[test]
    fn edit_schema_requires_valid_status() {
        let good = good_draft();
        let mut draft = ContactEditDraft {
            name: good.name.clone(),
            email: good.email.clone(),
            phone: good.phone.clone(),
            service: good.service.clone(),
            message: good.message.clone(),
            status: "pending".into(),
            referral_code: None,
        };

        let errors = validate_contact_edit(&draft).unwrap_err();
        assert_eq!(errors.0["status"], vec!["Invalid status".to_string()]);

        draft.status = "inprogress".into();
        let valid = validate_contact_edit(&draft).unwrap();
        assert_eq!(valid.status, Status::Inprogress);
        assert_eq!(valid.referral_code, None);
    }

    #[test]
    fn edit_schema_allows_explicit_referral_code() {
        let good = good_draft();
        let draft = ContactEditDraft {
            name: good.name,
            email: good.email,
            phone: good.phone,
            service: good.service,
            message: good.message,
            status: "todo".into(),
            referral_code: Some("SPRING24".into()),
        };

        let valid = validate_contact_edit(&draft).unwrap();
        assert_eq!(valid.referral_code.as_deref(), Some("SPRING24"));
    }
}
