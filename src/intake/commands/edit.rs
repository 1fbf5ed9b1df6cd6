use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Status;
use crate::store::ContactStore;
use crate::validate::{validate_contact_edit, ContactEditDraft, FieldErrors};
use chrono::Utc;
use std::str::FromStr;

/// Staff edit: validate the full edit schema, then overwrite every provided
/// field and refresh `updated_at`. Last writer wins; there is no
/// optimistic-concurrency check.
pub fn run<S: ContactStore>(store: &mut S, id: i64, draft: &ContactEditDraft) -> Result<CmdResult> {
    let valid = match validate_contact_edit(draft) {
        Ok(valid) => valid,
        Err(errors) => return Ok(CmdResult::default().with_field_errors(errors)),
    };

    let mut contact = match store.get_contact(id)? {
        Some(contact) => contact,
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Contact {} not found", id)));
            return Ok(result);
        }
    };

    contact.name = valid.name;
    contact.email = valid.email;
    contact.phone = valid.phone;
    contact.service = valid.service;
    contact.message = valid.message;
    contact.status = valid.status;
    contact.referral_code = valid.referral_code;
    contact.updated_at = Utc::now();
    store.update_contact(&contact)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact {} updated", id)));
    Ok(result.with_affected(vec![contact]))
}

/// Relaxed variant used when only the workflow status changes. Still
/// rejects invalid enum values, through the same field-error channel.
pub fn set_status<S: ContactStore>(store: &mut S, id: i64, status: &str) -> Result<CmdResult> {
    let status = match Status::from_str(status) {
        Ok(status) => status,
        Err(_) => {
            let mut errors = FieldErrors::default();
            errors.push("status", "Invalid status");
            return Ok(CmdResult::default().with_field_errors(errors));
        }
    };

    let mut contact = match store.get_contact(id)? {
        Some(contact) => contact,
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Contact {} not found", id)));
            return Ok(result);
        }
    };

    contact.status = status;
    contact.updated_at = Utc::now();
    store.update_contact(&contact)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact {} moved to {}",
        id, status
    )));
    Ok(result.with_affected(vec![contact]))
}
