use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewContact, Status};
use crate::store::ContactStore;
use crate::validate::{validate_contact, ContactDraft};
use chrono::Utc;

/// Public form submission. Validation failures come back as field errors;
/// a valid payload always inserts a fresh row (there is no duplicate
/// detection). The referral code is whatever the access gate captured, or
/// absent.
pub fn run<S: ContactStore>(
    store: &mut S,
    draft: &ContactDraft,
    referral_code: Option<String>,
) -> Result<CmdResult> {
    let valid = match validate_contact(draft) {
        Ok(valid) => valid,
        Err(errors) => return Ok(CmdResult::default().with_field_errors(errors)),
    };

    let now = Utc::now();
    let contact = store.insert_contact(&NewContact {
        name: valid.name,
        email: valid.email,
        phone: valid.phone,
        service: valid.service,
        message: valid.message,
        status: Status::New,
        referral_code,
        created_at: now,
        updated_at: now,
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Message sent. Reference #{}",
        contact.id
    )));
    Ok(result.with_affected(vec![contact]))
}
