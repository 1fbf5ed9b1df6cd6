use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;
use chrono::Utc;

/// Attach a note to a contact, stamped now. The inserted note comes back in
/// the result so optimistic clients can reconcile their placeholder.
pub fn add<S: ContactStore>(store: &mut S, contact_id: i64, content: &str) -> Result<CmdResult> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(CmdResult::default());
    }

    if store.get_contact(contact_id)?.is_none() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "Contact {} not found",
            contact_id
        )));
        return Ok(result);
    }

    let note = store.insert_note(contact_id, content, Utc::now())?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note {} added to contact {}",
        note.id, contact_id
    )));
    Ok(result.with_note(note))
}

/// Delete a note by id. No-op if absent.
pub fn remove<S: ContactStore>(store: &mut S, note_id: i64) -> Result<CmdResult> {
    store.delete_note(note_id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note {} deleted", note_id)));
    Ok(result)
}
