use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ContactView, Status};
use crate::store::ContactStore;
use chrono::Utc;

/// Fetch one contact with its notes.
///
/// This is a read with a side effect: the first staff read of a `new`
/// contact advances it to `todo` and refreshes `updated_at`. The transition
/// is idempotent—re-reading a `todo` contact writes nothing—but callers
/// performing pure reads must not assume immutability. Two concurrent first
/// reads may both write `todo`; that double write is harmless and accepted.
///
/// An unknown id is a not-found outcome, never an error, and performs no
/// write.
pub fn run<S: ContactStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let mut contact = match store.get_contact(id)? {
        Some(contact) => contact,
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Contact {} not found", id)));
            return Ok(result);
        }
    };

    if contact.status == Status::New {
        contact.status = Status::Todo;
        contact.updated_at = Utc::now();
        store.update_contact(&contact)?;
    }

    let notes = store.notes_for(contact.id)?;
    Ok(CmdResult::default().with_contact(ContactView { contact, notes }))
}
