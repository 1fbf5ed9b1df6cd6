use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

/// Delete contacts by id, one or many, in a single batch. Cascades remove
/// the contacts' notes. An empty id list and unknown ids are no-ops.
pub fn run<S: ContactStore>(store: &mut S, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if ids.is_empty() {
        return Ok(result);
    }

    store.delete_contacts(ids)?;
    result.add_message(CmdMessage::success(if ids.len() == 1 {
        format!("Contact {} deleted", ids[0])
    } else {
        format!("{} contacts deleted", ids.len())
    }));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::submit;
    use crate::store::memory::MemoryStore;
    use crate::validate::ContactDraft;
    use chrono::Utc;

    fn draft(name: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: "jane@example.com".into(),
            phone: "+380991234567".into(),
            service: "sauna".into(),
            message: "We would like a quote for a garden sauna.".into(),
        }
    }

    #[test]
    fn empty_id_list_performs_zero_writes() {
        let mut store = MemoryStore::new();
        submit::run(&mut store, &draft("Jane Doe"), None).unwrap();

        // A failure injection would trip on any write; none happens.
        store.fail_next_write = true;
        let result = run(&mut store, &[]).unwrap();
        assert!(result.messages.is_empty());
        store.fail_next_write = false;
        assert_eq!(store.contacts().unwrap().len(), 1);
    }

    #[test]
    fn deletes_one_and_cascades_notes() {
        let mut store = MemoryStore::new();
        let id = submit::run(&mut store, &draft("Jane Doe"), None).unwrap().affected[0].id;
        store.insert_note(id, "a", Utc::now()).unwrap();
        store.insert_note(id, "b", Utc::now()).unwrap();
        store.insert_note(id, "c", Utc::now()).unwrap();

        run(&mut store, &[id]).unwrap();
        assert!(store.get_contact(id).unwrap().is_none());
        assert!(store.notes_for(id).unwrap().is_empty());
    }

    #[test]
    fn deletes_many_in_one_batch() {
        let mut store = MemoryStore::new();
        let a = submit::run(&mut store, &draft("Jane Doe"), None).unwrap().affected[0].id;
        let b = submit::run(&mut store, &draft("John Roe"), None).unwrap().affected[0].id;
        let c = submit::run(&mut store, &draft("Kim Poe"), None).unwrap().affected[0].id;

        run(&mut store, &[a, c]).unwrap();
        let remaining = store.contacts().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);
    }

    #[test]
    fn unknown_id_is_a_noop_not_an_error() {
        let mut store = MemoryStore::new();
        submit::run(&mut store, &draft("Jane Doe"), None).unwrap();
        run(&mut store, &[999]).unwrap();
        assert_eq!(store.contacts().unwrap().len(), 1);
    }
}
