use super::ContactStore;
use crate::error::{IntakeError, Result};
use crate::model::{Contact, NewContact, Note};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// In-memory store for tests. Mirrors the SQLite store's semantics,
/// including monotonic 1-based ids and note cascades.
#[derive(Debug)]
pub struct MemoryStore {
    contacts: BTreeMap<i64, Contact>,
    notes: BTreeMap<i64, Note>,
    next_contact_id: i64,
    next_note_id: i64,
    /// When set, the next write fails once. Used to exercise failure and
    /// rollback paths without a real connectivity fault.
    pub fail_next_write: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            contacts: BTreeMap::new(),
            notes: BTreeMap::new(),
            next_contact_id: 1,
            next_note_id: 1,
            fail_next_write: false,
        }
    }

    fn check_write(&mut self) -> Result<()> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(IntakeError::Store("injected write failure".to_string()));
        }
        Ok(())
    }

    /// Number of writes observable by tests: contacts plus notes.
    pub fn row_count(&self) -> usize {
        self.contacts.len() + self.notes.len()
    }
}

impl ContactStore for MemoryStore {
    fn insert_contact(&mut self, new: &NewContact) -> Result<Contact> {
        self.check_write()?;
        let id = self.next_contact_id;
        self.next_contact_id += 1;
        let contact = Contact {
            id,
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            service: new.service,
            message: new.message.clone(),
            status: new.status,
            referral_code: new.referral_code.clone(),
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        Ok(self.contacts.get(&id).cloned())
    }

    fn contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.values().cloned().collect())
    }

    fn update_contact(&mut self, contact: &Contact) -> Result<()> {
        self.check_write()?;
        if !self.contacts.contains_key(&contact.id) {
            return Err(IntakeError::ContactNotFound(contact.id));
        }
        self.contacts.insert(contact.id, contact.clone());
        Ok(())
    }

    fn delete_contacts(&mut self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        self.check_write()?;
        for id in ids {
            self.contacts.remove(id);
        }
        self.notes.retain(|_, note| !ids.contains(&note.contact_id));
        Ok(())
    }

    fn insert_note(
        &mut self,
        contact_id: i64,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Note> {
        self.check_write()?;
        let id = self.next_note_id;
        self.next_note_id += 1;
        let note = Note {
            id,
            contact_id,
            content: content.to_string(),
            created_at,
        };
        self.notes.insert(id, note.clone());
        Ok(note)
    }

    fn delete_note(&mut self, id: i64) -> Result<()> {
        self.check_write()?;
        self.notes.remove(&id);
        Ok(())
    }

    fn notes_for(&self, contact_id: i64) -> Result<Vec<Note>> {
        Ok(self
            .notes
            .values()
            .filter(|note| note.contact_id == contact_id)
            .cloned()
            .collect())
    }

    fn clear(&mut self) -> Result<()> {
        self.contacts.clear();
        self.notes.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Service, Status};
    use chrono::Utc;

    #[test]
    fn default_store_assigns_ids_from_one_like_sqlite() {
        let mut store = MemoryStore::default();
        let now = Utc::now();
        let contact = store
            .insert_contact(&NewContact {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                phone: "+380991234567".into(),
                service: Service::Sauna,
                message: "A message long enough to pass validation.".into(),
                status: Status::New,
                referral_code: None,
                created_at: now,
                updated_at: now,
            })
            .unwrap();
        assert_eq!(contact.id, 1);

        let note = store.insert_note(contact.id, "first", now).unwrap();
        assert_eq!(note.id, 1);
    }
}
