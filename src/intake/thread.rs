//! Client-side note thread with optimistic updates.
//!
//! Adding or removing a note follows a three-phase protocol:
//!
//! 1. **Tentative apply** — `begin_add`/`begin_remove` snapshot the current
//!    list and mutate the local view immediately, before the store call.
//! 2. **Rollback** — if the store call fails, `rollback` restores the
//!    snapshot exactly.
//! 3. **Reconcile** — once the call settles, `reconcile` replaces the local
//!    list with server truth (tentative placeholder ids disappear here).
//!
//! The thread itself never talks to a store; callers drive the protocol.
//! Display order is newest first throughout.

use crate::model::Note;
use chrono::Utc;

/// Saved prior state, consumed by [`NoteThread::rollback`].
#[derive(Debug)]
pub struct Snapshot {
    notes: Vec<Note>,
}

#[derive(Debug, Default)]
pub struct NoteThread {
    contact_id: i64,
    notes: Vec<Note>,
}

fn newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

impl NoteThread {
    pub fn new(contact_id: i64, mut initial: Vec<Note>) -> Self {
        newest_first(&mut initial);
        Self {
            contact_id,
            notes: initial,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Tentatively prepend a note and return the prior state. The
    /// placeholder id is negative so it can never collide with a
    /// server-assigned row id.
    pub fn begin_add(&mut self, content: &str) -> Snapshot {
        let snapshot = Snapshot {
            notes: self.notes.clone(),
        };
        let placeholder_id = -(self.notes.len() as i64 + 1);
        self.notes.insert(
            0,
            Note {
                id: placeholder_id,
                contact_id: self.contact_id,
                content: content.to_string(),
                created_at: Utc::now(),
            },
        );
        snapshot
    }

    /// Tentatively drop a note by id and return the prior state. Unknown
    /// ids still produce a usable snapshot.
    pub fn begin_remove(&mut self, note_id: i64) -> Snapshot {
        let snapshot = Snapshot {
            notes: self.notes.clone(),
        };
        self.notes.retain(|note| note.id != note_id);
        snapshot
    }

    /// Restore the exact pre-mutation state after a failed store call.
    pub fn rollback(&mut self, snapshot: Snapshot) {
        self.notes = snapshot.notes;
    }

    /// Settle with server truth once the call completes.
    pub fn reconcile(&mut self, mut server_notes: Vec<Note>) {
        newest_first(&mut server_notes);
        self.notes = server_notes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn note(id: i64, content: &str, minutes_ago: i64) -> Note {
        Note {
            id,
            contact_id: 1,
            content: content.to_string(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn orders_newest_first() {
        let thread = NoteThread::new(1, vec![note(1, "old", 60), note(2, "new", 5)]);
        assert_eq!(thread.notes()[0].content, "new");
        assert_eq!(thread.notes()[1].content, "old");
    }

    #[test]
    fn tentative_add_appears_immediately_at_the_top() {
        let mut thread = NoteThread::new(1, vec![note(1, "old", 60)]);
        thread.begin_add("fresh");
        assert_eq!(thread.len(), 2);
        assert_eq!(thread.notes()[0].content, "fresh");
        assert!(thread.notes()[0].id < 0);
    }

    #[test]
    fn rollback_restores_pre_add_snapshot_on_failure() {
        let mut thread = NoteThread::new(1, vec![note(1, "old", 60)]);
        let before: Vec<Note> = thread.notes().to_vec();

        let snapshot = thread.begin_add("doomed");
        assert_eq!(thread.len(), 2);

        // Simulated server failure.
        thread.rollback(snapshot);
        assert_eq!(thread.notes(), before.as_slice());
    }

    #[test]
    fn rollback_restores_pre_remove_snapshot_on_failure() {
        let mut thread = NoteThread::new(1, vec![note(1, "keep", 60), note(2, "target", 5)]);
        let before: Vec<Note> = thread.notes().to_vec();

        let snapshot = thread.begin_remove(2);
        assert_eq!(thread.len(), 1);

        thread.rollback(snapshot);
        assert_eq!(thread.notes(), before.as_slice());
    }

    #[test]
    fn reconcile_replaces_placeholder_with_server_truth() {
        let mut thread = NoteThread::new(1, vec![note(1, "old", 60)]);
        thread.begin_add("fresh");
        assert!(thread.notes()[0].id < 0);

        // Server settled: the real row came back with id 2.
        thread.reconcile(vec![note(1, "old", 60), note(2, "fresh", 0)]);
        assert_eq!(thread.len(), 2);
        assert_eq!(thread.notes()[0].id, 2);
        assert_eq!(thread.notes()[0].content, "fresh");
    }

    #[test]
    fn removing_unknown_id_changes_nothing() {
        let mut thread = NoteThread::new(1, vec![note(1, "only", 10)]);
        thread.begin_remove(99);
        assert_eq!(thread.len(), 1);
    }
}
