//! # Storage Layer
//!
//! This module defines the storage abstraction for intake. The
//! [`ContactStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStore` (no database file needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production SQLite storage
//!   - Two tables, `contact_us` and `notes`
//!   - `notes.contact_id` references `contact_us.id` with cascade delete,
//!     enforced by the engine (`PRAGMA foreign_keys = ON`)
//!   - Auto-incrementing integer identifiers
//!
//! - [`memory::MemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution; optional write-failure injection for
//!     exercising rollback paths
//!
//! ## Failure semantics
//!
//! Store implementations perform no retries. A storage failure propagates as
//! an error to the caller; every operation is a single atomic unit of work
//! against the backend (the engine serializes conflicting writes, so the
//! application holds no locks of its own).

use crate::error::Result;
use crate::model::{Contact, NewContact, Note};
use chrono::{DateTime, Utc};

pub mod memory;
pub mod sqlite;

/// Abstract interface for contact storage.
pub trait ContactStore {
    /// Insert a new contact and return it with its assigned id.
    fn insert_contact(&mut self, new: &NewContact) -> Result<Contact>;

    /// Fetch a contact by id; `None` if absent.
    fn get_contact(&self, id: i64) -> Result<Option<Contact>>;

    /// All contacts, in no particular order. Filtering, sorting, and
    /// pagination happen in the listing engine, not here.
    fn contacts(&self) -> Result<Vec<Contact>>;

    /// Overwrite every field of the contact identified by `contact.id`.
    /// Last writer wins; there is no optimistic-concurrency check.
    fn update_contact(&mut self, contact: &Contact) -> Result<()>;

    /// Delete the given contacts in one batch; cascades to their notes.
    /// An empty slice and unknown ids are no-ops.
    fn delete_contacts(&mut self, ids: &[i64]) -> Result<()>;

    /// Insert a note for a contact and return it with its assigned id.
    fn insert_note(&mut self, contact_id: i64, content: &str, created_at: DateTime<Utc>)
        -> Result<Note>;

    /// Delete a note by id. No-op if absent.
    fn delete_note(&mut self, id: i64) -> Result<()>;

    /// All notes belonging to a contact. Unordered; display ordering is the
    /// note thread's concern.
    fn notes_for(&self, contact_id: i64) -> Result<Vec<Note>>;

    /// Wipe both tables.
    fn clear(&mut self) -> Result<()>;
}
