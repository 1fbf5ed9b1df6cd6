//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all intake operations, regardless of the UI being used.
//!
//! It dispatches to command functions, normalizes inputs (string ids from
//! the outside world become integers here), and returns structured
//! `Result<CmdResult>` values. No business logic, no I/O, no presentation.
//!
//! `IntakeApi<S: ContactStore>` is generic over the storage backend:
//! production wires `SqliteStore`, tests wire `MemoryStore`.

use crate::commands;
use crate::error::{IntakeError, Result};
use crate::store::ContactStore;
use crate::validate::{ContactDraft, ContactEditDraft};
use crate::view::ViewState;

pub struct IntakeApi<S: ContactStore> {
    store: S,
}

impl<S: ContactStore> IntakeApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn submit(
        &mut self,
        draft: &ContactDraft,
        referral_code: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::submit::run(&mut self.store, draft, referral_code)
    }

    pub fn show(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&mut self.store, parse_id(id)?)
    }

    pub fn edit(&mut self, id: &str, draft: &ContactEditDraft) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, parse_id(id)?, draft)
    }

    pub fn set_status(&mut self, id: &str, status: &str) -> Result<commands::CmdResult> {
        commands::edit::set_status(&mut self.store, parse_id(id)?, status)
    }

    pub fn delete<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = ids
            .iter()
            .map(|id| parse_id(id.as_ref()))
            .collect::<Result<Vec<i64>>>()?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn list(&self, view: &ViewState) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, view)
    }

    pub fn add_note(&mut self, contact_id: &str, content: &str) -> Result<commands::CmdResult> {
        commands::note::add(&mut self.store, parse_id(contact_id)?, content)
    }

    pub fn remove_note(&mut self, note_id: &str) -> Result<commands::CmdResult> {
        commands::note::remove(&mut self.store, parse_id(note_id)?)
    }

    pub fn seed(&mut self, count: usize) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store, count)
    }

    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Identifiers arrive in string form from the CLI; parse to the integer ids
/// the store uses.
fn parse_id(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| IntakeError::Api(format!("Invalid id: {}", s)))
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
