use super::ContactStore;
use crate::error::{IntakeError, Result};
use crate::model::{Contact, NewContact, Note, Service, Status};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::str::FromStr;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS contact_us (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    email         TEXT NOT NULL,
    phone         TEXT NOT NULL,
    service       TEXT NOT NULL,
    message       TEXT NOT NULL,
    status        TEXT NOT NULL DEFAULT 'new',
    referral_code TEXT,
    created_at    TEXT NOT NULL,
    updated_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS notes (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id INTEGER REFERENCES contact_us(id) ON DELETE CASCADE,
    content    TEXT NOT NULL,
    created_at TEXT NOT NULL
);
";

/// Production store backed by a single SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and run migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(dir) = path.as_ref().parent() {
            if !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// In-memory database, used by integration tests that still want real
    /// SQL semantics (cascades in particular).
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        // Cascade deletes only fire with foreign keys switched on.
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    fn contact_from_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
        let service: String = row.get("service")?;
        let status: String = row.get("status")?;
        Ok(Contact {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            service: Service::from_str(&service).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    e.into(),
                )
            })?,
            message: row.get("message")?,
            status: Status::from_str(&status).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    e.into(),
                )
            })?,
            referral_code: row.get("referral_code")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
        Ok(Note {
            id: row.get("id")?,
            contact_id: row.get("contact_id")?,
            content: row.get("content")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl ContactStore for SqliteStore {
    fn insert_contact(&mut self, new: &NewContact) -> Result<Contact> {
        self.conn.execute(
            "INSERT INTO contact_us
                 (name, email, phone, service, message, status, referral_code, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                new.name,
                new.email,
                new.phone,
                new.service.as_str(),
                new.message,
                new.status.as_str(),
                new.referral_code,
                new.created_at,
                new.updated_at,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        log::debug!("inserted contact {}", id);

        Ok(Contact {
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
        })
    }

    fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM contact_us WHERE id = ?1")?;
        let mut rows = stmt.query_map([id], Self::contact_from_row)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    fn contacts(&self) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare("SELECT * FROM contact_us")?;
        let rows = stmt.query_map([], Self::contact_from_row)?;
        let mut contacts = Vec::new();
        for row in rows {
            contacts.push(row?);
        }
        Ok(contacts)
    }

    fn update_contact(&mut self, contact: &Contact) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE contact_us
                SET name = ?1, email = ?2, phone = ?3, service = ?4, message = ?5,
                    status = ?6, referral_code = ?7, created_at = ?8, updated_at = ?9
              WHERE id = ?10",
            params![
                contact.name,
                contact.email,
                contact.phone,
                contact.service.as_str(),
                contact.message,
                contact.status.as_str(),
                contact.referral_code,
                contact.created_at,
                contact.updated_at,
                contact.id,
            ],
        )?;
        if changed == 0 {
            return Err(IntakeError::ContactNotFound(contact.id));
        }
        Ok(())
    }

    fn delete_contacts(&mut self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        // One statement so the batch is atomic; cascades clean up notes.
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM contact_us WHERE id IN ({})", placeholders);
        let deleted = self
            .conn
            .execute(&sql, rusqlite::params_from_iter(ids.iter()))?;
        log::debug!("deleted {} of {} requested contacts", deleted, ids.len());
        Ok(())
    }

    fn insert_note(
        &mut self,
        contact_id: i64,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Note> {
        self.conn.execute(
            "INSERT INTO notes (contact_id, content, created_at) VALUES (?1, ?2, ?3)",
            params![contact_id, content, created_at],
        )?;
        Ok(Note {
            id: self.conn.last_insert_rowid(),
            contact_id,
            content: content.to_string(),
            created_at,
        })
    }

    fn delete_note(&mut self, id: i64) -> Result<()> {
        self.conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        Ok(())
    }

    fn notes_for(&self, contact_id: i64) -> Result<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM notes WHERE contact_id = ?1")?;
        let rows = stmt.query_map([contact_id], Self::note_from_row)?;
        let mut notes = Vec::new();
        for row in rows {
            notes.push(row?);
        }
        Ok(notes)
    }

    fn clear(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM contact_us", [])?;
        self.conn.execute("DELETE FROM notes", [])?;
        Ok(())
    }
}
