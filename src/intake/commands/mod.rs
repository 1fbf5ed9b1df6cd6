use crate::model::{Contact, ContactView, Note};
use crate::validate::FieldErrors;
use crate::view::Page;

pub mod delete;
pub mod edit;
pub mod list;
pub mod note;
pub mod seed;
pub mod show;
pub mod submit;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. Validation failures travel in
/// `field_errors` (they are expected outcomes, not errors); `Err` is
/// reserved for storage and access failures.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub contact: Option<ContactView>,
    pub affected: Vec<Contact>,
    pub page: Option<Page>,
    pub note: Option<Note>,
    pub field_errors: Option<FieldErrors>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_contact(mut self, contact: ContactView) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn with_affected(mut self, contacts: Vec<Contact>) -> Self {
        self.affected = contacts;
        self
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.note = Some(note);
        self
    }

    pub fn with_field_errors(mut self, errors: FieldErrors) -> Self {
        self.field_errors = Some(errors);
        self
    }

    pub fn succeeded(&self) -> bool {
        self.field_errors.is_none()
    }
}
