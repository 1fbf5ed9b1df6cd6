use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category a contact request concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    Sauna,
    MicroHouse,
    TinyHouse,
    CustomProject,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Sauna,
        Service::MicroHouse,
        Service::TinyHouse,
        Service::CustomProject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Sauna => "sauna",
            Service::MicroHouse => "micro-house",
            Service::TinyHouse => "tiny-house",
            Service::CustomProject => "custom-project",
        }
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sauna" => Ok(Service::Sauna),
            "micro-house" => Ok(Service::MicroHouse),
            "tiny-house" => Ok(Service::TinyHouse),
            "custom-project" => Ok(Service::CustomProject),
            other => Err(format!("Unknown service: {}", other)),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow stage of a contact request.
///
/// A freshly submitted request is `New`. The first staff read advances it to
/// `Todo` automatically (see `commands::show`); staff edits may set any
/// value, but nothing ever auto-reverts a request to `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    New,
    Todo,
    Inprogress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::New,
        Status::Todo,
        Status::Inprogress,
        Status::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::Todo => "todo",
            Status::Inprogress => "inprogress",
            Status::Completed => "completed",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "new" => Ok(Status::New),
            "todo" => Ok(Status::Todo),
            "inprogress" => Ok(Status::Inprogress),
            "completed" => Ok(Status::Completed),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submitted inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Service,
    pub message: String,
    pub status: Status,
    pub referral_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A contact ready for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Service,
    pub message: String,
    pub status: Status,
    pub referral_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A staff annotation attached to exactly one contact. Never edited in
/// place; only created and deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub contact_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A contact together with its notes, as returned by `show`.
#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub contact: Contact,
    pub notes: Vec<Note>,
}
