use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewContact, Service, Status};
use crate::store::ContactStore;
use chrono::{Duration, Utc};

pub const DEFAULT_COUNT: usize = 40;

const NAMES: [&str; 8] = [
    "Olena Shevchenko",
    "Marcus Webb",
    "Ingrid Larsen",
    "Tomás Herrera",
    "Aiko Tanaka",
    "Pieter van Dijk",
    "Sofia Rossi",
    "Declan Murphy",
];

const PHONES: [&str; 3] = ["+380 99 123 4567", "+380 67 765 4321", "+1 555 867 5309"];

const MESSAGES: [&str; 4] = [
    "Looking for a backyard sauna, roughly 2x3 meters, cedar if possible.",
    "We own a small plot by the lake and want a tiny house for weekends.",
    "Interested in a micro house as a home office. What are lead times?",
    "Custom project: a floating sauna raft. Is that something you build?",
];

/// Populate the store with generated demo contacts. Deterministic: fixed
/// pools cycled by index, timestamps spread backwards one day apart.
pub fn run<S: ContactStore>(store: &mut S, count: usize) -> Result<CmdResult> {
    let now = Utc::now();

    for i in 0..count {
        let name = NAMES[i % NAMES.len()];
        let created = now - Duration::days(i as i64 + 1);
        store.insert_contact(&NewContact {
            name: name.to_string(),
            email: format!(
                "{}{}@example.com",
                name.split_whitespace().next().unwrap_or("demo").to_lowercase(),
                i
            ),
            phone: PHONES[i % PHONES.len()].to_string(),
            service: Service::ALL[i % Service::ALL.len()],
            message: MESSAGES[i % MESSAGES.len()].to_string(),
            status: Status::ALL[i % Status::ALL.len()],
            referral_code: if i % 5 == 0 {
                Some("DEMO".to_string())
            } else {
                None
            },
            created_at: created,
            updated_at: created + Duration::hours(6),
        })?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Seeded {} contacts", count)));
    Ok(result)
}
