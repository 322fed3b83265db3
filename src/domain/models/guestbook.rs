use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Approved,
    Rejected,
}

impl EntryStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(EntryStatus::Pending),
            "approved" => Some(EntryStatus::Approved),
            "rejected" => Some(EntryStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GuestbookForm {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct NewGuestbookEntry {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GuestbookEntry {
    pub id: String,
    pub name: String,
    pub message: String,
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
    pub moderated_at: Option<DateTime<Utc>>,
}

impl GuestbookEntry {
    pub fn new(id: String, entry: NewGuestbookEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: entry.name,
            message: entry.message,
            status: EntryStatus::Pending,
            created_at,
            moderated_at: None,
        }
    }
}
