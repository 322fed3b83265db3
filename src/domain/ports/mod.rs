use crate::domain::models::{
    rsvp::{NewRsvp, RsvpSubmission},
    guestbook::{EntryStatus, GuestbookEntry, NewGuestbookEntry},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Append-only store of accepted RSVPs.
#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn append(&self, rsvp: NewRsvp) -> Result<RsvpSubmission, AppError>;
    async fn all(&self) -> Result<Vec<RsvpSubmission>, AppError>;
}

#[async_trait]
pub trait GuestbookRepository: Send + Sync {
    async fn append(&self, entry: NewGuestbookEntry) -> Result<GuestbookEntry, AppError>;
    async fn all(&self) -> Result<Vec<GuestbookEntry>, AppError>;
    async fn list_by_status(&self, status: EntryStatus) -> Result<Vec<GuestbookEntry>, AppError>;
    async fn set_status(&self, id: &str, status: EntryStatus, at: DateTime<Utc>) -> Result<GuestbookEntry, AppError>;
}
