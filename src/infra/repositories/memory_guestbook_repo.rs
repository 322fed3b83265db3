use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::domain::{
    models::guestbook::{EntryStatus, GuestbookEntry, NewGuestbookEntry},
    ports::{Clock, GuestbookRepository},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

pub struct InMemoryGuestbookRepo {
    clock: Arc<dyn Clock>,
    next_id: AtomicU64,
    rows: RwLock<Vec<GuestbookEntry>>,
}

impl InMemoryGuestbookRepo {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            next_id: AtomicU64::new(1),
            rows: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GuestbookRepository for InMemoryGuestbookRepo {
    async fn append(&self, entry: NewGuestbookEntry) -> Result<GuestbookEntry, AppError> {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = GuestbookEntry::new(format!("GB-{}", n), entry, self.clock.now());

        self.rows.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn all(&self) -> Result<Vec<GuestbookEntry>, AppError> {
        Ok(self.rows.read().await.clone())
    }

    async fn list_by_status(&self, status: EntryStatus) -> Result<Vec<GuestbookEntry>, AppError> {
        Ok(self.rows.read().await
            .iter()
            .filter(|e| e.status == status)
            .cloned()
            .collect())
    }

    async fn set_status(&self, id: &str, status: EntryStatus, at: DateTime<Utc>) -> Result<GuestbookEntry, AppError> {
        let mut rows = self.rows.write().await;
        let entry = rows.iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound("Guestbook entry not found".into()))?;

        entry.status = status;
        entry.moderated_at = Some(at);
        Ok(entry.clone())
    }
}
