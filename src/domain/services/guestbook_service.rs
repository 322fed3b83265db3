use std::sync::Arc;
use crate::domain::{
    models::guestbook::{EntryStatus, GuestbookEntry, GuestbookForm, NewGuestbookEntry},
    ports::{Clock, GuestbookRepository},
    services::{rate_limiter::SlidingWindowRateLimiter, sanitizer::sanitize, validation::validate_name},
};
use crate::error::AppError;
use tracing::{info, warn};

pub const MESSAGE_MAX_CHARS: usize = 1000;

pub struct GuestbookService {
    repo: Arc<dyn GuestbookRepository>,
    limiter: Arc<SlidingWindowRateLimiter>,
    clock: Arc<dyn Clock>,
}

impl GuestbookService {
    pub fn new(
        repo: Arc<dyn GuestbookRepository>,
        limiter: Arc<SlidingWindowRateLimiter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, limiter, clock }
    }

    /// New entries wait in `Pending` until a moderator approves them.
    pub async fn sign(&self, client_id: &str, form: GuestbookForm) -> Result<GuestbookEntry, AppError> {
        if !self.limiter.check_and_record(client_id) {
            let retry_after_secs = self.limiter.retry_after(client_id).as_secs_f64().ceil() as u64;
            warn!(client_id, retry_after_secs, "Guestbook rate limited");
            return Err(AppError::RateLimited { retry_after_secs });
        }

        let name = sanitize(&form.name);
        let message = sanitize(&form.message);

        if let Some(e) = validate_name(&name) {
            return Err(AppError::Validation(e));
        }
        if message.is_empty() {
            return Err(AppError::Validation("Message is required".into()));
        }
        if message.chars().count() > MESSAGE_MAX_CHARS {
            return Err(AppError::Validation(format!("Message must be at most {} characters", MESSAGE_MAX_CHARS)));
        }

        let entry = self.repo.append(NewGuestbookEntry { name, message }).await?;
        info!(entry_id = %entry.id, "Guestbook entry received");
        Ok(entry)
    }

    pub async fn approved(&self) -> Result<Vec<GuestbookEntry>, AppError> {
        self.repo.list_by_status(EntryStatus::Approved).await
    }

    pub async fn all(&self) -> Result<Vec<GuestbookEntry>, AppError> {
        self.repo.all().await
    }

    pub async fn moderate(&self, id: &str, status: EntryStatus) -> Result<GuestbookEntry, AppError> {
        if status == EntryStatus::Pending {
            return Err(AppError::Validation("Entries can only be approved or rejected".into()));
        }
        let entry = self.repo.set_status(id, status, self.clock.now()).await?;
        info!(entry_id = %entry.id, status = ?entry.status, "Guestbook entry moderated");
        Ok(entry)
    }
}
